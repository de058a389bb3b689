//! Python calling examples for plugins.

use super::{
    sections::{CallConvention, call_convention},
    table::ParameterTable,
};
use crate::registry::Category;

/// Builds the code lines showing how to call a plugin from Python.
///
/// Every line is indented by two spaces so that the result can follow a
/// `::` literal block marker. The returned text ends with a blank line.
pub fn python_snippet(category: &Category, plugin_name: &str, table: &ParameterTable) -> String {
    let convention = call_convention(category);
    let mut code = String::new();

    code.push_str("  # get a dictionary filled with the default plugin parameters values\n");
    if convention == Some(CallConvention::Import) {
        code.push_str(&format!(
            "  params = tlp.getDefaultPluginParameters('{plugin_name}')\n\n"
        ));
    } else {
        code.push_str("  # graph is an instance of the tlp.Graph class\n");
        code.push_str(&format!(
            "  params = tlp.getDefaultPluginParameters('{plugin_name}', graph)\n\n"
        ));
    }

    if table.input_count > 0 && !table.is_single_result() {
        code.push_str("  # set any input parameter value if needed\n");
        for row in &table.rows {
            code.push_str(&format!("  # params['{}'] = ...\n", row.name));
        }
        code.push('\n');
    }

    match convention {
        Some(CallConvention::Import) => {
            code.push_str(&format!("  graph = tlp.importGraph('{plugin_name}', params)\n"));
        }
        Some(CallConvention::Export) => {
            code.push_str("  outputFile = '<path to a file>'\n");
            code.push_str(&format!(
                "  success = tlp.exportGraph('{plugin_name}', graph, outputFile, params)\n"
            ));
        }
        Some(CallConvention::General) => {
            code.push_str(&format!(
                "  success = graph.applyAlgorithm('{plugin_name}', params)\n\n"
            ));
        }
        Some(CallConvention::Property(call)) => {
            code.push_str(&format!(
                "  # either create or get a {} property from the graph to store the result \
                 of the algorithm\n",
                call.kind
            ));
            code.push_str(&format!(
                "  {result} = graph.{getter}('{result}')\n",
                result = call.result_name,
                getter = call.getter
            ));
            code.push_str(&format!(
                "  success = graph.{}('{plugin_name}', {}, params)\n\n",
                call.apply_method, call.result_name
            ));
            code.push_str(&format!(
                "  # or store the result of the algorithm in the default Talipot {} property \
                 named '{}'\n",
                call.default_kind, call.default_property
            ));
            code.push_str(&format!(
                "  success = graph.{}('{plugin_name}', params)\n\n",
                call.apply_method
            ));
        }
        None => {}
    }

    code.push_str(
        "  # if the plugin declare any output parameter, its value can now be retrieved \
         in the 'params' dictionary\n\n",
    );

    code
}
