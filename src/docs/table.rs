use super::{
    extract::extract_help_fields, markup::translate_markup, rst::grid_table,
    types::python_type_reference,
};
use crate::registry::{ParameterDescriptor, help::display_type_name};

/// Column headers of the rendered parameter table.
pub const TABLE_HEADERS: [&str; 5] = ["name", "type", "default", "direction", "description"];

const NON_BREAKING_SPACE: &str = "\u{a0}";
const PATH_HINT_PREFIXES: [&str; 3] = ["anyfile::", "file::", "dir::"];
const STRING_COLLECTION: &str = "StringCollection";

/// One rendered line of a plugin parameter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParameterRow {
    /// Parameter name without path hint.
    pub name: String,
    /// Cross-reference to the parameter type.
    pub type_ref: String,
    /// Formatted default value, followed by the allowed values if any.
    pub default: String,
    /// `input`, `output` or `input / output`.
    pub direction: String,
    /// Help text translated to reST.
    pub description: String,
}

/// Rendered parameters of one plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    /// Rows, in parameter declaration order.
    pub rows: Vec<RenderedParameterRow>,
    /// Number of parameters that are not pure outputs.
    pub input_count: usize,
}

impl ParameterTable {
    /// Whether no parameter made it into the table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the table holds a single row named `result`.
    pub fn is_single_result(&self) -> bool {
        matches!(self.rows.as_slice(), [row] if row.name == "result")
    }

    /// Renders the table as a reST grid table.
    pub fn to_grid(&self) -> String {
        let rows: Vec<Vec<&str>> = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.name.as_str(),
                    row.type_ref.as_str(),
                    row.default.as_str(),
                    row.direction.as_str(),
                    row.description.as_str(),
                ]
            })
            .collect();

        grid_table(&TABLE_HEADERS, &rows)
    }
}

/// Builds the parameter table of a plugin.
///
/// A `result` parameter holding a property is left out since it is the
/// property the algorithm writes into.
pub fn build_parameter_table(params: &[ParameterDescriptor]) -> ParameterTable {
    let mut table = ParameterTable::default();

    for param in params {
        let fields = extract_help_fields(&param.help);
        let type_name = fields
            .type_name
            .clone()
            .unwrap_or_else(|| display_type_name(&param.name, &param.type_name));

        if param.name == "result" && type_name.contains("Property") {
            continue;
        }

        if param.direction.counts_as_input() {
            table.input_count += 1;
        }

        let values = translate_markup(fields.values_text());
        let help = fields.help.as_deref().map(translate_markup).unwrap_or_default();

        table.rows.push(RenderedParameterRow {
            name: non_breaking(strip_path_hint(&param.name)),
            type_ref: python_type_reference(&non_breaking(&type_name)),
            default: format_default(&param.default_value, &type_name, &values),
            direction: non_breaking(param.direction.label()),
            description: help,
        });
    }

    table
}

/// Formats the default value cell of a parameter.
///
/// String collections encode `selected;other;...`, only the selected entry
/// is shown. Boolean literals become cross-references.
pub fn format_default(raw: &str, type_name: &str, values: &str) -> String {
    let mut default = if type_name == STRING_COLLECTION {
        raw.split(';').next().unwrap_or_default().to_string()
    } else {
        raw.replace("false", ":const:`False`")
            .replace("true", ":const:`True`")
    };

    if !values.is_empty() {
        default.push_str(" |br| |br| |bstart| Values: |bend| |br| ");
        default.push_str(values);
    }

    default
}

fn strip_path_hint(name: &str) -> &str {
    PATH_HINT_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

fn non_breaking(text: &str) -> String {
    text.replace(' ', NON_BREAKING_SPACE)
}
