//! HTML help payload synthesis for plugin parameters.
//!
//! Plugins describe their parameters with a small HTML document: a table
//! of `type`, `values`, `default` and `direction` rows followed by a help
//! paragraph. Manifests may either carry that document verbatim or just
//! the plain help text, in which case the document is built here.

use super::Direction;

/// Opening of every generated help payload.
pub const HTML_HELP_OPEN: &str = "<!DOCTYPE html><html><head><style type=\"text/css\">\
.body { font-family: sans-serif; } \
.paramtable { width: 100%; border: 0px; border-bottom: 1px solid #C9C9C9; padding: 5px; } \
.help { font-style: italic; font-size: 90%; } \
.b { padding-left: 5px; }</style></head><body><table border=\"0\" class=\"paramtable\">";

/// Separator between the definition table and the help paragraph.
pub const HTML_HELP_BODY: &str = "</table><p class=\"help\">";

/// Closing of every generated help payload.
pub const HTML_HELP_CLOSE: &str = "</p></body></html>";

const STRING_COLLECTION_TYPE: &str = "StringCollection";

fn help_def(label: &str, value: &str) -> String {
    format!("<tr><td><b>{label}</b><td class=\"b\">{value}</td></tr>")
}

/// Returns the human readable type name shown in a help payload.
///
/// Path hints in the parameter name take precedence over the type id.
pub fn display_type_name(name: &str, type_id: &str) -> String {
    if name.starts_with("file::") || name.starts_with("anyfile::") {
        return "file pathname".to_string();
    }
    if name.starts_with("dir::") {
        return "directory pathname".to_string();
    }

    match type_id {
        "bool" => "Boolean".to_string(),
        "int" => "integer".to_string(),
        "unsigned int" => "unsigned integer".to_string(),
        "float" => "floating point number".to_string(),
        "double" => "floating point number (double precision)".to_string(),
        "string" => "string".to_string(),
        other => other.strip_suffix('*').unwrap_or(other).to_string(),
    }
}

/// Builds the HTML help payload of a parameter.
///
/// A `help` text that is already a full payload is returned untouched.
pub fn parameter_help_payload(
    name: &str,
    help: &str,
    type_id: &str,
    default_value: &str,
    values: &str,
    direction: Direction,
) -> String {
    if help.starts_with(HTML_HELP_OPEN) || help.starts_with("<!DOCTYPE html>") {
        return help.to_string();
    }

    let mut doc = String::from(HTML_HELP_OPEN);
    doc.push_str(&help_def("type", &display_type_name(name, type_id)));

    if !values.is_empty() {
        doc.push_str(&help_def("values", values));
    }

    if !default_value.is_empty() {
        let shown = if type_id == STRING_COLLECTION_TYPE {
            default_value
                .split_once(';')
                .map_or(default_value, |(selected, _)| selected)
        } else {
            default_value
        };
        doc.push_str(&help_def("default", shown));
    }

    let direction_label = match direction {
        Direction::In => "input",
        Direction::Out => "output",
        Direction::InOut => "input/output",
    };
    doc.push_str(&help_def("direction", direction_label));

    if !help.is_empty() {
        doc.push_str(HTML_HELP_BODY);
        doc.push_str(help);
    }

    doc.push_str(HTML_HELP_CLOSE);
    doc
}
