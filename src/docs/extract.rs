//! Sub-field extraction from parameter help payloads.

const HELP_START: &str = "<p class=\"help\">";
const HELP_END: &str = "</p>";
const TYPE_START: &str = "<b>type</b><td class=\"b\">";
const VALUES_START: &str = "<b>values</b><td class=\"b\">";
const CELL_END: &str = "</td>";
const DOUBLE_PRECISION_SUFFIX: &str = " (double precision)";

/// Sub-fields found in a help payload.
///
/// `None` means the start sentinel of the sub-field is not in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpFields {
    /// Descriptive help block.
    pub help: Option<String>,
    /// Restated type name, without the double precision qualifier.
    pub type_name: Option<String>,
    /// Allowed values enumeration.
    pub values: Option<String>,
}

impl HelpFields {
    /// Help text, empty when absent.
    pub fn help_text(&self) -> &str {
        self.help.as_deref().unwrap_or_default()
    }

    /// Type name, empty when absent.
    pub fn type_text(&self) -> &str {
        self.type_name.as_deref().unwrap_or_default()
    }

    /// Allowed values, empty when absent.
    pub fn values_text(&self) -> &str {
        self.values.as_deref().unwrap_or_default()
    }
}

/// Extracts the help, type and values sub-fields of a help payload.
pub fn extract_help_fields(payload: &str) -> HelpFields {
    HelpFields {
        help: extract_between(payload, HELP_START, HELP_END).map(str::to_string),
        type_name: extract_between(payload, TYPE_START, CELL_END)
            .map(|type_name| type_name.replace(DOUBLE_PRECISION_SUFFIX, "")),
        values: extract_between(payload, VALUES_START, CELL_END).map(str::to_string),
    }
}

/// Returns the text between the first `start` and the first `end` after it.
///
/// A missing `end` extends the field to the end of the payload.
pub fn extract_between<'a>(payload: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = payload.find(start)? + start.len();
    let rest = &payload[from..];

    Some(rest.find(end).map_or(rest, |to| &rest[..to]))
}
