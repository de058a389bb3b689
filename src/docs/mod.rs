//! reStructuredText documentation of registered plugins.
//!
//! Every documented plugin gets a description, a table of its parameters
//! built from their HTML help payloads, and an example showing how to call
//! it from Python. Plugins are grouped into one section per category.

mod extract;
mod generator;
mod markup;
mod rst;
mod sections;
mod snippet;
mod table;
mod types;

pub use extract::{HelpFields, extract_between, extract_help_fields};
pub use generator::{
    CategoryGroups, DEFAULT_OUTPUT, DocsError, DocsGenerator, group_by_category,
};
pub use markup::{HtmlTag, translate_markup};
pub use rst::{DocumentWriter, PREAMBLE, SectionLevel, grid_table};
pub use sections::{CallConvention, PropertyCall, anchor, call_convention, introduction};
pub use snippet::python_snippet;
pub use table::{
    ParameterTable, RenderedParameterRow, TABLE_HEADERS, build_parameter_table, format_default,
};
pub use types::python_type_reference;
