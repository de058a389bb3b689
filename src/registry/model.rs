use std::{cmp::Ordering, fmt};

/// Functional classification of a plugin.
///
/// Drives the documentation section a plugin lands in and the calling
/// convention shown in its example snippet. Ordering follows the label so
/// that sections come out alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// General algorithm applied with `applyAlgorithm`.
    Algorithm,
    /// Color property algorithm.
    Coloring,
    /// Graph export plugin.
    Export,
    /// Graph import plugin.
    Import,
    /// String property algorithm.
    Labeling,
    /// Layout property algorithm.
    Layout,
    /// Double property algorithm.
    Measure,
    /// Size property algorithm.
    Resizing,
    /// Boolean property algorithm.
    Selection,
    /// GUI panel.
    Panel,
    /// GUI node glyph.
    NodeShape,
    /// GUI edge extremity glyph.
    EdgeExtremity,
    /// GUI interactor.
    Interactor,
    /// Any category label this crate does not know about.
    Other(String),
}

impl Category {
    /// Every known category, in label order.
    pub const KNOWN: [Category; 13] = [
        Category::Algorithm,
        Category::Coloring,
        Category::EdgeExtremity,
        Category::Export,
        Category::Import,
        Category::Interactor,
        Category::Labeling,
        Category::Layout,
        Category::Measure,
        Category::NodeShape,
        Category::Panel,
        Category::Resizing,
        Category::Selection,
    ];

    /// Returns the category label as registered by plugins.
    pub fn label(&self) -> &str {
        match self {
            Category::Algorithm => "Algorithm",
            Category::Coloring => "Coloring",
            Category::Export => "Export",
            Category::Import => "Import",
            Category::Labeling => "Labeling",
            Category::Layout => "Layout",
            Category::Measure => "Measure",
            Category::Resizing => "Resizing",
            Category::Selection => "Selection",
            Category::Panel => "Panel",
            Category::NodeShape => "Node shape",
            Category::EdgeExtremity => "Edge extremity",
            Category::Interactor => "Interactor",
            Category::Other(label) => label,
        }
    }

    /// Parses a category label. Unknown labels are kept verbatim.
    pub fn parse(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|category| category.label() == label)
            .cloned()
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }

    /// UI-only categories never get a documentation section.
    pub fn is_ui_only(&self) -> bool {
        matches!(
            self,
            Category::Panel | Category::NodeShape | Category::EdgeExtremity | Category::Interactor
        )
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a plugin parameter is consumed, produced, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Input parameter.
    #[default]
    In,
    /// Output parameter.
    Out,
    /// Input and output parameter. Also used for unrecognized markers.
    InOut,
}

impl Direction {
    /// Parses a direction marker; anything unrecognized is `InOut`.
    pub fn parse(marker: &str) -> Self {
        match marker.trim().to_ascii_lowercase().as_str() {
            "in" | "input" => Direction::In,
            "out" | "output" => Direction::Out,
            _ => Direction::InOut,
        }
    }

    /// Label used in the rendered parameter table.
    pub fn label(self) -> &'static str {
        match self {
            Direction::In => "input",
            Direction::Out => "output",
            Direction::InOut => "input / output",
        }
    }

    /// Parameters that are not strictly outputs count as inputs.
    pub fn counts_as_input(self) -> bool {
        !matches!(self, Direction::Out)
    }
}

/// Metadata of one registered plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Unique plugin name.
    pub name: String,
    /// Plugin category.
    pub category: Category,
    /// Free-text description, may contain presentational HTML.
    pub info: String,
    /// Plugin group inside its category, if declared.
    pub group: Option<String>,
}

impl PluginInfo {
    /// Name followed by the group in parentheses, when there is one.
    pub fn listing_label(&self) -> String {
        match &self.group {
            Some(group) if !group.is_empty() => format!("{} ({})", self.name, group),
            _ => self.name.clone(),
        }
    }
}

/// Live description of one plugin parameter.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Parameter name, possibly carrying a `file::` or `dir::` hint.
    pub name: String,
    /// Parameter direction.
    pub direction: Direction,
    /// Default value, encoded as a string.
    pub default_value: String,
    /// Declared type name.
    pub type_name: String,
    /// HTML help payload embedding type, values and help sub-fields.
    pub help: String,
}
