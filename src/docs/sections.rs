//! Per-category documentation tables: anchors, introductions and calling
//! conventions.

use crate::registry::Category;

/// How a property algorithm is called from Python.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyCall {
    /// Property kind named in the explicit form comment.
    pub kind: &'static str,
    /// `tlp.Graph` getter returning the result property.
    pub getter: &'static str,
    /// Variable and property name used in the explicit form.
    pub result_name: &'static str,
    /// `tlp.Graph` method applying the algorithm.
    pub apply_method: &'static str,
    /// Property kind named in the default form comment.
    pub default_kind: &'static str,
    /// Name of the default view property.
    pub default_property: &'static str,
}

/// Calling convention of a plugin category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallConvention {
    /// `tlp.importGraph`
    Import,
    /// `tlp.exportGraph`
    Export,
    /// `tlp.Graph.applyAlgorithm`
    General,
    /// One of the typed `tlp.Graph.apply*Algorithm` methods.
    Property(PropertyCall),
}

/// Returns the calling convention of a category, if it has one.
pub fn call_convention(category: &Category) -> Option<CallConvention> {
    let property = |kind, getter, result_name, apply_method, default_kind, default_property| {
        Some(CallConvention::Property(PropertyCall {
            kind,
            getter,
            result_name,
            apply_method,
            default_kind,
            default_property,
        }))
    };

    match category {
        Category::Algorithm => Some(CallConvention::General),
        Category::Import => Some(CallConvention::Import),
        Category::Export => Some(CallConvention::Export),
        Category::Layout => property(
            "layout",
            "getLayoutProperty",
            "resultLayout",
            "applyLayoutAlgorithm",
            "layout",
            "viewLayout",
        ),
        Category::Measure => property(
            "double",
            "getDoubleProperty",
            "resultMetric",
            "applyDoubleAlgorithm",
            "metric",
            "viewMetric",
        ),
        Category::Coloring => property(
            "color",
            "getColorProperty",
            "resultColor",
            "applyColorAlgorithm",
            "color",
            "viewColor",
        ),
        Category::Resizing => property(
            "size",
            "getSizeProperty",
            "resultSize",
            "applySizeAlgorithm",
            "size",
            "viewSize",
        ),
        Category::Selection => property(
            "boolean",
            "getBooleanProperty",
            "resultSelection",
            "applyBooleanAlgorithm",
            "boolean",
            "viewSelection",
        ),
        Category::Labeling => property(
            "string",
            "getStringProperty",
            "resultString",
            "applyStringAlgorithm",
            "string",
            "viewLabel",
        ),
        Category::Panel
        | Category::NodeShape
        | Category::EdgeExtremity
        | Category::Interactor
        | Category::Other(_) => None,
    }
}

/// Cross-reference label of a category section.
pub fn anchor(category: &Category) -> Option<&'static str> {
    match category {
        Category::Algorithm => Some("algorithmpluginsdoc"),
        Category::Coloring => Some("colorpluginsdoc"),
        Category::Export => Some("exportpluginsdoc"),
        Category::Import => Some("importpluginsdoc"),
        Category::Labeling => Some("stringpluginsdoc"),
        Category::Layout => Some("layoutpluginsdoc"),
        Category::Measure => Some("doublepluginsdoc"),
        Category::Resizing => Some("sizepluginsdoc"),
        Category::Selection => Some("booleanpluginsdoc"),
        Category::Panel
        | Category::NodeShape
        | Category::EdgeExtremity
        | Category::Interactor
        | Category::Other(_) => None,
    }
}

/// Introductory text of a category section.
pub fn introduction(category: &Category) -> Option<String> {
    let text = match call_convention(category)? {
        CallConvention::Import => {
            "To call these plugins, you must use the :func:`tlp.importGraph` function.".to_string()
        }
        CallConvention::Export => {
            "To call these plugins, you must use the :func:`tlp.exportGraph` function.".to_string()
        }
        CallConvention::General => "To call these plugins, you must use the \
            :meth:`tlp.Graph.applyAlgorithm` method. See also \
            :ref:`Calling a general algorithm on a graph <callGeneralAlgorithm>` \
            for more details."
            .to_string(),
        CallConvention::Property(call) => format!(
            "To call these plugins, you must use the :meth:`tlp.Graph.{}` method. \
             See also :ref:`Calling a property algorithm on a graph <callPropertyAlgorithm>` \
             for more details.",
            call.apply_method
        ),
    };

    Some(text)
}
