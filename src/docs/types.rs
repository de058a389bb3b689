//! Mapping of parameter type names to Sphinx cross-references.

const CLASS_TYPES: [&str; 12] = [
    "BooleanProperty",
    "ColorProperty",
    "DoubleProperty",
    "IntegerProperty",
    "LayoutProperty",
    "SizeProperty",
    "StringProperty",
    "NumericProperty",
    "PropertyInterface",
    "StringCollection",
    "ColorScale",
    "Color",
];

/// Returns the cross-reference token documenting `type_name`.
///
/// Unknown type names are returned unchanged.
pub fn python_type_reference(type_name: &str) -> String {
    if CLASS_TYPES.contains(&type_name) {
        return format!(":class:`tlp.{type_name}`");
    }

    if type_name == "Boolean" {
        ":const:`bool`".to_string()
    } else if type_name.starts_with("float") {
        ":const:`float`".to_string()
    } else if type_name.contains("integer") {
        ":const:`int`".to_string()
    } else if type_name == "string" {
        ":const:`str`".to_string()
    } else {
        type_name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_types_reference_their_class() {
        assert_eq!(
            python_type_reference("LayoutProperty"),
            ":class:`tlp.LayoutProperty`"
        );
        assert_eq!(python_type_reference("Color"), ":class:`tlp.Color`");
        assert_eq!(
            python_type_reference("StringCollection"),
            ":class:`tlp.StringCollection`"
        );
    }

    #[test]
    fn primitive_types_reference_builtins() {
        assert_eq!(python_type_reference("Boolean"), ":const:`bool`");
        assert_eq!(python_type_reference("integer32"), ":const:`int`");
        assert_eq!(python_type_reference("unsigned\u{a0}integer"), ":const:`int`");
        assert_eq!(python_type_reference("floatingpoint"), ":const:`float`");
        assert_eq!(
            python_type_reference("floating\u{a0}point\u{a0}number"),
            ":const:`float`"
        );
        assert_eq!(python_type_reference("string"), ":const:`str`");
    }

    #[test]
    fn unknown_types_pass_through() {
        assert_eq!(python_type_reference("FooBarType"), "FooBarType");
        assert_eq!(
            python_type_reference("file\u{a0}pathname"),
            "file\u{a0}pathname"
        );
        assert_eq!(python_type_reference("String"), "String");
    }
}
