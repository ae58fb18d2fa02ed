use indexmap::IndexMap;

use crate::docs::docstring::parse_attr_descriptions;
use crate::docs::types::AttrInfo;
use crate::package::Attribute;

/// Whether an attribute's value text mentions the attribute's own name.
///
/// This is a plain substring test, so it catches the usual
/// `self.speed = speed` but also `self.id = uuid()` (`id` is inside
/// `uuid`) and `self.size = size * 2`. Such values are dropped as
/// defaults because they are usually the constructor argument, not a
/// literal default.
pub fn default_echoes_name(name: &str, value: &str) -> bool {
    value.contains(name)
}

pub struct AttributeParser;

impl AttributeParser {
    /// Public instance attributes of a class.
    ///
    /// Descriptions from the docstring's `Attributes:` section take
    /// precedence over the attribute's own docstring.
    pub fn parse_attributes(
        attrs: &IndexMap<String, Attribute>,
        class_docstring: Option<&str>,
    ) -> Vec<AttrInfo> {
        let descriptions = parse_attr_descriptions(class_docstring);

        attrs
            .values()
            .filter(|attr| !attr.is_private() && !attr.is_class_attribute())
            .map(|attr| AttrInfo {
                name: attr.name.clone(),
                annotation: attr.annotation.clone().unwrap_or_default(),
                docstring: descriptions
                    .get(&attr.name)
                    .filter(|d| !d.is_empty())
                    .cloned()
                    .or_else(|| attr.docstring.clone()),
                default: attr
                    .value
                    .as_deref()
                    .filter(|value| !default_echoes_name(&attr.name, value))
                    .map(str::to_string),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::AttributeLabel;

    fn attrs(list: Vec<Attribute>) -> IndexMap<String, Attribute> {
        list.into_iter().map(|a| (a.name.clone(), a)).collect()
    }

    #[test]
    fn test_default_echoes_name_cases() {
        let cases = [
            ("speed", "speed", true),
            ("size", "size * 2", true),
            ("id", "uuid()", true),
            ("x", "0", false),
            ("health", "100", false),
            ("name", "\"robot\"", false),
            ("x", "", false),
        ];

        for (name, value, expected) in cases {
            assert_eq!(
                default_echoes_name(name, value),
                expected,
                "name={name:?} value={value:?}"
            );
        }
    }

    #[test]
    fn test_parse_skips_private_and_class_attributes() {
        let parsed = AttributeParser::parse_attributes(
            &attrs(vec![
                Attribute::new("x", AttributeLabel::InstanceAttribute).with_annotation("int"),
                Attribute::new("_hidden", AttributeLabel::InstanceAttribute),
                Attribute::new("MAX", AttributeLabel::ClassAttribute).with_value("3"),
            ]),
            None,
        );

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "x");
        assert_eq!(parsed[0].annotation, "int");
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = AttributeParser::parse_attributes(
            &attrs(vec![
                Attribute::new("x", AttributeLabel::InstanceAttribute).with_value("x"),
                Attribute::new("energy", AttributeLabel::InstanceAttribute).with_value("100"),
                Attribute::new("y", AttributeLabel::InstanceAttribute),
            ]),
            None,
        );

        assert_eq!(parsed[0].default, None);
        assert_eq!(parsed[1].default.as_deref(), Some("100"));
        assert_eq!(parsed[2].default, None);
        assert_eq!(parsed[2].annotation, "");
    }

    #[test]
    fn test_docstring_section_takes_precedence() {
        let parsed = AttributeParser::parse_attributes(
            &attrs(vec![
                Attribute::new("x", AttributeLabel::InstanceAttribute)
                    .with_docstring("Inline x."),
                Attribute::new("y", AttributeLabel::InstanceAttribute)
                    .with_docstring("Inline y."),
                Attribute::new("z", AttributeLabel::InstanceAttribute),
            ]),
            Some("Summary.\nAttributes:\n    x: From the section."),
        );

        assert_eq!(parsed[0].docstring.as_deref(), Some("From the section."));
        assert_eq!(parsed[1].docstring.as_deref(), Some("Inline y."));
        assert_eq!(parsed[2].docstring, None);
    }
}
