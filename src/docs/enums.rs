use crate::docs::types::AttrInfo;
use crate::package::Class;

const ENUM_BASE: &str = "Enum";

pub struct EnumParser;

impl EnumParser {
    /// True when one of the declared bases is spelled exactly `Enum`.
    pub fn is_enum_class(class: &Class) -> bool {
        class.bases.iter().any(|base| base == ENUM_BASE)
    }

    /// Public class-level constants of an enum, in declaration order.
    pub fn parse_enum_members(class: &Class) -> Vec<AttrInfo> {
        class
            .attributes
            .values()
            .filter(|attr| !attr.is_private() && attr.is_class_attribute())
            .map(|attr| AttrInfo {
                name: attr.name.clone(),
                annotation: String::new(),
                docstring: attr.docstring.clone(),
                default: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{Attribute, AttributeLabel};

    fn direction() -> Class {
        let mut class = Class::new("Direction");
        class.bases.push("Enum".to_string());
        class.add_attribute(
            Attribute::new("NORTH", AttributeLabel::ClassAttribute)
                .with_value("0")
                .with_docstring("Up."),
        );
        class.add_attribute(Attribute::new("SOUTH", AttributeLabel::ClassAttribute).with_value("1"));
        class.add_attribute(Attribute::new("_ignore_", AttributeLabel::ClassAttribute));
        class.add_attribute(Attribute::new("label", AttributeLabel::InstanceAttribute));
        class
    }

    #[test]
    fn test_is_enum_class() {
        assert!(EnumParser::is_enum_class(&direction()));

        let mut plain = Class::new("Plain");
        plain.bases.push("Base".to_string());
        assert!(!EnumParser::is_enum_class(&plain));
        assert!(!EnumParser::is_enum_class(&Class::new("NoBases")));
    }

    #[test]
    fn test_qualified_base_is_not_enum() {
        let mut class = Class::new("Qualified");
        class.bases.push("enum.Enum".to_string());
        assert!(!EnumParser::is_enum_class(&class));
    }

    #[test]
    fn test_parse_enum_members() {
        let members = EnumParser::parse_enum_members(&direction());

        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["NORTH", "SOUTH"]);
        assert_eq!(members[0].docstring.as_deref(), Some("Up."));
        assert_eq!(members[0].annotation, "");
        assert_eq!(members[0].default, None);
        assert_eq!(members[1].docstring, None);
    }
}
