use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTES_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Attributes:\s*(.+?)(?:\n\n|\n?\z)").expect("valid regex"));
static ATTRIBUTE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\w+)\s*:\s*(.+)$").expect("valid regex"));

/// Parse the `Attributes:` section of a class docstring into name → description.
///
/// The section runs until the first blank line or the end of the docstring.
/// Lines that are not `name: description` are ignored.
pub fn parse_attr_descriptions(class_docstring: Option<&str>) -> HashMap<String, String> {
    let mut descriptions = HashMap::new();

    let Some(docstring) = class_docstring.filter(|d| !d.is_empty()) else {
        return descriptions;
    };
    let Some(section) = ATTRIBUTES_SECTION.captures(docstring) else {
        return descriptions;
    };

    for line in section[1].trim().lines() {
        if let Some(caps) = ATTRIBUTE_LINE.captures(line) {
            descriptions.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
    }

    descriptions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_attribute() {
        let descriptions = parse_attr_descriptions(Some("Attributes:\n    x: the x value"));
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions["x"], "the x value");
    }

    #[test]
    fn test_parse_after_summary() {
        let doc = "Short summary.\nAttributes:\n    x: desc\n    y_pos: vertical position  ";
        let descriptions = parse_attr_descriptions(Some(doc));
        assert_eq!(descriptions["x"], "desc");
        assert_eq!(descriptions["y_pos"], "vertical position");
    }

    #[test]
    fn test_section_ends_at_blank_line() {
        let doc = "Summary.\n\nAttributes:\n    x: desc\n\nNotes:\n    y: not an attribute";
        let descriptions = parse_attr_descriptions(Some(doc));
        assert_eq!(descriptions.len(), 1);
        assert!(descriptions.contains_key("x"));
    }

    #[test]
    fn test_header_is_case_insensitive() {
        let descriptions = parse_attr_descriptions(Some("ATTRIBUTES:\n    x: desc\n"));
        assert_eq!(descriptions["x"], "desc");
    }

    #[test]
    fn test_no_section() {
        assert!(parse_attr_descriptions(Some("Just a summary.")).is_empty());
        assert!(parse_attr_descriptions(Some("")).is_empty());
        assert!(parse_attr_descriptions(None).is_empty());
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let doc = "Attributes:\n    x: desc\n    continuation without colon\n    y: other";
        let descriptions = parse_attr_descriptions(Some(doc));
        assert_eq!(descriptions.len(), 2);
        assert_eq!(descriptions["y"], "other");
    }
}
