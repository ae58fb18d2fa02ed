//! Python string literals and docstring cleanup.

use tree_sitter::Node;

const TAB_SIZE: usize = 8;

/// Value of a `string` or `concatenated_string` node, if it is a plain str constant.
pub fn string_node_value(node: &Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "string" => string_value(node.utf8_text(source).ok()?),
        "concatenated_string" => {
            let mut value = String::new();
            let mut cursor = node.walk();
            for part in node.named_children(&mut cursor) {
                value.push_str(&string_node_value(&part, source)?);
            }
            Some(value)
        }
        _ => None,
    }
}

/// Decode the source text of a single string literal.
///
/// Returns `None` for bytes and f-strings, which are not str constants.
pub fn string_value(text: &str) -> Option<String> {
    let prefix_len = text.find(['"', '\''])?;
    let prefix = text[..prefix_len].to_ascii_lowercase();
    if !prefix.chars().all(|c| matches!(c, 'r' | 'u')) {
        return None;
    }

    let body = &text[prefix_len..];
    let quote = ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find(|q| body.starts_with(*q))?;

    if body.len() < quote.len() * 2 || !body.ends_with(quote) {
        return None;
    }

    let content = &body[quote.len()..body.len() - quote.len()];
    if prefix.contains('r') {
        Some(content.to_string())
    } else {
        Some(unescape(content))
    }
}

fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('\n') => {}
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some(d @ '0'..='7') => {
                let mut digits = d.to_string();
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(&next @ '0'..='7') => {
                            digits.push(next);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            Some(kind @ ('x' | 'u' | 'U')) => {
                let width = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..width).filter_map(|_| chars.next()).collect();
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == width => out.push(decoded),
                    _ => {
                        out.push('\\');
                        out.push(kind);
                        out.push_str(&digits);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;

    for c in line.chars() {
        if c == '\t' {
            let spaces = TAB_SIZE - column % TAB_SIZE;
            out.push_str(&" ".repeat(spaces));
            column += spaces;
        } else {
            out.push(c);
            column += 1;
        }
    }

    out
}

/// Normalize docstring indentation the way Python's `inspect.cleandoc` does.
pub fn cleandoc(doc: &str) -> String {
    let mut lines: Vec<String> = doc.split('\n').map(expand_tabs).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start_matches(' ').len();
            (content > 0).then(|| line.len() - content)
        })
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start_matches(' ').to_string();
    }

    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.get(margin..).unwrap_or("").to_string();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| line.is_empty()).count();
    lines.drain(..leading);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::PythonParser;

    #[test]
    fn test_string_value_quotes() {
        assert_eq!(string_value("\"abc\"").as_deref(), Some("abc"));
        assert_eq!(string_value("'abc'").as_deref(), Some("abc"));
        assert_eq!(string_value("\"\"\"abc\"\"\"").as_deref(), Some("abc"));
        assert_eq!(string_value("'''a'b'''").as_deref(), Some("a'b"));
        assert_eq!(string_value("\"\"").as_deref(), Some(""));
    }

    #[test]
    fn test_string_value_escapes() {
        assert_eq!(string_value(r#""a\nb""#).as_deref(), Some("a\nb"));
        assert_eq!(string_value(r#""say \"hi\"""#).as_deref(), Some("say \"hi\""));
        assert_eq!(string_value(r#""\x41é\101""#).as_deref(), Some("AéA"));
        assert_eq!(string_value(r#""\q""#).as_deref(), Some("\\q"));
    }

    #[test]
    fn test_string_value_prefixes() {
        assert_eq!(string_value(r#"r"a\nb""#).as_deref(), Some("a\\nb"));
        assert_eq!(string_value("u'x'").as_deref(), Some("x"));
        assert_eq!(string_value("b'x'"), None);
        assert_eq!(string_value("f'{x}'"), None);
        assert_eq!(string_value("name"), None);
    }

    #[test]
    fn test_concatenated_string_node() {
        let parser = PythonParser::new();
        let parsed = parser.parse_source("x = 'ab' \"cd\"\n").unwrap();
        let assignment = parsed.root_node().named_child(0).unwrap().named_child(0).unwrap();
        let right = assignment.child_by_field_name("right").unwrap();

        assert_eq!(right.kind(), "concatenated_string");
        assert_eq!(
            string_node_value(&right, parsed.source_bytes()).as_deref(),
            Some("abcd")
        );
    }

    #[test]
    fn test_cleandoc_dedents_body() {
        let doc = "Summary line.\n\n    Details here.\n        Indented more.\n    ";
        assert_eq!(
            cleandoc(doc),
            "Summary line.\n\nDetails here.\n    Indented more."
        );
    }

    #[test]
    fn test_cleandoc_strips_blank_edges() {
        let doc = "\n    Summary.\n    Attributes:\n        x: desc\n";
        assert_eq!(cleandoc(doc), "Summary.\nAttributes:\n    x: desc");
    }

    #[test]
    fn test_cleandoc_single_line() {
        assert_eq!(cleandoc("  One liner.  "), "One liner.  ");
        assert_eq!(cleandoc(""), "");
    }

    #[test]
    fn test_cleandoc_expands_tabs() {
        assert_eq!(cleandoc("Head\n\tbody"), "Head\nbody");
    }
}
