use once_cell::sync::Lazy;
use regex::Regex;

static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
static LOWER_UPPER_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

/// Convert a PascalCase identifier to snake_case.
///
/// Runs of capitals stay together until the last one that starts a word:
/// `HTTPServer2X` becomes `http_server2_x`.
pub fn pascal_to_snake(name: &str) -> String {
    let split_words = WORD_BOUNDARY.replace_all(name, "${1}_${2}");
    let split_case = LOWER_UPPER_BOUNDARY.replace_all(&split_words, "${1}_${2}");
    split_case.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_to_snake_simple() {
        assert_eq!(pascal_to_snake("AgentController"), "agent_controller");
        assert_eq!(pascal_to_snake("Game"), "game");
    }

    #[test]
    fn test_pascal_to_snake_idempotent_on_snake() {
        assert_eq!(pascal_to_snake("agent_controller"), "agent_controller");
        assert_eq!(
            pascal_to_snake(&pascal_to_snake("CellInfo")),
            pascal_to_snake("CellInfo")
        );
    }

    #[test]
    fn test_pascal_to_snake_consecutive_capitals() {
        assert_eq!(pascal_to_snake("HTTPServer"), "http_server");
        assert_eq!(pascal_to_snake("HTTPServer2X"), "http_server2_x");
        assert_eq!(pascal_to_snake("AEGIS"), "aegis");
    }

    #[test]
    fn test_pascal_to_snake_digits() {
        assert_eq!(pascal_to_snake("Vector2D"), "vector2_d");
        assert_eq!(pascal_to_snake("Layer2Cache"), "layer2_cache");
    }

    #[test]
    fn test_pascal_to_snake_camel_case() {
        assert_eq!(pascal_to_snake("camelCase"), "camel_case");
        assert_eq!(pascal_to_snake(""), "");
    }
}
