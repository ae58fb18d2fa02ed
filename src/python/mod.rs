pub mod literal;
pub mod parser;

pub use literal::{cleandoc, string_node_value, string_value};
pub use parser::{ParsedFile, PythonParser};

use once_cell::sync::OnceCell;
use tree_sitter::Query;

// Static query caches for Python
static PYTHON_ASSIGNMENTS_QUERY: OnceCell<Query> = OnceCell::new();
static PYTHON_RETURN_DICTS_QUERY: OnceCell<Query> = OnceCell::new();

pub struct PythonGrammar;

impl PythonGrammar {
    pub fn file_extensions(&self) -> &[&'static str] {
        &["py", "pyi"]
    }

    pub fn language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    pub fn is_source_file(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.file_extensions().contains(&ext))
    }

    /// Top-level `name = [...]` assignments, annotated ones excluded.
    pub fn list_assignments_query(&self) -> &str {
        r#"
        (module
            (expression_statement
                (assignment
                    left: (identifier) @target
                    right: (list) @elements
                    !type
                )
            )
        )
        "#
    }

    /// `return {...}` statements anywhere below the queried node.
    pub fn return_dicts_query(&self) -> &str {
        r#"
        (return_statement
            (dictionary) @mapping
        )
        "#
    }

    pub fn cached_list_assignments_query(&self) -> Option<&'static Query> {
        PYTHON_ASSIGNMENTS_QUERY
            .get_or_try_init(|| Query::new(&self.language(), self.list_assignments_query()))
            .ok()
    }

    pub fn cached_return_dicts_query(&self) -> Option<&'static Query> {
        PYTHON_RETURN_DICTS_QUERY
            .get_or_try_init(|| Query::new(&self.language(), self.return_dicts_query()))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_queries_compile() {
        let grammar = PythonGrammar;
        assert!(grammar.cached_list_assignments_query().is_some());
        assert!(grammar.cached_return_dicts_query().is_some());
    }

    #[test]
    fn test_is_source_file() {
        let grammar = PythonGrammar;
        assert!(grammar.is_source_file(Path::new("pkg/game.py")));
        assert!(grammar.is_source_file(Path::new("pkg/game.pyi")));
        assert!(!grammar.is_source_file(Path::new("pkg/game.pyc")));
        assert!(!grammar.is_source_file(Path::new("README")));
    }
}
