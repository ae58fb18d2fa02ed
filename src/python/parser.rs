use std::path::Path;

use crate::error::{DocgenError, Result};
use crate::python::PythonGrammar;

pub struct PythonParser {
    grammar: PythonGrammar,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            grammar: PythonGrammar,
        }
    }

    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile> {
        let source = std::fs::read_to_string(path)?;
        let parsed = self.parse_source(&source)?;

        if parsed.root_node().has_error() {
            tracing::warn!("Syntax errors in {}, output may be partial", path.display());
        }

        Ok(parsed)
    }

    /// Parse `source` after folding `\r\n` and lone `\r` line endings to `\n`.
    pub fn parse_source(&self, source: &str) -> Result<ParsedFile> {
        let source = normalize_newlines(source);

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.grammar.language())
            .map_err(|e| DocgenError::Parse(e.to_string()))?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| DocgenError::Parse("Failed to parse source".to_string()))?;

        Ok(ParsedFile { tree, source })
    }
}

fn normalize_newlines(source: &str) -> String {
    if source.contains('\r') {
        source.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        source.to_string()
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ParsedFile {
    pub tree: tree_sitter::Tree,
    pub source: String,
}

impl ParsedFile {
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn node_text(&self, node: &tree_sitter::Node) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }
}
