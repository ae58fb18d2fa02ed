use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DocgenError, Result};
use crate::package::model::{Module, Package};
use crate::package::visitor::ModuleVisitor;
use crate::python::{PythonGrammar, PythonParser};

/// Bytecode cache directory, never part of the package.
pub const CACHE_DIR: &str = "__pycache__";

/// Loads every Python source under a package directory into a [`Package`].
pub struct PackageLoader {
    grammar: PythonGrammar,
    parser: PythonParser,
}

impl PackageLoader {
    pub fn new() -> Self {
        Self {
            grammar: PythonGrammar,
            parser: PythonParser::new(),
        }
    }

    pub fn load(&self, root: &Path) -> Result<Package> {
        if !root.is_dir() {
            return Err(DocgenError::PackageLoad(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut package = Package::new(name, root);

        for file in self.walk(root)? {
            let Some(path) = module_path(root, &file) else {
                tracing::warn!("Could not make import path for {}", file.display());
                continue;
            };

            // A stub shadows its implementation.
            let is_stub = file.extension().is_some_and(|ext| ext == "pyi");
            if !is_stub && package.module(&path).is_some() {
                continue;
            }

            let parsed = match self.parser.parse_file(&file) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file.display(), e);
                    continue;
                }
            };

            let mut module = Module::new(path, &file);
            ModuleVisitor::new(&parsed).visit(&mut module);
            tracing::debug!(
                "Loaded module '{}' ({} classes, {} functions)",
                module.path,
                module.classes.len(),
                module.functions.len()
            );
            package.add_module(module);
        }

        Ok(package)
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|e| DocgenError::PackageLoad(e.to_string()))?;
            let path = entry.path();
            if path.is_file() && self.grammar.is_source_file(path) {
                files.push(path.to_path_buf());
            }
        }

        // `.py` before `.pyi` so stubs replace implementations
        files.sort_by_key(|path| {
            (
                path.with_extension(""),
                path.extension().is_some_and(|ext| ext == "pyi"),
            )
        });

        Ok(files)
    }
}

impl Default for PackageLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_skipped_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name == CACHE_DIR || name.starts_with('.'))
}

/// Dotted module path of `file` relative to `root`.
///
/// `a/b.py` → `a.b`, `a/__init__.py` → `a`, the root `__init__.py` → `""`.
pub fn module_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    if parts.last().is_some_and(|last| last == "__init__") {
        parts.pop();
    }

    Some(parts.join("."))
}
