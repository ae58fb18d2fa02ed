use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::DocgenConfig;
use crate::docs::attributes::AttributeParser;
use crate::docs::enums::EnumParser;
use crate::docs::functions::FunctionParser;
use crate::docs::strings::pascal_to_snake;
use crate::docs::types::ClassInfo;
use crate::package::loader::module_path;
use crate::package::{Class, Package, CACHE_DIR};

const SOURCE_EXTENSIONS: [&str; 2] = ["py", "pyi"];

/// Resolves exported names to classes by file-name convention.
pub struct ClassParser<'a> {
    package: &'a Package,
    config: &'a DocgenConfig,
}

impl<'a> ClassParser<'a> {
    pub fn new(package: &'a Package, config: &'a DocgenConfig) -> Self {
        Self { package, config }
    }

    /// Parse every name that resolves to a class; the rest are skipped with a warning.
    pub fn parse_classes(&self, names: &[String]) -> IndexMap<String, ClassInfo> {
        let mut classes = IndexMap::new();
        let candidate_dirs = self.candidate_dirs();

        for name in names {
            let Some(source) = find_module_path(name, &candidate_dirs) else {
                tracing::warn!("Could not find file for imported name '{}'", name);
                continue;
            };

            let Some(import_path) = module_path(&self.package.root, &source) else {
                tracing::warn!("Could not make import path for '{}'", source.display());
                continue;
            };

            let Some(module) = self.package.module(&import_path) else {
                tracing::warn!("Could not load module {}", import_path);
                continue;
            };

            let Some(class) = module.classes.get(name) else {
                tracing::warn!("Class '{}' not found in {}", name, import_path);
                continue;
            };

            classes.insert(name.clone(), Self::parse_single_class(class));
        }

        classes
    }

    /// Package root, the shared directory, then the shared directory's
    /// immediate subdirectories in name order.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        let root = &self.package.root;
        let shared = root.join(&self.config.shared_dir);

        let mut subdirs: Vec<PathBuf> = std::fs::read_dir(&shared)
            .map(|entries| {
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.is_dir() && !path.ends_with(CACHE_DIR))
                    .collect()
            })
            .unwrap_or_default();
        subdirs.sort();

        let mut dirs = vec![root.clone(), shared];
        dirs.extend(subdirs);
        dirs
    }

    pub fn parse_single_class(class: &Class) -> ClassInfo {
        let docstring = class.docstring.clone();

        let enum_members = if EnumParser::is_enum_class(class) {
            EnumParser::parse_enum_members(class)
        } else {
            Vec::new()
        };

        ClassInfo {
            functions: FunctionParser::parse_functions(class.functions.values()),
            attributes: AttributeParser::parse_attributes(&class.attributes, docstring.as_deref()),
            enum_members,
            docstring,
        }
    }
}

/// First `<snake_name>.py` (or `.pyi`) found in `dirs`, searched in order.
pub fn find_module_path(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let stem = pascal_to_snake(name);

    dirs.iter().find_map(|dir| {
        SOURCE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|candidate| candidate.is_file())
    })
}
