//! Raw-source lookups that the package model does not expose: the
//! export list and the method-name table.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use tree_sitter::{Node, QueryCursor, StreamingIterator};

use crate::config::DocgenConfig;
use crate::docs::functions::FunctionParser;
use crate::docs::types::FuncInfo;
use crate::package::{Function, Package};
use crate::python::{string_node_value, ParsedFile, PythonGrammar, PythonParser};

const EXPORTS_NAME: &str = "__all__";
const EXCLUDED_EXPORT: &str = "main";

pub struct ResourceReader<'a> {
    package: &'a Package,
    config: &'a DocgenConfig,
    grammar: PythonGrammar,
    parser: PythonParser,
}

impl<'a> ResourceReader<'a> {
    pub fn new(package: &'a Package, config: &'a DocgenConfig) -> Self {
        Self {
            package,
            config,
            grammar: PythonGrammar,
            parser: PythonParser::new(),
        }
    }

    /// Allow-listed methods from every API source, earlier sources first.
    ///
    /// A name already taken from an earlier source is not taken again.
    pub fn collect_functions(&self) -> IndexMap<String, FuncInfo> {
        let method_names = self.get_method_names();

        let mut taken: HashSet<String> = HashSet::new();
        let mut selected: Vec<&Function> = Vec::new();

        for source in &self.config.api_sources {
            let funcs: Vec<&Function> = self
                .get_functions_from_module(&source.module, &source.class, &method_names)
                .into_iter()
                .filter(|func| !taken.contains(func.name.as_str()))
                .collect();

            tracing::info!(
                "Found {} methods in {}.{}",
                funcs.len(),
                source.module,
                source.class
            );

            taken.extend(funcs.iter().map(|func| func.name.clone()));
            selected.extend(funcs);
        }

        FunctionParser::parse_functions(selected)
    }

    pub fn read_source(&self, path: &Path) -> Option<ParsedFile> {
        match self.parser.parse_file(path) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                None
            }
        }
    }

    /// String entries of the top-level `__all__` list, minus `"main"`.
    pub fn get_all_exports(&self) -> Vec<String> {
        let path = &self.config.exports_file;
        let Some(parsed) = self.read_source(path) else {
            return Vec::new();
        };

        self.exports_from_source(&parsed).unwrap_or_else(|| {
            tracing::warn!("{} not found in {}", EXPORTS_NAME, path.display());
            Vec::new()
        })
    }

    pub fn exports_from_source(&self, parsed: &ParsedFile) -> Option<Vec<String>> {
        let query = self.grammar.cached_list_assignments_query()?;

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, parsed.root_node(), parsed.source_bytes());

        while let Some(m) = matches.next() {
            let mut target: Option<Node> = None;
            let mut elements: Option<Node> = None;

            for capture in m.captures {
                match query.capture_names()[capture.index as usize] {
                    "target" => target = Some(capture.node),
                    "elements" => elements = Some(capture.node),
                    _ => {}
                }
            }

            let (Some(target), Some(elements)) = (target, elements) else {
                continue;
            };
            if parsed.node_text(&target) != EXPORTS_NAME {
                continue;
            }

            let mut list_cursor = elements.walk();
            let exports = elements
                .named_children(&mut list_cursor)
                .filter_map(|element| string_node_value(&element, parsed.source_bytes()))
                .filter(|name| name != EXCLUDED_EXPORT)
                .collect();
            return Some(exports);
        }

        None
    }

    /// Lowercase-initial keys of the dict literals returned by the method table.
    pub fn get_method_names(&self) -> Vec<String> {
        let path = self.config.methods_path();
        let Some(parsed) = self.read_source(&path) else {
            return Vec::new();
        };

        self.method_names_from_source(&parsed).unwrap_or_else(|| {
            tracing::warn!(
                "No class method '{}' found in {}",
                self.config.methods_function,
                path.display()
            );
            Vec::new()
        })
    }

    pub fn method_names_from_source(&self, parsed: &ParsedFile) -> Option<Vec<String>> {
        let root = parsed.root_node();
        let mut cursor = root.walk();

        for statement in root.named_children(&mut cursor) {
            let Some(class) = unwrap_definition(statement, "class_definition") else {
                continue;
            };
            let Some(body) = class.child_by_field_name("body") else {
                continue;
            };

            let mut body_cursor = body.walk();
            for member in body.named_children(&mut body_cursor) {
                let Some(func) = unwrap_definition(member, "function_definition") else {
                    continue;
                };
                let is_table = func
                    .child_by_field_name("name")
                    .is_some_and(|name| parsed.node_text(&name) == self.config.methods_function);
                if is_table {
                    return Some(self.method_names_from_function(parsed, func));
                }
            }
        }

        None
    }

    fn method_names_from_function(&self, parsed: &ParsedFile, func: Node) -> Vec<String> {
        let mut methods = Vec::new();
        let Some(query) = self.grammar.cached_return_dicts_query() else {
            return methods;
        };

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, func, parsed.source_bytes());

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let mapping = capture.node;
                for pair in mapping.named_children(&mut mapping.walk()) {
                    if pair.kind() != "pair" {
                        continue;
                    }
                    let key = pair
                        .child_by_field_name("key")
                        .and_then(|key| string_node_value(&key, parsed.source_bytes()));
                    if let Some(key) = key {
                        // Uppercase keys name types, not methods
                        if key.chars().next().is_some_and(|c| !c.is_uppercase()) {
                            methods.push(key);
                        }
                    }
                }
            }
        }

        methods
    }

    /// Functions of `module.class` whose names are in `allowed_names`, in declaration order.
    pub fn get_functions_from_module(
        &self,
        module: &str,
        class: &str,
        allowed_names: &[String],
    ) -> Vec<&'a Function> {
        let Some(found) = self.package.module(module) else {
            tracing::warn!("Could not find {} module", module);
            return Vec::new();
        };
        let Some(class_obj) = found.classes.get(class) else {
            tracing::warn!("Class '{}' not found in {}", class, module);
            return Vec::new();
        };

        class_obj
            .functions
            .values()
            .filter(|func| allowed_names.contains(&func.name))
            .collect()
    }
}

fn unwrap_definition<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let definition = if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition")?
    } else {
        node
    };
    (definition.kind() == kind).then_some(definition)
}
