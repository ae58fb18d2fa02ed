//! One-line-per-item summaries of parsed records, logged during a run.

use indexmap::IndexMap;

use crate::docs::types::{AttrInfo, ClassInfo, FuncInfo};

fn yes_no(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

pub struct DebugPrinter;

impl DebugPrinter {
    pub fn attribute_lines(attributes: &[AttrInfo]) -> Vec<String> {
        attributes
            .iter()
            .map(|attr| {
                let default = attr
                    .default
                    .as_ref()
                    .map(|d| format!(", default: {}", d))
                    .unwrap_or_default();
                format!(
                    "- {} [doc: {}]: type: {}{}",
                    attr.name,
                    yes_no(attr.docstring.is_some()),
                    attr.annotation,
                    default
                )
            })
            .collect()
    }

    pub fn function_lines(functions: &IndexMap<String, FuncInfo>) -> Vec<String> {
        functions
            .iter()
            .map(|(name, func)| {
                let args = func
                    .params
                    .iter()
                    .map(|p| match &p.default {
                        Some(default) => format!("{}:{} = {}", p.name, p.annotation, default),
                        None => format!("{}:{}", p.name, p.annotation),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "- {} [doc: {}]: returns {}, args: [{}]",
                    name,
                    yes_no(func.docstring.is_some()),
                    func.return_type,
                    args
                )
            })
            .collect()
    }

    pub fn class_lines(classes: &IndexMap<String, ClassInfo>) -> Vec<String> {
        let mut lines = Vec::new();
        for (name, info) in classes {
            lines.push(format!("Class: {}", name));
            lines.extend(Self::function_lines(&info.functions));
            lines.push("--- Attributes ---".to_string());
            lines.extend(Self::attribute_lines(&info.attributes));
        }
        lines
    }

    pub fn print_functions(functions: &IndexMap<String, FuncInfo>) {
        for line in Self::function_lines(functions) {
            tracing::info!("{}", line);
        }
    }

    pub fn print_classes(classes: &IndexMap<String, ClassInfo>) {
        for line in Self::class_lines(classes) {
            tracing::info!("{}", line);
        }
    }
}
