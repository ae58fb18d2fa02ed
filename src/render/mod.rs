//! MDX page rendering
//!
//! Pure string formatting of the parsed records into the components the
//! documentation site understands: `PyFunctionSignature`, `PyFunction`
//! and `PyAttribute`.

pub mod agent;
pub mod class;

pub use agent::AgentDocsRenderer;
pub use class::ClassDocsRenderer;

use crate::docs::types::{AttrInfo, FuncInfo};

/// Escape text placed inside a double-quoted component attribute.
pub fn escape_attr(text: &str) -> String {
    text.replace('"', "&quot;")
}

fn format_param(name: &str, annotation: &str, default: Option<&str>) -> String {
    let mut param = name.to_string();
    if !annotation.is_empty() {
        param.push_str(": ");
        param.push_str(annotation);
    }
    if let Some(default) = default {
        param.push_str(" = ");
        param.push_str(default);
    }
    param
}

fn signature_component(signature: &str) -> String {
    format!("<PyFunctionSignature signature=\"{}\" />", escape_attr(signature))
}

pub struct MdxRenderer;

impl MdxRenderer {
    /// Constructor signature synthesized from the class attributes.
    pub fn render_constructor(name: &str, attributes: &[AttrInfo]) -> String {
        let params = attributes
            .iter()
            .map(|attr| {
                format_param(
                    &attr.name,
                    &attr.annotation,
                    attr.default.as_deref().filter(|d| !d.is_empty()),
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        signature_component(&format!("{}({})", name, params))
    }

    pub fn render_function_signature(name: &str, func: &FuncInfo) -> String {
        let params = func
            .params
            .iter()
            .map(|p| format_param(&p.name, &p.annotation, p.default.as_deref()))
            .collect::<Vec<_>>()
            .join(", ");

        signature_component(&format!("def {}({}) -> {}", name, params, func.return_type))
    }

    /// Heading, signature and docstring of one function.
    pub fn render_function(name: &str, func: &FuncInfo) -> String {
        let doc = func.docstring.as_deref().unwrap_or_default();
        format!(
            "### {}\n\n{}\n\n<PyFunction docString=\"{}\" />",
            name,
            Self::render_function_signature(name, func),
            escape_attr(doc)
        )
    }

    pub fn render_attribute(attr: &AttrInfo) -> String {
        format!(
            "### {}\n\n<PyAttribute type=\"{}\" value=\"{}\" docString=\"{}\" />\n",
            attr.name,
            escape_attr(&attr.annotation),
            escape_attr(attr.default.as_deref().unwrap_or_default()),
            escape_attr(attr.docstring.as_deref().unwrap_or_default())
        )
    }
}
