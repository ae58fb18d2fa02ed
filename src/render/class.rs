use crate::docs::functions::CONSTRUCTOR;
use crate::docs::types::ClassInfo;
use crate::render::MdxRenderer;

const MISSING_DESCRIPTION: &str = "Could not generate description";

pub struct ClassDocsRenderer;

impl ClassDocsRenderer {
    /// Class page: front matter, then Constructor, Enum Constants,
    /// Attributes and Methods, each left out when it would be empty.
    pub fn render_class_docs(name: &str, class_info: &ClassInfo) -> String {
        let description = class_info
            .docstring
            .as_deref()
            .filter(|doc| !doc.is_empty())
            .map(|doc| doc.split('\n').next().unwrap_or_default())
            .unwrap_or(MISSING_DESCRIPTION);

        let mut mdx = format!("---\ntitle: {}\ndescription: {}\n---\n\n", name, description);

        // The constructor is only shown when it is documented
        let documented_init = class_info
            .functions
            .get(CONSTRUCTOR)
            .and_then(|init| init.docstring.as_deref())
            .is_some_and(|doc| !doc.is_empty());
        if documented_init {
            mdx.push_str(&format!(
                "## Constructor\n\n{}\n\n",
                MdxRenderer::render_constructor(name, &class_info.attributes)
            ));
        }

        if !class_info.enum_members.is_empty() {
            let enums: Vec<String> = class_info
                .enum_members
                .iter()
                .map(MdxRenderer::render_attribute)
                .collect();
            mdx.push_str(&format!("## Enum Constants\n\n{}\n\n", enums.join("\n")));
        }

        if !class_info.attributes.is_empty() {
            let attrs: Vec<String> = class_info
                .attributes
                .iter()
                .map(MdxRenderer::render_attribute)
                .collect();
            mdx.push_str(&format!("## Attributes\n\n{}\n\n", attrs.join("\n")));
        }

        let methods: Vec<String> = class_info
            .functions
            .iter()
            .filter(|(fname, _)| fname.as_str() != CONSTRUCTOR)
            .map(|(fname, finfo)| MdxRenderer::render_function(fname, finfo))
            .collect();
        if !methods.is_empty() {
            mdx.push_str(&format!("## Methods\n\n{}\n\n", methods.join("\n")));
        }

        mdx
    }
}
