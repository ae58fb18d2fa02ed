use indexmap::IndexMap;

use crate::docs::types::FuncInfo;
use crate::render::MdxRenderer;

const AGENT_FRONT_MATTER: &str = "---
title: Agent
description: Agent functions to interact with the world.
---

";

pub struct AgentDocsRenderer;

impl AgentDocsRenderer {
    /// Agent API page: one function block per method, in collection order.
    pub fn render_agent_api_docs(all_methods: &IndexMap<String, FuncInfo>) -> String {
        let mut mdx = AGENT_FRONT_MATTER.to_string();

        if !all_methods.is_empty() {
            let blocks: Vec<String> = all_methods
                .iter()
                .map(|(name, func)| MdxRenderer::render_function(name, func))
                .collect();
            mdx.push_str(&blocks.join("\n"));
            mdx.push('\n');
        }

        mdx
    }
}
