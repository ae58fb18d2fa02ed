use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::DocgenConfig;
use crate::docs::{ClassInfo, ClassParser, DebugPrinter, FuncInfo, ResourceReader};
use crate::error::Result;
use crate::package::{Package, PackageLoader};
use crate::render::{AgentDocsRenderer, ClassDocsRenderer};

/// Paths written by one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub agent_page: PathBuf,
    /// One page per resolved class, in export order
    pub class_pages: Vec<PathBuf>,
    pub agent_methods: usize,
}

pub struct DocumentationGenerator {
    config: DocgenConfig,
    package: Package,
}

impl DocumentationGenerator {
    /// Load the configured package; a package that cannot be loaded is fatal.
    pub fn new(config: DocgenConfig) -> Result<Self> {
        let package = PackageLoader::new().load(&config.package_dir)?;
        tracing::debug!(
            "Loaded package '{}' with {} modules",
            package.name,
            package.modules.len()
        );
        Ok(Self::with_package(config, package))
    }

    pub fn with_package(config: DocgenConfig, package: Package) -> Self {
        Self { config, package }
    }

    pub fn config(&self) -> &DocgenConfig {
        &self.config
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Regenerate every page, overwriting what is already there.
    pub fn generate(&self) -> Result<GenerationReport> {
        let reader = ResourceReader::new(&self.package, &self.config);

        let all_methods = reader.collect_functions();
        tracing::info!("Total API methods found: {}", all_methods.len());
        DebugPrinter::print_functions(&all_methods);

        let exported_names = reader.get_all_exports();
        tracing::info!("Exported names from __all__: {:?}", exported_names);

        let class_info = ClassParser::new(&self.package, &self.config).parse_classes(&exported_names);
        DebugPrinter::print_classes(&class_info);

        fs::create_dir_all(&self.config.output_dir)?;
        let agent_page = self.generate_agent_docs(&all_methods)?;
        let class_pages = self.generate_class_docs(&class_info)?;

        Ok(GenerationReport {
            agent_page,
            class_pages,
            agent_methods: all_methods.len(),
        })
    }

    fn generate_agent_docs(&self, all_methods: &IndexMap<String, FuncInfo>) -> Result<PathBuf> {
        let path = self.config.agent_page_path();
        fs::write(&path, AgentDocsRenderer::render_agent_api_docs(all_methods))?;
        Ok(path)
    }

    fn generate_class_docs(&self, class_info: &IndexMap<String, ClassInfo>) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(class_info.len());

        for (name, info) in class_info {
            let path = self.config.class_page_path(name);
            fs::write(&path, ClassDocsRenderer::render_class_docs(name, info))?;
            written.push(path);
        }

        Ok(written)
    }
}
