use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pydoc_mdx::{DocgenConfig, DocumentationGenerator};

#[derive(Parser, Debug)]
#[command(name = "pydoc-mdx")]
#[command(about = "Generate MDX API reference pages for a Python package using tree-sitter")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Regenerate everything with the default layout
    pydoc-mdx

    # Use a config file
    pydoc-mdx --config docgen.toml

    # Point at another package and output directory
    pydoc-mdx --package src/_aegis_game --output content/docs/api
"#)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Package directory to document
    #[arg(long)]
    pub package: Option<PathBuf>,

    /// Source file holding the `__all__` export list
    #[arg(long)]
    pub exports: Option<PathBuf>,

    /// Directory receiving the generated pages
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> anyhow::Result<DocgenConfig> {
        let mut config = match &self.config {
            Some(path) => DocgenConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DocgenConfig::default(),
        };

        if let Some(package) = &self.package {
            config.package_dir = package.clone();
        }
        if let Some(exports) = &self.exports {
            config.exports_file = exports.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }

        Ok(config)
    }
}

pub fn generate(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let package_dir = config.package_dir.clone();

    let generator = DocumentationGenerator::new(config)
        .with_context(|| format!("Failed to load package {}", package_dir.display()))?;
    let report = generator
        .generate()
        .context("Failed to write documentation pages")?;

    tracing::info!(
        "MDX files generated: {} ({} methods), {} class pages in {}",
        report.agent_page.display(),
        report.agent_methods,
        report.class_pages.len(),
        generator.config().output_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["pydoc-mdx"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), DocgenConfig::default());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pydoc-mdx",
            "--package",
            "pkg",
            "--exports",
            "pub/__init__.py",
            "--output",
            "out",
            "-q",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.package_dir, PathBuf::from("pkg"));
        assert_eq!(config.exports_file, PathBuf::from("pub/__init__.py"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = Cli::try_parse_from(["pydoc-mdx", "--config", "/no/such/docgen.toml"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
