//! Generator configuration
//!
//! Every path the generator touches is carried here instead of living in
//! process-wide constants, so a run can be pointed at a fabricated package.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// A `(module, class)` pair whose allow-listed methods form the agent API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSource {
    /// Dotted module path relative to the package root
    pub module: String,
    /// Class name inside that module
    pub class: String,
}

impl ApiSource {
    pub fn new(module: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class: class.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocgenConfig {
    /// Root directory of the package being documented
    pub package_dir: PathBuf,
    /// Source file holding the `__all__` export list
    pub exports_file: PathBuf,
    /// Source file holding the method table, relative to `package_dir`
    pub methods_file: PathBuf,
    /// Name of the method-table function
    pub methods_function: String,
    /// Shared subdirectory searched for class sources
    pub shared_dir: String,
    /// Directory receiving the generated pages
    pub output_dir: PathBuf,
    /// File name of the aggregate agent page
    pub agent_page: String,
    /// Agent API sources, highest precedence first
    pub api_sources: Vec<ApiSource>,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from("src/_aegis_game"),
            exports_file: PathBuf::from("src/aegis_game/__init__.py"),
            methods_file: PathBuf::from("game.py"),
            methods_function: "methods".to_string(),
            shared_dir: "common".to_string(),
            output_dir: PathBuf::from("content/docs/api"),
            agent_page: "agent.mdx".to_string(),
            api_sources: vec![
                ApiSource::new("agent_controller", "AgentController"),
                ApiSource::new("game", "Game"),
            ],
        }
    }
}

impl DocgenConfig {
    /// Load a TOML config file; keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn methods_path(&self) -> PathBuf {
        self.package_dir.join(&self.methods_file)
    }

    pub fn agent_page_path(&self) -> PathBuf {
        self.output_dir.join(&self.agent_page)
    }

    /// Output path for a class page: the lowercased class name.
    pub fn class_page_path(&self, class_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.mdx", class_name.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocgenError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_paths() {
        let config = DocgenConfig::default();
        assert_eq!(config.methods_path(), PathBuf::from("src/_aegis_game/game.py"));
        assert_eq!(
            config.agent_page_path(),
            PathBuf::from("content/docs/api/agent.mdx")
        );
        assert_eq!(config.api_sources.len(), 2);
        assert_eq!(config.api_sources[0].class, "AgentController");
    }

    #[test]
    fn test_class_page_path_is_lowercased() {
        let config = DocgenConfig::default();
        assert_eq!(
            config.class_page_path("AgentController"),
            PathBuf::from("content/docs/api/agentcontroller.mdx")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DocgenConfig::from_toml(
            r#"
package_dir = "pkg"
output_dir = "out"
"#,
        )
        .unwrap();

        assert_eq!(config.package_dir, PathBuf::from("pkg"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.methods_function, "methods");
        assert_eq!(config.shared_dir, "common");
    }

    #[test]
    fn test_api_sources_from_toml() {
        let config = DocgenConfig::from_toml(
            r#"
[[api_sources]]
module = "robot"
class = "Robot"
"#,
        )
        .unwrap();

        assert_eq!(config.api_sources, vec![ApiSource::new("robot", "Robot")]);
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = DocgenConfig::from_toml("no_such_key = 1").unwrap_err();
        assert!(matches!(err, DocgenError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "agent_page = \"api.mdx\"").unwrap();

        let config = DocgenConfig::from_file(file.path()).unwrap();
        assert_eq!(config.agent_page, "api.mdx");
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = DocgenConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, DocgenError::Io(_)));
    }
}
