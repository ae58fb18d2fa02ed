use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Package load error: {0}")]
    PackageLoad(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for DocgenError {
    fn from(err: toml::de::Error) -> Self {
        DocgenError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;
