use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModkitError>;

#[derive(Error, Debug)]
pub enum ModkitError {
    // Standard library errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Toolchain error: {0}")]
    Toolchain(String),

    #[error("Invalid module path: {0}")]
    InvalidModulePath(String),
}

impl ModkitError {
    /// True when the underlying IO error means the file held bytes that are not valid UTF-8.
    pub fn is_decoding(&self) -> bool {
        matches!(self, ModkitError::Io(e) if e.kind() == std::io::ErrorKind::InvalidData)
    }
}
