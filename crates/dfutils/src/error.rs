//! Error types for dfutils

use thiserror::Error;

/// Result type alias for the strict (`try_*`) generator paths.
pub type DfResult<T> = Result<T, DfError>;

/// Errors raised by the hardened generator paths and the defaults loader.
///
/// The plain `to_sql()` paths never produce these: they render whatever they
/// are given and leave rejection to the SQL engine.
#[derive(Debug, Error)]
pub enum DfError {
    /// Fragment input rejected by `try_to_sql()`
    #[error("Validation error: {0}")]
    Validation(String),

    /// Defaults file could not be parsed or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Defaults file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DfError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<toml::de::Error> for DfError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
