//! Error types for the critique library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using critique's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised inside the crate.
///
/// The analysis engine itself never hands these to its callers: structural
/// failures are recovered by the generic fallback. They surface only from
/// the parser, configuration loading and the command line front end.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// No structural analyzer exists for the language.
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    /// Parse error from tree-sitter.
    #[error("Parse error in {language} source: {message}")]
    Parse { language: String, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML rendering error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl Error {
    /// Create a new parse error.
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
        }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
