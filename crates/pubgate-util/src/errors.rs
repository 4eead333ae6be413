use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pubgate operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PubgateError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (`Pubgate.toml` or `Module.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check Pubgate.toml and the member Module.toml files for syntax errors"))]
    Manifest { message: String },

    /// A publication could not be configured from the project properties.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Set the property in gradle.properties or pass it with -P key=value"))]
    Config { message: String },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Uploading an artifact to the remote repository failed.
    #[error("Publish failed: {message}")]
    Publish { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

