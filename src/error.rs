use thiserror::Error;

/// Errors that can occur around the scoring and parsing core.
///
/// The core itself never fails: unparseable or missing input is handled
/// by substituting a documented default. These variants cover the
/// fallible surface around it (configuration, builder misuse, CLI I/O).
#[derive(Error, Debug)]
pub enum EngineError {
    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read an input file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode a JSON input or encode a result
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
