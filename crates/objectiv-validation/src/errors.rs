use objectiv_schema::ValidationError;
use thiserror::Error;

/// Errors raised while building rules from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A location rule asked for a position without also requiring a single occurrence.
    #[error("location rule for {context_name}: `position` requires `once: true`")]
    PositionWithoutOnce {
        /// Context the rule concerns.
        context_name: String,
    },
    /// A context or event type name failed validation.
    #[error("invalid name: {0}")]
    InvalidName(#[from] ValidationError),
    /// The configuration document could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
