use thiserror::Error;

/// Validation errors for schema primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a platform tag is not one of the known tracker platforms.
    #[error("unknown tracker platform '{0}'")]
    UnknownPlatform(String),
}
