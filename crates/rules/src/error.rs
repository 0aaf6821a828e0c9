use thiserror::Error;

/// Errors raised while loading or validating settings.
///
/// These never reach the redaction engine: invalid definitions are rejected
/// before any rule is handed over.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("io error: {0}")]
    Io(String),

    /// The settings document is not valid for its format, or names an unknown
    /// rule type.
    #[error("parse error: {0}")]
    Parse(String),

    /// The file extension does not map to a supported format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The document parsed but contains an unusable entry.
    #[error("validation error: {0}")]
    Validation(String),
}
