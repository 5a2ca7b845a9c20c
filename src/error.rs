//! Error types for the survey report core.
//!
//! Most pipeline conditions degrade in place (empty output, skipped row)
//! instead of surfacing here; the error type covers configuration loading
//! and validation, where a caller can actually act on the failure.

/// Result type for configuration operations.
pub type SurveyResult<T> = Result<T, SurveyError>;

/// Error type for the survey report core.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The pipeline configuration cannot produce a usable report.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SurveyError {
    /// Create an invalid-configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
