use thiserror::Error;

/// Error types for the strict entry points and the config layer
#[derive(Error, Debug)]
pub enum StringOpsError {
    // Decoding errors
    #[error("Malformed UTF-8 at byte {position}: {reason}")]
    MalformedUtf8 { position: usize, reason: String },

    // Rendering errors
    #[error("Value for key '{key}' is not a JSON fragment: {message}")]
    InvalidJsonFragment { key: String, message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path}")]
    InvalidConfig { path: String },

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StringOpsError {
    /// Create a malformed UTF-8 error
    pub fn malformed_utf8(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedUtf8 { position, reason: reason.into() }
    }

    /// Create an invalid JSON fragment error
    pub fn invalid_json(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidJsonFragment { key: key.into(), message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedUtf8 { .. } => "decoding",
            Self::InvalidJsonFragment { .. } => "rendering",
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::Internal { .. } => "internal",
        }
    }

    /// Input errors are caused by the caller's data, not by the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedUtf8 { .. } | Self::InvalidJsonFragment { .. })
    }
}

/// Result type alias for stringops
pub type StringOpsResult<T> = std::result::Result<T, StringOpsError>;

/// Convert anyhow::Error to StringOpsError
impl From<anyhow::Error> for StringOpsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = StringOpsError::config("empty alphabet");
        assert_eq!(error.category(), "configuration");
        assert!(!error.is_input_error());
        assert_eq!(error.to_string(), "Configuration error: empty alphabet");
    }

    #[test]
    fn test_input_errors() {
        let error = StringOpsError::malformed_utf8(3, "truncated sequence");
        assert!(error.is_input_error());
        assert_eq!(error.category(), "decoding");
        assert!(error.to_string().contains("byte 3"));

        let error = StringOpsError::invalid_json("name", "expected value");
        assert!(error.is_input_error());
        assert!(error.to_string().contains("'name'"));
    }

    #[test]
    fn test_from_anyhow() {
        let error: StringOpsError = anyhow::anyhow!("boom").into();
        assert_eq!(error.category(), "internal");
    }
}
