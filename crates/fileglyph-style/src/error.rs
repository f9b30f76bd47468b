//! Error types for the icon theme engine.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding themes or emitting rules.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule text rejected by the CSS syntax check.
    #[error("Invalid CSS rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    /// Positional insertion past the end of a rule bucket.
    #[error("Rule index {index} is out of range for a bucket of {len} rules")]
    IndexOutOfRange { index: usize, len: usize },

    /// Theme JSON does not match the selected encoding.
    #[error("Failed to decode icon theme: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create an invalid rule error.
    pub fn invalid_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create an index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}
