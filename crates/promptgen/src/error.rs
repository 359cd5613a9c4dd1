//! Error types for the prompt generator.
//!
//! Each component owns a small `thiserror` enum; [`SessionError`] wraps the
//! ones a form handler can surface to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Selecting a value for a category key the catalog does not contain.
///
/// A correctly generated surface never produces this, so callers treat it as
/// a programming error and leave the selection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Failure of an unlock attempt. Recoverable; the user may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Invalid unlock code. Please check your purchase confirmation.")]
    InvalidCode,
}

/// Durable key-value store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store at {path} is not a valid JSON object: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Clipboard collaborator failure.
#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(#[from] pub std::io::Error);

/// Configuration file failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors a form handler reports back to the surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Access(#[from] AccessError),

    /// The category is gated and the access gate is still locked.
    #[error("{0} is available to Pro users only")]
    Locked(String),

    /// The value is not one of the category's options.
    #[error("{value:?} is not an option for {category}")]
    UnknownValue { category: String, value: String },

    #[error("nothing to copy, generate a prompt first")]
    NothingToCopy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_message_is_user_facing() {
        assert_eq!(
            AccessError::InvalidCode.to_string(),
            "Invalid unlock code. Please check your purchase confirmation."
        );
    }

    #[test]
    fn session_error_is_transparent_over_access() {
        let err: SessionError = AccessError::InvalidCode.into();
        assert_eq!(err.to_string(), AccessError::InvalidCode.to_string());
    }

    #[test]
    fn unknown_category_names_the_key() {
        let err = SelectionError::UnknownCategory("lens".into());
        assert_eq!(err.to_string(), "unknown category: lens");
    }

    #[test]
    fn unknown_value_names_category_and_value() {
        let err = SessionError::UnknownValue {
            category: "Visual Type".into(),
            value: "oil painting".into(),
        };
        assert_eq!(err.to_string(), "\"oil painting\" is not an option for Visual Type");
    }
}
