use thiserror::Error;

use crate::value::Kind;

/// Errors raised when a check is called with an argument it cannot work with.
///
/// These are programming mistakes in the calling test, not assertion
/// failures, so they are never routed through a [`Fataler`](crate::Fataler).
/// They surface as a panic carrying the error's message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The regular expression handed to a matching check does not compile
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// `assert_len` was given a value that has no length
    #[error("cannot take the length of a value of kind {0}")]
    UnsupportedLength(Kind),
}

impl UsageError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            UsageError::InvalidPattern { .. } => "ERR_ATTEST_INVALID_PATTERN",
            UsageError::UnsupportedLength(_) => "ERR_ATTEST_UNSUPPORTED_LENGTH",
        }
    }

    /// Logs the error and aborts the current check by panicking.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(code = self.error_code(), "{}", self);
        panic!("{}", self)
    }
}

/// Compiles `pattern`, raising a usage error when it is malformed.
#[track_caller]
pub(crate) fn compile_pattern(pattern: &str) -> regex::Regex {
    match regex::Regex::new(pattern) {
        Ok(rx) => rx,
        Err(err) => UsageError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
        .raise(),
    }
}
