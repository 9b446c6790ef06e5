//! Result and error types for overlay interactions.

use thiserror::Error;

/// Result type for overlay operations
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors that can occur while driving an overlay
///
/// Every pattern propagates these unchanged; nothing is retried or
/// recovered locally.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// A required visibility state was not reached within budget
    #[error("Timed out after {elapsed_ms}ms waiting for {target} to be {condition} (budget {budget_ms}ms)")]
    Timeout {
        /// Descriptor of the element that was waited on
        target: String,
        /// Condition that was required (e.g. "visible")
        condition: String,
        /// Budget attached to the wait
        budget_ms: u64,
        /// Time actually spent waiting
        elapsed_ms: u64,
    },

    /// No element matched at click time
    #[error("No element matched {locator}")]
    LocatorNotFound {
        /// Descriptor of the locator that failed to resolve
        locator: String,
    },

    /// A visibility or equality assertion did not hold
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Transport-level driver failure
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// YAML parse error
    #[error("YAML error: {message}")]
    Yaml {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure bucket a scenario aborted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required state not reached in time
    Timeout,
    /// Nothing matched a required selector/text
    LocatorNotFound,
    /// Visibility or equality assertion failed
    Assertion,
    /// Driver, configuration or serialization failure
    Other,
}

impl OverlayError {
    /// Build an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Build a driver failure
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Taxonomy bucket of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::LocatorNotFound { .. } => ErrorKind::LocatorNotFound,
            Self::AssertionFailed { .. } => ErrorKind::Assertion,
            Self::Driver { .. }
            | Self::Config { .. }
            | Self::Yaml { .. }
            | Self::Io(_)
            | Self::Json(_) => ErrorKind::Other,
        }
    }

    /// Check whether this is a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
