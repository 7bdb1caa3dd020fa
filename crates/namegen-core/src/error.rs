//! Error types for name synthesis.
//!
//! This module provides the single error type (`NameError`) used across
//! the workspace. All errors surface synchronously to the immediate
//! caller; nothing is swallowed or logged-and-ignored inside the engine.
//! Policy on user-visible messaging belongs to the calling layer.

use thiserror::Error;

/// Unified error type for name synthesis operations.
#[derive(Debug, Error)]
pub enum NameError {
    /// Invalid arguments from caller (empty base name, bad attempt index).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// A cancelable operation was asked to stop before completing.
    ///
    /// Surfaced distinctly from normal completion; a cancelled collection
    /// never yields a partial reserved set.
    #[error("operation cancelled")]
    Cancelled,

    /// The candidate search exceeded the defensive attempt bound.
    ///
    /// Unreachable for finite reserved sets. Treated as a programming
    /// invariant violation, not a recoverable condition.
    #[error("no unique name for '{base}' within {attempts} attempts")]
    ResolutionExhausted { base: String, attempts: u32 },
}

impl NameError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NameError::InvalidArgument {
            message: message.into(),
            details: None,
        }
    }

    /// Create an invalid argument error with JSON details.
    pub fn invalid_argument_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        NameError::InvalidArgument {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Create the error for an empty base name.
    ///
    /// Raised before any strategy is invoked.
    pub fn empty_base_name() -> Self {
        NameError::invalid_argument("base name must not be empty")
    }
}

// ============================================================================
// Tests
// ============================================================================
