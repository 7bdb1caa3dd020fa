//! Naming strategies: pure rules mapping a base name and an attempt
//! ordinal to a candidate identifier.
//!
//! Strategies are a closed family dispatched by match. For a fixed
//! strategy and base name, a given attempt ordinal always yields the same
//! candidate, so repeated resolution against the same reserved set is
//! idempotent. Strategies are side-effect-free and support unbounded
//! attempt ordinals; termination is the resolver's responsibility.

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// First attempt ordinal for every strategy.
pub const FIRST_ATTEMPT: u32 = 1;

/// A candidate-generation rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// `base`, `base2`, `base3`, ...
    ///
    /// The numeric counter begins at 2 on the second attempt; no leading
    /// zeros, no separators.
    #[default]
    Numbered,
    /// `baseAsync`, `base2Async`, `base3Async`, ...
    ///
    /// Counter semantics match [`NamingStrategy::Numbered`], but the
    /// counter is inserted before the fixed tag and the first attempt
    /// already carries the tag.
    AsyncMethod,
}

impl NamingStrategy {
    /// Generate the candidate for a 1-based attempt ordinal.
    ///
    /// Attempt 0 is rejected with [`NameError::InvalidArgument`].
    pub fn candidate(&self, base: &str, attempt: u32) -> Result<String, NameError> {
        if attempt < FIRST_ATTEMPT {
            return Err(NameError::invalid_argument(format!(
                "attempt ordinal must be >= {}, got {}",
                FIRST_ATTEMPT, attempt
            )));
        }

        Ok(match self {
            NamingStrategy::Numbered => {
                if attempt == FIRST_ATTEMPT {
                    base.to_string()
                } else {
                    format!("{}{}", base, attempt)
                }
            }
            NamingStrategy::AsyncMethod => {
                if attempt == FIRST_ATTEMPT {
                    format!("{}Async", base)
                } else {
                    format!("{}{}Async", base, attempt)
                }
            }
        })
    }

    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategy::Numbered => "numbered",
            NamingStrategy::AsyncMethod => "async_method",
        }
    }
}

impl std::fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
