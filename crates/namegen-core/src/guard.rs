//! Suffix-only-change guard for rename flows.
//!
//! When a rename derives its new name from scratch (e.g. from a type
//! name) and then resolves it for uniqueness, the result can end up being
//! the old name with a different numeric tail. Such a rename changes
//! nothing meaningful; callers use this guard to skip emitting a no-op
//! edit.

/// A transient rename decision: the old name, the proposed base, and the
/// uniqueness-resolved final name.
///
/// Constructed per decision and never persisted; it borrows its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameProposal<'a> {
    /// The symbol's current name.
    pub old_name: &'a str,
    /// The desired base name, before uniqueness resolution.
    pub base_name: &'a str,
    /// The name the resolver settled on.
    pub resolved_name: &'a str,
}

impl<'a> RenameProposal<'a> {
    /// Create a new rename proposal.
    pub fn new(old_name: &'a str, base_name: &'a str, resolved_name: &'a str) -> Self {
        Self {
            old_name,
            base_name,
            resolved_name,
        }
    }

    /// Whether applying this proposal only adjusts a numeric suffix.
    pub fn is_suffix_only_change(&self) -> bool {
        is_suffix_only_change(self.old_name, self.base_name, self.resolved_name)
    }
}

/// True iff the only effective difference between `old_name` and
/// `resolved_name` is the numeric tail after a prefix equal to
/// `base_name`.
///
/// Holds when the old name is strictly longer than the base, its prefix
/// matches the base byte-for-byte, every byte after that prefix is a
/// decimal digit, and the resolved name is strictly longer than the base
/// with an all-digit tail at the same offset. Tag-bearing old names like
/// `value2Async` are not recognized; only plain digit tails are guarded.
pub fn is_suffix_only_change(old_name: &str, base_name: &str, resolved_name: &str) -> bool {
    let prefix_len = base_name.len();

    old_name.len() > prefix_len
        && old_name.as_bytes().starts_with(base_name.as_bytes())
        && all_decimal_digits(&old_name.as_bytes()[prefix_len..])
        && resolved_name.len() > prefix_len
        && all_decimal_digits(&resolved_name.as_bytes()[prefix_len..])
}

fn all_decimal_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(|byte| byte.is_ascii_digit())
}

// ============================================================================
// Tests
// ============================================================================
