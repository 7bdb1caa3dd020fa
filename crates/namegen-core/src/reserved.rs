//! Reserved-name sets: the names already in use at a scope, queryable by
//! exact or case-folded containment.
//!
//! Two backings are provided: collections of [`ScopedName`] records
//! (symbol-backed, as handed over by a semantic analyzer) and plain
//! string sets. Case is applied at query time, never baked into storage.
//! Membership queries are pure; a set is immutable for the duration of
//! one resolution.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Symbol Identity
// ============================================================================

/// Unique identifier for a symbol within one resolution.
///
/// Equality is identity: two handles with the same id refer to the same
/// underlying declaration, regardless of name text. The engine never
/// inspects anything else about a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    pub fn new(id: u32) -> Self {
        SymbolId(id)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sym_{}", self.0)
    }
}

/// A `(name, identity)` pair produced by scope lookups.
///
/// Duplicates are permitted and order is irrelevant; containment only
/// looks at the name text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedName {
    /// Identity of the declaration carrying the name.
    pub symbol: SymbolId,
    /// The name text.
    pub name: String,
}

impl ScopedName {
    /// Create a new scoped name.
    pub fn new(symbol: SymbolId, name: impl Into<String>) -> Self {
        ScopedName {
            symbol,
            name: name.into(),
        }
    }
}

// ============================================================================
// Comparison Mode
// ============================================================================

/// Comparison mode for containment queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Byte-exact (ordinal) comparison.
    #[default]
    Sensitive,
    /// Ordinal comparison under simple case folding.
    Insensitive,
}

impl CaseSensitivity {
    /// Compare two names under this mode without allocating.
    pub fn names_equal(&self, a: &str, b: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

// ============================================================================
// Containment
// ============================================================================

/// A set of names already taken.
///
/// Symbol-backed sets match on name text only; symbol identity plays no
/// part in containment. A linear scan per query is acceptable here: sets
/// are bounded by the members of one type or the names visible at one
/// scope, and queries must not allocate beyond what the comparison
/// requires.
pub trait ReservedNames {
    /// Whether `name` collides with a reserved name under `case`.
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool;
}

impl ReservedNames for [ScopedName] {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        self.iter().any(|entry| case.names_equal(&entry.name, name))
    }
}

impl ReservedNames for Vec<ScopedName> {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        self.as_slice().contains_name(name, case)
    }
}

impl ReservedNames for [String] {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        self.iter().any(|reserved| case.names_equal(reserved, name))
    }
}

impl ReservedNames for HashSet<String> {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.contains(name),
            CaseSensitivity::Insensitive => self.iter().any(|reserved| case.names_equal(reserved, name)),
        }
    }
}

impl ReservedNames for BTreeSet<String> {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.contains(name),
            CaseSensitivity::Insensitive => self.iter().any(|reserved| case.names_equal(reserved, name)),
        }
    }
}

impl<T: ReservedNames + ?Sized> ReservedNames for &T {
    fn contains_name(&self, name: &str, case: CaseSensitivity) -> bool {
        (**self).contains_name(name, case)
    }
}

// ============================================================================
// Tests
// ============================================================================
