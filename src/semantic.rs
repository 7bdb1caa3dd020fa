//! External capability seam: what the engine consumes from a semantic
//! analyzer.
//!
//! The engine never parses source or builds a reference index itself. It
//! is handed a [`SemanticIndex`] and a handful of opaque handles minted
//! by that index, and only ever passes the handles back. Reference
//! enumeration and per-position lookup are modeled as asynchronous,
//! cancelable operations since they may span files and modules.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use namegen_core::error::NameError;
use namegen_core::reserved::{ScopedName, SymbolId};

// ============================================================================
// Handle Types
// ============================================================================

/// Unique identifier for a container declaration (type, module, impl
/// block) within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ContainerId(pub u32);

impl ContainerId {
    /// Create a new container ID.
    pub fn new(id: u32) -> Self {
        ContainerId(id)
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cont_{}", self.0)
    }
}

/// Unique identifier for a source position known to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PositionId(pub u32);

impl PositionId {
    /// Create a new position ID.
    pub fn new(id: u32) -> Self {
        PositionId(id)
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pos_{}", self.0)
    }
}

/// Unique identifier for a reference-scan universe (a workspace
/// snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct WorkspaceId(pub u32);

impl WorkspaceId {
    /// Create a new workspace ID.
    pub fn new(id: u32) -> Self {
        WorkspaceId(id)
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ws_{}", self.0)
    }
}

// ============================================================================
// Reference Locations
// ============================================================================

/// A source position where a symbol is used, as opposed to declared.
///
/// Implicit references are synthesized by tooling inference; candidate
/// references were left ambiguous by resolution. Neither reliably
/// reflects a real name-binding site, so reserved-name scanning skips
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLocation {
    /// Position of the usage.
    pub position: PositionId,
    /// Reference synthesized by tooling inference.
    pub is_implicit: bool,
    /// Reference left ambiguous by resolution.
    pub is_candidate: bool,
}

impl ReferenceLocation {
    /// Create an explicit, resolved reference location.
    pub fn new(position: PositionId) -> Self {
        ReferenceLocation {
            position,
            is_implicit: false,
            is_candidate: false,
        }
    }

    /// Mark this location as implicit.
    pub fn implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }

    /// Mark this location as a candidate (ambiguous) reference.
    pub fn candidate(mut self) -> Self {
        self.is_candidate = true;
        self
    }

    /// Whether this location reliably reflects a real name binding.
    pub fn is_binding_site(&self) -> bool {
        !self.is_implicit && !self.is_candidate
    }
}

// ============================================================================
// Semantic Index
// ============================================================================

/// Semantic lookups supplied by an external analyzer.
///
/// Implementations are expected to be cheap to query for container
/// members and enclosing containers, while position lookups and
/// reference enumeration may suspend on I/O. Every cancelable operation
/// receives a [`CancellationToken`] and must honor it promptly.
///
/// The `#[async_trait]` macro is required because callers hold indexes
/// as `&dyn SemanticIndex`, which requires object safety. Native async
/// fn in traits is not object-safe in Rust.
#[async_trait]
pub trait SemanticIndex: Send + Sync {
    /// Names of all members declared directly in `container`.
    fn container_members(&self, container: ContainerId) -> Vec<ScopedName>;

    /// The container declaring `symbol`, or `None` for symbols without an
    /// enclosing container (e.g. top-level declarations).
    fn enclosing_container(&self, symbol: SymbolId) -> Option<ContainerId>;

    /// Every name visible at `position`: locals, parameters, and members
    /// in scope there.
    async fn visible_names_at(
        &self,
        position: PositionId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScopedName>, NameError>;

    /// Names declared within the unit (function or method body) that
    /// encloses `position`.
    async fn declared_in_enclosing_unit(
        &self,
        position: PositionId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScopedName>, NameError>;

    /// Every usage location of `symbol` across `workspace`.
    ///
    /// Locations flagged implicit or candidate are reported as-is;
    /// filtering is the scanner's job.
    async fn find_references(
        &self,
        symbol: SymbolId,
        workspace: WorkspaceId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReferenceLocation>, NameError>;
}

// ============================================================================
// Tests
// ============================================================================
