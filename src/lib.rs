//! Namegen: unique identifier synthesis for rename refactors.
//!
//! Given a desired base name and a scope of names already in use, produce
//! a name guaranteed not to collide, using a pluggable naming strategy;
//! when renaming an existing symbol, additionally suppress renames that
//! only shuffle a numeric suffix. The pure engine lives in
//! `namegen-core`; this crate adds the semantic-index seam and the
//! reserved-name scope collectors, including the whole-workspace
//! reference scan used for cross-codebase renames.

// Core engine - re-exported from namegen-core
pub use namegen_core::error;
pub use namegen_core::guard;
pub use namegen_core::reserved;
pub use namegen_core::resolve;
pub use namegen_core::strategy;

// Scope collection against an external semantic index
pub mod collect;
pub mod semantic;

pub use crate::collect::{
    ensure_unique_async_name, ensure_unique_local_name, ensure_unique_member_name,
    ensure_unique_member_name_for, ensure_unique_name_across_references, is_unique_member_name,
    is_unique_name_across_references, local_names, member_names, propose_local_rename,
    rename_scope, visible_names,
};
pub use crate::semantic::{ContainerId, PositionId, ReferenceLocation, SemanticIndex, WorkspaceId};
pub use namegen_core::error::NameError;
pub use namegen_core::guard::{is_suffix_only_change, RenameProposal};
pub use namegen_core::reserved::{CaseSensitivity, ReservedNames, ScopedName, SymbolId};
pub use namegen_core::resolve::{
    ensure_unique, ensure_unique_name, is_unique, is_unique_name, propose_unique, ATTEMPT_LIMIT,
};
pub use namegen_core::strategy::{NamingStrategy, FIRST_ATTEMPT};
