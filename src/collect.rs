//! Reserved-name scope collection and the operations built on top of it.
//!
//! Collectors produce the set of names that would collide at a given
//! scope; the facade functions pair a collector with a naming strategy
//! from `namegen-core`. Cancellation is cooperative throughout: a
//! cancelled collection aborts with [`NameError::Cancelled`] and never
//! yields a partial reserved set, since a partial set could under-report
//! collisions.

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use namegen_core::error::NameError;
use namegen_core::reserved::{CaseSensitivity, SymbolId};
use namegen_core::resolve;
use namegen_core::strategy::NamingStrategy;

use crate::semantic::{ContainerId, PositionId, SemanticIndex, WorkspaceId};

fn check_cancelled(cancel: &CancellationToken) -> Result<(), NameError> {
    if cancel.is_cancelled() {
        Err(NameError::Cancelled)
    } else {
        Ok(())
    }
}

// ============================================================================
// Scope Collectors
// ============================================================================

/// Names of all members declared directly in `container`.
pub fn member_names(index: &dyn SemanticIndex, container: ContainerId) -> HashSet<String> {
    index
        .container_members(container)
        .into_iter()
        .map(|member| member.name)
        .collect()
}

/// Names visible at `position`.
pub async fn visible_names(
    index: &dyn SemanticIndex,
    position: PositionId,
    cancel: &CancellationToken,
) -> Result<HashSet<String>, NameError> {
    check_cancelled(cancel)?;

    let names = index
        .visible_names_at(position, cancel)
        .await?
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    Ok(names)
}

/// Names declared within the unit enclosing `position`, plus the names
/// visible there.
pub async fn local_names(
    index: &dyn SemanticIndex,
    position: PositionId,
    cancel: &CancellationToken,
) -> Result<HashSet<String>, NameError> {
    check_cancelled(cancel)?;

    let mut names: HashSet<String> = index
        .declared_in_enclosing_unit(position, cancel)
        .await?
        .into_iter()
        .map(|entry| entry.name)
        .collect();

    check_cancelled(cancel)?;
    for entry in index.visible_names_at(position, cancel).await? {
        names.insert(entry.name);
    }

    Ok(names)
}

/// Reserved names for renaming `symbol` across `workspace`.
///
/// Seeds the set with the names of the symbol's sibling members (the
/// symbol never reserves its own current name against itself, matched by
/// identity), then unions the names visible at every non-implicit,
/// non-candidate usage location of the symbol. This is the expensive
/// path: proportional to references times names visible per site.
pub async fn rename_scope(
    index: &dyn SemanticIndex,
    symbol: SymbolId,
    workspace: WorkspaceId,
    cancel: &CancellationToken,
) -> Result<HashSet<String>, NameError> {
    check_cancelled(cancel)?;

    let mut reserved: HashSet<String> = match index.enclosing_container(symbol) {
        Some(container) => index
            .container_members(container)
            .into_iter()
            .filter(|member| member.symbol != symbol)
            .map(|member| member.name)
            .collect(),
        None => HashSet::new(),
    };

    let references = index.find_references(symbol, workspace, cancel).await?;
    let mut scanned = 0usize;

    for location in &references {
        if !location.is_binding_site() {
            continue;
        }
        check_cancelled(cancel)?;

        for entry in index.visible_names_at(location.position, cancel).await? {
            if entry.symbol != symbol {
                reserved.insert(entry.name);
            }
        }
        scanned += 1;
    }

    debug!(
        "scanned {} of {} reference sites for {}: {} reserved names",
        scanned,
        references.len(),
        symbol,
        reserved.len()
    );
    Ok(reserved)
}

// ============================================================================
// Facade Operations
// ============================================================================

/// Ensure `base` does not collide with any member of `container`.
pub fn ensure_unique_member_name(
    base: &str,
    index: &dyn SemanticIndex,
    container: ContainerId,
) -> Result<String, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }
    resolve::ensure_unique_name(base, &member_names(index, container))
}

/// Whether `name` is free among the members of `container`.
pub fn is_unique_member_name(
    name: &str,
    index: &dyn SemanticIndex,
    container: ContainerId,
    case: CaseSensitivity,
) -> bool {
    resolve::is_unique(name, &member_names(index, container), case)
}

/// Member-name uniqueness for `symbol`, falling back to the names
/// visible at `position` when the symbol has no enclosing container.
pub async fn ensure_unique_member_name_for(
    base: &str,
    index: &dyn SemanticIndex,
    symbol: SymbolId,
    position: PositionId,
    cancel: &CancellationToken,
) -> Result<String, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }

    let reserved = match index.enclosing_container(symbol) {
        Some(container) => member_names(index, container),
        None => visible_names(index, position, cancel).await?,
    };
    resolve::ensure_unique_name(base, &reserved)
}

/// Ensure `base` does not collide with any local name at `position`.
pub async fn ensure_unique_local_name(
    base: &str,
    index: &dyn SemanticIndex,
    position: PositionId,
    cancel: &CancellationToken,
) -> Result<String, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }

    let reserved = local_names(index, position, cancel).await?;
    resolve::ensure_unique_name(base, &reserved)
}

/// Async-method naming over a whole-workspace reference scan.
///
/// The first attempt is `base` + `Async`; collisions insert the counter
/// before the tag (`base2Async`, `base3Async`, ...).
pub async fn ensure_unique_async_name(
    base: &str,
    index: &dyn SemanticIndex,
    symbol: SymbolId,
    workspace: WorkspaceId,
    cancel: &CancellationToken,
) -> Result<String, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }

    let reserved = rename_scope(index, symbol, workspace, cancel).await?;
    resolve::ensure_unique(
        base,
        &reserved,
        NamingStrategy::AsyncMethod,
        CaseSensitivity::Sensitive,
    )
}

/// Numbered naming over a whole-workspace reference scan.
pub async fn ensure_unique_name_across_references(
    base: &str,
    index: &dyn SemanticIndex,
    symbol: SymbolId,
    workspace: WorkspaceId,
    cancel: &CancellationToken,
) -> Result<String, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }

    let reserved = rename_scope(index, symbol, workspace, cancel).await?;
    resolve::ensure_unique_name(base, &reserved)
}

/// Whether `name` stays collision-free at every reference site of
/// `symbol`.
pub async fn is_unique_name_across_references(
    name: &str,
    index: &dyn SemanticIndex,
    symbol: SymbolId,
    workspace: WorkspaceId,
    cancel: &CancellationToken,
) -> Result<bool, NameError> {
    let reserved = rename_scope(index, symbol, workspace, cancel).await?;
    Ok(resolve::is_unique_name(name, &reserved))
}

/// Rename-from-existing flow for a local: resolve `base` against the
/// local names at `position`, suppressing no-op results and results that
/// only adjust a numeric suffix of `old_name`.
pub async fn propose_local_rename(
    old_name: &str,
    base: &str,
    index: &dyn SemanticIndex,
    position: PositionId,
    cancel: &CancellationToken,
) -> Result<Option<String>, NameError> {
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }
    if base == old_name {
        return Ok(None);
    }

    let reserved = local_names(index, position, cancel).await?;
    resolve::propose_unique(
        old_name,
        base,
        &reserved,
        NamingStrategy::Numbered,
        CaseSensitivity::Sensitive,
    )
}

// ============================================================================
// Tests
// ============================================================================
