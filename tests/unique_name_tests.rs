//! End-to-end tests for the public naming surface.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use namegen::{
    ensure_unique, ensure_unique_async_name, ensure_unique_name, is_suffix_only_change, is_unique,
    rename_scope, CaseSensitivity, ContainerId, NameError, NamingStrategy, PositionId,
    ReferenceLocation, ScopedName, SemanticIndex, SymbolId, WorkspaceId,
};

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn numbered_resolution_skips_taken_suffixes() {
    let reserved = set(&["value", "value2"]);
    assert_eq!(ensure_unique_name("value", &reserved).unwrap(), "value3");
}

#[test]
fn async_resolution_tags_the_first_attempt() {
    let reserved = set(&[]);
    let name = ensure_unique(
        "item",
        &reserved,
        NamingStrategy::AsyncMethod,
        CaseSensitivity::Sensitive,
    )
    .unwrap();
    assert_eq!(name, "itemAsync");
}

#[test]
fn async_resolution_counts_before_the_tag() {
    let reserved = set(&["computeAsync"]);
    let name = ensure_unique(
        "compute",
        &reserved,
        NamingStrategy::AsyncMethod,
        CaseSensitivity::Sensitive,
    )
    .unwrap();
    assert_eq!(name, "compute2Async");
}

#[test]
fn case_sensitivity_is_a_query_time_choice() {
    let reserved = set(&["foo"]);
    assert!(is_unique("Foo", &reserved, CaseSensitivity::Sensitive));
    assert!(!is_unique("Foo", &reserved, CaseSensitivity::Insensitive));
}

#[test]
fn suffix_only_guard_truth_table() {
    assert!(is_suffix_only_change("list2", "list", "list3"));
    assert!(!is_suffix_only_change("list2", "map", "map"));
    assert!(!is_suffix_only_change("list", "list", "list"));
}

/// Minimal semantic index for one method symbol with two reference sites.
struct TwoSiteIndex {
    visible: HashMap<PositionId, Vec<ScopedName>>,
    block_at: Option<usize>,
}

impl TwoSiteIndex {
    fn new() -> Self {
        let mut visible = HashMap::new();
        visible.insert(
            PositionId::new(1),
            vec![
                ScopedName::new(SymbolId::new(1), "fetch"),
                ScopedName::new(SymbolId::new(10), "client"),
            ],
        );
        visible.insert(
            PositionId::new(2),
            vec![ScopedName::new(SymbolId::new(11), "fetchAsync")],
        );
        TwoSiteIndex {
            visible,
            block_at: None,
        }
    }
}

#[async_trait]
impl SemanticIndex for TwoSiteIndex {
    fn container_members(&self, _container: ContainerId) -> Vec<ScopedName> {
        vec![
            ScopedName::new(SymbolId::new(1), "fetch"),
            ScopedName::new(SymbolId::new(2), "send"),
        ]
    }

    fn enclosing_container(&self, symbol: SymbolId) -> Option<ContainerId> {
        if symbol == SymbolId::new(1) {
            Some(ContainerId::new(1))
        } else {
            None
        }
    }

    async fn visible_names_at(
        &self,
        position: PositionId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScopedName>, NameError> {
        if let Some(block_at) = self.block_at {
            if position == PositionId::new(block_at as u32) {
                cancel.cancel();
            }
        }
        if cancel.is_cancelled() {
            return Err(NameError::Cancelled);
        }
        Ok(self.visible.get(&position).cloned().unwrap_or_default())
    }

    async fn declared_in_enclosing_unit(
        &self,
        _position: PositionId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScopedName>, NameError> {
        if cancel.is_cancelled() {
            return Err(NameError::Cancelled);
        }
        Ok(vec![])
    }

    async fn find_references(
        &self,
        _symbol: SymbolId,
        _workspace: WorkspaceId,
        cancel: &CancellationToken,
    ) -> Result<Vec<ReferenceLocation>, NameError> {
        if cancel.is_cancelled() {
            return Err(NameError::Cancelled);
        }
        Ok(vec![
            ReferenceLocation::new(PositionId::new(1)),
            ReferenceLocation::new(PositionId::new(2)),
        ])
    }
}

#[tokio::test]
async fn async_rename_scans_every_reference_site() {
    let index = TwoSiteIndex::new();
    let cancel = CancellationToken::new();

    // "fetchAsync" is visible at the second site, so the tagged first
    // attempt collides and the counter lands before the tag.
    let name = ensure_unique_async_name(
        "fetch",
        &index,
        SymbolId::new(1),
        WorkspaceId::new(1),
        &cancel,
    )
    .await
    .unwrap();
    assert_eq!(name, "fetch2Async");
}

#[tokio::test]
async fn scanned_scope_never_reserves_the_symbols_own_name() {
    let index = TwoSiteIndex::new();
    let cancel = CancellationToken::new();

    let reserved = rename_scope(&index, SymbolId::new(1), WorkspaceId::new(1), &cancel)
        .await
        .unwrap();
    assert!(reserved.contains("send"));
    assert!(reserved.contains("client"));
    assert!(reserved.contains("fetchAsync"));
    assert!(!reserved.contains("fetch"));
}

#[tokio::test]
async fn cancellation_mid_scan_yields_no_reserved_set() {
    let mut index = TwoSiteIndex::new();
    index.block_at = Some(1);
    let cancel = CancellationToken::new();

    let result = rename_scope(&index, SymbolId::new(1), WorkspaceId::new(1), &cancel).await;
    assert!(matches!(result, Err(NameError::Cancelled)));
}
