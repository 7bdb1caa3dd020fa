//! Core engine for namegen.
//!
//! This crate provides the synchronous, allocation-only half of unique
//! identifier synthesis:
//! - Naming strategies for generating candidate identifiers
//! - Reserved-name sets with case-sensitive and case-folded queries
//! - The uniqueness resolver (first free candidate search)
//! - The suffix-only-change guard for rename flows
//! - Error types shared across the workspace
//!
//! Nothing here holds state between calls or blocks; every operation is a
//! pure computation over the inputs it is handed. Scope collection against
//! a semantic index lives in the `namegen` crate.

pub mod error;
pub mod guard;
pub mod reserved;
pub mod resolve;
pub mod strategy;
