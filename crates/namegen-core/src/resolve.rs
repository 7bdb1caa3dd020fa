//! Uniqueness resolution: the first-free-candidate search.
//!
//! The resolver is a pure search over the (strategy x reserved set)
//! product. It is agnostic to why a name is reserved; callers hand it a
//! [`ReservedNames`] source collected elsewhere.

use tracing::trace;

use crate::error::NameError;
use crate::guard;
use crate::reserved::{CaseSensitivity, ReservedNames};
use crate::strategy::{NamingStrategy, FIRST_ATTEMPT};

/// Defensive upper bound on candidate attempts.
///
/// Every attempt ordinal yields a distinct candidate and reserved sets
/// are finite, so the search terminates long before this bound for any
/// real input. Hitting it means a reserved source with pathological
/// containment behavior, reported as [`NameError::ResolutionExhausted`].
pub const ATTEMPT_LIMIT: u32 = 1_000_000;

/// Return the first candidate, in increasing attempt order, that is not
/// contained in `reserved` under `case`.
///
/// Fails with [`NameError::InvalidArgument`] for an empty base name,
/// before any strategy is invoked.
pub fn ensure_unique<R>(
    base: &str,
    reserved: &R,
    strategy: NamingStrategy,
    case: CaseSensitivity,
) -> Result<String, NameError>
where
    R: ReservedNames + ?Sized,
{
    if base.is_empty() {
        return Err(NameError::empty_base_name());
    }

    let mut attempt = FIRST_ATTEMPT;
    loop {
        let candidate = strategy.candidate(base, attempt)?;
        if !reserved.contains_name(&candidate, case) {
            if attempt > FIRST_ATTEMPT {
                trace!(
                    "resolved '{}' to '{}' after {} attempts",
                    base,
                    candidate,
                    attempt
                );
            }
            return Ok(candidate);
        }
        if attempt >= ATTEMPT_LIMIT {
            return Err(NameError::ResolutionExhausted {
                base: base.to_string(),
                attempts: attempt,
            });
        }
        attempt += 1;
    }
}

/// [`ensure_unique`] with the default strategy and case-sensitive
/// comparison.
pub fn ensure_unique_name<R>(base: &str, reserved: &R) -> Result<String, NameError>
where
    R: ReservedNames + ?Sized,
{
    ensure_unique(
        base,
        reserved,
        NamingStrategy::Numbered,
        CaseSensitivity::Sensitive,
    )
}

/// Whether `name` is already free in `reserved` under `case`.
pub fn is_unique<R>(name: &str, reserved: &R, case: CaseSensitivity) -> bool
where
    R: ReservedNames + ?Sized,
{
    !reserved.contains_name(name, case)
}

/// [`is_unique`] with case-sensitive comparison.
pub fn is_unique_name<R>(name: &str, reserved: &R) -> bool
where
    R: ReservedNames + ?Sized,
{
    is_unique(name, reserved, CaseSensitivity::Sensitive)
}

/// Rename-from-existing flow: resolve `base` against `reserved` and
/// suppress results that would not change anything meaningful.
///
/// Returns `None` when `base` equals `old_name`, or when the resolved
/// name differs from `old_name` only by a numeric suffix on an identical
/// prefix (see [`guard::is_suffix_only_change`]). Otherwise returns the
/// resolved name.
pub fn propose_unique<R>(
    old_name: &str,
    base: &str,
    reserved: &R,
    strategy: NamingStrategy,
    case: CaseSensitivity,
) -> Result<Option<String>, NameError>
where
    R: ReservedNames + ?Sized,
{
    if base == old_name {
        return Ok(None);
    }

    let resolved = ensure_unique(base, reserved, strategy, case)?;
    if guard::is_suffix_only_change(old_name, base, &resolved) {
        return Ok(None);
    }

    Ok(Some(resolved))
}

// ============================================================================
// Tests
// ============================================================================
