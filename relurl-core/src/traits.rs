//! Common traits for relurl.
//!
//! The classifier talks to its memoization layer only through
//! [`VerdictCache`], so callers can inject a shared cache, a private one, or
//! none at all.

use crate::types::CacheKey;

// ═══════════════════════════════════════════════════════════════════════════════
// VERDICT CACHE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Storage for memoized "is relative" verdicts.
///
/// Every method is a single atomic operation on the underlying store.
/// Implementations never fail: a missing key is reported as `None`.
pub trait VerdictCache: Send + Sync {
    /// Looks up a verdict. A hit may refresh the entry's recency.
    fn get(&self, key: &CacheKey) -> Option<bool>;

    /// Stores a verdict, replacing any previous one for `key`.
    fn set(&self, key: CacheKey, verdict: bool);

    /// Removes every entry.
    fn clear(&self);

    /// Number of stored verdicts.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
