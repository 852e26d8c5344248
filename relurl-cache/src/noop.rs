//! Cache that stores nothing.

use relurl_core::traits::VerdictCache;
use relurl_core::types::CacheKey;

/// A [`VerdictCache`] that never remembers anything.
///
/// Used when memoization is switched off, and as a baseline when measuring
/// what the real cache saves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCache;

impl VerdictCache for NoopCache {
    fn get(&self, _key: &CacheKey) -> Option<bool> {
        None
    }

    fn set(&self, _key: CacheKey, _verdict: bool) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}
