//! Bounded LRU cache for relurl verdicts.
//!
//! Generic in-memory cache with a fixed capacity and least-recently-used
//! eviction, plus a no-op store for running without memoization.

mod cache;
mod noop;

pub use cache::{CacheConfig, CacheStats, ResultCache};
pub use noop::NoopCache;
