//! Domain types for relurl.
//!
//! - [`Candidate`]: the value handed to the classifier
//! - [`ClassifyOptions`]: per-call classification switches
//! - [`CacheKey`]: memoization key derived from a candidate and its options

mod candidate;
mod key;
mod options;

pub use candidate::*;
pub use key::*;
pub use options::*;
