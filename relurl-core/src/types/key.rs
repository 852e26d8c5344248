//! Memoization keys.

use std::fmt;

use crate::constants::NO_PROTOCOL_RELATIVE_TAG;
use crate::types::ClassifyOptions;

/// Key under which a verdict is memoized.
///
/// The variant carries the option value, so the same string classified under
/// different options never shares an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Computed with `allow_protocol_relative == true`.
    Plain(String),
    /// Computed with `allow_protocol_relative == false`.
    NoProtocolRelative(String),
}

impl CacheKey {
    /// Derives the key for `candidate` under `options`.
    pub fn new(candidate: &str, options: &ClassifyOptions) -> Self {
        if options.allow_protocol_relative {
            CacheKey::Plain(candidate.to_owned())
        } else {
            CacheKey::NoProtocolRelative(candidate.to_owned())
        }
    }

    /// The candidate string the key was derived from.
    pub fn as_str(&self) -> &str {
        match self {
            CacheKey::Plain(s) | CacheKey::NoProtocolRelative(s) => s,
        }
    }

    /// The options the key was derived under.
    pub fn options(&self) -> ClassifyOptions {
        ClassifyOptions {
            allow_protocol_relative: matches!(self, CacheKey::Plain(_)),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Plain(s) => f.write_str(s),
            CacheKey::NoProtocolRelative(s) => write!(f, "{}:{}", NO_PROTOCOL_RELATIVE_TAG, s),
        }
    }
}
