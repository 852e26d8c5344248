//! # relurl
//!
//! Classifies URL references as relative or absolute.
//!
//! - **Fast path**: literal prefixes for the common schemes
//! - **Scheme grammar**: RFC 3986 scheme detection, the source of truth
//! - **Classifier**: the ordered decision procedure plus memoization
//!
//! ## Example
//!
//! ```rust
//! use relurl::{Classifier, ClassifyOptions};
//!
//! let classifier = Classifier::new();
//!
//! assert!(classifier.is_relative_url("../images/logo.png"));
//! assert!(!classifier.is_relative_url("https://example.com"));
//! assert!(classifier.is_relative_url("//cdn.example.com/app.js"));
//! assert!(!classifier.is_relative("//cdn.example.com/app.js", &ClassifyOptions::strict()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod classifier;
pub mod config;
pub mod fast_path;
pub mod scheme;

pub use classifier::{is_relative_uncached, Classifier};
pub use config::ClassifierConfig;
pub use fast_path::{match_prefix, KnownScheme};
pub use scheme::{has_scheme, is_absolute_url, is_drive_path};

// Re-export the building blocks
pub use relurl_cache::{CacheConfig, CacheStats, NoopCache, ResultCache};
pub use relurl_core::{CacheKey, Candidate, ClassifyOptions, RelUrlError, Result, VerdictCache};
