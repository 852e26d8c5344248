//! # relurl Core
//!
//! Core types, errors, and traits shared by the relurl crates.
//!
//! - **Types**: candidates, classification options, cache keys
//! - **Errors**: the configuration-edge error type
//! - **Constants**: literal prefixes, default capacity, key tag
//! - **Traits**: the verdict cache seam the classifier depends on
//!
//! ## Example
//!
//! ```rust
//! use relurl_core::{CacheKey, Candidate, ClassifyOptions};
//!
//! let opts = ClassifyOptions::default();
//! assert!(opts.allow_protocol_relative);
//!
//! let key = CacheKey::new("//cdn.example.com/app.js", &opts);
//! assert_eq!(key.as_str(), "//cdn.example.com/app.js");
//!
//! assert!(matches!(Candidate::from(None::<&str>), Candidate::NonText));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{RelUrlError, Result};
pub use traits::*;
pub use types::*;
