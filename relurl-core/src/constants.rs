//! Classification constants for relurl.
//!
//! The literal prefixes here are a shortcut layered in front of the general
//! scheme grammar. Every prefix listed must also satisfy that grammar.

// ═══════════════════════════════════════════════════════════════════════════════
// FAST-PATH PREFIXES
// ═══════════════════════════════════════════════════════════════════════════════

/// `http://` prefix.
pub const PREFIX_HTTP: &str = "http://";

/// `https://` prefix.
pub const PREFIX_HTTPS: &str = "https://";

/// `file://` prefix.
pub const PREFIX_FILE: &str = "file://";

/// `data:` prefix. Data URLs carry no authority, hence no slashes.
pub const PREFIX_DATA: &str = "data:";

/// `ftp://` prefix.
pub const PREFIX_FTP: &str = "ftp://";

/// `ws://` prefix.
pub const PREFIX_WS: &str = "ws://";

/// `wss://` prefix.
pub const PREFIX_WSS: &str = "wss://";

/// Strings must be strictly longer than this before the literal prefixes are
/// tried. Shorter strings go straight to the general rule.
pub const FAST_PATH_MIN_LEN: usize = 7;

// ═══════════════════════════════════════════════════════════════════════════════
// PROTOCOL-RELATIVE REFERENCES
// ═══════════════════════════════════════════════════════════════════════════════

/// Network-path reference prefix (RFC 3986 §4.2).
pub const NETWORK_PATH_PREFIX: &str = "//";

// ═══════════════════════════════════════════════════════════════════════════════
// RESULT CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default number of distinct keys held by a result cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Tag that separates keys computed with `allow_protocol_relative == false`
/// from plain keys.
pub const NO_PROTOCOL_RELATIVE_TAG: &str = "noProtocolRelative";

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Enables or disables memoization (`true`/`false`/`1`/`0`).
pub const ENV_ENABLE_CACHE: &str = "RELURL_ENABLE_CACHE";

/// Result cache capacity.
pub const ENV_CACHE_CAPACITY: &str = "RELURL_CACHE_CAPACITY";

/// Default for `allow_protocol_relative`.
pub const ENV_ALLOW_PROTOCOL_RELATIVE: &str = "RELURL_ALLOW_PROTOCOL_RELATIVE";
