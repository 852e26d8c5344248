//! Literal-prefix shortcut for the most common absolute URLs.
//!
//! Most absolute URLs seen in practice start with one of a handful of
//! schemes. Checking those literally is cheaper than running the scheme
//! grammar, and the answer is the same: every prefix here is itself a valid
//! scheme followed by a colon, so [`crate::scheme::has_scheme`] agrees with
//! any match.

use std::fmt;

use relurl_core::constants::{
    FAST_PATH_MIN_LEN, PREFIX_DATA, PREFIX_FILE, PREFIX_FTP, PREFIX_HTTP, PREFIX_HTTPS, PREFIX_WS,
    PREFIX_WSS,
};

/// A scheme recognized by its literal prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownScheme {
    /// `http://`
    Http,
    /// `https://`
    Https,
    /// `file://`
    File,
    /// `data:`
    Data,
    /// `ftp://`
    Ftp,
    /// `ws://`
    Ws,
    /// `wss://`
    Wss,
}

impl KnownScheme {
    /// Every known scheme.
    pub const ALL: [KnownScheme; 7] = [
        KnownScheme::Http,
        KnownScheme::Https,
        KnownScheme::File,
        KnownScheme::Data,
        KnownScheme::Ftp,
        KnownScheme::Ws,
        KnownScheme::Wss,
    ];

    /// The literal prefix matched for this scheme.
    pub fn prefix(self) -> &'static str {
        match self {
            KnownScheme::Http => PREFIX_HTTP,
            KnownScheme::Https => PREFIX_HTTPS,
            KnownScheme::File => PREFIX_FILE,
            KnownScheme::Data => PREFIX_DATA,
            KnownScheme::Ftp => PREFIX_FTP,
            KnownScheme::Ws => PREFIX_WS,
            KnownScheme::Wss => PREFIX_WSS,
        }
    }

    /// The scheme name, without the colon.
    pub fn name(self) -> &'static str {
        match self {
            KnownScheme::Http => "http",
            KnownScheme::Https => "https",
            KnownScheme::File => "file",
            KnownScheme::Data => "data",
            KnownScheme::Ftp => "ftp",
            KnownScheme::Ws => "ws",
            KnownScheme::Wss => "wss",
        }
    }
}

impl fmt::Display for KnownScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the known scheme `s` starts with, if any.
///
/// Only strings longer than [`FAST_PATH_MIN_LEN`] bytes are considered;
/// shorter ones return `None` and are left to the general rule. Matching is
/// case-sensitive.
pub fn match_prefix(s: &str) -> Option<KnownScheme> {
    if s.len() <= FAST_PATH_MIN_LEN {
        return None;
    }

    // Dispatch on the first byte so at most two prefixes are compared.
    let candidates: &[KnownScheme] = match s.as_bytes()[0] {
        b'h' => &[KnownScheme::Http, KnownScheme::Https],
        b'f' => &[KnownScheme::File, KnownScheme::Ftp],
        b'd' => &[KnownScheme::Data],
        b'w' => &[KnownScheme::Ws, KnownScheme::Wss],
        _ => return None,
    };

    candidates
        .iter()
        .copied()
        .find(|scheme| s.starts_with(scheme.prefix()))
}
