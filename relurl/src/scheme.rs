//! RFC 3986 scheme detection.
//!
//! A reference is absolute when it opens with a scheme: a letter, then any
//! run of letters, digits, `+`, `-` or `.`, then a colon (RFC 3986 §3.1).
//! Only the prefix is checked; whatever follows the colon is not inspected.
//!
//! Windows drive paths (`C:\Users`) fit that grammar with a one-letter scheme
//! but are filesystem paths, so they are carved out first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fast_path::match_prefix;

/// Scheme prefix, anchored at the start. ASCII classes only.
static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*:").expect("SCHEME_REGEX should compile - this is a bug")
});

/// Drive letter, colon, backslash.
static DRIVE_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]:\\").expect("DRIVE_PATH_REGEX should compile - this is a bug")
});

/// Returns true if `s` starts with a syntactically valid scheme and colon.
pub fn has_scheme(s: &str) -> bool {
    SCHEME_REGEX.is_match(s)
}

/// Returns true if `s` starts like a Windows drive path (`C:\`).
pub fn is_drive_path(s: &str) -> bool {
    DRIVE_PATH_REGEX.is_match(s)
}

/// Returns true if `s` is an absolute URL reference.
///
/// Tries the literal fast path, then rules out drive paths, then falls back
/// to the scheme grammar. No memoization.
pub fn is_absolute_url(s: &str) -> bool {
    if match_prefix(s).is_some() {
        return true;
    }
    if is_drive_path(s) {
        return false;
    }
    has_scheme(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("mailto:test@example.com")]
    #[test_case("tel:+123")]
    #[test_case("urn:isbn:0451450523")]
    #[test_case("git+ssh://git@example.com/repo.git")]
    #[test_case("coap.tcp://device")]
    #[test_case("x-custom-1:payload")]
    #[test_case("a:")]
    #[test_case("c:/windows")]
    fn test_has_scheme(input: &str) {
        assert!(has_scheme(input));
        assert!(is_absolute_url(input));
    }

    #[test_case("" ; "empty")]
    #[test_case(":no-scheme" ; "leading colon")]
    #[test_case("1http://example.com" ; "leading digit")]
    #[test_case("+a:b" ; "leading plus")]
    #[test_case("/path:with/colon" ; "leading slash")]
    #[test_case("my file:x" ; "space in scheme")]
    #[test_case("héllo:world" ; "non ascii in scheme")]
    #[test_case("path/to/resource" ; "plain path")]
    fn test_no_scheme(input: &str) {
        assert!(!has_scheme(input));
    }

    #[test_case("C:\\")]
    #[test_case("c:\\Users\\me")]
    #[test_case("Z:\\x")]
    fn test_drive_paths_are_not_absolute(input: &str) {
        assert!(is_drive_path(input));
        // The grammar alone would call these absolute.
        assert!(has_scheme(input));
        assert!(!is_absolute_url(input));
    }

    #[test_case("CD:\\foo" ; "two letters")]
    #[test_case("C:/foo" ; "forward slash")]
    #[test_case("\\\\server\\share" ; "unc path")]
    fn test_not_drive_paths(input: &str) {
        assert!(!is_drive_path(input));
    }

    #[test]
    fn test_scheme_only_checks_prefix() {
        assert!(is_absolute_url("http:"));
        assert!(is_absolute_url("https:relative/looking"));
        assert!(is_absolute_url("javascript:void(0)"));
    }
}
