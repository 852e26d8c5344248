//! Classifier input.
//!
//! Callers do not always hold a string: values arrive from JSON documents,
//! optional fields, or loosely typed configuration. Anything that is not text
//! is still a valid input and is classified as relative, since no scheme can
//! be read out of it.

use serde_json::Value;

/// A value to classify as a relative or absolute URL reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Text to classify.
    Text(&'a str),
    /// Any non-text value (missing field, number, object, ...).
    NonText,
}

impl<'a> Candidate<'a> {
    /// Returns the text, if any.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Candidate::Text(s) => Some(s),
            Candidate::NonText => None,
        }
    }

    /// Returns true for [`Candidate::NonText`].
    pub fn is_non_text(&self) -> bool {
        matches!(self, Candidate::NonText)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Candidate::Text(s)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(s: &'a String) -> Self {
        Candidate::Text(s.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Candidate<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Candidate::NonText, Candidate::Text)
    }
}

impl<'a> From<&'a Value> for Candidate<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Candidate::Text(s.as_str()),
            _ => Candidate::NonText,
        }
    }
}
