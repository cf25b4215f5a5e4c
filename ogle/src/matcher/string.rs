use std::fmt::{Formatter, Result as FmtResult};

use regex::bytes::Regex as BytesRegex;
use regex::Regex;

use crate::error::or_panic;
use crate::value::quote;
use crate::{Error, Matcher, Outcome, Value};

/* HasSubstr */

/// Create a new [`HasSubstr`] matcher for the passed `substr`.
pub fn has_substr<S: Into<String>>(substr: S) -> HasSubstr {
    HasSubstr(substr.into())
}

/// Matcher that checks if a string candidate contains the given substring.
#[must_use]
#[derive(Debug)]
pub struct HasSubstr(pub String);

impl Matcher for HasSubstr {
    fn matches(&self, candidate: &Value) -> Outcome {
        match candidate.as_str() {
            Some(s) => Outcome::from_bool(s.contains(self.0.as_str())),
            None => Outcome::undefined("which is not a string"),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "has substring {}", quote(&self.0))
    }
}

/* MatchesRegexp */

/// Create a new [`MatchesRegexp`] matcher for the passed `pattern`.
///
/// # Panics
/// Panics if `pattern` is not a valid regular expression.
pub fn matches_regexp<S: AsRef<str>>(pattern: S) -> MatchesRegexp {
    or_panic(MatchesRegexp::try_new(pattern))
}

/// Matcher that checks if a string or byte slice candidate contains a match
/// of the given regular expression.
///
/// The pattern is not anchored, use `^` and `$` to match the whole candidate.
#[must_use]
#[derive(Debug)]
pub struct MatchesRegexp {
    text: Regex,
    bytes: BytesRegex,
}

impl MatchesRegexp {
    /// Create a new [`MatchesRegexp`] matcher.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if `pattern` could not be compiled.
    pub fn try_new<S: AsRef<str>>(pattern: S) -> Result<Self, Error> {
        let pattern = pattern.as_ref();

        Ok(Self {
            text: Regex::new(pattern)?,
            bytes: BytesRegex::new(pattern)?,
        })
    }
}

impl Matcher for MatchesRegexp {
    fn matches(&self, candidate: &Value) -> Outcome {
        if let Some(s) = candidate.as_str() {
            Outcome::from_bool(self.text.is_match(s))
        } else if let Some(bytes) = candidate.as_bytes() {
            Outcome::from_bool(self.bytes.is_match(&bytes))
        } else {
            Outcome::undefined("which is not a string or byte slice")
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "matches regexp {}", quote(self.text.as_str()))
    }
}
