use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Data;
use crate::{Matcher, Outcome, Value};

use super::IntoMatcher;

/// Create a new [`Error`] matcher that applies the passed `inner` matcher to
/// the message of an error candidate.
pub fn error<M: IntoMatcher>(inner: M) -> Error {
    Error(inner.into_matcher())
}

/// Matcher that checks the message (the [`Display`](std::fmt::Display)
/// output) of a non-nil error.
#[must_use]
pub struct Error(pub Box<dyn Matcher>);

impl Matcher for Error {
    fn matches(&self, candidate: &Value) -> Outcome {
        match candidate.data() {
            Data::Error(message) => self.0.matches(&Value::of(message.as_str())),
            _ => Outcome::undefined("which is not an error"),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "error ")?;
        self.0.fmt(f)?;

        Ok(())
    }
}
