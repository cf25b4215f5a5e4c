use std::fmt::{Formatter, Result as FmtResult};

use crate::{Matcher, Outcome, Value};

use super::IntoMatcher;

/// Create a new [`Not`] matcher that inverts the passed `inner` matcher.
pub fn not<M: IntoMatcher>(inner: M) -> Not {
    Not(inner.into_matcher())
}

/// Matcher that inverts the verdict of the inner matcher.
///
/// Undefined verdicts and fatal diagnostics are passed through unchanged, so
/// `not(greater_than(17))` does not accept a string.
#[must_use]
pub struct Not(pub Box<dyn Matcher>);

impl Matcher for Not {
    fn matches(&self, candidate: &Value) -> Outcome {
        let outcome = self.0.matches(candidate);
        if outcome.is_fatal() {
            return outcome;
        }

        Outcome::new(outcome.verdict.negate(), outcome.diagnostic)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not(")?;
        self.0.fmt(f)?;
        write!(f, ")")?;

        Ok(())
    }
}
