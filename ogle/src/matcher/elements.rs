use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{Data, Kind};
use crate::{Diagnostic, Matcher, Outcome, Value, Verdict};

use super::{write_joined, IntoMatcher};

/// Returns the items of an array or slice candidate. A nil slice has no items.
fn items(candidate: &Value) -> Option<&[Value]> {
    match (candidate.kind(), candidate.data()) {
        (Kind::Slice, Data::Nil) => Some(&[]),
        (_, _) => candidate.items(),
    }
}

/* ElementsAre */

/// Create a new [`ElementsAre`] matcher from the passed `matchers`.
///
/// Use the [`elements_are!`](crate::elements_are) macro to mix matchers and
/// plain values.
pub fn elements_are(matchers: Vec<Box<dyn Matcher>>) -> ElementsAre {
    ElementsAre(matchers)
}

/// Matcher that checks an array or slice element-wise: the candidate must
/// have exactly one element per inner matcher, and each element must match
/// the matcher at the same position.
#[must_use]
pub struct ElementsAre(pub Vec<Box<dyn Matcher>>);

impl Matcher for ElementsAre {
    fn matches(&self, candidate: &Value) -> Outcome {
        let Some(items) = items(candidate) else {
            return Outcome::undefined("which is not an array or slice");
        };

        if items.len() != self.0.len() {
            return Outcome::mismatch(format!("which is of length {}", items.len()));
        }

        let mut failed = None;
        for (i, (m, item)) in self.0.iter().zip(items).enumerate() {
            let outcome = m.matches(item);
            if outcome.is_match() {
                continue;
            }

            let clause = if outcome.diagnostic.is_empty() {
                format!("whose element {i} doesn't match")
            } else {
                format!("whose element {i} doesn't match: {}", outcome.diagnostic)
            };

            if outcome.is_fatal() {
                return Outcome::new(Verdict::Undefined, Diagnostic::fatal(clause));
            }

            failed.get_or_insert(clause);
        }

        match failed {
            Some(clause) => Outcome::mismatch(clause),
            None => Outcome::matched(),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "elements are: [")?;
        write_joined(f, &self.0, ", ")?;
        write!(f, "]")?;

        Ok(())
    }
}

/* Contains */

/// Create a new [`Contains`] matcher for the passed `inner` matcher or value.
pub fn contains<M: IntoMatcher>(inner: M) -> Contains {
    Contains(inner.into_matcher())
}

/// Matcher that checks if at least one element of an array or slice matches
/// the inner matcher.
#[must_use]
pub struct Contains(pub Box<dyn Matcher>);

impl Matcher for Contains {
    fn matches(&self, candidate: &Value) -> Outcome {
        match candidate.items() {
            Some(items) => Outcome::from_bool(items.iter().any(|x| self.0.matches(x).is_match())),
            None => Outcome::undefined("which is not an array or slice"),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "contains: ")?;
        self.0.fmt(f)?;

        Ok(())
    }
}
