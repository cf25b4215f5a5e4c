use std::fmt::{Formatter, Result as FmtResult};

use crate::{Matcher, Outcome, Value, Verdict};

use super::write_joined;

/// Create a new [`AllOf`] matcher from the passed `matchers`.
///
/// Use the [`all_of!`](crate::all_of) macro to mix matchers and plain values.
pub fn all_of(matchers: Vec<Box<dyn Matcher>>) -> AllOf {
    AllOf(matchers)
}

/// Matcher that accepts a candidate only if every inner matcher accepts it.
///
/// An empty [`AllOf`] accepts everything.
#[must_use]
pub struct AllOf(pub Vec<Box<dyn Matcher>>);

impl Matcher for AllOf {
    fn matches(&self, candidate: &Value) -> Outcome {
        let mut failed = false;
        let mut fatal = None;
        let mut clause = None;
        let mut undefined = None;

        for m in &self.0 {
            let outcome = m.matches(candidate);

            match outcome.verdict {
                Verdict::True => continue,
                Verdict::False => failed = true,
                Verdict::Undefined => {
                    if undefined.is_none() {
                        undefined = Some(outcome.diagnostic.clone());
                    }
                }
            }

            let diagnostic = outcome.diagnostic;
            if diagnostic.is_fatal() {
                fatal.get_or_insert(diagnostic);
            } else if !diagnostic.is_empty() {
                clause.get_or_insert(diagnostic);
            }
        }

        if failed {
            return Outcome::new(Verdict::False, fatal.or(clause).unwrap_or_default());
        }

        match undefined {
            Some(diagnostic) => Outcome::new(Verdict::Undefined, diagnostic),
            None => Outcome::matched(),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_joined(f, &self.0, ", and ")
    }
}
