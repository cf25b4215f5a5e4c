use std::fmt::{Formatter, Result as FmtResult};

use crate::{Matcher, Outcome, Value, Verdict};

use super::write_joined;

/// Create a new [`AnyOf`] matcher from the passed `matchers`.
///
/// Use the [`any_of!`](crate::any_of) macro to mix matchers and plain values.
pub fn any_of(matchers: Vec<Box<dyn Matcher>>) -> AnyOf {
    AnyOf(matchers)
}

/// Matcher that accepts a candidate if at least one inner matcher accepts it.
///
/// If no inner matcher accepts the candidate, the first undefined outcome is
/// reported. An empty [`AnyOf`] accepts nothing.
#[must_use]
pub struct AnyOf(pub Vec<Box<dyn Matcher>>);

impl Matcher for AnyOf {
    fn matches(&self, candidate: &Value) -> Outcome {
        let mut undefined = None;

        for m in &self.0 {
            let outcome = m.matches(candidate);

            match outcome.verdict {
                Verdict::True => return Outcome::matched(),
                Verdict::Undefined if undefined.is_none() => undefined = Some(outcome),
                Verdict::Undefined | Verdict::False => (),
            }
        }

        undefined.unwrap_or_else(|| Outcome::mismatch(""))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "or(")?;
        write_joined(f, &self.0, ", ")?;
        write!(f, ")")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::any_of;
    use crate::matcher::fake::{fake, fatal};
    use crate::matcher::IntoMatcher;
    use crate::{Matcher, Verdict};

    #[test]
    fn any_match_wins() {
        let m = any_of(vec![
            fatal("", Verdict::Undefined, "foo").into_matcher(),
            17_i32.into_matcher(),
            fake("", Verdict::False, "foo").into_matcher(),
            fake("", Verdict::True, "").into_matcher(),
        ]);

        let o = m.check(&0);
        assert_eq!(o.verdict, Verdict::True);
        assert!(o.diagnostic.is_empty());
    }

    #[test]
    fn promoted_values_fold() {
        let m = any_of(vec![17_i32.into_matcher(), "taco".into_matcher()]);

        assert_eq!(m.check(&17.0_f32).verdict, Verdict::True);
        assert_eq!(m.describe(), "or(17, \"taco\")");
    }

    #[test]
    fn first_undefined_is_reported() {
        let m = any_of(vec![
            fake("", Verdict::False, "which blah").into_matcher(),
            fatal("", Verdict::Undefined, "which is not a string").into_matcher(),
            fatal("", Verdict::Undefined, "which is not numeric").into_matcher(),
        ]);

        let o = m.check(&0);
        assert_eq!(o.verdict, Verdict::Undefined);
        assert!(o.is_fatal());
        assert_eq!(o.diagnostic.clause(), "which is not a string");
    }

    #[test]
    fn all_false() {
        let m = any_of(vec![fake("", Verdict::False, "which blah").into_matcher()]);

        let o = m.check(&0);
        assert_eq!(o.verdict, Verdict::False);
        assert!(o.diagnostic.is_empty());

        assert_eq!(any_of(Vec::new()).check(&0).verdict, Verdict::False);
    }
}
