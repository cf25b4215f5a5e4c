use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{Data, Kind};
use crate::{Matcher, Outcome, Value};

use super::IntoMatcher;

/// Create a new [`Pointee`] matcher, that dereferences the candidate once and
/// forwards the pointee to the passed `inner` matcher.
pub fn pointee<M: IntoMatcher>(inner: M) -> Pointee {
    Pointee(inner.into_matcher())
}

/// Implements a [`Matcher`] that dereferences a non-nil pointer (a [`Box`],
/// [`Rc`](std::rc::Rc), [`Arc`](std::sync::Arc) or `Some` value) and forwards
/// the pointee to the inner matcher.
#[must_use]
pub struct Pointee(pub Box<dyn Matcher>);

impl Matcher for Pointee {
    fn matches(&self, candidate: &Value) -> Outcome {
        if candidate.kind() != Kind::Pointer {
            return Outcome::undefined("which is not a pointer");
        }

        match candidate.data() {
            Data::Pointer { pointee, .. } => self.0.matches(pointee),
            _ => Outcome::undefined("which is a nil pointer"),
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "pointee(")?;
        self.0.fmt(f)?;
        write!(f, ")")?;

        Ok(())
    }
}
