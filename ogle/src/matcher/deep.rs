use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{deep_eq, Type};
use crate::{Diagnostic, Matcher, Outcome, Reflect, Value, Verdict};

/* DeepEquals */

/// Create a new [`DeepEquals`] matcher for the passed `expected` value.
pub fn deep_equals<T: Reflect>(expected: T) -> DeepEquals {
    DeepEquals::new(expected.reflect())
}

/// Matcher that checks a candidate for structural equality with the expected
/// value.
///
/// The candidate must have exactly the type of the expected value. Maps are
/// compared regardless of their order, sequences element-wise, structs
/// field-wise and pointers by the values they point to.
#[must_use]
#[derive(Debug)]
pub struct DeepEquals {
    ty: Type,
    expected: Value,
}

impl DeepEquals {
    /// Create a new [`DeepEquals`] matcher.
    pub fn new(expected: Value) -> Self {
        Self {
            ty: expected.ty(),
            expected,
        }
    }
}

impl Matcher for DeepEquals {
    fn matches(&self, candidate: &Value) -> Outcome {
        if candidate.ty() != self.ty {
            return Outcome::new(
                Verdict::False,
                Diagnostic::fatal(format!("which is of type {}", candidate.ty())),
            );
        }

        Outcome::from_bool(deep_eq(&self.expected, candidate))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "deep equals {}", self.expected)
    }
}

/* HasSameTypeAs */

/// Create a new [`HasSameTypeAs`] matcher for the type of `expected`.
pub fn has_same_type_as<T: Reflect>(expected: T) -> HasSameTypeAs {
    HasSameTypeAs::new(expected.reflect().ty())
}

/// Matcher that checks if the type of a candidate is identical to a given
/// type.
#[must_use]
#[derive(Debug)]
pub struct HasSameTypeAs {
    ty: Type,
}

impl HasSameTypeAs {
    /// Create a new [`HasSameTypeAs`] matcher for the passed type.
    pub fn new(ty: Type) -> Self {
        Self { ty }
    }
}

impl Matcher for HasSameTypeAs {
    fn matches(&self, candidate: &Value) -> Outcome {
        if candidate.ty() == self.ty {
            Outcome::matched()
        } else {
            Outcome::mismatch(format!("which is of type {}", candidate.ty()))
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "has type {}", self.ty)
    }
}
