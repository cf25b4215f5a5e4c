use std::fmt::{Formatter, Result as FmtResult};

use crate::error::or_panic;
use crate::numeric::{equal, Number};
use crate::value::{Data, Kind};
use crate::{Error, Matcher, Outcome, Reflect, Value};

/// Create a new [`Equals`] matcher for the passed `expected` value.
///
/// # Panics
/// Panics if `expected` is a struct, array, tuple, error, opaque value or a
/// non-nil slice or map. Use [`deep_equals`](super::deep_equals) or
/// [`elements_are`](super::elements_are) for those.
pub fn equals<T: Reflect>(expected: T) -> Equals {
    or_panic(Equals::try_new(expected.reflect()))
}

/// Matcher that checks a candidate for equality with an expected value.
///
/// Numeric values are folded: `equals(-17_i8)` matches `-17_i64`, `-17.0_f32`
/// and `Complex::new(-17.0, 0.0)`, but not the two's complement `239_u8`.
/// Comparisons involving a float are performed at the precision of the
/// narrowest float involved.
#[must_use]
#[derive(Debug)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    /// Create a new [`Equals`] matcher.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedType`] if `expected` has no well defined
    /// equality, see [`equals`].
    pub fn try_new(expected: Value) -> Result<Self, Error> {
        let ty = expected.ty();

        match expected.kind() {
            Kind::Struct | Kind::Array | Kind::Tuple => Err(Error::unsupported(
                "Equals",
                ty,
                "use deep_equals for structs, arrays and tuples",
            )),
            Kind::Error | Kind::Opaque if !expected.is_nil() => Err(Error::unsupported(
                "Equals",
                ty,
                "values of this kind can not be compared",
            )),
            Kind::Slice | Kind::Map if !expected.is_nil() => Err(Error::unsupported(
                "Equals",
                ty,
                "only nil slices and maps are supported, use deep_equals or elements_are",
            )),
            _ => Ok(Self { expected }),
        }
    }

    fn matches_nil(&self, candidate: &Value) -> Outcome {
        let expected = &self.expected;

        if expected.kind() == Kind::Nil {
            if candidate.is_nil() {
                Outcome::matched()
            } else if candidate.kind().is_nilable() {
                Outcome::mismatch("")
            } else {
                Outcome::undefined("which cannot be compared to nil")
            }
        } else if same_shape(candidate, expected) {
            Outcome::from_bool(candidate.is_nil())
        } else if candidate.kind() == Kind::Nil {
            Outcome::matched()
        } else {
            Outcome::undefined(format!("which is not a {}", expected.ty()))
        }
    }
}

/// Same type, or the same reference kind over the same key and element kinds.
fn same_shape(a: &Value, b: &Value) -> bool {
    let (a, b) = (a.ty(), b.ty());

    a == b || (a.kind() == b.kind() && a.key() == b.key() && a.elem() == b.elem())
}

impl Matcher for Equals {
    fn matches(&self, candidate: &Value) -> Outcome {
        let expected = &self.expected;

        match (expected.data(), candidate.data()) {
            (Data::Nil, _) => self.matches_nil(candidate),

            (Data::Bool(e), Data::Bool(c)) => Outcome::from_bool(e == c),
            (Data::Bool(_), _) => Outcome::undefined("which is not a bool"),

            (Data::Char(e), Data::Char(c)) => Outcome::from_bool(e == c),
            (Data::Char(_), _) => Outcome::undefined("which is not a char"),

            (Data::String(e), Data::String(c)) => Outcome::from_bool(e == c),
            (Data::String(_), _) => Outcome::undefined("which is not a string"),

            (Data::Address(e), Data::Address(c)) => Outcome::from_bool(e == c),
            (Data::Address(_), _) => Outcome::undefined("which is not an address"),

            (Data::Function(e), Data::Function(c)) => Outcome::from_bool(e.addr() == c.addr()),
            (Data::Function(_), _) => Outcome::undefined("which is not a function"),

            (Data::Pointer { addr: e, .. }, _) if candidate.ty() == expected.ty() => {
                match candidate.data() {
                    Data::Pointer { addr: c, .. } => Outcome::from_bool(e == c),
                    _ => Outcome::mismatch(""),
                }
            }
            (Data::Pointer { .. }, _) => {
                Outcome::undefined(format!("which is not a {}", expected.ty()))
            }

            (_, _) => match (Number::of(expected), Number::of(candidate)) {
                (Some(e), Some(c)) => Outcome::from_bool(equal(e, c)),
                (_, _) => Outcome::undefined("which is not numeric"),
            },
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.expected.is_nil() {
            write!(f, "is nil")
        } else {
            write!(f, "{}", self.expected)
        }
    }
}
