use std::fmt::{Formatter, Result as FmtResult};

use crate::error::or_panic;
use crate::value::{native_eq, Data, Kind, Type};
use crate::{Error, Matcher, Outcome, Reflect, Value};

/* StrictEquals */

/// Create a new [`StrictEquals`] matcher for the passed `expected` value.
///
/// # Panics
/// Panics if `expected` is not comparable, i.e. if it is or contains an error
/// or opaque value.
pub fn strict_equals<T: Reflect>(expected: T) -> StrictEquals {
    or_panic(StrictEquals::try_new(expected.reflect()))
}

/// Matcher that requires the candidate to have exactly the type of the
/// expected value and to compare equal with it. No numeric folding is applied.
#[must_use]
#[derive(Debug)]
pub struct StrictEquals {
    expected: Value,
}

impl StrictEquals {
    /// Create a new [`StrictEquals`] matcher.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedType`] if `expected` is not comparable.
    pub fn try_new(expected: Value) -> Result<Self, Error> {
        if is_comparable(&expected) {
            Ok(Self { expected })
        } else {
            Err(Error::unsupported(
                "StrictEquals",
                expected.ty(),
                "values of this type are not comparable",
            ))
        }
    }
}

impl Matcher for StrictEquals {
    fn matches(&self, candidate: &Value) -> Outcome {
        if candidate.ty() == self.expected.ty() {
            Outcome::from_bool(native_eq(&self.expected, candidate))
        } else {
            Outcome::undefined(format!("which is of type {}", candidate.ty()))
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "strictly equals {}", self.expected)
    }
}

fn is_comparable(value: &Value) -> bool {
    let ty = value.ty();
    let opaque = |kind: Option<Kind>| matches!(kind, Some(Kind::Error | Kind::Opaque));

    if matches!(ty.kind(), Kind::Error | Kind::Opaque) || opaque(ty.key()) || opaque(ty.elem()) {
        return false;
    }

    match value.data() {
        Data::Seq { items, .. } => items.iter().all(is_comparable),
        Data::Map { entries, .. } => entries
            .iter()
            .all(|(k, v)| is_comparable(k) && is_comparable(v)),
        Data::Struct { fields, .. } => fields.iter().all(|(_, v)| is_comparable(v)),
        _ => true,
    }
}

/* IdenticalTo */

/// Create a new [`IdenticalTo`] matcher for the passed `expected` value.
///
/// # Panics
/// Panics if `expected` is a struct or an array, slice or map of structs.
/// Pointers to structs are fine.
pub fn identical_to<T: Reflect>(expected: T) -> IdenticalTo {
    or_panic(IdenticalTo::try_new(expected.reflect()))
}

/// Matcher that checks a candidate for identity with the expected value.
///
/// Slices, maps, pointers and functions are identical if both are nil or if
/// both refer to the same object. Values of any other kind are identical if
/// their types are identical and they compare equal.
#[must_use]
#[derive(Debug)]
pub struct IdenticalTo {
    expected: Value,
}

impl IdenticalTo {
    /// Create a new [`IdenticalTo`] matcher.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedType`] if `expected` is a struct or an
    /// array, slice or map keyed or valued by structs.
    pub fn try_new(expected: Value) -> Result<Self, Error> {
        let ty = expected.ty();
        let is_struct = |kind: Option<Kind>| kind == Some(Kind::Struct);
        let of_structs = matches!(ty.kind(), Kind::Array | Kind::Slice | Kind::Map)
            && (is_struct(ty.key()) || is_struct(ty.elem()));

        if ty.kind() == Kind::Struct || of_structs {
            Err(Error::unsupported(
                "IdenticalTo",
                ty,
                "structs have no identity",
            ))
        } else {
            Ok(Self { expected })
        }
    }
}

impl Matcher for IdenticalTo {
    fn matches(&self, candidate: &Value) -> Outcome {
        let expected = &self.expected;
        if candidate.ty() != expected.ty() {
            return Outcome::undefined(format!("which is of type {}", candidate.ty()));
        }

        if !is_reference(expected.ty()) {
            return Outcome::from_bool(native_eq(expected, candidate));
        }

        let identical = match (expected.data(), candidate.data()) {
            (Data::Nil, Data::Nil) => true,
            (Data::Seq { addr: a, items: x }, Data::Seq { addr: b, items: y }) => {
                a == b && x.len() == y.len()
            }
            (Data::Map { addr: a, .. }, Data::Map { addr: b, .. })
            | (Data::Pointer { addr: a, .. }, Data::Pointer { addr: b, .. }) => a == b,
            (Data::Function(a), Data::Function(b)) => a.addr() == b.addr(),
            (_, _) => false,
        };

        Outcome::from_bool(identical)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "identical to <{}> {}", self.expected.ty(), self.expected)
    }
}

fn is_reference(ty: Type) -> bool {
    matches!(
        ty.kind(),
        Kind::Slice | Kind::Map | Kind::Pointer | Kind::Function
    )
}
