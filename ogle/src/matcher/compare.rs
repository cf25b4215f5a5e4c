use std::cmp::Ordering;
use std::fmt::{Formatter, Result as FmtResult};

use crate::error::or_panic;
use crate::numeric::{compare, Number};
use crate::value::{Data, Kind};
use crate::{Error, Matcher, Outcome, Reflect, Value};

/// Limit of an ordering matcher, classified at construction.
#[derive(Debug)]
struct Limit {
    value: Value,
}

impl Limit {
    fn new(matcher: &'static str, value: Value) -> Result<Self, Error> {
        match value.kind() {
            Kind::Int | Kind::Uint | Kind::Float | Kind::String => Ok(Self { value }),
            _ => Err(Error::unsupported(
                matcher,
                value.ty(),
                "expected an integer, float or string",
            )),
        }
    }

    /// Order `candidate` relative to the limit.
    ///
    /// Returns `Err` with an undefined outcome if the candidate is not
    /// comparable with the limit, and `Ok(None)` if the values are unordered.
    fn order(&self, candidate: &Value) -> Result<Option<Ordering>, Outcome> {
        match (candidate.data(), self.value.data()) {
            (Data::String(c), Data::String(l)) => Ok(Some(c.as_bytes().cmp(l.as_bytes()))),
            (Data::String(_), _) | (_, Data::String(_)) => {
                Err(Outcome::undefined("which is not comparable"))
            }
            (_, _) => match (Number::of(candidate), Number::of(&self.value)) {
                (Some(c), Some(l)) if !c.is_complex() => Ok(compare(c, l)),
                (_, _) => Err(Outcome::undefined("which is not comparable")),
            },
        }
    }

    fn less(&self, candidate: &Value, or_equal: bool) -> Outcome {
        match self.order(candidate) {
            Ok(Some(Ordering::Less)) => Outcome::matched(),
            Ok(Some(Ordering::Equal)) if or_equal => Outcome::matched(),
            Ok(_) => Outcome::mismatch(""),
            Err(outcome) => outcome,
        }
    }
}

macro_rules! impl_compare {
    ($type:ident, $method:ident, $fmt:literal, |$limit:ident, $candidate:ident| $eval:expr) => {
        #[doc = concat!("Create a new [`", stringify!($type), "`] matcher for the passed `limit`.")]
        ///
        /// # Panics
        /// Panics if `limit` is not an integer, float or string.
        pub fn $method<T: Reflect>(limit: T) -> $type {
            or_panic($type::try_new(limit.reflect()))
        }

        #[doc = concat!("Matcher that checks if a candidate is ", $fmt, " the limit.")]
        ///
        /// Numbers are compared with the same cross type folding rules as the
        /// [`equals`](super::equals) matcher, strings are compared by their
        /// bytes. Any other candidate is not comparable.
        #[must_use]
        #[derive(Debug)]
        pub struct $type(Limit);

        impl $type {
            #[doc = concat!("Create a new [`", stringify!($type), "`] matcher.")]
            ///
            /// # Errors
            /// Returns [`Error::UnsupportedType`] if `limit` is not an
            /// integer, float or string.
            pub fn try_new(limit: Value) -> Result<Self, Error> {
                Limit::new(stringify!($type), limit).map(Self)
            }
        }

        impl Matcher for $type {
            fn matches(&self, candidate: &Value) -> Outcome {
                let $limit = &self.0;
                let $candidate = candidate;

                $eval
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, concat!($fmt, " {}"), self.0.value)
            }
        }
    };
}

impl_compare!(LessThan, less_than, "less than", |l, c| l.less(c, false));
impl_compare!(LessOrEqual, less_or_equal, "less than or equal to", |l, c| l.less(c, true));
impl_compare!(GreaterThan, greater_than, "greater than", |l, c| negate(l.less(c, true)));
impl_compare!(GreaterOrEqual, greater_or_equal, "greater than or equal to", |l, c| negate(
    l.less(c, false)
));

/// Greater-than matchers are the negation of the corresponding less-than
/// matchers. Undefined outcomes are passed through.
fn negate(outcome: Outcome) -> Outcome {
    if outcome.is_fatal() {
        outcome
    } else {
        Outcome::from_bool(!outcome.is_match())
    }
}
