//! The [`matcher`](self) module contains the [`Matcher`] trait and all
//! pre-defined matchers.

mod all_of;
mod any_of;
mod compare;
mod deep;
mod elements;
mod equals;
mod error;
mod not;
mod panics;
mod pointee;
mod strict;
mod string;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::{Outcome, Reflect, Value};

pub use all_of::{all_of, AllOf};
pub use any_of::{any_of, AnyOf};
pub use compare::{
    greater_or_equal, greater_than, less_or_equal, less_than, GreaterOrEqual, GreaterThan,
    LessOrEqual, LessThan,
};
pub use deep::{deep_equals, has_same_type_as, DeepEquals, HasSameTypeAs};
pub use elements::{contains, elements_are, Contains, ElementsAre};
pub use equals::{equals, Equals};
pub use error::{error, Error};
pub use not::{not, Not};
pub use panics::{panics, Panics};
pub use pointee::{pointee, Pointee};
pub use strict::{identical_to, strict_equals, IdenticalTo, StrictEquals};
pub use string::{has_substr, matches_regexp, HasSubstr, MatchesRegexp};

/// A matcher inspects a candidate value at runtime and decides whether it is
/// part of the set of values the matcher describes.
///
/// Matchers are immutable once constructed and may be shared between threads.
pub trait Matcher: Send + Sync {
    /// Apply the matcher to the passed `candidate`.
    ///
    /// Mismatches are reported through the returned [`Outcome`], never by
    /// panicking.
    fn matches(&self, candidate: &Value) -> Outcome;

    /// Write a verb phrase describing the accepted values (like
    /// `is greater than 17`) to the passed formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;

    /// Returns the description of the matcher as string.
    fn describe(&self) -> String {
        Describe(self).to_string()
    }

    /// Reflect the passed `candidate` and apply the matcher to it.
    fn check<C>(&self, candidate: &C) -> Outcome
    where
        C: Reflect + ?Sized,
        Self: Sized,
    {
        self.matches(&candidate.reflect())
    }
}

impl<M> Matcher for Box<M>
where
    M: Matcher + ?Sized,
{
    fn matches(&self, candidate: &Value) -> Outcome {
        (**self).matches(candidate)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        (**self).fmt(f)
    }
}

impl<M> Matcher for Arc<M>
where
    M: Matcher + ?Sized,
{
    fn matches(&self, candidate: &Value) -> Outcome {
        (**self).matches(candidate)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        (**self).fmt(f)
    }
}

/// Helper type that implements [`Display`] for any [`Matcher`].
#[derive(Debug)]
pub struct Describe<'a, M: ?Sized>(pub &'a M);

impl<M> Display for Describe<'_, M>
where
    M: Matcher + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Matcher::fmt(self.0, f)
    }
}

/// Converts a matcher or a plain value into a boxed [`Matcher`].
///
/// Plain values are promoted to [`equals`] matchers, so they get the same
/// numeric folding as an explicit `equals(value)`.
pub trait IntoMatcher {
    /// Convert `self` into a boxed matcher.
    fn into_matcher(self) -> Box<dyn Matcher>;
}

impl<M> IntoMatcher for M
where
    M: Matcher + 'static,
{
    fn into_matcher(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

macro_rules! impl_into_matcher {
    ($( $type:ty ),+) => {
        $(
            impl IntoMatcher for $type {
                fn into_matcher(self) -> Box<dyn Matcher> {
                    Box::new(equals(self))
                }
            }
        )+
    };
}

impl_into_matcher!(bool, char, i8, i16, i32, i64, i128, isize);
impl_into_matcher!(u8, u16, u32, u64, u128, usize, f32, f64);
impl_into_matcher!(&str, String);
impl_into_matcher!(
    crate::types::Complex<f32>,
    crate::types::Complex<f64>,
    crate::types::Address,
    crate::types::Nil
);

/// Writes the descriptions of the passed matchers separated by `sep`.
fn write_joined(f: &mut Formatter<'_>, matchers: &[Box<dyn Matcher>], sep: &str) -> FmtResult {
    for (i, m) in matchers.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }

        Matcher::fmt(m, f)?;
    }

    Ok(())
}
