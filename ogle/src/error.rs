//! The [`error`](self) module contains the error returned by the fallible
//! matcher constructors.

use thiserror::Error;

use crate::value::Type;

/// Error raised when a matcher can not be constructed from the passed
/// arguments.
///
/// The panicking constructors (like [`equals`](crate::matcher::equals)) use the
/// [`Display`](std::fmt::Display) output of this error as panic message.
#[derive(Debug, Error)]
pub enum Error {
    /// The expected value has a type the matcher does not support.
    #[error("{matcher}: unsupported expected value of type {ty} ({reason})")]
    UnsupportedType {
        /// Name of the matcher that was constructed.
        matcher: &'static str,

        /// Type of the rejected expected value.
        ty: Type,

        /// Short explanation why the type was rejected.
        reason: &'static str,
    },

    /// The regular expression passed to a matcher could not be compiled.
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn unsupported(matcher: &'static str, ty: Type, reason: &'static str) -> Self {
        Self::UnsupportedType {
            matcher,
            ty,
            reason,
        }
    }
}

/// Unwraps the result of a `try_new` constructor and panics with the error
/// message on failure.
pub(crate) fn or_panic<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
