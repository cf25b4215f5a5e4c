//! Matcher library for unit tests.
//!
//! A [`Matcher`] inspects a candidate at runtime and returns an [`Outcome`]:
//! a three-valued [`Verdict`] and a [`Diagnostic`] that explains it.
//! Candidates are converted into a dynamic [`Value`] with the [`Reflect`]
//! trait, which is implemented for the standard library types and can be
//! derived for custom structs and enums.
//!
//! ```
//! use ogle::matcher::{greater_than, Matcher};
//! use ogle::{any_of, Verdict};
//!
//! let m = any_of![greater_than(17), -1];
//! assert_eq!(m.check(&18_u8).verdict, Verdict::True);
//! assert_eq!(m.check(&-1.0_f32).verdict, Verdict::True);
//! assert_eq!(m.check("taco").verdict, Verdict::Undefined);
//! ```

extern crate self as ogle;

pub mod context;
pub mod matcher;
pub mod types;
pub mod value;
pub mod verdict;

mod error;
mod macros;
mod numeric;

pub use ogle_macros::Reflect;

pub use context::{FailureRecord, FailureSink, TestContext, TestState};
pub use error::Error;
pub use matcher::{IntoMatcher, Matcher};
pub use value::{Reflect, Value};
pub use verdict::{Diagnostic, Outcome, Verdict};
