//! The [`types`](self) module defines small value types that have no direct
//! counterpart in the standard library but are understood by the matchers.

pub mod address;
pub mod complex;
pub mod func;
pub mod nil;

pub use address::Address;
pub use complex::Complex;
pub use func::{func, Func};
pub use nil::Nil;
