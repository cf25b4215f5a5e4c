//! The [`numeric`](self) module implements the cross type numeric comparison
//! shared by the equality and the ordering matchers.
//!
//! Both operands are classified into one of the [`Number`] variants. The
//! comparison is then performed at the narrowest float precision involved:
//! if either side is a `f32`, both sides are cast to `f32`; else if either side
//! is a `f64`, both are cast to `f64`; otherwise both sides are integers and
//! are compared exactly, taking the sign into account. Complex numbers with a
//! zero imaginary part are treated as floats of the same precision.
//!
//! All casts use the IEEE-754 round-to-nearest-even conversion of `as`.

use std::cmp::Ordering;

use crate::types::Complex;
use crate::value::{Data, Value};

/// Normalized view of a numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i128),
    Uint(u128),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
}

impl Number {
    /// Classify the passed value. Returns `None` if it is not numeric.
    pub(crate) fn of(value: &Value) -> Option<Self> {
        match value.data() {
            Data::Int(x) => Some(Self::Int(*x)),
            Data::Uint(x) => Some(Self::Uint(*x)),
            Data::F32(x) => Some(Self::F32(*x)),
            Data::F64(x) => Some(Self::F64(*x)),
            Data::C64(x) => Some(Self::C64(*x)),
            Data::C128(x) => Some(Self::C128(*x)),
            _ => None,
        }
    }

    /// Returns `true` if this is a complex number.
    pub(crate) fn is_complex(self) -> bool {
        matches!(self, Self::C64(_) | Self::C128(_))
    }

    /// Complex numbers with a zero imaginary part become floats of the same
    /// precision, everything else is returned unchanged.
    fn real(self) -> Self {
        match self {
            Self::C64(c) if c.im == 0.0 => Self::F32(c.re),
            Self::C128(c) if c.im == 0.0 => Self::F64(c.re),
            x => x,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn as_f32(self) -> f32 {
        match self {
            Self::Int(x) => x as f32,
            Self::Uint(x) => x as f32,
            Self::F32(x) => x,
            Self::F64(x) => x as f32,
            Self::C64(c) => c.re,
            Self::C128(c) => c.re as f32,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(x) => x as f64,
            Self::Uint(x) => x as f64,
            Self::F32(x) => f64::from(x),
            Self::F64(x) => x,
            Self::C64(c) => f64::from(c.re),
            Self::C128(c) => c.re,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn as_c64(self) -> Complex<f32> {
        match self {
            Self::C64(c) => c,
            Self::C128(c) => Complex::new(c.re as f32, c.im as f32),
            x => Complex::new(x.as_f32(), 0.0),
        }
    }

    fn as_c128(self) -> Complex<f64> {
        match self {
            Self::C64(c) => Complex::new(f64::from(c.re), f64::from(c.im)),
            Self::C128(c) => c,
            x => Complex::new(x.as_f64(), 0.0),
        }
    }

    fn is_f32(self) -> bool {
        matches!(self, Self::F32(_) | Self::C64(_))
    }

    fn is_f64(self) -> bool {
        matches!(self, Self::F64(_) | Self::C128(_))
    }
}

/// Returns `true` if `a` and `b` are equal under the folding rules.
#[allow(clippy::float_cmp)]
pub(crate) fn equal(a: Number, b: Number) -> bool {
    let (a, b) = (a.real(), b.real());

    match (a.is_complex(), b.is_complex()) {
        (true, true) if a.is_f32() || b.is_f32() => a.as_c64() == b.as_c64(),
        (true, true) => a.as_c128() == b.as_c128(),

        // A complex number with a non-zero imaginary part never equals a
        // real number.
        (true, false) | (false, true) => false,

        (false, false) if a.is_f32() || b.is_f32() => a.as_f32() == b.as_f32(),
        (false, false) if a.is_f64() || b.is_f64() => a.as_f64() == b.as_f64(),
        (false, false) => compare_integers(a, b) == Ordering::Equal,
    }
}

/// Orders `a` and `b` under the folding rules.
///
/// Returns `None` if either side is complex or if a float comparison is
/// unordered (NaN).
pub(crate) fn compare(a: Number, b: Number) -> Option<Ordering> {
    if a.is_complex() || b.is_complex() {
        None
    } else if a.is_f32() || b.is_f32() {
        a.as_f32().partial_cmp(&b.as_f32())
    } else if a.is_f64() || b.is_f64() {
        a.as_f64().partial_cmp(&b.as_f64())
    } else {
        Some(compare_integers(a, b))
    }
}

fn compare_integers(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => a.cmp(&b),
        (Number::Uint(a), Number::Uint(b)) => a.cmp(&b),
        (Number::Int(a), Number::Uint(b)) => match u128::try_from(a) {
            Ok(a) => a.cmp(&b),
            Err(_) => Ordering::Less,
        },
        (Number::Uint(a), Number::Int(b)) => match u128::try_from(b) {
            Ok(b) => a.cmp(&b),
            Err(_) => Ordering::Greater,
        },
        (_, _) => unreachable!("compare_integers called with non integer operands"),
    }
}
