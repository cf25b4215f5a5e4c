use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::{format_complex, format_f32, format_f64, Data, Kind, Type, Value};
use crate::Reflect;

/// Complex number with a real and an imaginary part.
///
/// `Complex<f32>` and `Complex<f64>` take part in the numeric folding of the
/// equality matchers.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,

    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Create a new complex number.
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

macro_rules! impl_complex {
    ($type:ty, $variant:ident, $format:ident) => {
        impl Reflect for Complex<$type> {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Complex)
            }

            fn reflect(&self) -> Value {
                Value::new(Self::type_of(), Data::$variant(*self))
            }
        }

        impl From<$type> for Complex<$type> {
            fn from(re: $type) -> Self {
                Self::new(re, 0.0)
            }
        }

        impl Display for Complex<$type> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(&format_complex(self, $format))
            }
        }
    };
}

impl_complex!(f32, C64, format_f32);
impl_complex!(f64, C128, format_f64);
