use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::{Data, Kind, Type, Value};
use crate::Reflect;

/// A pointer sized machine address.
///
/// Addresses are compared numerically, but they are not numbers: comparing an
/// address with an integer is a type mismatch.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address(pub usize);

impl Address {
    /// Create the address of the passed pointer.
    #[must_use]
    pub fn of<T: ?Sized>(ptr: *const T) -> Self {
        Self(ptr.cast::<()>() as usize)
    }
}

impl From<usize> for Address {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl Reflect for Address {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Address)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Address(self.0))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:#x}", self.0)
    }
}
