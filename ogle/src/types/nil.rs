use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::{Data, Kind, Type, Value};
use crate::Reflect;

/// The untyped nil value.
///
/// `equals(Nil)` matches every nil candidate, regardless of its type.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Nil;

impl Reflect for Nil {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Nil)
    }

    fn may_be_nil() -> bool {
        true
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Nil)
    }
}

impl Display for Nil {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "nil")
    }
}
