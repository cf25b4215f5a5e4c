use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::value::{Data, Function, Kind, Type, Value};
use crate::Reflect;

/// Wrap the passed closure into a [`Func`], so it can be used as candidate,
/// e.g. for the [`panics`](crate::matcher::panics) matcher.
pub fn func<F>(f: F) -> Func
where
    F: Fn() + Send + Sync + 'static,
{
    Func(Arc::new(f))
}

/// A closure without arguments that can be reflected as function value.
///
/// Clones of a [`Func`] refer to the same function and are identical.
#[derive(Clone)]
pub struct Func(Arc<dyn Fn() + Send + Sync>);

impl Func {
    /// Invoke the wrapped closure.
    pub fn call(&self) {
        (self.0)();
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl Reflect for Func {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Function)
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Function(Function::from_arc(self.addr(), self.0.clone())),
        )
    }
}

impl Debug for Func {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Func({:#x})", self.addr())
    }
}
