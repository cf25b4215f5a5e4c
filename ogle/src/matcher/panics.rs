use std::any::Any;
use std::fmt::{Formatter, Result as FmtResult};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::value::{Data, Kind, Type};
use crate::{Matcher, Outcome, Reflect, Value};

use super::IntoMatcher;

/// Create a new [`Panics`] matcher that applies the passed `inner` matcher to
/// the panic payload of the candidate function.
pub fn panics<M: IntoMatcher>(inner: M) -> Panics {
    Panics(inner.into_matcher())
}

/// Matcher that invokes a zero-argument function candidate and checks that it
/// panics with a payload accepted by the inner matcher.
///
/// Candidates are `fn()` pointers or closures wrapped with
/// [`func`](crate::types::func). Payloads of type `&str`, `String`, the
/// integer and float types, `bool`, `char` and [`Value`] are reflected, any
/// other payload is opaque.
///
/// The panic hook is left untouched, so the default hook still prints the
/// message of every caught panic to stderr. Install a quiet hook with
/// [`std::panic::set_hook`] if that output is unwanted.
#[must_use]
pub struct Panics(pub Box<dyn Matcher>);

impl Matcher for Panics {
    fn matches(&self, candidate: &Value) -> Outcome {
        let Data::Function(function) = candidate.data() else {
            return Outcome::undefined("which is not a zero-arg function");
        };
        let Some(call) = function.callable() else {
            return Outcome::undefined("which is not a zero-arg function");
        };

        let Err(payload) = catch_unwind(AssertUnwindSafe(call)) else {
            return Outcome::mismatch("which didn't panic");
        };

        let payload = reflect_payload(payload);
        tracing::trace!(%payload, "candidate panicked");

        let outcome = self.0.matches(&payload);
        if outcome.is_match() {
            return Outcome::matched();
        }

        let clause = if outcome.diagnostic.is_empty() {
            format!("which panicked with: {payload}")
        } else {
            format!("which panicked with: {payload}, {}", outcome.diagnostic)
        };

        Outcome::new(outcome.verdict, outcome.diagnostic.with_clause(clause))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "panics with: ")?;
        self.0.fmt(f)?;

        Ok(())
    }
}

macro_rules! downcast_payload {
    ($payload:ident: $( $type:ty ),+) => {
        $(
            let $payload = match $payload.downcast::<$type>() {
                Ok(value) => return Reflect::reflect(&*value),
                Err(payload) => payload,
            };
        )+
    };
}

fn reflect_payload(payload: Box<dyn Any + Send>) -> Value {
    downcast_payload!(payload: Value, &'static str, String, bool, char);
    downcast_payload!(payload: i8, i16, i32, i64, i128, isize);
    downcast_payload!(payload: u8, u16, u32, u64, u128, usize, f32, f64);

    drop(payload);

    Value::new(
        Type::of::<dyn Any + Send>(Kind::Opaque),
        Data::Opaque("Box<dyn Any>".into()),
    )
}
