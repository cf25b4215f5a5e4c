use super::{Data, Value};

#[derive(Clone, Copy, Eq, PartialEq)]
enum Mode {
    /// Pointers are equal if they point to the same address.
    Native,

    /// Pointers are equal if they point to deeply equal values.
    Deep,
}

/// Equality of two values with identical types, like `==` on the original
/// values. No numeric folding is applied.
pub(crate) fn native_eq(a: &Value, b: &Value) -> bool {
    value_eq(a, b, Mode::Native)
}

/// Recursive structural equality of two values with identical types.
///
/// Maps are compared without respect to their iteration order, sequences
/// element-wise, structs field-wise and pointers by their pointees.
pub(crate) fn deep_eq(a: &Value, b: &Value) -> bool {
    value_eq(a, b, Mode::Deep)
}

fn value_eq(a: &Value, b: &Value, mode: Mode) -> bool {
    a.ty == b.ty && data_eq(&a.data, &b.data, mode)
}

#[allow(clippy::float_cmp)]
fn data_eq(a: &Data, b: &Data, mode: Mode) -> bool {
    match (a, b) {
        (Data::Nil, Data::Nil) => true,
        (Data::Bool(x), Data::Bool(y)) => x == y,
        (Data::Char(x), Data::Char(y)) => x == y,
        (Data::Int(x), Data::Int(y)) => x == y,
        (Data::Uint(x), Data::Uint(y)) => x == y,
        (Data::F32(x), Data::F32(y)) => x == y,
        (Data::F64(x), Data::F64(y)) => x == y,
        (Data::C64(x), Data::C64(y)) => x == y,
        (Data::C128(x), Data::C128(y)) => x == y,
        (Data::String(x), Data::String(y))
        | (Data::Error(x), Data::Error(y))
        | (Data::Opaque(x), Data::Opaque(y)) => x == y,
        (Data::Address(x), Data::Address(y)) => x == y,
        (Data::Seq { items: x, .. }, Data::Seq { items: y, .. }) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| value_eq(x, y, mode))
        }
        (Data::Map { entries: x, .. }, Data::Map { entries: y, .. }) => {
            x.len() == y.len()
                && x.iter().all(|(xk, xv)| {
                    y.iter()
                        .any(|(yk, yv)| value_eq(xk, yk, mode) && value_eq(xv, yv, mode))
                })
        }
        (
            Data::Struct {
                variant: xv,
                fields: xf,
            },
            Data::Struct {
                variant: yv,
                fields: yf,
            },
        ) => {
            xv == yv
                && xf.len() == yf.len()
                && xf
                    .iter()
                    .zip(yf)
                    .all(|((xn, x), (yn, y))| xn == yn && value_eq(x, y, mode))
        }
        (
            Data::Pointer {
                addr: xa,
                pointee: x,
            },
            Data::Pointer {
                addr: ya,
                pointee: y,
            },
        ) => xa == ya || (mode == Mode::Deep && value_eq(x, y, mode)),
        (Data::Function(x), Data::Function(y)) => x.addr() == y.addr(),
        (_, _) => false,
    }
}
