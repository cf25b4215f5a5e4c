use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::rc::Rc;
use std::sync::Arc;

use super::{Data, Function, Kind, Type, Value};

/// Converts a value into its runtime view, the [`Value`].
///
/// This is implemented for the primitive types, strings, containers, pointer
/// like types, function pointers and errors of the standard library. Use
/// `#[derive(Reflect)]` to implement it for your own structs and enums.
///
/// References are transparent: `&T` reflects exactly like `T`.
pub trait Reflect {
    /// Get the runtime type of `Self`.
    fn type_of() -> Type;

    /// Returns `true` if values of `Self` may reflect as nil.
    ///
    /// `Option<T>` uses this to decide whether `Some` can take the type of
    /// the option or has to become a pointer to the contained value.
    fn may_be_nil() -> bool {
        false
    }

    /// Get the runtime view of `self`.
    fn reflect(&self) -> Value;
}

impl Reflect for Value {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Opaque)
    }

    fn may_be_nil() -> bool {
        true
    }

    fn reflect(&self) -> Value {
        self.clone()
    }
}

/* References */

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_of() -> Type {
        T::type_of()
    }

    fn may_be_nil() -> bool {
        T::may_be_nil()
    }

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn type_of() -> Type {
        T::type_of()
    }

    fn may_be_nil() -> bool {
        T::may_be_nil()
    }

    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

/* Primitives */

impl Reflect for bool {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Bool)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Bool(*self))
    }
}

impl Reflect for char {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Char)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::Char(*self))
    }
}

macro_rules! impl_number {
    ($kind:ident, $variant:ident as $wide:ty: $( $type:ty ),+) => {
        $(
            impl Reflect for $type {
                fn type_of() -> Type {
                    Type::of::<Self>(Kind::$kind)
                }

                #[allow(clippy::cast_lossless)]
                fn reflect(&self) -> Value {
                    Value::new(Self::type_of(), Data::$variant(*self as $wide))
                }
            }
        )+
    };
}

impl_number!(Int, Int as i128: i8, i16, i32, i64, i128, isize);
impl_number!(Uint, Uint as u128: u8, u16, u32, u64, u128, usize);
impl_number!(Float, F32 as f32: f32);
impl_number!(Float, F64 as f64: f64);

/* Strings */

impl Reflect for str {
    fn type_of() -> Type {
        Type::of::<str>(Kind::String)
    }

    fn reflect(&self) -> Value {
        Value::new(Type::of::<str>(Kind::String), Data::String(self.to_owned()))
    }
}

impl Reflect for String {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::String)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::type_of(), Data::String(self.clone()))
    }
}

/* Sequences */

fn slice_type<T: Reflect, S: ?Sized>(kind: Kind) -> Type {
    Type::of::<S>(kind).with_elem(T::type_of().kind())
}

fn seq<T: Reflect>(ty: Type, items: &[T]) -> Value {
    Value::new(
        ty,
        Data::Seq {
            addr: items.as_ptr() as usize,
            items: items.iter().map(Reflect::reflect).collect(),
        },
    )
}

impl<T: Reflect> Reflect for [T] {
    fn type_of() -> Type {
        slice_type::<T, [T]>(Kind::Slice)
    }

    fn reflect(&self) -> Value {
        seq(slice_type::<T, [T]>(Kind::Slice), self)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_of() -> Type {
        slice_type::<T, Self>(Kind::Slice)
    }

    fn reflect(&self) -> Value {
        seq(Self::type_of(), self)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_of() -> Type {
        slice_type::<T, Self>(Kind::Array)
    }

    fn reflect(&self) -> Value {
        seq(Self::type_of(), self)
    }
}

/* Maps */

macro_rules! impl_map {
    ($map:ident<K, V $(, $extra:ident )?>) => {
        impl<K: Reflect, V: Reflect $(, $extra )?> Reflect for $map<K, V $(, $extra )?> {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Map)
                    .with_key(K::type_of().kind())
                    .with_elem(V::type_of().kind())
            }

            fn reflect(&self) -> Value {
                Value::new(
                    Self::type_of(),
                    Data::Map {
                        addr: std::ptr::from_ref(self) as usize,
                        entries: self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect(),
                    },
                )
            }
        }
    };
}

impl_map!(HashMap<K, V, S>);
impl_map!(BTreeMap<K, V>);

/* Tuples */

impl Reflect for () {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Tuple)
    }

    fn reflect(&self) -> Value {
        Value::new(
            Self::type_of(),
            Data::Seq {
                addr: std::ptr::from_ref(self) as usize,
                items: Vec::new(),
            },
        )
    }
}

macro_rules! impl_tuple {
    ($( $name:ident: $type:ident ),+) => {
        impl<$( $type: Reflect ),+> Reflect for ($( $type, )+) {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Tuple)
            }

            fn reflect(&self) -> Value {
                let ($( $name, )+) = self;

                Value::new(
                    Self::type_of(),
                    Data::Seq {
                        addr: std::ptr::from_ref(self) as usize,
                        items: vec![$( $name.reflect() ),+],
                    },
                )
            }
        }
    };
}

impl_tuple!(a0: T0);
impl_tuple!(a0: T0, a1: T1);
impl_tuple!(a0: T0, a1: T1, a2: T2);
impl_tuple!(a0: T0, a1: T1, a2: T2, a3: T3);
impl_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4);
impl_tuple!(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5);

/* Pointers */

macro_rules! impl_pointer {
    ($pointer:ident) => {
        impl<T: Reflect> Reflect for $pointer<T> {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Pointer).with_elem(T::type_of().kind())
            }

            fn reflect(&self) -> Value {
                pointer(Self::type_of(), &**self)
            }
        }
    };
}

impl_pointer!(Box);
impl_pointer!(Rc);
impl_pointer!(Arc);

fn pointer<T: Reflect>(ty: Type, pointee: &T) -> Value {
    Value::new(
        ty,
        Data::Pointer {
            addr: std::ptr::from_ref(pointee) as usize,
            pointee: Box::new(pointee.reflect()),
        },
    )
}

/// `None` is nil. `Some` of a nilable kind that is never nil itself is that
/// value with the type of the option, any other `Some` is a pointer to the
/// contained value. So `Some(None::<i32>)` is a non-nil pointer to nil.
impl<T: Reflect> Reflect for Option<T> {
    fn type_of() -> Type {
        let inner = T::type_of();

        if option_retypes::<T>() {
            let mut ty = Type::of::<Self>(inner.kind());
            ty.key = inner.key();
            ty.elem = inner.elem();

            ty
        } else {
            Type::of::<Self>(Kind::Pointer).with_elem(inner.kind())
        }
    }

    fn may_be_nil() -> bool {
        true
    }

    fn reflect(&self) -> Value {
        let ty = Self::type_of();

        match self {
            None => Value::new(ty, Data::Nil),
            Some(value) if option_retypes::<T>() => value.reflect().retype(ty),
            Some(value) => pointer(ty, value),
        }
    }
}

fn option_retypes<T: Reflect>() -> bool {
    T::type_of().kind().is_nilable() && !T::may_be_nil()
}

/* Functions */

impl<R: 'static> Reflect for fn() -> R {
    fn type_of() -> Type {
        Type::of::<Self>(Kind::Function)
    }

    fn reflect(&self) -> Value {
        let f = *self;

        Value::new(
            Self::type_of(),
            Data::Function(Function::invokable(f as usize, move || {
                let _ = f();
            })),
        )
    }
}

macro_rules! impl_fn {
    ($( $arg:ident ),+) => {
        impl<$( $arg, )+ R> Reflect for fn($( $arg ),+) -> R {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Function)
            }

            fn reflect(&self) -> Value {
                Value::new(Self::type_of(), Data::Function(Function::new(*self as usize)))
            }
        }
    };
}

impl_fn!(A0);
impl_fn!(A0, A1);
impl_fn!(A0, A1, A2);

/* Errors */

macro_rules! impl_dyn_error {
    ($( $bound:ident ),*) => {
        impl<'a> Reflect for dyn StdError $( + $bound )* + 'a {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Error)
            }

            fn reflect(&self) -> Value {
                Value::error(self)
            }
        }

        impl<'a> Reflect for Box<dyn StdError $( + $bound )* + 'a> {
            fn type_of() -> Type {
                Type::of::<Self>(Kind::Error)
            }

            fn reflect(&self) -> Value {
                Value::new(Self::type_of(), Data::Error(self.to_string()))
            }
        }
    };
}

impl_dyn_error!();
impl_dyn_error!(Send, Sync);

macro_rules! impl_error {
    ($( $error:ty ),+) => {
        $(
            impl Reflect for $error {
                fn type_of() -> Type {
                    Type::of::<Self>(Kind::Error)
                }

                fn reflect(&self) -> Value {
                    Value::error(self)
                }
            }
        )+
    };
}

impl_error!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error
);
