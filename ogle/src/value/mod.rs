//! The [`value`](self) module implements the runtime view of a candidate.
//!
//! Rust has no runtime reflection, so every candidate is converted into a
//! [`Value`] using the [`Reflect`] trait before it is handed to a matcher. A
//! [`Value`] carries its [`Type`] (name and [`Kind`]) and a dynamic [`Data`]
//! payload that matchers can inspect without compile-time knowledge of the
//! candidate.

mod eq;
mod reflect;
mod render;

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Complex, Nil};

pub use reflect::Reflect;

pub(crate) use eq::{deep_eq, native_eq};
pub(crate) use render::{format_complex, format_f32, format_f64, quote};

/// Category of a runtime [`Type`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Kind {
    /// The untyped nil value ([`Nil`]).
    Nil,
    Bool,
    Char,
    /// Signed integers of any width.
    Int,
    /// Unsigned integers of any width.
    Uint,
    Float,
    Complex,
    String,
    /// A machine address ([`Address`](crate::types::Address)). Not numeric.
    Address,
    /// Fixed size array `[T; N]`.
    Array,
    /// Slices and vectors.
    Slice,
    Map,
    Tuple,
    /// Structs and enums reflected with `#[derive(Reflect)]`.
    Struct,
    /// Owning or shared pointers, and `Option` of a non-nilable type.
    Pointer,
    Function,
    Error,
    /// Any other value, only known by its `Debug` representation.
    Opaque,
}

impl Kind {
    /// Returns `true` if values of this kind may be nil.
    #[must_use]
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Self::Nil | Self::Slice | Self::Map | Self::Pointer | Self::Function | Self::Error
        )
    }

    /// Returns `true` for integer, float and complex kinds.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float | Self::Complex)
    }
}

/// Runtime type of a [`Value`].
///
/// Two types are identical if their full type names are equal.
#[derive(Clone, Copy)]
pub struct Type {
    name: &'static str,
    kind: Kind,
    key: Option<Kind>,
    elem: Option<Kind>,
}

impl Type {
    /// Create the type descriptor of `T` with the passed `kind`.
    #[must_use]
    pub fn of<T: ?Sized>(kind: Kind) -> Self {
        Self {
            name: std::any::type_name::<T>(),
            kind,
            key: None,
            elem: None,
        }
    }

    /// Set the kind of the element (or map value) type.
    #[must_use]
    pub fn with_elem(mut self, elem: Kind) -> Self {
        self.elem = Some(elem);

        self
    }

    /// Set the kind of the map key type.
    #[must_use]
    pub fn with_key(mut self, key: Kind) -> Self {
        self.key = Some(key);

        self
    }

    /// Full name of the type, including module paths.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Kind of the type.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Kind of the map key type, if this is a map.
    #[must_use]
    pub fn key(&self) -> Option<Kind> {
        self.key
    }

    /// Kind of the element type, if this is a container.
    #[must_use]
    pub fn elem(&self) -> Option<Kind> {
        self.elem
    }

    /// Name of the type with all module paths stripped.
    #[must_use]
    pub fn short_name(&self) -> String {
        TYPE_PATH.replace_all(self.name, "").into_owned()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Debug for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Type")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.short_name())
    }
}

static TYPE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("type path pattern is valid")
});

/// Function value: the code address used for identity and, for functions
/// without arguments, a way to invoke it.
#[derive(Clone)]
pub struct Function {
    addr: usize,
    call: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Function {
    /// Create a function value that can only be compared by identity.
    #[must_use]
    pub fn new(addr: usize) -> Self {
        Self { addr, call: None }
    }

    /// Create a function value that takes no arguments and can be invoked.
    pub fn invokable<F>(addr: usize, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_arc(addr, Arc::new(f))
    }

    pub(crate) fn from_arc(addr: usize, call: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            addr,
            call: Some(call),
        }
    }

    /// Address that identifies the function.
    #[must_use]
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Returns the callable if the function takes no arguments.
    #[must_use]
    pub fn callable(&self) -> Option<&(dyn Fn() + Send + Sync)> {
        self.call.as_deref()
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Function")
            .field("addr", &format_args!("{:#x}", self.addr))
            .field("invokable", &self.call.is_some())
            .finish()
    }
}

/// Dynamic payload of a [`Value`].
#[derive(Debug, Clone)]
pub enum Data {
    /// A nil value of a nilable kind (`None`, the untyped [`Nil`], ...).
    Nil,
    Bool(bool),
    Char(char),
    /// Any signed integer, widened losslessly.
    Int(i128),
    /// Any unsigned integer, widened losslessly.
    Uint(u128),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
    String(String),
    Address(usize),

    /// Items of an array, slice or tuple. `addr` is the address of the first
    /// item (slices) or of the object itself.
    Seq { addr: usize, items: Vec<Value> },

    /// Entries of a map in iteration order. `addr` is the address of the map.
    Map {
        addr: usize,
        entries: Vec<(Value, Value)>,
    },

    /// Fields of a struct, or of the active variant of an enum.
    Struct {
        variant: Option<&'static str>,
        fields: Vec<(&'static str, Value)>,
    },

    /// A non-nil pointer and the value it points to.
    Pointer { addr: usize, pointee: Box<Value> },

    Function(Function),

    /// A non-nil error, captured by its message.
    Error(String),

    /// Any other value, captured by its `Debug` representation.
    Opaque(String),
}

/// Runtime view of a candidate or expected value.
#[derive(Debug, Clone)]
pub struct Value {
    ty: Type,
    data: Data,
}

impl Value {
    /// Create a new value from the passed type and data.
    #[must_use]
    pub fn new(ty: Type, data: Data) -> Self {
        Self { ty, data }
    }

    /// Returns the untyped nil value.
    #[must_use]
    pub fn nil() -> Self {
        Self::new(Type::of::<Nil>(Kind::Nil), Data::Nil)
    }

    /// Reflect the passed value.
    pub fn of<T: Reflect + ?Sized>(value: &T) -> Self {
        value.reflect()
    }

    /// Create an opaque value from the `Debug` representation of `value`.
    pub fn opaque<T: Debug + ?Sized>(value: &T) -> Self {
        Self::new(Type::of::<T>(Kind::Opaque), Data::Opaque(format!("{value:?}")))
    }

    /// Create an error value from the `Display` representation of `err`.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::new(Type::of::<E>(Kind::Error), Data::Error(err.to_string()))
    }

    /// Type of the value.
    #[must_use]
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Kind of the value's type.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.ty.kind
    }

    /// Dynamic payload of the value.
    #[must_use]
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Returns `true` if this is a nil value.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.data, Data::Nil)
    }

    /// Returns the same data with a different type.
    #[must_use]
    pub fn retype(self, ty: Type) -> Self {
        Self { ty, data: self.data }
    }

    /// Returns the string if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            Data::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this is a non-nil array or slice.
    #[must_use]
    pub fn items(&self) -> Option<&[Value]> {
        match (&self.data, self.kind()) {
            (Data::Seq { items, .. }, Kind::Array | Kind::Slice) => Some(items),
            _ => None,
        }
    }

    /// Returns the bytes if this is an array or slice of `u8`.
    #[must_use]
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        if self.ty.elem != Some(Kind::Uint) {
            return None;
        }

        self.items()?
            .iter()
            .map(|item| match item.data {
                Data::Uint(b) if item.ty.name == std::any::type_name::<u8>() => u8::try_from(b).ok(),
                _ => None,
            })
            .collect()
    }
}
