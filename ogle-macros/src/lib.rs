#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

use proc_macro::TokenStream;

mod misc;
mod reflect;

/// Derive the `Reflect` trait of the `ogle` crate for a struct or enum.
///
/// Structs and enums are reflected as struct values with their field names
/// and, for enums, the name of the active variant. Tuple fields are named by
/// their index.
///
/// Attributes:
/// - `#[reflect(skip)]` on a field omits the field.
/// - `#[reflect(error)]` on the type reflects it as error value with the
///   message returned by its `Display` implementation.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::exec(input.into()).into()
}
