mod derived;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse2, DeriveInput};

use derived::Derived;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let input = match parse2::<DeriveInput>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let derived = match Derived::new(input) {
        Ok(derived) => derived,
        Err(err) => return err.to_compile_error(),
    };

    #[allow(clippy::let_and_return)]
    let tokens = derived.into_token_stream();

    #[cfg(feature = "debug")]
    println!("\nderive(Reflect):\n{tokens:#}\n");

    tokens
}
