mod attribs_ex;

use proc_macro2::Ident;
use quote::format_ident;

pub(crate) use attribs_ex::{AttribsEx, Flags};

#[cfg(feature = "force-name")]
pub(crate) fn ident_ogle() -> Ident {
    format_ident!("ogle")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_ogle() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("ogle") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("ogle"),
    }
}
