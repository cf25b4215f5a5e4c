use syn::{Attribute, Result as ParseResult};

/// Flags set by `#[reflect(..)]` attributes.
#[derive(Default, Debug, Clone, Copy)]
pub(crate) struct Flags {
    pub skip: bool,
    pub error: bool,
}

pub(crate) trait AttribsEx {
    /// Parse all `#[reflect(..)]` attributes into [`Flags`].
    fn reflect_flags(&self) -> ParseResult<Flags>;
}

impl AttribsEx for [Attribute] {
    fn reflect_flags(&self) -> ParseResult<Flags> {
        let mut flags = Flags::default();

        for attr in self {
            if !attr.path().is_ident("reflect") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    flags.skip = true;

                    Ok(())
                } else if meta.path.is_ident("error") {
                    flags.error = true;

                    Ok(())
                } else {
                    Err(meta.error("Expected `skip` or `error`!"))
                }
            })?;
        }

        Ok(flags)
    }
}
