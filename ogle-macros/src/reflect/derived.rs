use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse_quote, Data, DeriveInput, Error, Fields, GenericParam, Generics, Index,
    Result as ParseResult,
};

use crate::misc::{ident_ogle, AttribsEx, Flags};

/// Type the `Reflect` trait is derived for.
pub(crate) struct Derived {
    ident: Ident,
    generics: Generics,
    body: Body,
}

enum Body {
    /// Type annotated with `#[reflect(error)]`.
    Error,
    Struct(Vec<Field>),
    Enum(Vec<Variant>),
}

struct Variant {
    ident: Ident,
    style: Style,
    fields: Vec<Field>,
}

#[derive(Clone, Copy)]
enum Style {
    Named,
    Unnamed,
    Unit,
}

struct Field {
    /// Identifier of the field, `None` for tuple fields.
    ident: Option<Ident>,
    index: usize,
    skip: bool,
}

impl Field {
    fn name(&self) -> String {
        match &self.ident {
            Some(ident) => ident.to_string(),
            None => self.index.to_string(),
        }
    }

    /// Binding used for the field when matching an enum variant.
    fn binding(&self) -> Ident {
        format_ident!("__field{}", self.index)
    }
}

impl Derived {
    pub(crate) fn new(input: DeriveInput) -> ParseResult<Self> {
        let DeriveInput {
            attrs,
            ident,
            mut generics,
            data,
            ..
        } = input;

        let flags = attrs.reflect_flags()?;
        if flags.skip {
            return Err(Error::new(
                ident.span(),
                "`#[reflect(skip)]` is only allowed on fields!",
            ));
        }

        let body = match data {
            _ if flags.error => Body::Error,
            Data::Struct(s) => Body::Struct(parse_fields(&s.fields)?),
            Data::Enum(e) => Body::Enum(
                e.variants
                    .iter()
                    .map(|v| {
                        let flags = v.attrs.reflect_flags()?;
                        if flags.skip || flags.error {
                            return Err(Error::new(
                                v.ident.span(),
                                "`#[reflect(..)]` is not allowed on enum variants!",
                            ));
                        }

                        Ok(Variant {
                            ident: v.ident.clone(),
                            style: style(&v.fields),
                            fields: parse_fields(&v.fields)?,
                        })
                    })
                    .collect::<ParseResult<_>>()?,
            ),
            Data::Union(u) => {
                return Err(Error::new(
                    u.union_token.span,
                    "`Reflect` can not be derived for unions!",
                ))
            }
        };

        if !matches!(body, Body::Error) {
            add_reflect_bounds(&mut generics);
        }

        Ok(Self {
            ident,
            generics,
            body,
        })
    }

    fn kind(&self) -> TokenStream {
        let ogle = ident_ogle();

        match self.body {
            Body::Error => quote!(#ogle::value::Kind::Error),
            Body::Struct(_) | Body::Enum(_) => quote!(#ogle::value::Kind::Struct),
        }
    }

    fn reflect_body(&self) -> TokenStream {
        let ogle = ident_ogle();

        match &self.body {
            Body::Error => quote! {
                #ogle::Value::new(
                    <Self as #ogle::Reflect>::type_of(),
                    #ogle::value::Data::Error(::std::string::ToString::to_string(self)),
                )
            },
            Body::Struct(fields) => {
                let fields = fields.iter().filter(|f| !f.skip).map(|f| {
                    let name = f.name();
                    let access = match &f.ident {
                        Some(ident) => quote!(#ident),
                        None => Index::from(f.index).into_token_stream(),
                    };

                    quote!((#name, #ogle::Reflect::reflect(&self.#access)))
                });

                quote! {
                    #ogle::Value::new(
                        <Self as #ogle::Reflect>::type_of(),
                        #ogle::value::Data::Struct {
                            variant: ::std::option::Option::None,
                            fields: ::std::vec![ #( #fields ),* ],
                        },
                    )
                }
            }
            Body::Enum(variants) => {
                let arms = variants.iter().map(|v| variant_arm(&ogle, v));

                quote! {
                    let (variant, fields): (&'static str, ::std::vec::Vec<(&'static str, #ogle::Value)>) = match self {
                        #( #arms )*
                    };

                    #ogle::Value::new(
                        <Self as #ogle::Reflect>::type_of(),
                        #ogle::value::Data::Struct {
                            variant: ::std::option::Option::Some(variant),
                            fields,
                        },
                    )
                }
            }
        }
    }
}

impl ToTokens for Derived {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ogle = ident_ogle();
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let kind = self.kind();
        let body = self.reflect_body();

        tokens.extend(quote! {
            impl #impl_generics #ogle::Reflect for #ident #ty_generics #where_clause {
                fn type_of() -> #ogle::value::Type {
                    #ogle::value::Type::of::<Self>(#kind)
                }

                #[allow(unused_variables)]
                fn reflect(&self) -> #ogle::Value {
                    #body
                }
            }
        });
    }
}

fn style(fields: &Fields) -> Style {
    match fields {
        Fields::Named(_) => Style::Named,
        Fields::Unnamed(_) => Style::Unnamed,
        Fields::Unit => Style::Unit,
    }
}

fn parse_fields(fields: &Fields) -> ParseResult<Vec<Field>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let Flags { skip, error } = field.attrs.reflect_flags()?;
            if error {
                return Err(Error::new(
                    Span::call_site(),
                    "`#[reflect(error)]` is only allowed on types!",
                ));
            }

            Ok(Field {
                ident: field.ident.clone(),
                index,
                skip,
            })
        })
        .collect()
}

fn add_reflect_bounds(generics: &mut Generics) {
    let ogle = ident_ogle();

    for param in &mut generics.params {
        if let GenericParam::Type(param) = param {
            param.bounds.push(parse_quote!(#ogle::Reflect));
        }
    }
}

fn variant_arm(ogle: &Ident, variant: &Variant) -> TokenStream {
    let ident = &variant.ident;
    let name = ident.to_string();

    let values = variant.fields.iter().filter(|f| !f.skip).map(|f| {
        let field_name = f.name();
        let binding = f.binding();

        quote!((#field_name, #ogle::Reflect::reflect(#binding)))
    });

    let pattern = match variant.style {
        Style::Unit => quote!(Self::#ident),
        Style::Named => {
            let bindings = variant.fields.iter().map(|f| {
                let field = &f.ident;
                let binding = f.binding();

                quote!(#field: #binding)
            });

            quote!(Self::#ident { #( #bindings ),* })
        }
        Style::Unnamed => {
            let bindings = variant.fields.iter().map(Field::binding);

            quote!(Self::#ident ( #( #bindings ),* ))
        }
    };

    quote! {
        #pattern => (#name, ::std::vec![ #( #values ),* ]),
    }
}
