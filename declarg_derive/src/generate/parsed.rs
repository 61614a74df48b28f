use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParsed;

impl TryFrom<DeriveParsed> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveParsed) -> Result<Self, Self::Error> {
        let DeriveParsed {
            struct_name,
            fields,
        } = value;

        let arguments = if fields.is_empty() {
            quote! { _args }
        } else {
            quote! { mut args }
        };
        let fields = fields
            .iter()
            .map(|field| {
                let field_name = &field.field_name;
                let key = &field.key;
                quote! {
                    #field_name: args.take(#key)?,
                }
            })
            .collect::<Vec<_>>();

        Ok(quote! {
            impl ::declarg::FromParsedArgs for #struct_name {
                fn from_parsed_args(#arguments: ::declarg::ParsedArgs) -> ::std::result::Result<Self, ::declarg::ValidationError> {
                    ::std::result::Result::Ok(Self {
                        #( #fields )*
                    })
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveField;
    use proc_macro2::Span;

    #[test]
    fn render_derive_parsed_empty() {
        // Setup
        let parsed = DeriveParsed {
            struct_name: ident("my_struct"),
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::try_from(parsed).unwrap();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::declarg::FromParsedArgs for my_struct {
                    fn from_parsed_args(_args: ::declarg::ParsedArgs) -> ::std::result::Result<Self, ::declarg::ValidationError> {
                        ::std::result::Result::Ok(Self {})
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn render_derive_parsed() {
        // Setup
        let parsed = DeriveParsed {
            struct_name: ident("my_struct"),
            fields: vec![
                DeriveField {
                    field_name: ident("input"),
                    key: "input".to_string(),
                },
                DeriveField {
                    field_name: ident("dry_run"),
                    key: "dry-run".to_string(),
                },
                DeriveField {
                    field_name: ident("rest"),
                    key: "_".to_string(),
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::try_from(parsed).unwrap();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::declarg::FromParsedArgs for my_struct {
                    fn from_parsed_args(mut args: ::declarg::ParsedArgs) -> ::std::result::Result<Self, ::declarg::ValidationError> {
                        ::std::result::Result::Ok(Self {
                            input: args.take("input")?,
                            dry_run: args.take("dry-run")?,
                            rest: args.take("_")?,
                        })
                    }
                }
            }
            .to_string()
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
