use crate::model::{DeriveField, DeriveParsed};
use std::collections::HashMap;

impl TryFrom<syn::DeriveInput> for DeriveParsed {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                value.ident.span(),
                "Invalid - FromParsedArgs cannot be derived for a generic struct.",
            ));
        }

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveField::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - FromParsedArgs can only be derived for a struct with named fields.",
                ));
            }
        };

        let mut keys: HashMap<&str, &syn::Ident> = HashMap::default();

        for field in &fields {
            if let Some(other) = keys.insert(&field.key, &field.field_name) {
                return Err(syn::Error::new(
                    field.field_name.span(),
                    format!(
                        "Invalid - fields `{other}` and `{}` both read '{}'.",
                        field.field_name, field.key
                    ),
                ));
            }
        }

        Ok(DeriveParsed {
            struct_name: value.ident.clone(),
            fields,
        })
    }
}
