use crate::load::{incompatible_error, ATTRIBUTE, REST_KEY};
use crate::model::{DeriveField, IntermediateAttributes};

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(singletons);

                for (key, values) in pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - only named fields are supported.",
                ))
            }
        };

        for singleton in &attributes.singletons {
            if singleton != "rest" {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown attribute `#[{ATTRIBUTE}({singleton})]`."),
                ));
            }
        }

        for pair in attributes.pairs.keys() {
            if pair != "rename" {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - unknown attribute `#[{ATTRIBUTE}({pair} = ..)]`."),
                ));
            }
        }

        let rest = attributes.singletons.contains("rest");
        let rename = match attributes.pairs.get("rename").and_then(|values| values.last()) {
            Some(value) => {
                let literal: syn::LitStr = syn::parse2(value.tokens.clone()).map_err(|_| {
                    syn::Error::new(
                        field_name.span(),
                        format!("Invalid - `#[{ATTRIBUTE}(rename = ..)]` must be a string literal."),
                    )
                })?;
                Some(literal.value())
            }
            None => None,
        };

        let key = match (rest, rename) {
            (true, Some(_)) => {
                return Err(incompatible_error(
                    &field_name,
                    format!("#[{ATTRIBUTE}(rest)]"),
                    format!("#[{ATTRIBUTE}(rename = ..)]"),
                ))
            }
            (true, None) => REST_KEY.to_string(),
            (false, Some(name)) => name,
            (false, None) => field_name.to_string(),
        };

        Ok(DeriveField { field_name, key })
    }
}
