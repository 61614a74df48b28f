use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match &expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    pairs.entry(left.to_string()).or_default().push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    singletons.insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!("Invalid - unparseable attribute `{}`.", expression.to_token_stream()),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use std::collections::{HashMap, HashSet};
    use syn::parse_quote;

    #[test]
    fn construct_intermediate_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::default(),
                pairs: HashMap::default()
            }
        );
    }

    #[test]
    fn construct_intermediate_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(rest, rename = "dry-run", rename = "other")]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["rest".to_string()]),
                pairs: HashMap::from([(
                    "rename".to_string(),
                    vec![
                        DeriveValue {
                            tokens: Literal::string("dry-run").into_token_stream(),
                        },
                        DeriveValue {
                            tokens: Literal::string("other").into_token_stream(),
                        }
                    ]
                )])
            }
        );
    }

    #[test]
    fn construct_intermediate_attributes_bare() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg]
        };

        // Execute & verify
        assert!(IntermediateAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn construct_intermediate_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[declarg(1 + 2)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute `1 + 2`.");
    }
}
