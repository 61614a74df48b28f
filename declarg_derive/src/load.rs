mod attribute;
mod field;
mod parsed;

pub(crate) const ATTRIBUTE: &str = "declarg";
pub(crate) const REST_KEY: &str = "_";

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}
