use indexmap::IndexMap;
use thiserror::Error;

use crate::api::ParsedArgs;
use crate::matcher::{normalize, Tokenizer};
use crate::model::RawValue;
use crate::schema::Schema;

/// An error in the declaration of a [`Definition`](./struct.Definition.html).
/// Returned by [`Definition::build`](./struct.Definition.html#method.build).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// A positional and a flag share a name.
    #[error("Definition error: positional and flag share the name '{0}'.")]
    Collision(String),
    /// Two positionals, or two flags, share a name.
    #[error("Definition error: parameter '{0}' is declared more than once.")]
    DuplicateParameter(String),
    /// A parameter name cannot be expressed on the Cli.
    #[error("Definition error: invalid name '{0}'.")]
    InvalidName(String),
    /// A parameter uses the name reserved for the catch-all.
    #[error("Definition error: the name '_' is reserved.")]
    ReservedName,
    /// An alias maps to a name which is not a declared flag.
    #[error("Definition error: alias '{alias}' refers to unknown flag '{canonical}'.")]
    UnknownCanonical {
        /// The alias.
        alias: String,
        /// The name it refers to.
        canonical: String,
    },
    /// An alias is declared more than once.
    #[error("Definition error: alias '{0}' is declared more than once.")]
    DuplicateAlias(String),
    /// An alias equals the name of a declared parameter.
    #[error("Definition error: alias '{0}' shadows a parameter.")]
    AliasShadowsParameter(String),
    /// An alias is attached to a positional.
    #[error("Definition error: positional '{0}' cannot be aliased.")]
    PositionalAlias(String),
    /// A declared default fails its own field descriptor.
    #[error("Definition error: default of '{name}' is invalid: {reason}.")]
    InvalidDefault {
        /// The parameter name.
        name: String,
        /// The rejection reason.
        reason: String,
    },
}

/// A rejection of the Cli tokens, naming the offending field.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{number, Definition, Parameter};
///
/// let cli = Definition::new()
///     .add(Parameter::flag(number(), "count"))
///     .build()
///     .unwrap();
/// let error = cli.parse(&["--count", "abc"]).unwrap_err();
///
/// assert_eq!(error.field(), "count");
/// assert_eq!(error.to_string(), "Invalid argument 'count': cannot convert 'abc' to number.");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid argument '{field}': {reason}.")]
pub struct ValidationError {
    field: String,
    reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field (or unrecognized key) which failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the field failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The compiled parse pipeline: tokenize, normalize aliases, map positionals, validate.
#[derive(Debug, Clone)]
pub(crate) struct Parser {
    tokenizer: Tokenizer,
    aliases: IndexMap<String, String>,
    positionals: Vec<String>,
    schema: Schema,
}

impl Parser {
    pub(crate) fn new(
        tokenizer: Tokenizer,
        aliases: IndexMap<String, String>,
        positionals: Vec<String>,
        schema: Schema,
    ) -> Self {
        Self {
            tokenizer,
            aliases,
            positionals,
            schema,
        }
    }

    pub(crate) fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn parse(&self, tokens: &[&str]) -> Result<ParsedArgs, ValidationError> {
        let raw = normalize(self.tokenizer.tokenize(tokens), &self.aliases);
        let (mut fields, rest) = raw.into_parts();

        for (name, token) in self.positionals.iter().zip(rest.iter()) {
            fields.insert(name.clone(), RawValue::Text(token.clone()));
        }

        self.schema.validate(fields, rest)
    }
}
