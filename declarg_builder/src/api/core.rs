use indexmap::IndexMap;
use std::collections::HashSet;
use std::marker::PhantomData;

use crate::api::{FromParsedArgs, Parameter, ParameterClass, ParsedArgs};
use crate::constant::REST_NAME;
use crate::matcher::{boolean_flags, Tokenizer};
use crate::parser::{DefinitionError, Parser, Printer, ValidationError};
use crate::schema::{check_default, Schema};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declaration of a command's positionals, flags, aliases and documentation.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{number, string, Definition, Parameter, Value};
///
/// let cli = Definition::new()
///     .description("Process an input file.")
///     .add(Parameter::positional(string(), "input"))
///     .add(Parameter::flag(number().optional(), "count").alias("c"))
///     .build()
///     .unwrap();
///
/// let args = cli.parse(&["foo.txt", "-c", "3"]).unwrap();
/// assert_eq!(args.get("input"), Some(&Value::from("foo.txt")));
/// assert_eq!(args.get("count"), Some(&Value::Number(3.0)));
/// assert_eq!(args.rest(), &["foo.txt"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definition {
    description: Option<String>,
    hint: Option<String>,
    examples: Vec<String>,
    usage_prefix: Option<String>,
    positionals: Vec<Parameter>,
    flags: Vec<Parameter>,
    aliases: Vec<(String, String)>,
    deferred_error: Option<DefinitionError>,
}

impl Definition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the description of this command.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Document a usage hint for this command, shown after the description.
    /// If repeated, only the final hint will apply.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint.replace(hint.into());
        self
    }

    /// Add an example invocation.
    /// Examples are shown verbatim, in the order they are added.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Set the text preceding the command name in the usage line (ex: the dispatcher's name).
    /// If repeated, only the final prefix will apply.
    pub fn usage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.usage_prefix.replace(prefix.into());
        self
    }

    /// Add a positional or flag.
    ///
    /// The order of positionals corresponds to their positional order during parsing.
    /// The order of flags only affects the help text.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{string, Definition, Parameter, Value};
    ///
    /// let cli = Definition::new()
    ///     .add(Parameter::positional(string(), "a"))
    ///     .add(Parameter::positional(string(), "b"))
    ///     .build()
    ///     .unwrap();
    /// let args = cli.parse(&["1", "2"]).unwrap();
    ///
    /// assert_eq!(args.get("a"), Some(&Value::from("1")));
    /// assert_eq!(args.get("b"), Some(&Value::from("2")));
    /// ```
    pub fn add(mut self, mut parameter: Parameter) -> Self {
        let aliases = parameter.take_aliases();

        match parameter.class() {
            ParameterClass::Positional => {
                if !aliases.is_empty() && self.deferred_error.is_none() {
                    self.deferred_error
                        .replace(DefinitionError::PositionalAlias(parameter.name().to_string()));
                }

                self.positionals.push(parameter);
            }
            ParameterClass::Flag => {
                for alias in aliases {
                    self.aliases.push((alias, parameter.name().to_string()));
                }

                self.flags.push(parameter);
            }
        }

        self
    }

    /// Alias a flag, specified via `-ALIAS` on the Cli.
    /// The `canonical` flag must be declared by the time of [`Definition::build`].
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{boolean, Definition, Parameter, Value};
    ///
    /// let cli = Definition::new()
    ///     .alias("v", "verbose")
    ///     .add(Parameter::flag(boolean().default(false), "verbose"))
    ///     .build()
    ///     .unwrap();
    /// let args = cli.parse(&["-v"]).unwrap();
    ///
    /// assert_eq!(args.get("verbose"), Some(&Value::Boolean(true)));
    /// ```
    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), canonical.into()));
        self
    }

    /// The description, if documented.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The usage hint, if documented.
    pub fn get_hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The example invocations.
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// The usage line prefix, if set.
    pub fn get_usage_prefix(&self) -> Option<&str> {
        self.usage_prefix.as_deref()
    }

    /// The positionals, in declaration order.
    pub fn positionals(&self) -> &[Parameter] {
        &self.positionals
    }

    /// The flags, in declaration order.
    pub fn flags(&self) -> &[Parameter] {
        &self.flags
    }

    /// The `(alias, canonical)` pairs, in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    /// The aliases of `flag`, in declaration order.
    pub fn aliases_of<'a>(&'a self, flag: &'a str) -> impl Iterator<Item = &'a str> {
        self.aliases()
            .filter(move |(_, canonical)| *canonical == flag)
            .map(|(alias, _)| alias)
    }

    fn check(&self) -> Result<IndexMap<String, String>, DefinitionError> {
        if let Some(error) = &self.deferred_error {
            return Err(error.clone());
        }

        let mut positional_names = HashSet::new();
        let mut flag_names = HashSet::new();

        for parameter in &self.positionals {
            check_name(parameter.name())?;

            if !positional_names.insert(parameter.name()) {
                return Err(DefinitionError::DuplicateParameter(
                    parameter.name().to_string(),
                ));
            }
        }

        for parameter in &self.flags {
            check_name(parameter.name())?;

            if !flag_names.insert(parameter.name()) {
                return Err(DefinitionError::DuplicateParameter(
                    parameter.name().to_string(),
                ));
            }

            if positional_names.contains(parameter.name()) {
                return Err(DefinitionError::Collision(parameter.name().to_string()));
            }
        }

        let mut aliases = IndexMap::default();

        for (alias, canonical) in &self.aliases {
            check_name(alias)?;

            if positional_names.contains(alias.as_str()) || flag_names.contains(alias.as_str()) {
                return Err(DefinitionError::AliasShadowsParameter(alias.clone()));
            }

            if !flag_names.contains(canonical.as_str()) {
                return Err(DefinitionError::UnknownCanonical {
                    alias: alias.clone(),
                    canonical: canonical.clone(),
                });
            }

            if aliases.insert(alias.clone(), canonical.clone()).is_some() {
                return Err(DefinitionError::DuplicateAlias(alias.clone()));
            }
        }

        for parameter in self.positionals.iter().chain(self.flags.iter()) {
            check_default(parameter.field()).map_err(|reason| DefinitionError::InvalidDefault {
                name: parameter.name().to_string(),
                reason,
            })?;
        }

        Ok(aliases)
    }

    /// Build the [`Cli`].
    /// This finalizes the definition and checks for errors (ex: a repeated parameter name, or an alias to an undeclared flag).
    pub fn build(self) -> Result<Cli, DefinitionError> {
        let aliases = self.check()?;
        let flags: HashSet<String> = self
            .flags
            .iter()
            .map(|parameter| parameter.name().to_string())
            .collect();
        let booleans = boolean_flags(
            self.flags
                .iter()
                .map(|parameter| (parameter.name(), parameter.field())),
        );
        let positionals = self
            .positionals
            .iter()
            .map(|parameter| parameter.name().to_string())
            .collect();
        let schema = Schema::build(&self);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built schema with fields {:?}.", schema.field_names());
        }

        let parser = Parser::new(
            Tokenizer::new(flags, booleans, aliases.clone()),
            aliases,
            positionals,
            schema,
        );

        Ok(Cli {
            definition: self,
            parser,
            _phantom: PhantomData,
        })
    }
}

fn check_name(name: &str) -> Result<(), DefinitionError> {
    if name == REST_NAME {
        return Err(DefinitionError::ReservedName);
    }

    if name.is_empty()
        || name.starts_with('-')
        || name.contains('=')
        || name.contains(char::is_whitespace)
    {
        return Err(DefinitionError::InvalidName(name.to_string()));
    }

    Ok(())
}

/// The built command line interface.
///
/// Parses Cli tokens into `T` (by default, the untyped [`ParsedArgs`]) and renders help text.
/// Immutable once built, so it may be shared across threads.
pub struct Cli<T = ParsedArgs> {
    definition: Definition,
    parser: Parser,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Cli<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("definition", &self.definition)
            .finish()
    }
}

impl<T> Cli<T> {
    /// The read-only definition this Cli was built from.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// The compiled schema.
    pub fn schema(&self) -> &Schema {
        self.parser.schema()
    }

    /// Render the help text.
    /// Without a `name`, the usage line shows `<script>`.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{boolean, string, Definition, Parameter};
    ///
    /// let cli = Definition::new()
    ///     .add(Parameter::positional(string(), "name"))
    ///     .add(Parameter::flag(boolean().default(false), "force"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     cli.help_text(Some("gen")),
    ///     "gen <name> [options]\n\nPositionals:\n  name\n\nOptions:\n  --force (default false)"
    /// );
    /// ```
    pub fn help_text(&self, name: Option<&str>) -> String {
        Printer::new(&self.definition).render(name, None)
    }

    /// Render the help text, wrapping the description and hint to `width` columns.
    pub fn help_text_wrapped(&self, name: Option<&str>, width: usize) -> String {
        Printer::new(&self.definition).render(name, Some(width))
    }

    /// Re-type the parse result.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{string, Definition, FromParsedArgs, Parameter, ParsedArgs, ValidationError};
    ///
    /// struct Args {
    ///     input: String,
    /// }
    ///
    /// impl FromParsedArgs for Args {
    ///     fn from_parsed_args(mut args: ParsedArgs) -> Result<Self, ValidationError> {
    ///         Ok(Self { input: args.take("input")? })
    ///     }
    /// }
    ///
    /// let cli = Definition::new()
    ///     .add(Parameter::positional(string(), "input"))
    ///     .build()
    ///     .unwrap()
    ///     .typed::<Args>();
    ///
    /// assert_eq!(cli.parse(&["foo.txt"]).unwrap().input, "foo.txt");
    /// ```
    pub fn typed<U: FromParsedArgs>(self) -> Cli<U> {
        Cli {
            definition: self.definition,
            parser: self.parser,
            _phantom: PhantomData,
        }
    }
}

impl<T: FromParsedArgs> Cli<T> {
    /// Parse the Cli tokens.
    ///
    /// Parsing either fully succeeds or fails with the first [`ValidationError`]:
    /// unrecognized keys (in Cli order) are reported first, then positionals, then flags (each in declaration order).
    /// Parsing is pure; the same tokens always produce the same outcome.
    pub fn parse(&self, tokens: &[&str]) -> Result<T, ValidationError> {
        T::from_parsed_args(self.parser.parse(tokens)?)
    }
}
