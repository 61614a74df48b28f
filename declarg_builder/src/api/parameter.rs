use crate::model::FieldDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Positional,
    Flag,
}

/// A positional or flag parameter, for use in [`Definition::add`](./struct.Definition.html#method.add).
#[derive(Debug, Clone)]
pub struct Parameter {
    class: ParameterClass,
    name: String,
    field: FieldDescriptor,
    help: Option<String>,
    aliases: Vec<String>,
}

impl Parameter {
    /// Create a positional parameter.
    /// Positionals are matched against the leftover Cli tokens in their declaration order.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{string, Parameter};
    ///
    /// Parameter::positional(string(), "input");
    /// ```
    pub fn positional(field: FieldDescriptor, name: impl Into<String>) -> Self {
        Self::new(ParameterClass::Positional, field, name)
    }

    /// Create a flag parameter, specified via `--NAME` on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{boolean, Parameter};
    ///
    /// Parameter::flag(boolean().default(false), "verbose");
    /// ```
    pub fn flag(field: FieldDescriptor, name: impl Into<String>) -> Self {
        Self::new(ParameterClass::Flag, field, name)
    }

    fn new(class: ParameterClass, field: FieldDescriptor, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
            field,
            help: None,
            aliases: Vec::default(),
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Add an alias for this flag, specified via `-ALIAS` on the Cli.
    /// May be repeated to add multiple aliases.
    ///
    /// Equivalent to [`Definition::alias`](./struct.Definition.html#method.alias).
    /// Aliasing a positional is a definition error.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The name of this parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field descriptor of this parameter.
    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    /// The help message of this parameter, if documented.
    pub fn help_message(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }

    pub(super) fn take_aliases(&mut self) -> Vec<String> {
        std::mem::take(&mut self.aliases)
    }
}
