use crate::model::{FieldDescriptor, Kind, RawValue, Refinement, Validator, Value};

/// A text field.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{string, Kind};
///
/// let field = string();
/// assert!(matches!(field.kind(), Kind::String));
/// assert!(!field.is_optional());
/// ```
pub fn string() -> FieldDescriptor {
    FieldDescriptor::new(Kind::String)
}

/// A numeric field; numeric tokens are coerced into `f64`.
pub fn number() -> FieldDescriptor {
    FieldDescriptor::new(Kind::Number)
}

/// A switch field.
/// As a flag, it takes no value on the Cli (ex: `--verbose`).
pub fn boolean() -> FieldDescriptor {
    FieldDescriptor::new(Kind::Boolean)
}

/// A field validated by an opaque function.
///
/// Custom fields are always value-taking as flags, since their shape cannot be recognized up front.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{custom, RawValue, Value};
///
/// let port = custom("port", |raw| match raw {
///     RawValue::Text(text) => text
///         .parse::<u16>()
///         .map(|p| Value::Number(p as f64))
///         .map_err(|_| format!("'{text}' is not a port")),
///     RawValue::Flag(_) => Err("expected a port".to_string()),
/// });
/// assert_eq!(port.kind().describe(), "custom<port>");
/// ```
pub fn custom(
    name: impl Into<String>,
    validate: impl Fn(&RawValue) -> Result<Value, String> + Send + Sync + 'static,
) -> FieldDescriptor {
    FieldDescriptor::new(Kind::Custom(Validator::new(name, validate)))
}

impl FieldDescriptor {
    /// Allow the field to be absent from the result.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Fill the field with `value` when it is absent from the Cli.
    /// If repeated, only the final default will apply.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default.replace(value.into());
        self
    }

    /// Accept the other raw shape for this field.
    ///
    /// * string: a switch becomes `"true"`/`"false"`.
    /// * number: a switch becomes `1`/`0`.
    /// * boolean: the text `true`/`false` becomes the switch value.
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    /// Constrain the field with a predicate over the validated value.
    /// A rejected value fails with `message` as the reason.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{number, Value};
    ///
    /// let count = number().refine("positive", "must be positive", |v| match v {
    ///     Value::Number(n) => *n > 0.0,
    ///     _ => false,
    /// });
    /// assert_eq!(count.kind().describe(), "refined<number>");
    /// ```
    pub fn refine(
        mut self,
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        let base = std::mem::replace(&mut self.kind, Kind::Boolean);
        self.kind = Kind::Refined(Box::new(base), Refinement::new(name, message, predicate));
        self
    }
}
