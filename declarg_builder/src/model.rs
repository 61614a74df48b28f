use std::sync::Arc;

/// A typed value, as produced by validating a field against its [`FieldDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text value.
    String(String),
    /// A numeric value (all numbers coerce to `f64`).
    Number(f64),
    /// A switch value.
    Boolean(bool),
    /// An ordered sequence of raw tokens (used by the catch-all field `_`).
    List(Vec<String>),
}

impl Value {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// A value as it appears on the Cli, before validation.
///
/// Value-taking flags and positionals produce [`RawValue::Text`], while switches produce [`RawValue::Flag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// The token text (ex: `3` from `--count 3`).
    Text(String),
    /// The presence (or negation) of a switch (ex: `--verbose`, `--no-verbose`).
    Flag(bool),
}

impl RawValue {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            RawValue::Text(_) => "string",
            RawValue::Flag(_) => "boolean",
        }
    }
}

type ValidateFn = dyn Fn(&RawValue) -> Result<Value, String> + Send + Sync;
type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// An opaque validator, converting a [`RawValue`] into a [`Value`] (or a rejection reason).
#[derive(Clone)]
pub struct Validator {
    name: String,
    validate: Arc<ValidateFn>,
}

impl Validator {
    /// Create a named validator.
    pub fn new(
        name: impl Into<String>,
        validate: impl Fn(&RawValue) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            validate: Arc::new(validate),
        }
    }

    /// The name of this validator.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn validate(&self, raw: &RawValue) -> Result<Value, String> {
        (self.validate)(raw)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validator({})", self.name)
    }
}

/// A named predicate applied after the base kind has validated.
#[derive(Clone)]
pub struct Refinement {
    name: String,
    message: String,
    predicate: Arc<PredicateFn>,
}

impl Refinement {
    pub(crate) fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The name of this refinement.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rejection reason reported when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl std::fmt::Debug for Refinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Refinement({})", self.name)
    }
}

/// The base kind of a field.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Accepts text.
    String,
    /// Accepts numeric text, coerced to `f64`.
    Number,
    /// A switch: present or absent.
    Boolean,
    /// A base kind further constrained by a predicate.
    Refined(Box<Kind>, Refinement),
    /// An opaque validator; never recognized as a switch.
    Custom(Validator),
}

impl Kind {
    /// A short description of this kind (ex: `number`, `refined<number>`, `custom<port>`).
    pub fn describe(&self) -> String {
        match self {
            Kind::String => "string".to_string(),
            Kind::Number => "number".to_string(),
            Kind::Boolean => "boolean".to_string(),
            Kind::Refined(base, _) => format!("refined<{}>", base.describe()),
            Kind::Custom(validator) => format!("custom<{}>", validator.name()),
        }
    }
}

/// A typed description of one positional or flag.
///
/// Construct via [`string`](crate::string), [`number`](crate::number), [`boolean`](crate::boolean) or [`custom`](crate::custom).
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub(crate) kind: Kind,
    pub(crate) optional: bool,
    pub(crate) default: Option<Value>,
    pub(crate) coerce: bool,
}

impl FieldDescriptor {
    pub(crate) fn new(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
            default: None,
            coerce: false,
        }
    }

    /// The kind of this field.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Whether the field may be absent from the result.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether the field is filled from a default when absent.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default, if declared.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether the field accepts the other raw shape (text for switches, switches for text/numbers).
    pub fn is_coerced(&self) -> bool {
        self.coerce
    }
}
