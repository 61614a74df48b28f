use indexmap::IndexMap;

use crate::constant::REST_NAME;
use crate::model::Value;
use crate::parser::ValidationError;

/// The validated result of [`Cli::parse`](./struct.Cli.html#method.parse).
///
/// Holds every present (or defaulted) declared field, plus the catch-all `_` containing the full leftover positional sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    values: IndexMap<String, Value>,
}

impl ParsedArgs {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Get the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the field is present in the result.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The full leftover positional sequence (the catch-all `_`), in Cli order.
    pub fn rest(&self) -> &[String] {
        match self.values.get(REST_NAME) {
            Some(Value::List(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Iterate the fields in validation order: positionals, flags, then `_`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of fields in the result (including `_`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert a field into `T`, leaving the result untouched.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{number, Definition, Parameter};
    ///
    /// let cli = Definition::new()
    ///     .add(Parameter::flag(number().optional(), "count"))
    ///     .build()
    ///     .unwrap();
    /// let args = cli.parse(&["--count", "3"]).unwrap();
    ///
    /// assert_eq!(args.get_as::<u32>("count").unwrap(), 3);
    /// assert_eq!(args.get_as::<Option<u32>>("missing").unwrap(), None);
    /// ```
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T, ValidationError> {
        T::from_value(name, self.values.get(name).cloned())
    }

    /// Move a field out of the result, converting it into `T`.
    /// This is what `#[derive(FromParsedArgs)]` uses for each struct field.
    pub fn take<T: FromValue>(&mut self, name: &str) -> Result<T, ValidationError> {
        T::from_value(name, self.values.shift_remove(name))
    }
}

/// Behaviour to convert a validated field into a concrete Rust type.
///
/// `value` is `None` when the field is absent from the result (optional without a default).
pub trait FromValue: Sized {
    /// Convert the value of field `name`.
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError>;
}

/// Behaviour to build a typed result from [`ParsedArgs`].
///
/// Typically derived via `#[derive(FromParsedArgs)]`.
pub trait FromParsedArgs: Sized {
    /// Build `Self` from the validated arguments.
    fn from_parsed_args(args: ParsedArgs) -> Result<Self, ValidationError>;
}

impl FromParsedArgs for ParsedArgs {
    fn from_parsed_args(args: ParsedArgs) -> Result<Self, ValidationError> {
        Ok(args)
    }
}

fn missing(name: &str) -> ValidationError {
    ValidationError::new(name, "required value is missing")
}

fn mismatch(name: &str, expected: &str, value: &Value) -> ValidationError {
    ValidationError::new(
        name,
        format!("expected {expected}, received {}", value.type_name()),
    )
}

impl FromValue for Value {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        value.ok_or_else(|| missing(name))
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            Some(value) => T::from_value(name, Some(value)).map(Some),
            None => Ok(None),
        }
    }
}

impl FromValue for String {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "string", &other)),
            None => Err(missing(name)),
        }
    }
}

impl FromValue for bool {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::Boolean(b)) => Ok(b),
            Some(other) => Err(mismatch(name, "boolean", &other)),
            None => Err(missing(name)),
        }
    }
}

impl FromValue for Vec<String> {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::List(items)) => Ok(items),
            Some(other) => Err(mismatch(name, "list", &other)),
            None => Ok(Vec::default()),
        }
    }
}

impl FromValue for f64 {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::Number(n)) => Ok(n),
            Some(other) => Err(mismatch(name, "number", &other)),
            None => Err(missing(name)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
        f64::from_value(name, value).map(|n| n as f32)
    }
}

macro_rules! integer_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(name: &str, value: Option<Value>) -> Result<Self, ValidationError> {
                    let n = f64::from_value(name, value)?;

                    if n.fract() != 0.0 {
                        return Err(ValidationError::new(
                            name,
                            format!("cannot convert '{n}' to {}", std::any::type_name::<$t>()),
                        ));
                    }

                    // `MAX as f64` rounds up for the 64 bit types, so the upper bound is exclusive.
                    if n < <$t>::MIN as f64 || n >= <$t>::MAX as f64 + 1.0 {
                        return Err(ValidationError::new(
                            name,
                            format!("'{n}' is out of range for {}", std::any::type_name::<$t>()),
                        ));
                    }

                    Ok(n as $t)
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
