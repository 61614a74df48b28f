use indexmap::IndexMap;

use crate::api::{Definition, ParsedArgs};
use crate::constant::REST_NAME;
use crate::model::{FieldDescriptor, Kind, RawValue, Value};
use crate::parser::ValidationError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The compiled, closed validator of a [`Definition`].
///
/// The field set is every positional name, every flag name, and the catch-all `_`.
/// Validation rejects any key outside of this set.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(String, FieldDescriptor)>,
}

impl Schema {
    /// Compile the schema of a definition.
    /// Fields are kept in documentation order: positionals, then flags (each in declaration order).
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{boolean, string, Definition, Parameter, Schema};
    ///
    /// let definition = Definition::new()
    ///     .add(Parameter::positional(string(), "input"))
    ///     .add(Parameter::flag(boolean().default(false), "verbose"));
    /// let schema = Schema::build(&definition);
    ///
    /// assert_eq!(schema.field_names(), vec!["input", "verbose", "_"]);
    /// ```
    pub fn build(definition: &Definition) -> Self {
        let fields = definition
            .positionals()
            .iter()
            .chain(definition.flags().iter())
            .map(|parameter| (parameter.name().to_string(), parameter.field().clone()))
            .collect();

        Self { fields }
    }

    /// The names of every field, ending with the catch-all `_`.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(std::iter::once(REST_NAME))
            .collect()
    }

    /// Whether `name` belongs to the field set.
    pub fn contains(&self, name: &str) -> bool {
        name == REST_NAME || self.field(name).is_some()
    }

    /// The descriptor of a declared field.
    /// The catch-all `_` has no descriptor (it is always an optional list of tokens).
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    pub(crate) fn validate(
        &self,
        mut raw: IndexMap<String, RawValue>,
        rest: Vec<String>,
    ) -> Result<ParsedArgs, ValidationError> {
        // The catch-all is only ever filled from `rest`, never from a flag.
        if let Some(unknown) = raw
            .keys()
            .find(|key| key.as_str() == REST_NAME || !self.contains(key))
        {
            return Err(ValidationError::new(unknown.as_str(), "unrecognized key"));
        }

        let mut parsed = ParsedArgs::default();

        for (name, field) in &self.fields {
            match raw.shift_remove(name) {
                Some(value) => {
                    let value = validate_raw(field.kind(), field.is_coerced(), &value)
                        .map_err(|reason| ValidationError::new(name.as_str(), reason))?;
                    parsed.insert(name.as_str(), value);
                }
                None => match field.default_value() {
                    Some(default) => parsed.insert(name.as_str(), default.clone()),
                    None if field.is_optional() => {}
                    None => {
                        return Err(ValidationError::new(
                            name.as_str(),
                            "required value is missing",
                        ));
                    }
                },
            }
        }

        parsed.insert(REST_NAME, Value::List(rest));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Validated: {parsed:?}.");
        }

        Ok(parsed)
    }
}

/// Check a declared default against its own descriptor.
/// Custom validators only see raw tokens, so their defaults are accepted as-is.
pub(crate) fn check_default(field: &FieldDescriptor) -> Result<(), String> {
    match field.default_value() {
        Some(value) => check_value(field.kind(), value),
        None => Ok(()),
    }
}

fn check_value(kind: &Kind, value: &Value) -> Result<(), String> {
    match (kind, value) {
        (Kind::String, Value::String(_))
        | (Kind::Number, Value::Number(_))
        | (Kind::Boolean, Value::Boolean(_))
        | (Kind::Custom(_), _) => Ok(()),
        (Kind::Refined(base, refinement), value) => {
            check_value(base, value)?;

            if refinement.check(value) {
                Ok(())
            } else {
                Err(refinement.message().to_string())
            }
        }
        (kind, value) => Err(format!(
            "expected {}, received {}",
            kind.describe(),
            value.type_name()
        )),
    }
}

fn validate_raw(kind: &Kind, coerce: bool, raw: &RawValue) -> Result<Value, String> {
    match (kind, raw) {
        (Kind::String, RawValue::Text(text)) => Ok(Value::String(text.clone())),
        (Kind::String, RawValue::Flag(b)) if coerce => Ok(Value::String(b.to_string())),
        (Kind::Number, RawValue::Text(text)) => match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Number(n)),
            _ => Err(format!("cannot convert '{text}' to number")),
        },
        (Kind::Number, RawValue::Flag(b)) if coerce => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        (Kind::Boolean, RawValue::Flag(b)) => Ok(Value::Boolean(*b)),
        (Kind::Boolean, RawValue::Text(text)) if coerce => match text.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(format!("cannot convert '{text}' to boolean")),
        },
        (Kind::Refined(base, refinement), raw) => {
            let value = validate_raw(base, coerce, raw)?;

            if refinement.check(&value) {
                Ok(value)
            } else {
                Err(refinement.message().to_string())
            }
        }
        (Kind::Custom(validator), raw) => validator.validate(raw),
        (kind, raw) => Err(format!(
            "expected {}, received {}",
            kind.describe(),
            raw.type_name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{boolean, custom, number, string, Parameter};
    use rstest::rstest;

    fn raw(pairs: Vec<(&str, RawValue)>) -> IndexMap<String, RawValue> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn text(value: &str) -> RawValue {
        RawValue::Text(value.to_string())
    }

    fn positive() -> FieldDescriptor {
        number().refine("positive", "must be positive", |v| {
            matches!(v, Value::Number(n) if *n > 0.0)
        })
    }

    fn definition() -> Definition {
        Definition::new()
            .add(Parameter::positional(string(), "input"))
            .add(Parameter::positional(string().optional(), "output"))
            .add(Parameter::flag(number().optional(), "count"))
            .add(Parameter::flag(boolean().default(false), "verbose"))
    }

    #[test]
    fn build_twice() {
        // Setup
        let definition = definition();

        // Execute
        let a = Schema::build(&definition);
        let b = Schema::build(&definition);

        // Verify
        assert_eq!(a.field_names(), b.field_names());
        assert_eq!(a.field_names(), vec!["input", "output", "count", "verbose", "_"]);
    }

    #[test]
    fn build_empty() {
        let schema = Schema::build(&Definition::new());
        assert_eq!(schema.field_names(), vec!["_"]);
        assert!(schema.contains("_"));
        assert!(!schema.contains("input"));
    }

    #[test]
    fn field() {
        let schema = Schema::build(&definition());
        assert_matches!(schema.field("count").map(|f| f.kind()), Some(Kind::Number));
        assert!(schema.field("_").is_none());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn validate() {
        // Setup
        let schema = Schema::build(&definition());

        // Execute
        let parsed = schema
            .validate(
                raw(vec![("count", text("3")), ("input", text("foo.txt"))]),
                vec!["foo.txt".to_string(), "x".to_string(), "y".to_string()],
            )
            .unwrap();

        // Verify
        let names: Vec<&str> = parsed.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["input", "count", "verbose", "_"]);
        assert_eq!(parsed.get("input"), Some(&Value::String("foo.txt".to_string())));
        assert_eq!(parsed.get("output"), None);
        assert_eq!(parsed.get("count"), Some(&Value::Number(3.0)));
        assert_eq!(parsed.get("verbose"), Some(&Value::Boolean(false)));
        assert_eq!(parsed.rest(), &["foo.txt", "x", "y"]);
    }

    #[rstest]
    #[case(vec![("input", text("a")), ("bogus", text("1"))], "bogus", "unrecognized key")]
    #[case(vec![("input", text("a")), ("b", RawValue::Flag(true)), ("c", RawValue::Flag(true))], "b", "unrecognized key")]
    #[case(vec![("count", text("abc"))], "count", "unrecognized key")]
    #[case(vec![("input", text("a")), ("_", text("x"))], "_", "unrecognized key")]
    fn validate_unknown_first(
        #[case] pairs: Vec<(&str, RawValue)>,
        #[case] field: &str,
        #[case] reason: &str,
    ) {
        // Setup
        let schema = Schema::build(&Definition::new().add(Parameter::positional(string(), "input")));

        // Execute
        let error = schema.validate(raw(pairs), vec![]).unwrap_err();

        // Verify
        assert_eq!(error.field(), field);
        assert_eq!(error.reason(), reason);
    }

    #[test]
    fn validate_positionals_before_flags() {
        // Setup
        let schema = Schema::build(&definition());

        // Execute
        let error = schema
            .validate(raw(vec![("count", text("abc"))]), vec![])
            .unwrap_err();

        // Verify
        assert_eq!(error.field(), "input");
        assert_eq!(error.reason(), "required value is missing");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'input': required value is missing."
        );
    }

    #[rstest]
    #[case(string(), text("abc"), Ok(Value::String("abc".to_string())))]
    #[case(string(), text(""), Ok(Value::String("".to_string())))]
    #[case(string(), RawValue::Flag(true), Err("expected string, received boolean"))]
    #[case(string().coerce(), RawValue::Flag(true), Ok(Value::String("true".to_string())))]
    #[case(number(), text("3"), Ok(Value::Number(3.0)))]
    #[case(number(), text(" -2.5 "), Ok(Value::Number(-2.5)))]
    #[case(number(), text("1e3"), Ok(Value::Number(1000.0)))]
    #[case(number(), text("abc"), Err("cannot convert 'abc' to number"))]
    #[case(number(), text(""), Err("cannot convert '' to number"))]
    #[case(number(), text("inf"), Err("cannot convert 'inf' to number"))]
    #[case(number(), text("NaN"), Err("cannot convert 'NaN' to number"))]
    #[case(number(), RawValue::Flag(true), Err("expected number, received boolean"))]
    #[case(number().coerce(), RawValue::Flag(true), Ok(Value::Number(1.0)))]
    #[case(number().coerce(), RawValue::Flag(false), Ok(Value::Number(0.0)))]
    #[case(boolean(), RawValue::Flag(false), Ok(Value::Boolean(false)))]
    #[case(boolean(), text("true"), Err("expected boolean, received string"))]
    #[case(boolean().coerce(), text("true"), Ok(Value::Boolean(true)))]
    #[case(boolean().coerce(), text("yes"), Err("cannot convert 'yes' to boolean"))]
    #[case(positive(), text("3"), Ok(Value::Number(3.0)))]
    #[case(positive(), text("-3"), Err("must be positive"))]
    #[case(positive(), text("x"), Err("cannot convert 'x' to number"))]
    #[case(positive(), RawValue::Flag(true), Err("expected number, received boolean"))]
    #[case(custom("even", |raw| match raw {
        RawValue::Text(t) if t.len() % 2 == 0 => Ok(Value::String(t.clone())),
        _ => Err("not even".to_string()),
    }), text("ab"), Ok(Value::String("ab".to_string())))]
    #[case(custom("even", |_| Err("not even".to_string())), text("abc"), Err("not even"))]
    fn validate_kind(
        #[case] field: FieldDescriptor,
        #[case] value: RawValue,
        #[case] expected: Result<Value, &str>,
    ) {
        assert_eq!(
            validate_raw(field.kind(), field.is_coerced(), &value),
            expected.map_err(|reason| reason.to_string())
        );
    }

    #[rstest]
    #[case(string(), Ok(()))]
    #[case(string().default("a"), Ok(()))]
    #[case(string().default(1), Err("expected string, received number"))]
    #[case(number().default(1), Ok(()))]
    #[case(boolean().default(true), Ok(()))]
    #[case(boolean().default("true"), Err("expected boolean, received string"))]
    #[case(positive().default(2), Ok(()))]
    #[case(positive().default(-2), Err("must be positive"))]
    #[case(positive().default(false), Err("expected number, received boolean"))]
    #[case(custom("anything", |_| Err("never".to_string())).default("x"), Ok(()))]
    fn default_checked(#[case] field: FieldDescriptor, #[case] expected: Result<(), &str>) {
        assert_eq!(
            check_default(&field),
            expected.map_err(|reason| reason.to_string())
        );
    }

    #[test]
    fn validate_default_not_required() {
        // Setup
        let schema = Schema::build(
            &Definition::new()
                .add(Parameter::positional(string().default("out.txt"), "output"))
                .add(Parameter::flag(number().default(1), "count")),
        );

        // Execute
        let parsed = schema.validate(IndexMap::default(), vec![]).unwrap();

        // Verify
        assert_eq!(parsed.get("output"), Some(&Value::from("out.txt")));
        assert_eq!(parsed.get("count"), Some(&Value::Number(1.0)));
        assert!(parsed.rest().is_empty());
        assert!(parsed.contains("_"));
    }
}
