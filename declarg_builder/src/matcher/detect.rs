use std::collections::HashSet;

use crate::model::{FieldDescriptor, Kind};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Whether the field is a switch (takes no value on the Cli).
///
/// Unwraps refinement layers until reaching the terminal kind.
/// The optional/default/coerce modifiers never affect the outcome.
/// An opaque custom validator has no recognizable terminal kind, so it is value-taking.
pub(crate) fn is_boolean(field: &FieldDescriptor) -> bool {
    let mut current = field.kind();

    while let Kind::Refined(inner, _) = current {
        current = inner;
    }

    matches!(current, Kind::Boolean)
}

/// The names of every switch flag.
pub(crate) fn boolean_flags<'a>(
    flags: impl IntoIterator<Item = (&'a str, &'a FieldDescriptor)>,
) -> HashSet<String> {
    let booleans: HashSet<String> = flags
        .into_iter()
        .filter(|(_, field)| is_boolean(field))
        .map(|(name, _)| name.to_string())
        .collect();

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Boolean flags: {booleans:?}.");
    }

    booleans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{boolean, custom, number, string};
    use crate::model::Value;
    use rstest::rstest;

    #[rstest]
    #[case(boolean(), true)]
    #[case(boolean().optional(), true)]
    #[case(boolean().default(false), true)]
    #[case(boolean().coerce(), true)]
    #[case(boolean().optional().default(true).coerce(), true)]
    #[case(boolean().refine("r", "m", |_| true), true)]
    #[case(boolean().refine("r", "m", |_| true).refine("s", "n", |_| true).optional(), true)]
    #[case(string(), false)]
    #[case(string().default("false"), false)]
    #[case(number().optional(), false)]
    #[case(number().refine("r", "m", |_| true), false)]
    #[case(custom("switch-like", |_| Ok(Value::Boolean(true))), false)]
    #[case(custom("switch-like", |_| Ok(Value::Boolean(true))).refine("r", "m", |_| true), false)]
    fn detect(#[case] field: FieldDescriptor, #[case] expected: bool) {
        assert_eq!(is_boolean(&field), expected);
    }

    #[test]
    fn flags() {
        let verbose = boolean().default(false);
        let count = number().optional();
        let force = boolean().optional();

        let booleans = boolean_flags(vec![
            ("verbose", &verbose),
            ("count", &count),
            ("force", &force),
        ]);

        assert_eq!(
            booleans,
            HashSet::from(["verbose".to_string(), "force".to_string()])
        );
    }

    #[test]
    fn flags_empty() {
        assert!(boolean_flags(Vec::default()).is_empty());
    }
}
