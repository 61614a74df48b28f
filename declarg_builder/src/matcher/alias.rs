use indexmap::IndexMap;

use crate::matcher::RawTokenMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Promote alias keys to their canonical key.
///
/// When both the alias and its canonical key are present, the canonical value is kept and the alias dropped.
/// Keys which are not aliases pass through untouched.
pub(crate) fn normalize(mut raw: RawTokenMap, aliases: &IndexMap<String, String>) -> RawTokenMap {
    for (alias, canonical) in aliases {
        if let Some(value) = raw.remove(alias) {
            if raw.contains(canonical) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dropping alias '{alias}': canonical '{canonical}' already set.");
                }
            } else {
                raw.insert(canonical.clone(), value);
            }
        }
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawValue;

    fn aliases(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(a, c)| (a.to_string(), c.to_string()))
            .collect()
    }

    fn text(value: &str) -> RawValue {
        RawValue::Text(value.to_string())
    }

    #[test]
    fn alias_only() {
        // Setup
        let raw = RawTokenMap::from_parts(vec![("c", text("3"))], vec!["foo.txt"]);

        // Execute
        let normalized = normalize(raw, &aliases(&[("c", "count")]));

        // Verify
        assert_eq!(
            normalized,
            RawTokenMap::from_parts(vec![("count", text("3"))], vec!["foo.txt"])
        );
    }

    #[test]
    fn canonical_wins() {
        for flags in [
            vec![("c", text("1")), ("count", text("2"))],
            vec![("count", text("2")), ("c", text("1"))],
        ] {
            // Setup
            let raw = RawTokenMap::from_parts(flags, vec![]);

            // Execute
            let normalized = normalize(raw, &aliases(&[("c", "count")]));

            // Verify
            assert_eq!(
                normalized,
                RawTokenMap::from_parts(vec![("count", text("2"))], vec![])
            );
        }
    }

    #[test]
    fn multiple_aliases_first_declared_promoted() {
        // Setup
        let raw = RawTokenMap::from_parts(
            vec![("n", text("2")), ("c", text("1"))],
            vec![],
        );

        // Execute
        let normalized = normalize(raw, &aliases(&[("c", "count"), ("n", "count")]));

        // Verify
        assert_eq!(
            normalized,
            RawTokenMap::from_parts(vec![("count", text("1"))], vec![])
        );
    }

    #[test]
    fn unknown_passes_through() {
        // Setup
        let raw = RawTokenMap::from_parts(
            vec![("x", RawValue::Flag(true)), ("v", RawValue::Flag(true))],
            vec![],
        );

        // Execute
        let normalized = normalize(raw, &aliases(&[("v", "verbose")]));

        // Verify
        assert_eq!(
            normalized,
            RawTokenMap::from_parts(
                vec![("x", RawValue::Flag(true)), ("verbose", RawValue::Flag(true))],
                vec![]
            )
        );
    }

    #[test]
    fn no_aliases() {
        let raw = RawTokenMap::from_parts(vec![("count", text("3"))], vec!["a"]);
        assert_eq!(normalize(raw.clone(), &IndexMap::default()), raw);
    }
}
