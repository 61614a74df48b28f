use indexmap::IndexMap;
use std::collections::HashSet;
use std::str::FromStr;

use crate::constant::*;
use crate::matcher::RawTokenMap;
use crate::model::RawValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Splits the Cli tokens into flag assignments and leftover positionals.
///
/// The tokenizer only needs to know the *shape* of each flag (switch vs. value-taking).
/// It does not reject anything; unknown flags are assigned like any other, to be rejected by the schema.
#[derive(Debug, Clone)]
pub(crate) struct Tokenizer {
    flags: HashSet<String>,
    booleans: HashSet<String>,
    aliases: IndexMap<String, String>,
}

impl Tokenizer {
    pub(crate) fn new(
        flags: HashSet<String>,
        booleans: HashSet<String>,
        aliases: IndexMap<String, String>,
    ) -> Self {
        Self {
            flags,
            booleans,
            aliases,
        }
    }

    pub(crate) fn tokenize(&self, tokens: &[&str]) -> RawTokenMap {
        let mut raw = RawTokenMap::default();
        let mut index = 0;

        // 1. A literal '--' stops flag scanning; everything after passes through verbatim.
        // 2. Find a 'long' flag, such as:
        //  --verbose
        //  --no-verbose
        //  --count 3
        //  --count=3
        // 3. Find a 'short' flag (an alias, or a bundle of single character keys), such as:
        //  -v
        //  -c 3
        //  -c=3
        //  -c3
        //  -vc 3
        // 4. Otherwise, the token is a positional.
        while index < tokens.len() {
            let token = tokens[index];
            let next = tokens.get(index + 1).copied();
            index += 1;

            if token == FLAG_TERMINATOR {
                raw.extend_rest(&tokens[index..]);
                break;
            }

            if let Some(body) = token.strip_prefix("--") {
                index += self.match_long(split_equals_delimiter(body), next, &mut raw);
            } else if is_flag_like(token) {
                index += self.match_short(&token[1..], next, &mut raw);
            } else {
                raw.push_rest(token);
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Tokenized {tokens:?} into {raw:?}.");
        }

        raw
    }

    fn match_long(
        &self,
        (name, value): (&str, Option<&str>),
        next: Option<&str>,
        raw: &mut RawTokenMap,
    ) -> usize {
        if value.is_none() && !self.knows(name) {
            if let Some(negated) = name.strip_prefix(NEGATION_PREFIX) {
                if self.is_boolean(negated) {
                    raw.insert(negated, RawValue::Flag(false));
                    return 0;
                }
            }
        }

        self.assign(name, value, next, raw)
    }

    fn match_short(&self, body: &str, next: Option<&str>, raw: &mut RawTokenMap) -> usize {
        let (name, value) = split_equals_delimiter(body);

        if self.knows(name) {
            return self.assign(name, value, next, raw);
        }

        for (offset, single) in name.char_indices() {
            let key = single.to_string();
            let remainder = offset + single.len_utf8();

            if self.is_boolean(&key) {
                if remainder == name.len() {
                    // Only the final key of the bundle may take the '=' value.
                    self.assign(&key, value, None, raw);
                } else {
                    raw.insert(key, RawValue::Flag(true));
                }
            } else if remainder < name.len() {
                // The first value-taking key consumes the rest of the bundle (ex: `-c3`, `-c3=4`).
                raw.insert(key, RawValue::Text(body[remainder..].to_string()));
                return 0;
            } else {
                return self.assign(&key, value, next, raw);
            }
        }

        0
    }

    /// Assign the flag, returning the number of subsequent tokens consumed (0 or 1).
    fn assign(
        &self,
        name: &str,
        value: Option<&str>,
        next: Option<&str>,
        raw: &mut RawTokenMap,
    ) -> usize {
        let boolean = self.is_boolean(name);

        match value {
            Some(value) if boolean => {
                raw.insert(name, boolean_text(value));
                0
            }
            Some(value) => {
                raw.insert(name, RawValue::Text(value.to_string()));
                0
            }
            None if boolean => {
                raw.insert(name, RawValue::Flag(true));
                0
            }
            None => match next {
                Some(next) if !is_flag_like(next) && next != FLAG_TERMINATOR => {
                    raw.insert(name, RawValue::Text(next.to_string()));
                    1
                }
                _ => {
                    // A value-taking flag without a value; the schema decides whether this is acceptable.
                    raw.insert(name, RawValue::Flag(true));
                    0
                }
            },
        }
    }

    fn knows(&self, name: &str) -> bool {
        self.flags.contains(name) || self.aliases.contains_key(name)
    }

    fn is_boolean(&self, name: &str) -> bool {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.booleans.contains(canonical)
    }
}

fn boolean_text(value: &str) -> RawValue {
    match bool::from_str(value) {
        Ok(b) => RawValue::Flag(b),
        Err(_) => RawValue::Text(value.to_string()),
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

/// Whether the token looks like a flag: dash-prefixed, longer than a lone dash, and not a negative number.
pub(crate) fn is_flag_like(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !is_negative_number(token)
}

fn is_negative_number(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(digits) => {
            digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
                && f64::from_str(digits).is_ok()
        }
        None => false,
    }
}
