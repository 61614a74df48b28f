use indexmap::IndexMap;

use crate::model::RawValue;

/// The tokenized Cli: flag assignments (in order of first appearance) and the leftover positional tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawTokenMap {
    flags: IndexMap<String, RawValue>,
    rest: Vec<String>,
}

impl RawTokenMap {
    #[cfg(test)]
    pub(crate) fn from_parts(flags: Vec<(&str, RawValue)>, rest: Vec<&str>) -> Self {
        Self {
            flags: flags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            rest: rest.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Assign a flag; repeated assignments overwrite (last write wins).
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        self.flags.insert(name.into(), value);
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&RawValue> {
        self.flags.get(name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.flags.shift_remove(name)
    }

    pub(crate) fn push_rest(&mut self, token: &str) {
        self.rest.push(token.to_string());
    }

    pub(crate) fn extend_rest(&mut self, tokens: &[&str]) {
        self.rest.extend(tokens.iter().map(|t| t.to_string()));
    }

    #[cfg(test)]
    pub(crate) fn rest(&self) -> &[String] {
        &self.rest
    }

    pub(crate) fn into_parts(self) -> (IndexMap<String, RawValue>, Vec<String>) {
        (self.flags, self.rest)
    }
}
