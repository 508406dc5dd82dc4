use std::collections::HashMap;
use std::sync::Arc;

/// Immutable copy of the process environment.
///
/// Platform providers read from a snapshot instead of `std::env` so tests
/// can supply their own variables without touching global state.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSnapshot {
    vars: Arc<HashMap<String, String>>,
}

impl EnvironmentSnapshot {
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Arc::new(
                pairs
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Trimmed value, `None` when unset or blank.
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_non_empty_trims_and_filters() {
        let env = EnvironmentSnapshot::from_pairs([("A", "  value "), ("B", "   "), ("C", "")]);

        assert_eq!(env.get_non_empty("A").as_deref(), Some("value"));
        assert_eq!(env.get_non_empty("B"), None);
        assert_eq!(env.get_non_empty("C"), None);
        assert_eq!(env.get_non_empty("D"), None);
        assert!(env.contains("C"));
        assert_eq!(env.get("B"), Some("   "));
    }
}
