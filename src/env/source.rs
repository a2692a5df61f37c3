use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only mapping from keys to raw string values.
///
/// A key is present if and only if `lookup` returns `Some`, even when the
/// value is the empty string.
pub trait EnvStore: Send + Sync + std::fmt::Debug {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the current process, read on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Keys the platform cannot hold are never set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher + Send + Sync> EnvStore for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvStore for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvStore + ?Sized> EnvStore for Box<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: EnvStore + ?Sized> EnvStore for std::sync::Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// A stack of stores searched from the most recently added layer down.
#[derive(Debug, Default)]
pub struct Layered {
    layers: Vec<Box<dyn EnvStore>>,
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer that overrides every layer added before it.
    pub fn push(&mut self, store: impl EnvStore + 'static) {
        self.layers.push(Box::new(store));
    }

    pub(crate) fn len(&self) -> usize {
        self.layers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl EnvStore for Layered {
    fn lookup(&self, key: &str) -> Option<String> {
        self.layers.iter().rev().find_map(|layer| layer.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_store_empty_value_is_present() {
        let store = store(&[("EMPTY", "")]);
        assert_eq!(store.lookup("EMPTY"), Some(String::new()));
        assert_eq!(store.lookup("MISSING"), None);
    }

    #[test]
    fn test_hash_map_store() {
        let mut map = HashMap::new();
        map.insert("KEY".to_string(), "value".to_string());
        assert_eq!(map.lookup("KEY").as_deref(), Some("value"));
    }

    #[test]
    fn test_process_env_rejects_unrepresentable_keys() {
        assert_eq!(ProcessEnv.lookup(""), None);
        assert_eq!(ProcessEnv.lookup("A=B"), None);
        assert_eq!(ProcessEnv.lookup("A\0B"), None);
    }

    #[test]
    fn test_layered_later_layers_win() {
        let mut layered = Layered::new();
        layered.push(store(&[("A", "base"), ("B", "base")]));
        layered.push(store(&[("A", "override")]));

        assert_eq!(layered.len(), 2);
        assert_eq!(layered.lookup("A").as_deref(), Some("override"));
        assert_eq!(layered.lookup("B").as_deref(), Some("base"));
        assert_eq!(layered.lookup("C"), None);
    }

    #[test]
    fn test_layered_empty_value_shadows_lower_layer() {
        let mut layered = Layered::new();
        layered.push(store(&[("A", "base")]));
        layered.push(store(&[("A", "")]));
        assert_eq!(layered.lookup("A").as_deref(), Some(""));
    }

    #[test]
    fn test_empty_layered_has_no_keys() {
        let layered = Layered::new();
        assert!(layered.is_empty());
        assert_eq!(layered.lookup("PATH"), None);
    }
}
