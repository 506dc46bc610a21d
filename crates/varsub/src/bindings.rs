//! Typed binding store mapping identifiers to values.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A map from identifier to bound value.
///
/// Keys are unique and insertion order is irrelevant. The store starts
/// empty, grows only through [`insert`](Self::insert), and offers no
/// removal; bindings live as long as the store does.
#[derive(Debug, Clone)]
pub struct Bindings<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for Bindings<K, V> {
    fn default() -> Self {
        Bindings {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Bindings<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Inserts or overwrites the binding for `key`, chainable.
    pub fn insert(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Returns the bound value for `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the bound value for `key`, or `default` if unbound.
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.entries.get(key).cloned().unwrap_or(default)
    }

    /// Returns the bound value for `key`, or the value type's default.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone + Default,
    {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    /// Returns `true` if `key` has a binding.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bound keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterates over the bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let bindings: Bindings<String, i64> = Bindings::new();
        assert!(bindings.is_empty());
        assert_eq!(bindings.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut bindings = Bindings::new();
        bindings.insert("number".to_string(), 123i64);

        assert_eq!(bindings.get("number"), Some(&123));
        assert_eq!(bindings.get("missing"), None);
        assert!(bindings.contains("number"));
    }

    #[test]
    fn insert_chains() {
        let mut bindings = Bindings::new();
        bindings
            .insert("a".to_string(), 1i64)
            .insert("b".to_string(), 2)
            .insert("c".to_string(), 3);
        assert_eq!(bindings.len(), 3);
    }

    #[test]
    fn insert_overwrites() {
        let mut bindings = Bindings::new();
        bindings.insert("key".to_string(), 1i64);
        bindings.insert("key".to_string(), 2);

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("key"), Some(&2));
    }

    #[test]
    fn fallback_lookups() {
        let mut bindings = Bindings::new();
        bindings.insert("bound".to_string(), 7i64);

        assert_eq!(bindings.get_or("bound", 0), 7);
        assert_eq!(bindings.get_or("unbound", 42), 42);
        assert_eq!(bindings.get_or_default("unbound"), 0);
    }

    #[test]
    fn keys_cover_all_entries() {
        let mut bindings = Bindings::new();
        bindings.insert("a".to_string(), 1i64);
        bindings.insert("b".to_string(), 2);

        let mut keys: Vec<&String> = bindings.keys().collect();
        keys.sort();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn iter_yields_every_binding() {
        let mut bindings = Bindings::new();
        bindings.insert("a".to_string(), 1i64);
        bindings.insert("b".to_string(), 2);

        let mut entries: Vec<(&String, &i64)> = bindings.iter().collect();
        entries.sort();
        assert_eq!(entries.len(), 2);
        assert_eq!(*entries[0].1, 1);
    }
}
