use crate::keyed::{KeyedLookup, KeyedStore};
use std::any::type_name;
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;
use tracing::trace;

/// A keyed store backed by a `HashMap`
///
/// `MapStore` is the plain concrete [`KeyedStore`]: every key maps to exactly
/// one item, and setting an existing key overwrites it. Keys of type `String`
/// also get the [`StringKeyed`](crate::StringKeyed) queries.
///
/// # Examples
///
/// ```
/// use sovran_keyedstore::{KeyedLookup, KeyedStore, MapStore, StringKeyed};
///
/// let mut store = MapStore::<String, String>::new();
/// store.set("Bar".to_string(), "Foo".to_string());
/// store.set("9".to_string(), "Blah".to_string());
///
/// assert_eq!(store.item(&"Foo".to_string()), Some("Bar".to_string()));
/// assert_eq!(store.items_filtered("la"), vec!["9".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapStore<K, V>
where
    K: Eq + Hash,
{
    items: HashMap<K, V>,
}

impl<K, V> MapStore<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new, empty MapStore
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Returns a reference to the item stored under `key`
    ///
    /// Unlike [`KeyedLookup::item`] this does not clone the item.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Removes and returns the item stored under `key`
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.items.remove(key)
    }

    /// Iterates over all key-item pairs in unspecified order
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.items.iter()
    }
}

impl<K, V> Default for MapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for MapStore<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for MapStore<K, V>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a MapStore<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K, V> KeyedLookup for MapStore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    type Key = K;
    type Item = V;

    fn all_keys(&self) -> Vec<K> {
        self.items.keys().cloned().collect()
    }

    fn item(&self, key: &K) -> Option<V> {
        self.items.get(key).cloned()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<K, V> KeyedStore for MapStore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn set(&mut self, item: V, key: K) {
        if self.items.insert(key, item).is_some() {
            trace!(store = type_name::<Self>(), "overwrote stored item");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringKeyed;

    #[test]
    fn test_empty_store() {
        let store = MapStore::<String, i32>::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all_keys().is_empty());
        assert!(store.items_filtered("").is_empty());
        assert!(store.items_sorted_alphabetically().is_empty());
    }

    #[test]
    fn test_get_and_remove() {
        let mut store: MapStore<u8, Vec<i32>> = [(1, vec![1, 2, 3])].into_iter().collect();

        assert_eq!(store.get(&1).map(Vec::len), Some(3));
        assert_eq!(store.remove(&1), Some(vec![1, 2, 3]));
        assert_eq!(store.remove(&1), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_extend_overwrites() {
        let mut store = MapStore::<&str, i32>::new();
        store.set(1, "a");
        store.extend([("a", 2), ("b", 3)]);

        assert_eq!(store.item(&"a"), Some(2));
        assert_eq!(store.len(), 2);
        assert_eq!((&store).into_iter().count(), 2);
    }

    // Keys without Debug still support writes and erasure
    #[derive(Clone, PartialEq, Eq, Hash)]
    struct Opaque(u8);

    #[test]
    fn test_keys_need_not_be_debug() {
        let mut store = MapStore::<Opaque, &str>::new();
        store.set("first", Opaque(1));
        store.set("second", Opaque(1));
        assert_eq!(store.item(&Opaque(1)), Some("second"));

        let erased = crate::ErasedStore::with_projection(
            store,
            |key: &str| key.parse::<u8>().ok().map(Opaque),
            |key: &Opaque| key.0.to_string(),
        );
        assert_eq!(erased.item("1"), Some("second"));
        assert_eq!(erased.len(), 1);
    }
}
