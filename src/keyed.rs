//! The keyed-store abstraction and its constrained extensions.

/// Read access to a keyed store.
///
/// This is the part of a store that survives type erasure, so derived
/// queries are written against it rather than against [`KeyedStore`].
pub trait KeyedLookup {
    /// The key type items are stored under
    type Key;
    /// The type of the stored items
    type Item;

    /// Returns every key currently stored
    ///
    /// Enumeration order is whatever the underlying mapping yields.
    fn all_keys(&self) -> Vec<Self::Key>;

    /// Returns the item stored under `key`, or `None` if the key is unknown
    fn item(&self, key: &Self::Key) -> Option<Self::Item>;

    /// Returns true if an item is stored under `key`
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.item(key).is_some()
    }

    /// Returns the number of stored keys
    fn len(&self) -> usize {
        self.all_keys().len()
    }

    /// Returns true if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A generic associative store: lookup, insertion, and overwrite by key.
///
/// # Examples
///
/// ```
/// use sovran_keyedstore::{KeyedLookup, KeyedStore, MapStore};
///
/// let mut store = MapStore::<String, u32>::new();
/// store.set(1, "one".to_string());
/// store.set(2, "one".to_string());
///
/// assert_eq!(store.item(&"one".to_string()), Some(2));
/// assert_eq!(store.all_keys().len(), 1);
/// ```
pub trait KeyedStore: KeyedLookup {
    /// Stores `item` under `key`, replacing any item already there
    fn set(&mut self, item: Self::Item, key: Self::Key);
}

/// Queries available on any lookup whose keys are strings.
///
/// # Examples
///
/// ```
/// use sovran_keyedstore::{KeyedStore, MapStore, StringKeyed};
///
/// let mut store = MapStore::<String, String>::new();
/// store.set("Bar".to_string(), "Foo".to_string());
/// store.set("B".to_string(), "A".to_string());
///
/// assert_eq!(store.items_filtered("oo"), vec!["Bar".to_string()]);
/// assert_eq!(
///     store.items_sorted_alphabetically(),
///     vec!["B".to_string(), "Bar".to_string()]
/// );
/// ```
pub trait StringKeyed: KeyedLookup {
    /// Returns the items whose key contains `term`, in `all_keys` order
    ///
    /// An empty `term` matches every key. Keys without an item are skipped.
    fn items_filtered(&self, term: &str) -> Vec<Self::Item>;

    /// Returns the items ordered by ascending lexicographic key
    ///
    /// Keys compare as strings, whatever `Ord` the key type has.
    fn items_sorted_alphabetically(&self) -> Vec<Self::Item>;
}

impl<S> StringKeyed for S
where
    S: KeyedLookup + ?Sized,
    S::Key: AsRef<str>,
{
    fn items_filtered(&self, term: &str) -> Vec<Self::Item> {
        self.all_keys()
            .iter()
            .filter(|key| AsRef::<str>::as_ref(*key).contains(term))
            .filter_map(|key| self.item(key))
            .collect()
    }

    fn items_sorted_alphabetically(&self) -> Vec<Self::Item> {
        let mut keys = self.all_keys();
        keys.sort_by(|a, b| AsRef::<str>::as_ref(a).cmp(AsRef::<str>::as_ref(b)));
        keys.iter().filter_map(|key| self.item(key)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    // Lookup that advertises a key it has no item for
    struct Gappy {
        items: BTreeMap<String, i32>,
    }

    impl KeyedLookup for Gappy {
        type Key = String;
        type Item = i32;

        fn all_keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.items.keys().cloned().collect();
            keys.push("ghost".to_string());
            keys
        }

        fn item(&self, key: &String) -> Option<i32> {
            self.items.get(key).copied()
        }
    }

    #[test]
    fn test_queries_skip_keys_without_items() {
        let mut items = BTreeMap::new();
        items.insert("host".to_string(), 1);
        items.insert("ghoul".to_string(), 2);
        let lookup = Gappy { items };

        assert_eq!(lookup.items_filtered("ho"), vec![2, 1]);
        assert_eq!(lookup.items_filtered("gho"), vec![2]);
        assert_eq!(lookup.items_sorted_alphabetically(), vec![2, 1]);
    }

    #[test]
    fn test_provided_helpers() {
        let lookup = Gappy {
            items: BTreeMap::new(),
        };

        // The phantom key still counts toward len
        assert_eq!(lookup.len(), 1);
        assert!(!lookup.is_empty());
        assert!(!lookup.contains_key(&"ghost".to_string()));
    }
}
