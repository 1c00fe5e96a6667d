use crate::error::{Result, StoreError};
use crate::keyed::{KeyedLookup, KeyedStore};
use std::any::type_name;
use std::fmt;
use tracing::{debug, warn};

/// A key type with a fixed string representation
///
/// Stores whose key implements `StringKey` can be wrapped with
/// [`ErasedStore::new`]. Any other key type needs an explicit projection,
/// see [`ErasedStore::with_projection`].
pub trait StringKey: Sized {
    /// Parses a string into a key, or `None` if it names no possible key
    fn parse_key(key: &str) -> Option<Self>;

    /// Renders the key as a string that `parse_key` accepts
    fn render_key(&self) -> String;
}

impl StringKey for String {
    fn parse_key(key: &str) -> Option<Self> {
        Some(key.to_string())
    }

    fn render_key(&self) -> String {
        self.clone()
    }
}

// Object-safe face of a wrapped store, fixed at the item type only
trait StoreBox<T> {
    fn all_keys(&self) -> Vec<String>;
    fn item(&self, key: &str) -> Option<T>;
    fn set(&mut self, item: T, key: &str) -> Result<()>;
    fn len(&self) -> usize;
}

struct ProjectedStore<S, P, R> {
    base: S,
    parse: P,
    render: R,
}

impl<S, P, R> StoreBox<S::Item> for ProjectedStore<S, P, R>
where
    S: KeyedStore,
    P: Fn(&str) -> Option<S::Key>,
    R: Fn(&S::Key) -> String,
{
    fn all_keys(&self) -> Vec<String> {
        self.base
            .all_keys()
            .iter()
            .map(|key| {
                let rendered = (self.render)(key);
                debug_assert!(
                    (self.parse)(&rendered).is_some(),
                    "rendered key ({}) is rejected by its own parser",
                    rendered
                );
                rendered
            })
            .collect()
    }

    fn item(&self, key: &str) -> Option<S::Item> {
        let key = (self.parse)(key)?;
        self.base.item(&key)
    }

    fn set(&mut self, item: S::Item, key: &str) -> Result<()> {
        match (self.parse)(key) {
            Some(parsed) => {
                self.base.set(item, parsed);
                Ok(())
            }
            None => {
                warn!(key, store = type_name::<S>(), "rejected key for erased store");
                Err(StoreError::InvalidKey(key.to_string()))
            }
        }
    }

    fn len(&self) -> usize {
        self.base.len()
    }
}

/// A keyed store with its concrete type and key type erased
///
/// `ErasedStore<T>` owns one boxed store whose items are `T` and talks to it
/// through string keys. Stores that differ in their key type or in their
/// implementation can then sit in the same collection.
///
/// The item type is checked at compile time: only a store whose `Item` is
/// exactly `T` can be wrapped.
///
/// # Examples
///
/// ```
/// use sovran_keyedstore::{ErasedStore, IndexPath, KeyedStore, MapStore};
///
/// let mut by_name = MapStore::<String, String>::new();
/// by_name.set("Bar".to_string(), "Foo".to_string());
///
/// let mut by_path = MapStore::<IndexPath, String>::new();
/// by_path.set("Cell".to_string(), IndexPath::new(0, 0));
///
/// let stores = vec![ErasedStore::new(by_name), ErasedStore::new(by_path)];
/// let found: Vec<Option<String>> = stores.iter().map(|s| s.item("Foo")).collect();
/// assert_eq!(found, vec![Some("Bar".to_string()), None]);
///
/// assert_eq!(stores[1].item("0:0"), Some("Cell".to_string()));
/// ```
pub struct ErasedStore<T> {
    inner: Box<dyn StoreBox<T>>,
}

impl<T: 'static> ErasedStore<T> {
    /// Wraps a store whose key has a string representation
    pub fn new<S>(store: S) -> Self
    where
        S: KeyedStore<Item = T> + 'static,
        S::Key: StringKey,
    {
        Self::with_projection(
            store,
            <S::Key as StringKey>::parse_key,
            <S::Key as StringKey>::render_key,
        )
    }

    /// Wraps a store using an explicit key projection
    ///
    /// `parse` maps an external string onto the store's key, returning `None`
    /// for strings that name no key. `render` maps keys back to strings for
    /// [`all_keys`](KeyedLookup::all_keys).
    ///
    /// `parse` must accept every string `render` produces, otherwise listed
    /// keys would name no item.
    ///
    /// # Panics
    ///
    /// In debug builds, [`all_keys`](KeyedLookup::all_keys) panics when a
    /// rendered key is rejected by `parse`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_keyedstore::{ErasedStore, KeyedLookup, KeyedStore, MapStore};
    ///
    /// let mut ports = MapStore::<u16, &'static str>::new();
    /// ports.set("http", 80);
    ///
    /// let mut erased = ErasedStore::with_projection(
    ///     ports,
    ///     |key: &str| key.parse::<u16>().ok(),
    ///     |port: &u16| port.to_string(),
    /// );
    ///
    /// assert_eq!(erased.item("80"), Some("http"));
    /// assert!(erased.set("https", "four-four-three").is_err());
    /// assert_eq!(erased.all_keys(), vec!["80".to_string()]);
    /// ```
    pub fn with_projection<S, P, R>(store: S, parse: P, render: R) -> Self
    where
        S: KeyedStore<Item = T> + 'static,
        P: Fn(&str) -> Option<S::Key> + 'static,
        R: Fn(&S::Key) -> String + 'static,
    {
        debug!(
            store = type_name::<S>(),
            item = type_name::<T>(),
            "erasing keyed store"
        );
        Self {
            inner: Box::new(ProjectedStore {
                base: store,
                parse,
                render,
            }),
        }
    }
}

impl<T> ErasedStore<T> {
    /// Returns the item stored under `key`
    ///
    /// A key the wrapped store cannot represent names no item, so this
    /// returns `None` for it.
    pub fn item(&self, key: &str) -> Option<T> {
        self.inner.item(key)
    }

    /// Stores `item` under `key` in the wrapped store
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` if the key cannot be projected onto
    /// the wrapped store's key type.
    pub fn set(&mut self, item: T, key: &str) -> Result<()> {
        self.inner.set(item, key)
    }
}

impl<T> KeyedLookup for ErasedStore<T> {
    type Key = String;
    type Item = T;

    fn all_keys(&self) -> Vec<String> {
        self.inner.all_keys()
    }

    fn item(&self, key: &String) -> Option<T> {
        self.inner.item(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> fmt::Debug for ErasedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedStore")
            .field("item", &type_name::<T>())
            .field("len", &self.inner.len())
            .finish()
    }
}
