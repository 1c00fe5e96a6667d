//! In-memory application settings and typed, enum-keyed views over them.
//!
//! [`Settings`] holds values of any type under string keys and checks the
//! type on every read. [`TypedSettings`] narrows it to one key enum and one
//! value type, which turns it into an ordinary [`KeyedStore`].
//!
//! ```
//! use sovran_keyedstore::{KeyedLookup, KeyedStore, SettingKey, Settings};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum AppFlag {
//!     IsUserLoggedIn,
//!     HasFirstSetupFinished,
//! }
//!
//! impl SettingKey for AppFlag {
//!     const ALL: &'static [Self] = &[Self::IsUserLoggedIn, Self::HasFirstSetupFinished];
//!
//!     fn raw_key(&self) -> &'static str {
//!         match self {
//!             Self::IsUserLoggedIn => "isUserLoggedIn",
//!             Self::HasFirstSetupFinished => "hasFirstSetupFinished",
//!         }
//!     }
//! }
//!
//! let mut settings = Settings::new();
//! {
//!     let mut flags = settings.typed::<AppFlag, bool>();
//!     flags.set(true, AppFlag::HasFirstSetupFinished);
//!     assert_eq!(flags.item(&AppFlag::HasFirstSetupFinished), Some(true));
//!     assert_eq!(flags.item(&AppFlag::IsUserLoggedIn), None);
//! }
//!
//! // The untyped store sees the same entry under its raw key
//! assert!(settings.flag("hasFirstSetupFinished"));
//! ```

use crate::any_value::AnyValue;
use crate::error::{Result, StoreError};
use crate::keyed::{KeyedLookup, KeyedStore};
use std::any::type_name;
use std::collections::HashMap;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// A closed set of setting keys, usually a fieldless enum
pub trait SettingKey: Copy + Eq + Debug + 'static {
    /// Every key of this type
    const ALL: &'static [Self];

    /// The string the key is stored under
    fn raw_key(&self) -> &'static str;

    /// Looks up the key whose raw form is `raw`
    fn from_raw_key(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.raw_key() == raw)
    }
}

/// A heterogeneous settings store keyed by strings
#[derive(Debug, Default)]
pub struct Settings {
    items: HashMap<String, AnyValue>,
}

impl Settings {
    /// Creates a new, empty Settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing whatever was there
    ///
    /// The replaced value may have had a different type.
    pub fn set<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: 'static + Send + Sync,
    {
        let key = key.into();
        if let Some(previous) = self.items.get(&key) {
            if !previous.is_type::<T>() {
                debug!(
                    key = %key,
                    from = previous.type_name(),
                    to = type_name::<T>(),
                    "setting changed type"
                );
            }
        }
        self.items.insert(key, AnyValue::new(value));
    }

    /// Reads a clone of the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TypeMismatch` if the key holds a value of another type.
    pub fn value<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: 'static + Clone,
    {
        match self.items.get(key) {
            None => Ok(None),
            Some(stored) => stored
                .downcast_ref::<T>()
                .cloned()
                .map(Some)
                .ok_or_else(|| StoreError::TypeMismatch {
                    key: key.to_string(),
                    expected: type_name::<T>(),
                }),
        }
    }

    /// Returns the string stored under `key`, or `None` if absent or not a string
    pub fn string(&self, key: &str) -> Option<String> {
        self.value::<String>(key).ok().flatten()
    }

    /// Returns the bool stored under `key`; absent or non-bool entries read as `false`
    pub fn flag(&self, key: &str) -> bool {
        self.value::<bool>(key).ok().flatten().unwrap_or(false)
    }

    /// Returns true if any value is stored under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Removes the value under `key`, returning whether one was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.items.remove(key).is_some()
    }

    /// Returns every stored key in unspecified order
    pub fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Returns the number of stored settings
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no settings are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows a typed view restricted to keys `K` holding values `T`
    pub fn typed<K, T>(&mut self) -> TypedSettings<'_, K, T>
    where
        K: SettingKey,
        T: 'static + Clone + Send + Sync,
    {
        TypedSettings {
            settings: self,
            _marker: PhantomData,
        }
    }
}

/// A view of [`Settings`] keyed by a [`SettingKey`] enum with one value type
///
/// Reading a key that holds a value of another type yields `None` and logs a
/// warning; use [`Settings::value`] to get the mismatch as an error instead.
pub struct TypedSettings<'a, K, T> {
    settings: &'a mut Settings,
    _marker: PhantomData<fn() -> (K, T)>,
}

impl<K, T> KeyedLookup for TypedSettings<'_, K, T>
where
    K: SettingKey,
    T: 'static + Clone + Send + Sync,
{
    type Key = K;
    type Item = T;

    fn all_keys(&self) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|key| {
                self.settings
                    .items
                    .get(key.raw_key())
                    .is_some_and(AnyValue::is_type::<T>)
            })
            .collect()
    }

    fn item(&self, key: &K) -> Option<T> {
        match self.settings.value::<T>(key.raw_key()) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = ?key, error = %e, "typed setting holds another type");
                None
            }
        }
    }
}

impl<K, T> KeyedStore for TypedSettings<'_, K, T>
where
    K: SettingKey,
    T: 'static + Clone + Send + Sync,
{
    fn set(&mut self, item: T, key: K) {
        self.settings.set(key.raw_key(), item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Account {
        UserName,
        UserPassword,
    }

    impl SettingKey for Account {
        const ALL: &'static [Self] = &[Self::UserName, Self::UserPassword];

        fn raw_key(&self) -> &'static str {
            match self {
                Self::UserName => "userName",
                Self::UserPassword => "userPassword",
            }
        }
    }

    #[test]
    fn test_value_type_mismatch() {
        let mut settings = Settings::new();
        settings.set("volume", 7i64);

        assert_eq!(settings.value::<i64>("volume").ok().flatten(), Some(7));
        match settings.value::<bool>("volume") {
            Err(StoreError::TypeMismatch { key, expected }) => {
                assert_eq!(key, "volume");
                assert_eq!(expected, "bool");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
        assert!(matches!(settings.value::<bool>("missing"), Ok(None)));
    }

    #[test]
    fn test_flag_and_string_defaults() {
        let mut settings = Settings::new();
        settings.set("FooBar", true);
        settings.set("name", "Thomas".to_string());

        assert!(settings.flag("FooBar"));
        assert!(!settings.flag("BarFoo"));
        assert!(!settings.flag("name"));
        assert_eq!(settings.string("name"), Some("Thomas".to_string()));
        assert_eq!(settings.string("FooBar"), None);
    }

    #[test]
    fn test_set_replaces_across_types() {
        let mut settings = Settings::new();
        settings.set("mode", 1i64);
        settings.set("mode", "dark".to_string());

        assert_eq!(settings.len(), 1);
        assert_eq!(settings.string("mode"), Some("dark".to_string()));
        assert!(settings.remove("mode"));
        assert!(!settings.remove("mode"));
        assert!(settings.is_empty());
    }

    #[test]
    fn test_typed_view() {
        let mut settings = Settings::new();
        settings.set("userPassword", 1234i64);

        let mut account = settings.typed::<Account, String>();
        assert!(account.all_keys().is_empty());
        assert_eq!(account.item(&Account::UserPassword), None);

        account.set("Thomas".to_string(), Account::UserName);
        account.set("blah".to_string(), Account::UserPassword);

        assert_eq!(
            account.all_keys(),
            vec![Account::UserName, Account::UserPassword]
        );
        assert_eq!(account.item(&Account::UserPassword), Some("blah".to_string()));
        assert_eq!(settings.keys().len(), 2);
    }

    #[test]
    fn test_from_raw_key() {
        assert_eq!(Account::from_raw_key("userName"), Some(Account::UserName));
        assert_eq!(Account::from_raw_key("username"), None);
    }
}
