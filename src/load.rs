use crate::error::{Result, StoreError};
use crate::keyed::{KeyedLookup, KeyedStore};
use crate::map::MapStore;
use crate::settings::Settings;
use std::any::type_name;
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item, Value};
use tracing::debug;

/// A store that can construct itself from a TOML document
///
/// Only top-level entries are read; each entry becomes one key.
pub trait Loadable: Sized {
    /// Builds a store from TOML source text
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::Parse` if the text is not valid TOML
    /// - Returns `StoreError::InvalidValue` if an entry cannot be stored
    fn load_from_str(source: &str) -> Result<Self>;

    /// Builds a store from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, otherwise the
    /// same errors as [`load_from_str`](Loadable::load_from_str).
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), store = type_name::<Self>(), "loading store");
        Self::load_from_str(&source)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> StoreError {
    StoreError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn top_level_value<'a>(key: &str, item: &'a Item) -> Result<&'a Value> {
    item.as_value()
        .ok_or_else(|| invalid(key, format!("expected a value, found {}", item.type_name())))
}

/// Loads every top-level string entry.
///
/// ```
/// use sovran_keyedstore::{KeyedLookup, Loadable, MapStore};
///
/// let store = MapStore::<String, String>::load_from_str(r#"
/// Foo = "Bar"
/// A = "B"
/// "#)?;
///
/// assert_eq!(store.item(&"Foo".to_string()), Some("Bar".to_string()));
/// assert_eq!(store.len(), 2);
/// # Ok::<(), sovran_keyedstore::StoreError>(())
/// ```
impl Loadable for MapStore<String, String> {
    fn load_from_str(source: &str) -> Result<Self> {
        let document: DocumentMut = source.parse()?;
        let mut store = MapStore::new();

        for (key, item) in document.iter() {
            let value = top_level_value(key, item)?;
            let text = value.as_str().ok_or_else(|| {
                invalid(key, format!("expected a string, found {}", value.type_name()))
            })?;
            store.set(text.to_string(), key.to_string());
        }

        debug!(entries = store.len(), "loaded string store");
        Ok(store)
    }
}

/// Loads top-level scalars: strings as `String`, integers as `i64`, floats
/// as `f64`, and booleans as `bool`.
impl Loadable for Settings {
    fn load_from_str(source: &str) -> Result<Self> {
        let document: DocumentMut = source.parse()?;
        let mut settings = Settings::new();

        for (key, item) in document.iter() {
            match top_level_value(key, item)? {
                Value::String(s) => settings.set(key, s.value().clone()),
                Value::Integer(i) => settings.set(key, *i.value()),
                Value::Float(f) => settings.set(key, *f.value()),
                Value::Boolean(b) => settings.set(key, *b.value()),
                other => {
                    return Err(invalid(
                        key,
                        format!("unsupported setting type {}", other.type_name()),
                    ))
                }
            }
        }

        debug!(entries = settings.len(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringKeyed;

    #[test]
    fn test_load_string_store() -> Result<()> {
        let store = MapStore::<String, String>::load_from_str(
            r#"
            Foo = "Bar"
            A = "B"
            "#,
        )?;

        assert_eq!(store.items_filtered("oo"), vec!["Bar".to_string()]);
        assert_eq!(
            store.items_sorted_alphabetically(),
            vec!["B".to_string(), "Bar".to_string()]
        );
        Ok(())
    }

    #[test]
    fn test_string_store_rejects_other_values() {
        let result = MapStore::<String, String>::load_from_str("retries = 3");

        match result {
            Err(StoreError::InvalidValue { key, reason }) => {
                assert_eq!(key, "retries");
                assert!(reason.contains("integer"));
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_tables_are_rejected() {
        let result = MapStore::<String, String>::load_from_str("[server]\nhost = \"a\"");
        assert!(matches!(result, Err(StoreError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Settings::load_from_str("this is = = not toml");
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_load_settings_scalars() -> Result<()> {
        let settings = Settings::load_from_str(
            r#"
            userName = "Thomas"
            retries = 3
            ratio = 0.5
            isAllCached = true
            "#,
        )?;

        assert_eq!(settings.string("userName"), Some("Thomas".to_string()));
        assert_eq!(settings.value::<i64>("retries")?, Some(3));
        assert_eq!(settings.value::<f64>("ratio")?, Some(0.5));
        assert!(settings.flag("isAllCached"));
        assert_eq!(settings.len(), 4);
        Ok(())
    }

    #[test]
    fn test_settings_reject_arrays() {
        let result = Settings::load_from_str("hosts = [\"a\", \"b\"]");
        match result {
            Err(StoreError::InvalidValue { key, reason }) => {
                assert_eq!(key, "hosts");
                assert!(reason.contains("array"));
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }
}
