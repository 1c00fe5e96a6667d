//! # sovran-keyedstore
//!
//! Generic keyed-item stores with constrained queries and type erasure.
//!
//! `sovran-keyedstore` describes a store by two associated types, its `Key`
//! and its `Item`, and builds everything else on top of that: queries that
//! only exist for certain key types, and a wrapper that erases the key type so
//! unrelated stores can be kept side by side.
//!
//! ## Key Features
//!
//! - **Associated types**: [`KeyedStore`] is generic over its key and item without type parameters
//! - **Constrained queries**: [`StringKeyed`] and [`SectionedLookup`] apply only to matching key types
//! - **Type erasure**: [`ErasedStore`] hides the key type behind string keys, checked at compile time
//! - **Loadable**: stores can build themselves from TOML with [`Loadable`]
//! - **Typed settings**: [`Settings`] with enum-keyed [`TypedSettings`] views
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_keyedstore::{KeyedLookup, KeyedStore, MapStore, StringKeyed};
//!
//! let mut store = MapStore::<String, String>::new();
//! store.set("Bar".to_string(), "Foo".to_string());
//! store.set("B".to_string(), "A".to_string());
//!
//! assert_eq!(store.item(&"Foo".to_string()), Some("Bar".to_string()));
//! assert_eq!(store.item(&"Nope".to_string()), None);
//!
//! // Only available because the key is a String
//! assert_eq!(store.items_filtered("oo"), vec!["Bar".to_string()]);
//! assert_eq!(
//!     store.items_sorted_alphabetically(),
//!     vec!["B".to_string(), "Bar".to_string()]
//! );
//! ```
//!
//! ### Implementing Your Own Store
//!
//! ```rust
//! use sovran_keyedstore::{KeyedLookup, KeyedStore, StringKeyed};
//! use std::collections::BTreeMap;
//!
//! #[derive(Default)]
//! struct Glossary {
//!     entries: BTreeMap<String, String>,
//! }
//!
//! impl KeyedLookup for Glossary {
//!     type Key = String;
//!     type Item = String;
//!
//!     fn all_keys(&self) -> Vec<String> {
//!         self.entries.keys().cloned().collect()
//!     }
//!
//!     fn item(&self, key: &String) -> Option<String> {
//!         self.entries.get(key).cloned()
//!     }
//! }
//!
//! impl KeyedStore for Glossary {
//!     fn set(&mut self, item: String, key: String) {
//!         self.entries.insert(key, item);
//!     }
//! }
//!
//! let mut glossary = Glossary::default();
//! glossary.set("a mapping supporting lookup".to_string(), "store".to_string());
//! glossary.set("hiding a type parameter".to_string(), "erasure".to_string());
//!
//! assert_eq!(glossary.len(), 2);
//! assert_eq!(glossary.items_filtered("ras").len(), 1);
//! ```
//!
//! ### Keeping Different Stores Together
//!
//! ```rust
//! use sovran_keyedstore::{ErasedStore, IndexPath, KeyedStore, MapStore, StoreError};
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut names = MapStore::<String, &'static str>::new();
//!     names.set("Bar", "Foo".to_string());
//!
//!     let mut cells = MapStore::<IndexPath, &'static str>::new();
//!     cells.set("black", IndexPath::new(0, 0));
//!
//!     let mut stores = vec![ErasedStore::new(names), ErasedStore::new(cells)];
//!
//!     for store in &stores {
//!         println!("{}", store.item("Foo").unwrap_or("not found"));
//!     }
//!
//!     // Writes go through the same string keys
//!     stores[1].set("yellow", "0:1")?;
//!     assert_eq!(stores[1].item("0:1"), Some("yellow"));
//!
//!     // A key the store cannot represent is refused
//!     match stores[1].set("blue", "Foo") {
//!         Err(StoreError::InvalidKey(key)) => println!("Rejected key {}", key),
//!         other => println!("Unexpected: {:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Loading From TOML
//!
//! ```rust
//! use sovran_keyedstore::{Loadable, Settings, StoreError};
//!
//! let settings = Settings::load_from_str("userName = \"Thomas\"\nisAllCached = true")?;
//!
//! assert!(settings.flag("isAllCached"));
//! assert_eq!(settings.string("userName"), Some("Thomas".to_string()));
//!
//! match settings.value::<i64>("userName") {
//!     Err(StoreError::TypeMismatch { key, .. }) => println!("{} is not a number", key),
//!     other => println!("Unexpected: {:?}", other),
//! }
//! # Ok::<(), StoreError>(())
//! ```

mod any_value;
mod erased;
mod error;
mod indexed;
mod keyed;
mod load;
mod map;
mod settings;

pub use erased::{ErasedStore, StringKey};
pub use error::{Result, StoreError};
pub use indexed::{IndexPath, SectionedLookup};
pub use keyed::{KeyedLookup, KeyedStore, StringKeyed};
pub use load::Loadable;
pub use map::MapStore;
pub use settings::{SettingKey, Settings, TypedSettings};
