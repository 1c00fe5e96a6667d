use sovran_keyedstore::{
    ErasedStore, IndexPath, KeyedLookup, KeyedStore, MapStore, SectionedLookup, StoreError,
    StringKeyed,
};
use tracing_subscriber::EnvFilter;

/// Demonstrates string-keyed and index-path-keyed stores, and keeping both
/// behind one erased type
fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A plain string-keyed store with the string-only queries
    let mut words = MapStore::<String, String>::new();
    words.set("Bar".to_string(), "Foo".to_string());
    words.set("B".to_string(), "A".to_string());

    println!("Foo -> {:?}", words.item(&"Foo".to_string()));
    println!("Filtered by 'oo': {:?}", words.items_filtered("oo"));
    println!("Sorted: {:?}", words.items_sorted_alphabetically());

    // A table-like store keyed by section and row
    let mut table = MapStore::<IndexPath, String>::new();
    table.set("black".to_string(), IndexPath::new(0, 0));
    table.set("yellow".to_string(), IndexPath::new(0, 1));
    table.set("blue".to_string(), IndexPath::new(0, 2));

    println!("Section 0: {:?}", table.all_items_in_section(0));
    println!("Section 1: {:?}", table.all_items_in_section(1));

    // Both stores hold Strings, so both erase to ErasedStore<String>
    let mut stores = vec![ErasedStore::new(words), ErasedStore::new(table)];

    for store in &stores {
        println!(
            "Foo -> {}",
            store.item("Foo").unwrap_or_else(|| "not found".to_string())
        );
    }

    stores[1].set("red".to_string(), "1:0")?;

    match stores[1].set("green".to_string(), "Foo") {
        Ok(()) => println!("This shouldn't happen - Foo is not an index path"),
        Err(StoreError::InvalidKey(key)) => println!("Correctly rejected key ({})", key),
        Err(e) => println!("Unexpected error: {}", e),
    }

    for (i, store) in stores.iter().enumerate() {
        println!("Store {} keys (sorted): {:?}", i, {
            let mut keys = store.all_keys();
            keys.sort();
            keys
        });
        println!("Store {} items by key: {:?}", i, store.items_sorted_alphabetically());
    }

    Ok(())
}
