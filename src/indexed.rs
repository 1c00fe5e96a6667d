use crate::erased::StringKey;
use crate::keyed::KeyedLookup;
use std::fmt;

/// A section/row coordinate, the key type of table-like stores
///
/// Index paths order by section first, then by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.row)
    }
}

/// Index paths cross an erasure boundary as `"<section>:<row>"`.
impl StringKey for IndexPath {
    fn parse_key(key: &str) -> Option<Self> {
        let (section, row) = key.split_once(':')?;
        Some(Self {
            section: section.trim().parse().ok()?,
            row: row.trim().parse().ok()?,
        })
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

/// Queries available on any lookup keyed by [`IndexPath`].
///
/// # Examples
///
/// ```
/// use sovran_keyedstore::{IndexPath, KeyedStore, MapStore, SectionedLookup};
///
/// let mut colors = MapStore::<IndexPath, &str>::new();
/// colors.set("black", IndexPath::new(0, 0));
/// colors.set("yellow", IndexPath::new(0, 1));
/// colors.set("blue", IndexPath::new(1, 0));
///
/// assert_eq!(colors.all_items_in_section(1), vec!["blue"]);
/// assert!(colors.all_items_in_section(2).is_empty());
/// ```
pub trait SectionedLookup: KeyedLookup<Key = IndexPath> {
    /// Returns the items whose key lies in `section`, in `all_keys` order
    fn all_items_in_section(&self, section: usize) -> Vec<Self::Item>;
}

impl<S> SectionedLookup for S
where
    S: KeyedLookup<Key = IndexPath> + ?Sized,
{
    fn all_items_in_section(&self, section: usize) -> Vec<Self::Item> {
        self.all_keys()
            .iter()
            .filter(|key| key.section == section)
            .filter_map(|key| self.item(key))
            .collect()
    }
}
