//! Catalog items shown by the rating widget.

use serde::{Deserialize, Serialize};

/// One image record from the external catalog.
///
/// Items are read-only once fetched; the widget only ever swaps the whole
/// value out when cycling.
///
/// # Examples
///
/// ```
/// use lagrange_core::Item;
///
/// let item = Item::new(42, "https://x/42.png", Some("https://src/42".into()), "#336699");
/// assert_eq!(*item.id(), 42);
/// assert_eq!(item.source_link(), "https://src/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Item {
    /// Catalog id of the image.
    id: u64,
    /// Direct link to the image file.
    url: String,
    /// Where the artwork comes from, when the catalog knows.
    source: Option<String>,
    /// Dominant color as reported by the catalog, e.g. `#336699`.
    dominant_color: String,
}

impl Item {
    /// Creates an item from its catalog fields.
    pub fn new(
        id: u64,
        url: impl Into<String>,
        source: Option<String>,
        dominant_color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            source,
            dominant_color: dominant_color.into(),
        }
    }

    /// Link rendered next to the item id. Falls back to the image itself.
    pub fn source_link(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.url)
    }
}
