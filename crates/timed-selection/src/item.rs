//! Item Entity
//!
//! A selectable thumbnail in the fixed collection shown by a screen.

/// Item identifier (1-based, stable for the lifetime of the screen)
pub type ItemId = u32;

/// Immutable selectable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display asset reference (image URL)
    pub image_src: String,
    /// Style label used as alt text
    pub style: String,
}

impl Item {
    pub fn new(id: ItemId, asset_prefix: &str) -> Self {
        let prefix = asset_prefix.trim_end_matches('/');
        Self {
            id,
            image_src: format!("{}/{}.png", prefix, id),
            style: format!("Style {}", id),
        }
    }

    /// Build the fixed collection `1..=count`
    pub fn catalog(count: u32, asset_prefix: &str) -> Vec<Item> {
        (1..=count).map(|id| Item::new(id, asset_prefix)).collect()
    }
}
