//! Selection Set
//!
//! Ordered, bounded, duplicate-free list of chosen item ids.
//! Insertion order is the rank shown on each thumbnail.

use crate::item::ItemId;

/// Result of toggling one id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Appended at the given 1-based rank
    Added(usize),
    /// Removed; later entries shift up one rank
    Removed,
    /// Set already holds `max` ids
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<ItemId>,
    max: usize,
}

impl SelectionSet {
    pub fn new(max: usize) -> Self {
        Self {
            ids: Vec::with_capacity(max),
            max,
        }
    }

    /// Remove `id` if present, otherwise append it when there is room.
    pub fn toggle(&mut self, id: ItemId) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            return Toggle::Removed;
        }
        if self.is_full() {
            return Toggle::Full;
        }
        self.ids.push(id);
        Toggle::Added(self.ids.len())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// 1-based rank of `id`, if selected
    pub fn rank_of(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|&x| x == id).map(|pos| pos + 1)
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max
    }

    pub fn max(&self) -> usize {
        self.max
    }
}
