use crate::item::Item;
use crate::update::advance_one_day;

/// Owns a catalogue of items and advances it one day at a time.
///
/// Thin wrapper over [`advance_one_day`] for callers that prefer to hand the
/// items over rather than keep borrowing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every owned item by one day.
    pub fn update_quality(&mut self) {
        advance_one_day(&mut self.items);
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
