//! Name-based item classification.

use serde::{Deserialize, Serialize};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Any name containing this marker is fast-decaying, wherever it appears.
pub const CONJURED_MARKER: &str = "Conjured";

/// The closed set of item categories the daily update knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Gains quality with age (Aged Brie).
    AgedAppreciating,
    /// Gains quality faster as the event nears, worthless afterwards.
    EventPass,
    /// Never sold, never degrades.
    Legendary,
    /// Degrades twice as fast as standard items.
    FastDecaying,
    Standard,
}

impl Category {
    /// Map an item name to its category.
    ///
    /// Exact names are matched first; the conjured marker is a substring match.
    /// Unknown names are `Standard`.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedAppreciating,
            BACKSTAGE_PASSES => Category::EventPass,
            SULFURAS => Category::Legendary,
            _ if name.contains(CONJURED_MARKER) => Category::FastDecaying,
            _ => Category::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::AgedAppreciating => "aged_appreciating",
            Category::EventPass => "event_pass",
            Category::Legendary => "legendary",
            Category::FastDecaying => "fast_decaying",
            Category::Standard => "standard",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
