use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single inventory item.
///
/// Plain data: construction performs no validation and all rules live in
/// [`crate::update`]. The name is the only input to classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left to sell the item. Goes negative once the sell-by date passes.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Classify this item by name. Recomputed on every call.
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Expired means the sell-by date has passed (`sell_in < 0`).
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
