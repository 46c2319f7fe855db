//! Gilded Rose inventory domain.
//!
//! Pure, deterministic domain logic (no IO, no storage): items, their
//! name-based categories, and the once-per-day update of `sell_in` and
//! `quality`.

pub mod category;
pub mod gilded_rose;
pub mod item;
pub mod quality;
pub mod update;

pub use category::Category;
pub use gilded_rose::GildedRose;
pub use item::Item;
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use update::advance_one_day;
