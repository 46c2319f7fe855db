//! Daily update engine.
//!
//! One call advances every item by one simulated day:
//!
//! 1. quality adjustment using the `sell_in` as it was at the start of the day,
//! 2. `sell_in` decrement,
//! 3. a second quality adjustment if the item is now expired (`sell_in < 0`).
//!
//! Step 3 reads the value written by step 2, so an item entering the day with
//! `sell_in == 0` is already treated as expired.

use crate::category::Category;
use crate::item::Item;
use crate::quality;

/// Event passes gain a second unit at or below this many days.
pub const EVENT_PASS_SECOND_STEP_DAYS: i32 = 10;
/// Event passes gain a third unit at or below this many days.
pub const EVENT_PASS_THIRD_STEP_DAYS: i32 = 5;

/// Units lost per adjustment by fast-decaying items.
const FAST_DECAY_STEPS: u32 = 2;

/// Advance every item by one day, in place.
///
/// Items are independent; order only affects the order of mutation. Never fails:
/// unknown names are standard items and out-of-range values are left as they are.
pub fn advance_one_day(items: &mut [Item]) {
    let span = tracing::debug_span!("advance_one_day", items = items.len());
    let _guard = span.enter();

    for item in items.iter_mut() {
        advance_item(item);
    }
}

fn advance_item(item: &mut Item) {
    let category = item.category();
    let (sell_in_before, quality_before) = (item.sell_in, item.quality);

    adjust_before_expiry(item, category);

    if category != Category::Legendary {
        item.sell_in = item.sell_in.saturating_sub(1);
    }

    if item.is_expired() {
        adjust_after_expiry(item, category);
    }

    tracing::trace!(
        name = %item.name,
        category = %category,
        sell_in_before,
        sell_in = item.sell_in,
        quality_before,
        quality = item.quality,
        "item advanced"
    );
}

fn adjust_before_expiry(item: &mut Item, category: Category) {
    match category {
        Category::Legendary => {}
        Category::AgedAppreciating => quality::increase(&mut item.quality),
        Category::EventPass => {
            quality::increase(&mut item.quality);
            if item.sell_in <= EVENT_PASS_SECOND_STEP_DAYS {
                quality::increase(&mut item.quality);
            }
            if item.sell_in <= EVENT_PASS_THIRD_STEP_DAYS {
                quality::increase(&mut item.quality);
            }
        }
        Category::FastDecaying => quality::decrease_by(&mut item.quality, FAST_DECAY_STEPS),
        Category::Standard => quality::decrease(&mut item.quality),
    }
}

fn adjust_after_expiry(item: &mut Item, category: Category) {
    match category {
        Category::Legendary => {}
        Category::AgedAppreciating => quality::increase(&mut item.quality),
        // The event is over: worthless, whatever step 1 added.
        Category::EventPass => item.quality = 0,
        Category::FastDecaying => quality::decrease_by(&mut item.quality, FAST_DECAY_STEPS),
        Category::Standard => quality::decrease(&mut item.quality),
    }
}
