//! Bounded quality steps.
//!
//! Every change to quality goes through a unit step that checks the bound
//! before moving. Larger adjustments are repeated unit steps, never a bulk add
//! followed by a clamp.

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Quality carried by legendary items in the standard catalogue. Not enforced.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Raise quality by one unless it is already at (or above) the ceiling.
pub fn increase(quality: &mut i32) {
    if *quality < MAX_QUALITY {
        *quality += 1;
    }
}

/// Lower quality by one unless it is already at (or below) the floor.
pub fn decrease(quality: &mut i32) {
    if *quality > MIN_QUALITY {
        *quality -= 1;
    }
}

pub fn increase_by(quality: &mut i32, steps: u32) {
    for _ in 0..steps {
        increase(quality);
    }
}

pub fn decrease_by(quality: &mut i32, steps: u32) {
    for _ in 0..steps {
        decrease(quality);
    }
}
