//! Grid placement for migrated apps
//!
//! Apps are laid out left to right in rows of six 3x3 slots on an
//! 18-unit-wide grid. Slot width times slot count tiles the row exactly, so
//! positions derived from the ordinal index never overlap.

use crate::model::{ShapeLocation, ShapeSize};

/// Width and height of one slot
pub const SLOT_SIZE: u32 = 3;

/// Slots per row
pub const SLOTS_PER_ROW: usize = 6;

/// Total grid width
pub const GRID_WIDTH: u32 = SLOT_SIZE * SLOTS_PER_ROW as u32;

/// Size given to every migrated app
pub const DEFAULT_APP_SIZE: ShapeSize = ShapeSize {
    width: SLOT_SIZE,
    height: SLOT_SIZE,
};

/// Location of the app at `index` in the legacy service list
///
/// `x = (index * 3) mod 18`, `y = floor(index / 6) * 3`.
#[inline]
#[must_use]
pub fn grid_location(index: usize) -> ShapeLocation {
    let column = (index % SLOTS_PER_ROW) as u32;
    let row = u32::try_from(index / SLOTS_PER_ROW).unwrap_or(u32::MAX / SLOT_SIZE);
    ShapeLocation {
        x: column * SLOT_SIZE,
        y: row.saturating_mul(SLOT_SIZE),
    }
}
