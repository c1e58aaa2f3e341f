//! Folding world windows across the 0/360 longitude seam

use crate::constants::WORLD_WRAP;
use crate::geometry::{Rect, WorldRegion};

/// Folds an arbitrary world window into its canonical [0, 360) representation
///
/// - A window at least one full copy wide becomes the whole strip `[0, 360)`.
/// - A window that fits in one copy after shifting is returned shifted.
/// - A window that straddles the seam splits into `[x, 360)` and the wrapped
///   remainder `[0, x + width - 360)`.
///
/// For any world x, `region.contains_x(x.rem_euclid(360))` holds exactly when
/// some copy `x + 360k` lies inside the unwrapped window.
pub fn world_window_mod(window: &Rect) -> WorldRegion {
    if window.width >= WORLD_WRAP {
        return WorldRegion::Single(Rect::new(0.0, window.y, WORLD_WRAP, window.height));
    }

    let x = window.x.rem_euclid(WORLD_WRAP);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    let x = if x >= WORLD_WRAP { 0.0 } else { x };
    let shifted = Rect::new(x, window.y, window.width, window.height);

    if shifted.max_x() <= WORLD_WRAP {
        return WorldRegion::Single(shifted);
    }

    let east = Rect::new(x, window.y, WORLD_WRAP - x, window.height);
    let wrapped = Rect::new(0.0, window.y, shifted.max_x() - WORLD_WRAP, window.height);
    WorldRegion::Split(east, wrapped)
}
