//! Recursive generators.
//!
//! Depth 0 returns the input handle unchanged (shared, not wrapped), so
//! the leaf-count laws below are exact. Each generator shares its
//! `smaller` sub-painter by handle; painting re-walks every reference,
//! so the shared handle draws once per reference and the counts grow
//! exponentially with depth.

use super::{below, beside, square_of_four};
use crate::painter::{flip_horizontal, flip_vertical, identity, rotate180, PainterRef};

/// `painter` on the left, two half-size copies stacked on the right.
/// Paints `2^(n+1) - 1` leaves (the stacked pair doubles per level).
pub fn right_split(painter: PainterRef, n: u32) -> PainterRef {
    if n == 0 {
        return painter;
    }
    let smaller = right_split(painter.clone(), n - 1);
    beside(painter, below(smaller.clone(), smaller))
}

/// `painter` at the bottom, two half-size copies side by side on top.
/// Paints `2^(n+1) - 1` leaves (the stacked pair doubles per level).
pub fn up_split(painter: PainterRef, n: u32) -> PainterRef {
    if n == 0 {
        return painter;
    }
    let smaller = up_split(painter.clone(), n - 1);
    below(painter, beside(smaller.clone(), smaller))
}

/// Self-similar corner recursion: the painter in one corner, split
/// towers along two edges, and a smaller corner split in the opposite
/// corner. Paints `2^(n+3) - 3n - 7` leaves.
pub fn corner_split(painter: PainterRef, n: u32) -> PainterRef {
    if n == 0 {
        return painter;
    }
    let smaller = corner_split(painter.clone(), n - 1);
    let up = up_split(painter.clone(), n - 1);
    let right = right_split(painter.clone(), n - 1);
    beside(
        below(painter, beside(up.clone(), up)),
        below(below(right.clone(), right), smaller),
    )
}

/// Four flipped/rotated corner splits joined into the square-limit
/// pattern. Paints `4 · (2^(n+3) - 3n - 7)` leaves, and the result is
/// symmetric under a half turn about the frame center by construction.
pub fn square_limit(painter: PainterRef, n: u32) -> PainterRef {
    let combine = square_of_four(flip_horizontal, identity, rotate180, flip_vertical);
    combine(corner_split(painter, n))
}
