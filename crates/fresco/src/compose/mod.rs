//! Combinators: subdivide a frame and delegate to sub-painters.
//!
//! Purpose
//! - `beside` and `below` split the caller's frame in half and remap one
//!   painter into each half via `transform_painter`; `square_of_four`
//!   arranges four transformed copies of one painter in a 2×2 grid.
//! - The recursive generators in [`splits`] are built from nothing but
//!   these two splits.
//!
//! Draw order is fixed per combinator and documented on each function.
//! It is only observable when the backend blends overlapping marks; the
//! halves themselves are disjoint.

mod splits;

pub use splits::{corner_split, right_split, square_limit, up_split};

use crate::frame::{Frame, Vec2};
use crate::painter::{transform_painter, PainterRef};
use std::rc::Rc;

/// `left` in the left half (x ∈ [0, 0.5]), `right` in the right half.
/// Left draws first.
pub fn beside(left: PainterRef, right: PainterRef) -> PainterRef {
    let left = transform_painter(
        left,
        Vec2::new(0.0, 0.0),
        Vec2::new(0.5, 0.0),
        Vec2::new(0.0, 1.0),
    );
    let right = transform_painter(
        right,
        Vec2::new(0.5, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.5, 1.0),
    );
    Rc::new(move |frame: &Frame| {
        left.paint(frame);
        right.paint(frame);
    })
}

/// `bottom` in the lower half (y ∈ [0, 0.5]), `top` in the upper half.
/// Top draws first, preserving the order of the reference composition.
pub fn below(bottom: PainterRef, top: PainterRef) -> PainterRef {
    let bottom = transform_painter(
        bottom,
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 0.5),
    );
    let top = transform_painter(
        top,
        Vec2::new(0.0, 0.5),
        Vec2::new(1.0, 0.5),
        Vec2::new(0.0, 1.0),
    );
    Rc::new(move |frame: &Frame| {
        top.paint(frame);
        bottom.paint(frame);
    })
}

/// Arrange four transformed copies of one painter in a 2×2 grid.
///
/// Higher-order: the arguments are painter *transforms* (top-left,
/// top-right, bottom-left, bottom-right), and the result is an arranger
/// that can be applied to any base painter. Columns are stacked with
/// [`below`], then joined with [`beside`].
pub fn square_of_four(
    tl: impl Fn(PainterRef) -> PainterRef,
    tr: impl Fn(PainterRef) -> PainterRef,
    bl: impl Fn(PainterRef) -> PainterRef,
    br: impl Fn(PainterRef) -> PainterRef,
) -> impl Fn(PainterRef) -> PainterRef {
    move |painter: PainterRef| {
        let left = below(bl(painter.clone()), tl(painter.clone()));
        let right = below(br(painter.clone()), tr(painter));
        beside(left, right)
    }
}
