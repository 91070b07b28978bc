//! The frame-remapping primitive and its named specializations.

use super::PainterRef;
use crate::frame::{Frame, Vec2};
use std::rc::Rc;

/// Remap `painter` into a derived sub-frame.
///
/// `origin`, `corner_x` and `corner_y` are unit-square points naming where
/// the sub-frame's origin, x-corner and y-corner should land. On each
/// `paint`, all three are mapped through the caller's frame and the inner
/// painter is invoked with the frame they span:
///
/// ```text
/// new_origin = F(origin)
/// new_x_axis = F(corner_x) - new_origin
/// new_y_axis = F(corner_y) - new_origin
/// ```
///
/// Total over all real control points; degenerate choices collapse the
/// sub-frame rather than fail.
pub fn transform_painter(
    painter: PainterRef,
    origin: Vec2,
    corner_x: Vec2,
    corner_y: Vec2,
) -> PainterRef {
    Rc::new(move |frame: &Frame| {
        let new_origin = frame.coord_map(origin);
        let sub = Frame::new(
            new_origin,
            frame.coord_map(corner_x) - new_origin,
            frame.coord_map(corner_y) - new_origin,
        );
        painter.paint(&sub);
    })
}

/// Mirror over the horizontal midline (self-inverse).
pub fn flip_vertical(painter: PainterRef) -> PainterRef {
    transform_painter(
        painter,
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 0.0),
    )
}

/// Mirror over the vertical midline (self-inverse).
pub fn flip_horizontal(painter: PainterRef) -> PainterRef {
    transform_painter(
        painter,
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
    )
}

/// Half turn about the frame center.
pub fn rotate180(painter: PainterRef) -> PainterRef {
    transform_painter(
        painter,
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
    )
}

/// Quarter turn counterclockwise.
pub fn rotate90(painter: PainterRef) -> PainterRef {
    transform_painter(
        painter,
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 0.0),
    )
}

/// Shrink towards the origin corner along skewed axes. The classic
/// corner-recursion squash.
pub fn squash_inwards(painter: PainterRef) -> PainterRef {
    transform_painter(
        painter,
        Vec2::new(0.0, 0.0),
        Vec2::new(0.65, 0.35),
        Vec2::new(0.35, 0.65),
    )
}

/// The painter unchanged. Useful as a slot filler in
/// [`square_of_four`](crate::compose::square_of_four).
pub fn identity(painter: PainterRef) -> PainterRef {
    painter
}
