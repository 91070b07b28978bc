//! Painter capability and the frame-remapping transform engine.
//!
//! Purpose
//! - A painter is a behavior, not data: hand it a `Frame` and it draws
//!   itself into that frame's parallelogram. It holds no mutable state;
//!   invocations are independent and re-entrant.
//! - `transform_painter` is the one generative primitive. Every flip,
//!   rotation and squash in [`transform`] is just a different choice of
//!   three unit-square control points for it.
//!
//! Painters form an immutable expression DAG: each combinator returns a
//! fresh painter that owns shared handles to its inputs. Sharing a handle
//! shares structure only; painting re-walks every reference, so a leaf
//! referenced twice draws twice. There is deliberately no memoization;
//! the draw-count laws in the tests depend on that.

mod primitives;
mod transform;

pub use primitives::{image_painter, segment_painter, PixelGrid, Rgba};
pub use transform::{
    flip_horizontal, flip_vertical, identity, rotate180, rotate90, squash_inwards,
    transform_painter,
};

use crate::frame::Frame;
use std::rc::Rc;

/// Something that can draw itself into a frame.
///
/// Drawing happens through whatever callback the leaf painter closed over
/// at construction time; this crate never touches pixels itself. A panic
/// in that callback propagates unchanged to the caller of the outermost
/// `paint`.
pub trait Painter {
    fn paint(&self, frame: &Frame);
}

/// Closures are painters.
impl<F: Fn(&Frame)> Painter for F {
    fn paint(&self, frame: &Frame) {
        self(frame)
    }
}

/// Shared handle to a painter. Cloning shares the painter, it never
/// copies or re-renders it.
pub type PainterRef = Rc<dyn Painter>;

#[cfg(test)]
mod tests;
