//! Recursive picture composition (the picture language of SICP §2.2.4).
//!
//! Purpose
//! - A painter draws some figure into an arbitrary parallelogram frame.
//!   Everything else is algebra over painters: one transform primitive
//!   remaps a painter into a derived sub-frame, and combinators stack such
//!   remapped painters side by side or on top of each other.
//! - Recursive generators (`right_split`, `corner_split`, `square_limit`)
//!   apply the combinators to themselves, producing self-similar layouts
//!   whose leaf count grows exponentially in the recursion depth.
//!
//! The crate performs no I/O and owns no pixels. Leaf painters close over
//! a draw callback supplied by the rendering backend; see
//! [`painter::segment_painter`] and [`painter::image_painter`] for the two
//! backend contracts.

pub mod compose;
pub mod frame;
pub mod painter;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use frame::{Frame, Segment, Vec2};
pub use painter::{Painter, PainterRef};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compose::{
        beside, below, corner_split, right_split, square_limit, square_of_four, up_split,
    };
    pub use crate::frame::{Frame, Segment, Vec2};
    pub use crate::painter::{
        flip_horizontal, flip_vertical, identity, image_painter, rotate180, rotate90,
        segment_painter, squash_inwards, transform_painter, Painter, PainterRef, PixelGrid, Rgba,
    };
}
