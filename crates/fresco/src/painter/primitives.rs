//! Leaf painters: the two contracts a rendering backend plugs into.
//!
//! The core computes *where* geometry lands; the supplied callbacks do the
//! mark-making (rasterizing a line, writing a pixel). Backends that need
//! mutable targets wrap them in `Rc<RefCell<..>>` and capture a clone.

use super::PainterRef;
use crate::frame::{Frame, Segment, Vec2};
use std::rc::Rc;

/// Color sample, straight (non-premultiplied) u8 RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Read access to source pixels for [`image_painter`].
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Color at (row, col); row 0 is the top of the image.
    fn pixel(&self, row: u32, col: u32) -> Rgba;
}

/// Painter that maps every segment through the frame and hands each
/// mapped segment to `draw`, in list order, once per `paint`.
pub fn segment_painter(segments: Vec<Segment>, draw: impl Fn(&Segment) + 'static) -> PainterRef {
    Rc::new(move |frame: &Frame| {
        for seg in &segments {
            draw(&seg.map_through(frame));
        }
    })
}

/// Painter that samples every pixel of `source`, maps its unit-square
/// position through the frame, and hands position + color to `draw`.
///
/// Pixel (row, col) sits at `(col / w, (h - row - 1) / h)`, so image rows
/// run top-down while unit-square y grows upward. An empty source paints
/// nothing.
pub fn image_painter(
    source: impl PixelGrid + 'static,
    draw: impl Fn(Vec2, Rgba) + 'static,
) -> PainterRef {
    Rc::new(move |frame: &Frame| {
        let (w, h) = (source.width(), source.height());
        for row in 0..h {
            for col in 0..w {
                let pos = Vec2::new(
                    f64::from(col) / f64::from(w),
                    f64::from(h - row - 1) / f64::from(h),
                );
                draw(frame.coord_map(pos), source.pixel(row, col));
            }
        }
    })
}
