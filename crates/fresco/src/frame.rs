//! Frames, segments, and the coordinate map.
//!
//! A `Frame` is an affine coordinate system: the unit square [0,1]² maps to
//! the parallelogram spanned by `origin`, `origin + x_axis`, `origin + y_axis`.
//! `coord_map` is the single affine primitive the whole crate is built on;
//! every flip, rotation and subdivision reduces to choosing unit-square
//! points and mapping them through the caller's frame.

/// 2D point or direction. Component arithmetic (`+`, `-`, scalar `*`)
/// comes from nalgebra; NaN and infinities propagate untouched.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Affine coordinate system: an origin and two basis vectors.
///
/// Degenerate axes (zero length, or parallel) are not an error; they
/// collapse the drawing region instead of failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Vec2,
    pub x_axis: Vec2,
    pub y_axis: Vec2,
}

impl Frame {
    #[inline]
    pub fn new(origin: Vec2, x_axis: Vec2, y_axis: Vec2) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
        }
    }

    /// The identity frame: origin (0,0), axes (1,0) and (0,1).
    /// `coord_map` on this frame is the identity.
    #[inline]
    pub fn unit() -> Self {
        Self::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        )
    }

    /// Map a unit-square coordinate into this frame:
    /// `origin + x_axis * v.x + y_axis * v.y`.
    #[inline]
    pub fn coord_map(&self, v: Vec2) -> Vec2 {
        self.origin + self.x_axis * v.x + self.y_axis * v.y
    }
}

/// Line segment. Endpoints are in unit-square coordinates until mapped
/// through a frame with [`Segment::map_through`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Both endpoints mapped through `frame`.
    #[inline]
    pub fn map_through(&self, frame: &Frame) -> Segment {
        Segment::new(frame.coord_map(self.start), frame.coord_map(self.end))
    }
}
