//! Stock segment figures in unit-square coordinates.
//!
//! Backend-free: each function returns the raw segment list; feed it to
//! [`segment_painter`](crate::painter::segment_painter) together with a
//! draw callback to get a painter.

use crate::frame::{Segment, Vec2};

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
}

/// The two diagonals ("X").
pub fn cross() -> Vec<Segment> {
    vec![seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 1.0, 0.0)]
}

/// Full diagonal plus a half diagonal meeting at the center ("Y").
pub fn vee() -> Vec<Segment> {
    vec![seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 0.5, 0.5)]
}

/// Unit-square border; handy for visualizing frame subdivision.
pub fn frame_outline() -> Vec<Segment> {
    vec![
        seg(0.0, 0.0, 1.0, 0.0),
        seg(1.0, 0.0, 1.0, 1.0),
        seg(1.0, 1.0, 0.0, 1.0),
        seg(0.0, 1.0, 0.0, 0.0),
    ]
}

/// The waving figure, 17 segments. The classic square-limit subject.
pub fn wave() -> Vec<Segment> {
    vec![
        seg(0.25, 0.00, 0.37, 0.37),
        seg(0.40, 0.00, 0.50, 0.25),
        seg(0.50, 0.25, 0.62, 0.00),
        seg(0.75, 0.00, 0.70, 0.50),
        seg(0.70, 0.50, 1.00, 0.30),
        seg(1.00, 0.50, 0.75, 0.62),
        seg(0.75, 0.62, 0.62, 0.62),
        seg(0.62, 0.62, 0.75, 0.75),
        seg(0.75, 0.75, 0.62, 1.00),
        seg(0.40, 1.00, 0.30, 0.75),
        seg(0.30, 0.75, 0.40, 0.62),
        seg(0.40, 0.62, 0.25, 0.62),
        seg(0.25, 0.62, 0.20, 0.50),
        seg(0.20, 0.50, 0.00, 0.70),
        seg(0.37, 0.37, 0.30, 0.50),
        seg(0.30, 0.50, 0.12, 0.37),
        seg(0.12, 0.37, 0.00, 0.50),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_stay_inside_the_unit_square() {
        for figure in [cross(), vee(), frame_outline(), wave()] {
            for s in figure {
                for v in [s.start, s.end] {
                    assert!((0.0..=1.0).contains(&v.x) && (0.0..=1.0).contains(&v.y));
                }
            }
        }
    }

    #[test]
    fn wave_has_seventeen_segments() {
        assert_eq!(wave().len(), 17);
    }
}
