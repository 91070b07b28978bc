use super::*;
use crate::frame::{Frame, Segment, Vec2};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Segment painter whose draws are appended to a shared log.
fn recording_painter(segments: Vec<Segment>) -> (PainterRef, Rc<RefCell<Vec<Segment>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let p = segment_painter(segments, move |seg: &Segment| sink.borrow_mut().push(*seg));
    (p, log)
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
}

fn segments_close(a: &Segment, b: &Segment, eps: f64) -> bool {
    (a.start - b.start).norm() < eps && (a.end - b.end).norm() < eps
}

#[test]
fn x_painter_on_identity_frame_records_unmapped_diagonals() {
    let (p, log) = recording_painter(vec![seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 1.0, 0.0)]);
    p.paint(&Frame::unit());
    let drawn = log.borrow();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0], seg(0.0, 0.0, 1.0, 1.0));
    assert_eq!(drawn[1], seg(0.0, 1.0, 1.0, 0.0));
}

#[test]
fn transform_painter_derives_sub_frame_through_callers_frame() {
    // Remap into the right half of the caller's frame; the caller's frame
    // is itself offset, so both mappings must compose.
    let (p, log) = recording_painter(vec![seg(0.0, 0.0, 1.0, 1.0)]);
    let right = transform_painter(
        p,
        Vec2::new(0.5, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.5, 1.0),
    );
    let outer = Frame::new(
        Vec2::new(10.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(0.0, 2.0),
    );
    right.paint(&outer);
    let drawn = log.borrow();
    assert_eq!(drawn.len(), 1);
    // (0,0) -> frame origin at x=0.5 of outer -> (11, 0); (1,1) -> (12, 2)
    assert!(segments_close(&drawn[0], &seg(11.0, 0.0, 12.0, 2.0), 1e-12));
}

#[test]
fn squash_inwards_uses_skewed_axes() {
    let (p, log) = recording_painter(vec![seg(0.0, 0.0, 1.0, 0.0)]);
    squash_inwards(p).paint(&Frame::unit());
    let drawn = log.borrow();
    assert!(segments_close(&drawn[0], &seg(0.0, 0.0, 0.65, 0.35), 1e-12));
}

#[test]
fn flip_vertical_is_an_involution() {
    let segs = vec![seg(0.1, 0.2, 0.9, 0.7)];
    let frame = Frame::new(
        Vec2::new(1.0, -2.0),
        Vec2::new(3.0, 0.5),
        Vec2::new(-0.5, 2.0),
    );

    let (direct, direct_log) = recording_painter(segs.clone());
    direct.paint(&frame);

    let (p, log) = recording_painter(segs);
    flip_vertical(flip_vertical(p)).paint(&frame);

    let a = direct_log.borrow();
    let b = log.borrow();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!(segments_close(x, y, 1e-9));
    }
}

#[test]
fn rotate90_four_times_is_identity() {
    let segs = vec![seg(0.0, 0.0, 0.3, 0.8)];
    let frame = Frame::new(
        Vec2::new(0.5, 0.5),
        Vec2::new(2.0, 1.0),
        Vec2::new(0.0, 1.5),
    );

    let (direct, direct_log) = recording_painter(segs.clone());
    direct.paint(&frame);

    let (p, log) = recording_painter(segs);
    rotate90(rotate90(rotate90(rotate90(p)))).paint(&frame);

    assert!(segments_close(
        &direct_log.borrow()[0],
        &log.borrow()[0],
        1e-9
    ));
}

#[test]
fn identity_returns_the_same_handle() {
    let (p, _) = recording_painter(vec![seg(0.0, 0.0, 1.0, 1.0)]);
    let q = identity(p.clone());
    assert!(Rc::ptr_eq(&p, &q));
}

struct TinyGrid;

impl PixelGrid for TinyGrid {
    fn width(&self) -> u32 {
        2
    }
    fn height(&self) -> u32 {
        2
    }
    fn pixel(&self, row: u32, col: u32) -> Rgba {
        Rgba::new(row as u8, col as u8, 0, 255)
    }
}

#[test]
fn image_painter_samples_all_pixels_top_row_up() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let p = image_painter(TinyGrid, move |pos, color| sink.borrow_mut().push((pos, color)));
    p.paint(&Frame::unit());

    let drawn = log.borrow();
    assert_eq!(drawn.len(), 4);
    // Row 0 (top of the image) maps to the upper half of the unit square.
    assert_eq!(drawn[0], (Vec2::new(0.0, 0.5), Rgba::new(0, 0, 0, 255)));
    assert_eq!(drawn[1], (Vec2::new(0.5, 0.5), Rgba::new(0, 1, 0, 255)));
    assert_eq!(drawn[2], (Vec2::new(0.0, 0.0), Rgba::new(1, 0, 0, 255)));
    assert_eq!(drawn[3], (Vec2::new(0.5, 0.0), Rgba::new(1, 1, 0, 255)));
}

struct EmptyGrid;

impl PixelGrid for EmptyGrid {
    fn width(&self) -> u32 {
        0
    }
    fn height(&self) -> u32 {
        0
    }
    fn pixel(&self, _row: u32, _col: u32) -> Rgba {
        unreachable!("empty grid is never sampled")
    }
}

#[test]
fn image_painter_empty_source_draws_nothing() {
    let count = Rc::new(RefCell::new(0usize));
    let tally = Rc::clone(&count);
    let p = image_painter(EmptyGrid, move |_, _| *tally.borrow_mut() += 1);
    p.paint(&Frame::unit());
    assert_eq!(*count.borrow(), 0);
}

proptest! {
    #[test]
    fn flips_are_involutions_on_arbitrary_frames(
        ox in -5.0f64..5.0, oy in -5.0f64..5.0,
        ax in -5.0f64..5.0, ay in -5.0f64..5.0,
        bx in -5.0f64..5.0, by in -5.0f64..5.0,
    ) {
        let frame = Frame::new(Vec2::new(ox, oy), Vec2::new(ax, ay), Vec2::new(bx, by));
        let segs = vec![seg(0.2, 0.1, 0.8, 0.9)];

        let (direct, direct_log) = recording_painter(segs.clone());
        direct.paint(&frame);
        let reference = direct_log.borrow()[0];

        for flip in [flip_vertical as fn(PainterRef) -> PainterRef, flip_horizontal, rotate180] {
            let (p, log) = recording_painter(segs.clone());
            flip(flip(p)).paint(&frame);
            prop_assert!(segments_close(&log.borrow()[0], &reference, 1e-9));
        }
    }
}
