//! Leaf-count and timing probe for the recursive generators.
//!
//! Purpose
//! - Print, per depth, how many leaf draws each generator triggers and
//!   how long one paint pass over the unit frame takes, giving a concrete
//!   feel for the exponential growth before committing to a depth in a
//!   driver.
//!
//! Run with: cargo run -p fresco --example leaf_counts

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use fresco::prelude::*;

fn counting_leaf() -> (PainterRef, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let tally = Rc::clone(&count);
    let p = segment_painter(fresco::shapes::cross(), move |_: &Segment| {
        tally.set(tally.get() + 1);
    });
    (p, count)
}

fn probe(name: &str, build: impl Fn(PainterRef, u32) -> PainterRef, n: u32) {
    let (leaf, count) = counting_leaf();
    let painter = build(leaf, n);
    let start = Instant::now();
    painter.paint(&Frame::unit());
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
    // Two segments per leaf (the cross figure).
    println!(
        "generator={name} depth={n} leaves={} segments={} paint_time_us={elapsed_us:.1}",
        count.get() / 2,
        count.get()
    );
}

fn main() {
    for n in 0..=5u32 {
        probe("right_split", right_split, n);
        probe("corner_split", corner_split, n);
        probe("square_limit", square_limit, n);
    }
}
