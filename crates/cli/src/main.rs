//! Driver binary: renders recursive painter patterns to PNG files.
//!
//! The library computes geometry only; this binary supplies the two
//! backend callbacks (segment rasterizer, pixel writer) over an RGBA
//! canvas, encodes the result with the image crate, and writes a
//! provenance sidecar next to each artifact.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::fmt::SubscriberBuilder;

use fresco::prelude::*;
use fresco::shapes;

mod provenance;
mod raster;

use raster::Canvas;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Square-limit renderer: recursive painter patterns to PNG")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Copy, Clone, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum FigureKind {
    Cross,
    Vee,
    Wave,
    Outline,
}

#[derive(Copy, Clone, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum PatternKind {
    SquareLimit,
    CornerSplit,
    RightSplit,
    UpSplit,
}

#[derive(Subcommand)]
enum Action {
    /// Render a segment figure under a recursive pattern to a PNG
    Render {
        #[arg(long, value_enum, default_value = "wave")]
        figure: FigureKind,
        #[arg(long, value_enum, default_value = "square-limit")]
        pattern: PatternKind,
        /// Recursion depth n
        #[arg(long, default_value_t = 3)]
        depth: u32,
        /// Canvas side length in pixels
        #[arg(long, default_value_t = 400)]
        size: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Sample an input image through the pattern instead of a segment figure
    RenderImage {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "square-limit")]
        pattern: PatternKind,
        #[arg(long, default_value_t = 2)]
        depth: u32,
        #[arg(long, default_value_t = 400)]
        size: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Count leaf draws for a pattern without rasterizing
    Count {
        #[arg(long, value_enum, default_value = "square-limit")]
        pattern: PatternKind,
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render {
            figure,
            pattern,
            depth,
            size,
            out,
        } => render(figure, pattern, depth, size, &out),
        Action::RenderImage {
            input,
            pattern,
            depth,
            size,
            out,
        } => render_image(&input, pattern, depth, size, &out),
        Action::Count { pattern, depth } => count(pattern, depth),
    }
}

fn figure_segments(figure: FigureKind) -> Vec<Segment> {
    match figure {
        FigureKind::Cross => shapes::cross(),
        FigureKind::Vee => shapes::vee(),
        FigureKind::Wave => shapes::wave(),
        FigureKind::Outline => shapes::frame_outline(),
    }
}

fn apply_pattern(pattern: PatternKind, painter: PainterRef, depth: u32) -> PainterRef {
    match pattern {
        PatternKind::SquareLimit => square_limit(painter, depth),
        PatternKind::CornerSplit => corner_split(painter, depth),
        PatternKind::RightSplit => right_split(painter, depth),
        PatternKind::UpSplit => up_split(painter, depth),
    }
}

fn save_canvas(canvas: &Canvas, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    canvas
        .image()
        .save(out)
        .with_context(|| format!("encoding {}", out.display()))
}

fn render(
    figure: FigureKind,
    pattern: PatternKind,
    depth: u32,
    size: u32,
    out: &Path,
) -> Result<()> {
    tracing::info!(?figure, ?pattern, depth, size, out = %out.display(), "render");
    let canvas = Rc::new(RefCell::new(Canvas::new(size, size)));
    let drawn = Rc::new(Cell::new(0usize));

    let sink = Rc::clone(&canvas);
    let tally = Rc::clone(&drawn);
    let leaf = segment_painter(figure_segments(figure), move |seg: &Segment| {
        tally.set(tally.get() + 1);
        sink.borrow_mut().draw_segment(seg);
    });

    apply_pattern(pattern, leaf, depth).paint(&Frame::unit());
    save_canvas(&canvas.borrow(), out)?;
    tracing::info!(segments = drawn.get(), "rendered");

    provenance::write_sidecar(
        out,
        serde_json::json!({
            "figure": figure,
            "pattern": pattern,
            "depth": depth,
            "size": size,
            "segments_drawn": drawn.get(),
        }),
    )?;
    Ok(())
}

/// Adapter exposing a decoded RGBA image as a painter pixel source.
struct SourceImage(image::RgbaImage);

impl PixelGrid for SourceImage {
    fn width(&self) -> u32 {
        self.0.width()
    }
    fn height(&self) -> u32 {
        self.0.height()
    }
    fn pixel(&self, row: u32, col: u32) -> Rgba {
        let p = self.0.get_pixel(col, row);
        Rgba::new(p[0], p[1], p[2], p[3])
    }
}

fn render_image(
    input: &Path,
    pattern: PatternKind,
    depth: u32,
    size: u32,
    out: &Path,
) -> Result<()> {
    tracing::info!(input = %input.display(), ?pattern, depth, size, "render_image");
    let source = image::open(input)
        .with_context(|| format!("opening {}", input.display()))?
        .to_rgba8();

    let canvas = Rc::new(RefCell::new(Canvas::new(size, size)));
    let written = Rc::new(Cell::new(0usize));

    let sink = Rc::clone(&canvas);
    let tally = Rc::clone(&written);
    let leaf = image_painter(SourceImage(source), move |pos, color| {
        tally.set(tally.get() + 1);
        sink.borrow_mut().draw_pixel(pos, color);
    });

    apply_pattern(pattern, leaf, depth).paint(&Frame::unit());
    save_canvas(&canvas.borrow(), out)?;
    tracing::info!(pixels = written.get(), "rendered");

    provenance::write_sidecar(
        out,
        serde_json::json!({
            "input": input.to_string_lossy(),
            "pattern": pattern,
            "depth": depth,
            "size": size,
            "pixels_written": written.get(),
        }),
    )?;
    Ok(())
}

fn count(pattern: PatternKind, depth: u32) -> Result<()> {
    let drawn = Rc::new(Cell::new(0usize));
    let tally = Rc::clone(&drawn);
    let leaf = segment_painter(shapes::cross(), move |_: &Segment| {
        tally.set(tally.get() + 1);
    });
    apply_pattern(pattern, leaf, depth).paint(&Frame::unit());
    // Two segments per leaf for the cross figure.
    println!(
        "pattern={pattern:?} depth={depth} leaves={} segments={}",
        drawn.get() / 2,
        drawn.get()
    );
    Ok(())
}
