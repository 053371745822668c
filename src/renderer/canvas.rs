//! Drawing surfaces and the flip from math to canvas coordinates

use tracing::debug;

use crate::geometry::flip;
use crate::layout::DrawCommand;

/// A surface that can draw straight lines.
///
/// Coordinates are in canvas convention: origin at the top-left, y growing
/// downward. [`paint`] converts layout output before it reaches a canvas.
pub trait Canvas {
    /// Height used to flip y-coordinates
    fn height(&self) -> f64;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64);
}

/// Feed layout commands to a canvas, flipping every y exactly once
pub fn paint<C: Canvas + ?Sized>(commands: &[DrawCommand], canvas: &mut C) {
    let height = canvas.height();
    debug!(strokes = commands.len(), height, "painting");
    for cmd in commands {
        canvas.draw_line(
            cmd.from.x,
            flip(cmd.from.y, height),
            cmd.to.x,
            flip(cmd.to.y, height),
            cmd.stroke_width,
        );
    }
}

/// A line as it reached a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
}

/// Canvas that records every call, for inspection and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    height: f64,
    pub lines: Vec<CanvasLine>,
}

impl RecordingCanvas {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            lines: vec![],
        }
    }
}

impl Canvas for RecordingCanvas {
    fn height(&self) -> f64 {
        self.height
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64) {
        self.lines.push(CanvasLine {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
        });
    }
}
