//! Drawing recipes for leaf components
//!
//! Each recipe turns a leaf placed on `[x1, x2]` at centerline `y` into a fixed
//! sequence of strokes. Symbol bodies have a fixed pixel size centred in the
//! span; leads stretch from the span ends to the body. A span narrower than
//! [`required_span`] gives negative leads, which are drawn as computed.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::circuit::LeafKind;
use crate::geometry::{degrees, endpoint, Point};

use super::types::DrawCommand;

/// Half the horizontal room reserved for the resistor zigzag
pub const RESISTOR_BODY_HALF: f64 = 30.0;

/// Zigzag segments as (angle in degrees, length in px), drawn left to right
pub const RESISTOR_ZIGZAG: [(f64, f64); 5] = [
    (45.0, 11.0),
    (-45.0, 22.0),
    (45.0, 22.0),
    (-45.0, 22.0),
    (45.0, 11.0),
];

/// Half the gap between capacitor or battery plates
pub const PLATE_GAP_HALF: f64 = 10.0;

/// Stroke length of a full plate, drawn both up and down from the terminal
pub const LONG_PLATE: f64 = 20.0;

/// Stroke length of a battery's negative plate
pub const SHORT_PLATE: f64 = 10.0;

/// Emit the strokes for one leaf component
pub fn draw_leaf(
    kind: LeafKind,
    x1: f64,
    x2: f64,
    y: f64,
    stroke_width: f64,
    out: &mut Vec<DrawCommand>,
) {
    let mut pen = Pen { stroke_width, out };
    let start = Point::new(x1, y);
    let end = Point::new(x2, y);

    match kind {
        LeafKind::Wire => {
            pen.line(start, endpoint(start, 0.0, x2 - x1));
        }
        LeafKind::Resistor => {
            let lead = lead_length(x1, x2, RESISTOR_BODY_HALF);
            let mut cursor = endpoint(start, 0.0, lead);
            pen.line(start, cursor);
            for (angle, length) in RESISTOR_ZIGZAG {
                let next = endpoint(cursor, degrees(angle), length);
                pen.line(cursor, next);
                cursor = next;
            }
            pen.line(end, endpoint(end, PI, lead));
        }
        LeafKind::Capacitor => {
            pen.plates(start, end, LONG_PLATE, LONG_PLATE);
        }
        LeafKind::Battery => {
            // Long plate marks the positive terminal
            pen.plates(start, end, LONG_PLATE, SHORT_PLATE);
        }
    }
}

/// Minimum span a leaf needs so its leads are not negative
pub fn required_span(kind: LeafKind) -> f64 {
    match kind {
        LeafKind::Wire => 0.0,
        LeafKind::Resistor => 2.0 * RESISTOR_BODY_HALF,
        LeafKind::Capacitor | LeafKind::Battery => 2.0 * PLATE_GAP_HALF,
    }
}

fn lead_length(x1: f64, x2: f64, body_half: f64) -> f64 {
    (x2 - x1) / 2.0 - body_half
}

struct Pen<'a> {
    stroke_width: f64,
    out: &'a mut Vec<DrawCommand>,
}

impl Pen<'_> {
    fn line(&mut self, from: Point, to: Point) {
        self.out.push(DrawCommand::line(from, to, self.stroke_width));
    }

    /// Leads from both ends, then a plate pair at each inner terminal
    fn plates(&mut self, start: Point, end: Point, left_plate: f64, right_plate: f64) {
        let lead = lead_length(start.x, end.x, PLATE_GAP_HALF);
        let left = endpoint(start, 0.0, lead);
        let right = endpoint(end, PI, lead);
        self.line(start, left);
        self.line(end, right);
        for (terminal, plate) in [(left, left_plate), (right, right_plate)] {
            self.line(terminal, endpoint(terminal, FRAC_PI_2, plate));
            self.line(terminal, endpoint(terminal, -FRAC_PI_2, plate));
        }
    }
}
