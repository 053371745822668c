//! Core types for the layout engine

use crate::circuit::LeafKind;
use crate::geometry::{BoundingBox, Point};

/// One straight stroke of the schematic, in math coordinates (y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub from: Point,
    pub to: Point,
    pub stroke_width: f64,
}

impl DrawCommand {
    pub fn line(from: Point, to: Point, stroke_width: f64) -> Self {
        Self {
            from,
            to,
            stroke_width,
        }
    }

    /// Euclidean length of the stroke
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Layout extent of a subtree in abstract units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Horizontal units; leaves count one each along a series chain
    pub length: usize,
    /// Vertical branch units; leaves count one each across parallel branches
    pub width: usize,
}

impl Extent {
    pub const LEAF: Extent = Extent {
        length: 1,
        width: 1,
    };
}

/// A leaf whose span is narrower than its symbol body; its leads are negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crowding {
    pub element: LeafKind,
    /// Horizontal span the leaf was given
    pub available: f64,
    /// Span at which its leads reach zero length
    pub required: f64,
}

/// Strokes plus the leaves that were drawn crowded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutReport {
    pub commands: Vec<DrawCommand>,
    pub crowded: Vec<Crowding>,
}

/// Smallest box containing every stroke endpoint, or `None` for no strokes
pub fn bounds_of(commands: &[DrawCommand]) -> Option<BoundingBox> {
    commands
        .iter()
        .flat_map(|c| [c.from, c.to])
        .fold(None, |acc: Option<BoundingBox>, p| match acc {
            Some(b) => Some(b.expand_to_include(p)),
            None => Some(BoundingBox::at(p)),
        })
}
