//! Layout engine for turning a circuit tree into strokes
//!
//! This module computes the extent of every subtree, partitions the available
//! span among series children, offsets parallel branches vertically, and asks
//! the symbol recipes to draw each leaf. The result is a plain list of
//! [`DrawCommand`]s in math coordinates; nothing here touches a canvas.

pub mod config;
pub mod engine;
pub mod error;
pub mod extent;
pub mod symbols;
pub mod types;

pub use config::{LayoutConfig, SplitMode};
pub use engine::{compute, compute_report, draw_circuit, series_split};
pub use error::LayoutError;
pub use extent::{circuit_length, circuit_width, extent};
pub use types::*;

use crate::geometry::BoundingBox;

/// Strokes that fall outside the `width` x `height` canvas, if any.
///
/// Deep parallel stacks can push branches past the canvas edge; the
/// layout itself stays valid, so callers decide whether to warn.
pub fn overflow(commands: &[DrawCommand], width: f64, height: f64) -> Option<BoundingBox> {
    let canvas = BoundingBox::new(0.0, 0.0, width, height);
    bounds_of(commands).filter(|b| !canvas.encloses(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::*;

    #[test]
    fn test_demo_fits_default_canvas() {
        let commands = compute(&demo(), &LayoutConfig::default()).unwrap();
        assert_eq!(overflow(&commands, 1000.0, 800.0), None);
    }

    #[test]
    fn test_tall_stack_overflows() {
        let c = Circuit::parallel_of((0..8).map(|_| wire())).unwrap();
        let commands = compute(&c, &LayoutConfig::default()).unwrap();
        assert!(overflow(&commands, 1000.0, 800.0).is_some());
    }
}
