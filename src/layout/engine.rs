//! Layout computation engine
//!
//! Walks a circuit tree and turns it into an ordered list of strokes. A series
//! node splits its horizontal span between its children in proportion to their
//! unit lengths. A parallel node draws both children across the full span,
//! shifts the top child up and the bottom child down by their widths, and joins
//! them with a bus bar at each end.
//!
//! ## Stroke order
//!
//! - Series: left subtree, then right subtree
//! - Parallel: top subtree, bottom subtree, bus bar at `x1`, bus bar at `x2`
//!
//! The output depends only on the tree and its placement, so laying out the
//! same circuit twice yields identical command lists. Leaves squeezed below
//! their symbol width are still drawn and reported in [`LayoutReport::crowded`].

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::circuit::{Circuit, LeafKind};
use crate::geometry::{endpoint, Point};

use super::config::{LayoutConfig, SplitMode};
use super::error::LayoutError;
use super::extent::{circuit_length, circuit_width};
use super::symbols::{draw_leaf, required_span};
use super::types::{Crowding, DrawCommand, LayoutReport};

/// Lay out a circuit using the span and centerline from `config`
pub fn compute(circuit: &Circuit, config: &LayoutConfig) -> Result<Vec<DrawCommand>, LayoutError> {
    compute_report(circuit, config).map(|report| report.commands)
}

/// Like [`compute`], also listing leaves drawn in less than their symbol width
pub fn compute_report(circuit: &Circuit, config: &LayoutConfig) -> Result<LayoutReport, LayoutError> {
    layout_report(
        circuit,
        config.span_start,
        config.span_end,
        config.centerline,
        config,
    )
}

/// Lay out `circuit` across `[x1, x2]` about centerline `y` (math convention).
pub fn draw_circuit(
    circuit: &Circuit,
    x1: f64,
    x2: f64,
    y: f64,
    config: &LayoutConfig,
) -> Result<Vec<DrawCommand>, LayoutError> {
    layout_report(circuit, x1, x2, y, config).map(|report| report.commands)
}

fn layout_report(
    circuit: &Circuit,
    x1: f64,
    x2: f64,
    y: f64,
    config: &LayoutConfig,
) -> Result<LayoutReport, LayoutError> {
    validate_config(config)?;

    let mut report = LayoutReport::default();
    place(circuit, x1, x2, y, config, &mut report)?;

    debug!(
        leaves = circuit.leaf_count(),
        commands = report.commands.len(),
        crowded = report.crowded.len(),
        x1,
        x2,
        y,
        "laid out circuit"
    );
    Ok(report)
}

/// Dividing x-coordinate for a series node
pub fn series_split(len_left: usize, len_right: usize, x1: f64, x2: f64, mode: SplitMode) -> f64 {
    let fraction = len_left as f64 / (len_left + len_right) as f64;
    match mode {
        SplitMode::Interpolated => x1 + fraction * (x2 - x1),
        SplitMode::Scaled => fraction * (x1 + x2),
    }
}

fn validate_config(config: &LayoutConfig) -> Result<(), LayoutError> {
    if !(config.unit_pixels.is_finite() && config.unit_pixels > 0.0) {
        return Err(LayoutError::invalid_layout(format!(
            "unit_pixels must be positive, got {}",
            config.unit_pixels
        )));
    }
    for (name, width) in [
        ("stroke_width", config.stroke_width),
        ("bus_stroke_width", config.bus_stroke_width),
    ] {
        if !(width.is_finite() && width > 0.0) {
            return Err(LayoutError::invalid_layout(format!(
                "{name} must be positive, got {width}"
            )));
        }
    }
    Ok(())
}

fn place(
    circuit: &Circuit,
    x1: f64,
    x2: f64,
    y: f64,
    config: &LayoutConfig,
    out: &mut LayoutReport,
) -> Result<(), LayoutError> {
    if !(x1.is_finite() && x2.is_finite() && x1 < x2) {
        return Err(LayoutError::invalid_span(x1, x2));
    }
    if !y.is_finite() {
        return Err(LayoutError::InvalidCenterline { y });
    }

    match circuit {
        Circuit::Wire => place_leaf(LeafKind::Wire, x1, x2, y, config, out),
        Circuit::Battery(_) => place_leaf(LeafKind::Battery, x1, x2, y, config, out),
        Circuit::Resistor(_) => place_leaf(LeafKind::Resistor, x1, x2, y, config, out),
        Circuit::Capacitor(_) => place_leaf(LeafKind::Capacitor, x1, x2, y, config, out),
        Circuit::Series(left, right) => {
            let split = series_split(
                circuit_length(left),
                circuit_length(right),
                x1,
                x2,
                config.split_mode,
            );
            if !(split > x1 && split < x2) {
                return Err(LayoutError::split_outside(split, x1, x2));
            }
            place(left, x1, split, y, config, out)?;
            place(right, split, x2, y, config, out)
        }
        Circuit::Parallel(top, bottom) => {
            let width_top = config.unit_pixels * circuit_width(top) as f64;
            let width_bottom = config.unit_pixels * circuit_width(bottom) as f64;

            place(top, x1, x2, y + width_top, config, out)?;
            place(bottom, x1, x2, y - width_bottom, config, out)?;

            let span = width_top + width_bottom;
            for x in [x1, x2] {
                let base = Point::new(x, y - width_bottom);
                out.commands.push(DrawCommand::line(
                    base,
                    endpoint(base, FRAC_PI_2, span),
                    config.bus_stroke_width,
                ));
            }
            Ok(())
        }
    }
}

fn place_leaf(
    kind: LeafKind,
    x1: f64,
    x2: f64,
    y: f64,
    config: &LayoutConfig,
    out: &mut LayoutReport,
) -> Result<(), LayoutError> {
    let required = required_span(kind);
    if x2 - x1 < required {
        out.crowded.push(Crowding {
            element: kind,
            available: x2 - x1,
            required,
        });
    }
    draw_leaf(kind, x1, x2, y, config.stroke_width, &mut out.commands);
    Ok(())
}
