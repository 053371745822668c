//! Circuit Schematic - draw series/parallel circuits as line schematics
//!
//! This library provides a circuit model, an equivalent-resistance evaluator,
//! a recursive layout engine and an SVG renderer, plus a small text notation
//! for describing circuits.
//!
//! # Example
//!
//! ```rust
//! use circuit_schematic::render;
//!
//! let svg = render("series(battery(9), resistor(330))").unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod analysis;
pub mod circuit;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod stylesheet;

pub use analysis::{format_resistance, resistance};
pub use circuit::{Circuit, Farads, LeafKind, Ohms, Volts};
pub use error::ParseError;
pub use layout::{DrawCommand, LayoutConfig, LayoutError, SplitMode};
pub use parser::parse;
pub use renderer::{paint, render_svg, Canvas, RecordingCanvas, SvgCanvas, SvgConfig};

use thiserror::Error;
use tracing::{debug, info, warn};

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette for the SVG output
    pub stylesheet: Stylesheet,
    /// Print the equivalent resistance under the schematic
    pub caption: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable the resistance caption
    pub fn with_caption(mut self, caption: bool) -> Self {
        self.caption = caption;
        self
    }
}

/// Render circuit notation to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use circuit_schematic::render;
///
/// let svg = render("parallel(resistor(4), capacitor(1u))").unwrap();
/// assert_eq!(svg.matches("<line ").count(), 7 + 6 + 2);
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render circuit notation to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use circuit_schematic::{render_with_config, LayoutConfig, RenderConfig, SplitMode};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_split_mode(SplitMode::Scaled))
///     .with_caption(true);
///
/// let svg = render_with_config("series(wire, resistor(5))", config).unwrap();
/// assert!(svg.contains("5 Ω"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let circuit = parse(source)?;
    debug!(leaves = circuit.leaf_count(), depth = circuit.depth(), "parsed circuit");
    render_circuit(&circuit, &config)
}

/// Lay out and render an already-built circuit
pub fn render_circuit(circuit: &Circuit, config: &RenderConfig) -> Result<String, RenderError> {
    let layout::LayoutReport { commands, crowded } = layout::compute_report(circuit, &config.layout)?;
    info!(strokes = commands.len(), "layout complete");

    for leaf in &crowded {
        warn!(
            element = %leaf.element,
            available = leaf.available,
            required = leaf.required,
            "component drawn in less than its symbol width"
        );
    }

    if let Some(bounds) = layout::overflow(&commands, config.svg.width, config.svg.height) {
        warn!(
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "schematic extends past the canvas"
        );
    }

    let caption = config
        .caption
        .then(|| format!("R = {}", format_resistance(resistance(circuit))));

    Ok(render_svg(
        &commands,
        &config.svg,
        &config.stylesheet,
        caption.as_deref(),
    ))
}
