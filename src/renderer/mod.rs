//! Rendering layout output onto a canvas
//!
//! [`paint`] is the single place where math coordinates become canvas
//! coordinates. [`SvgCanvas`] turns the lines into an SVG document with CSS
//! classes for styling.

pub mod canvas;
pub mod config;
pub mod svg;

pub use canvas::{paint, Canvas, CanvasLine, RecordingCanvas};
pub use config::SvgConfig;
pub use svg::{render_svg, SvgCanvas};
