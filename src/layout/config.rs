//! Configuration for the layout engine

/// How a series node divides its horizontal span between its two children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// `x1 + lenA / (lenA + lenB) * (x2 - x1)`: proportional to unit lengths
    #[default]
    Interpolated,
    /// `lenA / (lenA + lenB) * (x1 + x2)`: the historical formula, which only
    /// agrees with `Interpolated` when `x1 == 0` or the split is even
    Scaled,
}

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Left end of the horizontal span the whole circuit occupies
    pub span_start: f64,

    /// Right end of the horizontal span
    pub span_end: f64,

    /// Centerline of the outermost circuit (math convention, y up)
    pub centerline: f64,

    /// Pixels per vertical branch unit
    pub unit_pixels: f64,

    /// Series split formula
    pub split_mode: SplitMode,

    /// Stroke width for leads and component symbols
    pub stroke_width: f64,

    /// Stroke width for parallel bus bars
    pub bus_stroke_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            span_start: 50.0,
            span_end: 950.0,
            centerline: 400.0,
            unit_pixels: 60.0,
            split_mode: SplitMode::Interpolated,
            stroke_width: 3.0,
            bus_stroke_width: 2.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal span
    pub fn with_span(mut self, start: f64, end: f64) -> Self {
        self.span_start = start;
        self.span_end = end;
        self
    }

    /// Set the outer centerline
    pub fn with_centerline(mut self, y: f64) -> Self {
        self.centerline = y;
        self
    }

    /// Set the pixels per vertical branch unit
    pub fn with_unit_pixels(mut self, pixels: f64) -> Self {
        self.unit_pixels = pixels;
        self
    }

    /// Set the series split formula
    pub fn with_split_mode(mut self, mode: SplitMode) -> Self {
        self.split_mode = mode;
        self
    }

    /// Set symbol and bus bar stroke widths
    pub fn with_strokes(mut self, symbol: f64, bus: f64) -> Self {
        self.stroke_width = symbol;
        self.bus_stroke_width = bus;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!((config.span_start, config.span_end), (50.0, 950.0));
        assert_eq!(config.centerline, 400.0);
        assert_eq!(config.unit_pixels, 60.0);
        assert_eq!(config.split_mode, SplitMode::Interpolated);
        assert_eq!(config.stroke_width, 3.0);
        assert!(config.bus_stroke_width < config.stroke_width);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_span(0.0, 600.0)
            .with_centerline(120.0)
            .with_unit_pixels(40.0)
            .with_split_mode(SplitMode::Scaled)
            .with_strokes(2.0, 1.0);

        assert_eq!((config.span_start, config.span_end), (0.0, 600.0));
        assert_eq!(config.centerline, 120.0);
        assert_eq!(config.unit_pixels, 40.0);
        assert_eq!(config.split_mode, SplitMode::Scaled);
        assert_eq!((config.stroke_width, config.bus_stroke_width), (2.0, 1.0));
    }
}
