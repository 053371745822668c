//! SVG output settings

/// Canvas size and serialisation options for [`SvgCanvas`](super::SvgCanvas)
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    pub width: f64,
    /// Also the height `paint` flips y-coordinates against
    pub height: f64,
    /// Emit the `<?xml ...?>` declaration
    pub standalone: bool,
    /// One element per line, indented
    pub pretty_print: bool,
    /// Prepended to every CSS class (`cs-line`, `cs-caption`, ...)
    pub class_prefix: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            standalone: true,
            pretty_print: true,
            class_prefix: "cs-".to_string(),
        }
    }
}

impl SvgConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Single-line output without the XML declaration, for embedding in HTML
    pub fn compact(mut self) -> Self {
        self.standalone = false;
        self.pretty_print = false;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}
