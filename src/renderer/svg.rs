//! SVG canvas

use crate::layout::DrawCommand;
use crate::stylesheet::Stylesheet;

use super::canvas::{paint, Canvas};
use super::SvgConfig;

/// Canvas that accumulates SVG elements and serialises them on [`finish`](SvgCanvas::finish)
pub struct SvgCanvas {
    config: SvgConfig,
    palette: Stylesheet,
    styles: Vec<String>,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            palette: Stylesheet::default(),
            styles: vec![],
            elements: vec![],
        }
    }

    /// Add CSS custom properties from a stylesheet; its values also become
    /// the fallbacks in the element rules
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let vars: Vec<String> = stylesheet
            .colors
            .iter()
            .map(|(token, value)| format!("--{}: {};", token, value))
            .collect();
        self.styles.push(format!(":root {{ {} }}", vars.join(" ")));
        self.palette = stylesheet.clone();
    }

    /// Centered text along the bottom edge of the canvas
    pub fn add_caption(&mut self, text: &str) {
        let x = self.config.width / 2.0;
        let y = self.config.height - 30.0;
        self.add_text(text, x, y, "caption");
    }

    /// Text element at canvas coordinates, anchored at its middle
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, class: &str) {
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            self.indent_str(),
            self.prefix(),
            class,
            fmt_num(x),
            fmt_num(y),
            escape_xml(text)
        ));
    }

    fn prefix(&self) -> &str {
        &self.config.class_prefix
    }

    fn indent_str(&self) -> &'static str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn base_rules(&self) -> [String; 3] {
        let p = self.prefix();
        let background = self.palette.resolve_or_default("background");
        let stroke = self.palette.resolve_or_default("stroke");
        let caption = self.palette.resolve_or_default("caption");
        [
            format!(".{p}background {{ fill: var(--background, {background}); }}"),
            format!(".{p}line {{ stroke: var(--stroke, {stroke}); stroke-linecap: round; }}"),
            format!(".{p}caption {{ fill: var(--caption, {caption}); font-family: sans-serif; font-size: 20px; }}"),
        ]
    }

    /// Serialise the document
    pub fn finish(self) -> String {
        let nl = self.newline();
        let ind = self.indent_str();
        let width = fmt_num(self.config.width);
        let height = fmt_num(self.config.height);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        ));
        svg.push_str(nl);

        svg.push_str(ind);
        svg.push_str("<style>");
        svg.push_str(nl);
        for rule in self.styles.iter().chain(self.base_rules().iter()) {
            svg.push_str(ind);
            svg.push_str(ind);
            svg.push_str(rule);
            svg.push_str(nl);
        }
        svg.push_str(ind);
        svg.push_str("</style>");
        svg.push_str(nl);

        svg.push_str(&format!(
            r#"{}<rect class="{}background" width="{}" height="{}"/>"#,
            ind,
            self.prefix(),
            width,
            height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

impl Canvas for SvgCanvas {
    fn height(&self) -> f64 {
        self.config.height
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64) {
        self.elements.push(format!(
            r#"{}<line class="{}line" x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            self.prefix(),
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            fmt_num(stroke_width)
        ));
    }
}

/// Render layout commands into a complete SVG document
pub fn render_svg(
    commands: &[DrawCommand],
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    caption: Option<&str>,
) -> String {
    let mut canvas = SvgCanvas::new(config.clone());
    canvas.add_stylesheet(stylesheet);
    paint(commands, &mut canvas);
    if let Some(text) = caption {
        canvas.add_caption(text);
    }
    canvas.finish()
}

/// Coordinates rounded to three decimals, without a trailing `.0` or `-0`
fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
