//! SVG regression tests
//!
//! Output is fully deterministic (palette tokens are sorted, coordinates
//! rounded to three decimals), so whole documents are compared.

use circuit_schematic::circuit;
use circuit_schematic::{render, render_circuit, RenderConfig, Stylesheet, SvgConfig};

#[test]
fn test_wire_document() {
    let svg = render("wire").expect("Should render");
    insta::assert_snapshot!(svg, @r###"
<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800" viewBox="0 0 1000 800">
  <style>
    :root { --background: #ffffff; --caption: #333333; --stroke: #000000; }
    .cs-background { fill: var(--background, #ffffff); }
    .cs-line { stroke: var(--stroke, #000000); stroke-linecap: round; }
    .cs-caption { fill: var(--caption, #333333); font-family: sans-serif; font-size: 20px; }
  </style>
  <rect class="cs-background" width="1000" height="800"/>
  <line class="cs-line" x1="50" y1="400" x2="950" y2="400" stroke-width="3"/>
</svg>
"###);
}

#[test]
fn test_capacitor_document() {
    let svg = render("capacitor(10u)").expect("Should render");
    insta::assert_snapshot!(svg, @r###"
<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="800" viewBox="0 0 1000 800">
  <style>
    :root { --background: #ffffff; --caption: #333333; --stroke: #000000; }
    .cs-background { fill: var(--background, #ffffff); }
    .cs-line { stroke: var(--stroke, #000000); stroke-linecap: round; }
    .cs-caption { fill: var(--caption, #333333); font-family: sans-serif; font-size: 20px; }
  </style>
  <rect class="cs-background" width="1000" height="800"/>
  <line class="cs-line" x1="50" y1="400" x2="490" y2="400" stroke-width="3"/>
  <line class="cs-line" x1="950" y1="400" x2="510" y2="400" stroke-width="3"/>
  <line class="cs-line" x1="490" y1="400" x2="490" y2="380" stroke-width="3"/>
  <line class="cs-line" x1="490" y1="400" x2="490" y2="420" stroke-width="3"/>
  <line class="cs-line" x1="510" y1="400" x2="510" y2="380" stroke-width="3"/>
  <line class="cs-line" x1="510" y1="400" x2="510" y2="420" stroke-width="3"/>
</svg>
"###);
}

#[test]
fn test_demo_notation_display() {
    insta::assert_snapshot!(
        circuit::demo().to_string(),
        @"series(series(wire, parallel(series(series(resistor(5), capacitor(3)), battery(1)), series(battery(2), parallel(resistor(4), series(resistor(5), resistor(1)))))), wire)"
    );
}

#[test]
fn test_custom_palette_and_prefix() {
    let palette = Stylesheet::from_str(
        r##"
[colors]
stroke = "#f8fafc"
background = "#0f172a"
"##,
    )
    .expect("Should parse");
    let config = RenderConfig::new()
        .with_stylesheet(Stylesheet::default().merged(palette))
        .with_svg(SvgConfig::default().with_class_prefix("schem-"));
    let svg = render_circuit(&circuit::wire(), &config).expect("Should render");

    assert!(svg.contains(":root { --background: #0f172a; --caption: #333333; --stroke: #f8fafc; }"));
    assert!(svg.contains(r#"<rect class="schem-background""#));
    assert!(svg.contains(r#"<line class="schem-line""#));
    assert!(!svg.contains("cs-"));
}

#[test]
fn test_demo_caption() {
    let config = RenderConfig::new().with_caption(true);
    let svg = render_circuit(&circuit::demo(), &config).expect("Should render");
    assert!(svg.contains(
        r#"<text class="cs-caption" x="500" y="770" text-anchor="middle">R = 2.4 Ω</text>"#
    ));
    // caption follows the last stroke
    let caption_at = svg.find("<text").expect("caption present");
    let last_line_at = svg.rfind("<line").expect("lines present");
    assert!(caption_at > last_line_at);
}

#[test]
fn test_demo_bus_bars_are_thin() {
    let svg = render(circuit::DEMO_SOURCE).expect("Should render");
    assert_eq!(svg.matches(r#"stroke-width="2""#).count(), 4);
    assert_eq!(svg.matches(r#"stroke-width="3""#).count(), 48);
}
