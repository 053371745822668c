//! Circuit Schematic CLI
//!
//! Usage:
//!   circuit-schematic [OPTIONS] [FILE]
//!
//! Options:
//!   --demo                   Render the built-in demo circuit
//!   -o, --output <FILE>      Write SVG to a file instead of stdout
//!   -s, --stylesheet <FILE>  Palette file (TOML format)
//!   --resistance             Print the equivalent resistance only
//!   --compact                Single-line SVG without the XML declaration
//!   --grammar                Show notation reference
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{info, Level};

use circuit_schematic::circuit::{self, Circuit};
use circuit_schematic::{
    format_resistance, parse, render_circuit, resistance, LayoutConfig, RenderConfig, SplitMode,
    Stylesheet, SvgConfig,
};

#[derive(Parser)]
#[command(name = "circuit-schematic")]
#[command(about = "Draw series/parallel circuits as SVG schematics")]
struct Cli {
    /// Notation file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render the built-in demo circuit
    #[arg(long)]
    demo: bool,

    /// Write SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Palette file (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Print only the equivalent resistance
    #[arg(long)]
    resistance: bool,

    /// Print the equivalent resistance under the schematic
    #[arg(long)]
    caption: bool,

    /// Use the scaled series split instead of interpolation
    #[arg(long)]
    scaled_split: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Height of the outer centerline (defaults to half the canvas height)
    #[arg(long)]
    centerline: Option<f64>,

    /// Horizontal distance from the canvas edges to the circuit terminals
    #[arg(long, default_value_t = 50.0)]
    margin: f64,

    /// Single-line SVG without the XML declaration
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show notation reference
    #[arg(long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input and stdin is a terminal (interactive), show intro help
    if !cli.demo && cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let circuit = if cli.demo {
        circuit::demo()
    } else {
        load_circuit(&cli)
    };

    if cli.resistance {
        println!("{}", format_resistance(resistance(&circuit)));
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => Stylesheet::default().merged(s),
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let split_mode = if cli.scaled_split {
        SplitMode::Scaled
    } else {
        SplitMode::Interpolated
    };
    let layout = LayoutConfig::default()
        .with_span(cli.margin, cli.width - cli.margin)
        .with_centerline(cli.centerline.unwrap_or(cli.height / 2.0))
        .with_split_mode(split_mode);

    let mut svg_config = SvgConfig::default().with_size(cli.width, cli.height);
    if cli.compact {
        svg_config = svg_config.compact();
    }

    let config = RenderConfig::new()
        .with_layout(layout)
        .with_svg(svg_config)
        .with_stylesheet(stylesheet)
        .with_caption(cli.caption);

    let svg = match render_circuit(&circuit, &config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                process::exit(1);
            }
            info!(path = %path.display(), "wrote schematic");
        }
        None => print!("{}", svg),
    }
}

/// Read and parse the input file or stdin, exiting with diagnostics on failure
fn load_circuit(cli: &Cli) -> Circuit {
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    match parse(&source) {
        Ok(circuit) => circuit,
        Err(errors) => {
            for err in &errors {
                eprint!("{}", err.format(&source, &filename));
            }
            process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Circuit Schematic - draw series/parallel circuits as SVG

USAGE:
    circuit-schematic [OPTIONS] [FILE]
    echo '<notation>' | circuit-schematic

OPTIONS:
    --demo             Render the built-in demo circuit
    -o, --output       Write SVG to a file
    -s, --stylesheet   Custom palette (TOML file)
    --resistance       Print the equivalent resistance only
    --caption          Print the resistance under the schematic
    --scaled-split     Use the scaled series split
    --compact          Single-line SVG for embedding
    --grammar          Show notation reference
    -v                 Increase log verbosity
    -h, --help         Print help

QUICK START:
    echo 'series(battery(9), resistor(330))' | circuit-schematic > out.svg
    circuit-schematic --demo --caption -o demo.svg

Run 'circuit-schematic --grammar' for the notation reference."#
    );
}

fn print_grammar() {
    println!(
        r#"CIRCUIT NOTATION
================

ELEMENTS
    wire                    Ideal conductor (0 Ω)
    battery(V)              Ideal source, contributes 0 Ω
    resistor(R)             Resistance in ohms
    capacitor(C)            Open circuit at DC (∞ Ω)

COMBINATORS
    series(a, b, ...)       Elements end to end; resistances add
    parallel(a, b, ...)     Elements side by side; 1/R = 1/a + 1/b
    Three or more children fold left: series(a, b, c) = series(series(a, b), c).
    A trailing comma is allowed.

VALUES
    Decimal numbers with optional exponent and SI suffix:
    p (1e-12)  n (1e-9)  u (1e-6)  m (1e-3)  k (1e3)  M (1e6)  G (1e9)
    Examples: 5  0.25  4.7k  100n  1e3

COMMENTS
    // to end of line
    /* block */

DEMO
{}"#,
        circuit::DEMO_SOURCE
    );
}
