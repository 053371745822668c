//! Circuit model: an immutable tree of components joined in series or parallel
//!
//! Trees are built bottom-up from the leaf constructors and the [`series`] and
//! [`parallel`] combinators. Each composite node owns its two children, so a
//! tree can never share a node or contain a cycle.

use std::fmt;

/// Potential difference in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volts(pub f64);

/// Resistance in ohms; `f64::INFINITY` is an open circuit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ohms(pub f64);

/// Capacitance in farads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Farads(pub f64);

impl Ohms {
    pub const ZERO: Ohms = Ohms(0.0);
    pub const OPEN: Ohms = Ohms(f64::INFINITY);

    /// True for the open-circuit sentinel
    pub fn is_open(self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl fmt::Display for Volts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl fmt::Display for Ohms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::analysis::format_resistance(*self))
    }
}

impl fmt::Display for Farads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} F", self.0)
    }
}

/// A circuit element: one of four leaf components or a two-child composite
#[derive(Debug, Clone, PartialEq)]
pub enum Circuit {
    Wire,
    Battery(Volts),
    Resistor(Ohms),
    Capacitor(Farads),
    /// `left` followed by `right` along the same path
    Series(Box<Circuit>, Box<Circuit>),
    /// `top` and `bottom` as alternative paths between the same two nodes
    Parallel(Box<Circuit>, Box<Circuit>),
}

/// The four leaf component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Wire,
    Battery,
    Resistor,
    Capacitor,
}

impl LeafKind {
    pub fn name(self) -> &'static str {
        match self {
            LeafKind::Wire => "wire",
            LeafKind::Battery => "battery",
            LeafKind::Resistor => "resistor",
            LeafKind::Capacitor => "capacitor",
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn wire() -> Circuit {
    Circuit::Wire
}

pub fn battery(volts: f64) -> Circuit {
    Circuit::Battery(Volts(volts))
}

pub fn resistor(ohms: f64) -> Circuit {
    Circuit::Resistor(Ohms(ohms))
}

pub fn capacitor(farads: f64) -> Circuit {
    Circuit::Capacitor(Farads(farads))
}

/// Join two circuits end to end
pub fn series(left: Circuit, right: Circuit) -> Circuit {
    Circuit::Series(Box::new(left), Box::new(right))
}

/// Join two circuits side by side between the same terminals
pub fn parallel(top: Circuit, bottom: Circuit) -> Circuit {
    Circuit::Parallel(Box::new(top), Box::new(bottom))
}

impl Circuit {
    /// Chain any number of circuits in series, folding from the left.
    ///
    /// `series_of([a, b, c])` is `series(series(a, b), c)`. A single item is
    /// returned unchanged; an empty input yields `None`.
    pub fn series_of(items: impl IntoIterator<Item = Circuit>) -> Option<Circuit> {
        items.into_iter().reduce(series)
    }

    /// Stack any number of circuits in parallel, folding from the left.
    pub fn parallel_of(items: impl IntoIterator<Item = Circuit>) -> Option<Circuit> {
        items.into_iter().reduce(parallel)
    }

    /// Kind of this node if it is a leaf
    pub fn leaf_kind(&self) -> Option<LeafKind> {
        match self {
            Circuit::Wire => Some(LeafKind::Wire),
            Circuit::Battery(_) => Some(LeafKind::Battery),
            Circuit::Resistor(_) => Some(LeafKind::Resistor),
            Circuit::Capacitor(_) => Some(LeafKind::Capacitor),
            Circuit::Series(..) | Circuit::Parallel(..) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf_kind().is_some()
    }

    /// Number of leaf components in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Circuit::Series(a, b) | Circuit::Parallel(a, b) => a.leaf_count() + b.leaf_count(),
            _ => 1,
        }
    }

    /// Depth of the tree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Circuit::Series(a, b) | Circuit::Parallel(a, b) => 1 + a.depth().max(b.depth()),
            _ => 1,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Circuit::Wire => f.write_str("wire"),
            Circuit::Battery(v) => write!(f, "battery({})", v.0),
            Circuit::Resistor(r) => write!(f, "resistor({})", r.0),
            Circuit::Capacitor(c) => write!(f, "capacitor({})", c.0),
            Circuit::Series(a, b) => write!(f, "series({}, {})", a, b),
            Circuit::Parallel(a, b) => write!(f, "parallel({}, {})", a, b),
        }
    }
}

/// Notation for [`demo`], as accepted by [`crate::parse`]
pub const DEMO_SOURCE: &str = "\
series(
    wire,
    parallel(
        series(resistor(5), capacitor(3), battery(1)),
        series(battery(2), parallel(resistor(4), series(resistor(5), resistor(1))))
    ),
    wire
)
";

/// The reference circuit: a wire, two parallel branches, and a wire.
///
/// The upper branch is blocked by its capacitor, so the equivalent resistance
/// is that of the lower branch, 4 Ω parallel to 6 Ω.
pub fn demo() -> Circuit {
    let upper = series(series(resistor(5.0), capacitor(3.0)), battery(1.0));
    let lower = series(
        battery(2.0),
        parallel(resistor(4.0), series(resistor(5.0), resistor(1.0))),
    );
    series(series(wire(), parallel(upper, lower)), wire())
}
