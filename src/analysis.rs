//! Equivalent DC resistance of a circuit tree
//!
//! Steady-state DC rules: wires and ideal batteries are shorts, capacitors are
//! open. The open circuit is `f64::INFINITY` and flows through the arithmetic
//! like any other value (`1/∞ = 0`, `1/0 = ∞`); it is never reported as an error.

use std::ops::Add;

use crate::circuit::{Circuit, Ohms};

impl Add for Ohms {
    type Output = Ohms;

    fn add(self, rhs: Ohms) -> Ohms {
        Ohms(self.0 + rhs.0)
    }
}

impl Ohms {
    /// Combine two resistances side by side: `1 / (1/a + 1/b)`.
    pub fn in_parallel(self, other: Ohms) -> Ohms {
        Ohms(1.0 / (1.0 / self.0 + 1.0 / other.0))
    }
}

/// Fold a circuit into its equivalent resistance
pub fn resistance(circuit: &Circuit) -> Ohms {
    match circuit {
        Circuit::Wire | Circuit::Battery(_) => Ohms::ZERO,
        Circuit::Resistor(r) => *r,
        Circuit::Capacitor(_) => Ohms::OPEN,
        Circuit::Series(left, right) => resistance(left) + resistance(right),
        Circuit::Parallel(top, bottom) => resistance(top).in_parallel(resistance(bottom)),
    }
}

const SI_PREFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Human-readable resistance with an SI prefix, e.g. `"4.7 kΩ"`.
pub fn format_resistance(value: Ohms) -> String {
    let ohms = value.0;
    if ohms.is_nan() {
        return "undefined".to_string();
    }
    if ohms == f64::INFINITY {
        return "∞ Ω (open circuit)".to_string();
    }
    if ohms == f64::NEG_INFINITY {
        return "-∞ Ω".to_string();
    }
    if ohms == 0.0 {
        return "0 Ω".to_string();
    }

    let magnitude = ohms.abs();
    let mut index = SI_PREFIXES
        .iter()
        .position(|(scale, _)| magnitude >= *scale)
        .unwrap_or(SI_PREFIXES.len() - 1);

    // 999.9996 rounds to 1000 at three decimals; show it as 1 k instead
    if index > 0 && round_to_thousandths(magnitude / SI_PREFIXES[index].0) >= 1000.0 {
        index -= 1;
    }

    let (scale, prefix) = SI_PREFIXES[index];
    format!("{} {}Ω", trim_decimals(&format!("{:.3}", ohms / scale)), prefix)
}

fn round_to_thousandths(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn trim_decimals(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::*;
    use approx::{assert_relative_eq, assert_abs_diff_eq};

    #[test]
    fn test_leaves() {
        assert_eq!(resistance(&wire()), Ohms(0.0));
        assert_eq!(resistance(&battery(9.0)), Ohms(0.0));
        assert_eq!(resistance(&battery(-1.5)), Ohms(0.0));
        assert_eq!(resistance(&resistor(47.0)), Ohms(47.0));
        assert!(resistance(&capacitor(1e-6)).is_open());
        assert!(resistance(&capacitor(0.0)).is_open());
    }

    #[test]
    fn test_series_sums() {
        for (r1, r2) in [(1.0, 2.0), (4.7e3, 10.0), (0.5, 0.25)] {
            let r = resistance(&series(resistor(r1), resistor(r2)));
            assert_relative_eq!(r.0, r1 + r2);
        }
    }

    #[test]
    fn test_parallel_product_over_sum() {
        for (r1, r2) in [(4.0, 6.0), (100.0, 100.0), (1.0, 1e6), (3.3, 0.1)] {
            let r = resistance(&parallel(resistor(r1), resistor(r2)));
            assert_relative_eq!(r.0, (r1 * r2) / (r1 + r2), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_short_circuit_dominates() {
        for r in [1.0, 220.0, 1e9] {
            assert_eq!(resistance(&parallel(resistor(r), wire())), Ohms(0.0));
            assert_eq!(resistance(&parallel(battery(5.0), resistor(r))), Ohms(0.0));
        }
    }

    #[test]
    fn test_open_branch_is_ignored_in_parallel() {
        let r = resistance(&parallel(capacitor(1.0), resistor(12.0)));
        assert_relative_eq!(r.0, 12.0);
    }

    #[test]
    fn test_open_in_series_stays_open() {
        assert!(resistance(&series(resistor(5.0), capacitor(3.0))).is_open());
    }

    #[test]
    fn test_parallel_of_two_opens_is_open() {
        assert!(resistance(&parallel(capacitor(1.0), capacitor(2.0))).is_open());
    }

    #[test]
    fn test_negative_values_propagate() {
        let r = resistance(&series(resistor(-5.0), resistor(2.0)));
        assert_eq!(r, Ohms(-3.0));
    }

    #[test]
    fn test_demo_circuit() {
        assert_abs_diff_eq!(resistance(&demo()).0, 2.4, epsilon = 1e-12);
    }

    #[test]
    fn test_format_resistance() {
        assert_eq!(format_resistance(Ohms(2.4000000000000004)), "2.4 Ω");
        assert_eq!(format_resistance(Ohms(4700.0)), "4.7 kΩ");
        assert_eq!(format_resistance(Ohms(1.5e6)), "1.5 MΩ");
        assert_eq!(format_resistance(Ohms(0.5)), "500 mΩ");
        assert_eq!(format_resistance(Ohms(-3.0)), "-3 Ω");
        assert_eq!(format_resistance(Ohms(0.0)), "0 Ω");
        assert_eq!(format_resistance(Ohms::OPEN), "∞ Ω (open circuit)");
        assert_eq!(format_resistance(Ohms(f64::NAN)), "undefined");
    }

    #[test]
    fn test_format_rounding_moves_to_next_prefix() {
        assert_eq!(format_resistance(Ohms(999.9996)), "1 kΩ");
        assert_eq!(format_resistance(Ohms(-999.9996)), "-1 kΩ");
        assert_eq!(format_resistance(Ohms(0.9999996)), "1 Ω");
        assert_eq!(format_resistance(Ohms(999.9994)), "999.999 Ω");
    }
}
