//! Extent of a circuit subtree in layout units
//!
//! Series chains grow in length, parallel stacks grow in width. Both are pure
//! functions of tree shape and are recomputed on every call.

use crate::circuit::Circuit;

use super::types::Extent;

/// Horizontal unit count
pub fn circuit_length(circuit: &Circuit) -> usize {
    match circuit {
        Circuit::Series(left, right) => circuit_length(left) + circuit_length(right),
        Circuit::Parallel(top, bottom) => circuit_length(top).max(circuit_length(bottom)),
        _ => 1,
    }
}

/// Vertical branch unit count
pub fn circuit_width(circuit: &Circuit) -> usize {
    match circuit {
        Circuit::Series(left, right) => circuit_width(left).max(circuit_width(right)),
        Circuit::Parallel(top, bottom) => circuit_width(top) + circuit_width(bottom),
        _ => 1,
    }
}

pub fn extent(circuit: &Circuit) -> Extent {
    Extent {
        length: circuit_length(circuit),
        width: circuit_width(circuit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::*;

    #[test]
    fn test_leaves_are_unit() {
        for leaf in [wire(), battery(1.0), resistor(2.0), capacitor(3.0)] {
            assert_eq!(extent(&leaf), Extent::LEAF);
        }
    }

    #[test]
    fn test_series_sums_length_maxes_width() {
        let a = parallel(wire(), wire());
        let b = series(resistor(1.0), resistor(2.0));
        let c = series(a.clone(), b.clone());
        assert_eq!(circuit_length(&c), circuit_length(&a) + circuit_length(&b));
        assert_eq!(extent(&c), Extent { length: 3, width: 2 });
    }

    #[test]
    fn test_parallel_maxes_length_sums_width() {
        let a = series(wire(), series(wire(), wire()));
        let b = parallel(resistor(1.0), resistor(2.0));
        let c = parallel(a.clone(), b.clone());
        assert_eq!(circuit_width(&c), circuit_width(&a) + circuit_width(&b));
        assert_eq!(extent(&c), Extent { length: 3, width: 3 });
    }

    #[test]
    fn test_demo_extent() {
        assert_eq!(extent(&demo()), Extent { length: 5, width: 3 });
    }
}
