//! Error types for the layout engine

use thiserror::Error;

/// Degenerate geometry detected while placing a circuit
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Span with non-finite ends or `x1 >= x2`
    #[error("invalid span [{x1}, {x2}]: the left end must be finite and strictly less than the right")]
    InvalidSpan { x1: f64, x2: f64 },

    /// Centerline that is NaN or infinite
    #[error("invalid centerline {y}")]
    InvalidCenterline { y: f64 },

    /// Series divider landing on or outside the span it divides
    #[error("series split at {split} falls outside span ({x1}, {x2})")]
    SplitOutsideSpan { split: f64, x1: f64, x2: f64 },

    /// Invalid layout configuration
    #[error("invalid layout configuration: {reason}")]
    InvalidLayout { reason: String },
}

impl LayoutError {
    pub fn invalid_span(x1: f64, x2: f64) -> Self {
        Self::InvalidSpan { x1, x2 }
    }

    pub fn split_outside(split: f64, x1: f64, x2: f64) -> Self {
        Self::SplitOutsideSpan { split, x1, x2 }
    }

    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = LayoutError::invalid_span(10.0, 5.0);
        assert!(err.to_string().contains("[10, 5]"));
    }

    #[test]
    fn test_split_outside_display() {
        let err = LayoutError::split_outside(200.0, 100.0, 200.0);
        assert_eq!(
            err.to_string(),
            "series split at 200 falls outside span (100, 200)"
        );
    }
}
