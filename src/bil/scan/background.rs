//! Background (no-data) inference from scan extremes.

/// Result of [`infer_background`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundInference {
    /// Minimum to report to callers
    pub min: f64,
    /// Inferred background value
    pub background: Option<f64>,
    /// No sample exceeded the background, so `min` could not be separated from it
    pub indeterminate: bool,
}

/// Decides whether the raw minimum is a background fill.
///
/// A minimum greater than zero is a real measurement and no background is
/// reported. A minimum at or below zero is taken to be the no-data fill, and
/// `second_min` (the smallest value seen above the running minimum) becomes
/// the reported minimum. A true minimum of exactly 0 is therefore
/// indistinguishable from a fill of 0.
///
/// `second_min` is `None` when no sample ever exceeded the running minimum;
/// the result is then marked indeterminate and reports the background as the
/// minimum.
pub fn infer_background(min: f64, second_min: Option<f64>) -> BackgroundInference {
    if min > 0.0 {
        return BackgroundInference {
            min,
            background: None,
            indeterminate: false,
        };
    }

    match second_min {
        Some(second) => BackgroundInference {
            min: second,
            background: Some(min),
            indeterminate: false,
        },
        None => BackgroundInference {
            min,
            background: Some(min),
            indeterminate: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_minimum_has_no_background() {
        let inference = infer_background(1.0, Some(2.0));
        assert_eq!(inference.min, 1.0);
        assert_eq!(inference.background, None);
        assert!(!inference.indeterminate);
    }

    #[test]
    fn test_negative_minimum_is_background() {
        let inference = infer_background(-9999.0, Some(12.5));
        assert_eq!(inference.min, 12.5);
        assert_eq!(inference.background, Some(-9999.0));
        assert!(!inference.indeterminate);
    }

    #[test]
    fn test_zero_minimum_is_background() {
        let inference = infer_background(0.0, Some(3.0));
        assert_eq!(inference.min, 3.0);
        assert_eq!(inference.background, Some(0.0));
    }

    #[test]
    fn test_nothing_above_background_is_indeterminate() {
        let inference = infer_background(-1.0, None);
        assert_eq!(inference.min, -1.0);
        assert_eq!(inference.background, Some(-1.0));
        assert!(inference.indeterminate);
    }
}
