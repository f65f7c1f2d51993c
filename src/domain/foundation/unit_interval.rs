//! Helpers for scores that live on the closed interval [0, 1].

/// Clamps a score into `[0, 1]`.
///
/// NaN collapses to 0 so a degenerate input can never leak out of a scorer.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Returns true if `value` is a finite number within `[0, 1]`.
pub fn is_unit(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
