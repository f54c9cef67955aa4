//! Rounding and quality helpers shared by every stage.

/// Neutral quality before homogeneity and stress adjustments.
pub const QUALITY_BASE: f64 = 3.0;
/// Lowest quality score.
pub const QUALITY_MIN: f64 = 0.0;
/// Highest quality score.
pub const QUALITY_MAX: f64 = 5.0;

/// Round to 2 decimal places (half away from zero).
///
/// This is the display precision of every derived figure.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a quality score into `[QUALITY_MIN, QUALITY_MAX]`.
#[inline]
pub fn clamp_quality(value: f64) -> f64 {
    value.clamp(QUALITY_MIN, QUALITY_MAX)
}

/// Quality derived from sample scores: `3 + homogeneity - stress - penalty`,
/// rounded then clamped.
#[inline]
pub fn quality_from_scores(homogeneity: i32, stress: i32, penalty: f64) -> f64 {
    let raw = QUALITY_BASE + homogeneity as f64 - stress as f64 - penalty;
    clamp_quality(round2(raw))
}

/// Arithmetic mean, `0.0` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
