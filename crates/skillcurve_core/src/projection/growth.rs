//! Saturating skill-growth curve.
//!
//! # Responsibility
//! - Evaluate `(1 - e^(-rate * elapsed))^shape` as a normalized growth factor.
//! - Map the factor onto the `base..ceiling` span and clamp to the level scale.
//!
//! # Invariants
//! - Both functions are total for finite inputs and never panic.
//! - Negative (or NaN) elapsed time is evaluated as zero.
//! - An undefined power yields a growth factor of `0.0`.
//! - `predict(base, .., 0.0) == base` for any `base` within the level scale.

use crate::model::skill::{SKILL_LEVEL_MAX, SKILL_LEVEL_MIN};
use log::debug;

/// Fraction of the `base..ceiling` distance closed after `elapsed` years.
///
/// Lies in `[0, 1)` for positive `rate` and `shape`. Results that are not
/// finite (for example a fractional power of a negative residual) fall back
/// to `0.0`.
pub fn growth_factor(rate: f64, shape: f64, elapsed: f64) -> f64 {
    let elapsed = elapsed.max(0.0);
    let saturation = 1.0 - (-rate * elapsed).exp();
    let growth = saturation.powf(shape);
    if growth.is_finite() {
        return growth;
    }

    debug!(
        "event=growth_fallback module=projection status=recovered rate={} shape={} elapsed={} saturation={}",
        rate, shape, elapsed, saturation
    );
    0.0
}

/// Projected proficiency after `elapsed` years, clamped to `[0, 100]`.
pub fn predict(base: f64, ceiling: f64, rate: f64, shape: f64, elapsed: f64) -> f64 {
    let growth = growth_factor(rate, shape, elapsed);
    // Zero growth must return `base` even when `ceiling - base` overflows.
    let value = if growth == 0.0 {
        base
    } else {
        base + (ceiling - base) * growth
    };
    value.clamp(SKILL_LEVEL_MIN, SKILL_LEVEL_MAX)
}
