//! Easing functions for scroll animations.
//!
//! Timed scrolls are shaped by an easing curve mapping progress in [0, 1] to
//! eased progress in [0, 1]. Callers may inject any [`Interpolator`]; when
//! none is supplied the engine falls back to the built-in
//! [`viscous_fluid`] curve.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Externally supplied easing capability.
///
/// Pure and stateless: given a normalized progress value in [0, 1], return
/// the eased progress value.
pub trait Interpolator {
    fn interpolate(&self, t: f32) -> f32;
}

/// Named easing curves selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

impl Interpolator for EasingType {
    #[inline]
    fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// Controls how much of the viscous fluid effect is applied.
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// The curve before normalization.
fn viscous_fluid_raw(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let start = 0.36787944117_f32; // 1/e == exp(-1)
        let tail = 1.0 - (1.0 - x).exp();
        start + tail * (1.0 - start)
    }
}

/// Built-in ease-out curve: exponential rise blending into a linear tail.
///
/// Normalized so that `viscous_fluid(1.0) == 1.0` regardless of the scale
/// constant; the normalization factor is computed once on first use.
pub fn viscous_fluid(x: f32) -> f32 {
    static NORMALIZE: OnceLock<f32> = OnceLock::new();
    let normalize = *NORMALIZE.get_or_init(|| 1.0 / viscous_fluid_raw(1.0));
    viscous_fluid_raw(x) * normalize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viscous_fluid_normalized_at_one() {
        assert!((viscous_fluid(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_viscous_fluid_starts_at_zero() {
        assert!(viscous_fluid(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_viscous_fluid_monotonic() {
        let mut prev = f32::NEG_INFINITY;
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            let v = viscous_fluid(x);
            assert!(v >= prev, "viscous_fluid not monotonic at x={x}");
            prev = v;
        }
    }

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            assert!(easing.interpolate(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!(
                (easing.interpolate(1.0) - 1.0).abs() < 0.001,
                "{:?} at t=1",
                easing
            );
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f32 / 10.0;
                let v = easing.interpolate(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }
}
