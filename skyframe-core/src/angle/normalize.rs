//! Range conventions for raw radian values.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, ecliptic longitude | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle, longitude difference | [-π, +π) | [`wrap_pm_pi`] |
//! | Declination, latitude | [-π/2, +π/2] | [`clamp_dec`] |
//!
//! Wrapping uses `libm::fmod` through [`crate::math::fmod`] and then shifts the
//! remainder into the target range.
//!
//! [`clamped_asin`] is the guarded inverse sine used by the spherical conversions:
//! rounding can push an argument a few ULP past ±1, which is clamped, but anything
//! further out is a genuine domain error.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;
use crate::{AstroError, MathErrorKind};

/// Largest overshoot of ±1 that [`clamped_asin`] silently clamps.
pub const ASIN_TOLERANCE: f64 = 1e-12;

/// Wraps an angle to [-π, +π).
///
/// ```
/// use skyframe_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_pm_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps an angle to [0, 2π).
///
/// ```
/// use skyframe_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_0_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    let w = if w < 0.0 { w + TWOPI } else { w };
    // fmod of a tiny negative value plus 2π rounds to exactly 2π.
    if w >= TWOPI {
        0.0
    } else {
        w
    }
}

/// Clamps to [-π/2, +π/2].
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}

/// Inverse sine that tolerates rounding overshoot.
///
/// Arguments within [`ASIN_TOLERANCE`] of the domain are clamped to ±1. Larger
/// deviations return a [`MathErrorKind::DomainError`], as does a non-finite input.
///
/// ```
/// use skyframe_core::angle::clamped_asin;
/// use std::f64::consts::FRAC_PI_2;
///
/// assert_eq!(clamped_asin(1.0 + 1e-15, "example").unwrap(), FRAC_PI_2);
/// assert!(clamped_asin(1.001, "example").is_err());
/// ```
pub fn clamped_asin(x: f64, operation: &str) -> Result<f64, AstroError> {
    if !x.is_finite() {
        return Err(AstroError::math_error(
            operation,
            MathErrorKind::NotFinite,
            "asin argument not finite",
        ));
    }
    if x.abs() > 1.0 + ASIN_TOLERANCE {
        return Err(AstroError::math_error(
            operation,
            MathErrorKind::DomainError,
            &format!("asin argument {x} outside [-1, 1]"),
        ));
    }
    Ok(libm::asin(x.clamp(-1.0, 1.0)))
}
