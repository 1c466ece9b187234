//! Time-argument helpers for the IAU series.

use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::math::fmod;

/// Julian centuries since J2000.0 from a two-part Julian date.
///
/// ```
/// use skyframe_core::utils::jd_to_centuries;
///
/// assert_eq!(jd_to_centuries(2451545.0, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(2451545.0, 36525.0), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Reduces an angle given in arcseconds modulo a full circle and returns radians.
#[inline]
pub fn arcsec_mod_circle_to_rad(arcsec: f64) -> f64 {
    fmod(arcsec, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD
}
