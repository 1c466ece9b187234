//! Mean obliquity of the ecliptic.
//!
//! | Function | Model | ε₀ at J2000.0 |
//! |----------|-------|---------------|
//! | [`iau_2006_mean_obliquity`] | IAU 2006 (Capitaine et al. 2003) | 84381.406″ |
//! | [`iau_1980_mean_obliquity`] | IAU 1980 (Lieske 1979) | 84381.448″ |
//!
//! For the true obliquity add `NutationResult::delta_eps`.
//!
//! ```
//! use skyframe_core::obliquity::iau_2006_mean_obliquity;
//!
//! let eps = iau_2006_mean_obliquity(2451545.0, 0.0);
//! assert!((eps.to_degrees() - 23.4392794).abs() < 1e-6);
//! ```

use crate::constants::ARCSEC_TO_RAD;
use crate::math::polynomial;
use crate::precession::EPSA;
use crate::utils::jd_to_centuries;

const EPS_1980: [f64; 4] = [84381.448, -46.8150, -0.00059, 0.001813];

/// IAU 2006 mean obliquity at the two-part TT date, radians.
pub fn iau_2006_mean_obliquity(jd1: f64, jd2: f64) -> f64 {
    mean_obliquity_centuries(jd_to_centuries(jd1, jd2))
}

/// IAU 2006 mean obliquity at `t` TT centuries since J2000.0, radians.
pub fn mean_obliquity_centuries(t: f64) -> f64 {
    polynomial(&EPSA, t) * ARCSEC_TO_RAD
}

/// IAU 1980 mean obliquity at the two-part TT date, radians.
pub fn iau_1980_mean_obliquity(jd1: f64, jd2: f64) -> f64 {
    polynomial(&EPS_1980, jd_to_centuries(jd1, jd2)) * ARCSEC_TO_RAD
}
