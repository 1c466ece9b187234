//! IAU 2006 precession in the Fukushima-Williams parameterization.
//!
//! Four angles orient the mean equator and equinox of date against the GCRS:
//! γ̄ and φ̄ locate the ecliptic pole of date, ψ̄ is the precession in longitude
//! and ε_A the mean obliquity. Chaining `Rx(−ε_A)·Rz(−ψ̄)·Rx(φ̄)·Rz(γ̄)` gives the
//! bias-precession matrix; adding nutation to ψ̄ and ε_A gives the full NPB matrix
//! whose third row is the CIP unit vector.
//!
//! Polynomials from Hilton et al. (2006), coefficients in arcseconds.

use crate::constants::ARCSEC_TO_RAD;
use crate::math::polynomial;
use crate::matrix::RotationMatrix3;
use crate::utils::jd_to_centuries;

const GAMB: [f64; 6] = [
    -0.052928,
    10.556378,
    0.4932044,
    -0.00031238,
    -0.000002788,
    0.0000000260,
];

const PHIB: [f64; 6] = [
    84381.412819,
    -46.811016,
    0.0511268,
    0.00053289,
    -0.000000440,
    -0.0000000176,
];

const PSIB: [f64; 6] = [
    -0.041775,
    5038.481484,
    1.5584175,
    -0.00018522,
    -0.000026452,
    -0.0000000148,
];

pub(crate) const EPSA: [f64; 6] = [
    84381.406,
    -46.836769,
    -0.0001831,
    0.00200340,
    -0.000000576,
    -0.0000000434,
];

/// The four Fukushima-Williams angles, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FukushimaWilliams {
    pub gamb: f64,
    pub phib: f64,
    pub psib: f64,
    pub epsa: f64,
}

impl FukushimaWilliams {
    pub fn to_matrix(&self) -> RotationMatrix3 {
        let mut matrix = RotationMatrix3::identity();
        matrix.rotate_z(self.gamb);
        matrix.rotate_x(self.phib);
        matrix.rotate_z(-self.psib);
        matrix.rotate_x(-self.epsa);
        matrix
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrecessionIAU2006;

impl PrecessionIAU2006 {
    pub fn new() -> Self {
        Self
    }

    /// Angles at `t` Julian centuries of TT since J2000.0.
    pub fn angles(&self, t: f64) -> FukushimaWilliams {
        FukushimaWilliams {
            gamb: polynomial(&GAMB, t) * ARCSEC_TO_RAD,
            phib: polynomial(&PHIB, t) * ARCSEC_TO_RAD,
            psib: polynomial(&PSIB, t) * ARCSEC_TO_RAD,
            epsa: polynomial(&EPSA, t) * ARCSEC_TO_RAD,
        }
    }

    /// Bias-precession matrix, GCRS to mean equator and equinox of date.
    pub fn bias_precession_matrix(&self, jd1: f64, jd2: f64) -> RotationMatrix3 {
        self.angles(jd_to_centuries(jd1, jd2)).to_matrix()
    }

    /// Frame bias alone: the bias-precession matrix at J2000.0.
    pub fn bias_matrix(&self) -> RotationMatrix3 {
        self.angles(0.0).to_matrix()
    }

    /// Nutation-precession-bias matrix, GCRS to true equator and equinox of date.
    ///
    /// `dpsi` and `deps` are the nutation in longitude and obliquity in radians.
    pub fn npb_matrix(&self, t: f64, dpsi: f64, deps: f64) -> RotationMatrix3 {
        let mut fw = self.angles(t);
        fw.psib += dpsi;
        fw.epsa += deps;
        fw.to_matrix()
    }
}
