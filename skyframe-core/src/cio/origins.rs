//! Equation of the origins.
//!
//! `eo` is the arc on the CIP equator from the CIO to the true equinox, so
//! `GAST = ERA − eo` and an equinox-based right ascension is the CIO-based one
//! minus `eo`.

use crate::constants::ARCSEC_PER_RAD;
use crate::errors::AstroResult;
use crate::matrix::RotationMatrix3;

pub struct EquationOfOrigins;

impl EquationOfOrigins {
    /// Rigorous `eo` from the NPB matrix and the locator `s`, radians.
    pub fn from_npb_and_locator(npb_matrix: &RotationMatrix3, s: f64) -> AstroResult<f64> {
        let m = npb_matrix.elements();

        let x = m[2][0];
        let ax = x / (1.0 + m[2][2]);
        let xs = 1.0 - ax * x;
        let ys = -ax * m[2][1];
        let zs = -x;

        let p = m[0][0] * xs + m[0][1] * ys + m[0][2] * zs;
        let q = m[1][0] * xs + m[1][1] * ys + m[1][2] * zs;

        Ok(if p != 0.0 || q != 0.0 {
            s - libm::atan2(q, p)
        } else {
            s
        })
    }

    pub fn to_arcseconds(eo_radians: f64) -> f64 {
        eo_radians * ARCSEC_PER_RAD
    }
}
