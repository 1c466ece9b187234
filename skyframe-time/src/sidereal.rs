//! Greenwich and local sidereal time.
//!
//! GAST is taken CIO-based: `GAST = ERA − eo`, with the equation of the
//! origins from the IAU 2006/2000B NPB matrix at the TT date. GMST adds the
//! IAU 2006 polynomial to ERA.

use crate::rotation::earth_rotation_angle;
use crate::{JulianDate, TimeResult};
use skyframe_core::angle::wrap_0_2pi;
use skyframe_core::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use skyframe_core::math::polynomial;
use skyframe_core::nutation::NutationIAU2000B;
use skyframe_core::precession::PrecessionIAU2006;
use skyframe_core::CioSolution;

const GMST_POLY_ARCSEC: [f64; 6] = [
    0.014506,
    4612.156534,
    1.3915817,
    -0.00000044,
    -0.000029956,
    -0.0000000368,
];

fn tt_centuries(tt: &JulianDate) -> f64 {
    ((tt.jd1() - J2000_JD) + tt.jd2()) / DAYS_PER_JULIAN_CENTURY
}

pub fn greenwich_mean_sidereal_time(ut1: &JulianDate, tt: &JulianDate) -> f64 {
    let era = earth_rotation_angle(ut1);
    wrap_0_2pi(era + polynomial(&GMST_POLY_ARCSEC, tt_centuries(tt)) * ARCSEC_TO_RAD)
}

/// Equation of the origins (radians) at a TT date.
pub fn equation_of_origins(tt: &JulianDate) -> TimeResult<f64> {
    let t = tt_centuries(tt);
    let nut = NutationIAU2000B::new().compute(tt.jd1(), tt.jd2())?;
    let npb = PrecessionIAU2006::new().npb_matrix(t, nut.delta_psi, nut.delta_eps);
    Ok(CioSolution::calculate(&npb, t)?.equation_of_origins)
}

pub fn greenwich_apparent_sidereal_time(ut1: &JulianDate, tt: &JulianDate) -> TimeResult<f64> {
    let era = earth_rotation_angle(ut1);
    Ok(wrap_0_2pi(era - equation_of_origins(tt)?))
}

/// Local apparent sidereal time; `longitude` in radians, East positive.
pub fn local_apparent_sidereal_time(
    ut1: &JulianDate,
    tt: &JulianDate,
    longitude: f64,
) -> TimeResult<f64> {
    Ok(wrap_0_2pi(
        greenwich_apparent_sidereal_time(ut1, tt)? + longitude,
    ))
}
