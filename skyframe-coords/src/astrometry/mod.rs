//! Elementary astrometry: the two stages the transformation engine chains.
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | [`Astrometry::icrs_to_cirs`] | catalog RA/Dec, distance, TDB | CIRS RA/Dec, equation of the origins |
//! | [`Astrometry::cirs_to_observed`] | CIRS RA/Dec, [`ObservedRequest`] | az, zd, HA, observed Dec/RA |
//!
//! [`StandardAstrometry`] is the built-in implementation. Supply another through
//! the transformer builder to swap in a higher-precision ephemeris.

mod aberration;
mod cirs;
mod earth;
mod observed;
mod refraction;

pub use aberration::{apply_aberration, apply_annual_parallax, apply_light_deflection};
pub use cirs::icrs_to_cirs;
pub use earth::{earth_state, EarthState};
pub use observed::{cirs_to_observed, ObserverFrame};
pub use refraction::{clamp_altitude, RefractionConstants};

use crate::constants::DEFAULT_WAVELENGTH_UM;
use crate::geo::Geo;
use crate::CoordResult;
use skyframe_time::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of ICRS → CIRS. Radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CirsPlace {
    pub ra: f64,
    pub dec: f64,
    /// Equation of the origins, ERA − GAST.
    pub eo: f64,
}

/// Everything CIRS → observed needs besides the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedRequest {
    pub utc: JulianDate,
    /// UT1 − UTC, seconds.
    pub dut1: f64,
    pub observer: Geo,
    /// Polar motion, radians.
    pub xp: f64,
    pub yp: f64,
    pub pressure_hpa: f64,
    pub temperature_c: f64,
    /// Fraction in [0, 1].
    pub humidity: f64,
    pub wavelength_um: f64,
    /// Equatorial horizontal parallax of the target, radians.
    pub horizontal_parallax: f64,
}

impl ObservedRequest {
    /// Zero EOP, no atmosphere, target at infinity.
    pub fn new(utc: JulianDate, observer: Geo) -> Self {
        Self {
            utc,
            dut1: 0.0,
            observer,
            xp: 0.0,
            yp: 0.0,
            pressure_hpa: 0.0,
            temperature_c: 0.0,
            humidity: 0.0,
            wavelength_um: DEFAULT_WAVELENGTH_UM,
            horizontal_parallax: 0.0,
        }
    }
}

/// Observed place. Radians; azimuth N = 0, E = π/2; RA is CIO-based.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservedPlace {
    pub azimuth: f64,
    pub zenith_distance: f64,
    pub hour_angle: f64,
    pub dec: f64,
    pub ra: f64,
}

pub trait Astrometry: Send + Sync {
    fn icrs_to_cirs(
        &self,
        ra: f64,
        dec: f64,
        distance_au: Option<f64>,
        tdb: &JulianDate,
    ) -> CoordResult<CirsPlace>;

    fn cirs_to_observed(
        &self,
        ra: f64,
        dec: f64,
        request: &ObservedRequest,
    ) -> CoordResult<ObservedPlace>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAstrometry;

impl Astrometry for StandardAstrometry {
    fn icrs_to_cirs(
        &self,
        ra: f64,
        dec: f64,
        distance_au: Option<f64>,
        tdb: &JulianDate,
    ) -> CoordResult<CirsPlace> {
        icrs_to_cirs(ra, dec, distance_au, tdb)
    }

    fn cirs_to_observed(
        &self,
        ra: f64,
        dec: f64,
        request: &ObservedRequest,
    ) -> CoordResult<ObservedPlace> {
        Ok(cirs_to_observed(ra, dec, request))
    }
}
