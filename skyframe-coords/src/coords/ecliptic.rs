//! Ecliptic coordinates and the obliquity rotation to and from equatorial.
//!
//! The rotation is evaluated with both `atan2` arguments scaled by the cosine of
//! the latitude, so the poles (δ or β = ±90°) need no special case.

use super::equatorial::Equatorial;
use crate::frame::Frame;
use crate::numeric::checked_asin;
use crate::quantities::Distance;
use crate::CoordResult;
use skyframe_core::angle::wrap_0_2pi;
use skyframe_core::nutation::NutationIAU2000B;
use skyframe_core::obliquity::iau_2006_mean_obliquity;
use skyframe_core::Angle;
use skyframe_time::Epoch;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ecliptic {
    lon: Angle,
    lat: Angle,
    distance: Option<Distance>,
}

impl Ecliptic {
    pub fn new(lon: Angle, lat: Angle) -> CoordResult<Self> {
        let lon = lon.validate_longitude(true)?;
        let lat = lat.validate_latitude()?;
        Ok(Self {
            lon,
            lat,
            distance: None,
        })
    }

    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(lon_deg), Angle::from_degrees(lat_deg))
    }

    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn lon(&self) -> Angle {
        self.lon
    }

    pub fn lat(&self) -> Angle {
        self.lat
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    /// Rotates to an astrometric equatorial position in `frame` at `epoch`.
    ///
    /// Without an explicit obliquity the IAU 2006 mean obliquity at the epoch is
    /// used.
    pub fn to_equatorial(
        &self,
        frame: Frame,
        epoch: Epoch,
        obliquity: Option<Angle>,
    ) -> CoordResult<Equatorial> {
        let eps = match obliquity {
            Some(eps) => eps,
            None => obliquity_at(&epoch, false)?,
        };
        let (ra, dec) = ecliptic_to_equatorial(self.lon.radians(), self.lat.radians(), eps)?;

        let mut eq = Equatorial::new(frame, epoch, Angle::from_radians(ra), Angle::from_radians(dec))?;
        eq.set_distance(self.distance);
        Ok(eq)
    }
}

impl fmt::Display for Ecliptic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ecliptic(λ={:.6}°, β={:+.6}°",
            self.lon.degrees(),
            self.lat.degrees()
        )?;
        if let Some(d) = self.distance {
            write!(f, ", d={}", d)?;
        }
        write!(f, ")")
    }
}

/// Obliquity of the ecliptic at `epoch`: IAU 2006 mean obliquity, plus the
/// IAU 2000B nutation in obliquity when `apparent` is set.
pub fn obliquity_at(epoch: &Epoch, apparent: bool) -> CoordResult<Angle> {
    let tt = epoch.to_tt()?;
    let mut eps = iau_2006_mean_obliquity(tt.jd1(), tt.jd2());
    if apparent {
        eps += NutationIAU2000B::new().compute(tt.jd1(), tt.jd2())?.delta_eps;
    }
    Ok(Angle::from_radians(eps))
}

/// (α, δ) → (λ, β), radians. λ in [0, 2π).
pub fn equatorial_to_ecliptic(ra: f64, dec: f64, obliquity: Angle) -> CoordResult<(f64, f64)> {
    let (se, ce) = obliquity.sin_cos();
    let (sa, ca) = libm::sincos(ra);
    let (sd, cd) = libm::sincos(dec);

    let lon = libm::atan2(sa * ce * cd + sd * se, ca * cd);
    let lat = checked_asin(sd * ce - cd * se * sa, "equatorial_to_ecliptic")?;
    Ok((wrap_0_2pi(lon), lat))
}

/// (λ, β) → (α, δ), radians. α in [0, 2π).
pub fn ecliptic_to_equatorial(lon: f64, lat: f64, obliquity: Angle) -> CoordResult<(f64, f64)> {
    let (se, ce) = obliquity.sin_cos();
    let (sl, cl) = libm::sincos(lon);
    let (sb, cb) = libm::sincos(lat);

    let ra = libm::atan2(sl * ce * cb - sb * se, cl * cb);
    let dec = checked_asin(sb * ce + cb * se * sl, "ecliptic_to_equatorial")?;
    Ok((wrap_0_2pi(ra), dec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn eps() -> Angle {
        Angle::from_degrees(23.4392794)
    }

    #[test]
    fn test_vernal_equinox_is_fixed_point() {
        let (lon, lat) = equatorial_to_ecliptic(0.0, 0.0, eps()).unwrap();
        assert_eq!((lon, lat), (0.0, 0.0));
    }

    #[test]
    fn test_summer_solstice() {
        let (ra, dec) = ecliptic_to_equatorial(FRAC_PI_2, 0.0, eps()).unwrap();
        assert!((ra - FRAC_PI_2).abs() < 1e-14);
        assert!((dec - eps().radians()).abs() < 1e-14);
    }

    #[test]
    fn test_celestial_pole() {
        let (lon, lat) = equatorial_to_ecliptic(1.234, FRAC_PI_2, eps()).unwrap();
        assert!((lon - FRAC_PI_2).abs() < 1e-12);
        assert!((lat - (FRAC_PI_2 - eps().radians())).abs() < 1e-12);

        let (_, lat_s) = equatorial_to_ecliptic(0.5, -FRAC_PI_2, eps()).unwrap();
        assert!((lat_s + (FRAC_PI_2 - eps().radians())).abs() < 1e-12);
    }

    #[test]
    fn test_ecliptic_pole() {
        let (ra, dec) = ecliptic_to_equatorial(2.0, FRAC_PI_2, eps()).unwrap();
        assert!((ra - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        assert!((dec - (FRAC_PI_2 - eps().radians())).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for &(ra, dec) in &[(0.3, 0.2), (4.0, -1.1), (6.2, 1.5), (3.14, -0.01)] {
            let (lon, lat) = equatorial_to_ecliptic(ra, dec, eps()).unwrap();
            let (ra2, dec2) = ecliptic_to_equatorial(lon, lat, eps()).unwrap();
            assert!((ra - ra2).abs() < 1e-12, "ra {}", ra);
            assert!((dec - dec2).abs() < 1e-12, "dec {}", dec);
        }
    }

    #[test]
    fn test_mean_obliquity_at_j2000() {
        let eps0 = obliquity_at(&Epoch::j2000(), false).unwrap();
        assert!((eps0.arcseconds() - 84381.406).abs() < 1e-6);
    }

    #[test]
    fn test_true_obliquity_differs_by_nutation() {
        let eps0 = obliquity_at(&Epoch::j2000(), false).unwrap();
        let eps = obliquity_at(&Epoch::j2000(), true).unwrap();
        let deps = (eps - eps0).arcseconds();
        assert!(deps.abs() > 1.0 && deps.abs() < 10.0);
    }

    #[test]
    fn test_new_validates_latitude() {
        assert!(Ecliptic::from_degrees(10.0, 95.0).is_err());
        let e = Ecliptic::from_degrees(-30.0, 10.0).unwrap();
        assert!((e.lon().degrees() - 330.0).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        let e = Ecliptic::from_degrees(90.0, -5.5).unwrap();
        assert_eq!(e.to_string(), "Ecliptic(λ=90.000000°, β=-5.500000°)");
    }
}
