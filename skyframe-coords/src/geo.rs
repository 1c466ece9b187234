//! Observer location on a reference ellipsoid.
//!
//! Longitudes are East positive. Parallax constants follow the usual
//! reduced-latitude construction:
//!
//! ```text
//! u        = atan2(b sin φ, a cos φ)
//! ρ sin φ′ = (b/a) sin u + (h/a) sin φ
//! ρ cos φ′ =       cos u + (h/a) cos φ
//! ```

use crate::{CoordError, CoordResult};
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    equatorial_radius_km: f64,
    flattening: f64,
}

impl Ellipsoid {
    pub fn new(equatorial_radius_km: f64, flattening: f64) -> CoordResult<Self> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "Equatorial radius must be positive, got {} km",
                equatorial_radius_km
            )));
        }
        if !(0.0..1.0).contains(&flattening) {
            return Err(CoordError::invalid_argument(format!(
                "Flattening must be in [0, 1), got {}",
                flattening
            )));
        }
        Ok(Self {
            equatorial_radius_km,
            flattening,
        })
    }

    pub const fn iau1976() -> Self {
        Self {
            equatorial_radius_km: 6378.14,
            flattening: 1.0 / 298.257,
        }
    }

    pub const fn wgs84() -> Self {
        Self {
            equatorial_radius_km: 6378.137,
            flattening: 1.0 / 298.257223563,
        }
    }

    pub fn equatorial_radius_km(&self) -> f64 {
        self.equatorial_radius_km
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1.0 - self.flattening)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::iau1976()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geo {
    lat: Angle,
    lon: Angle,
    height_m: f64,
    ellipsoid: Ellipsoid,
}

impl Geo {
    /// Latitude in [−90°, +90°], longitude in [−180°, +180°] (East positive),
    /// height ≥ 0 m above the IAU 1976 ellipsoid.
    pub fn new(lat: Angle, lon: Angle, height_m: f64) -> CoordResult<Self> {
        let lat = lat.validate_latitude()?;
        if !lon.is_finite() || lon.degrees().abs() > 180.0 {
            return Err(CoordError::invalid_argument(format!(
                "Longitude {:.6}° out of range [-180°, +180°]",
                lon.degrees()
            )));
        }
        if !height_m.is_finite() || height_m < 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "Height must be non-negative, got {} m",
                height_m
            )));
        }
        Ok(Self {
            lat,
            lon,
            height_m,
            ellipsoid: Ellipsoid::iau1976(),
        })
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_m: f64) -> CoordResult<Self> {
        Self::new(
            Angle::from_degrees(lat_deg),
            Angle::from_degrees(lon_deg),
            height_m,
        )
    }

    /// Lat = lon = 0, sea level.
    pub fn geocenter_surface() -> Self {
        Self {
            lat: Angle::ZERO,
            lon: Angle::ZERO,
            height_m: 0.0,
            ellipsoid: Ellipsoid::iau1976(),
        }
    }

    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    pub fn lat(&self) -> Angle {
        self.lat
    }

    pub fn lon(&self) -> Angle {
        self.lon
    }

    pub fn height(&self) -> f64 {
        self.height_m
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    pub fn is_east(&self) -> bool {
        self.lon.radians() > 0.0
    }

    pub fn is_west(&self) -> bool {
        self.lon.radians() < 0.0
    }

    /// `(ρ sin φ′, ρ cos φ′)` in units of the equatorial radius.
    ///
    /// `height_m` overrides the stored height when given.
    pub fn parallax_constants(&self, height_m: Option<f64>) -> (f64, f64) {
        let h = height_m.unwrap_or(self.height_m);
        let a = self.ellipsoid.equatorial_radius_km * 1000.0;
        let b_over_a = 1.0 - self.ellipsoid.flattening;
        let h_over_a = h / a;

        let (sin_phi, cos_phi) = self.lat.sin_cos();
        let u = libm::atan2(b_over_a * sin_phi, cos_phi);
        let (sin_u, cos_u) = libm::sincos(u);

        (
            b_over_a * sin_u + h_over_a * sin_phi,
            cos_u + h_over_a * cos_phi,
        )
    }

    pub fn geocentric_latitude(&self) -> Angle {
        let (rho_sin, rho_cos) = self.parallax_constants(None);
        Angle::from_radians(libm::atan2(rho_sin, rho_cos))
    }

    /// Distance from the geocentre in km.
    pub fn geocentric_radius(&self) -> f64 {
        let (rho_sin, rho_cos) = self.parallax_constants(None);
        libm::hypot(rho_sin, rho_cos) * self.ellipsoid.equatorial_radius_km
    }

    /// Distance from the rotation axis in metres.
    pub fn axis_distance_m(&self) -> f64 {
        let (_, rho_cos) = self.parallax_constants(None);
        rho_cos * self.ellipsoid.equatorial_radius_km * 1000.0
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Geo(lat={:+.6}°, lon={:+.6}°, h={:.1} m)",
            self.lat.degrees(),
            self.lon.degrees(),
            self.height_m
        )
    }
}
