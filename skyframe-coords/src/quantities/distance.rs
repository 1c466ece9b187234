use crate::constants::SOLAR_PARALLAX_ARCSEC;
use crate::{CoordError, CoordResult};
use skyframe_core::angle::clamped_asin;
use skyframe_core::constants::{ARCSEC_PER_RAD, ARCSEC_TO_RAD, AU_KM};
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LY_TO_AU: f64 = 63241.07708426628;

/// A positive, finite distance. Stored in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    au: f64,
}

impl Distance {
    /// # Errors
    /// `InvalidArgument` if the value is ≤ 0, infinite or NaN.
    pub fn from_au(au: f64) -> CoordResult<Self> {
        if !au.is_finite() || au <= 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "Distance must be positive and finite, got {} AU",
                au
            )));
        }
        Ok(Self { au })
    }

    pub fn from_parsecs(parsecs: f64) -> CoordResult<Self> {
        Self::from_au(parsecs * ARCSEC_PER_RAD)
    }

    pub fn from_kilometers(km: f64) -> CoordResult<Self> {
        Self::from_au(km / AU_KM)
    }

    pub fn from_light_years(ly: f64) -> CoordResult<Self> {
        Self::from_au(ly * LY_TO_AU)
    }

    /// Distance (pc) = 1 / parallax (arcsec).
    pub fn from_parallax_arcsec(parallax_arcsec: f64) -> CoordResult<Self> {
        if !parallax_arcsec.is_finite() || parallax_arcsec <= 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "Parallax must be positive and finite, got {} arcsec",
                parallax_arcsec
            )));
        }
        Self::from_parsecs(1.0 / parallax_arcsec)
    }

    pub fn au(self) -> f64 {
        self.au
    }

    pub fn parsecs(self) -> f64 {
        self.au / ARCSEC_PER_RAD
    }

    pub fn kilometers(self) -> f64 {
        self.au * AU_KM
    }

    pub fn light_years(self) -> f64 {
        self.au / LY_TO_AU
    }

    pub fn parallax_arcsec(self) -> f64 {
        1.0 / self.parsecs()
    }

    /// Equatorial horizontal parallax, `asin(8.794″ / d)`.
    ///
    /// # Errors
    /// `NumericDomain` for bodies closer than one Earth radius.
    pub fn horizontal_parallax(self) -> CoordResult<Angle> {
        let sin_pi = SOLAR_PARALLAX_ARCSEC * ARCSEC_TO_RAD / self.au;
        Ok(Angle::from_radians(clamped_asin(sin_pi, "horizontal_parallax")?))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.au < 1000.0 {
            write!(f, "{:.6} AU", self.au)
        } else {
            write!(f, "{:.3} pc", self.parsecs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(Distance::from_au(0.0).unwrap_err().is_invalid_argument());
        assert!(Distance::from_au(-1.0).is_err());
        assert!(Distance::from_au(f64::NAN).is_err());
        assert!(Distance::from_parallax_arcsec(0.0).is_err());
    }

    #[test]
    fn test_unit_conversions() {
        let d = Distance::from_parsecs(1.0).unwrap();
        assert!((d.au() - 206264.806).abs() < 1e-3);
        assert!((d.light_years() - 3.2616).abs() < 1e-4);
        assert!((d.parallax_arcsec() - 1.0).abs() < 1e-12);
        let km = Distance::from_kilometers(AU_KM).unwrap();
        assert!((km.au() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_horizontal_parallax_moon() {
        // Mean lunar distance, about 57 arcminutes.
        let moon = Distance::from_kilometers(384_400.0).unwrap();
        let hp = moon.horizontal_parallax().unwrap();
        assert!((hp.arcminutes() - 57.04).abs() < 0.05);
    }

    #[test]
    fn test_horizontal_parallax_inside_earth_fails() {
        let d = Distance::from_kilometers(1000.0).unwrap();
        assert!(matches!(
            d.horizontal_parallax(),
            Err(CoordError::NumericDomain { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::from_au(1.5).unwrap().to_string(), "1.500000 AU");
        assert_eq!(Distance::from_parsecs(10.0).unwrap().to_string(), "10.000 pc");
    }
}
