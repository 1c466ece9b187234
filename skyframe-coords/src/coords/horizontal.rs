use crate::quantities::Distance;
use crate::CoordResult;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Altitude/azimuth as seen by an observer. Azimuth is measured from North
/// through East.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Horizontal {
    alt: Angle,
    az: Angle,
    distance: Option<Distance>,
    refracted: bool,
}

impl Horizontal {
    pub fn new(alt: Angle, az: Angle) -> CoordResult<Self> {
        let alt = alt.validate_latitude()?;
        let az = az.validate_longitude(true)?;
        Ok(Self {
            alt,
            az,
            distance: None,
            refracted: false,
        })
    }

    pub fn from_degrees(alt_deg: f64, az_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(alt_deg), Angle::from_degrees(az_deg))
    }

    pub(crate) fn observed(
        zenith_distance: f64,
        azimuth: f64,
        distance: Option<Distance>,
        refracted: bool,
    ) -> Self {
        Self {
            alt: Angle::from_radians(std::f64::consts::FRAC_PI_2 - zenith_distance),
            az: Angle::from_radians(azimuth).normalized(),
            distance,
            refracted,
        }
    }

    pub fn alt(&self) -> Angle {
        self.alt
    }

    pub fn az(&self) -> Angle {
        self.az
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    /// True when the weather that produced this position had non-zero pressure.
    pub fn is_refracted(&self) -> bool {
        self.refracted
    }

    pub fn zenith_distance(&self) -> Angle {
        Angle::HALF_PI - self.alt
    }

    /// Kasten & Young (1989) relative air mass; 38 at or below the horizon.
    pub fn air_mass(&self) -> f64 {
        let zenith_deg = self.zenith_distance().degrees();
        if zenith_deg >= 90.0 {
            return 38.0;
        }
        let cos_z = self.zenith_distance().cos();
        let term = libm::pow(96.07995 - zenith_deg, -1.6364);
        1.0 / (cos_z + 0.50572 * term)
    }

    pub fn is_above_horizon(&self) -> bool {
        self.alt.degrees() > 0.0
    }

    /// Eight-point compass direction of the azimuth.
    pub fn cardinal_direction(&self) -> &'static str {
        let az_deg = self.az.degrees();
        if !(22.5..337.5).contains(&az_deg) {
            "N"
        } else if az_deg < 67.5 {
            "NE"
        } else if az_deg < 112.5 {
            "E"
        } else if az_deg < 157.5 {
            "SE"
        } else if az_deg < 202.5 {
            "S"
        } else if az_deg < 247.5 {
            "SW"
        } else if az_deg < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alt {:+.6}° Az {:.6}° ({})",
            self.alt.degrees(),
            self.az.degrees(),
            self.cardinal_direction()
        )?;
        if let Some(d) = self.distance {
            write!(f, " d={}", d)?;
        }
        if self.refracted {
            write!(f, " refracted")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_altitude() {
        assert!(Horizontal::from_degrees(91.0, 0.0).is_err());
        assert!(Horizontal::from_degrees(-90.0, 0.0).is_ok());
    }

    #[test]
    fn test_azimuth_normalized() {
        let h = Horizontal::from_degrees(10.0, -90.0).unwrap();
        assert!((h.az().degrees() - 270.0).abs() < 1e-10);
        assert_eq!(h.cardinal_direction(), "W");
    }

    #[test]
    fn test_zenith_distance() {
        let h = Horizontal::from_degrees(30.0, 0.0).unwrap();
        assert!((h.zenith_distance().degrees() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_air_mass() {
        let zenith = Horizontal::from_degrees(90.0, 0.0).unwrap();
        assert!((zenith.air_mass() - 1.0).abs() < 1e-3);

        let thirty = Horizontal::from_degrees(30.0, 0.0).unwrap();
        assert!((thirty.air_mass() - 1.9943).abs() < 1e-3);

        let below = Horizontal::from_degrees(-5.0, 0.0).unwrap();
        assert_eq!(below.air_mass(), 38.0);
    }

    #[test]
    fn test_cardinal_directions() {
        let cases = [
            (0.0, "N"),
            (350.0, "N"),
            (45.0, "NE"),
            (90.0, "E"),
            (135.0, "SE"),
            (180.0, "S"),
            (225.0, "SW"),
            (270.0, "W"),
            (315.0, "NW"),
        ];
        for (az, expected) in cases {
            let h = Horizontal::from_degrees(10.0, az).unwrap();
            assert_eq!(h.cardinal_direction(), expected, "az {}", az);
        }
    }

    #[test]
    fn test_observed_constructor() {
        let h = Horizontal::observed(std::f64::consts::FRAC_PI_4, -0.1, None, true);
        assert!((h.alt().degrees() - 45.0).abs() < 1e-12);
        assert!(h.az().radians() > 6.0);
        assert!(h.is_refracted());
        assert!(h.is_above_horizon());
    }

    #[test]
    fn test_display() {
        let h = Horizontal::from_degrees(45.0, 180.0).unwrap();
        assert_eq!(h.to_string(), "Alt +45.000000° Az 180.000000° (S)");
    }
}
