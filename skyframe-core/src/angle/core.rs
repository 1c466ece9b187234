//! The [`Angle`] newtype.
//!
//! Angles are stored as radians so they feed trigonometry directly. Constructors
//! and accessors cover the units the pipeline talks in: degrees for latitudes and
//! altitudes, hours for right ascension and sidereal time, arcseconds for
//! polar motion and parallax.
//!
//! ```
//! use skyframe_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-12);
//!
//! let xp = Angle::from_arcseconds(0.1);
//! assert!((xp.arcseconds() - 0.1).abs() < 1e-12);
//! ```

use crate::constants::{ARCSEC_TO_RAD, DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG, TWOPI};

/// An angular measurement stored as radians.
///
/// `PartialOrd` compares the raw radian values; `Eq`/`Ord` are absent because of NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    /// 90°, the declination of the celestial poles.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    pub const FULL_TURN: Self = Self { rad: TWOPI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Creates an angle from hours, where 24h is a full turn.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: h * 15.0 * DEG_TO_RAD,
        }
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    #[inline]
    pub fn from_arcminutes(arcmin: f64) -> Self {
        Self {
            rad: arcmin * 60.0 * ARCSEC_TO_RAD,
        }
    }

    /// Builds an angle from sexagesimal degrees, arcminutes and arcseconds.
    ///
    /// The sign is taken from `negative`, so `-0° 30'` can be expressed.
    ///
    /// ```
    /// use skyframe_core::Angle;
    ///
    /// let dec = Angle::from_dms(true, 0.0, 30.0, 0.0);
    /// assert!((dec.degrees() + 0.5).abs() < 1e-12);
    /// ```
    pub fn from_dms(negative: bool, deg: f64, min: f64, sec: f64) -> Self {
        let magnitude = deg.abs() + min.abs() / 60.0 + sec.abs() / 3600.0;
        Self::from_degrees(if negative { -magnitude } else { magnitude })
    }

    /// Builds an angle from hours, minutes and seconds of time.
    pub fn from_hms(h: f64, m: f64, s: f64) -> Self {
        Self::from_hours(h + m / 60.0 + s / 3600.0)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.rad / ARCSEC_TO_RAD
    }

    #[inline]
    pub fn arcminutes(self) -> f64 {
        self.arcseconds() / 60.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn tan(self) -> f64 {
        libm::tan(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Wraps to [-π, +π).
    ///
    /// ```
    /// use skyframe_core::Angle;
    ///
    /// let ha = Angle::from_degrees(270.0).wrapped();
    /// assert!((ha.degrees() + 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Normalizes to [0, 2π).
    ///
    /// ```
    /// use skyframe_core::Angle;
    ///
    /// let ra = Angle::from_degrees(-90.0).normalized();
    /// assert!((ra.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }

    /// Validates as a longitude; `normalize` wraps into [0, 2π) instead of range-checking.
    #[inline]
    pub fn validate_longitude(self, normalize: bool) -> Result<Self, crate::AstroError> {
        super::validate::validate_longitude(self, normalize)
    }

    /// Validates as a latitude in [-90°, +90°].
    #[inline]
    pub fn validate_latitude(self) -> Result<Self, crate::AstroError> {
        super::validate::validate_latitude(self)
    }

    /// Validates as a declination in [-90°, +90°].
    #[inline]
    pub fn validate_declination(self) -> Result<Self, crate::AstroError> {
        super::validate::validate_declination(self)
    }

    /// Accepts any finite angle and normalizes it to [0, 2π).
    #[inline]
    pub fn validate_right_ascension(self) -> Result<Self, crate::AstroError> {
        super::validate::validate_right_ascension(self)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}

#[inline]
pub fn arcsec(v: f64) -> Angle {
    Angle::from_arcseconds(v)
}
