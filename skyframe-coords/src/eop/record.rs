use crate::constants::S_PRIME_RATE_ARCSEC;
use crate::{CoordError, CoordResult};
use skyframe_core::constants::{ARCSEC_TO_RAD, MJD_ZERO_POINT};
use skyframe_core::utils::jd_to_centuries;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EopSource {
    IersFinals,

    /// finals2000A row whose UT1 value is flagged as a prediction.
    IersPrediction,

    UserData,

    Interpolated,

    Zero,
}

/// One daily Earth orientation sample, stored in fixed point (1e-7 arcsec / 1e-7 s).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EopRecord {
    pub mjd: f64,

    pub x_p_encoded: i32,

    pub y_p_encoded: i32,

    pub ut1_utc_encoded: i32,

    pub lod_encoded: i32,

    pub source: EopSource,
}

impl EopRecord {
    const ARCSEC_TO_UNITS: f64 = 10_000_000.0;
    const SEC_TO_UNITS: f64 = 10_000_000.0;

    pub fn new(
        mjd: f64,
        x_p_arcsec: f64,
        y_p_arcsec: f64,
        ut1_utc_sec: f64,
        lod_sec: f64,
    ) -> CoordResult<Self> {
        if !mjd.is_finite() {
            return Err(CoordError::invalid_argument(format!(
                "EOP epoch must be finite, got MJD {}",
                mjd
            )));
        }

        if !x_p_arcsec.is_finite() || x_p_arcsec.abs() > 6.0 {
            return Err(CoordError::invalid_argument(format!(
                "X polar motion out of range: {} arcsec",
                x_p_arcsec
            )));
        }

        if !y_p_arcsec.is_finite() || y_p_arcsec.abs() > 6.0 {
            return Err(CoordError::invalid_argument(format!(
                "Y polar motion out of range: {} arcsec",
                y_p_arcsec
            )));
        }

        if !ut1_utc_sec.is_finite() || ut1_utc_sec.abs() > 1.0 {
            return Err(CoordError::invalid_argument(format!(
                "UT1-UTC out of range: {} sec",
                ut1_utc_sec
            )));
        }

        if !lod_sec.is_finite() || lod_sec.abs() > 0.01 {
            return Err(CoordError::invalid_argument(format!(
                "LOD out of range: {} sec",
                lod_sec
            )));
        }

        Ok(Self {
            mjd,
            x_p_encoded: (x_p_arcsec * Self::ARCSEC_TO_UNITS).round() as i32,
            y_p_encoded: (y_p_arcsec * Self::ARCSEC_TO_UNITS).round() as i32,
            ut1_utc_encoded: (ut1_utc_sec * Self::SEC_TO_UNITS).round() as i32,
            lod_encoded: (lod_sec * Self::SEC_TO_UNITS).round() as i32,
            source: EopSource::UserData,
        })
    }

    pub fn with_source(mut self, source: EopSource) -> Self {
        self.source = source;
        self
    }

    pub fn x_p(&self) -> f64 {
        self.x_p_encoded as f64 / Self::ARCSEC_TO_UNITS
    }

    pub fn y_p(&self) -> f64 {
        self.y_p_encoded as f64 / Self::ARCSEC_TO_UNITS
    }

    pub fn ut1_utc(&self) -> f64 {
        self.ut1_utc_encoded as f64 / Self::SEC_TO_UNITS
    }

    pub fn lod(&self) -> f64 {
        self.lod_encoded as f64 / Self::SEC_TO_UNITS
    }

    pub fn to_parameters(&self) -> EopParameters {
        EopParameters::new(
            self.mjd,
            self.x_p(),
            self.y_p(),
            self.ut1_utc(),
            self.lod(),
            self.source,
        )
    }
}

/// Decoded Earth orientation at one UTC instant.
///
/// Polar motion is in arcseconds, ΔUT1 and LOD in seconds, `s_prime` in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EopParameters {
    pub mjd: f64,

    pub x_p: f64,

    pub y_p: f64,

    pub ut1_utc: f64,

    pub lod: f64,

    pub s_prime: f64,

    pub source: EopSource,
}

impl EopParameters {
    pub fn new(mjd: f64, x_p: f64, y_p: f64, ut1_utc: f64, lod: f64, source: EopSource) -> Self {
        let mut params = Self {
            mjd,
            x_p,
            y_p,
            ut1_utc,
            lod,
            s_prime: 0.0,
            source,
        };
        params.compute_s_prime();
        params
    }

    /// All-zero orientation at `mjd`.
    pub fn zero(mjd: f64) -> Self {
        Self::new(mjd, 0.0, 0.0, 0.0, 0.0, EopSource::Zero)
    }

    /// TIO locator s′ ≈ −47 µas × t, t in Julian centuries from J2000.0.
    pub fn compute_s_prime(&mut self) {
        let t = jd_to_centuries(MJD_ZERO_POINT, self.mjd);
        self.s_prime = S_PRIME_RATE_ARCSEC * t * ARCSEC_TO_RAD;
    }

    pub fn x_p_radians(&self) -> f64 {
        self.x_p * ARCSEC_TO_RAD
    }

    pub fn y_p_radians(&self) -> f64 {
        self.y_p * ARCSEC_TO_RAD
    }
}

impl fmt::Display for EopParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EOP(MJD {:.3}: xp={:.6}\", yp={:.6}\", UT1-UTC={:.7} s)",
            self.mjd, self.x_p, self.y_p, self.ut1_utc
        )
    }
}
