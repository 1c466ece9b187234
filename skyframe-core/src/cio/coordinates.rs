//! X/Y of the Celestial Intermediate Pole.

use crate::constants::ARCSEC_PER_RAD;
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::RotationMatrix3;

/// The CIP unit vector's GCRS x and y components, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
}

impl CipCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reads X and Y from the third row of an NPB matrix.
    ///
    /// Values beyond 0.2 rad cannot come from a real precession-nutation matrix
    /// within several millennia of J2000.0 and are rejected.
    pub fn from_npb_matrix(npb_matrix: &RotationMatrix3) -> AstroResult<Self> {
        let x = npb_matrix.get(2, 0);
        let y = npb_matrix.get(2, 1);

        if x.abs() > 0.2 || y.abs() > 0.2 {
            return Err(AstroError::math_error(
                "CipCoordinates::from_npb_matrix",
                MathErrorKind::OutOfRange,
                &format!("CIP X={x:.6}, Y={y:.6} out of range"),
            ));
        }

        Ok(Self { x, y })
    }

    pub fn to_arcseconds(&self) -> (f64, f64) {
        (self.x * ARCSEC_PER_RAD, self.y * ARCSEC_PER_RAD)
    }
}
