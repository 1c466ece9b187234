//! CIO-based GCRS→CIRS quantities.
//!
//! - [`CipCoordinates`]: X/Y of the Celestial Intermediate Pole, read off the NPB matrix
//! - [`CioLocator`]: the CIO locator `s`
//! - [`EquationOfOrigins`]: the arc from the CIO to the true equinox
//! - [`CioSolution`]: the three bundled for one date
//!
//! Right ascension measured from the CIO (CIRS) and from the equinox differ by the
//! equation of the origins: `α_equinox = α_CIO − eo`.

pub mod coordinates;
pub mod locator;
pub mod origins;

pub use coordinates::CipCoordinates;
pub use locator::CioLocator;
pub use origins::EquationOfOrigins;

use crate::errors::AstroResult;
use crate::matrix::RotationMatrix3;

/// GCRS→CIRS matrix `Rz(−(E+s))·Ry(d)·Rz(E)` from the CIP X, Y and the locator `s`.
pub fn gcrs_to_cirs_matrix(x: f64, y: f64, s: f64) -> RotationMatrix3 {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { libm::atan2(y, x) } else { 0.0 };
    let d = libm::atan(libm::sqrt(r2 / (1.0 - r2)));

    let mut matrix = RotationMatrix3::identity();
    matrix.rotate_z(e);
    matrix.rotate_y(d);
    matrix.rotate_z(-(e + s));
    matrix
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CioSolution {
    pub cip: CipCoordinates,
    /// CIO locator, radians.
    pub s: f64,
    /// Equation of the origins, radians.
    pub equation_of_origins: f64,
}

impl CioSolution {
    /// Derives all CIO quantities from an NPB matrix at `tt_centuries`.
    pub fn calculate(npb_matrix: &RotationMatrix3, tt_centuries: f64) -> AstroResult<Self> {
        let cip = CipCoordinates::from_npb_matrix(npb_matrix)?;
        let s = CioLocator::new(tt_centuries).calculate(cip.x, cip.y)?;
        let equation_of_origins = EquationOfOrigins::from_npb_and_locator(npb_matrix, s)?;

        Ok(Self {
            cip,
            s,
            equation_of_origins,
        })
    }

    pub fn gcrs_to_cirs(&self) -> RotationMatrix3 {
        gcrs_to_cirs_matrix(self.cip.x, self.cip.y, self.s)
    }
}
