//! Numerical building blocks for the skyframe coordinate pipeline.
//!
//! `skyframe-core` holds everything the higher crates need that does not depend on a
//! time scale or an observer: angles, 3×3 rotations, the IAU 2006 precession angles,
//! a truncated IAU 2000B nutation series, mean obliquity, and the CIO quantities
//! (CIP X/Y, CIO locator `s`, equation of the origins).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] newtype, normalization, validation, sexagesimal split |
//! | [`matrix`] | [`RotationMatrix3`] and [`Vector3`] |
//! | [`precession`] | IAU 2006 Fukushima-Williams angles and NPB matrix |
//! | [`nutation`] | Truncated IAU 2000B nutation in longitude and obliquity |
//! | [`obliquity`] | Mean obliquity of the ecliptic (IAU 2006, IAU 1980) |
//! | [`cio`] | GCRS→CIRS matrix, CIO locator, equation of the origins |
//! | [`constants`] | Astronomical and unit-conversion constants |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # GCRS → CIRS
//!
//! ```
//! use skyframe_core::nutation::NutationIAU2000B;
//! use skyframe_core::precession::PrecessionIAU2006;
//! use skyframe_core::{gcrs_to_cirs_matrix, CioSolution};
//!
//! let t = 0.2; // TT centuries since J2000.0
//! let nut = NutationIAU2000B::new().compute(2451545.0, t * 36525.0).unwrap();
//! let npb = PrecessionIAU2006::new().npb_matrix(t, nut.delta_psi, nut.delta_eps);
//! let cio = CioSolution::calculate(&npb, t).unwrap();
//! let c2i = gcrs_to_cirs_matrix(cio.cip.x, cio.cip.y, cio.s);
//! assert!(c2i.is_rotation_matrix(1e-12));
//! ```
//!
//! All angles are radians and all dates are two-part Julian dates `(jd1, jd2)`.

pub mod angle;
pub mod cio;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod utils;

pub use angle::Angle;
pub use cio::{gcrs_to_cirs_matrix, CioLocator, CioSolution, CipCoordinates, EquationOfOrigins};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
