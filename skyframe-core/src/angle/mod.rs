//! Angles and the conventions for keeping them in range.
//!
//! [`Angle`] stores radians. The free functions in this module wrap raw radian values
//! into the ranges used throughout the pipeline, and [`Sexagesimal`] splits an angle
//! into the base-60 fields used by the coordinate formatter.

mod core;
mod format;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
mod validate;

pub use core::Angle;
pub use format::{Sexagesimal, SexagesimalUnit};
pub use normalize::{clamp_dec, clamped_asin, wrap_0_2pi, wrap_pm_pi, ASIN_TOLERANCE};
pub use validate::{
    validate_declination, validate_latitude, validate_longitude, validate_right_ascension,
};

pub use core::{arcsec, deg, hours, rad};
