//! Time scales and epochs for the skyframe pipeline.
//!
//! An [`Epoch`] is an instant tagged with its [`TimeScale`]. It converts to a
//! two-part [`JulianDate`] in UTC, TAI, TT or TDB, derives UT1 from a supplied
//! ΔUT1, and yields the Earth rotation angle and sidereal times.
//!
//! ```
//! use skyframe_time::{Epoch, TimeScale};
//!
//! let epoch = Epoch::from_calendar(TimeScale::UTC, 2024, 3, 20, 3, 6, 0.0).unwrap();
//! let tt = epoch.to_tt().unwrap();
//! let utc = epoch.to_utc().unwrap();
//! // TT − UTC = 37 s + 32.184 s since 2017.
//! assert!(((tt.to_f64() - utc.to_f64()) * 86400.0 - 69.184).abs() < 1e-4);
//! ```

pub mod calendar;
pub mod constants;
pub mod epoch;
pub mod julian;
pub mod rotation;
pub mod scales;
pub mod sidereal;

pub use epoch::Epoch;
pub use julian::JulianDate;
pub use scales::TimeScale;

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),
}

impl From<skyframe_core::AstroError> for TimeError {
    fn from(err: skyframe_core::AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimeError::InvalidDate("month 13".into());
        assert_eq!(err.to_string(), "Invalid date: month 13");
    }

    #[test]
    fn test_from_astro_error() {
        let core = skyframe_core::AstroError::calculation_error("nutation", "bad");
        let err: TimeError = core.into();
        assert!(matches!(err, TimeError::CalculationError(_)));
    }
}
