//! Earth orientation parameters: polar motion, UT1−UTC and LOD.
//!
//! The transformer asks an [`EarthOrientation`] provider for values at the UTC
//! instant of each observation. [`EopTable`] interpolates daily records, usually
//! read with [`parse_finals`]; [`ZeroEop`] is the provider used when no data is
//! configured.

mod interpolate;
mod parse;
mod record;

pub use interpolate::{EopTable, InterpolationMethod};
pub use parse::{parse_finals, parse_finals_line};
pub use record::{EopParameters, EopRecord, EopSource};

use crate::CoordResult;
use skyframe_time::JulianDate;

pub trait EarthOrientation: Send + Sync {
    fn lookup(&self, utc: &JulianDate) -> CoordResult<EopParameters>;
}

/// Zero polar motion and UT1 = UTC at every instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroEop;

impl EarthOrientation for ZeroEop {
    fn lookup(&self, utc: &JulianDate) -> CoordResult<EopParameters> {
        Ok(EopParameters::zero(utc.to_mjd()))
    }
}

impl EarthOrientation for EopTable {
    fn lookup(&self, utc: &JulianDate) -> CoordResult<EopParameters> {
        self.get(utc.to_mjd())
    }
}
