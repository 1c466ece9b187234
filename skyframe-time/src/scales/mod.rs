//! Time scales and the conversions between them.
//!
//! ```text
//!   UTC ──leap seconds──► TAI ──+32.184 s──► TT ──periodic──► TDB
//!    │
//!    └──+ΔUT1──► UT1
//! ```

mod tt_tdb;
mod utc_tai;

pub use tt_tdb::{tai_to_tt, tdb_minus_tt, tdb_to_tt, tt_to_tai, tt_to_tdb};
pub use utc_tai::{tai_minus_utc, tai_to_utc, utc_to_tai, utc_to_ut1};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeScale {
    UTC,
    TAI,
    TT,
    TDB,
}

impl TimeScale {
    pub fn name(&self) -> &'static str {
        match self {
            TimeScale::UTC => "UTC",
            TimeScale::TAI => "TAI",
            TimeScale::TT => "TT",
            TimeScale::TDB => "TDB",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
