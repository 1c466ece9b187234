//! TAI ↔ TT ↔ TDB.
//!
//! TDB − TT is modelled by its two leading periodic terms (about 1.7 ms
//! peak), driven by the Earth's mean anomaly. Diurnal terms are dropped.

use crate::constants::TT_MINUS_TAI;
use crate::julian::JulianDate;
use skyframe_core::constants::{DEG_TO_RAD, J2000_JD};
use skyframe_core::math::fmod;

pub fn tai_to_tt(tai: JulianDate) -> JulianDate {
    tai.add_seconds(TT_MINUS_TAI)
}

pub fn tt_to_tai(tt: JulianDate) -> JulianDate {
    tt.add_seconds(-TT_MINUS_TAI)
}

/// TDB − TT in seconds at the given TT date.
pub fn tdb_minus_tt(tt: JulianDate) -> f64 {
    let days = (tt.jd1() - J2000_JD) + tt.jd2();
    let g = fmod(357.53 + 0.98560028 * days, 360.0) * DEG_TO_RAD;
    0.001657 * libm::sin(g) + 0.000014 * libm::sin(2.0 * g)
}

pub fn tt_to_tdb(tt: JulianDate) -> JulianDate {
    tt.add_seconds(tdb_minus_tt(tt))
}

pub fn tdb_to_tt(tdb: JulianDate) -> JulianDate {
    // Evaluating at TDB instead of TT moves g by ~2e-8 degrees.
    let first = tdb.add_seconds(-tdb_minus_tt(tdb));
    tdb.add_seconds(-tdb_minus_tt(first))
}
