//! Gregorian calendar ↔ Julian date conversion.
//!
//! Both directions work on whole days in integer arithmetic and carry the
//! day fraction separately, so a two-part Julian date keeps its precision.

use crate::{TimeError, TimeResult};
use skyframe_core::constants::MJD_ZERO_POINT;

const DJMIN: f64 = -68569.5;
const DJMAX: f64 = 1e9;

/// Earliest year `calendar_to_julian` accepts.
pub const MIN_YEAR: i32 = -4799;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: i32) -> TimeResult<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(TimeError::InvalidDate(format!("month {} out of range", month))),
    }
}

pub fn next_calendar_day(year: i32, month: i32, day: i32) -> TimeResult<(i32, i32, i32)> {
    let last = days_in_month(year, month)?;
    if day < last {
        Ok((year, month, day + 1))
    } else if month < 12 {
        Ok((year, month + 1, 1))
    } else {
        Ok((year + 1, 1, 1))
    }
}

/// Validates a calendar date and returns it as `(MJD_ZERO_POINT, mjd)` at 0h.
pub fn calendar_to_julian(year: i32, month: i32, day: i32) -> TimeResult<(f64, f64)> {
    if year < MIN_YEAR {
        return Err(TimeError::InvalidDate(format!(
            "year {} before {}",
            year, MIN_YEAR
        )));
    }
    let last = days_in_month(year, month)?;
    if day < 1 || day > last {
        return Err(TimeError::InvalidDate(format!(
            "day {} outside 1..={} for {}-{:02}",
            day, last, year, month
        )));
    }
    Ok((MJD_ZERO_POINT, modified_julian_day(year, month, day) as f64))
}

/// MJD of 0h on the given date. No validation.
pub(crate) fn modified_julian_day(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let my = (month - 14) / 12;
    let iypmy = year + my;
    (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2432076
}

fn nearest_int(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        (a - 0.5).ceil()
    } else {
        (a + 0.5).floor()
    }
}

/// Two-part Julian date to `(year, month, day, fraction_of_day)`.
pub fn julian_to_calendar(jd1: f64, jd2: f64) -> TimeResult<(i32, i32, i32, f64)> {
    let dj = jd1 + jd2;
    if !(DJMIN..=DJMAX).contains(&dj) {
        return Err(TimeError::ConversionError(format!(
            "Julian Date {} out of valid range [{}, {}]",
            dj, DJMIN, DJMAX
        )));
    }

    let day_1 = nearest_int(jd1);
    let day_2 = nearest_int(jd2);
    let mut jd = day_1 as i64 + day_2 as i64;

    // Fractions are measured from noon; shift to midnight and fold into [0, 1).
    let mut fraction = 0.5 + (jd1 - day_1) + (jd2 - day_2);
    while fraction >= 1.0 {
        fraction -= 1.0;
        jd += 1;
    }
    while fraction < 0.0 {
        fraction += 1.0;
        jd -= 1;
    }

    let mut l = jd + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = (l - (2447 * k) / 80) as i32;
    let l_final = k / 11;
    let month = (k + 2 - 12 * l_final) as i32;
    let year = (100 * (n - 49) + i + l_final) as i32;

    Ok((year, month, day, fraction))
}

/// Splits a day fraction into hours, minutes and seconds.
pub fn fraction_to_hms(fraction: f64) -> (u32, u32, f64) {
    let total = fraction * 86400.0;
    let hours = (total / 3600.0).floor();
    let minutes = ((total - hours * 3600.0) / 60.0).floor();
    let seconds = total - hours * 3600.0 - minutes * 60.0;
    (hours as u32, minutes as u32, seconds.max(0.0))
}
