//! UTC ↔ TAI through the leap-second table, and UT1 from ΔUT1.
//!
//! A UTC day that ends in a leap second is 86401 SI seconds long. The
//! forward conversion samples TAI − UTC at 0h of the day and 0h of the next
//! day and stretches the day fraction by the step between them, so instants
//! inside 23:59:60 map to distinct TAI values.

use crate::calendar::{calendar_to_julian, julian_to_calendar, next_calendar_day};
use crate::constants::LEAP_SECONDS;
use crate::julian::JulianDate;
use crate::TimeResult;
use skyframe_core::constants::SECONDS_PER_DAY_F64;

const TAI_TO_UTC_ITERATIONS: usize = 3;

/// TAI − UTC in seconds in force during the given month.
///
/// Dates before 1972 get the first tabulated offset (10 s).
pub fn tai_minus_utc(year: i32, month: i32) -> f64 {
    let m = 12 * year + month;
    match LEAP_SECONDS.binary_search_by(|&(y, mo, _)| (12 * y + mo).cmp(&m)) {
        Ok(idx) => LEAP_SECONDS[idx].2,
        Err(0) => LEAP_SECONDS[0].2,
        Err(idx) => LEAP_SECONDS[idx - 1].2,
    }
}

fn split(jd: JulianDate) -> (f64, f64, bool) {
    if jd.jd1().abs() >= jd.jd2().abs() {
        (jd.jd1(), jd.jd2(), true)
    } else {
        (jd.jd2(), jd.jd1(), false)
    }
}

fn join(big: f64, small: f64, big1: bool) -> JulianDate {
    if big1 {
        JulianDate::new(big, small)
    } else {
        JulianDate::new(small, big)
    }
}

pub fn utc_to_tai(utc: JulianDate) -> TimeResult<JulianDate> {
    let (utc_int, utc_frac, big1) = split(utc);

    let (year, month, day, mut day_fraction) = julian_to_calendar(utc_int, utc_frac)?;

    let offset_0h = tai_minus_utc(year, month);
    let (next_year, next_month, _) = next_calendar_day(year, month, day)?;
    let offset_24h = tai_minus_utc(next_year, next_month);
    let leap = offset_24h - offset_0h;

    day_fraction *= (SECONDS_PER_DAY_F64 + leap) / SECONDS_PER_DAY_F64;

    let (z1, z2) = calendar_to_julian(year, month, day)?;
    let mut tai_frac = z1 - utc_int;
    tai_frac += z2;
    tai_frac += day_fraction + offset_0h / SECONDS_PER_DAY_F64;

    Ok(join(utc_int, tai_frac, big1))
}

/// Inverse of [`utc_to_tai`] by fixed-point refinement.
pub fn tai_to_utc(tai: JulianDate) -> TimeResult<JulianDate> {
    let (tai_int, tai_frac, big1) = split(tai);

    let utc_int = tai_int;
    let mut utc_frac = tai_frac;
    for _ in 0..TAI_TO_UTC_ITERATIONS {
        let guess = utc_to_tai(join(utc_int, utc_frac, big1))?;
        let (g_int, g_frac, _) = split(guess);
        utc_frac += tai_int - g_int;
        utc_frac += tai_frac - g_frac;
    }

    Ok(join(utc_int, utc_frac, big1))
}

/// UT1 = UTC + ΔUT1, with ΔUT1 in seconds.
pub fn utc_to_ut1(utc: JulianDate, dut1: f64) -> JulianDate {
    utc.add_seconds(dut1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::constants::J2000_JD;

    fn seconds_between(a: JulianDate, b: JulianDate) -> f64 {
        ((a.jd1() - b.jd1()) + (a.jd2() - b.jd2())) * SECONDS_PER_DAY_F64
    }

    #[test]
    fn test_offset_lookup() {
        assert_eq!(tai_minus_utc(1972, 1), 10.0);
        assert_eq!(tai_minus_utc(1972, 6), 10.0);
        assert_eq!(tai_minus_utc(1972, 7), 11.0);
        assert_eq!(tai_minus_utc(2000, 1), 32.0);
        assert_eq!(tai_minus_utc(2016, 12), 36.0);
        assert_eq!(tai_minus_utc(2017, 1), 37.0);
        assert_eq!(tai_minus_utc(2030, 5), 37.0);
        assert_eq!(tai_minus_utc(1960, 1), 10.0);
    }

    #[test]
    fn test_utc_to_tai_j2000() {
        let utc = JulianDate::new(J2000_JD, 0.0);
        let tai = utc_to_tai(utc).unwrap();
        assert!((seconds_between(tai, utc) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_leap_second_day_is_stretched() {
        // 2016-12-31 ends with 23:59:60.
        let (z1, z2) = calendar_to_julian(2016, 12, 31).unwrap();
        let start = utc_to_tai(JulianDate::new(z1, z2)).unwrap();
        let end = utc_to_tai(JulianDate::new(z1, z2 + 1.0 - 1e-12)).unwrap();
        assert!((seconds_between(end, start) - 86401.0).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        for jd2 in [0.0, 0.25, 0.5, 0.999] {
            let utc = JulianDate::new(2459000.5, jd2);
            let back = tai_to_utc(utc_to_tai(utc).unwrap()).unwrap();
            assert!(seconds_between(back, utc).abs() < 1e-6);
        }
    }

    #[test]
    fn test_swapped_parts() {
        let a = utc_to_tai(JulianDate::new(0.25, 2459000.5)).unwrap();
        let b = utc_to_tai(JulianDate::new(2459000.5, 0.25)).unwrap();
        assert!((a.to_f64() - b.to_f64()).abs() < 1e-9);
    }

    #[test]
    fn test_ut1() {
        let utc = JulianDate::j2000();
        let ut1 = utc_to_ut1(utc, 0.3);
        assert!((seconds_between(ut1, utc) - 0.3).abs() < 1e-6);
    }
}
