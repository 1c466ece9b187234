//! Instants tagged with their time scale.

use crate::calendar::{calendar_to_julian, julian_to_calendar, next_calendar_day};
use crate::constants::B1900_JD;
use crate::scales::{
    tai_minus_utc, tai_to_tt, tai_to_utc, tdb_to_tt, tt_to_tai, tt_to_tdb, utc_to_tai, utc_to_ut1,
    TimeScale,
};
use crate::sidereal::{
    greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time, local_apparent_sidereal_time,
};
use crate::{JulianDate, TimeError, TimeResult};
use skyframe_core::constants::{
    B1950_JD, DAYS_PER_BESSELIAN_YEAR, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY_F64,
};
use skyframe_core::Angle;
use std::fmt;

/// An instant: a two-part Julian date read in `scale`.
///
/// Conversions never mutate the epoch; each `to_*` returns the Julian date of
/// the same instant in the target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch {
    jd: JulianDate,
    scale: TimeScale,
}

/// Length in SI seconds of the UTC day starting at 0h on the given date.
fn utc_day_length(year: i32, month: i32, day: i32) -> TimeResult<f64> {
    let (ny, nm, _) = next_calendar_day(year, month, day)?;
    Ok(SECONDS_PER_DAY_F64 + tai_minus_utc(ny, nm) - tai_minus_utc(year, month))
}

impl Epoch {
    pub fn from_julian_date(scale: TimeScale, jd: JulianDate) -> Self {
        Self { jd, scale }
    }

    /// J2000.0 (2000-01-01 12:00 TT).
    pub fn j2000() -> Self {
        Self::from_julian_date(TimeScale::TT, JulianDate::j2000())
    }

    /// B1950.0 (TT).
    pub fn b1950() -> Self {
        Self::from_julian_date(TimeScale::TT, JulianDate::from_f64(B1950_JD))
    }

    pub fn from_julian_year(year: f64) -> Self {
        let jd = JulianDate::new(J2000_JD, (year - 2000.0) * DAYS_PER_JULIAN_YEAR);
        Self::from_julian_date(TimeScale::TT, jd)
    }

    pub fn from_besselian_year(year: f64) -> Self {
        let jd = JulianDate::new(B1900_JD, (year - 1900.0) * DAYS_PER_BESSELIAN_YEAR);
        Self::from_julian_date(TimeScale::TT, jd)
    }

    /// Builds an epoch from a calendar date and time of day in `scale`.
    ///
    /// For UTC, second 60 is accepted on days that end in a leap second.
    pub fn from_calendar(
        scale: TimeScale,
        year: i32,
        month: i32,
        day: i32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        let (jd1, mjd) = calendar_to_julian(year, month, day)?;

        let day_length = match scale {
            TimeScale::UTC => utc_day_length(year, month, day)?,
            _ => SECONDS_PER_DAY_F64,
        };
        let max_second = if hour == 23 && minute == 59 {
            60.0 + (day_length - SECONDS_PER_DAY_F64)
        } else {
            60.0
        };
        if hour > 23 || minute > 59 || !(0.0..max_second).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02}:{} out of range",
                hour, minute, second
            )));
        }

        let seconds_of_day = hour as f64 * 3600.0 + minute as f64 * 60.0 + second;
        let jd = JulianDate::new(jd1, mjd + seconds_of_day / day_length);
        Ok(Self::from_julian_date(scale, jd))
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    pub fn julian_date(&self) -> JulianDate {
        self.jd
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::from_julian_date(self.scale, self.jd.add_days(days))
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self::from_julian_date(self.scale, self.jd.add_seconds(seconds))
    }

    pub fn to_tai(&self) -> TimeResult<JulianDate> {
        match self.scale {
            TimeScale::UTC => utc_to_tai(self.jd),
            TimeScale::TAI => Ok(self.jd),
            TimeScale::TT => Ok(tt_to_tai(self.jd)),
            TimeScale::TDB => Ok(tt_to_tai(tdb_to_tt(self.jd))),
        }
    }

    pub fn to_utc(&self) -> TimeResult<JulianDate> {
        match self.scale {
            TimeScale::UTC => Ok(self.jd),
            _ => tai_to_utc(self.to_tai()?),
        }
    }

    pub fn to_tt(&self) -> TimeResult<JulianDate> {
        match self.scale {
            TimeScale::TT => Ok(self.jd),
            TimeScale::TDB => Ok(tdb_to_tt(self.jd)),
            _ => Ok(tai_to_tt(self.to_tai()?)),
        }
    }

    pub fn to_tdb(&self) -> TimeResult<JulianDate> {
        match self.scale {
            TimeScale::TDB => Ok(self.jd),
            _ => Ok(tt_to_tdb(self.to_tt()?)),
        }
    }

    /// UT1 = UTC + ΔUT1 (seconds).
    pub fn to_ut1(&self, dut1: f64) -> TimeResult<JulianDate> {
        Ok(utc_to_ut1(self.to_utc()?, dut1))
    }

    pub fn to_scale(&self, scale: TimeScale) -> TimeResult<Self> {
        let jd = match scale {
            TimeScale::UTC => self.to_utc()?,
            TimeScale::TAI => self.to_tai()?,
            TimeScale::TT => self.to_tt()?,
            TimeScale::TDB => self.to_tdb()?,
        };
        Ok(Self::from_julian_date(scale, jd))
    }

    pub fn julian_year(&self) -> f64 {
        2000.0 + self.jd.days_since_j2000() / DAYS_PER_JULIAN_YEAR
    }

    pub fn besselian_year(&self) -> f64 {
        1900.0 + ((self.jd.jd1() - B1900_JD) + self.jd.jd2()) / DAYS_PER_BESSELIAN_YEAR
    }

    /// `"J2000.0"` style label.
    pub fn julian_label(&self) -> String {
        format!("J{:.1}", self.julian_year())
    }

    /// `"B1950.0"` style label.
    pub fn besselian_label(&self) -> String {
        format!("B{:.1}", self.besselian_year())
    }

    pub fn greenwich_mean_sidereal_time(&self, dut1: f64) -> TimeResult<Angle> {
        let gmst = greenwich_mean_sidereal_time(&self.to_ut1(dut1)?, &self.to_tt()?);
        Ok(Angle::from_radians(gmst))
    }

    pub fn greenwich_apparent_sidereal_time(&self, dut1: f64) -> TimeResult<Angle> {
        let gast = greenwich_apparent_sidereal_time(&self.to_ut1(dut1)?, &self.to_tt()?)?;
        Ok(Angle::from_radians(gast))
    }

    /// Local apparent sidereal time at an East-positive longitude.
    pub fn local_sidereal_time(&self, longitude: Angle, dut1: f64) -> TimeResult<Angle> {
        let last = local_apparent_sidereal_time(
            &self.to_ut1(dut1)?,
            &self.to_tt()?,
            longitude.radians(),
        )?;
        Ok(Angle::from_radians(last))
    }

    /// Calendar date and time of day in the epoch's own scale.
    pub fn to_calendar(&self) -> TimeResult<(i32, i32, i32, u32, u32, f64)> {
        let (year, month, day, fraction) = julian_to_calendar(self.jd.jd1(), self.jd.jd2())?;
        let day_length = match self.scale {
            TimeScale::UTC => utc_day_length(year, month, day)?,
            _ => SECONDS_PER_DAY_F64,
        };
        let mut rest = fraction * day_length;
        let hour = ((rest / 3600.0).floor() as u32).min(23);
        rest -= hour as f64 * 3600.0;
        let minute = ((rest / 60.0).floor() as u32).min(59);
        rest -= minute as f64 * 60.0;
        Ok((year, month, day, hour, minute, rest.max(0.0)))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round on the millisecond grid first so 59.9996 s never prints as 60.000.
        let rounded = self.add_seconds(0.0005);
        match rounded.to_calendar() {
            Ok((y, mo, d, h, mi, s)) => {
                let millis = ((s * 1000.0).floor() as u32).min(60_999);
                write!(
                    f,
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03} {}",
                    y,
                    mo,
                    d,
                    h,
                    mi,
                    millis / 1000,
                    millis % 1000,
                    self.scale
                )
            }
            Err(_) => write!(f, "{} {}", self.jd, self.scale),
        }
    }
}
