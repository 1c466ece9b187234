//! Sexagesimal decomposition and the default `Display` for [`Angle`].
//!
//! [`Sexagesimal`] rounds in fixed point before splitting, so a value such as
//! 29.9999999° at two decimals renders as `30° 00' 00.00"` rather than
//! `29° 59' 60.00"`.
//!
//! ```
//! use skyframe_core::Angle;
//! use skyframe_core::angle::{Sexagesimal, SexagesimalUnit};
//!
//! let dec = Angle::from_degrees(-23.4392794);
//! let s = Sexagesimal::from_angle(dec, SexagesimalUnit::Degrees, 2);
//! assert!(s.negative);
//! assert_eq!((s.whole, s.minutes), (23, 26));
//! assert_eq!(s.to_string(), "-23° 26' 21.41\"");
//!
//! let ra = Angle::from_hours(18.615648);
//! let s = Sexagesimal::from_angle(ra, SexagesimalUnit::Hours, 1);
//! assert_eq!(s.to_string(), "18h 36m 56.3s");
//! ```

use super::Angle;
use core::fmt;

/// Which base unit the leading sexagesimal field counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SexagesimalUnit {
    /// Degrees, arcminutes, arcseconds. Signed.
    Degrees,
    /// Hours, minutes, seconds of time. Wrapped into [0h, 24h).
    Hours,
}

/// An angle split into base-60 fields after rounding to `precision` decimals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sexagesimal {
    pub unit: SexagesimalUnit,
    pub negative: bool,
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub precision: u8,
}

/// Caps the fixed-point scale so the scaled total stays exact in a u64.
const MAX_PRECISION: u8 = 9;

impl Sexagesimal {
    pub fn from_angle(angle: Angle, unit: SexagesimalUnit, precision: u8) -> Self {
        let precision = precision.min(MAX_PRECISION);
        let value = match unit {
            SexagesimalUnit::Degrees => angle.degrees(),
            SexagesimalUnit::Hours => angle.normalized().hours(),
        };

        let scale = 10u64.pow(u32::from(precision));
        let ticks = libm::round(value.abs() * 3600.0 * scale as f64) as u64;
        let ticks_per_whole = 3600 * scale;
        let ticks_per_minute = 60 * scale;

        let mut whole = ticks / ticks_per_whole;
        let rem = ticks % ticks_per_whole;
        let minutes = rem / ticks_per_minute;
        let seconds = (rem % ticks_per_minute) as f64 / scale as f64;

        if unit == SexagesimalUnit::Hours {
            whole %= 24;
        }

        Self {
            unit,
            negative: value < 0.0 && ticks > 0,
            whole: whole as u32,
            minutes: minutes as u32,
            seconds,
            precision,
        }
    }

    pub fn sign_char(&self) -> char {
        if self.negative {
            '-'
        } else {
            '+'
        }
    }

    /// Seconds field padded to two integer digits at the stored precision.
    pub fn seconds_string(&self) -> String {
        let p = self.precision as usize;
        let width = if p == 0 { 2 } else { p + 3 };
        format!("{:0width$.p$}", self.seconds, width = width, p = p)
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            SexagesimalUnit::Degrees => write!(
                f,
                "{}{:02}° {:02}' {}\"",
                self.sign_char(),
                self.whole,
                self.minutes,
                self.seconds_string()
            ),
            SexagesimalUnit::Hours => write!(
                f,
                "{:02}h {:02}m {}s",
                self.whole,
                self.minutes,
                self.seconds_string()
            ),
        }
    }
}

impl Angle {
    pub fn to_sexagesimal(self, unit: SexagesimalUnit, precision: u8) -> Sexagesimal {
        Sexagesimal::from_angle(self, unit, precision)
    }
}

impl fmt::Display for Angle {
    /// Decimal degrees with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_carry_into_minutes_and_degrees() {
        let a = Angle::from_degrees(29.999_999_9);
        let s = a.to_sexagesimal(SexagesimalUnit::Degrees, 2);
        assert_eq!((s.whole, s.minutes), (30, 0));
        assert_eq!(s.seconds, 0.0);
        assert_eq!(s.to_string(), "+30° 00' 00.00\"");
    }

    #[test]
    fn test_hours_wrap_after_rounding() {
        let a = Angle::from_hours(23.999_999_99);
        let s = a.to_sexagesimal(SexagesimalUnit::Hours, 1);
        assert_eq!(s.to_string(), "00h 00m 00.0s");
    }

    #[test]
    fn test_negative_hours_wrap_positive() {
        let s = Angle::from_hours(-1.5).to_sexagesimal(SexagesimalUnit::Hours, 0);
        assert_eq!(s.to_string(), "22h 30m 00s");
    }

    #[test]
    fn test_negative_zero_after_rounding_has_no_sign() {
        let s = Angle::from_degrees(-1e-9).to_sexagesimal(SexagesimalUnit::Degrees, 1);
        assert!(!s.negative);
        assert_eq!(s.to_string(), "+00° 00' 00.0\"");
    }

    #[test]
    fn test_small_negative_declination_keeps_sign() {
        let s = Angle::from_dms(true, 0.0, 30.0, 15.0).to_sexagesimal(SexagesimalUnit::Degrees, 0);
        assert!(s.negative);
        assert_eq!(s.to_string(), "-00° 30' 15\"");
    }

    #[test]
    fn test_display_decimal_degrees() {
        let a = Angle::from_degrees(45.123456789);
        assert_eq!(format!("{}", a), "45.123457°");
    }
}
