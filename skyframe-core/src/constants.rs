//! Astronomical and unit-conversion constants.

pub const J2000_JD: f64 = 2451545.0;

/// Besselian epoch B1950.0 as a Julian date (TT).
pub const B1950_JD: f64 = 2433282.4235;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Length of the tropical year used for Besselian epochs, in days.
pub const DAYS_PER_BESSELIAN_YEAR: f64 = 365.242198781;

pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
pub const MICROARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-12;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

/// Astronomical Unit in meters (IAU 2012, exact).
pub const AU_M: f64 = 149_597_870_700.0;

pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in meters per second (exact).
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;

pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = 173.1446326846693;

/// Schwarzschild radius of the Sun in AU (2GM☉/c²).
pub const SCHWARZSCHILD_RADIUS_SUN_AU: f64 = 1.97412574336e-8;

/// Earth's sidereal rotation rate in radians per second of UT1.
pub const EARTH_ROTATION_RATE: f64 = 1.002_737_811_911_354_48 * TWOPI / SECONDS_PER_DAY_F64;
