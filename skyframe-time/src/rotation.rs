use crate::JulianDate;
use skyframe_core::angle::wrap_0_2pi;
use skyframe_core::constants::{J2000_JD, TWOPI};
use skyframe_core::math::fmod;

/// Earth rotation angle (IAU 2000) in radians, `[0, 2π)`, from a UT1 date.
pub fn earth_rotation_angle(ut1: &JulianDate) -> f64 {
    let (d1, d2) = if ut1.jd1() < ut1.jd2() {
        (ut1.jd1(), ut1.jd2())
    } else {
        (ut1.jd2(), ut1.jd1())
    };

    let t = d1 + (d2 - J2000_JD);
    let f = fmod(d1, 1.0) + fmod(d2, 1.0);

    wrap_0_2pi(TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t))
}
