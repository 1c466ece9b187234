//! Low-precision heliocentric state of the Earth.
//!
//! Built from the geometric mean longitude, mean anomaly and equation of
//! centre of the Sun, referred to the J2000 mean equinox and rotated into
//! equatorial axes. Position is good to ~1e-3 AU, velocity to ~1e-5 AU/day,
//! which keeps annual aberration within a few milliarcseconds.

use skyframe_core::constants::{DAYS_PER_JULIAN_CENTURY, DEG_TO_RAD, J2000_JD};
use skyframe_core::math::fmod;
use skyframe_core::Vector3;
use skyframe_time::JulianDate;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
const OBLIQUITY_J2000_DEG: f64 = 23.4392911;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.39688783;

/// Semi-major axis of the Earth–Sun orbit in AU.
const ORBIT_SEMI_MAJOR_AU: f64 = 1.000001018;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthState {
    /// Sun → Earth, AU, ICRS axes.
    pub heliocentric_position: Vector3,
    /// AU per day.
    pub heliocentric_velocity: Vector3,
}

impl EarthState {
    pub fn sun_distance(&self) -> f64 {
        self.heliocentric_position.magnitude()
    }

    /// Unit vector from the Sun toward the Earth.
    pub fn sun_to_earth(&self) -> Vector3 {
        self.heliocentric_position.normalize()
    }
}

pub fn earth_state(tdb: &JulianDate) -> EarthState {
    let days = (tdb.jd1() - J2000_JD) + tdb.jd2();
    let t = days / DAYS_PER_JULIAN_CENTURY;

    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m_deg = 357.52911 + t * (35999.05029 - t * 0.0001537);
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let m = fmod(m_deg, 360.0) * DEG_TO_RAD;
    let (s1, c1) = libm::sincos(m);
    let (s2, c2) = libm::sincos(2.0 * m);
    let (s3, c3) = libm::sincos(3.0 * m);

    let c1_coef = 1.914602 - t * (0.004817 + t * 0.000014);
    let c2_coef = 0.019993 - t * 0.000101;
    let c3_coef = 0.000289;
    let centre = c1_coef * s1 + c2_coef * s2 + c3_coef * s3;

    let lambda = fmod(l0 + centre - PRECESSION_DEG_PER_CENTURY * t, 360.0) * DEG_TO_RAD;
    let nu = m + centre * DEG_TO_RAD;
    let (sin_nu, cos_nu) = libm::sincos(nu);
    let r = ORBIT_SEMI_MAJOR_AU * (1.0 - e * e) / (1.0 + e * cos_nu);

    // Rates per day, radians.
    let dm = 35999.05029 / DAYS_PER_JULIAN_CENTURY * DEG_TO_RAD;
    let dcentre = (c1_coef * c1 + 2.0 * c2_coef * c2 + 3.0 * c3_coef * c3) * dm * DEG_TO_RAD;
    let dlambda =
        (36000.76983 - PRECESSION_DEG_PER_CENTURY) / DAYS_PER_JULIAN_CENTURY * DEG_TO_RAD + dcentre;
    let dnu = dm + dcentre;
    let dr = r * e * sin_nu / (1.0 + e * cos_nu) * dnu;

    let (sin_l, cos_l) = libm::sincos(lambda);
    let sun_pos = Vector3::new(r * cos_l, r * sin_l, 0.0);
    let sun_vel = Vector3::new(
        dr * cos_l - r * sin_l * dlambda,
        dr * sin_l + r * cos_l * dlambda,
        0.0,
    );

    EarthState {
        heliocentric_position: ecliptic_to_equatorial(-sun_pos),
        heliocentric_velocity: ecliptic_to_equatorial(-sun_vel),
    }
}

fn ecliptic_to_equatorial(v: Vector3) -> Vector3 {
    let (se, ce) = libm::sincos(OBLIQUITY_J2000_DEG * DEG_TO_RAD);
    Vector3::new(v.x, v.y * ce - v.z * se, v.y * se + v.z * ce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_state() {
        let state = earth_state(&JulianDate::j2000());
        // Early January, near perihelion.
        assert!((state.sun_distance() - 0.98331).abs() < 1e-4);
        let p = state.heliocentric_position;
        assert!((p.x - (-0.1771)).abs() < 2e-3);
        assert!((p.y - 0.8874).abs() < 2e-3);
        assert!((p.z - 0.3847).abs() < 2e-3);
        assert!((state.heliocentric_velocity.magnitude() - 0.01749).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let jd = JulianDate::new(2460000.5, 0.3);
        let h = 0.01;
        let before = earth_state(&jd.add_days(-h)).heliocentric_position;
        let after = earth_state(&jd.add_days(h)).heliocentric_position;
        let numeric = (after - before) / (2.0 * h);
        let analytic = earth_state(&jd).heliocentric_velocity;
        assert!((numeric - analytic).magnitude() < 1e-8);
    }

    #[test]
    fn test_distance_bounds_over_year() {
        for k in 0..73 {
            let state = earth_state(&JulianDate::new(J2000_JD, k as f64 * 5.0));
            let r = state.sun_distance();
            assert!((0.983..=1.0168).contains(&r), "r = {}", r);
            assert!((state.sun_to_earth().magnitude() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_velocity_perpendicular_to_radius() {
        for k in 0..12 {
            let state = earth_state(&JulianDate::new(J2000_JD, k as f64 * 30.0));
            let cos = state.sun_to_earth().dot(&state.heliocentric_velocity.normalize());
            // Eccentricity keeps the flight-path angle under one degree.
            assert!(cos.abs() < 0.0175);
        }
    }
}
