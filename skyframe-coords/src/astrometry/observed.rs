//! CIRS → observed place.
//!
//! The CIRS direction is carried into the local −HA/Dec frame by the Earth
//! rotation angle, TIO locator and polar motion, shifted for diurnal parallax
//! and diurnal aberration, rotated to the horizon and lifted by refraction.

use super::refraction::{clamp_altitude, RefractionConstants};
use super::{ObservedPlace, ObservedRequest};
use crate::constants::S_PRIME_RATE_ARCSEC;
use skyframe_core::angle::{wrap_0_2pi, wrap_pm_pi};
use skyframe_core::constants::{ARCSEC_TO_RAD, EARTH_ROTATION_RATE, SPEED_OF_LIGHT_M_PER_S};
use skyframe_core::utils::jd_to_centuries;
use skyframe_core::{RotationMatrix3, Vector3};
use skyframe_time::rotation::earth_rotation_angle;
use skyframe_time::scales::utc_to_ut1;

/// Observer-dependent quantities shared by every target at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverFrame {
    /// Local Earth rotation angle, including longitude.
    pub eral: f64,
    /// Polar motion with respect to the local meridian.
    pub xpl: f64,
    pub ypl: f64,
    pub sphi: f64,
    pub cphi: f64,
    /// Diurnal aberration magnitude, v/c.
    pub diurab: f64,
    /// Parallax offset of the observer in −HA/Dec axes, Earth radii × sin π.
    pub parallax: Vector3,
    pub refraction: RefractionConstants,
}

impl ObserverFrame {
    pub fn new(request: &ObservedRequest) -> Self {
        let ut1 = utc_to_ut1(request.utc, request.dut1);
        let era = earth_rotation_angle(&ut1);
        let sp = S_PRIME_RATE_ARCSEC * jd_to_centuries(request.utc.jd1(), request.utc.jd2())
            * ARCSEC_TO_RAD;
        let elong = request.observer.lon().radians();

        let mut r = RotationMatrix3::identity();
        r.rotate_z(era + sp);
        r.rotate_y(-request.xp);
        r.rotate_x(-request.yp);
        r.rotate_z(elong);

        let (a, b) = (r[(0, 0)], r[(0, 1)]);
        let eral = if a != 0.0 || b != 0.0 {
            libm::atan2(b, a)
        } else {
            0.0
        };
        let xpl = libm::atan2(r[(0, 2)], libm::hypot(a, b));
        let (a, b) = (r[(1, 2)], r[(2, 2)]);
        let ypl = if a != 0.0 || b != 0.0 {
            -libm::atan2(a, b)
        } else {
            0.0
        };

        let (sphi, cphi) = request.observer.lat().sin_cos();
        let diurab =
            EARTH_ROTATION_RATE * request.observer.axis_distance_m() / SPEED_OF_LIGHT_M_PER_S;

        let (rho_sin, rho_cos) = request.observer.parallax_constants(None);
        let sin_hp = libm::sin(request.horizontal_parallax);
        let parallax = Vector3::new(rho_cos, 0.0, rho_sin) * sin_hp;

        let refraction = RefractionConstants::compute(
            request.pressure_hpa,
            request.temperature_c,
            request.humidity,
            request.wavelength_um,
        );

        Self {
            eral,
            xpl,
            ypl,
            sphi,
            cphi,
            diurab,
            parallax,
            refraction,
        }
    }

    /// CIRS (ra, dec) → observed place.
    pub fn observe(&self, ra: f64, dec: f64) -> ObservedPlace {
        let v = Vector3::from_spherical(ra - self.eral, dec);
        let (x, y, z) = (v.x, v.y, v.z);

        let (sx, cx) = libm::sincos(self.xpl);
        let (sy, cy) = libm::sincos(self.ypl);
        let mut hd = Vector3::new(
            cx * x + sx * z,
            sx * sy * x + cy * y - cx * sy * z,
            -sx * cy * x + sy * y + cx * cy * z,
        );

        if !self.parallax.is_zero() {
            hd = (hd - self.parallax).normalize();
        }

        let f = 1.0 - self.diurab * hd.y;
        let xhdt = f * hd.x;
        let yhdt = f * (hd.y + self.diurab);
        let zhdt = f * hd.z;

        // −HA/Dec → Az/El with S = 0, E = 90°.
        let xaet = self.sphi * xhdt - self.cphi * zhdt;
        let yaet = yhdt;
        let zaet = self.cphi * xhdt + self.sphi * zhdt;

        let azobs = if xaet != 0.0 || yaet != 0.0 {
            libm::atan2(yaet, -xaet)
        } else {
            0.0
        };

        let (r, z) = clamp_altitude(libm::hypot(xaet, yaet), zaet);
        let del = self.refraction.shift(r, z);
        let cosdel = 1.0 - del * del / 2.0;
        let f = cosdel - del * z / r;
        let xaeo = xaet * f;
        let yaeo = yaet * f;
        let zaeo = cosdel * zaet + del * r;

        let zdobs = libm::atan2(libm::hypot(xaeo, yaeo), zaeo);

        let hd_obs = Vector3::new(
            self.sphi * xaeo + self.cphi * zaeo,
            yaeo,
            -self.cphi * xaeo + self.sphi * zaeo,
        );
        let (hmobs, dcobs) = hd_obs.to_spherical();

        ObservedPlace {
            azimuth: wrap_0_2pi(azobs),
            zenith_distance: zdobs,
            hour_angle: wrap_pm_pi(-hmobs),
            dec: dcobs,
            ra: wrap_0_2pi(self.eral + hmobs),
        }
    }
}

pub fn cirs_to_observed(ra: f64, dec: f64, request: &ObservedRequest) -> ObservedPlace {
    ObserverFrame::new(request).observe(ra, dec)
}
