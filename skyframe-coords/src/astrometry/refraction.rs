//! Refraction constants for the `A tan z + B tan³ z` model.
//!
//! Follows Green (1987) with Stone's β: optical/IR below 100 µm, radio above.
//! Zero pressure gives `A = B = 0`.

use crate::constants::RADIO_WAVELENGTH_THRESHOLD_UM;

/// Clamp applied to cos(alt) so the horizon stays finite.
const CELMIN: f64 = 1e-6;
/// Clamp applied to sin(alt); refraction is held at its 3° value below that.
const SELMIN: f64 = 0.05;

/// Clamps the horizontal (`r`) and vertical (`z`) components of a unit
/// topocentric vector before refraction is evaluated.
pub fn clamp_altitude(r: f64, z: f64) -> (f64, f64) {
    (r.max(CELMIN), z.max(SELMIN))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefractionConstants {
    pub refa: f64,
    pub refb: f64,
}

impl RefractionConstants {
    pub const NONE: Self = Self { refa: 0.0, refb: 0.0 };

    /// `pressure_hpa`, `temperature_c`, `humidity` in [0, 1], `wavelength_um`.
    ///
    /// Inputs are clamped to the model's supported range.
    pub fn compute(pressure_hpa: f64, temperature_c: f64, humidity: f64, wavelength_um: f64) -> Self {
        let optical = wavelength_um <= RADIO_WAVELENGTH_THRESHOLD_UM;
        let t = temperature_c.clamp(-150.0, 200.0);
        let p = pressure_hpa.clamp(0.0, 10000.0);
        let r = humidity.clamp(0.0, 1.0);
        let w = wavelength_um.clamp(0.1, 1e6);

        if p <= 0.0 {
            return Self::NONE;
        }

        let ps = libm::pow(10.0, (0.7859 + 0.03477 * t) / (1.0 + 0.00412 * t))
            * (1.0 + p * (4.5e-6 + 6e-10 * t * t));
        let pw = r * ps / (1.0 - (1.0 - r) * ps / p);

        let tk = t + 273.15;
        let gamma = if optical {
            let wlsq = w * w;
            ((77.53484e-6 + (4.39108e-7 + 3.666e-9 / wlsq) / wlsq) * p - 11.2684e-6 * pw) / tk
        } else {
            (77.6890e-6 * p - (6.3938e-6 - 0.375463 / tk) * pw) / tk
        };

        let mut beta = 4.4474e-6 * tk;
        if !optical {
            beta -= 0.0074 * pw * beta;
        }

        Self {
            refa: gamma * (1.0 - beta),
            refb: -gamma * (beta - gamma / 2.0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.refa == 0.0 && self.refb == 0.0
    }

    /// Refraction `del` (radians) raising a topocentric direction whose
    /// horizontal component is `r` and vertical component `z`.
    ///
    /// One Newton step inverts the model so the result maps true to observed.
    pub fn shift(&self, r: f64, z: f64) -> f64 {
        let (r, z) = clamp_altitude(r, z);
        let tz = r / z;
        let w = self.refb * tz * tz;
        (self.refa + w) * tz / (1.0 + (self.refa + 3.0 * w) / (z * z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::constants::{ARCSEC_PER_RAD, DEG_TO_RAD};

    #[test]
    fn test_zero_pressure_no_refraction() {
        let k = RefractionConstants::compute(0.0, 10.0, 0.5, 0.55);
        assert!(k.is_zero());
        assert_eq!(k.shift(1.0, 0.1), 0.0);
    }

    #[test]
    fn test_standard_atmosphere_constants() {
        let k = RefractionConstants::compute(1013.25, 10.0, 0.0, 0.55);
        let a = k.refa * ARCSEC_PER_RAD;
        let b = k.refb * ARCSEC_PER_RAD;
        assert!((a - 58.26).abs() < 0.05, "A = {}″", a);
        assert!(b < 0.0 && b > -0.1, "B = {}″", b);
    }

    #[test]
    fn test_refraction_at_45_degrees() {
        let k = RefractionConstants::compute(1013.25, 10.0, 0.0, 0.55);
        let (s, c) = libm::sincos(45.0 * DEG_TO_RAD);
        let del = k.shift(c, s) * ARCSEC_PER_RAD;
        assert!((del - 58.16).abs() < 0.05, "refraction {}″", del);
    }

    #[test]
    fn test_radio_differs_from_optical() {
        let optical = RefractionConstants::compute(1013.25, 10.0, 0.8, 0.55);
        let radio = RefractionConstants::compute(1013.25, 10.0, 0.8, 1e5 + 1.0);
        assert!(radio.refa > optical.refa);
    }

    #[test]
    fn test_horizon_clamped() {
        let k = RefractionConstants::compute(1013.25, 10.0, 0.0, 0.55);
        let at_horizon = k.shift(1.0, 0.0);
        let at_three_deg = k.shift(1.0, SELMIN);
        assert_eq!(at_horizon, at_three_deg);
        assert!(at_horizon.is_finite());
    }
}
