//! The CIO locator `s`, truncated IAU 2006 series.
//!
//! `s + XY/2` is a polynomial plus Poisson terms in the Delaunay arguments. Only
//! terms with amplitudes of 1 µas and above are kept for the t⁰ series, and the
//! leading terms for t¹ to t⁴; the neglected remainder is a few µas over
//! 1900-2100, far below the precision of the reduction that consumes `s`.

use crate::constants::ARCSEC_TO_RAD;
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::nutation::iau2000b::DelaunayArguments;

/// Polynomial part of `s + XY/2`, arcseconds.
const SP: [f64; 6] = [
    94.00e-6,
    3808.65e-6,
    -122.68e-6,
    -72574.11e-6,
    27.98e-6,
    15.62e-6,
];

/// (l, l′, F, D, Ω) multipliers then sine and cosine amplitudes in arcseconds.
type Term = ([i8; 5], f64, f64);

#[rustfmt::skip]
const S0: [Term; 10] = [
    ([0, 0, 0,  0,  1], -2640.73e-6,  0.39e-6),
    ([0, 0, 0,  0,  2],   -63.53e-6,  0.02e-6),
    ([0, 0, 2, -2,  3],   -11.75e-6, -0.01e-6),
    ([0, 0, 2, -2,  1],   -11.21e-6, -0.01e-6),
    ([0, 0, 2, -2,  2],     4.57e-6,  0.00e-6),
    ([0, 0, 2,  0,  3],    -2.02e-6,  0.00e-6),
    ([0, 0, 2,  0,  1],    -1.98e-6,  0.00e-6),
    ([0, 0, 0,  0,  3],     1.72e-6,  0.00e-6),
    ([0, 1, 0,  0,  1],     1.41e-6,  0.01e-6),
    ([0, 1, 0,  0, -1],     1.26e-6,  0.01e-6),
];

#[rustfmt::skip]
const S1: [Term; 2] = [
    ([0, 0, 0, 0, 2], -0.07e-6, 3.57e-6),
    ([0, 0, 0, 0, 1],  1.73e-6, -0.03e-6),
];

#[rustfmt::skip]
const S2: [Term; 4] = [
    ([0, 0, 0,  0, 1], 743.52e-6, -0.17e-6),
    ([0, 0, 2, -2, 2],  56.91e-6,  0.06e-6),
    ([0, 0, 2,  0, 2],   9.84e-6, -0.01e-6),
    ([0, 0, 0,  0, 2],  -8.85e-6,  0.01e-6),
];

#[rustfmt::skip]
const S3: [Term; 1] = [
    ([0, 0, 0, 0, 1], 0.30e-6, -23.42e-6),
];

#[rustfmt::skip]
const S4: [Term; 1] = [
    ([0, 0, 0, 0, 1], -0.26e-6, -0.01e-6),
];

/// CIO locator at a fixed TT date.
///
/// ```
/// use skyframe_core::cio::CioLocator;
///
/// let s = CioLocator::new(0.0).calculate(0.0, 0.0).unwrap();
/// // About −2 mas at J2000.0.
/// assert!(s < 0.0 && s.abs() < 2e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CioLocator {
    tt_centuries: f64,
}

impl CioLocator {
    pub fn new(tt_centuries: f64) -> Self {
        Self { tt_centuries }
    }

    pub fn tt_centuries(&self) -> f64 {
        self.tt_centuries
    }

    /// `s` in radians for the CIP coordinates `x`, `y` of the same date.
    pub fn calculate(&self, x: f64, y: f64) -> AstroResult<f64> {
        if !x.is_finite() || !y.is_finite() {
            return Err(AstroError::math_error(
                "CioLocator::calculate",
                MathErrorKind::NotFinite,
                "CIP coordinates not finite",
            ));
        }
        Ok(self.series() - x * y / 2.0)
    }

    /// `s + XY/2` in radians.
    pub fn series(&self) -> f64 {
        let t = self.tt_centuries;
        let fa = DelaunayArguments::at(t);

        let w0 = SP[0] + sum_terms(&S0, &fa);
        let w1 = SP[1] + sum_terms(&S1, &fa);
        let w2 = SP[2] + sum_terms(&S2, &fa);
        let w3 = SP[3] + sum_terms(&S3, &fa);
        let w4 = SP[4] + sum_terms(&S4, &fa);
        let w5 = SP[5];

        (w0 + (w1 + (w2 + (w3 + (w4 + w5 * t) * t) * t) * t) * t) * ARCSEC_TO_RAD
    }
}

fn sum_terms(terms: &[Term], fa: &DelaunayArguments) -> f64 {
    terms.iter().rev().fold(0.0, |acc, (n, sine, cosine)| {
        let arg = fa.combine(n[0], n[1], n[2], n[3], n[4]);
        let (s, c) = libm::sincos(arg);
        acc + sine * s + cosine * c
    })
}
