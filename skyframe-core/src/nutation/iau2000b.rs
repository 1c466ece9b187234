//! Truncated IAU 2000B nutation.
//!
//! Delaunay arguments are the linear forms of McCarthy & Luzum (2003). Each
//! series row holds the multipliers of (l, l′, F, D, Ω) followed by the
//! longitude coefficients (sin, sin·t, cos) and the obliquity coefficients
//! (cos, cos·t, sin), all in units of 0.1 µas.

use super::types::NutationResult;
use crate::constants::{ARCSEC_TO_RAD, MILLIARCSEC_TO_RAD, TWOPI};
use crate::errors::AstroResult;
use crate::math::fmod;
use crate::utils::{arcsec_mod_circle_to_rad, jd_to_centuries};

/// 0.1 µas to radians.
const U2R: f64 = ARCSEC_TO_RAD / 1e7;

const PLANETARY_BIAS_LONGITUDE: f64 = -0.135 * MILLIARCSEC_TO_RAD;
const PLANETARY_BIAS_OBLIQUITY: f64 = 0.388 * MILLIARCSEC_TO_RAD;

type Term = (i8, i8, i8, i8, i8, f64, f64, f64, f64, f64, f64);

#[rustfmt::skip]
const TERMS: [Term; 20] = [
    ( 0, 0, 0, 0, 1, -172064161.0, -174666.0,  33386.0, 92052331.0,  9086.0, 15377.0),
    ( 0, 0, 2,-2, 2,  -13170906.0,   -1675.0, -13696.0,  5730336.0, -3015.0, -4587.0),
    ( 0, 0, 2, 0, 2,   -2276413.0,    -234.0,   2796.0,   978459.0,  -485.0,  1374.0),
    ( 0, 0, 0, 0, 2,    2074554.0,     207.0,   -698.0,  -897492.0,   470.0,  -291.0),
    ( 0, 1, 0, 0, 0,    1475877.0,   -3633.0,  11817.0,    73871.0,  -184.0, -1924.0),
    ( 0, 1, 2,-2, 2,    -516821.0,    1226.0,   -524.0,   224386.0,  -677.0,  -174.0),
    ( 1, 0, 0, 0, 0,     711159.0,      73.0,   -872.0,    -6750.0,     0.0,   358.0),
    ( 0, 0, 2, 0, 1,    -387298.0,    -367.0,    380.0,   200728.0,    18.0,   318.0),
    ( 1, 0, 2, 0, 2,    -301461.0,     -36.0,    816.0,   129025.0,   -63.0,   367.0),
    ( 0,-1, 2,-2, 2,     215829.0,    -494.0,    111.0,   -95929.0,   299.0,   132.0),
    ( 0, 0, 2,-2, 1,     128227.0,     137.0,    181.0,   -68982.0,    -9.0,    39.0),
    (-1, 0, 2, 0, 2,     123457.0,      11.0,     19.0,   -53311.0,    32.0,    -4.0),
    (-1, 0, 0, 2, 0,     156994.0,      10.0,   -168.0,    -1235.0,     0.0,    82.0),
    ( 1, 0, 0, 0, 1,      63110.0,      63.0,     27.0,   -33228.0,     0.0,    -9.0),
    (-1, 0, 0, 0, 1,     -57976.0,     -63.0,   -189.0,    31429.0,     0.0,   -75.0),
    (-1, 0, 2, 2, 2,     -59641.0,     -11.0,    149.0,    25543.0,   -11.0,    66.0),
    ( 1, 0, 2, 0, 1,     -51613.0,     -42.0,    129.0,    26366.0,     0.0,    78.0),
    (-2, 0, 2, 0, 1,      45893.0,      50.0,     31.0,   -24236.0,   -10.0,    20.0),
    ( 0, 0, 0, 2, 0,      63384.0,      11.0,   -150.0,    -1220.0,     0.0,    29.0),
    ( 0, 0, 2, 2, 2,     -38571.0,      -1.0,    158.0,    16452.0,   -11.0,    68.0),
];

/// Mean Delaunay arguments (l, l′, F, D, Ω) in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayArguments {
    pub l: f64,
    pub lp: f64,
    pub f: f64,
    pub d: f64,
    pub om: f64,
}

impl DelaunayArguments {
    pub fn at(t: f64) -> Self {
        Self {
            l: arcsec_mod_circle_to_rad(485868.249036 + 1717915923.2178 * t),
            lp: arcsec_mod_circle_to_rad(1287104.79305 + 129596581.0481 * t),
            f: arcsec_mod_circle_to_rad(335779.526232 + 1739527262.8478 * t),
            d: arcsec_mod_circle_to_rad(1072260.70369 + 1602961601.2090 * t),
            om: arcsec_mod_circle_to_rad(450160.398036 - 6962890.5431 * t),
        }
    }

    pub(crate) fn combine(&self, nl: i8, nlp: i8, nf: i8, nd: i8, nom: i8) -> f64 {
        fmod(
            f64::from(nl) * self.l
                + f64::from(nlp) * self.lp
                + f64::from(nf) * self.f
                + f64::from(nd) * self.d
                + f64::from(nom) * self.om,
            TWOPI,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NutationIAU2000B;

impl NutationIAU2000B {
    pub fn new() -> Self {
        Self
    }

    /// Nutation at the two-part TT Julian date `jd1 + jd2`.
    pub fn compute(&self, jd1: f64, jd2: f64) -> AstroResult<NutationResult> {
        Ok(self.compute_centuries(jd_to_centuries(jd1, jd2)))
    }

    /// Nutation at `t` Julian centuries of TT since J2000.0.
    pub fn compute_centuries(&self, t: f64) -> NutationResult {
        let args = DelaunayArguments::at(t);

        let mut dpsi = 0.0;
        let mut deps = 0.0;

        // Smallest terms first.
        for &(nl, nlp, nf, nd, nom, sp, spt, cp, ce, cet, se) in TERMS.iter().rev() {
            let arg = args.combine(nl, nlp, nf, nd, nom);
            let (sarg, carg) = libm::sincos(arg);
            dpsi += (sp + spt * t) * sarg + cp * carg;
            deps += (ce + cet * t) * carg + se * sarg;
        }

        NutationResult {
            delta_psi: dpsi * U2R + PLANETARY_BIAS_LONGITUDE,
            delta_eps: deps * U2R + PLANETARY_BIAS_OBLIQUITY,
        }
    }
}
