//! Small numerical helpers shared by the series evaluators.

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Great-circle separation by the Vincenty formula, stable at all separations.
///
/// Takes the sines and cosines of both latitudes so callers that already hold them
/// avoid recomputing.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::hypot(
        cos_lat2 * sin_delta_lon,
        cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon,
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Evaluates `c[0] + c[1]·t + c[2]·t² + …` by Horner's rule.
#[inline]
pub fn polynomial(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}
