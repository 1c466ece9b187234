//! Constants shared by the pipeline stages.

/// Wavelength used for refraction when none is configured, in micrometres.
pub const DEFAULT_WAVELENGTH_UM: f64 = 0.55;

/// Equatorial horizontal parallax of a body at 1 AU, in arcseconds.
pub const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// Largest day gap the EOP table interpolates across by default.
pub const DEFAULT_EOP_MAX_GAP_DAYS: f64 = 5.0;

/// Threshold separating optical from radio refraction, in micrometres.
pub const RADIO_WAVELENGTH_THRESHOLD_UM: f64 = 100.0;

/// TIO locator rate, arcseconds per Julian century.
pub const S_PRIME_RATE_ARCSEC: f64 = -47e-6;

/// Distances below this are solar-system bodies whose catalog place is
/// already geocentric; annual parallax is applied only beyond it, in AU.
pub const MIN_STELLAR_DISTANCE_AU: f64 = 1.0e4;
