//! The transformation engine's shared context.
//!
//! A [`Transformer`] bundles the Earth orientation provider, the astrometry
//! implementation and a [`TransformConfig`]. It holds only read-only data, so one
//! instance can be shared across threads and reused for any number of
//! coordinates.
//!
//! ```
//! use skyframe_coords::{MissingObserverPolicy, Transformer};
//!
//! let transformer = Transformer::builder()
//!     .wavelength(0.65)
//!     .missing_observer(MissingObserverPolicy::Reject)
//!     .build()
//!     .unwrap();
//! assert_eq!(transformer.config().wavelength_um, 0.65);
//! ```

use crate::astrometry::{Astrometry, ObservedPlace, ObservedRequest, StandardAstrometry};
use crate::constants::{DEFAULT_EOP_MAX_GAP_DAYS, DEFAULT_WAVELENGTH_UM};
use crate::eop::{EarthOrientation, EopParameters, EopRecord, EopTable, InterpolationMethod, ZeroEop};
use crate::geo::Geo;
use crate::quantities::{Distance, Weather};
use crate::{CoordError, CoordResult};
use skyframe_core::angle::wrap_0_2pi;
use skyframe_time::{Epoch, JulianDate};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `to_horizontal` does when the coordinate carries no observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingObserverPolicy {
    /// Observe from latitude 0, longitude 0 at sea level.
    #[default]
    GeocentricHorizon,

    Reject,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Effective wavelength for refraction, micrometres.
    pub wavelength_um: f64,

    pub missing_observer: MissingObserverPolicy,

    pub eop_interpolation: InterpolationMethod,

    pub eop_max_gap_days: f64,

    /// Use zero EOP instead of failing when the provider has no data.
    pub eop_fallback_to_zero: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            wavelength_um: DEFAULT_WAVELENGTH_UM,
            missing_observer: MissingObserverPolicy::GeocentricHorizon,
            eop_interpolation: InterpolationMethod::Linear,
            eop_max_gap_days: DEFAULT_EOP_MAX_GAP_DAYS,
            eop_fallback_to_zero: false,
        }
    }
}

impl TransformConfig {
    pub fn validate(&self) -> CoordResult<()> {
        if !self.wavelength_um.is_finite() || self.wavelength_um <= 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "wavelength must be positive, got {} µm",
                self.wavelength_um
            )));
        }
        if !self.eop_max_gap_days.is_finite() || self.eop_max_gap_days <= 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "EOP max gap must be positive, got {} days",
                self.eop_max_gap_days
            )));
        }
        Ok(())
    }
}

/// Result of the observed path for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub place: ObservedPlace,
    /// Equation of the origins at the observation instant, radians.
    pub eo: f64,
    pub refracted: bool,
}

impl Observation {
    /// Observed RA referred to the equinox, in [0, 2π).
    pub fn apparent_ra(&self) -> f64 {
        wrap_0_2pi(self.place.ra - self.eo)
    }

    pub fn altitude(&self) -> f64 {
        std::f64::consts::FRAC_PI_2 - self.place.zenith_distance
    }
}

#[derive(Clone)]
pub struct Transformer {
    config: TransformConfig,
    eop: Arc<dyn EarthOrientation + Send + Sync>,
    astrometry: Arc<dyn Astrometry>,
}

impl Transformer {
    /// Default configuration, zero EOP, built-in astrometry.
    pub fn new() -> Self {
        Self {
            config: TransformConfig::default(),
            eop: Arc::new(ZeroEop),
            astrometry: Arc::new(StandardAstrometry),
        }
    }

    pub fn builder() -> TransformerBuilder {
        TransformerBuilder::new()
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn astrometry(&self) -> &dyn Astrometry {
        self.astrometry.as_ref()
    }

    /// Earth orientation at a UTC instant.
    ///
    /// # Errors
    /// `DataUnavailable` from the provider, unless the configuration allows the
    /// zero fallback.
    pub fn eop_at(&self, utc: &JulianDate) -> CoordResult<EopParameters> {
        match self.eop.lookup(utc) {
            Ok(params) => Ok(params),
            Err(CoordError::DataUnavailable { message }) if self.config.eop_fallback_to_zero => {
                warn!(mjd = utc.to_mjd(), %message, "EOP unavailable, using zeros");
                Ok(EopParameters::zero(utc.to_mjd()))
            }
            Err(e) => Err(e),
        }
    }

    /// Geocentric apparent RA/Dec (radians), equinox-based RA.
    pub fn geocentric_apparent(
        &self,
        ra: f64,
        dec: f64,
        distance: Option<Distance>,
        epoch: &Epoch,
    ) -> CoordResult<(f64, f64)> {
        let tdb = epoch.to_tdb()?;
        let cirs = self
            .astrometry
            .icrs_to_cirs(ra, dec, distance.map(Distance::au), &tdb)?;
        debug!(%epoch, "geocentric apparent place");
        Ok((wrap_0_2pi(cirs.ra - cirs.eo), cirs.dec))
    }

    /// Runs ICRS → CIRS → observed for a catalog position seen from `observer`.
    ///
    /// Missing weather fields are taken as zero; no weather at all gives the
    /// refraction-free topocentric place.
    pub fn observe(
        &self,
        ra: f64,
        dec: f64,
        distance: Option<Distance>,
        epoch: &Epoch,
        observer: &Geo,
        weather: Option<&Weather>,
    ) -> CoordResult<Observation> {
        let utc = epoch.to_utc()?;
        let tdb = epoch.to_tdb()?;
        let eop = self.eop_at(&utc)?;

        let horizontal_parallax = match distance {
            Some(d) => d.horizontal_parallax()?.radians(),
            None => 0.0,
        };

        let cirs = self
            .astrometry
            .icrs_to_cirs(ra, dec, distance.map(Distance::au), &tdb)?;

        let mut request = ObservedRequest::new(utc, *observer);
        request.dut1 = eop.ut1_utc;
        request.xp = eop.x_p_radians();
        request.yp = eop.y_p_radians();
        request.wavelength_um = self.config.wavelength_um;
        request.horizontal_parallax = horizontal_parallax;
        if let Some(w) = weather {
            request.pressure_hpa = w.pressure_hpa();
            request.temperature_c = w.temperature_celsius();
            request.humidity = w.humidity_fraction();
        }

        let place = self.astrometry.cirs_to_observed(cirs.ra, cirs.dec, &request)?;
        debug!(
            %epoch,
            observer = %observer,
            pressure_hpa = request.pressure_hpa,
            "observed place"
        );

        Ok(Observation {
            place,
            eo: cirs.eo,
            refracted: request.pressure_hpa > 0.0,
        })
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub struct TransformerBuilder {
    config: TransformConfig,
    eop: Option<Arc<dyn EarthOrientation + Send + Sync>>,
    eop_records: Option<Vec<EopRecord>>,
    astrometry: Option<Arc<dyn Astrometry>>,
}

impl TransformerBuilder {
    pub fn new() -> Self {
        Self {
            config: TransformConfig::default(),
            eop: None,
            eop_records: None,
            astrometry: None,
        }
    }

    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_eop<E: EarthOrientation + 'static>(mut self, eop: E) -> Self {
        self.eop = Some(Arc::new(eop));
        self.eop_records = None;
        self
    }

    pub fn with_shared_eop(mut self, eop: Arc<dyn EarthOrientation + Send + Sync>) -> Self {
        self.eop = Some(eop);
        self.eop_records = None;
        self
    }

    /// Interpolates these records with the configured method and gap limit.
    pub fn with_eop_records(mut self, records: Vec<EopRecord>) -> Self {
        self.eop_records = Some(records);
        self.eop = None;
        self
    }

    pub fn with_astrometry<A: Astrometry + 'static>(mut self, astrometry: A) -> Self {
        self.astrometry = Some(Arc::new(astrometry));
        self
    }

    pub fn wavelength(mut self, wavelength_um: f64) -> Self {
        self.config.wavelength_um = wavelength_um;
        self
    }

    pub fn missing_observer(mut self, policy: MissingObserverPolicy) -> Self {
        self.config.missing_observer = policy;
        self
    }

    pub fn build(self) -> CoordResult<Transformer> {
        self.config.validate()?;

        let eop: Arc<dyn EarthOrientation + Send + Sync> = match (self.eop, self.eop_records) {
            (Some(eop), _) => eop,
            (None, Some(records)) => {
                debug!(records = records.len(), "building EOP table");
                Arc::new(
                    EopTable::new(records)
                        .with_method(self.config.eop_interpolation)
                        .with_max_gap(self.config.eop_max_gap_days),
                )
            }
            (None, None) => Arc::new(ZeroEop),
        };

        Ok(Transformer {
            config: self.config,
            eop,
            astrometry: self
                .astrometry
                .unwrap_or_else(|| Arc::new(StandardAstrometry)),
        })
    }
}

impl Default for TransformerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
