use crate::{CoordError, CoordResult};
use skyframe_core::constants::{AU_KM, SECONDS_PER_DAY_F64};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed, finite speed. Stored in AU per day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Velocity {
    au_per_day: f64,
}

impl Velocity {
    pub fn from_au_per_day(au_per_day: f64) -> CoordResult<Self> {
        if !au_per_day.is_finite() {
            return Err(CoordError::invalid_argument(format!(
                "Velocity must be finite, got {}",
                au_per_day
            )));
        }
        Ok(Self { au_per_day })
    }

    pub fn from_km_per_s(km_per_s: f64) -> CoordResult<Self> {
        Self::from_au_per_day(km_per_s * SECONDS_PER_DAY_F64 / AU_KM)
    }

    pub fn au_per_day(self) -> f64 {
        self.au_per_day
    }

    pub fn km_per_s(self) -> f64 {
        self.au_per_day * AU_KM / SECONDS_PER_DAY_F64
    }

    pub fn is_receding(self) -> bool {
        self.au_per_day > 0.0
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} km/s", self.km_per_s())
    }
}
