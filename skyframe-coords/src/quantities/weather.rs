//! Surface weather at the observer: pressure, temperature, relative humidity.
//!
//! A [`Weather`] with no field set is the same as no weather at all. Missing
//! fields resolve to zero, so a weather value without pressure never refracts.

use crate::{CoordError, CoordResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    hpa: f64,
}

impl Pressure {
    pub fn from_hpa(hpa: f64) -> CoordResult<Self> {
        if !hpa.is_finite() || hpa < 0.0 {
            return Err(CoordError::invalid_argument(format!(
                "Pressure must be non-negative and finite, got {} hPa",
                hpa
            )));
        }
        Ok(Self { hpa })
    }

    pub fn from_pascals(pa: f64) -> CoordResult<Self> {
        Self::from_hpa(pa / 100.0)
    }

    pub fn from_mmhg(mmhg: f64) -> CoordResult<Self> {
        Self::from_hpa(mmhg * 1.333_223_874)
    }

    pub fn hpa(self) -> f64 {
        self.hpa
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    const ABSOLUTE_ZERO_C: f64 = -273.15;

    pub fn from_celsius(celsius: f64) -> CoordResult<Self> {
        if !celsius.is_finite() || celsius < Self::ABSOLUTE_ZERO_C {
            return Err(CoordError::invalid_argument(format!(
                "Temperature must be finite and above absolute zero, got {} °C",
                celsius
            )));
        }
        Ok(Self { celsius })
    }

    pub fn from_kelvin(kelvin: f64) -> CoordResult<Self> {
        Self::from_celsius(kelvin + Self::ABSOLUTE_ZERO_C)
    }

    pub fn from_fahrenheit(fahrenheit: f64) -> CoordResult<Self> {
        Self::from_celsius((fahrenheit - 32.0) * 5.0 / 9.0)
    }

    pub fn celsius(self) -> f64 {
        self.celsius
    }

    pub fn kelvin(self) -> f64 {
        self.celsius - Self::ABSOLUTE_ZERO_C
    }
}

/// Relative humidity as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelativeHumidity {
    fraction: f64,
}

impl RelativeHumidity {
    pub fn from_fraction(fraction: f64) -> CoordResult<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(CoordError::invalid_argument(format!(
                "Relative humidity must be in [0, 1], got {}",
                fraction
            )));
        }
        Ok(Self { fraction })
    }

    pub fn from_percent(percent: f64) -> CoordResult<Self> {
        Self::from_fraction(percent / 100.0)
    }

    pub fn fraction(self) -> f64 {
        self.fraction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    pub pressure: Option<Pressure>,
    pub temperature: Option<Temperature>,
    pub humidity: Option<RelativeHumidity>,
}

impl Weather {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard sea-level atmosphere: 1013.25 hPa, 15 °C, 0 % humidity.
    pub fn standard() -> Self {
        Self {
            pressure: Some(Pressure { hpa: 1013.25 }),
            temperature: Some(Temperature { celsius: 15.0 }),
            humidity: Some(RelativeHumidity { fraction: 0.0 }),
        }
    }

    pub fn with_pressure(mut self, pressure: Pressure) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_humidity(mut self, humidity: RelativeHumidity) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.pressure.is_none() && self.temperature.is_none() && self.humidity.is_none()
    }

    pub fn pressure_hpa(&self) -> f64 {
        self.pressure.map_or(0.0, Pressure::hpa)
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature.map_or(0.0, Temperature::celsius)
    }

    pub fn humidity_fraction(&self) -> f64 {
        self.humidity.map_or(0.0, RelativeHumidity::fraction)
    }

    pub fn refracts(&self) -> bool {
        self.pressure_hpa() > 0.0
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P={:.2} hPa, T={:.1} °C, RH={:.0}%",
            self.pressure_hpa(),
            self.temperature_celsius(),
            self.humidity_fraction() * 100.0
        )
    }
}
