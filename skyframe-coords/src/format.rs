//! Template rendering of coordinate values.
//!
//! A [`FormatSpec`] is a list of items: either a field (a [`Component`] of the
//! value, a [`Unit`] and a number of fractional digits) or a literal string.
//! Rendering a value that lacks a requested component is an error.
//!
//! | Unit | Example | Sign |
//! |------|---------|------|
//! | [`Unit::Hms`] | `05h 34m 31.94s` | wrapped to [0h, 24h) |
//! | [`Unit::Dms`] | `+22° 00' 52.2"` | always shown |
//! | [`Unit::Degrees`] | `83.633083` | only when negative |
//!
//! ```
//! use skyframe_coords::format::{Component, FormatSpec, Unit};
//! use skyframe_coords::{Equatorial, Frame};
//! use skyframe_time::Epoch;
//!
//! let crab = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 83.633083, 22.0145).unwrap();
//! let spec = FormatSpec::new()
//!     .field(Component::Ra, Unit::Hms, 2)
//!     .literal(", ")
//!     .field(Component::Dec, Unit::Dms, 1);
//! assert_eq!(spec.render(&crab).unwrap(), "05h 34m 31.94s, +22° 00' 52.2\"");
//! ```

use crate::coords::{Ecliptic, Equatorial, Horizontal};
use crate::geo::Geo;
use crate::{CoordError, CoordResult};
use skyframe_core::angle::SexagesimalUnit;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Component {
    Ra,
    Dec,
    /// Ecliptic or geographic longitude.
    Lon,
    /// Ecliptic or geographic latitude.
    Lat,
    Alt,
    Az,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Component::Ra => "ra",
            Component::Dec => "dec",
            Component::Lon => "lon",
            Component::Lat => "lat",
            Component::Alt => "alt",
            Component::Az => "az",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Hms,
    Dms,
    Degrees,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatItem {
    Field {
        component: Component,
        unit: Unit,
        precision: u8,
    },
    Literal(String),
}

/// Values whose angular components can be rendered by a [`FormatSpec`].
pub trait Formattable {
    fn component(&self, component: Component) -> Option<Angle>;
}

impl Formattable for Equatorial {
    fn component(&self, component: Component) -> Option<Angle> {
        match component {
            Component::Ra => Some(self.ra()),
            Component::Dec => Some(self.dec()),
            _ => None,
        }
    }
}

impl Formattable for Ecliptic {
    fn component(&self, component: Component) -> Option<Angle> {
        match component {
            Component::Lon => Some(self.lon()),
            Component::Lat => Some(self.lat()),
            _ => None,
        }
    }
}

impl Formattable for Horizontal {
    fn component(&self, component: Component) -> Option<Angle> {
        match component {
            Component::Alt => Some(self.alt()),
            Component::Az => Some(self.az()),
            _ => None,
        }
    }
}

impl Formattable for Geo {
    fn component(&self, component: Component) -> Option<Angle> {
        match component {
            Component::Lat => Some(self.lat()),
            Component::Lon => Some(self.lon()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpec {
    items: Vec<FormatItem>,
}

impl FormatSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, component: Component, unit: Unit, precision: u8) -> Self {
        self.items.push(FormatItem::Field {
            component,
            unit,
            precision,
        });
        self
    }

    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.items.push(FormatItem::Literal(text.into()));
        self
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    /// `RA (HMS) Dec (DMS)` separated by a space.
    pub fn ra_dec(precision: u8) -> Self {
        Self::new()
            .field(Component::Ra, Unit::Hms, precision)
            .literal(" ")
            .field(Component::Dec, Unit::Dms, precision.saturating_sub(1))
    }

    /// `Alt Az` in decimal degrees.
    pub fn alt_az(precision: u8) -> Self {
        Self::new()
            .field(Component::Alt, Unit::Degrees, precision)
            .literal(" ")
            .field(Component::Az, Unit::Degrees, precision)
    }

    pub fn render<T: Formattable + ?Sized>(&self, value: &T) -> CoordResult<String> {
        let mut out = String::new();
        for item in &self.items {
            match item {
                FormatItem::Literal(text) => out.push_str(text),
                FormatItem::Field {
                    component,
                    unit,
                    precision,
                } => {
                    let angle = value.component(*component).ok_or_else(|| {
                        CoordError::invalid_argument(format!(
                            "value has no '{}' component",
                            component.name()
                        ))
                    })?;
                    out.push_str(&render_angle(angle, *unit, *precision));
                }
            }
        }
        Ok(out)
    }
}

fn render_angle(angle: Angle, unit: Unit, precision: u8) -> String {
    match unit {
        Unit::Hms => angle
            .to_sexagesimal(SexagesimalUnit::Hours, precision)
            .to_string(),
        Unit::Dms => angle
            .to_sexagesimal(SexagesimalUnit::Degrees, precision)
            .to_string(),
        Unit::Degrees => format!("{:.*}", precision as usize, angle.degrees()),
    }
}

impl fmt::Display for FormatSpec {
    /// Template form, e.g. `{ra:hms:2}, {dec:dms:1}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            match item {
                FormatItem::Literal(text) => f.write_str(text)?,
                FormatItem::Field {
                    component,
                    unit,
                    precision,
                } => {
                    let unit = match unit {
                        Unit::Hms => "hms",
                        Unit::Dms => "dms",
                        Unit::Degrees => "deg",
                    };
                    write!(f, "{{{}:{}:{}}}", component.name(), unit, precision)?;
                }
            }
        }
        Ok(())
    }
}
