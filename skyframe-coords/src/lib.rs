//! Celestial coordinate transformations from catalog place to observed place.
//!
//! The crate takes an astrometric (ICRS-aligned catalog) position and produces
//! geocentric apparent, topocentric and observed (refracted) places, horizontal
//! altitude/azimuth and ecliptic coordinates.
//!
//! # Pipeline
//!
//! ```text
//! catalog RA/Dec ──ICRS→CIRS (TDB)──▶ CIRS RA/Dec, eo
//!                                       │
//!              ┌────────────────────────┴─────────────────────────┐
//!       no observer                                          observer
//!              │                                                  │
//!   RA − eo: geocentric apparent            CIRS→observed (UTC, ΔUT1, xp, yp, weather)
//!                                            ├─▶ observed RA − eo, Dec  (Equatorial)
//!                                            └─▶ az, 90° − zd           (Horizontal)
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coords`] | [`Equatorial`], [`Ecliptic`], [`Horizontal`], [`Cartesian`] |
//! | [`transformer`] | [`Transformer`], [`TransformConfig`], builder |
//! | [`astrometry`] | ICRS→CIRS and CIRS→observed behind the [`Astrometry`](astrometry::Astrometry) trait |
//! | [`eop`] | Earth orientation records, tables and the finals2000A reader |
//! | [`format`] | Template rendering of coordinates |
//! | [`quantities`] | [`Distance`], [`Velocity`], [`Weather`] |
//!
//! # Example
//!
//! ```
//! use skyframe_coords::{Equatorial, Frame, Geo, Transformer};
//! use skyframe_time::{Epoch, TimeScale};
//!
//! let epoch = Epoch::from_calendar(TimeScale::UTC, 2024, 6, 1, 4, 0, 0.0).unwrap();
//! let mut vega = Equatorial::from_hours_degrees(Frame::icrf(), epoch, 18.615648, 38.783689).unwrap();
//! vega.set_topo(Some(Geo::from_degrees(38.9, -77.0, 50.0).unwrap()));
//!
//! let horizon = vega.to_horizontal(&Transformer::new(), None).unwrap();
//! println!("{horizon}");
//! ```

pub mod astrometry;
pub mod constants;
pub mod coords;
pub mod eop;
pub mod errors;
pub mod format;
pub mod frame;
pub mod geo;
mod numeric;
pub mod quantities;
pub mod transformer;

pub use coords::{Cartesian, Ecliptic, Equatorial, Horizontal, PlaceKind};
pub use eop::{EarthOrientation, EopParameters, EopRecord, EopTable, ZeroEop};
pub use errors::{CoordError, CoordResult};
pub use frame::{Frame, FrameKind};
pub use geo::{Ellipsoid, Geo};
pub use quantities::{Distance, Velocity, Weather};
pub use transformer::{MissingObserverPolicy, TransformConfig, Transformer, TransformerBuilder};

pub use skyframe_core::Angle;
