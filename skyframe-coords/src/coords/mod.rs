//! Coordinate value types.

mod cartesian;
mod ecliptic;
mod equatorial;
mod horizontal;

pub use cartesian::Cartesian;
pub use ecliptic::{ecliptic_to_equatorial, equatorial_to_ecliptic, obliquity_at, Ecliptic};
pub use equatorial::{ApparentPlace, Astrometric, Equatorial, PlaceKind};
pub use horizontal::Horizontal;
