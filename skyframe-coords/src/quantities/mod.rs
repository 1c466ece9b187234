//! Physical quantities carried alongside positions.
//!
//! Each type validates its range once at construction and exposes typed
//! accessors in the units the pipeline consumes.

mod distance;
mod velocity;
mod weather;

pub use distance::Distance;
pub use velocity::Velocity;
pub use weather::{Pressure, RelativeHumidity, Temperature, Weather};
