use super::equatorial::Equatorial;
use crate::frame::Frame;
use crate::quantities::{Distance, Velocity};
use crate::{CoordError, CoordResult};
use skyframe_core::{Angle, Vector3};
use skyframe_time::Epoch;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangular position in AU, with an optional velocity in AU/day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cartesian {
    position: Vector3,
    velocity: Option<Vector3>,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> CoordResult<Self> {
        Self::from_position(Vector3::new(x, y, z))
    }

    pub fn from_position(position: Vector3) -> CoordResult<Self> {
        if !position.is_finite() {
            return Err(CoordError::invalid_argument(format!(
                "Cartesian position must be finite, got {:?}",
                position
            )));
        }
        Ok(Self {
            position,
            velocity: None,
        })
    }

    pub(crate) fn from_finite(position: Vector3) -> Self {
        Self {
            position,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector3) -> CoordResult<Self> {
        if !velocity.is_finite() {
            return Err(CoordError::invalid_argument(
                "Cartesian velocity must be finite",
            ));
        }
        self.velocity = Some(velocity);
        Ok(self)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Option<Vector3> {
        self.velocity
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn r(&self) -> f64 {
        self.position.magnitude()
    }

    /// Radial velocity, AU/day. `None` without a velocity or at the origin.
    pub fn vr(&self) -> Option<f64> {
        let v = self.velocity?;
        let r = self.r();
        if r == 0.0 {
            return None;
        }
        Some(self.position.dot(&v) / r)
    }

    pub fn radial_velocity(&self) -> Option<Velocity> {
        self.vr().and_then(|vr| Velocity::from_au_per_day(vr).ok())
    }

    /// Componentwise sum. The velocity is summed only when both operands carry
    /// one; otherwise the receiver keeps its own.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Cartesian) -> Cartesian {
        Cartesian {
            position: self.position + other.position,
            velocity: match (self.velocity, other.velocity) {
                (Some(a), Some(b)) => Some(a + b),
                _ => self.velocity,
            },
        }
    }

    pub fn subtract(&self, other: &Cartesian) -> Cartesian {
        Cartesian {
            position: self.position - other.position,
            velocity: match (self.velocity, other.velocity) {
                (Some(a), Some(b)) => Some(a - b),
                _ => self.velocity,
            },
        }
    }

    /// Spherical decomposition into an astrometric equatorial position.
    ///
    /// # Errors
    /// `InvalidArgument` for the zero vector.
    pub fn to_equatorial(&self, frame: Frame, epoch: Epoch) -> CoordResult<Equatorial> {
        if self.position.is_zero() {
            return Err(CoordError::invalid_argument(
                "cannot convert the zero vector to spherical coordinates",
            ));
        }

        let Vector3 { x, y, z } = self.position;
        let ra = Angle::from_radians(libm::atan2(y, x)).normalized();
        let dec = Angle::from_radians(libm::atan2(z, libm::hypot(x, y)));

        let mut eq = Equatorial::new(frame, epoch, ra, dec)?;
        eq.set_distance(Some(Distance::from_au(self.r())?));
        Ok(eq)
    }
}

impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.9}, {:.9}, {:.9}) AU",
            self.position.x, self.position.y, self.position.z
        )?;
        if let Some(v) = self.velocity {
            write!(f, " v=({:.9}, {:.9}, {:.9}) AU/d", v.x, v.y, v.z)?;
        }
        Ok(())
    }
}
