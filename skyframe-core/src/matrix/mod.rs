//! 3×3 rotations and 3-vectors for frame changes.
//!
//! - [`RotationMatrix3`]: orthogonal matrix, composed in place with ERFA-style
//!   `rotate_x`/`rotate_y`/`rotate_z`
//! - [`Vector3`]: Cartesian vector with spherical conversions

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
