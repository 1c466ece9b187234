//! Rotation matrices in the ERFA sign convention.
//!
//! `rotate_*` pre-multiply: after `m.rotate_z(a)` the matrix is `Rz(a) · m`.
//! A positive angle rotates the *frame* anticlockwise seen from the positive axis,
//! so a fixed vector appears to move clockwise. Building a chain such as
//! `Rz(−s)·Rx(…)·Rz(…)` is therefore written as successive calls in the order the
//! rotations are applied.
//!
//! ```
//! use skyframe_core::RotationMatrix3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(FRAC_PI_2);
//! let v = m.apply_to_vector([1.0, 0.0, 0.0]);
//! assert!(v[0].abs() < 1e-15 && (v[1] + 1.0).abs() < 1e-15);
//! ```

use core::fmt;

use super::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// `self ← Rx(phi) · self`.
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);
        let e = &mut self.elements;
        for col in 0..3 {
            let r1 = e[1][col];
            let r2 = e[2][col];
            e[1][col] = c * r1 + s * r2;
            e[2][col] = -s * r1 + c * r2;
        }
    }

    /// `self ← Ry(theta) · self`.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        let e = &mut self.elements;
        for col in 0..3 {
            let r0 = e[0][col];
            let r2 = e[2][col];
            e[0][col] = c * r0 - s * r2;
            e[2][col] = s * r0 + c * r2;
        }
    }

    /// `self ← Rz(psi) · self`.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        let e = &mut self.elements;
        for col in 0..3 {
            let r0 = e[0][col];
            let r1 = e[1][col];
            e[0][col] = c * r0 + s * r1;
            e[1][col] = -s * r0 + c * r1;
        }
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[i][0] * other.elements[0][j]
                    + self.elements[i][1] * other.elements[1][j]
                    + self.elements[i][2] * other.elements[2][j];
            }
        }
        Self { elements: out }
    }

    pub fn apply_to_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let e = &self.elements;
        [
            e[0][0] * v[0] + e[0][1] * v[1] + e[0][2] * v[2],
            e[1][0] * v[0] + e[1][1] * v[1] + e[1][2] * v[2],
            e[2][0] * v[0] + e[2][1] * v[1] + e[2][2] * v[2],
        ]
    }

    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self {
            elements: [
                [e[0][0], e[1][0], e[2][0]],
                [e[0][1], e[1][1], e[2][1]],
                [e[0][2], e[1][2], e[2][2]],
            ],
        }
    }

    pub fn determinant(&self) -> f64 {
        let e = &self.elements;
        e[0][0] * (e[1][1] * e[2][2] - e[1][2] * e[2][1])
            - e[0][1] * (e[1][0] * e[2][2] - e[1][2] * e[2][0])
            + e[0][2] * (e[1][0] * e[2][1] - e[1][1] * e[2][0])
    }

    /// True when `MᵀM ≈ I` and `det M ≈ 1` within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let product = self.transpose().multiply(self);
        let identity = Self::identity();
        product.max_difference(&identity) <= tolerance
            && (self.determinant() - 1.0).abs() <= tolerance
    }

    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
        }
        max
    }

    /// Rotates a direction given as spherical angles and returns `(lon, lat)`.
    ///
    /// Longitude is in (-π, π]; latitude is clamped into [-π/2, π/2].
    pub fn transform_spherical(&self, lon: f64, lat: f64) -> (f64, f64) {
        let v = self * Vector3::from_spherical(lon, lat);
        v.to_spherical()
    }
}

impl core::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl core::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(v.to_array()))
    }
}

impl core::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(v.to_array()))
    }
}

impl core::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
