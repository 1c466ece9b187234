/// Nutation angles, radians.
///
/// `delta_psi` is measured along the ecliptic, `delta_eps` is the change in
/// obliquity; the true obliquity is the mean obliquity plus `delta_eps`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutationResult {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

impl NutationResult {
    /// Equation of the equinoxes, classical part: Δψ·cos ε.
    pub fn equation_of_equinoxes(&self, true_obliquity: f64) -> f64 {
        self.delta_psi * libm::cos(true_obliquity)
    }
}
