//! Nutation in longitude and obliquity.
//!
//! The pipeline uses a truncated IAU 2000B series: the twenty largest lunisolar
//! terms plus the fixed planetary bias. Against the full 77-term 2000B series the
//! truncation error stays below 1 mas in Δψ and 0.5 mas in Δε, which is well inside
//! what the observed-place reduction needs.
//!
//! ```
//! use skyframe_core::nutation::NutationIAU2000B;
//!
//! let n = NutationIAU2000B::new().compute(2451545.0, 0.0).unwrap();
//! // Δψ at J2000.0 is about −13.9″, Δε about −5.8″.
//! assert!((n.delta_psi.to_degrees() * 3600.0 + 13.93).abs() < 0.05);
//! assert!((n.delta_eps.to_degrees() * 3600.0 + 5.77).abs() < 0.05);
//! ```

pub mod iau2000b;
pub mod types;

pub use iau2000b::NutationIAU2000B;
pub use types::NutationResult;
