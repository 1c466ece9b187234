//! Error types for the numerical core.
//!
//! Every fallible function in this crate returns [`AstroResult<T>`]. The variants
//! carry enough context (operation name, kind) to tell a bad input apart from a
//! numerical breakdown:
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidDate`](AstroError::InvalidDate) | Calendar validation failures | No |
//! | [`MathError`](AstroError::MathError) | Out-of-range input, non-finite values, domain errors | No |
//! | [`CalculationError`](AstroError::CalculationError) | Algorithm failures | No |
//!
//! ```
//! use skyframe_core::{AstroError, MathErrorKind};
//!
//! fn checked_asin(x: f64) -> Result<f64, AstroError> {
//!     if x.abs() > 1.0 {
//!         return Err(AstroError::math_error(
//!             "checked_asin",
//!             MathErrorKind::OutOfRange,
//!             "argument outside [-1, 1]",
//!         ));
//!     }
//!     Ok(x.asin())
//! }
//! # assert!(checked_asin(2.0).is_err());
//! ```

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    DivisionByZero,
    InvalidInput,
    NotFinite,
    OutOfRange,
    DomainError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the math error kind, if this is a [`AstroError::MathError`].
    pub fn math_kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
