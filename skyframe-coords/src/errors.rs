use skyframe_core::{AstroError, MathErrorKind};
use skyframe_time::TimeError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Transformation precondition failed: {message}")]
    TransformationPrecondition { message: String },

    #[error("Numeric domain error in {operation}: {message}")]
    NumericDomain { operation: String, message: String },

    #[error("Epoch conversion failed: {source}")]
    Epoch {
        #[from]
        source: TimeError,
    },

    #[error("Core astronomical calculation failed: {message}")]
    Core { message: String },

    #[error("Data not available: {message}")]
    DataUnavailable { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl CoordError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::TransformationPrecondition {
            message: message.into(),
        }
    }

    pub fn numeric_domain(operation: &str, message: impl Into<String>) -> Self {
        Self::NumericDomain {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Range and finiteness failures are caller mistakes; domain failures keep
/// their own kind; anything else stays a core error.
impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        match &error {
            AstroError::MathError {
                operation,
                kind: MathErrorKind::DomainError,
                message,
            } => Self::numeric_domain(operation, message.clone()),
            AstroError::MathError {
                kind: MathErrorKind::OutOfRange | MathErrorKind::NotFinite | MathErrorKind::InvalidInput,
                ..
            }
            | AstroError::InvalidDate { .. } => Self::invalid_argument(error.to_string()),
            _ => Self::Core {
                message: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_maps_to_numeric_domain() {
        let core = AstroError::math_error("asin", MathErrorKind::DomainError, "argument 1.5");
        let err: CoordError = core.into();
        assert!(matches!(err, CoordError::NumericDomain { ref operation, .. } if operation == "asin"));
    }

    #[test]
    fn test_out_of_range_maps_to_invalid_argument() {
        let core = AstroError::math_error("validate_declination", MathErrorKind::OutOfRange, "Dec");
        let err: CoordError = core.into();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_calculation_error_maps_to_core() {
        let err: CoordError = AstroError::calculation_error("cio", "bad").into();
        assert!(matches!(err, CoordError::Core { .. }));
    }

    #[test]
    fn test_time_error_wraps() {
        let err: CoordError = TimeError::InvalidDate("month 13".into()).into();
        assert!(err.to_string().contains("month 13"));
    }
}
