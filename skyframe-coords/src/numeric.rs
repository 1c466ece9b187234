use crate::CoordResult;
use skyframe_core::angle::clamped_asin;
use tracing::trace;

/// `asin` with overshoots up to 1e-12 clamped; larger ones are `NumericDomain`.
pub(crate) fn checked_asin(x: f64, operation: &str) -> CoordResult<f64> {
    if x.abs() > 1.0 && x.is_finite() {
        trace!(operation, argument = x, "clamping asin argument");
    }
    Ok(clamped_asin(x, operation)?)
}
