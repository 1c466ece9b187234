use super::core::Angle;
use crate::constants::{HALF_PI, PI};
use crate::{AstroError, MathErrorKind};

pub fn validate_right_ascension(angle: Angle) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if rad.is_finite() {
        return Ok(Angle::from_radians(super::normalize::wrap_0_2pi(rad)));
    }

    Err(AstroError::math_error(
        "validate_right_ascension",
        MathErrorKind::NotFinite,
        "RA not finite",
    ))
}

pub fn validate_declination(angle: Angle) -> Result<Angle, AstroError> {
    check_half_turn(angle, "validate_declination", "Dec")
}

pub fn validate_latitude(angle: Angle) -> Result<Angle, AstroError> {
    check_half_turn(angle, "validate_latitude", "Lat")
}

fn check_half_turn(angle: Angle, operation: &str, label: &str) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            operation,
            MathErrorKind::NotFinite,
            &format!("{label} not finite"),
        ));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        operation,
        MathErrorKind::OutOfRange,
        &format!("{label} {:.6}° out of range [-90°, +90°]", angle.degrees()),
    ))
}

pub fn validate_longitude(angle: Angle, normalize: bool) -> Result<Angle, AstroError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_longitude",
            MathErrorKind::NotFinite,
            "Lon not finite",
        ));
    }

    if normalize {
        return Ok(Angle::from_radians(super::normalize::wrap_0_2pi(rad)));
    }

    if (-PI..=PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_longitude",
        MathErrorKind::OutOfRange,
        &format!("Lon {:.6}° out of range [-180°, +180°]", angle.degrees()),
    ))
}
