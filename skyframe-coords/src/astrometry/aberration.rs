use skyframe_core::constants::{SCHWARZSCHILD_RADIUS_SUN_AU, SPEED_OF_LIGHT_AU_PER_DAY};
use skyframe_core::Vector3;

/// Deflection of starlight by the Sun.
///
/// `direction` is the unit vector to the source, `sun_to_observer` the unit
/// vector from the Sun to the observer and `sun_distance_au` its length.
/// Sources are taken at infinity, so the Sun→source direction equals the
/// observer→source direction.
pub fn apply_light_deflection(
    direction: Vector3,
    sun_to_observer: Vector3,
    sun_distance_au: f64,
) -> Vector3 {
    let em2 = sun_distance_au * sun_distance_au;
    let dlim = 1e-6 / em2.max(1.0);

    let q = direction;
    let e = sun_to_observer;

    let qdqpe = q.dot(&(q + e));
    let w = SCHWARZSCHILD_RADIUS_SUN_AU / sun_distance_au / qdqpe.max(dlim);

    let peq = direction.cross(&e.cross(&q));
    direction + peq * w
}

/// Relativistic annual aberration.
///
/// `velocity_au_day` is the observer's barycentric velocity.
pub fn apply_aberration(direction: Vector3, velocity_au_day: Vector3, sun_distance_au: f64) -> Vector3 {
    let v = velocity_au_day / SPEED_OF_LIGHT_AU_PER_DAY;
    let bm1 = libm::sqrt(1.0 - v.magnitude_squared());

    let pdv = direction.dot(&v);
    let w1 = 1.0 + pdv / (1.0 + bm1);
    let w2 = SCHWARZSCHILD_RADIUS_SUN_AU / sun_distance_au;

    let p = direction * bm1 + v * w1 + (v - direction * pdv) * w2;
    p.normalize()
}

/// Moves the observer from the barycentre to `observer_au`, for a source at
/// `distance_au` along `direction`.
pub fn apply_annual_parallax(direction: Vector3, distance_au: f64, observer_au: Vector3) -> Vector3 {
    (direction * distance_au - observer_au).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_core::constants::ARCSEC_PER_RAD;

    fn separation_arcsec(a: Vector3, b: Vector3) -> f64 {
        libm::atan2(a.cross(&b).magnitude(), a.dot(&b)) * ARCSEC_PER_RAD
    }

    #[test]
    fn test_aberration_perpendicular_to_motion() {
        // 29.78 km/s gives the classic 20.5″ constant.
        let v = Vector3::new(0.0172, 0.0, 0.0);
        let p = Vector3::new(0.0, 1.0, 0.0);
        let shifted = apply_aberration(p, v, 1.0);
        let sep = separation_arcsec(p, shifted);
        assert!((sep - 20.49).abs() < 0.05, "aberration {}″", sep);
        assert!(shifted.x > 0.0);
    }

    #[test]
    fn test_aberration_along_motion_is_small() {
        let v = Vector3::new(0.0172, 0.0, 0.0);
        let p = Vector3::new(1.0, 0.0, 0.0);
        let shifted = apply_aberration(p, v, 1.0);
        assert!(separation_arcsec(p, shifted) < 1e-6);
    }

    #[test]
    fn test_deflection_at_quadrature() {
        // 90° from the Sun the deflection is ~4 mas.
        let e = Vector3::new(1.0, 0.0, 0.0);
        let p = Vector3::new(0.0, 1.0, 0.0);
        let deflected = apply_light_deflection(p, e, 1.0);
        let sep = separation_arcsec(p, deflected) * 1000.0;
        assert!((sep - 4.07).abs() < 0.05, "deflection {} mas", sep);
    }

    #[test]
    fn test_deflection_limited_behind_sun() {
        let e = Vector3::new(1.0, 0.0, 0.0);
        let p = Vector3::new(-1.0, 1e-9, 0.0).normalize();
        let deflected = apply_light_deflection(p, e, 1.0);
        assert!(deflected.is_finite());
    }

    #[test]
    fn test_parallax_shift() {
        // 1 pc star perpendicular to a 1 AU baseline moves by 1″.
        let p = Vector3::new(0.0, 0.0, 1.0);
        let shifted = apply_annual_parallax(p, ARCSEC_PER_RAD, Vector3::new(1.0, 0.0, 0.0));
        assert!((separation_arcsec(p, shifted) - 1.0).abs() < 1e-6);
    }
}
