//! ICRS → CIRS for a star: parallax, light deflection, aberration, then the
//! GCRS→CIRS rotation from IAU 2006 precession, IAU 2000B nutation and the
//! CIO locator.

use super::aberration::{apply_aberration, apply_annual_parallax, apply_light_deflection};
use super::earth::earth_state;
use super::CirsPlace;
use crate::constants::MIN_STELLAR_DISTANCE_AU;
use crate::CoordResult;
use skyframe_core::angle::wrap_0_2pi;
use skyframe_core::nutation::NutationIAU2000B;
use skyframe_core::precession::PrecessionIAU2006;
use skyframe_core::utils::jd_to_centuries;
use skyframe_core::{CioSolution, Vector3};
use skyframe_time::JulianDate;
use tracing::trace;

pub fn icrs_to_cirs(
    ra: f64,
    dec: f64,
    distance_au: Option<f64>,
    tdb: &JulianDate,
) -> CoordResult<CirsPlace> {
    let earth = earth_state(tdb);
    let sun_distance = earth.sun_distance();

    let mut p = Vector3::from_spherical(ra, dec);
    if let Some(d) = distance_au.filter(|d| *d >= MIN_STELLAR_DISTANCE_AU) {
        p = apply_annual_parallax(p, d, earth.heliocentric_position);
    }
    p = apply_light_deflection(p, earth.sun_to_earth(), sun_distance);
    p = apply_aberration(p, earth.heliocentric_velocity, sun_distance);

    let t = jd_to_centuries(tdb.jd1(), tdb.jd2());
    let nutation = NutationIAU2000B::new().compute(tdb.jd1(), tdb.jd2())?;
    let npb = PrecessionIAU2006::new().npb_matrix(t, nutation.delta_psi, nutation.delta_eps);
    let cio = CioSolution::calculate(&npb, t)?;

    let (cirs_ra, cirs_dec) = (cio.gcrs_to_cirs() * p).to_spherical();
    trace!(t, eo = cio.equation_of_origins, "icrs to cirs");

    Ok(CirsPlace {
        ra: wrap_0_2pi(cirs_ra),
        dec: cirs_dec,
        eo: cio.equation_of_origins,
    })
}
