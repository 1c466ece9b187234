use skyframe_core::{Angle, Vector3};
use skyframe_coords::coords::{ecliptic_to_equatorial, equatorial_to_ecliptic};
use skyframe_coords::format::{Component, FormatSpec, Unit};
use skyframe_coords::{
    Cartesian, Distance, Ecliptic, Equatorial, Frame, Geo, Horizontal, Transformer,
};
use skyframe_time::{Epoch, TimeScale};

const EPS_J2000_DEG: f64 = 23.4392794;

fn eps() -> Angle {
    Angle::from_degrees(EPS_J2000_DEG)
}

// --- ecliptic ---

#[test]
fn solstice_point_maps_to_obliquity() {
    let (ra, dec) = ecliptic_to_equatorial(90f64.to_radians(), 0.0, eps()).unwrap();
    assert!((ra.to_degrees() - 90.0).abs() < 1e-10);
    assert!((dec.to_degrees() - EPS_J2000_DEG).abs() < 1e-10);

    let (lon, lat) = equatorial_to_ecliptic(ra, dec, eps()).unwrap();
    assert!((lon.to_degrees() - 90.0).abs() < 1e-10);
    assert!(lat.abs() < 1e-12);
}

#[test]
fn ecliptic_longitude_wraps_into_range() {
    let (lon, _) = equatorial_to_ecliptic(359.99f64.to_radians(), -0.01f64.to_radians(), eps())
        .unwrap();
    assert!((0.0..std::f64::consts::TAU).contains(&lon));
    assert!(lon.to_degrees() > 359.9);
}

#[test]
fn ecliptic_distance_survives_conversion() {
    let d = Distance::from_au(1.5).unwrap();
    let ecl = Ecliptic::from_degrees(120.0, 2.0).unwrap().with_distance(d);

    let eq = ecl.to_equatorial(Frame::icrf(), Epoch::j2000(), None).unwrap();
    assert_eq!(eq.distance(), Some(d));
    assert_eq!(eq.to_ecliptic(None).unwrap().distance(), Some(d));
}

#[test]
fn apparent_values_use_true_obliquity() {
    let t = Transformer::new();
    let eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 90.0, 0.0).unwrap();
    let app = eq.apparent(&t, None).unwrap();

    let mean = eq.to_ecliptic(None).unwrap();
    let true_ = app.to_ecliptic(None).unwrap();

    // β = −ε here, so the difference is −Δε (+5.77″ at J2000.0).
    let d_lat = (true_.lat() - mean.lat()).arcseconds();
    assert!(d_lat > 5.6 && d_lat < 5.95, "Δβ {d_lat}″");
    assert!((mean.lat().degrees() + EPS_J2000_DEG).abs() < 1e-5);
}

#[test]
fn mean_obliquity_drifts_with_epoch() {
    let eq_2000 = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 90.0, 0.0).unwrap();
    let later = Epoch::from_calendar(TimeScale::TT, 2100, 1, 1, 12, 0, 0.0).unwrap();
    let eq_2100 = Equatorial::from_degrees(Frame::icrf(), later, 90.0, 0.0).unwrap();

    // About −46.8″ per century.
    let d = (eq_2000.to_ecliptic(None).unwrap().lat() - eq_2100.to_ecliptic(None).unwrap().lat())
        .arcseconds();
    assert!((d + 46.84).abs() < 0.1, "drift {d}″");
}

// --- cartesian ---

#[test]
fn cartesian_velocity_needs_both_operands() {
    let a = Cartesian::new(1.0, 2.0, 3.0)
        .unwrap()
        .with_velocity(Vector3::new(0.1, 0.0, 0.0))
        .unwrap();
    let b = Cartesian::new(0.5, 0.5, 0.5).unwrap();
    let c = b.with_velocity(Vector3::new(0.0, 0.2, 0.0)).unwrap();

    assert_eq!(a.add(&b).velocity(), a.velocity());
    assert_eq!(b.add(&a).velocity(), None);
    assert_eq!(a.subtract(&c).velocity(), Some(Vector3::new(0.1, -0.2, 0.0)));
    assert_eq!(a.add(&c).position(), Vector3::new(1.5, 2.5, 3.5));
}

#[test]
fn cartesian_radial_velocity() {
    let c = Cartesian::new(3.0, 4.0, 0.0)
        .unwrap()
        .with_velocity(Vector3::new(0.6, 0.8, 0.5))
        .unwrap();
    assert_eq!(c.r(), 5.0);
    assert!((c.vr().unwrap() - 1.0).abs() < 1e-12);
    assert!(c.radial_velocity().unwrap().is_receding());
    assert!((c.radial_velocity().unwrap().au_per_day() - 1.0).abs() < 1e-12);
    assert_eq!(Cartesian::new(3.0, 4.0, 0.0).unwrap().vr(), None);
}

#[test]
fn cartesian_to_equatorial_keeps_distance() {
    let c = Cartesian::new(0.0, -2.0, 0.0).unwrap();
    let eq = c.to_equatorial(Frame::icrf(), Epoch::j2000()).unwrap();

    assert!((eq.ra().degrees() - 270.0).abs() < 1e-10);
    assert!(eq.dec().degrees().abs() < 1e-12);
    assert!((eq.distance().unwrap().au() - 2.0).abs() < 1e-15);
}

#[test]
fn non_finite_position_rejected() {
    assert!(Cartesian::new(f64::NAN, 0.0, 0.0).is_err());
    assert!(Cartesian::new(0.0, f64::INFINITY, 0.0).is_err());
}

// --- horizontal ---

#[test]
fn air_mass_grows_toward_horizon() {
    let zenith = Horizontal::from_degrees(90.0, 0.0).unwrap();
    assert!((zenith.air_mass() - 1.0).abs() < 1e-3);

    let mut previous = zenith.air_mass();
    for alt in [60.0, 30.0, 10.0, 2.0] {
        let m = Horizontal::from_degrees(alt, 0.0).unwrap().air_mass();
        assert!(m > previous, "alt {alt}");
        previous = m;
    }
    assert_eq!(Horizontal::from_degrees(-5.0, 0.0).unwrap().air_mass(), 38.0);
}

#[test]
fn compass_points() {
    let cases = [
        (0.0, "N"),
        (44.0, "NE"),
        (90.0, "E"),
        (150.0, "SE"),
        (200.0, "S"),
        (225.0, "SW"),
        (280.0, "W"),
        (315.0, "NW"),
        (350.0, "N"),
    ];
    for (az, expected) in cases {
        let h = Horizontal::from_degrees(10.0, az).unwrap();
        assert_eq!(h.cardinal_direction(), expected, "az {az}");
    }
}

#[test]
fn horizontal_display_and_validation() {
    let h = Horizontal::from_degrees(45.0, -180.0).unwrap();
    assert_eq!(h.to_string(), "Alt +45.000000° Az 180.000000° (S)");
    assert!(Horizontal::from_degrees(90.5, 0.0).is_err());
}

// --- angles on equatorial values ---

#[test]
fn separation_and_hour_angle() {
    let epoch = Epoch::from_calendar(TimeScale::UTC, 2024, 3, 20, 3, 6, 0.0).unwrap();
    let a = Equatorial::from_degrees(Frame::icrf(), epoch, 0.0, 0.0).unwrap();
    let b = Equatorial::from_degrees(Frame::icrf(), epoch, 90.0, 0.0).unwrap();
    let pole = Equatorial::from_degrees(Frame::icrf(), epoch, 17.0, 90.0).unwrap();

    assert!((a.angular_separation(&b).degrees() - 90.0).abs() < 1e-12);
    assert!((a.angular_separation(&pole).degrees() - 90.0).abs() < 1e-12);

    let observer = Geo::from_degrees(52.0, 4.9, 0.0).unwrap();
    let last = epoch.local_sidereal_time(observer.lon(), 0.0).unwrap();
    let on_meridian = Equatorial::new(Frame::icrf(), epoch, last, Angle::from_degrees(20.0)).unwrap();
    let ha = on_meridian.hour_angle(&epoch, &observer, 0.0).unwrap();
    assert!(ha.radians().abs() < 1e-12);

    let east = Equatorial::new(
        Frame::icrf(),
        epoch,
        last + Angle::from_hours(3.0),
        Angle::from_degrees(20.0),
    )
    .unwrap();
    let ha = east.hour_angle(&epoch, &observer, 0.0).unwrap();
    assert!((ha.hours() + 3.0).abs() < 1e-9);
}

// --- formatting ---

#[test]
fn format_apparent_place_uses_apparent_angles() {
    let t = Transformer::new();
    let eq = Equatorial::from_hours_degrees(Frame::icrf(), Epoch::j2000(), 6.0, 10.0).unwrap();
    let app = eq.apparent(&t, None).unwrap();

    let spec = FormatSpec::new().field(Component::Ra, Unit::Degrees, 6);
    assert_eq!(
        spec.render(&app).unwrap(),
        format!("{:.6}", app.ra().degrees())
    );
    assert_ne!(spec.render(&app).unwrap(), spec.render(&eq).unwrap());
}

#[test]
fn equatorial_display_marks_place() {
    let t = Transformer::new();
    let mut eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 10.0, -5.0).unwrap();
    assert!(!eq.to_string().contains('['));

    eq.set_topo(Some(Geo::from_degrees(19.8, -155.5, 4200.0).unwrap()));
    let topo = eq.apparent(&t, None).unwrap();
    assert!(topo.to_string().contains("[topocentric]"));
}
