use skyframe_core::angle::wrap_0_2pi;
use skyframe_core::Angle;
use skyframe_coords::astrometry::{Astrometry, StandardAstrometry};
use skyframe_coords::{
    Cartesian, CoordError, Distance, Equatorial, Frame, Geo, PlaceKind, Transformer, Weather,
};
use skyframe_time::{Epoch, TimeScale};

fn near_j2000_utc() -> Epoch {
    Epoch::from_calendar(TimeScale::UTC, 2000, 1, 1, 12, 0, 0.0).unwrap()
}

fn washington() -> Geo {
    Geo::from_degrees(38.0, -77.0, 0.0).unwrap()
}

/// Catalog position on the local meridian of `observer` at `epoch`.
fn on_meridian(epoch: Epoch, observer: Geo, dec_deg: f64) -> Equatorial {
    let last = epoch.local_sidereal_time(observer.lon(), 0.0).unwrap();
    let mut eq = Equatorial::new(Frame::icrf(), epoch, last, Angle::from_degrees(dec_deg)).unwrap();
    eq.set_topo(Some(observer));
    eq
}

// --- geocentric apparent place ---

#[test]
fn geocentric_ra_is_cirs_ra_minus_equation_of_origins() {
    let epoch = Epoch::j2000();
    let eq = Equatorial::from_hours_degrees(Frame::icrf(), epoch, 12.0, 0.0).unwrap();

    let app = eq.apparent(&Transformer::new(), None).unwrap();
    assert_eq!(app.place(), Some(PlaceKind::Geocentric));

    let tdb = epoch.to_tdb().unwrap();
    let cirs = StandardAstrometry
        .icrs_to_cirs(eq.ra().radians(), eq.dec().radians(), None, &tdb)
        .unwrap();
    assert_eq!(app.ra().radians(), wrap_0_2pi(cirs.ra - cirs.eo));
    assert_eq!(app.dec().radians(), cirs.dec);
}

#[test]
fn geocentric_correction_is_sub_arcminute_at_j2000() {
    let eq = Equatorial::from_hours_degrees(Frame::icrf(), Epoch::j2000(), 12.0, 0.0).unwrap();
    let app = eq.apparent(&Transformer::new(), None).unwrap();

    let shift = eq.angular_separation(&app).arcseconds();
    assert!(shift > 1.0 && shift < 60.0, "shift {shift}″");
}

#[test]
fn annual_parallax_moves_nearby_star() {
    let t = Transformer::new();
    let far = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 219.9, -60.8).unwrap();
    let mut near = far;
    // α Centauri, 0.747″.
    near.set_distance(Some(Distance::from_parallax_arcsec(0.747).unwrap()));

    let a = far.apparent(&t, None).unwrap();
    let b = near.apparent(&t, None).unwrap();
    let shift = a.angular_separation(&b).arcseconds();
    assert!(shift > 0.05 && shift < 0.75, "parallax shift {shift}″");
}

#[test]
fn apparent_twice_short_circuits() {
    let t = Transformer::new();
    let mut eq = on_meridian(near_j2000_utc(), washington(), 10.0);

    let first = eq.apparent(&t, Some(Weather::standard())).unwrap();
    let second = first.apparent(&t, None).unwrap();
    assert_eq!(first, second);

    eq.set_topo(None);
    let geo_first = eq.apparent(&t, None).unwrap();
    assert_eq!(geo_first, geo_first.apparent(&t, None).unwrap());
}

// --- observed place and horizon ---

#[test]
fn meridian_transit_altitude() {
    let t = Transformer::new();
    let observer = washington();

    for dec in [-30.0, 0.0, 10.0, 25.0, 50.0, 70.0] {
        let eq = on_meridian(near_j2000_utc(), observer, dec);
        let h = eq.to_horizontal(&t, None).unwrap();
        let expected = 90.0 - (38.0_f64 - dec).abs();
        assert!(
            (h.alt().degrees() - expected).abs() < 0.02,
            "dec {dec}: alt {} expected {expected}",
            h.alt().degrees()
        );
        assert!(!h.is_refracted());
    }
}

#[test]
fn transit_azimuth_south_or_north() {
    let t = Transformer::new();

    let south = on_meridian(near_j2000_utc(), washington(), 10.0)
        .to_horizontal(&t, None)
        .unwrap();
    assert!((south.az().degrees() - 180.0).abs() < 0.1);
    assert_eq!(south.cardinal_direction(), "S");

    let north = on_meridian(near_j2000_utc(), washington(), 60.0)
        .to_horizontal(&t, None)
        .unwrap();
    assert!(north.az().cos() > 0.9999);
    assert_eq!(north.cardinal_direction(), "N");
}

#[test]
fn refraction_raises_altitude() {
    let t = Transformer::new();
    let mut eq = on_meridian(near_j2000_utc(), washington(), -30.0);
    eq.set_position(eq.ra() + Angle::from_hours(2.0), eq.dec())
        .unwrap();

    let dry = eq.to_horizontal(&t, None).unwrap();
    let wet = eq.to_horizontal(&t, Some(Weather::standard())).unwrap();

    let lift = (wet.alt() - dry.alt()).arcseconds();
    assert!(dry.alt().degrees() > 5.0 && dry.alt().degrees() < 20.0);
    assert!(lift > 150.0 && lift < 600.0, "lift {lift}″");
    assert!(wet.is_refracted());
    assert!(wet.air_mass() < dry.air_mass());
}

#[test]
fn observed_equatorial_differs_from_topocentric_by_refraction() {
    let t = Transformer::new();
    let eq = on_meridian(near_j2000_utc(), washington(), 0.0);

    let topo = eq.apparent(&t, None).unwrap();
    let observed = eq.apparent(&t, Some(Weather::standard())).unwrap();
    assert_eq!(topo.place(), Some(PlaceKind::Topocentric));
    assert_eq!(observed.place(), Some(PlaceKind::Observed));

    // Refraction on the meridian lifts the object toward the pole.
    let d_dec = (observed.dec() - topo.dec()).arcseconds();
    assert!(d_dec > 30.0 && d_dec < 60.0, "Δδ {d_dec}″");
}

#[test]
fn moon_topocentric_parallax_lowers_altitude() {
    let t = Transformer::new();
    let mut eq = on_meridian(near_j2000_utc(), washington(), -20.0);
    let far = eq.to_horizontal(&t, None).unwrap();

    eq.set_distance(Some(Distance::from_kilometers(384_400.0).unwrap()));
    let near = eq.to_horizontal(&t, None).unwrap();

    // Diurnal parallax only; the drop is about π·cos(alt) with π = 57′ at 32° altitude.
    let drop = (far.alt() - near.alt()).arcminutes();
    assert!(drop > 45.0 && drop < 52.0, "drop {drop}′");
    assert!((near.distance().unwrap().kilometers() - 384_400.0).abs() < 1e-6);
}

#[test]
fn missing_observer_policy_reject() {
    let t = Transformer::builder()
        .missing_observer(skyframe_coords::MissingObserverPolicy::Reject)
        .build()
        .unwrap();
    let eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 10.0, 10.0).unwrap();

    assert!(matches!(
        eq.to_horizontal(&t, None),
        Err(CoordError::TransformationPrecondition { .. })
    ));
    assert!(eq.apparent(&t, None).is_ok());
}

// --- conversions ---

#[test]
fn ecliptic_round_trip_same_obliquity() {
    let eps = Angle::from_degrees(23.4392794);
    for (ra, dec) in [(0.0, 0.0), (45.0, 12.5), (200.0, -66.0), (359.9, 89.0)] {
        let eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), ra, dec).unwrap();
        let back = eq
            .to_ecliptic(Some(eps))
            .unwrap()
            .to_equatorial(Frame::icrf(), Epoch::j2000(), Some(eps))
            .unwrap();

        assert!(eq.angular_separation(&back).radians() < 1e-9, "({ra}, {dec})");
    }
}

#[test]
fn ecliptic_at_celestial_poles() {
    for dec in [90.0, -90.0] {
        let eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 33.0, dec).unwrap();
        let ecl = eq.to_ecliptic(None).unwrap();
        let expected = dec.signum() * (90.0 - 23.4392794);
        assert!((ecl.lat().degrees() - expected).abs() < 1e-6);
    }
}

#[test]
fn cartesian_round_trip() {
    for (x, y, z) in [(1.2, -3.4, 0.5), (-0.001, 0.0, -7.0), (5.0, 5.0, 5.0)] {
        let c = Cartesian::new(x, y, z).unwrap();
        let back = c
            .to_equatorial(Frame::fk5(None), Epoch::j2000())
            .unwrap()
            .to_cartesian();
        assert!((back.x() - x).abs() < 1e-9);
        assert!((back.y() - y).abs() < 1e-9);
        assert!((back.z() - z).abs() < 1e-9);
    }
}

#[test]
fn zero_cartesian_always_invalid() {
    let zero = Cartesian::new(0.0, 0.0, 0.0).unwrap();
    for frame in [Frame::icrf(), Frame::fk5(None), Frame::fk4(None)] {
        let err = zero.to_equatorial(frame, Epoch::j2000()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

// --- observer geometry ---

#[test]
fn parallax_constants_at_equator_are_exact() {
    let geo = Geo::from_degrees(0.0, 12.0, 0.0).unwrap();
    assert_eq!(geo.parallax_constants(None), (0.0, 1.0));
}

#[test]
fn east_west_follow_longitude_sign() {
    for lon in [-180.0, -90.0, -0.5, 0.0, 0.5, 90.0, 180.0] {
        let geo = Geo::from_degrees(10.0, lon, 0.0).unwrap();
        assert_eq!(geo.is_east(), lon > 0.0, "lon {lon}");
        assert_eq!(geo.is_west(), lon < 0.0, "lon {lon}");
    }
}

#[test]
fn transformer_shared_across_threads() {
    let t = std::sync::Arc::new(Transformer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let t = std::sync::Arc::clone(&t);
            std::thread::spawn(move || {
                let eq = on_meridian(near_j2000_utc(), washington(), 10.0 * i as f64);
                eq.to_horizontal(&t, None).unwrap()
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let h = h.join().unwrap();
        let expected = 90.0 - (38.0 - 10.0 * i as f64).abs();
        assert!((h.alt().degrees() - expected).abs() < 0.02);
    }
}
