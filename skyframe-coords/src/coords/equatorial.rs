//! Equatorial positions and the apparent-place engine.
//!
//! An [`Equatorial`] is either a catalog ([`Astrometric`]) place or an
//! [`ApparentPlace`] derived from one. Apparent values keep their astrometric
//! base, and every further transformation starts from that base:
//!
//! ```text
//! Astrometric ──apparent()──▶ Apparent { Geocentric | Topocentric | Observed }
//!      │                           │
//!      ├──to_horizontal()──────────┴──▶ Horizontal   (always from the base)
//!      └──to_ecliptic()────────────────▶ Ecliptic     (always from the base)
//! ```
//!
//! ```
//! use skyframe_coords::{Equatorial, Frame, Geo, Transformer, Weather};
//! use skyframe_time::Epoch;
//!
//! let transformer = Transformer::new();
//! let mut star = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 101.287, -16.716).unwrap();
//! star.set_topo(Some(Geo::from_degrees(38.0, -77.0, 100.0).unwrap()));
//!
//! let observed = star.apparent(&transformer, Some(Weather::standard())).unwrap();
//! assert!(observed.is_apparent());
//! let horizon = star.to_horizontal(&transformer, None).unwrap();
//! assert!(horizon.alt().degrees().abs() <= 90.0);
//! ```

use super::cartesian::Cartesian;
use super::ecliptic::{equatorial_to_ecliptic, obliquity_at, Ecliptic};
use super::horizontal::Horizontal;
use crate::frame::Frame;
use crate::geo::Geo;
use crate::quantities::{Distance, Weather};
use crate::transformer::{MissingObserverPolicy, Transformer};
use crate::{CoordError, CoordResult};
use skyframe_core::math::vincenty_angular_separation;
use skyframe_core::{Angle, Vector3};
use skyframe_time::Epoch;
use std::fmt;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which correction chain produced an apparent place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaceKind {
    Geocentric,

    /// Seen from the observer, without refraction.
    Topocentric,

    /// Seen from the observer through the atmosphere.
    Observed,
}

impl PlaceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlaceKind::Geocentric => "geocentric",
            PlaceKind::Topocentric => "topocentric",
            PlaceKind::Observed => "observed",
        }
    }
}

/// A catalog place: ICRS-aligned direction at an epoch, with optional
/// distance and observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Astrometric {
    frame: Frame,
    epoch: Epoch,
    ra: Angle,
    dec: Angle,
    distance: Option<Distance>,
    observer: Option<Geo>,
}

impl Astrometric {
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn observer(&self) -> Option<Geo> {
        self.observer
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApparentPlace {
    base: Astrometric,
    ra: Angle,
    dec: Angle,
    place: PlaceKind,
    observer: Option<Geo>,
    weather: Option<Weather>,
}

impl ApparentPlace {
    pub fn base(&self) -> &Astrometric {
        &self.base
    }

    pub fn place(&self) -> PlaceKind {
        self.place
    }

    pub fn weather(&self) -> Option<Weather> {
        self.weather
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Equatorial {
    Astrometric(Astrometric),
    Apparent(ApparentPlace),
}

impl Equatorial {
    /// Catalog position. RA is normalized to [0, 2π); Dec must lie in [−90°, +90°].
    pub fn new(frame: Frame, epoch: Epoch, ra: Angle, dec: Angle) -> CoordResult<Self> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        Ok(Self::Astrometric(Astrometric {
            frame,
            epoch,
            ra,
            dec,
            distance: None,
            observer: None,
        }))
    }

    pub fn from_degrees(
        frame: Frame,
        epoch: Epoch,
        ra_deg: f64,
        dec_deg: f64,
    ) -> CoordResult<Self> {
        Self::new(
            frame,
            epoch,
            Angle::from_degrees(ra_deg),
            Angle::from_degrees(dec_deg),
        )
    }

    pub fn from_hours_degrees(
        frame: Frame,
        epoch: Epoch,
        ra_hours: f64,
        dec_deg: f64,
    ) -> CoordResult<Self> {
        Self::new(
            frame,
            epoch,
            Angle::from_hours(ra_hours),
            Angle::from_degrees(dec_deg),
        )
    }

    pub fn base(&self) -> &Astrometric {
        match self {
            Self::Astrometric(a) => a,
            Self::Apparent(p) => &p.base,
        }
    }

    pub fn is_apparent(&self) -> bool {
        matches!(self, Self::Apparent(_))
    }

    pub fn place(&self) -> Option<PlaceKind> {
        match self {
            Self::Astrometric(_) => None,
            Self::Apparent(p) => Some(p.place),
        }
    }

    pub fn ra(&self) -> Angle {
        match self {
            Self::Astrometric(a) => a.ra,
            Self::Apparent(p) => p.ra,
        }
    }

    pub fn dec(&self) -> Angle {
        match self {
            Self::Astrometric(a) => a.dec,
            Self::Apparent(p) => p.dec,
        }
    }

    pub fn frame(&self) -> Frame {
        self.base().frame
    }

    pub fn epoch(&self) -> Epoch {
        self.base().epoch
    }

    pub fn distance(&self) -> Option<Distance> {
        self.base().distance
    }

    pub fn observer(&self) -> Option<Geo> {
        match self {
            Self::Astrometric(a) => a.observer,
            Self::Apparent(p) => p.observer,
        }
    }

    pub fn weather(&self) -> Option<Weather> {
        match self {
            Self::Astrometric(_) => None,
            Self::Apparent(p) => p.weather,
        }
    }

    /// Replaces the catalog direction. An apparent value falls back to its
    /// astrometric base first.
    pub fn set_position(&mut self, ra: Angle, dec: Angle) -> CoordResult<&mut Self> {
        let ra = ra.validate_right_ascension()?;
        let dec = dec.validate_declination()?;
        let base = self.rebase();
        base.ra = ra;
        base.dec = dec;
        Ok(self)
    }

    pub fn set_topo(&mut self, observer: Option<Geo>) -> &mut Self {
        self.rebase().observer = observer;
        self
    }

    pub fn set_distance(&mut self, distance: Option<Distance>) -> &mut Self {
        self.rebase().distance = distance;
        self
    }

    fn rebase(&mut self) -> &mut Astrometric {
        if let Self::Apparent(p) = self {
            debug!(place = p.place.name(), "setter on apparent place, reverting to base");
            let base = p.base;
            *self = Self::Astrometric(base);
        }
        match self {
            Self::Astrometric(a) => a,
            Self::Apparent(p) => &mut p.base,
        }
    }

    /// Apparent place for the stored observer.
    ///
    /// | observer | weather | result |
    /// |----------|---------|--------|
    /// | none | ignored | geocentric |
    /// | set | none or empty | topocentric, no refraction |
    /// | set | any field set | observed, refracted |
    ///
    /// An already apparent value is returned unchanged.
    pub fn apparent(
        &self,
        transformer: &Transformer,
        weather: Option<Weather>,
    ) -> CoordResult<Self> {
        let base = match self {
            Self::Apparent(_) => return Ok(*self),
            Self::Astrometric(a) => a,
        };
        let weather = weather.filter(|w| !w.is_empty());

        let Some(observer) = base.observer else {
            if weather.is_some() {
                debug!("no observer: weather ignored for geocentric apparent place");
            }
            let (ra, dec) = transformer.geocentric_apparent(
                base.ra.radians(),
                base.dec.radians(),
                base.distance,
                &base.epoch,
            )?;
            return Ok(Self::Apparent(ApparentPlace {
                base: *base,
                ra: Angle::from_radians(ra),
                dec: Angle::from_radians(dec),
                place: PlaceKind::Geocentric,
                observer: None,
                weather: None,
            }));
        };

        let obs = transformer.observe(
            base.ra.radians(),
            base.dec.radians(),
            base.distance,
            &base.epoch,
            &observer,
            weather.as_ref(),
        )?;
        let place = if weather.is_some() {
            PlaceKind::Observed
        } else {
            PlaceKind::Topocentric
        };

        Ok(Self::Apparent(ApparentPlace {
            base: *base,
            ra: Angle::from_radians(obs.apparent_ra()),
            dec: Angle::from_radians(obs.place.dec),
            place,
            observer: Some(observer),
            weather,
        }))
    }

    /// Altitude/azimuth of the astrometric base through the observed path.
    ///
    /// Without an observer the transformer's [`MissingObserverPolicy`] decides.
    pub fn to_horizontal(
        &self,
        transformer: &Transformer,
        weather: Option<Weather>,
    ) -> CoordResult<Horizontal> {
        let base = self.base();
        let observer = match base.observer {
            Some(geo) => geo,
            None => match transformer.config().missing_observer {
                MissingObserverPolicy::GeocentricHorizon => {
                    warn!("no observer set, observing from latitude 0, longitude 0");
                    Geo::geocenter_surface()
                }
                MissingObserverPolicy::Reject => {
                    return Err(CoordError::precondition(
                        "horizontal coordinates require an observer",
                    ));
                }
            },
        };
        let weather = weather.filter(|w| !w.is_empty());

        let obs = transformer.observe(
            base.ra.radians(),
            base.dec.radians(),
            base.distance,
            &base.epoch,
            &observer,
            weather.as_ref(),
        )?;

        Ok(Horizontal::observed(
            obs.place.zenith_distance,
            obs.place.azimuth,
            base.distance,
            obs.refracted,
        ))
    }

    /// Ecliptic coordinates of the astrometric base.
    ///
    /// Without an explicit obliquity, the IAU 2006 mean obliquity at the epoch is
    /// used, plus the nutation in obliquity when this value is apparent.
    pub fn to_ecliptic(&self, obliquity: Option<Angle>) -> CoordResult<Ecliptic> {
        let base = self.base();
        let eps = match obliquity {
            Some(eps) => eps,
            None => obliquity_at(&base.epoch, self.is_apparent())?,
        };
        let (lon, lat) = equatorial_to_ecliptic(base.ra.radians(), base.dec.radians(), eps)?;

        let ecl = Ecliptic::new(Angle::from_radians(lon), Angle::from_radians(lat))?;
        Ok(match base.distance {
            Some(d) => ecl.with_distance(d),
            None => ecl,
        })
    }

    /// Position vector in AU; 1 AU when no distance is set.
    pub fn to_cartesian(&self) -> Cartesian {
        let r = self.distance().map_or(1.0, Distance::au);
        let unit = Vector3::from_spherical(self.ra().radians(), self.dec().radians());
        Cartesian::from_finite(unit * r)
    }

    pub fn angular_separation(&self, other: &Equatorial) -> Angle {
        let (s1, c1) = self.dec().sin_cos();
        let (s2, c2) = other.dec().sin_cos();
        let dra = other.ra().radians() - self.ra().radians();
        Angle::from_radians(vincenty_angular_separation(s1, c1, s2, c2, dra))
    }

    /// Local hour angle, LAST − RA, in [−π, π).
    pub fn hour_angle(&self, epoch: &Epoch, observer: &Geo, dut1: f64) -> CoordResult<Angle> {
        let last = epoch.local_sidereal_time(observer.lon(), dut1)?;
        Ok((last - self.ra()).wrapped())
    }
}

impl fmt::Display for Equatorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use skyframe_core::angle::SexagesimalUnit;

        write!(
            f,
            "{} RA {} Dec {}",
            self.frame(),
            self.ra().to_sexagesimal(SexagesimalUnit::Hours, 3),
            self.dec().to_sexagesimal(SexagesimalUnit::Degrees, 2)
        )?;
        if let Some(place) = self.place() {
            write!(f, " [{}]", place.name())?;
        }
        write!(f, " @ {}", self.epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Equatorial {
        Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 150.0, 20.0).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert!(Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 10.0, 91.0).is_err());
        let eq = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), -30.0, 0.0).unwrap();
        assert!((eq.ra().degrees() - 330.0).abs() < 1e-10);
        assert!(!eq.is_apparent());
        assert_eq!(eq.place(), None);
    }

    #[test]
    fn test_geocentric_dispatch() {
        let t = Transformer::new();
        let app = star().apparent(&t, Some(Weather::standard())).unwrap();
        assert_eq!(app.place(), Some(PlaceKind::Geocentric));
        assert_eq!(app.weather(), None);
        assert_eq!(app.base(), star().base());
    }

    #[test]
    fn test_topocentric_and_observed_dispatch() {
        let t = Transformer::new();
        let mut eq = star();
        eq.set_topo(Some(Geo::from_degrees(38.0, -77.0, 0.0).unwrap()));

        let topo = eq.apparent(&t, None).unwrap();
        assert_eq!(topo.place(), Some(PlaceKind::Topocentric));

        let empty = eq.apparent(&t, Some(Weather::new())).unwrap();
        assert_eq!(empty.place(), Some(PlaceKind::Topocentric));

        let observed = eq.apparent(&t, Some(Weather::standard())).unwrap();
        assert_eq!(observed.place(), Some(PlaceKind::Observed));
        assert_eq!(observed.weather(), Some(Weather::standard()));
    }

    #[test]
    fn test_apparent_is_idempotent() {
        let t = Transformer::new();
        let once = star().apparent(&t, None).unwrap();
        let twice = once.apparent(&t, Some(Weather::standard())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_setter_rebases_apparent() {
        let t = Transformer::new();
        let mut app = star().apparent(&t, None).unwrap();
        app.set_distance(Some(Distance::from_au(2.0).unwrap()));

        assert!(!app.is_apparent());
        assert_eq!(app.ra(), star().ra());
        assert_eq!(app.distance().unwrap().au(), 2.0);
    }

    #[test]
    fn test_set_position_validates() {
        let mut eq = star();
        assert!(eq.set_position(Angle::ZERO, Angle::from_degrees(100.0)).is_err());
        assert_eq!(eq, star());

        eq.set_position(Angle::from_degrees(10.0), Angle::from_degrees(-5.0))
            .unwrap()
            .set_distance(None);
        assert!((eq.ra().degrees() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_observer_reject() {
        let t = Transformer::builder()
            .missing_observer(MissingObserverPolicy::Reject)
            .build()
            .unwrap();
        assert!(matches!(
            star().to_horizontal(&t, None),
            Err(CoordError::TransformationPrecondition { .. })
        ));
    }

    #[test]
    fn test_missing_observer_geocentric_horizon() {
        let t = Transformer::new();
        let from_default = star().to_horizontal(&t, None).unwrap();

        let mut at_origin = star();
        at_origin.set_topo(Some(Geo::geocenter_surface()));
        let explicit = at_origin.to_horizontal(&t, None).unwrap();

        assert_eq!(from_default, explicit);
    }

    #[test]
    fn test_horizontal_uses_base_of_apparent() {
        let t = Transformer::new();
        let mut eq = star();
        eq.set_topo(Some(Geo::from_degrees(-30.0, 20.0, 1500.0).unwrap()));
        let app = eq.apparent(&t, None).unwrap();

        assert_eq!(
            eq.to_horizontal(&t, None).unwrap(),
            app.to_horizontal(&t, None).unwrap()
        );
    }

    #[test]
    fn test_refraction_flag_on_horizontal() {
        let t = Transformer::new();
        let mut eq = star();
        eq.set_topo(Some(Geo::from_degrees(38.0, -77.0, 0.0).unwrap()));

        assert!(!eq.to_horizontal(&t, None).unwrap().is_refracted());
        assert!(eq.to_horizontal(&t, Some(Weather::standard())).unwrap().is_refracted());
    }

    #[test]
    fn test_to_ecliptic_uses_base() {
        let t = Transformer::new();
        let eq = star();
        let eps = Angle::from_degrees(23.4);
        let app = eq.apparent(&t, None).unwrap();

        assert_eq!(
            eq.to_ecliptic(Some(eps)).unwrap(),
            app.to_ecliptic(Some(eps)).unwrap()
        );
        assert_ne!(eq.to_ecliptic(None).unwrap(), app.to_ecliptic(None).unwrap());
    }

    #[test]
    fn test_to_cartesian_default_distance() {
        let c = star().to_cartesian();
        assert!((c.r() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_angular_separation() {
        let a = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 10.0, 0.0).unwrap();
        let b = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 20.0, 0.0).unwrap();
        assert!((a.angular_separation(&b).degrees() - 10.0).abs() < 1e-10);

        let pole = Equatorial::from_degrees(Frame::icrf(), Epoch::j2000(), 0.0, 90.0).unwrap();
        assert!((a.angular_separation(&pole).degrees() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        let eq = Equatorial::from_hours_degrees(Frame::icrf(), Epoch::j2000(), 12.0, -30.5).unwrap();
        assert_eq!(
            eq.to_string(),
            "ICRF(J2000.0) RA 12h 00m 00.000s Dec -30° 30' 00.00\" @ 2000-01-01T12:00:00.000 TT"
        );
    }
}
