//! # Apparent position pipeline
//!
//! Turns a body, an instant and an observer into ecliptic, equatorial and horizontal
//! coordinates.
//!
//! ## Pipeline
//!
//! ```text
//! heliocentric polar ──► geocentric ecliptic ──► topocentric ecliptic
//!    (series)            (− Earth vector)         (− observer offset)
//!                                                        │ rotate(+ε, X)
//!                                                        ▼
//!          horizontal ◄── rotate(lat − π/2, Y) ◄── rotate(−LST, Z) ◄── equatorial
//! ```
//!
//! 1. The local sidereal time is `GST(jd − Δt) + longitude`; the obliquity is the mean
//!    obliquity at `jd` (or the true one when nutation is requested).
//! 2. The body's coordinates come from the VSOP87 series (Mercury … Neptune), the Pluto
//!    series, or the lunar series. The Sun is the Earth's heliocentric position seen from the
//!    other side: longitude + π, latitude negated.
//! 3. With light-time correction, a first pass measures the geocentric distance and a second
//!    pass recomputes the body at `jd − τ`. The Earth stays at `jd`.
//! 4. The topocentric offset subtracts the observer's position on a spherical Earth of radius
//!    6368 km.
//!
//! ## Conventions
//!
//! * Right ascension and azimuth come straight from `atan2` and lie in `[-π, π]`.
//! * Azimuth is measured from the south, positive toward the west.
//! * Hour angle is positive west of the meridian.
//!
//! ## See also
//! * [`compute_position`] – the pipeline entry point.
//! * [`PlanetPosition`] – stateful accessor-style wrapper.
//! * [`crate::events`] – rise/set search built on top of the low-precision pipeline.

use std::fmt;

use log::{debug, trace};
use nalgebra::Vector3;

use crate::constants::{
    JulianCenturies, JulianDay, Radian, AU, ERAU, PI_OVER_TWO, RADEG, RADH, SECONDS_PER_DAY,
    VLIGHT,
};
use crate::earth_orientation::{mean_obliquity, true_obliquity};
use crate::ephemeris_errors::EphemerisError;
use crate::moon::geocentric_moon;
use crate::observer::ObserverLocation;
use crate::pluto::heliocentric_pluto;
use crate::series::{earth_heliocentric, heliocentric_vsop};
use crate::time::{apparent_sidereal_time, greenwich_sidereal_time, julian_centuries};
use crate::vector_math::{
    cartesian_to_polar, invert_orthonormal, normalize_radians, polar_to_cartesian, rotate,
    rotation_matrix, Axis, PolarCoordinates,
};

/// Bodies handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
}

impl BodyKind {
    /// Every body, in index order.
    pub const ALL: [BodyKind; 11] = [
        BodyKind::Sun,
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
        BodyKind::Pluto,
        BodyKind::Moon,
    ];

    /// Index of the body: 0 for the Sun, 1 … 9 for the planets by distance, 10 for the Moon.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Sun => "Sun",
            BodyKind::Mercury => "Mercury",
            BodyKind::Venus => "Venus",
            BodyKind::Earth => "Earth",
            BodyKind::Mars => "Mars",
            BodyKind::Jupiter => "Jupiter",
            BodyKind::Saturn => "Saturn",
            BodyKind::Uranus => "Uranus",
            BodyKind::Neptune => "Neptune",
            BodyKind::Pluto => "Pluto",
            BodyKind::Moon => "Moon",
        }
    }

    /// Bodies whose series already give a geocentric position.
    fn is_geocentric(self) -> bool {
        matches!(self, BodyKind::Sun | BodyKind::Earth | BodyKind::Moon)
    }
}

impl TryFrom<usize> for BodyKind {
    type Error = EphemerisError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        BodyKind::ALL
            .get(index)
            .copied()
            .ok_or(EphemerisError::InvalidIndex {
                kind: "body",
                index,
            })
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Corrections applied by [`compute_position`].
///
/// Fields
/// -----------------
/// * `delta_t`: ΔT = TT − UT in days, subtracted from the instant before computing the
///   sidereal time.
/// * `topocentric`: subtract the observer's offset from the Earth's centre.
/// * `light_time`: compute the body at the retarded instant `jd − τ`.
/// * `nutation`: use apparent sidereal time and the true obliquity.
///
/// See also
/// -----------------
/// * [`PositionOptions::builder`] – validated construction.
/// * [`PositionOptions::low_precision`] – the mode used by the event finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub delta_t: f64,
    pub topocentric: bool,
    pub light_time: bool,
    pub nutation: bool,
}

impl PositionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// No ΔT, no topocentric offset and no light-time correction.
    ///
    /// Altitudes computed this way are accurate to a few arcminutes for the Sun and the
    /// planets, which is enough to time a rise or a set to the minute.
    pub fn low_precision() -> Self {
        PositionOptions {
            delta_t: 0.0,
            topocentric: false,
            light_time: false,
            nutation: false,
        }
    }

    /// Create a new [`PositionOptionsBuilder`] starting from the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planetary_ephemeris::position::PositionOptions;
    ///
    /// let options = PositionOptions::builder()
    ///     .delta_t(69.0 / 86400.0)
    ///     .light_time(false)
    ///     .build()
    ///     .unwrap();
    /// assert!(options.topocentric);
    /// ```
    pub fn builder() -> PositionOptionsBuilder {
        PositionOptionsBuilder::new()
    }
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            delta_t: 0.0,
            topocentric: true,
            light_time: true,
            nutation: false,
        }
    }
}

/// Builder for [`PositionOptions`], with validation.
#[derive(Debug, Clone)]
pub struct PositionOptionsBuilder {
    options: PositionOptions,
}

impl Default for PositionOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: PositionOptions::default(),
        }
    }

    pub fn delta_t(mut self, v: f64) -> Self {
        self.options.delta_t = v;
        self
    }

    pub fn topocentric(mut self, v: bool) -> Self {
        self.options.topocentric = v;
        self
    }

    pub fn light_time(mut self, v: bool) -> Self {
        self.options.light_time = v;
        self
    }

    pub fn nutation(mut self, v: bool) -> Self {
        self.options.nutation = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `delta_t` must be finite and smaller than one day in magnitude.
    pub fn build(self) -> Result<PositionOptions, EphemerisError> {
        let delta_t = self.options.delta_t;
        if !delta_t.is_finite() {
            return Err(EphemerisError::InvalidParameter(
                "delta_t must be finite".into(),
            ));
        }
        if delta_t.abs() >= 1.0 {
            return Err(EphemerisError::InvalidParameter(
                "delta_t must be < 1 day in magnitude".into(),
            ));
        }
        Ok(self.options)
    }
}

/// Output of [`compute_position`]. Angles in radians, distances in AU.
///
/// * `polar`: heliocentric coordinates of the body (retarded when light time is applied). For
///   the Sun (and the Earth) this is the geocentric Sun; for the Moon the heliocentric Moon.
/// * `ecliptic`: geocentric or topocentric ecliptic vector.
/// * `equatorial`: the same vector in the equatorial frame.
/// * `horizontal`: the same vector in the local horizontal frame (x south, y west, z zenith).
/// * `light_time`: correction applied, in days (0 when disabled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResult {
    pub body: BodyKind,
    pub jd: JulianDay,
    pub polar: PolarCoordinates,
    pub ecliptic: Vector3<f64>,
    pub equatorial: Vector3<f64>,
    pub horizontal: Vector3<f64>,
    pub right_ascension: Radian,
    pub declination: Radian,
    pub hour_angle: Radian,
    pub light_time: f64,
    pub local_sidereal_time: Radian,
    pub obliquity: Radian,
}

impl PositionResult {
    /// Geocentric (or topocentric) ecliptic longitude, latitude and distance.
    pub fn ecliptic_polar(&self) -> PolarCoordinates {
        cartesian_to_polar(&self.ecliptic)
    }

    /// Altitude above the horizon.
    pub fn altitude(&self) -> Radian {
        cartesian_to_polar(&self.horizontal).latitude
    }

    /// Azimuth, measured from the south and positive toward the west.
    pub fn azimuth(&self) -> Radian {
        cartesian_to_polar(&self.horizontal).longitude
    }

    /// Geocentric position of the Sun at the same instant.
    pub fn solar_polar(&self) -> PolarCoordinates {
        sun_polar(julian_centuries(self.jd))
    }
}

impl fmt::Display for PositionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ra_hours = normalize_radians(self.right_ascension) / RADH;
        let ecl = self.ecliptic_polar();
        if f.alternate() {
            writeln!(f, "{} at JD {:.5}", self.body, self.jd)?;
            writeln!(f, "  RA       = {ra_hours:.6} h")?;
            writeln!(f, "  Dec      = {:.6}°", self.declination / RADEG)?;
            writeln!(f, "  distance = {:.8} AU", ecl.radius)?;
            writeln!(f, "  altitude = {:.6}°", self.altitude() / RADEG)?;
            writeln!(f, "  azimuth  = {:.6}°", self.azimuth() / RADEG)?;
            write!(f, "  light    = {:.8} d", self.light_time)
        } else {
            write!(
                f,
                "{}: RA {:.6} h, Dec {:.6}°, alt {:.6}°, az {:.6}°",
                self.body,
                ra_hours,
                self.declination / RADEG,
                self.altitude() / RADEG,
                self.azimuth() / RADEG
            )
        }
    }
}

/// Geocentric position of the Sun: the Earth's heliocentric position with the longitude turned
/// by π and the latitude negated.
pub fn sun_polar(t: JulianCenturies) -> PolarCoordinates {
    let earth = earth_heliocentric(t);
    PolarCoordinates {
        longitude: normalize_radians(earth.longitude + std::f64::consts::PI),
        latitude: -earth.latitude,
        radius: earth.radius,
    }
}

/// Coordinates of a body as produced by its series.
///
/// Heliocentric for the planets and Pluto, geocentric for the Sun (also returned for the
/// Earth) and the Moon.
///
/// Arguments
/// -----------------
/// * `body`: the body.
/// * `jd`: Julian Day of the evaluation.
///
/// Return
/// ----------
/// * Longitude, latitude in radians and radius in AU.
pub fn body_coordinates(
    body: BodyKind,
    jd: JulianDay,
) -> Result<PolarCoordinates, EphemerisError> {
    let t = julian_centuries(jd);
    match body {
        BodyKind::Moon => Ok(geocentric_moon(t).to_polar()),
        BodyKind::Pluto => Ok(heliocentric_pluto(jd)),
        BodyKind::Sun | BodyKind::Earth => Ok(sun_polar(t)),
        _ => heliocentric_vsop(body, t),
    }
}

/// Offset of the observer from the Earth's centre in the ecliptic frame.
fn observer_offset(lst: Radian, latitude: Radian, obliquity: Radian) -> Vector3<f64> {
    let equatorial = polar_to_cartesian(lst, latitude, ERAU);
    invert_orthonormal(&rotation_matrix(obliquity, Axis::X)) * equatorial
}

/// Compute the apparent position of a body seen by an observer.
///
/// Arguments
/// -----------------
/// * `body`: the observed body.
/// * `jd`: Julian Day of the observation.
/// * `observer`: geographic location of the observer.
/// * `options`: corrections to apply, see [`PositionOptions`].
///
/// Return
/// ----------
/// * A [`PositionResult`] holding every intermediate frame.
///
/// Errors
/// ----------
/// * Propagates [`EphemerisError::InvalidIndex`] should a series lookup fail.
///
/// # Example
///
/// ```rust
/// use planetary_ephemeris::observer::ObserverLocation;
/// use planetary_ephemeris::position::{compute_position, BodyKind, PositionOptions};
///
/// let observer = ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap();
/// let mars = compute_position(BodyKind::Mars, 2451545.0, &observer, &PositionOptions::default())
///     .unwrap();
/// assert!(mars.light_time > 0.0);
/// ```
pub fn compute_position(
    body: BodyKind,
    jd: JulianDay,
    observer: &ObserverLocation,
    options: &PositionOptions,
) -> Result<PositionResult, EphemerisError> {
    let t = julian_centuries(jd);
    let (local_sidereal_time, obliquity) = if options.nutation {
        (
            apparent_sidereal_time(jd - options.delta_t) + observer.longitude(),
            true_obliquity(t),
        )
    } else {
        (
            greenwich_sidereal_time(jd - options.delta_t) + observer.longitude(),
            mean_obliquity(t),
        )
    };

    let earth = polar_to_cartesian_of(&earth_heliocentric(t));

    let mut polar = body_coordinates(body, jd)?;
    let mut geocentric = to_geocentric(body, &polar, &earth);

    let mut light_time = 0.0;
    if options.light_time && !body.is_geocentric() {
        light_time = geocentric.norm() * AU / (VLIGHT * SECONDS_PER_DAY);
        debug!("{body}: light time {light_time:.8} d at JD {jd}");

        polar = body_coordinates(body, jd - light_time)?;
        geocentric = to_geocentric(body, &polar, &earth);
    }

    let ecliptic = if options.topocentric {
        geocentric - observer_offset(local_sidereal_time, observer.latitude(), obliquity)
    } else {
        geocentric
    };

    if body == BodyKind::Moon {
        polar = cartesian_to_polar(&(earth + ecliptic));
    }

    let equatorial = rotate(&ecliptic, obliquity, Axis::X);
    let eq_polar = cartesian_to_polar(&equatorial);

    let hour_frame = rotate(&equatorial, -local_sidereal_time, Axis::Z);
    let hour_angle = (-hour_frame.y).atan2(hour_frame.x);
    let horizontal = rotate(&hour_frame, observer.latitude() - PI_OVER_TWO, Axis::Y);

    let result = PositionResult {
        body,
        jd,
        polar,
        ecliptic,
        equatorial,
        horizontal,
        right_ascension: eq_polar.longitude,
        declination: eq_polar.latitude,
        hour_angle,
        light_time,
        local_sidereal_time,
        obliquity,
    };
    trace!("{result}");
    Ok(result)
}

fn polar_to_cartesian_of(p: &PolarCoordinates) -> Vector3<f64> {
    polar_to_cartesian(p.longitude, p.latitude, p.radius)
}

/// Geocentric ecliptic vector of a body from the coordinates of its series.
fn to_geocentric(body: BodyKind, polar: &PolarCoordinates, earth: &Vector3<f64>) -> Vector3<f64> {
    let v = polar_to_cartesian_of(polar);
    if body.is_geocentric() {
        v
    } else {
        v - earth
    }
}

/// Accessor-style wrapper around [`compute_position`].
///
/// The wrapper starts empty; every accessor returns [`EphemerisError::Uninitialized`] until
/// [`PlanetPosition::calc`] has run once.
///
/// # Example
///
/// ```rust
/// use planetary_ephemeris::observer::ObserverLocation;
/// use planetary_ephemeris::position::{BodyKind, PlanetPosition};
///
/// let mut venus = PlanetPosition::new(BodyKind::Venus, ObserverLocation::default());
/// assert!(venus.right_ascension().is_err());
///
/// venus.calc(2448976.5).unwrap();
/// assert!(venus.declination().unwrap() < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlanetPosition {
    body: BodyKind,
    observer: ObserverLocation,
    options: PositionOptions,
    result: Option<PositionResult>,
}

impl PlanetPosition {
    /// New wrapper using [`PositionOptions::default`].
    pub fn new(body: BodyKind, observer: ObserverLocation) -> Self {
        Self::with_options(body, observer, PositionOptions::default())
    }

    pub fn with_options(
        body: BodyKind,
        observer: ObserverLocation,
        options: PositionOptions,
    ) -> Self {
        PlanetPosition {
            body,
            observer,
            options,
            result: None,
        }
    }

    /// Compute the position at `jd` and keep it for the accessors.
    pub fn calc(&mut self, jd: JulianDay) -> Result<&PositionResult, EphemerisError> {
        let result = compute_position(self.body, jd, &self.observer, &self.options)?;
        Ok(&*self.result.insert(result))
    }

    pub fn body(&self) -> BodyKind {
        self.body
    }

    /// Last computed result.
    pub fn result(&self) -> Result<&PositionResult, EphemerisError> {
        self.result.as_ref().ok_or(EphemerisError::Uninitialized)
    }

    pub fn polar(&self) -> Result<PolarCoordinates, EphemerisError> {
        Ok(self.result()?.polar)
    }

    pub fn ecliptic_polar(&self) -> Result<PolarCoordinates, EphemerisError> {
        Ok(self.result()?.ecliptic_polar())
    }

    pub fn right_ascension(&self) -> Result<Radian, EphemerisError> {
        Ok(self.result()?.right_ascension)
    }

    pub fn declination(&self) -> Result<Radian, EphemerisError> {
        Ok(self.result()?.declination)
    }

    pub fn hour_angle(&self) -> Result<Radian, EphemerisError> {
        Ok(self.result()?.hour_angle)
    }

    pub fn altitude(&self) -> Result<Radian, EphemerisError> {
        Ok(self.result()?.altitude())
    }

    pub fn azimuth(&self) -> Result<Radian, EphemerisError> {
        Ok(self.result()?.azimuth())
    }

    pub fn light_time(&self) -> Result<f64, EphemerisError> {
        Ok(self.result()?.light_time)
    }

    pub fn solar_polar(&self) -> Result<PolarCoordinates, EphemerisError> {
        Ok(self.result()?.solar_polar())
    }
}

#[cfg(test)]
mod position_test {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_abs_diff_eq;

    fn philadelphia() -> ObserverLocation {
        ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap()
    }

    fn at_j2000(body: BodyKind) -> PositionResult {
        compute_position(body, J2000, &philadelphia(), &PositionOptions::default()).unwrap()
    }

    #[test]
    fn test_body_index_round_trip() {
        for (i, body) in BodyKind::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
            assert_eq!(BodyKind::try_from(i), Ok(*body));
        }
        assert_eq!(
            BodyKind::try_from(11usize),
            Err(EphemerisError::InvalidIndex {
                kind: "body",
                index: 11
            })
        );
        assert_eq!(BodyKind::Neptune.to_string(), "Neptune");
    }

    #[test]
    fn test_options_builder() {
        let options = PositionOptions::builder()
            .delta_t(0.0008)
            .topocentric(false)
            .nutation(true)
            .build()
            .unwrap();
        assert_eq!(options.delta_t, 0.0008);
        assert!(!options.topocentric);
        assert!(options.light_time);
        assert!(options.nutation);

        assert_eq!(PositionOptions::new(), PositionOptions::default());
        assert_eq!(
            PositionOptions::builder().delta_t(1.5).build(),
            Err(EphemerisError::InvalidParameter(
                "delta_t must be < 1 day in magnitude".into()
            ))
        );
        assert!(PositionOptions::builder().delta_t(f64::NAN).build().is_err());
    }

    #[test]
    fn test_sun_at_j2000() {
        let sun = at_j2000(BodyKind::Sun);

        assert_abs_diff_eq!(sun.polar.longitude, 4.893515355149966, epsilon = 1e-12);
        assert_abs_diff_eq!(sun.polar.latitude, 3.3032774414445902e-06, epsilon = 1e-12);
        assert_abs_diff_eq!(sun.polar.radius, 0.9833275793393539, epsilon = 1e-12);
        assert_abs_diff_eq!(sun.right_ascension, -1.3737464193595954, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.declination, -0.4020366156391405, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.hour_angle, -1.3374372480958998, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.altitude(), -0.08861360618187109, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.azimuth(), 1.1171361392060073, epsilon = 1e-9);
        assert_eq!(sun.light_time, 0.0);
    }

    #[test]
    fn test_earth_is_geocentric_sun() {
        let observer = philadelphia();
        let options = PositionOptions::default();
        let sun = compute_position(BodyKind::Sun, J2000, &observer, &options).unwrap();
        let mut earth = compute_position(BodyKind::Earth, J2000, &observer, &options).unwrap();
        earth.body = BodyKind::Sun;
        assert_eq!(sun, earth);
        assert_eq!(sun.solar_polar(), sun.polar);
    }

    #[test]
    fn test_moon_at_j2000() {
        let moon = at_j2000(BodyKind::Moon);

        // heliocentric Moon
        assert_abs_diff_eq!(moon.polar.longitude, 1.7541827336982632, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.polar.latitude, 0.00021256445204630696, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.polar.radius, 0.9818694489926348, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.right_ascension, -2.396933388404065, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.declination, -0.2025197956673003, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.altitude(), 0.6240810085055719, epsilon = 1e-9);
        assert_eq!(moon.light_time, 0.0);
    }

    #[test]
    fn test_moon_topocentric_distance() {
        // Meeus, example 47.a, seen from latitude 40° on the Greenwich meridian
        let observer = ObserverLocation::from_degrees(40.0, 0.0, 0).unwrap();
        let options = PositionOptions::builder().light_time(false).build().unwrap();
        let moon = compute_position(BodyKind::Moon, 2448724.5, &observer, &options).unwrap();
        assert_abs_diff_eq!(moon.ecliptic_polar().radius * AU, 365533.909, epsilon = 1e-2);

        let geocentric = compute_position(
            BodyKind::Moon,
            2448724.5,
            &observer,
            &PositionOptions::low_precision(),
        )
        .unwrap();
        assert_abs_diff_eq!(geocentric.ecliptic_polar().radius * AU, 368409.7, epsilon = 0.1);
    }

    #[test]
    fn test_venus_meeus_example() {
        // Meeus, example 33.a: 1992 December 20, α = 21h04m41.454s, δ = −18°53′16.84″
        let venus = compute_position(
            BodyKind::Venus,
            2448976.5,
            &ObserverLocation::default(),
            &PositionOptions::default(),
        )
        .unwrap();

        assert_abs_diff_eq!(venus.right_ascension, -0.7649712559219157, epsilon = 1e-9);
        assert_abs_diff_eq!(venus.declination, -0.3296548444387842, epsilon = 1e-9);
        assert_abs_diff_eq!(venus.light_time, 0.00526060220049363, epsilon = 1e-11);
        assert_abs_diff_eq!(venus.ecliptic_polar().radius, 0.9109740697888331, epsilon = 1e-9);

        let meeus_ra = (21.0 + 4.0 / 60.0 + 41.454 / 3600.0) * RADH;
        let meeus_dec = -(18.0 + 53.0 / 60.0 + 16.84 / 3600.0) * RADEG;
        assert_abs_diff_eq!(normalize_radians(venus.right_ascension), meeus_ra, epsilon = 1e-4);
        assert_abs_diff_eq!(venus.declination, meeus_dec, epsilon = 1e-4);
    }

    #[test]
    fn test_light_time_of_planets() {
        let observer = philadelphia();
        let options = PositionOptions::default();
        let expected = [
            (BodyKind::Mercury, 0.008175396507053215),
            (BodyKind::Mars, 0.01068239057531177),
            (BodyKind::Jupiter, 0.02668943),
            (BodyKind::Saturn, 0.04997342),
            (BodyKind::Uranus, 0.11970980),
            (BodyKind::Neptune, 0.17918218),
            (BodyKind::Pluto, 0.17941309994862611),
        ];
        for (body, light_time) in expected {
            let p = compute_position(body, J2000, &observer, &options).unwrap();
            assert_abs_diff_eq!(p.light_time, light_time, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_light_time_disabled() {
        let options = PositionOptions::builder().light_time(false).build().unwrap();
        let mars = compute_position(BodyKind::Mars, J2000, &philadelphia(), &options).unwrap();
        assert_eq!(mars.light_time, 0.0);

        let retarded = at_j2000(BodyKind::Mars);
        assert_ne!(mars.polar, retarded.polar);
    }

    #[test]
    fn test_delta_t_only_shifts_sidereal_time() {
        let observer = philadelphia();
        let options = PositionOptions::builder().delta_t(0.0008).build().unwrap();
        let mars = compute_position(BodyKind::Mars, J2000, &observer, &options).unwrap();
        assert_eq!(
            mars.local_sidereal_time,
            greenwich_sidereal_time(J2000 - 0.0008) + observer.longitude()
        );

        let reference = at_j2000(BodyKind::Mars);
        assert_eq!(mars.polar, reference.polar);
        assert_eq!(mars.light_time, reference.light_time);
    }

    #[test]
    fn test_low_precision_sun() {
        let sun = compute_position(
            BodyKind::Sun,
            J2000,
            &philadelphia(),
            &PositionOptions::low_precision(),
        )
        .unwrap();
        assert_abs_diff_eq!(sun.altitude(), -0.08857048684572855, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.ecliptic_polar().latitude, sun.polar.latitude, epsilon = 1e-15);
    }

    #[test]
    fn test_nutation_option() {
        let observer = philadelphia();
        let options = PositionOptions::builder().nutation(true).build().unwrap();
        let with = compute_position(BodyKind::Sun, J2000, &observer, &options).unwrap();
        let without = at_j2000(BodyKind::Sun);

        assert_eq!(with.obliquity, true_obliquity(0.0));
        assert_abs_diff_eq!(
            with.local_sidereal_time - without.local_sidereal_time,
            -6.193050193684804e-05,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_declination_and_ra_ranges() {
        let observer = philadelphia();
        for body in BodyKind::ALL {
            for k in 0..20 {
                let jd = J2000 + k as f64 * 37.3;
                let p = compute_position(body, jd, &observer, &PositionOptions::default()).unwrap();
                assert!(p.declination.abs() <= PI_OVER_TWO);
                assert!(p.right_ascension.abs() <= std::f64::consts::PI);
                assert!(p.altitude().abs() <= PI_OVER_TWO);
                assert!(p.light_time >= 0.0 && p.light_time < 0.3);
            }
        }
    }

    #[test]
    fn test_planet_position_wrapper() {
        let mut mars = PlanetPosition::new(BodyKind::Mars, philadelphia());
        assert_eq!(mars.body(), BodyKind::Mars);
        assert_eq!(mars.right_ascension(), Err(EphemerisError::Uninitialized));
        assert_eq!(mars.altitude(), Err(EphemerisError::Uninitialized));
        assert!(mars.result().is_err());

        let ra = mars.calc(J2000).unwrap().right_ascension;
        assert_abs_diff_eq!(ra, -0.5144355299376304, epsilon = 1e-9);
        assert_eq!(mars.right_ascension(), Ok(ra));
        assert_abs_diff_eq!(mars.light_time().unwrap(), 0.01068239057531177, epsilon = 1e-11);
        assert_eq!(mars.solar_polar().unwrap(), sun_polar(0.0));
    }

    #[test]
    fn test_display() {
        let sun = at_j2000(BodyKind::Sun);
        assert!(sun.to_string().starts_with("Sun: RA "));
        assert!(format!("{sun:#}").contains("light    = 0.00000000 d"));
    }
}
