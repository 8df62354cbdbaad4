//! # Event finder
//!
//! Daily events found by sampling a quantity every hour over one day and refining each
//! bracketed crossing with a few secant steps.
//!
//! ## Rise and set
//!
//! [`find_rise_set`] samples `altitude − threshold` for the body of a [`RiseSetKind`] with the
//! low-precision pipeline ([`PositionOptions::low_precision`]). A rising is a change from
//! `≤ 0` to `> 0` between two consecutive hours, a setting the opposite. Thresholds include
//! refraction and, for the Sun and the Moon, the apparent semi-diameter:
//!
//! | Event                 | Altitude   |
//! |-----------------------|------------|
//! | Sun                   | −0°50′     |
//! | Moon                  | +0°7.5′    |
//! | Civil twilight        | −6°        |
//! | Nautical twilight     | −12°       |
//! | Astronomical twilight | −18°       |
//! | Planet                | −0°34.2′   |
//!
//! ## Quadrant changes
//!
//! [`find_quadrant_change`] detects that an angle enters a new quadrant during the day and
//! refines the instant it crosses the boundary. Equinoxes and solstices are quadrant changes of
//! the Sun's longitude ([`season_change`]); lunar phases are quadrant changes of the Moon − Sun
//! elongation ([`crate::lunar::quarter_change`]).
//!
//! ## Limitations
//!
//! Events are searched on an hourly grid: two crossings within the same hour cancel out and
//! go unnoticed. A body that neither rises nor sets on the day (circumpolar or always below
//! the horizon) leaves the [`TimePair`] slots at [`INVALID`].
//!
//! Results are fractions of the sampled day. Starting from the Julian Day of local midnight
//! ([`crate::time::local_midnight_julian_day`]) makes them local times.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::constants::{
    DayFraction, Degree, JulianDay, Radian, HOURLY_SAMPLES, HOURS_PER_DAY, INVALID, PI_OVER_TWO,
    RADEG,
};
use crate::ephemeris_errors::EphemerisError;
use crate::observer::ObserverLocation;
use crate::position::{compute_position, sun_polar, BodyKind, PositionOptions};
use crate::time::julian_centuries;
use crate::vector_math::{quadrant, wrap_to_pi};

/// Start and end of a daily event, as fractions of the sampled day.
///
/// `a` holds the rise (or start), `b` the set (or end). A slot equal to [`INVALID`] means the
/// event did not happen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePair {
    pub a: DayFraction,
    pub b: DayFraction,
}

impl TimePair {
    pub fn new(a: DayFraction, b: DayFraction) -> Self {
        TimePair { a, b }
    }

    /// Rise time, if any.
    pub fn rise(&self) -> Option<DayFraction> {
        (self.a != INVALID).then_some(self.a)
    }

    /// Set time, if any.
    pub fn set(&self) -> Option<DayFraction> {
        (self.b != INVALID).then_some(self.b)
    }
}

impl Default for TimePair {
    fn default() -> Self {
        TimePair {
            a: INVALID,
            b: INVALID,
        }
    }
}

const MINUTES_PER_DAY: i64 = 1440;

/// Format a fraction of day as `HH:MM`, wrapping `24:00` to `00:00`.
fn format_fraction(f: &mut fmt::Formatter<'_>, fraction: Option<DayFraction>) -> fmt::Result {
    match fraction {
        Some(x) => {
            let minutes = ((x * HOURS_PER_DAY * 60.0).round() as i64).rem_euclid(MINUTES_PER_DAY);
            write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
        }
        None => f.write_str("--:--"),
    }
}

impl fmt::Display for TimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_fraction(f, self.rise())?;
        f.write_str(" / ")?;
        format_fraction(f, self.set())
    }
}

/// Kind of rise/set event and the body it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetKind {
    Sun,
    Moon,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
    Planet(BodyKind),
}

impl RiseSetKind {
    /// Altitude of the event, in degrees.
    pub fn threshold_degrees(self) -> Degree {
        match self {
            RiseSetKind::Sun => -0.83333,
            RiseSetKind::Moon => 0.125,
            RiseSetKind::CivilTwilight => -6.0,
            RiseSetKind::NauticalTwilight => -12.0,
            RiseSetKind::AstronomicalTwilight => -18.0,
            RiseSetKind::Planet(_) => -0.57,
        }
    }

    /// Altitude of the event, in radians.
    pub fn threshold_altitude(self) -> Radian {
        self.threshold_degrees() * RADEG
    }

    /// Body whose altitude is sampled. The Sun and the twilights use the geocentric Sun.
    pub fn body(self) -> BodyKind {
        match self {
            RiseSetKind::Moon => BodyKind::Moon,
            RiseSetKind::Planet(body) => body,
            RiseSetKind::Sun
            | RiseSetKind::CivilTwilight
            | RiseSetKind::NauticalTwilight
            | RiseSetKind::AstronomicalTwilight => BodyKind::Earth,
        }
    }
}

/// Convergence controls of the secant refinement.
///
/// * `max_iterations`: upper bound on the refinement steps of one crossing.
/// * `tolerance`: the refinement stops once a step is at most this long, in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSearchParams {
    pub max_iterations: u32,
    pub tolerance: f64,
}

impl EventSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EventSearchParamsBuilder {
        EventSearchParamsBuilder::new()
    }
}

impl Default for EventSearchParams {
    fn default() -> Self {
        EventSearchParams {
            max_iterations: 10,
            tolerance: 1e-4, // ~9 seconds
        }
    }
}

/// Builder for [`EventSearchParams`], with validation.
#[derive(Debug, Clone)]
pub struct EventSearchParamsBuilder {
    params: EventSearchParams,
}

impl Default for EventSearchParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSearchParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: EventSearchParams::default(),
        }
    }

    pub fn max_iterations(mut self, v: u32) -> Self {
        self.params.max_iterations = v;
        self
    }

    pub fn tolerance(mut self, v: f64) -> Self {
        self.params.tolerance = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `max_iterations >= 1`
    /// * `tolerance > 0` (and not NaN)
    pub fn build(self) -> Result<EventSearchParams, EphemerisError> {
        let p = &self.params;
        if p.max_iterations == 0 {
            return Err(EphemerisError::InvalidParameter(
                "max_iterations must be >= 1".into(),
            ));
        }
        if p.tolerance.partial_cmp(&0.0) != Some(Ordering::Greater) {
            return Err(EphemerisError::InvalidParameter(
                "tolerance must be > 0".into(),
            ));
        }
        Ok(self.params)
    }
}

/// Direction of a threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingDirection {
    /// From `≤ 0` to `> 0`
    Rising,
    /// From `> 0` to `≤ 0`
    Setting,
}

/// A refined threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub direction: CrossingDirection,
    /// Instant of the crossing, as a fraction of the sampled day
    pub fraction: DayFraction,
    /// `false` when the iteration budget ran out before the tolerance was met
    pub converged: bool,
}

/// Evaluate `f` at each hour of the day starting at `jd`, both ends included.
///
/// Return
/// ----------
/// * [`HOURLY_SAMPLES`] values, `f(jd + i/24)` for `i = 0..=24`.
pub fn sample_hourly<F>(jd: JulianDay, mut f: F) -> Result<Vec<f64>, EphemerisError>
where
    F: FnMut(JulianDay) -> Result<f64, EphemerisError>,
{
    (0..HOURLY_SAMPLES)
        .map(|i| f(jd + i as f64 / HOURS_PER_DAY))
        .collect()
}

/// Refine a zero of `f` bracketed between hours `hour` and `hour + 1`.
///
/// Arguments
/// -----------------
/// * `f`: the sampled function.
/// * `jd`: start of the sampled day.
/// * `hour`: index of the first sample of the bracket.
/// * `v0`, `v1`: values of `f` at both ends of the bracket.
/// * `params`: iteration budget and tolerance.
///
/// Return
/// ----------
/// * The fraction of day of the zero, and whether the tolerance was met.
///
/// Description
/// -----------------
/// Starting at the beginning of the bracket, each step moves by `−f / slope` where the slope
/// is the one of the bracketing chord and stays fixed; `f` is reevaluated after every step.
/// When the budget runs out first, the last estimate is returned.
///
/// The estimate never leaves `[hour/24, (hour + 1)/24]`. If a step would leave it (the
/// function grazes zero and turns back inside the hour), the linear interpolation of `v0` and
/// `v1` is returned instead and the crossing is reported as not converged.
pub fn refine_crossing<F>(
    mut f: F,
    jd: JulianDay,
    hour: usize,
    v0: f64,
    v1: f64,
    params: &EventSearchParams,
) -> Result<(DayFraction, bool), EphemerisError>
where
    F: FnMut(JulianDay) -> Result<f64, EphemerisError>,
{
    let diff = v1 - v0;
    let start = hour as f64 / HOURS_PER_DAY;
    let end = (hour + 1) as f64 / HOURS_PER_DAY;
    let mut fraction = start;
    let mut value = v0;
    let mut delta = f64::INFINITY;
    let mut iterations = params.max_iterations;

    while delta.abs() > params.tolerance && iterations > 0 {
        iterations -= 1;
        delta = (-value / diff) / HOURS_PER_DAY;
        fraction += delta;
        if !(start..=end).contains(&fraction) {
            let interpolated = (start - (v0 / diff) / HOURS_PER_DAY).clamp(start, end);
            debug!(
                "crossing near hour {hour} of JD {jd} left its bracket at {fraction}, \
                 interpolated to {interpolated}"
            );
            return Ok((interpolated, false));
        }
        value = f(jd + fraction)?;
    }

    let converged = delta.abs() <= params.tolerance;
    if !converged {
        debug!(
            "crossing near hour {hour} of JD {jd} not converged: last step {delta:e} d after {} iterations",
            params.max_iterations
        );
    }
    Ok((fraction, converged))
}

/// Find and refine every sign change of `f` over the day starting at `jd`.
///
/// Return
/// ----------
/// * Crossings in chronological order of their brackets.
pub fn find_crossings<F>(
    jd: JulianDay,
    mut f: F,
    params: &EventSearchParams,
) -> Result<Vec<Crossing>, EphemerisError>
where
    F: FnMut(JulianDay) -> Result<f64, EphemerisError>,
{
    let samples = sample_hourly(jd, &mut f)?;

    let mut crossings = Vec::new();
    for (hour, (v0, v1)) in samples.into_iter().tuple_windows().enumerate() {
        let direction = if v0 <= 0.0 && v1 > 0.0 {
            CrossingDirection::Rising
        } else if v0 > 0.0 && v1 <= 0.0 {
            CrossingDirection::Setting
        } else {
            continue;
        };

        let (fraction, converged) = refine_crossing(&mut f, jd, hour, v0, v1, params)?;
        crossings.push(Crossing {
            direction,
            fraction,
            converged,
        });
    }
    Ok(crossings)
}

/// Find the rise and set times of a body, or the start and end of a twilight.
///
/// Arguments
/// -----------------
/// * `kind`: the event and its body.
/// * `jd`: Julian Day at which the sampled day starts, normally the local midnight.
/// * `observer`: location of the observer.
///
/// Return
/// ----------
/// * A [`TimePair`] with the rise (twilight start) in `a` and the set (twilight end) in `b`,
///   as fractions of day from `jd`. A missing event is [`INVALID`].
///
/// # Example
///
/// ```rust
/// use planetary_ephemeris::events::{find_rise_set, RiseSetKind};
/// use planetary_ephemeris::observer::ObserverLocation;
/// use planetary_ephemeris::time::local_midnight_julian_day;
///
/// let observer = ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap();
/// let jd = local_midnight_julian_day(2024, 3, 17, observer.timezone()).unwrap();
/// let sun = find_rise_set(RiseSetKind::Sun, jd, &observer).unwrap();
/// assert_eq!(sun.to_string(), "06:11 / 18:13");
/// ```
///
/// # See also
/// * [`find_rise_set_with`] – same search with custom convergence controls.
pub fn find_rise_set(
    kind: RiseSetKind,
    jd: JulianDay,
    observer: &ObserverLocation,
) -> Result<TimePair, EphemerisError> {
    find_rise_set_with(kind, jd, observer, &EventSearchParams::default())
}

/// [`find_rise_set`] with explicit [`EventSearchParams`].
///
/// If the day holds two crossings in the same direction, the later one is kept.
pub fn find_rise_set_with(
    kind: RiseSetKind,
    jd: JulianDay,
    observer: &ObserverLocation,
    params: &EventSearchParams,
) -> Result<TimePair, EphemerisError> {
    let body = kind.body();
    let threshold = kind.threshold_altitude();
    let options = PositionOptions::low_precision();

    let altitude = |t: JulianDay| -> Result<f64, EphemerisError> {
        Ok(compute_position(body, t, observer, &options)?.altitude() - threshold)
    };

    let mut times = TimePair::default();
    for crossing in find_crossings(jd, altitude, params)? {
        match crossing.direction {
            CrossingDirection::Rising => times.a = crossing.fraction,
            CrossingDirection::Setting => times.b = crossing.fraction,
        }
    }
    Ok(times)
}

/// An angle entering a new quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantChange {
    /// Quadrant entered, `0..=3`
    pub quadrant: u8,
    /// Instant of the boundary crossing, as a fraction of the sampled day
    pub fraction: DayFraction,
    pub converged: bool,
}

/// Find the instant an angle changes quadrant during the day starting at `jd`.
///
/// Arguments
/// -----------------
/// * `jd`: start of the sampled day.
/// * `angle_fn`: the angle as a function of time, in radians (any range).
/// * `params`: convergence controls of the refinement.
///
/// Return
/// ----------
/// * The first quadrant change of the day, or `None` if the angle stays in one quadrant.
///
/// Description
/// -----------------
/// The quadrant is sampled every hour. Inside the first bracket where it changes, the signed
/// distance to the crossed boundary (`wrap_to_pi(angle − k·π/2)`) has a zero, which is refined
/// with [`refine_crossing`]. The crossed boundary is the one ahead in the direction of motion.
pub fn find_quadrant_change<F>(
    jd: JulianDay,
    mut angle_fn: F,
    params: &EventSearchParams,
) -> Result<Option<QuadrantChange>, EphemerisError>
where
    F: FnMut(JulianDay) -> Result<Radian, EphemerisError>,
{
    let samples = sample_hourly(jd, &mut angle_fn)?;

    let bracket = samples
        .into_iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a0, a1))| quadrant(*a0) != quadrant(*a1));

    let Some((hour, (a0, a1))) = bracket else {
        return Ok(None);
    };

    let (q0, q1) = (quadrant(a0), quadrant(a1));
    let crossed = if wrap_to_pi(a1 - a0) >= 0.0 { q1 } else { q0 };
    let boundary = crossed as f64 * PI_OVER_TWO;

    let distance = |t: JulianDay| -> Result<f64, EphemerisError> {
        Ok(wrap_to_pi(angle_fn(t)? - boundary))
    };
    let (fraction, converged) = refine_crossing(
        distance,
        jd,
        hour,
        wrap_to_pi(a0 - boundary),
        wrap_to_pi(a1 - boundary),
        params,
    )?;

    Ok(Some(QuadrantChange {
        quadrant: q1,
        fraction,
        converged,
    }))
}

/// Equinoxes and solstices, named after their month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Sun's longitude 0°
    MarchEquinox,
    /// Sun's longitude 90°
    JuneSolstice,
    /// Sun's longitude 180°
    SeptemberEquinox,
    /// Sun's longitude 270°
    DecemberSolstice,
}

impl Season {
    /// Season starting when the Sun's longitude enters `quadrant`.
    pub fn from_quadrant(quadrant: u8) -> Result<Self, EphemerisError> {
        match quadrant {
            0 => Ok(Season::MarchEquinox),
            1 => Ok(Season::JuneSolstice),
            2 => Ok(Season::SeptemberEquinox),
            3 => Ok(Season::DecemberSolstice),
            _ => Err(EphemerisError::InvalidIndex {
                kind: "quadrant",
                index: quadrant as usize,
            }),
        }
    }
}

/// Look for an equinox or a solstice during the day starting at `jd`.
///
/// The Sun's geometric longitude (no aberration, no nutation) is used: instants come out
/// about eight minutes earlier than the apparent ones.
pub fn season_change(jd: JulianDay) -> Result<Option<(Season, DayFraction)>, EphemerisError> {
    let sun_longitude = |t: JulianDay| -> Result<Radian, EphemerisError> {
        Ok(sun_polar(julian_centuries(t)).longitude)
    };

    match find_quadrant_change(jd, sun_longitude, &EventSearchParams::default())? {
        Some(change) => Ok(Some((
            Season::from_quadrant(change.quadrant)?,
            change.fraction,
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod events_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    type Sampled = Result<f64, EphemerisError>;

    #[test]
    fn test_time_pair() {
        let pair = TimePair::default();
        assert_eq!(pair, TimePair::new(INVALID, INVALID));
        assert_eq!(pair.rise(), None);
        assert_eq!(pair.set(), None);
        assert_eq!(pair.to_string(), "--:-- / --:--");

        let pair = TimePair::new(0.25, 0.75);
        assert_eq!(pair.rise(), Some(0.25));
        assert_eq!(pair.set(), Some(0.75));
        assert_eq!(pair.to_string(), "06:00 / 18:00");

        // 23:59:51 rounds to the next midnight
        let pair = TimePair::new(0.9999, 0.5);
        assert_eq!(pair.to_string(), "00:00 / 12:00");
    }

    #[test]
    fn test_thresholds() {
        assert_abs_diff_eq!(
            RiseSetKind::Sun.threshold_altitude(),
            -0.83333 * RADEG,
            epsilon = 1e-15
        );
        assert_eq!(RiseSetKind::Moon.threshold_degrees(), 0.125);
        assert_eq!(RiseSetKind::AstronomicalTwilight.threshold_degrees(), -18.0);
        assert_eq!(RiseSetKind::Planet(BodyKind::Mars).threshold_degrees(), -0.57);

        assert_eq!(RiseSetKind::CivilTwilight.body(), BodyKind::Earth);
        assert_eq!(RiseSetKind::Moon.body(), BodyKind::Moon);
        assert_eq!(RiseSetKind::Planet(BodyKind::Venus).body(), BodyKind::Venus);
    }

    #[test]
    fn test_params_builder() {
        let params = EventSearchParams::builder()
            .max_iterations(20)
            .tolerance(1e-6)
            .build()
            .unwrap();
        assert_eq!(params.max_iterations, 20);
        assert_eq!(params.tolerance, 1e-6);

        assert_eq!(
            EventSearchParams::builder().max_iterations(0).build(),
            Err(EphemerisError::InvalidParameter(
                "max_iterations must be >= 1".into()
            ))
        );
        assert!(EventSearchParams::builder().tolerance(0.0).build().is_err());
        assert!(EventSearchParams::builder()
            .tolerance(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn test_sample_hourly() {
        let samples = sample_hourly(10.0, |t| Ok(t)).unwrap();
        assert_eq!(samples.len(), HOURLY_SAMPLES);
        assert_eq!(samples[0], 10.0);
        assert_eq!(samples[24], 11.0);
        assert_abs_diff_eq!(samples[6], 10.25, epsilon = 1e-12);

        let failing = sample_hourly(0.0, |_| Err(EphemerisError::Uninitialized));
        assert_eq!(failing, Err(EphemerisError::Uninitialized));
    }

    #[test]
    fn test_find_crossings_linear() {
        // rises at 0.3, sets at 0.8
        let f = |t: f64| -> Sampled { Ok(-(t - 0.3) * (t - 0.8)) };
        let crossings = find_crossings(0.0, f, &EventSearchParams::default()).unwrap();

        assert_eq!(crossings.len(), 2);
        assert_eq!(crossings[0].direction, CrossingDirection::Rising);
        assert_eq!(crossings[1].direction, CrossingDirection::Setting);
        assert_abs_diff_eq!(crossings[0].fraction, 0.3, epsilon = 1e-4);
        assert_abs_diff_eq!(crossings[1].fraction, 0.8, epsilon = 1e-4);
        assert!(crossings.iter().all(|c| c.converged));
    }

    #[test]
    fn test_zero_sample_counts_as_below() {
        // exactly 0 at hour 6 then positive: a rising in the bracket starting at hour 6
        let f = |t: f64| -> Sampled { Ok(t - 0.25) };
        let crossings = find_crossings(0.0, f, &EventSearchParams::default()).unwrap();
        assert_eq!(crossings.len(), 1);
        assert_eq!(crossings[0].direction, CrossingDirection::Rising);
        assert_abs_diff_eq!(crossings[0].fraction, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_no_crossing() {
        let crossings =
            find_crossings(0.0, |_| Ok(-1.0), &EventSearchParams::default()).unwrap();
        assert!(crossings.is_empty());
    }

    #[test]
    fn test_refine_budget_exhausted() {
        let params = EventSearchParams::builder().max_iterations(1).build().unwrap();
        // steep cubic: one secant step from the bracket start cannot land within 1e-4
        let f = |t: f64| -> Sampled { Ok((t * 24.0 - 3.7).powi(3)) };
        let v0 = f(3.0 / 24.0).unwrap();
        let v1 = f(4.0 / 24.0).unwrap();
        let (fraction, converged) = refine_crossing(f, 0.0, 3, v0, v1, &params).unwrap();
        assert!(!converged);
        assert!(fraction > 3.0 / 24.0 && fraction < 4.0 / 24.0);
    }

    #[test]
    fn test_refine_stays_in_bracket() {
        // dips far below zero inside hour 11 before rising: the fixed-slope steps overshoot
        let f = |t: f64| -> Sampled {
            let h = t * 24.0;
            Ok(5.0 * (h - 10.95) * (h - 11.95))
        };
        let v0 = f(11.0 / 24.0).unwrap();
        let v1 = f(12.0 / 24.0).unwrap();
        let params = EventSearchParams::default();
        let (fraction, converged) = refine_crossing(f, 0.0, 11, v0, v1, &params).unwrap();

        assert!(!converged);
        assert!((11.0 / 24.0..=12.0 / 24.0).contains(&fraction));
        assert_abs_diff_eq!(fraction, 11.475 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadrant_change_wraps() {
        // angle goes from 350° to 374° over the day: crosses 0° at 10/24
        let angle = |t: f64| -> Sampled { Ok((350.0 + 24.0 * t) * RADEG) };
        let change = find_quadrant_change(0.0, angle, &EventSearchParams::default())
            .unwrap()
            .unwrap();
        assert_eq!(change.quadrant, 0);
        assert!(change.converged);
        assert_abs_diff_eq!(change.fraction, 10.0 / 24.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quadrant_change_decreasing() {
        // 100° down to 76°: leaves quadrant 1 through 90° at 10/24
        let angle = |t: f64| -> Sampled { Ok((100.0 - 24.0 * t) * RADEG) };
        let change = find_quadrant_change(0.0, angle, &EventSearchParams::default())
            .unwrap()
            .unwrap();
        assert_eq!(change.quadrant, 0);
        assert_abs_diff_eq!(change.fraction, 10.0 / 24.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_quadrant_change() {
        let angle = |t: f64| -> Sampled { Ok((10.0 + t) * RADEG) };
        let change = find_quadrant_change(0.0, angle, &EventSearchParams::default()).unwrap();
        assert_eq!(change, None);
    }

    #[test]
    fn test_season_change() {
        // 2024 March equinox: 2024-03-20 03:06 UTC (apparent)
        let (season, fraction) = season_change(2460389.5).unwrap().unwrap();
        assert_eq!(season, Season::MarchEquinox);
        assert_abs_diff_eq!(fraction, 0.1232848063727273, epsilon = 1e-6);

        assert_eq!(season_change(2460388.5).unwrap(), None);
        assert_eq!(season_change(2460390.5).unwrap(), None);

        let (season, fraction) = season_change(2460481.5).unwrap().unwrap();
        assert_eq!(season, Season::JuneSolstice);
        assert_abs_diff_eq!(fraction, 0.8625785737644112, epsilon = 1e-6);

        let (season, _) = season_change(2460575.5).unwrap().unwrap();
        assert_eq!(season, Season::SeptemberEquinox);

        let (season, fraction) = season_change(2460665.5).unwrap().unwrap();
        assert_eq!(season, Season::DecemberSolstice);
        assert_abs_diff_eq!(fraction, 0.3842044968849315, epsilon = 1e-6);
    }

    #[test]
    fn test_season_from_quadrant() {
        assert_eq!(Season::from_quadrant(2), Ok(Season::SeptemberEquinox));
        assert!(Season::from_quadrant(4).is_err());
    }
}
