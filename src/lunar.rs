//! # Lunar calendar
//!
//! Age of the Moon, Brown lunation numbers and the days on which a lunar phase changes.

use std::fmt;

use crate::constants::{DayFraction, JulianDay, DPI};
use crate::ephemeris_errors::EphemerisError;
use crate::events::{find_quadrant_change, EventSearchParams};
use crate::moon::moon_longitude;
use crate::position::sun_polar;
use crate::time::julian_centuries;
use crate::vector_math::normalize_radians;

/// Mean interval between two new moons, in days.
pub const SYNODIC_MONTH: f64 = 29.530588861;

/// New moon of 1923 January 17, 02:41 UT: start of lunation 1 in E. W. Brown's numbering.
pub const LUNATION_BASE: JulianDay = 2423436.40347;

/// Elongation of the Moon from the Sun, `λ_moon − λ_sun`, in `[0, 2π)`.
fn elongation(jd: JulianDay) -> f64 {
    let t = julian_centuries(jd);
    normalize_radians(moon_longitude(t) - sun_polar(t).longitude)
}

/// Age of the Moon in days: the elongation expressed as a fraction of the synodic month.
///
/// Return
/// ----------
/// * A value in `[0, 29.5306)`, 0 at new moon and about 14.77 at full moon.
pub fn age_of_moon_in_days(jd: JulianDay) -> f64 {
    SYNODIC_MONTH * elongation(jd) / DPI
}

/// Brown lunation number of the lunation containing `jd`.
///
/// Lunation 1 started at [`LUNATION_BASE`]; the count advances every mean synodic month, so
/// the result can be off by one within a day or so of a true new moon.
pub fn lunation(jd: JulianDay) -> i64 {
    ((jd - LUNATION_BASE) / SYNODIC_MONTH).floor() as i64 + 1
}

/// Principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonQuarter {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl MoonQuarter {
    /// Phase reached when the elongation enters `quadrant`.
    pub fn from_quadrant(quadrant: u8) -> Result<Self, EphemerisError> {
        match quadrant {
            0 => Ok(MoonQuarter::NewMoon),
            1 => Ok(MoonQuarter::FirstQuarter),
            2 => Ok(MoonQuarter::FullMoon),
            3 => Ok(MoonQuarter::LastQuarter),
            _ => Err(EphemerisError::InvalidIndex {
                kind: "quadrant",
                index: quadrant as usize,
            }),
        }
    }
}

impl fmt::Display for MoonQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoonQuarter::NewMoon => "new moon",
            MoonQuarter::FirstQuarter => "first quarter",
            MoonQuarter::FullMoon => "full moon",
            MoonQuarter::LastQuarter => "last quarter",
        };
        f.write_str(label)
    }
}

/// Look for a change of lunar phase during the day starting at `jd`.
///
/// Arguments
/// -----------------
/// * `jd`: start of the day, normally the Julian Day of local midnight.
///
/// Return
/// ----------
/// * The phase reached and its instant as a fraction of the day, or `None`.
///
/// The geocentric longitudes of the Moon and of the Sun are used, so the instant does not
/// depend on the observer's location.
///
/// # See also
/// * [`find_quadrant_change`] – the underlying search.
pub fn quarter_change(
    jd: JulianDay,
) -> Result<Option<(MoonQuarter, DayFraction)>, EphemerisError> {
    let angle = |t: JulianDay| -> Result<f64, EphemerisError> { Ok(elongation(t)) };

    match find_quadrant_change(jd, angle, &EventSearchParams::default())? {
        Some(change) => Ok(Some((
            MoonQuarter::from_quadrant(change.quadrant)?,
            change.fraction,
        ))),
        None => Ok(None),
    }
}
