//! # Periodic series evaluator
//!
//! Heliocentric ecliptic coordinates of Mercury … Neptune from the truncated VSOP87 series.
//!
//! Each coordinate of each planet is a [`PowerSeries`]: six groups of [`SeriesTerm`], group `i`
//! being multiplied by `τ^i` where `τ` is the time in Julian millennia from J2000.0:
//!
//! ```text
//! X(τ) = 1e-8 · Σ_i τ^i · Σ_j A_ij · cos(B_ij + C_ij · τ)
//! ```
//!
//! The tables live in [`crate::vsop_data`] and are selected with [`vsop_series`], a data-driven
//! lookup keyed by `(BodyKind, CoordinateKind)`.

use crate::constants::{JulianCenturies, Radian};
use crate::ephemeris_errors::EphemerisError;
use crate::position::BodyKind;
use crate::vector_math::{normalize_radians, PolarCoordinates};
use crate::vsop_data::*;

/// Number of power groups in every VSOP table.
pub const POWER_GROUPS: usize = 6;

/// Scale of the tabulated amplitudes.
const AMPLITUDE_SCALE: f64 = 1e-8;

/// One periodic term `A·cos(B + C·τ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

/// Six power groups of terms for one coordinate of one body.
pub type PowerSeries = [&'static [SeriesTerm]; POWER_GROUPS];

/// Heliocentric coordinate produced by a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    Longitude,
    Latitude,
    Radius,
}

impl TryFrom<usize> for CoordinateKind {
    type Error = EphemerisError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(CoordinateKind::Longitude),
            1 => Ok(CoordinateKind::Latitude),
            2 => Ok(CoordinateKind::Radius),
            _ => Err(EphemerisError::InvalidIndex {
                kind: "coordinate",
                index,
            }),
        }
    }
}

/// Tables of the eight VSOP planets, indexed by `[planet][coordinate]`.
static VSOP_TABLES: [[&PowerSeries; 3]; 8] = [
    [&MERCURY_LONGITUDE, &MERCURY_LATITUDE, &MERCURY_RADIUS],
    [&VENUS_LONGITUDE, &VENUS_LATITUDE, &VENUS_RADIUS],
    [&EARTH_LONGITUDE, &EARTH_LATITUDE, &EARTH_RADIUS],
    [&MARS_LONGITUDE, &MARS_LATITUDE, &MARS_RADIUS],
    [&JUPITER_LONGITUDE, &JUPITER_LATITUDE, &JUPITER_RADIUS],
    [&SATURN_LONGITUDE, &SATURN_LATITUDE, &SATURN_RADIUS],
    [&URANUS_LONGITUDE, &URANUS_LATITUDE, &URANUS_RADIUS],
    [&NEPTUNE_LONGITUDE, &NEPTUNE_LATITUDE, &NEPTUNE_RADIUS],
];

/// Look up the VSOP table of a body coordinate.
///
/// Arguments
/// ---------
/// * `body`: one of Mercury … Neptune.
/// * `coordinate`: longitude, latitude or radius.
///
/// Returns
/// --------
/// * The static [`PowerSeries`] for this pair.
/// * `Err(EphemerisError::InvalidIndex)` for the Sun, the Moon and Pluto, which have no
///   VSOP tables.
pub fn vsop_series(
    body: BodyKind,
    coordinate: CoordinateKind,
) -> Result<&'static PowerSeries, EphemerisError> {
    let planet = match body {
        BodyKind::Mercury => 0,
        BodyKind::Venus => 1,
        BodyKind::Earth => 2,
        BodyKind::Mars => 3,
        BodyKind::Jupiter => 4,
        BodyKind::Saturn => 5,
        BodyKind::Uranus => 6,
        BodyKind::Neptune => 7,
        BodyKind::Sun | BodyKind::Pluto | BodyKind::Moon => {
            return Err(EphemerisError::InvalidIndex {
                kind: "VSOP body",
                index: body.index(),
            })
        }
    };
    let column = match coordinate {
        CoordinateKind::Longitude => 0,
        CoordinateKind::Latitude => 1,
        CoordinateKind::Radius => 2,
    };
    Ok(VSOP_TABLES[planet][column])
}

/// Evaluate a power series at `tau` Julian millennia.
///
/// For each group `i` the sum `Σ A·cos(B + C·τ)` is weighted by `τ^i` and accumulated;
/// the total is rescaled by `1e-8`. Empty groups contribute zero.
pub fn evaluate_power_series(series: &PowerSeries, tau: f64) -> f64 {
    let mut total = 0.0;
    let mut t_power = 1.0;
    for group in series.iter() {
        let sum: f64 = group
            .iter()
            .map(|term| term.amplitude * (term.phase + term.frequency * tau).cos())
            .sum();
        total += sum * t_power;
        t_power *= tau;
    }
    total * AMPLITUDE_SCALE
}

/// Evaluate one heliocentric coordinate of a VSOP planet.
///
/// Arguments
/// ---------
/// * `body`: one of Mercury … Neptune.
/// * `coordinate`: which coordinate to compute.
/// * `centuries`: Julian centuries from J2000.0 (converted to millennia internally).
///
/// Returns
/// --------
/// * Longitude in `[0, 2π)`, latitude in radians or radius in AU, ecliptic of date.
pub fn evaluate(
    body: BodyKind,
    coordinate: CoordinateKind,
    centuries: JulianCenturies,
) -> Result<f64, EphemerisError> {
    let series = vsop_series(body, coordinate)?;
    let value = evaluate_power_series(series, centuries / 10.0);
    Ok(match coordinate {
        CoordinateKind::Longitude => normalize_radians(value),
        CoordinateKind::Latitude | CoordinateKind::Radius => value,
    })
}

/// Heliocentric longitude, latitude and radius of a VSOP planet.
pub fn heliocentric_vsop(
    body: BodyKind,
    centuries: JulianCenturies,
) -> Result<PolarCoordinates, EphemerisError> {
    Ok(PolarCoordinates {
        longitude: evaluate(body, CoordinateKind::Longitude, centuries)?,
        latitude: evaluate(body, CoordinateKind::Latitude, centuries)?,
        radius: evaluate(body, CoordinateKind::Radius, centuries)?,
    })
}

/// Heliocentric longitude of the Earth, the quantity most often needed on its own.
pub fn earth_longitude(centuries: JulianCenturies) -> Radian {
    let value = evaluate_power_series(&EARTH_LONGITUDE, centuries / 10.0);
    normalize_radians(value)
}

/// Heliocentric position of the Earth.
///
/// Same as [`heliocentric_vsop`] for [`BodyKind::Earth`], without the table lookup that
/// can fail.
pub fn earth_heliocentric(centuries: JulianCenturies) -> PolarCoordinates {
    let tau = centuries / 10.0;
    PolarCoordinates {
        longitude: normalize_radians(evaluate_power_series(&EARTH_LONGITUDE, tau)),
        latitude: evaluate_power_series(&EARTH_LATITUDE, tau),
        radius: evaluate_power_series(&EARTH_RADIUS, tau),
    }
}

#[cfg(test)]
mod series_test {
    use super::*;
    use crate::constants::{DAYS_PER_CENTURY, J2000, RADEG};
    use approx::assert_abs_diff_eq;

    fn centuries(jd: f64) -> f64 {
        (jd - J2000) / DAYS_PER_CENTURY
    }

    #[test]
    fn test_empty_groups_contribute_nothing() {
        static ONE: [SeriesTerm; 1] = [SeriesTerm {
            amplitude: 1e8,
            phase: 0.0,
            frequency: 0.0,
        }];
        let series: PowerSeries = [&ONE, &[], &[], &[], &[], &[]];
        assert_eq!(evaluate_power_series(&series, 0.7), 1.0);

        let series: PowerSeries = [&[], &ONE, &[], &[], &[], &[]];
        assert_abs_diff_eq!(evaluate_power_series(&series, 0.5), 0.5, epsilon = 1e-15);

        let series: PowerSeries = [&[], &[], &ONE, &[], &[], &[]];
        assert_abs_diff_eq!(evaluate_power_series(&series, 0.5), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_table_sizes() {
        let rows: Vec<usize> = MERCURY_LONGITUDE.iter().map(|g| g.len()).collect();
        assert_eq!(rows, vec![38, 16, 10, 8, 6, 1]);

        let rows: Vec<usize> = EARTH_LATITUDE.iter().map(|g| g.len()).collect();
        assert_eq!(rows, vec![5, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_earth_at_j2000() {
        let p = heliocentric_vsop(BodyKind::Earth, 0.0).unwrap();
        assert_abs_diff_eq!(p.longitude / RADEG, 100.377_776_8, epsilon = 1e-6);
        assert_abs_diff_eq!(p.latitude / RADEG, -0.000_189_3, epsilon = 1e-6);
        assert_abs_diff_eq!(p.radius, 0.983_327_6, epsilon = 1e-7);
        assert_eq!(earth_longitude(0.0), p.longitude);
        assert_eq!(earth_heliocentric(0.0), p);
    }

    #[test]
    fn test_venus_meeus_example() {
        // Meeus, example 32.a: 1992 December 20, 0h TD
        let t = centuries(2_448_976.5);
        let p = heliocentric_vsop(BodyKind::Venus, t).unwrap();
        assert_abs_diff_eq!(p.longitude / RADEG, 26.114_28, epsilon = 1e-4);
        assert_abs_diff_eq!(p.latitude / RADEG, -2.620_70, epsilon = 1e-4);
        assert_abs_diff_eq!(p.radius, 0.724_603, epsilon = 1e-6);
    }

    #[test]
    fn test_longitude_is_normalized() {
        for body in [
            BodyKind::Mercury,
            BodyKind::Venus,
            BodyKind::Mars,
            BodyKind::Jupiter,
            BodyKind::Saturn,
            BodyKind::Uranus,
            BodyKind::Neptune,
        ] {
            for t in [-2.0, -0.5, 0.0, 0.37, 1.5] {
                let lon = evaluate(body, CoordinateKind::Longitude, t).unwrap();
                assert!((0.0..crate::constants::DPI).contains(&lon));
            }
        }
    }

    #[test]
    fn test_invalid_lookup() {
        assert_eq!(
            vsop_series(BodyKind::Pluto, CoordinateKind::Radius).err(),
            Some(EphemerisError::InvalidIndex {
                kind: "VSOP body",
                index: BodyKind::Pluto.index()
            })
        );
        assert!(heliocentric_vsop(BodyKind::Moon, 0.0).is_err());
        assert!(CoordinateKind::try_from(3usize).is_err());
        assert_eq!(
            CoordinateKind::try_from(1usize),
            Ok(CoordinateKind::Latitude)
        );
    }
}
