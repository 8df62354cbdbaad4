//! # Geocentric Moon
//!
//! Position of the Moon from the truncated ELP-2000/82 series of Meeus, *Astronomical
//! Algorithms* (2nd ed.), chapter 47: 60 terms in longitude and distance, 60 in latitude, plus
//! the additive Venus, Jupiter and flattening terms. Accuracy is about 10″ in longitude and 4″
//! in latitude.
//!
//! Unlike the planets, the result is **geocentric** (ecliptic and equinox of date).

use crate::constants::{JulianCenturies, Kilometer, Radian, AU, RADEG};
use crate::lunar_terms::{
    ARGUMENT_OF_LATITUDE, LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS, MEAN_ELONGATION,
    MEAN_LONGITUDE, MOON_MEAN_ANOMALY, SUN_MEAN_ANOMALY,
};
use crate::vector_math::{normalize_degrees, normalize_radians, PolarCoordinates};

/// Mean Earth–Moon distance of the series, in km.
const MEAN_DISTANCE: Kilometer = 385000.56;

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Longitude in `[0, 2π)`
    pub longitude: Radian,
    pub latitude: Radian,
    /// Earth–Moon distance
    pub distance: Kilometer,
}

impl MoonPosition {
    /// Same position with the distance expressed in astronomical units.
    pub fn to_polar(&self) -> PolarCoordinates {
        PolarCoordinates {
            longitude: self.longitude,
            latitude: self.latitude,
            radius: self.distance / AU,
        }
    }
}

/// Fundamental angle in radians from its degree polynomial in `t`.
fn fundamental(coeffs: &[f64; 5], t: f64) -> Radian {
    let mut value = 0.0;
    let mut t_power = 1.0;
    for c in coeffs {
        value += c * t_power;
        t_power *= t;
    }
    normalize_degrees(value) * RADEG
}

/// Compute the geocentric position of the Moon.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries from J2000.0 (dynamical time).
///
/// Returns
/// --------
/// * [`MoonPosition`] with ecliptic longitude/latitude of date and the distance in km.
///
/// Description
/// -----------
/// Terms involving the Sun's mean anomaly M are multiplied by `E^|m|` where
/// `E = 1 − 0.002516·T − 0.0000074·T²` accounts for the decreasing eccentricity of the
/// Earth's orbit.
pub fn geocentric_moon(t: JulianCenturies) -> MoonPosition {
    let l_prime = fundamental(&MEAN_LONGITUDE, t);
    let d = fundamental(&MEAN_ELONGATION, t);
    let m = fundamental(&SUN_MEAN_ANOMALY, t);
    let m_prime = fundamental(&MOON_MEAN_ANOMALY, t);
    let f = fundamental(&ARGUMENT_OF_LATITUDE, t);

    let a1 = (119.75 + 131.849 * t) * RADEG;
    let a2 = (53.09 + 479264.290 * t) * RADEG;
    let a3 = (313.45 + 481266.484 * t) * RADEG;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let eccentricity_factor = |m_mult: i8| match m_mult.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for term in LONGITUDE_DISTANCE_TERMS.iter() {
        let arg = term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * m_prime
            + term.f as f64 * f;
        let factor = eccentricity_factor(term.m);
        sum_l += term.sin_lon as f64 * factor * arg.sin();
        sum_r += term.cos_dist as f64 * factor * arg.cos();
    }

    let mut sum_b = 0.0;
    for term in LATITUDE_TERMS.iter() {
        let arg = term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * m_prime
            + term.f as f64 * f;
        sum_b += term.sin_lat as f64 * eccentricity_factor(term.m) * arg.sin();
    }

    // Venus, Jupiter and Earth flattening
    sum_l += 3958. * a1.sin() + 1962. * (l_prime - f).sin() + 318. * a2.sin();
    sum_b += -2235. * l_prime.sin()
        + 382. * a3.sin()
        + 175. * (a1 - f).sin()
        + 175. * (a1 + f).sin()
        + 127. * (l_prime - m_prime).sin()
        - 115. * (l_prime + m_prime).sin();

    MoonPosition {
        longitude: normalize_radians(l_prime + sum_l * 1e-6 * RADEG),
        latitude: sum_b * 1e-6 * RADEG,
        distance: MEAN_DISTANCE + sum_r / 1000.,
    }
}

/// Geocentric ecliptic longitude of the Moon, in `[0, 2π)`.
pub fn moon_longitude(t: JulianCenturies) -> Radian {
    geocentric_moon(t).longitude
}
