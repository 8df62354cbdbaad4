//! # Pluto
//!
//! Heliocentric position of Pluto from the 43-term periodic series of Meeus, *Astronomical
//! Algorithms* (2nd ed.), chapter 37. The series is valid between 1885 and 2099; outside that
//! range the result degrades quickly.

use crate::constants::{JulianDay, DAYS_PER_CENTURY, J2000, RADEG};
use crate::vector_math::{normalize_radians, PolarCoordinates};

/// One term of table 37.A: multipliers of the mean longitudes of Jupiter, Saturn and Pluto,
/// then `(sin, cos)` coefficient pairs for longitude, latitude and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlutoTerm {
    argument: [i8; 3],
    longitude: [i32; 2],
    latitude: [i32; 2],
    radius: [i32; 2],
}

const fn p(
    argument: [i8; 3],
    longitude: [i32; 2],
    latitude: [i32; 2],
    radius: [i32; 2],
) -> PlutoTerm {
    PlutoTerm {
        argument,
        longitude,
        latitude,
        radius,
    }
}

/// Compute the heliocentric ecliptic position of Pluto (J2000.0 ecliptic).
///
/// Arguments
/// ---------
/// * `jd`: Julian Day (dynamical time).
///
/// Returns
/// --------
/// * Longitude in `[0, 2π)`, latitude in radians, radius in AU.
///
/// Description
/// -----------
/// With `T` in Julian centuries from J2000.0 the mean longitudes are
///
/// ```text
/// J =  34.35 + 3034.9057·T
/// S =  50.08 + 1222.1138·T
/// P = 238.96 +  144.9600·T
/// ```
///
/// and each term contributes `A·sin(α) + B·cos(α)` with `α = j·J + s·S + p·P`.
pub fn heliocentric_pluto(jd: JulianDay) -> PolarCoordinates {
    let t = (jd - J2000) / DAYS_PER_CENTURY;

    let jupiter = 34.35 + 3034.9057 * t;
    let saturn = 50.08 + 1222.1138 * t;
    let pluto = 238.96 + 144.9600 * t;

    let mut sum_longitude = 0.0;
    let mut sum_latitude = 0.0;
    let mut sum_radius = 0.0;

    for term in PLUTO_TERMS.iter() {
        let [j, s, pl] = term.argument;
        let alpha = (j as f64 * jupiter + s as f64 * saturn + pl as f64 * pluto) * RADEG;
        let (sin_a, cos_a) = alpha.sin_cos();

        sum_longitude += term.longitude[0] as f64 * sin_a + term.longitude[1] as f64 * cos_a;
        sum_latitude += term.latitude[0] as f64 * sin_a + term.latitude[1] as f64 * cos_a;
        sum_radius += term.radius[0] as f64 * sin_a + term.radius[1] as f64 * cos_a;
    }

    PolarCoordinates {
        longitude: normalize_radians((238.958116 + 144.96 * t + sum_longitude * 1e-6) * RADEG),
        latitude: (-3.908239 + sum_latitude * 1e-6) * RADEG,
        radius: 40.7241346 + sum_radius * 1e-7,
    }
}

static PLUTO_TERMS: [PlutoTerm; 43] = [
    p([0, 0, 1], [-19799805, 19850055], [-5452852, -14974862], [66865439, 68951812]),
    p([0, 0, 2], [897144, -4954829], [3527812, 1672790], [-11827535, -332538]),
    p([0, 0, 3], [611149, 1211027], [-1050748, 327647], [1593179, -1438890]),
    p([0, 0, 4], [-341243, -189585], [178690, -292153], [-18444, 483220]),
    p([0, 0, 5], [129287, -34992], [18650, 100340], [-65977, -85431]),
    p([0, 0, 6], [-38164, 30893], [-30697, -25823], [31174, -6032]),
    p([0, 1, -1], [20442, -9987], [4878, 11248], [-5794, 22161]),
    p([0, 1, 0], [-4063, -5071], [226, -64], [4601, 4032]),
    p([0, 1, 1], [-6016, -3336], [2030, -836], [-1729, 234]),
    p([0, 1, 2], [-3956, 3039], [69, -604], [-415, 702]),
    p([0, 1, 3], [-667, 3572], [-247, -567], [239, 723]),
    p([0, 2, -2], [1276, 501], [-57, 1], [67, -67]),
    p([0, 2, -1], [1152, -917], [-122, 175], [1034, -451]),
    p([0, 2, 0], [630, -1277], [-49, -164], [-129, 504]),
    p([1, -1, 0], [2571, -459], [-197, 199], [480, -231]),
    p([1, -1, 1], [899, -1449], [-25, 217], [2, -441]),
    p([1, 0, -3], [-1016, 1043], [589, -248], [-3359, 265]),
    p([1, 0, -2], [-2343, -1012], [-269, 711], [7856, -7832]),
    p([1, 0, -1], [7042, 788], [185, 193], [36, 45763]),
    p([1, 0, 0], [1199, -338], [315, 807], [8663, 8547]),
    p([1, 0, 1], [418, -67], [-130, -43], [-809, -769]),
    p([1, 0, 2], [120, -274], [5, 3], [263, -144]),
    p([1, 0, 3], [-60, -159], [2, 17], [-126, 32]),
    p([1, 0, 4], [-82, -29], [2, 5], [-35, -16]),
    p([1, 1, -3], [-36, -20], [2, 3], [-19, -4]),
    p([1, 1, -2], [-40, 7], [3, 1], [-15, 8]),
    p([1, 1, -1], [-14, 22], [2, -1], [-4, 12]),
    p([1, 1, 0], [4, 13], [1, -1], [5, 6]),
    p([1, 1, 1], [5, 2], [0, -1], [3, 1]),
    p([1, 1, 3], [-1, 0], [0, 0], [6, -2]),
    p([2, 0, -6], [2, 0], [0, -2], [2, 2]),
    p([2, 0, -5], [-4, 5], [2, 2], [-2, -2]),
    p([2, 0, -4], [4, -7], [-7, 0], [14, 13]),
    p([2, 0, -3], [14, 24], [10, -8], [-63, 13]),
    p([2, 0, -2], [-49, -34], [-3, 20], [136, -236]),
    p([2, 0, -1], [163, -48], [6, 5], [273, 1065]),
    p([2, 0, 0], [9, 24], [14, 17], [251, 149]),
    p([2, 0, 1], [-4, 1], [-2, 0], [-25, -9]),
    p([2, 0, 2], [-3, 1], [0, 0], [9, -2]),
    p([2, 0, 3], [1, 3], [0, 0], [-8, 7]),
    p([3, 0, -2], [-3, -1], [0, 1], [2, -10]),
    p([3, 0, -1], [5, -3], [0, 0], [19, 35]),
    p([3, 0, 0], [0, 0], [1, 0], [10, 2]),
];
