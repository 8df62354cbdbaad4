//! Periodic terms of the lunar theory (Meeus, *Astronomical Algorithms*, 2nd ed., tables 47.A
//! and 47.B).
//!
//! Each term multiplies the fundamental arguments D, M, M′, F by small integers. Longitude and
//! latitude coefficients are in 1e-6 degrees, distance coefficients in 1e-3 km.

/// Term of the longitude and distance series (table 47.A).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LonRadTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    pub sin_lon: i32,
    pub cos_dist: i32,
}

/// Term of the latitude series (table 47.B).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LatTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    pub sin_lat: i32,
}

const fn lr(d: i8, m: i8, mp: i8, f: i8, sin_lon: i32, cos_dist: i32) -> LonRadTerm {
    LonRadTerm {
        d,
        m,
        mp,
        f,
        sin_lon,
        cos_dist,
    }
}

const fn lb(d: i8, m: i8, mp: i8, f: i8, sin_lat: i32) -> LatTerm {
    LatTerm {
        d,
        m,
        mp,
        f,
        sin_lat,
    }
}

/// Polynomial coefficients (degrees, powers 0…4 of T) of the Moon's mean longitude L′.
pub(crate) const MEAN_LONGITUDE: [f64; 5] = [
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.85583502e-6,
    -1.53388349e-8,
];

/// Mean elongation of the Moon D.
pub(crate) const MEAN_ELONGATION: [f64; 5] = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.83194472e-6,
    -8.84447e-9,
];

/// Sun's mean anomaly M.
pub(crate) const SUN_MEAN_ANOMALY: [f64; 5] =
    [357.5291092, 35999.0502909, -0.0001536, 4.08329931e-8, 0.0];

/// Moon's mean anomaly M′.
pub(crate) const MOON_MEAN_ANOMALY: [f64; 5] = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.43474081e-5,
    -6.79717238e-8,
];

/// Moon's argument of latitude F.
pub(crate) const ARGUMENT_OF_LATITUDE: [f64; 5] = [
    93.2720950,
    483202.0175233,
    -0.0036539,
    -2.83607487e-7,
    1.15833247e-9,
];

pub(crate) static LONGITUDE_DISTANCE_TERMS: [LonRadTerm; 60] = [
    lr(0, 0, 1, 0, 6288774, -20905335),
    lr(2, 0, -1, 0, 1274027, -3699111),
    lr(2, 0, 0, 0, 658314, -2955968),
    lr(0, 0, 2, 0, 213618, -569925),
    lr(0, 1, 0, 0, -185116, 48888),
    lr(0, 0, 0, 2, -114332, -3149),
    lr(2, 0, -2, 0, 58793, 246158),
    lr(2, -1, -1, 0, 57066, -152138),
    lr(2, 0, 1, 0, 53322, -170733),
    lr(2, -1, 0, 0, 45758, -204586),
    lr(0, 1, -1, 0, -40923, -129620),
    lr(1, 0, 0, 0, -34720, 108743),
    lr(0, 1, 1, 0, -30383, 104755),
    lr(2, 0, 0, -2, 15327, 10321),
    lr(0, 0, 1, 2, -12528, 0),
    lr(0, 0, 1, -2, 10980, 79661),
    lr(4, 0, -1, 0, 10675, -34782),
    lr(0, 0, 3, 0, 10034, -23210),
    lr(4, 0, -2, 0, 8548, -21636),
    lr(2, 1, -1, 0, -7888, 24208),
    lr(2, 1, 0, 0, -6766, 30824),
    lr(1, 0, -1, 0, -5163, -8379),
    lr(1, 1, 0, 0, 4987, -16675),
    lr(2, -1, 1, 0, 4036, -12831),
    lr(2, 0, 2, 0, 3994, -10445),
    lr(4, 0, 0, 0, 3861, -11650),
    lr(2, 0, -3, 0, 3665, 14403),
    lr(0, 1, -2, 0, -2689, -7003),
    lr(2, 0, -1, 2, -2602, 0),
    lr(2, -1, -2, 0, 2390, 10056),
    lr(1, 0, 1, 0, -2348, 6322),
    lr(2, -2, 0, 0, 2236, -9884),
    lr(0, 1, 2, 0, -2120, 5751),
    lr(0, 2, 0, 0, -2069, 0),
    lr(2, -2, -1, 0, 2048, -4950),
    lr(2, 0, 1, -2, -1773, 4130),
    lr(2, 0, 0, 2, -1595, 0),
    lr(4, -1, -1, 0, 1215, -3958),
    lr(0, 0, 2, 2, -1110, 0),
    lr(3, 0, -1, 0, -892, 3258),
    lr(2, 1, 1, 0, -810, 2616),
    lr(4, -1, -2, 0, 759, -1897),
    lr(0, 2, -1, 0, -713, -2117),
    lr(2, 2, -1, 0, -700, 2354),
    lr(2, 1, -2, 0, 691, 0),
    lr(2, -1, 0, -2, 596, 0),
    lr(4, 0, 1, 0, 549, -1423),
    lr(0, 0, 4, 0, 537, -1117),
    lr(4, -1, 0, 0, 520, -1571),
    lr(1, 0, -2, 0, -487, -1739),
    lr(2, 1, 0, -2, -399, 0),
    lr(0, 0, 2, -2, -381, -4421),
    lr(1, 1, 1, 0, 351, 0),
    lr(3, 0, -2, 0, -340, 0),
    lr(4, 0, -3, 0, 330, 0),
    lr(2, -1, 2, 0, 327, 0),
    lr(0, 2, 1, 0, -323, 1165),
    lr(1, 1, -1, 0, 299, 0),
    lr(2, 0, 3, 0, 294, 0),
    lr(2, 0, -1, -2, 0, 8752),
];

pub(crate) static LATITUDE_TERMS: [LatTerm; 60] = [
    lb(0, 0, 0, 1, 5128122),
    lb(0, 0, 1, 1, 280602),
    lb(0, 0, 1, -1, 277693),
    lb(2, 0, 0, -1, 173237),
    lb(2, 0, -1, 1, 55413),
    lb(2, 0, -1, -1, 46271),
    lb(2, 0, 0, 1, 32573),
    lb(0, 0, 2, 1, 17198),
    lb(2, 0, 1, -1, 9266),
    lb(0, 0, 2, -1, 8822),
    lb(2, -1, 0, -1, 8216),
    lb(2, 0, -2, -1, 4324),
    lb(2, 0, 1, 1, 4200),
    lb(2, 1, 0, -1, -3359),
    lb(2, -1, -1, 1, 2463),
    lb(2, -1, 0, 1, 2211),
    lb(2, -1, -1, -1, 2065),
    lb(0, 1, -1, -1, -1870),
    lb(4, 0, -1, -1, 1828),
    lb(0, 1, 0, 1, -1794),
    lb(0, 0, 0, 3, -1749),
    lb(0, 1, -1, 1, -1565),
    lb(1, 0, 0, 1, -1491),
    lb(0, 1, 1, 1, -1475),
    lb(0, 1, 1, -1, -1410),
    lb(0, 1, 0, -1, -1344),
    lb(1, 0, 0, -1, -1335),
    lb(0, 0, 3, 1, 1107),
    lb(4, 0, 0, -1, 1021),
    lb(4, 0, -1, 1, 833),
    lb(0, 0, 1, -3, 777),
    lb(4, 0, -2, 1, 671),
    lb(2, 0, 0, -3, 607),
    lb(2, 0, 2, -1, 596),
    lb(2, -1, 1, -1, 491),
    lb(2, 0, -2, 1, -451),
    lb(0, 0, 3, -1, 439),
    lb(2, 0, 2, 1, 422),
    lb(2, 0, -3, -1, 421),
    lb(2, 1, -1, 1, -366),
    lb(2, 1, 0, 1, -351),
    lb(4, 0, 0, 1, 331),
    lb(2, -1, 1, 1, 315),
    lb(2, -2, 0, -1, 302),
    lb(0, 0, 1, 3, -283),
    lb(2, 1, 1, -1, -229),
    lb(1, 1, 0, -1, 223),
    lb(1, 1, 0, 1, 223),
    lb(0, 1, -2, -1, -220),
    lb(2, 1, -1, -1, -220),
    lb(1, 0, 1, 1, -185),
    lb(2, -1, -2, -1, 181),
    lb(0, 1, 2, 1, -177),
    lb(4, 0, -2, -1, 176),
    lb(4, -1, -1, -1, 166),
    lb(1, 0, 1, -1, -164),
    lb(4, 0, 1, -1, 132),
    lb(1, 0, -1, -1, -119),
    lb(4, -1, 0, -1, 115),
    lb(2, -2, 0, 1, 107),
];
