//! # Vector and rotation primitives
//!
//! Polar ↔ Cartesian conversion, principal-axis rotations and angle reduction helpers shared
//! by the position pipeline and the event finder.
//!
//! Frames are never encoded in the types: a [`Vector3`] or a [`PolarCoordinates`] is
//! "heliocentric ecliptic" or "horizontal" only by virtue of the field that stores it.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{AstronomicalUnit, Degree, Radian, DPI, PI_OVER_TWO};
use crate::ephemeris_errors::EphemerisError;

/// Spherical coordinates of a point: longitude, latitude (radians) and radius (AU).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarCoordinates {
    pub longitude: Radian,
    pub latitude: Radian,
    pub radius: AstronomicalUnit,
}

impl PolarCoordinates {
    pub fn new(longitude: Radian, latitude: Radian, radius: AstronomicalUnit) -> Self {
        PolarCoordinates {
            longitude,
            latitude,
            radius,
        }
    }

    /// Cartesian form of these coordinates, see [`polar_to_cartesian`].
    pub fn to_cartesian(&self) -> Vector3<f64> {
        polar_to_cartesian(self.longitude, self.latitude, self.radius)
    }
}

/// Principal axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = EphemerisError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(EphemerisError::InvalidIndex {
                kind: "axis",
                index,
            }),
        }
    }
}

/// Convert spherical coordinates to a Cartesian vector.
///
/// Arguments
/// ---------
/// * `lon`: longitude in radians.
/// * `lat`: latitude in radians.
/// * `radius`: distance, any unit (the output carries the same unit).
///
/// Returns
/// --------
/// * `(r·cos(lat)·cos(lon), r·cos(lat)·sin(lon), r·sin(lat))`.
pub fn polar_to_cartesian(lon: Radian, lat: Radian, radius: f64) -> Vector3<f64> {
    let cos_lat = lat.cos();
    Vector3::new(
        lon.cos() * cos_lat * radius,
        lon.sin() * cos_lat * radius,
        lat.sin() * radius,
    )
}

/// Convert a Cartesian vector to spherical coordinates.
///
/// The latitude uses `atan2(z, √(x² + y²))` rather than `asin(z / r)`, which keeps the
/// correct magnitude close to the poles. The longitude is returned in `[-π, π]`.
pub fn cartesian_to_polar(v: &Vector3<f64>) -> PolarCoordinates {
    let rho = v.x.hypot(v.y);
    PolarCoordinates {
        longitude: v.y.atan2(v.x),
        latitude: v.z.atan2(rho),
        radius: v.norm(),
    }
}

/// Rotate a vector by `angle` around one of the principal axes.
///
/// With `a = (axis + 1) % 3` and `b = (axis + 2) % 3` the two affected components become
///
/// ```text
/// v[a] = v[a]·cos θ − v[b]·sin θ
/// v[b] = v[b]·cos θ + v[a]·sin θ
/// ```
///
/// which is the right-handed (direct) rotation of the vector. The magnitude is preserved.
///
/// # See also
/// * [`rotation_matrix`] – the same rotation as a 3×3 matrix
pub fn rotate(v: &Vector3<f64>, angle: Radian, axis: Axis) -> Vector3<f64> {
    let (sin_ang, cos_ang) = angle.sin_cos();
    let a = (axis.index() + 1) % 3;
    let b = (axis.index() + 2) % 3;

    let mut out = *v;
    out[a] = v[a] * cos_ang - v[b] * sin_ang;
    out[b] = v[b] * cos_ang + v[a] * sin_ang;
    out
}

/// Construct the right-handed 3×3 rotation matrix around one of the principal axes.
///
/// `rotation_matrix(angle, axis) * v` is equal to [`rotate`]`(v, angle, axis)` up to
/// floating-point rounding.
pub fn rotation_matrix(angle: Radian, axis: Axis) -> Matrix3<f64> {
    let unit = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&unit, angle).into()
}

/// Invert an orthonormal matrix.
///
/// The inverse of an orthonormal matrix is its transpose: the off-diagonal pairs
/// `(0,1)↔(1,0)`, `(0,2)↔(2,0)` and `(1,2)↔(2,1)` are swapped.
pub fn invert_orthonormal(matrix: &Matrix3<f64>) -> Matrix3<f64> {
    let mut inverse = *matrix;
    inverse.swap((0, 1), (1, 0));
    inverse.swap((0, 2), (2, 0));
    inverse.swap((1, 2), (2, 1));
    inverse
}

/// Reduce an angle in radians to `[0, 2π)`.
pub fn normalize_radians(r: Radian) -> Radian {
    let reduced = r - DPI * (r / DPI).floor();
    // Rounding can land exactly on 2π for tiny negative inputs.
    if reduced >= DPI || reduced < 0.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(d: Degree) -> Degree {
    let reduced = d - 360.0 * (d / 360.0).floor();
    if reduced >= 360.0 || reduced < 0.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in radians to `(-π, π]`.
///
/// Signed distance between two directions: `wrap_to_pi(a - b)` is positive when `a` is
/// ahead of `b` by less than half a turn.
pub fn wrap_to_pi(r: Radian) -> Radian {
    let reduced = normalize_radians(r);
    if reduced > std::f64::consts::PI {
        reduced - DPI
    } else {
        reduced
    }
}

/// Quadrant (0, 1, 2 or 3) of an angle in radians.
///
/// If the solar longitude changes quadrant during a day, an equinox or solstice happened
/// that day; if the Moon − Sun elongation changes quadrant, a lunar phase changed.
pub fn quadrant(angle: Radian) -> u8 {
    // normalize_radians keeps the ratio in [0, 4)
    (normalize_radians(angle) / PI_OVER_TWO) as u8
}

/// Arc cosine with the argument clamped to `[-1, 1]`.
///
/// Rounding can push a cosine slightly outside its domain; such inputs return `0` or `π`
/// instead of `NaN`.
///
/// The crate itself recovers every angle with `atan2`. This helper and [`asin_clamped`] are
/// for library users who start from a dot product or a sine, e.g. the angular separation
/// `acos_clamped(u.dot(&v))` of two unit vectors.
pub fn acos_clamped(arg: f64) -> Radian {
    arg.clamp(-1.0, 1.0).acos()
}

/// Arc sine with the argument clamped to `[-1, 1]`.
pub fn asin_clamped(arg: f64) -> Radian {
    arg.clamp(-1.0, 1.0).asin()
}

#[cfg(test)]
mod vector_math_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_polar_to_cartesian_axes() {
        let v = polar_to_cartesian(0.0, 0.0, 2.0);
        assert_relative_eq!(v, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-15);

        let v = polar_to_cartesian(PI / 2.0, 0.0, 1.0);
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let v = polar_to_cartesian(1.234, PI / 2.0, 3.0);
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, 3.0), epsilon = 1e-15);
    }

    #[test]
    fn test_polar_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let lon = rng.random_range(-3.1..3.1);
            let lat = rng.random_range(-1.5..1.5);
            let radius = rng.random_range(1e-3..50.0);

            let back = cartesian_to_polar(&polar_to_cartesian(lon, lat, radius));
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.radius, radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_latitude_near_pole() {
        // asin(z / r) would lose precision here
        let v = Vector3::new(1e-12, 0.0, 1.0);
        let p = cartesian_to_polar(&v);
        assert_relative_eq!(p.latitude, PI / 2.0 - 1e-12, epsilon = 1e-15);
    }

    #[test]
    fn test_rotate_preserves_magnitude() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vector3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );
            let angle = rng.random_range(-10.0..10.0);
            let axis = Axis::try_from(rng.random_range(0..3usize)).unwrap();

            let rotated = rotate(&v, angle, axis);
            assert_relative_eq!(rotated.norm(), v.norm(), max_relative = 1e-14);
        }
    }

    #[test]
    fn test_rotate_quarter_turns() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_relative_eq!(rotate(&x, PI / 2.0, Axis::Z), y, epsilon = 1e-15);
        assert_relative_eq!(rotate(&y, PI / 2.0, Axis::X), z, epsilon = 1e-15);
        assert_relative_eq!(rotate(&z, PI / 2.0, Axis::Y), x, epsilon = 1e-15);
    }

    #[test]
    fn test_rotate_matches_matrix() {
        let v = Vector3::new(0.3, -1.2, 0.7);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let by_formula = rotate(&v, 0.409, axis);
            let by_matrix = rotation_matrix(0.409, axis) * v;
            assert_relative_eq!(by_formula, by_matrix, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invert_orthonormal() {
        let m = rotation_matrix(0.8, Axis::X) * rotation_matrix(-1.3, Axis::Z);
        let inv = invert_orthonormal(&m);

        assert_eq!(inv, m.transpose());
        assert_relative_eq!(inv * m, Matrix3::identity(), epsilon = 1e-14);

        let v = Vector3::new(0.1, 0.2, 0.3);
        assert_relative_eq!(inv * (m * v), v, epsilon = 1e-15);
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::try_from(2usize), Ok(Axis::Z));
        assert_eq!(
            Axis::try_from(3usize),
            Err(EphemerisError::InvalidIndex {
                kind: "axis",
                index: 3
            })
        );
    }

    #[test]
    fn test_normalize_radians() {
        assert_eq!(normalize_radians(0.0), 0.0);
        assert_relative_eq!(normalize_radians(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_relative_eq!(normalize_radians(5.0 * PI), PI, epsilon = 1e-14);
        assert_eq!(normalize_radians(-1e-20), 0.0);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let x = rng.random_range(-1e4..1e4);
            let once = normalize_radians(x);
            assert!((0.0..DPI).contains(&once));
            assert_eq!(normalize_radians(once), once);
        }
    }

    #[test]
    fn test_wrap_to_pi() {
        assert_eq!(wrap_to_pi(PI), PI);
        assert_relative_eq!(wrap_to_pi(-PI / 2.0), -PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(wrap_to_pi(1.5 * PI), -PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(wrap_to_pi(DPI - 0.01), -0.01, epsilon = 1e-14);
        assert_relative_eq!(wrap_to_pi(7.0 * PI + 0.25), -PI + 0.25, epsilon = 1e-13);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_relative_eq!(normalize_degrees(-30.0), 330.0);
        assert_relative_eq!(normalize_degrees(725.0), 5.0, epsilon = 1e-12);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn test_quadrant_periodicity() {
        assert_eq!(quadrant(0.1), 0);
        assert_eq!(quadrant(PI / 2.0 + 0.1), 1);
        assert_eq!(quadrant(PI + 0.1), 2);
        assert_eq!(quadrant(-0.1), 3);

        for k in -5..=5 {
            let shift = DPI * k as f64;
            for x in [0.3, 1.9, 3.5, 5.1] {
                assert_eq!(quadrant(x + shift), quadrant(x));
            }
        }
    }

    #[test]
    fn test_clamped_inverse_trig() {
        assert_eq!(acos_clamped(1.0 + 1e-12), 0.0);
        assert_relative_eq!(acos_clamped(-1.0 - 1e-12), PI);
        assert_relative_eq!(asin_clamped(1.5), PI / 2.0);
        assert_relative_eq!(asin_clamped(-1.5), -PI / 2.0);
        assert_relative_eq!(asin_clamped(0.5), 0.5f64.asin());
    }
}
