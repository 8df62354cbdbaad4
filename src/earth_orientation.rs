//! # Obliquity and nutation
//!
//! Mean obliquity of the ecliptic and nutation in longitude/obliquity following Meeus,
//! *Astronomical Algorithms* (2nd ed.), chapter 22. Both quantities take the time as Julian
//! centuries from J2000.0.

use crate::constants::{ArcSec, JulianCenturies, Radian, RADEG, RADSEC, SECONDS_PER_DEGREE};

/// Compute the mean obliquity of the ecliptic.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries from J2000.0. Valid for the years −8000 … +12000 (`|t| ≤ 100`).
///
/// Returns
/// --------
/// * Mean obliquity ε₀ in radians.
///
/// Formula
/// -------
/// With `u = t / 100` (units of 10 000 Julian years):
///
/// ```text
/// ε₀ = 23°26′21.448″ + Σ_{k=1..10} c_k · u^k / 100     [arcseconds]
/// ```
///
/// # See also
/// * [`true_obliquity`] – adds the nutation in obliquity
pub fn mean_obliquity(t: JulianCenturies) -> Radian {
    const OBLIQUITY_COEFFS: [f64; 10] = [
        -468093., -155., 199925., -5138., -24967., -3905., 712., 2787., 579., 245.,
    ];
    let base: ArcSec = 23. * SECONDS_PER_DEGREE + 26. * 60. + 21.448;

    let u0 = t / 100.;
    let mut u = u0;
    let mut obliquity = base;
    for coeff in OBLIQUITY_COEFFS {
        obliquity += u * coeff / 100.;
        u *= u0;
    }

    obliquity * RADSEC
}

/// Selects which nutation components [`nutation`] evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NutationTerms {
    #[default]
    Both,
    LongitudeOnly,
    ObliquityOnly,
}

impl NutationTerms {
    fn longitude(self) -> bool {
        matches!(self, NutationTerms::Both | NutationTerms::LongitudeOnly)
    }

    fn obliquity(self) -> bool {
        matches!(self, NutationTerms::Both | NutationTerms::ObliquityOnly)
    }
}

/// Nutation angles in arcseconds. A component is `None` when it was not requested.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    /// Nutation in longitude Δψ
    pub longitude: Option<ArcSec>,
    /// Nutation in obliquity Δε
    pub obliquity: Option<ArcSec>,
}

/// Linear rates of the five fundamental arguments D, M, M′, F, Ω (degrees per century).
const LINEAR_PART: [f64; 5] = [
    445267.111480,
    35999.050340,
    477198.867398,
    483202.017538,
    -1934.136261,
];

/// Constant term (×1e5 degrees), quadratic term (×1e-7 degrees) and cubic divisor of each
/// fundamental argument.
const ARGUMENT_COEFFS: [[f64; 3]; 5] = [
    [29785036., -19142., 189474.],
    [35752772., -1603., -300000.],
    [13496298., 86972., 56250.],
    [9327191., -36825., 327270.],
    [12504452., 20708., 450000.],
];

/// Periodic terms: argument multipliers packed in base 5 (digit − 2, most significant = D),
/// Δψ coefficient and Δε coefficient, in units of 0.0001″. The leading Ω term is applied
/// separately.
const NUTATION_TERMS: [(u32, i32, i32); 62] = [
    (324, -13187, 5736),
    (1574, -2274, 977),
    (1564, 2062, -895),
    (1687, 1426, 54),
    (1587, 712, -7),
    (449, -517, 224),
    (1573, -386, 200),
    (1599, -301, 129),
    (199, 217, -95),
    (337, -158, 0),
    (323, 129, -70),
    (1549, 123, -53),
    (2812, 63, 0),
    (1588, 63, -33),
    (2799, -59, 26),
    (1538, -58, 32),
    (1598, -51, 27),
    (362, 48, 0),
    (1523, 46, -24),
    (2824, -38, 16),
    (1624, -31, 13),
    (1612, 29, 0),
    (349, 29, -12),
    (1572, 26, 0),
    (322, -22, 0),
    (1548, 21, -10),
    (1812, 17, 0),
    (2788, 16, -8),
    (574, -16, 7),
    (1688, -15, 9),
    (338, -13, 7),
    (1438, -12, 6),
    (1602, 11, 0),
    (2798, -10, 5),
    (2849, -8, 3),
    (1699, 7, -3),
    (462, -7, 0),
    (1449, -7, 3),
    (2823, -7, 3),
    (2837, 6, 0),
    (374, 6, -3),
    (348, 6, -3),
    (2763, -6, 3),
    (2813, -6, 3),
    (1462, 5, 0),
    (198, -5, 3),
    (313, -5, 3),
    (1623, -5, 3),
    (1524, -3, 0),
    (363, 4, 0),
    (448, 4, 0),
    (1474, -3, 0),
    (2674, -3, 0),
    (1649, -3, 0),
    (2699, -3, 0),
    (837, -3, 0),
    (962, -4, 0),
    (437, -4, 0),
    (1577, 4, 0),
    (2187, -4, 0),
    (1712, -3, 0),
    (1597, 3, 0),
];

/// Time-dependent corrections (0.00001″ per century): the first 16 apply to Δψ, the
/// following 9 to Δε of the first 9 terms.
const TIME_DEPENDENT: [i32; 25] = [
    -16, -2, 2, -34, 1, 12, -4, 0, -5, 0, 1, 0, 0, 1, 0, -1, -31, -5, 5, -1, 0, -6, 0, -1, 3,
];

/// Compute the nutation in longitude and obliquity.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries from J2000.0.
/// * `terms`: which components to evaluate. Skipping one saves its trigonometric sums and
///   never changes the value of the other.
///
/// Returns
/// --------
/// * [`Nutation`] with Δψ and/or Δε in arcseconds.
///
/// Description
/// -----------
/// The five fundamental arguments (mean elongation of the Moon D, mean anomaly of the Sun M,
/// mean anomaly of the Moon M′, Moon's argument of latitude F, longitude of the ascending node
/// Ω) are cubic polynomials in `t`. Each of the 62 periodic terms uses an integer combination
/// of them; the coefficients of the largest terms carry a linear drift in `t`.
///
/// # See also
/// * [`equation_of_equinoxes`] – Δψ·cos ε, for apparent sidereal time
/// * [`true_obliquity`] – ε₀ + Δε
pub fn nutation(t: JulianCenturies, terms: NutationTerms) -> Nutation {
    let t2 = t * t;
    let t3 = t2 * t;

    let mut arguments = [0.0; 5];
    for (i, argument) in arguments.iter_mut().enumerate() {
        let [constant, quadratic, cubic_divisor] = ARGUMENT_COEFFS[i];
        let degrees = LINEAR_PART[i] * t
            + constant / 100000.
            + t2 * quadratic * 1e-7
            + t3 / cubic_divisor;
        *argument = degrees * RADEG;
    }

    let with_longitude = terms.longitude();
    let with_obliquity = terms.obliquity();

    let mut d_psi = (-171996. - 174.2 * t) * arguments[4].sin();
    let mut d_eps = (92025. + 8.9 * t) * arguments[4].cos();

    for (i, &(packed, psi_coeff, eps_coeff)) in NUTATION_TERMS.iter().enumerate() {
        let mut mult = packed;
        let mut total_arg = 0.0;
        for j in (0..5).rev() {
            let digit = (mult % 5) as i32 - 2;
            if digit != 0 {
                total_arg += digit as f64 * arguments[j];
            }
            mult /= 5;
        }

        if with_longitude {
            let mut coeff = psi_coeff as f64;
            if i < 16 && TIME_DEPENDENT[i] != 0 {
                coeff += TIME_DEPENDENT[i] as f64 * t / 10.;
            } else if i == 26 || i == 28 {
                coeff += (27 - i as i32) as f64 * t / 10.;
            }
            d_psi += coeff * total_arg.sin();
        }

        if with_obliquity && eps_coeff != 0 {
            let mut coeff = eps_coeff as f64;
            if i < 9 && TIME_DEPENDENT[i + 16] != 0 {
                coeff += TIME_DEPENDENT[i + 16] as f64 * t / 10.;
            }
            d_eps += coeff * total_arg.cos();
        }
    }

    Nutation {
        longitude: with_longitude.then_some(d_psi * 1e-4),
        obliquity: with_obliquity.then_some(d_eps * 1e-4),
    }
}

/// True obliquity of the ecliptic ε = ε₀ + Δε, in radians.
pub fn true_obliquity(t: JulianCenturies) -> Radian {
    let d_eps = nutation(t, NutationTerms::ObliquityOnly)
        .obliquity
        .unwrap_or_default();
    mean_obliquity(t) + d_eps * RADSEC
}

/// Compute the equation of the equinoxes in radians.
///
/// This is the difference between apparent and mean sidereal time:
///
/// ```text
/// Eq_eq = Δψ · cos(ε₀)
/// ```
///
/// # See also
/// * [`crate::time::apparent_sidereal_time`] – adds this term to the mean sidereal time
pub fn equation_of_equinoxes(t: JulianCenturies) -> Radian {
    let d_psi = nutation(t, NutationTerms::LongitudeOnly)
        .longitude
        .unwrap_or_default();
    RADSEC * d_psi * mean_obliquity(t).cos()
}

#[cfg(test)]
mod test_earth_orientation {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_obliquity() {
        let obl = mean_obliquity(0.0);
        assert_abs_diff_eq!(obl, 0.4090928, epsilon = 1e-6);
        assert_abs_diff_eq!(obl, 0.40909280422232897, epsilon = 1e-15);

        // Meeus, example 22.a: 1987 April 10, ε₀ = 23°26′27.407″
        let obl = mean_obliquity(-0.127296372348);
        assert_abs_diff_eq!(obl / RADSEC, 84387.407, epsilon = 1e-3);
    }

    #[test]
    fn test_nutation_meeus_example() {
        // Meeus, example 22.a: Δψ = −3.788″, Δε = +9.443″
        let n = nutation(-0.127296372348, NutationTerms::Both);
        assert_abs_diff_eq!(n.longitude.unwrap(), -3.788, epsilon = 1e-3);
        assert_abs_diff_eq!(n.obliquity.unwrap(), 9.443, epsilon = 1e-3);
    }

    #[test]
    fn test_nutation_at_j2000() {
        let n = nutation(0.0, NutationTerms::Both);
        assert_abs_diff_eq!(n.longitude.unwrap(), -13.922978, epsilon = 1e-5);
        assert_abs_diff_eq!(n.obliquity.unwrap(), -5.773910, epsilon = 1e-5);
    }

    #[test]
    fn test_suppressed_component_does_not_alter_other() {
        for t in [-1.3, -0.127, 0.0, 0.24, 0.9] {
            let both = nutation(t, NutationTerms::Both);
            let lon_only = nutation(t, NutationTerms::LongitudeOnly);
            let obl_only = nutation(t, NutationTerms::ObliquityOnly);

            assert_eq!(lon_only.obliquity, None);
            assert_eq!(obl_only.longitude, None);
            assert_eq!(lon_only.longitude, both.longitude);
            assert_eq!(obl_only.obliquity, both.obliquity);
        }
    }

    #[test]
    fn test_equation_of_equinoxes() {
        let eqeq = equation_of_equinoxes(0.0);
        let expected = RADSEC * -13.922978454728819 * mean_obliquity(0.0).cos();
        assert_abs_diff_eq!(eqeq, expected, epsilon = 1e-12);
        assert!(eqeq.abs() < 1e-3);
    }

    #[test]
    fn test_true_obliquity() {
        assert_abs_diff_eq!(true_obliquity(0.0), 0.40906481151839075, epsilon = 1e-12);
    }
}
