#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use planetary_ephemeris::constants::{DayFraction, Radian, HOURS_PER_DAY};
use planetary_ephemeris::observer::ObserverLocation;
use planetary_ephemeris::position::PositionResult;
use planetary_ephemeris::vector_math::wrap_to_pi;

/// Route `log` output of the library through the test harness (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 40°N 75.8°W, UTC−5.
pub fn philadelphia() -> ObserverLocation {
    ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap()
}

/// Compare two angles modulo 2π.
pub fn assert_angle_close(actual: Radian, expected: Radian, epsilon: f64) {
    let diff = wrap_to_pi(actual - expected);
    assert!(
        diff.abs() <= epsilon,
        "angle {actual} differs from {expected} by {diff} (> {epsilon})"
    );
}

/// Compare a fraction of day with a clock time, within `minutes`.
pub fn assert_clock_time(fraction: DayFraction, hours: u32, mins: u32, minutes: f64) {
    let expected = (hours as f64 + mins as f64 / 60.0) / HOURS_PER_DAY;
    assert_abs_diff_eq!(fraction, expected, epsilon = minutes / (HOURS_PER_DAY * 60.0));
}

pub fn assert_equatorial_close(actual: &PositionResult, expected: &PositionResult, epsilon: f64) {
    assert_angle_close(actual.right_ascension, expected.right_ascension, epsilon);
    assert_abs_diff_eq!(actual.declination, expected.declination, epsilon = epsilon);
    assert_angle_close(actual.hour_angle, expected.hour_angle, epsilon);
}
