use hifitime::Epoch;

use crate::constants::{
    DayFraction, JulianCenturies, JulianDay, Radian, DAYS_PER_CENTURY, HOURS_PER_DAY, J2000,
    RADEG,
};
use crate::earth_orientation::equation_of_equinoxes;
use crate::ephemeris_errors::EphemerisError;

/// Transformation from a hifitime [`Epoch`] to a Julian Day (UTC scale)
///
/// Argument
/// --------
/// * `epoch`: any epoch, whatever its time scale
///
/// Return
/// ------
/// * the Julian Day of this epoch expressed in UTC
pub fn julian_day_from_epoch(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// Transformation from a Julian Day (UTC scale) to a hifitime [`Epoch`]
pub fn epoch_from_julian_day(jd: JulianDay) -> Epoch {
    Epoch::from_jde_utc(jd)
}

/// Transformation from a Gregorian UTC date to a Julian Day
///
/// Argument
/// --------
/// * `year`, `month`, `day`: calendar date
/// * `hour`, `minute`, `second`: time of day (UTC)
///
/// Return
/// ------
/// * the Julian Day, or [`EphemerisError::InvalidDate`] if the date does not exist
pub fn julian_day(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<JulianDay, EphemerisError> {
    let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)?;
    Ok(julian_day_from_epoch(&epoch))
}

/// Julian Day of the local midnight starting a civil date
///
/// The event finder samples one day starting at the given Julian Day and reports fractions of
/// that day, so starting at local midnight yields local times.
///
/// Argument
/// --------
/// * `year`, `month`, `day`: local calendar date
/// * `timezone`: offset from UTC in hours (east positive, e.g. −5 for EST)
pub fn local_midnight_julian_day(
    year: i32,
    month: u8,
    day: u8,
    timezone: i8,
) -> Result<JulianDay, EphemerisError> {
    Ok(julian_day(year, month, day, 0, 0, 0)? - timezone as f64 / HOURS_PER_DAY)
}

/// Julian centuries elapsed since J2000.0
pub fn julian_centuries(jd: JulianDay) -> JulianCenturies {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Convert a whole number of hours into a fraction of day (12 h → 0.5)
pub fn hours_to_day_fraction(hours: u32) -> DayFraction {
    hours as f64 / HOURS_PER_DAY
}

/// Compute the Greenwich mean sidereal time in radians.
///
/// # Arguments
/// * `jd` - Julian Day (UT)
///
/// # Returns
/// * GMST angle in radians, **not** reduced to `[0, 2π)`.
///
/// # Details
/// Meeus, *Astronomical Algorithms* (2nd ed.), eq. 12.4, with the day split into its integer
/// and fractional part to preserve precision:
///
/// ```text
/// θ₀ = 280.46061837° + 360.98564736629°·frac + 0.98564736629°·days
///      + T²·(0.000387933 − T / 38710000)
/// ```
///
/// where `days` is the integer number of days since J2000.0 and `T` the Julian centuries.
pub fn greenwich_sidereal_time(jd: JulianDay) -> Radian {
    let days = jd - J2000;
    let t = days / DAYS_PER_CENTURY;
    let whole_days = days.floor();
    let fraction = days - whole_days;

    let degrees = 280.46061837
        + 360.98564736629 * fraction
        + 0.98564736629 * whole_days
        + t * t * (3.87933e-4 - t / 38710000.);
    degrees * RADEG
}

/// Compute the Greenwich apparent sidereal time in radians.
///
/// Mean sidereal time corrected by the equation of the equinoxes.
///
/// # See also
/// * [`greenwich_sidereal_time`]
/// * [`equation_of_equinoxes`]
pub fn apparent_sidereal_time(jd: JulianDay) -> Radian {
    greenwich_sidereal_time(jd) + equation_of_equinoxes(julian_centuries(jd))
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::vector_math::normalize_radians;
    use approx::assert_abs_diff_eq;
    use hifitime::TimeScale;

    #[test]
    fn test_julian_day() {
        assert_eq!(julian_day(2000, 1, 1, 12, 0, 0).unwrap(), J2000);
        assert_eq!(julian_day(1987, 4, 10, 0, 0, 0).unwrap(), 2446895.5);
        assert_eq!(julian_day(2024, 3, 17, 0, 0, 0).unwrap(), 2460386.5);
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            julian_day(2024, 13, 1, 0, 0, 0),
            Err(EphemerisError::InvalidDate(_))
        ));
        assert!(julian_day(2023, 2, 29, 0, 0, 0).is_err());
    }

    #[test]
    fn test_epoch_round_trip() {
        let epoch = Epoch::from_gregorian(2021, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
        let jd = julian_day_from_epoch(&epoch);
        assert_eq!(jd, 2459215.5);

        let back = epoch_from_julian_day(jd);
        assert_abs_diff_eq!(julian_day_from_epoch(&back), jd, epsilon = 1e-9);
    }

    #[test]
    fn test_local_midnight() {
        let jd = local_midnight_julian_day(2024, 3, 17, -5).unwrap();
        assert_abs_diff_eq!(jd, 2460386.5 + 5.0 / 24.0, epsilon = 1e-12);

        let jd = local_midnight_julian_day(2024, 3, 17, 0).unwrap();
        assert_eq!(jd, 2460386.5);
    }

    #[test]
    fn test_hours_to_day_fraction() {
        assert_eq!(hours_to_day_fraction(12), 0.5);
        assert_eq!(hours_to_day_fraction(0), 0.0);
        assert_eq!(hours_to_day_fraction(6), 0.25);
    }

    #[test]
    fn test_greenwich_sidereal_time() {
        assert_abs_diff_eq!(greenwich_sidereal_time(J2000), 4.894961212735793, epsilon = 1e-12);

        // Meeus, example 12.a: 1987 April 10, 0h UT → 13h10m46.3668s
        let gst = normalize_radians(greenwich_sidereal_time(2446895.5));
        assert_abs_diff_eq!(gst / RADEG, 197.693195, epsilon = 1e-6);

        // Meeus, example 12.b: 1987 April 10, 19h21m UT → 8h34m57.0896s
        let gst = normalize_radians(greenwich_sidereal_time(2446896.30625));
        assert_abs_diff_eq!(gst / RADEG, 128.7378734, epsilon = 1e-6);
    }

    #[test]
    fn test_apparent_sidereal_time() {
        let jd = 2446895.5;
        let diff = apparent_sidereal_time(jd) - greenwich_sidereal_time(jd);
        assert_eq!(diff, equation_of_equinoxes(julian_centuries(jd)));
        assert!(diff.abs() < 1e-4);
    }
}
