//! # Observer location
//!
//! Geographic position of the observer on the Earth's surface and the civil time zone used to
//! express event times.
//!
//! ## Conventions
//!
//! - Latitude: radians, north positive, in `[-π/2, π/2]`.
//! - Longitude: radians, **east positive**, in `[-π, π]`.
//! - Time zone: whole hours from UTC, in `[-12, 12]` (east positive, e.g. `-5` for EST).
//!
//! The location is validated once at construction; every computation afterwards can rely on
//! the ranges above.

use std::f64::consts::PI;

use crate::constants::{Degree, Radian, PI_OVER_TWO, RADEG};
use crate::ephemeris_errors::EphemerisError;

/// Validated geographic location of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    latitude: Radian,
    longitude: Radian,
    timezone: i8,
}

impl ObserverLocation {
    /// Create a new observer location.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geographic latitude in radians (north positive).
    /// * `longitude`: geographic longitude in radians (east positive).
    /// * `timezone`: offset from UTC in whole hours.
    ///
    /// Return
    /// ----------
    /// * The location, or [`EphemerisError::InvalidObserver`] if a value is not finite or lies
    ///   outside its range.
    pub fn new(latitude: Radian, longitude: Radian, timezone: i8) -> Result<Self, EphemerisError> {
        if !latitude.is_finite() || latitude.abs() > PI_OVER_TWO {
            return Err(EphemerisError::InvalidObserver(format!(
                "latitude must be in [-π/2, π/2], got {latitude}"
            )));
        }
        if !longitude.is_finite() || longitude.abs() > PI {
            return Err(EphemerisError::InvalidObserver(format!(
                "longitude must be in [-π, π], got {longitude}"
            )));
        }
        if !(-12..=12).contains(&timezone) {
            return Err(EphemerisError::InvalidObserver(format!(
                "timezone must be in [-12, 12], got {timezone}"
            )));
        }
        Ok(ObserverLocation {
            latitude,
            longitude,
            timezone,
        })
    }

    /// Create a new observer location from angles in degrees.
    ///
    /// See [`ObserverLocation::new`] for the ranges; they apply after conversion to radians.
    pub fn from_degrees(
        latitude: Degree,
        longitude: Degree,
        timezone: i8,
    ) -> Result<Self, EphemerisError> {
        ObserverLocation::new(latitude * RADEG, longitude * RADEG, timezone)
    }

    /// Geographic latitude in radians.
    pub fn latitude(&self) -> Radian {
        self.latitude
    }

    /// Geographic longitude in radians, east positive.
    pub fn longitude(&self) -> Radian {
        self.longitude
    }

    /// Offset from UTC in hours.
    pub fn timezone(&self) -> i8 {
        self.timezone
    }
}

impl Default for ObserverLocation {
    /// An observer at latitude 0, longitude 0 (Greenwich meridian, on the equator), UTC.
    fn default() -> Self {
        ObserverLocation {
            latitude: 0.0,
            longitude: 0.0,
            timezone: 0,
        }
    }
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_degrees() {
        let obs = ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap();
        assert_relative_eq!(obs.latitude(), 40.0 * RADEG);
        assert_relative_eq!(obs.longitude(), -75.8 * RADEG);
        assert_eq!(obs.timezone(), -5);
    }

    #[test]
    fn test_range_limits_accepted() {
        assert!(ObserverLocation::new(PI_OVER_TWO, PI, 12).is_ok());
        assert!(ObserverLocation::new(-PI_OVER_TWO, -PI, -12).is_ok());
    }

    #[test]
    fn test_invalid_observer() {
        let err = ObserverLocation::from_degrees(91.0, 0.0, 0).unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidObserver(_)));
        assert!(err.to_string().contains("latitude"));

        let err = ObserverLocation::from_degrees(0.0, 181.0, 0).unwrap_err();
        assert!(err.to_string().contains("longitude"));

        let err = ObserverLocation::new(0.0, 0.0, 13).unwrap_err();
        assert!(err.to_string().contains("timezone"));

        assert!(ObserverLocation::new(f64::NAN, 0.0, 0).is_err());
        assert!(ObserverLocation::new(0.0, f64::INFINITY, 0).is_err());
    }

    #[test]
    fn test_default() {
        let obs = ObserverLocation::default();
        assert_eq!(obs, ObserverLocation::new(0.0, 0.0, 0).unwrap());
    }
}
