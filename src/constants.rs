//! # Constants and type definitions
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (degrees ↔ radians, days ↔ hours, AU ↔ km)
//! - Core type aliases used across the crate
//!
//! The values follow Meeus, *Astronomical Algorithms* (2nd ed.), which is the source of
//! every truncated series shipped with the crate.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// π/2
pub const PI_OVER_TWO: f64 = std::f64::consts::FRAC_PI_2;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Hourly samples taken over one day by the event finder (24 hours + 1)
pub const HOURLY_SAMPLES: usize = 25;

/// Arcseconds in one degree
pub const SECONDS_PER_DEGREE: f64 = 3_600.0;

/// Astronomical Unit in kilometers (value used by the Meeus series)
pub const AU: f64 = 149_597_870.691;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Mean Earth radius in kilometers, used for the topocentric offset
pub const EARTH_MEAN_RADIUS: f64 = 6_368.0;

/// Mean Earth radius expressed in astronomical units
pub const ERAU: f64 = EARTH_MEAN_RADIUS / AU;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Sentinel stored in a [`TimePair`](crate::events::TimePair) slot when no event was found
pub const INVALID: f64 = -1.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDay = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCenturies = f64;
/// Fraction of a day, in `[0, 1)` for events within the sampled window
pub type DayFraction = f64;
