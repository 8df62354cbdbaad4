//! # planetary_ephemeris
//!
//! Positions of the Sun, the Moon and the planets for an observer on Earth, and the daily
//! events derived from them: rise and set times, twilights, lunar phases, equinoxes and
//! solstices.
//!
//! Positions come from truncated analytical series (VSOP87 for Mercury … Neptune, ELP-2000/82
//! for the Moon, the Meeus periodic terms for Pluto) and are precise to about an arcminute,
//! which is plenty for almanac work.
//!
//! ## Quick start
//!
//! ```rust
//! use planetary_ephemeris::events::{find_rise_set, RiseSetKind};
//! use planetary_ephemeris::observer::ObserverLocation;
//! use planetary_ephemeris::position::{compute_position, BodyKind, PositionOptions};
//! use planetary_ephemeris::time::{julian_day, local_midnight_julian_day};
//!
//! let observer = ObserverLocation::from_degrees(40.0, -75.8, -5)?;
//!
//! let jd = julian_day(2024, 3, 17, 12, 0, 0)?;
//! let jupiter = compute_position(BodyKind::Jupiter, jd, &observer, &PositionOptions::default())?;
//! println!("{jupiter:#}");
//!
//! let midnight = local_midnight_julian_day(2024, 3, 17, observer.timezone())?;
//! let sun = find_rise_set(RiseSetKind::Sun, midnight, &observer)?;
//! println!("sunrise / sunset: {sun}");
//! # Ok::<(), planetary_ephemeris::ephemeris_errors::EphemerisError>(())
//! ```
//!
//! ## Modules
//!
//! * [`position`] – the position pipeline and [`position::PlanetPosition`].
//! * [`events`] – rise/set, twilight and season search.
//! * [`lunar`] – age of the Moon, lunations and lunar phases.
//! * [`series`], [`moon`], [`pluto`] – the analytical theories.
//! * [`earth_orientation`] – obliquity and nutation.
//! * [`time`] – Julian Day and sidereal time.
//! * [`vector_math`] – frames and rotations.

pub mod constants;
pub mod earth_orientation;
pub mod ephemeris_errors;
pub mod events;
pub mod lunar;
mod lunar_terms;
pub mod moon;
pub mod observer;
pub mod pluto;
pub mod position;
pub mod series;
pub mod time;
pub mod vector_math;
mod vsop_data;
