use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use planetary_ephemeris::constants::{J2000, PI_OVER_TWO, RADEG};
use planetary_ephemeris::earth_orientation::mean_obliquity;
use planetary_ephemeris::ephemeris_errors::EphemerisError;
use planetary_ephemeris::observer::ObserverLocation;
use planetary_ephemeris::position::{
    body_coordinates, compute_position, BodyKind, PlanetPosition, PositionOptions,
};
use planetary_ephemeris::series::{earth_heliocentric, heliocentric_vsop};
use planetary_ephemeris::time::{julian_centuries, julian_day};
use planetary_ephemeris::vector_math::{normalize_radians, quadrant};

mod common;
use common::{assert_angle_close, assert_equatorial_close, init_logging, philadelphia};

#[test]
fn test_earth_longitude_at_j2000() {
    let earth = heliocentric_vsop(BodyKind::Earth, 0.0).unwrap();
    assert_abs_diff_eq!(earth.longitude / RADEG, 100.3778, epsilon = 0.01);

    // mean longitude of the Earth, L0(Sun) − 180°
    assert!((earth.longitude / RADEG - 100.46).abs() < 0.1);
}

#[test]
fn test_sun_is_opposite_earth() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let jd = J2000 + rng.random_range(-36525.0..36525.0);
        let t = julian_centuries(jd);
        let earth = earth_heliocentric(t);
        let sun = body_coordinates(BodyKind::Sun, jd).unwrap();

        assert_eq!(
            sun.longitude,
            normalize_radians(earth.longitude + std::f64::consts::PI)
        );
        assert_eq!(sun.latitude, -earth.latitude);
        assert_eq!(sun.radius, earth.radius);
    }
}

#[test]
fn test_mean_obliquity_j2000() {
    assert_abs_diff_eq!(mean_obliquity(0.0), 0.4090928, epsilon = 1e-6);
}

#[test]
fn test_quadrant_is_periodic() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let x = rng.random_range(0.01..6.27);
        let k = rng.random_range(-20..20) as f64;
        // keep away from quadrant boundaries where rounding decides
        if (x / PI_OVER_TWO - (x / PI_OVER_TWO).round()).abs() < 1e-9 {
            continue;
        }
        assert_eq!(quadrant(x), quadrant(x + std::f64::consts::TAU * k));
    }
}

#[test]
fn test_random_positions_stay_in_range() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let options = PositionOptions::default();

    for _ in 0..300 {
        let body = BodyKind::try_from(rng.random_range(0..11usize)).unwrap();
        let jd = J2000 + rng.random_range(-30000.0..30000.0);
        let observer = ObserverLocation::new(
            rng.random_range(-1.5..1.5),
            rng.random_range(-3.1..3.1),
            rng.random_range(-12..=12),
        )
        .unwrap();

        let p = compute_position(body, jd, &observer, &options).unwrap();
        assert!(p.declination.abs() <= PI_OVER_TWO);
        assert!(p.right_ascension.abs() <= std::f64::consts::PI);
        assert!(p.hour_angle.abs() <= std::f64::consts::PI);
        assert!(p.altitude().abs() <= PI_OVER_TWO);
        assert_abs_diff_eq!(p.ecliptic.norm(), p.equatorial.norm(), epsilon = 1e-12);
        assert_abs_diff_eq!(p.equatorial.norm(), p.horizontal.norm(), epsilon = 1e-12);
    }
}

#[test]
fn test_outer_planet_light_time_bounded() {
    let observer = philadelphia();
    let bounds = [
        (BodyKind::Jupiter, 0.023, 0.037),
        (BodyKind::Saturn, 0.045, 0.064),
        (BodyKind::Uranus, 0.105, 0.125),
        (BodyKind::Neptune, 0.160, 0.185),
        (BodyKind::Pluto, 0.16, 0.29),
    ];
    for k in 0..12 {
        let jd = julian_day(2024, 1, 1, 0, 0, 0).unwrap() + k as f64 * 30.0;
        for (body, min, max) in bounds {
            let p = compute_position(body, jd, &observer, &PositionOptions::default()).unwrap();
            assert!(
                p.light_time > min && p.light_time < max,
                "{body} light time {} outside ({min}, {max})",
                p.light_time
            );
        }
    }
}

#[test]
fn test_topocentric_offset_is_small_for_planets() {
    let observer = philadelphia();
    let jd = julian_day(2024, 3, 17, 12, 0, 0).unwrap();
    let geocentric = PositionOptions::builder().topocentric(false).build().unwrap();

    for body in [BodyKind::Mars, BodyKind::Jupiter, BodyKind::Saturn] {
        let topo = compute_position(body, jd, &observer, &PositionOptions::default()).unwrap();
        let geo = compute_position(body, jd, &observer, &geocentric).unwrap();
        // parallax below 30″
        assert_equatorial_close(&topo, &geo, 30.0 / 3600.0 * RADEG);
    }

    // lunar parallax reaches about one degree
    let topo = compute_position(BodyKind::Moon, jd, &observer, &PositionOptions::default()).unwrap();
    let geo = compute_position(BodyKind::Moon, jd, &observer, &geocentric).unwrap();
    let shift = (topo.declination - geo.declination).abs();
    assert!(shift > 0.05 * RADEG && shift < 1.1 * RADEG);
}

#[test]
fn test_equatorial_matches_spherical_formulas() {
    // Meeus eq. 13.3 and 13.4
    let jd = julian_day(2024, 3, 17, 0, 0, 0).unwrap();
    let options = PositionOptions::builder().topocentric(false).build().unwrap();
    let jupiter =
        compute_position(BodyKind::Jupiter, jd, &ObserverLocation::default(), &options).unwrap();

    let ecl = jupiter.ecliptic_polar();
    let (lon, lat, eps) = (ecl.longitude, ecl.latitude, jupiter.obliquity);
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();

    assert_angle_close(jupiter.right_ascension, ra, 1e-12);
    assert_abs_diff_eq!(jupiter.declination, dec, epsilon = 1e-12);
}

#[test]
fn test_planet_position_before_calc() {
    let mut saturn = PlanetPosition::new(BodyKind::Saturn, philadelphia());
    assert_eq!(saturn.declination(), Err(EphemerisError::Uninitialized));
    assert_eq!(saturn.polar(), Err(EphemerisError::Uninitialized));
    assert_eq!(
        saturn.hour_angle().unwrap_err().to_string(),
        "Call PlanetPosition::calc() first."
    );

    saturn.calc(J2000).unwrap();
    assert!(saturn.declination().is_ok());
    assert!(saturn.azimuth().is_ok());
    assert!(saturn.ecliptic_polar().unwrap().radius > 8.0);
}
