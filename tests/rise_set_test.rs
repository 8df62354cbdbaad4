use approx::assert_abs_diff_eq;

use planetary_ephemeris::constants::INVALID;
use planetary_ephemeris::events::{
    find_rise_set, find_rise_set_with, EventSearchParams, RiseSetKind, TimePair,
};
use planetary_ephemeris::observer::ObserverLocation;
use planetary_ephemeris::position::BodyKind;
use planetary_ephemeris::time::local_midnight_julian_day;

mod common;
use common::{assert_clock_time, init_logging, philadelphia};

fn philadelphia_day(month: u8, day: u8) -> f64 {
    local_midnight_julian_day(2024, month, day, -5).unwrap()
}

#[test]
fn test_sunrise_sunset_philadelphia() {
    init_logging();
    let sun = find_rise_set(RiseSetKind::Sun, philadelphia_day(3, 17), &philadelphia()).unwrap();

    // local solar noon near 12:11.5, half-day arc near 6h01m
    assert_clock_time(sun.a, 6, 10, 2.0);
    assert_clock_time(sun.b, 18, 12, 2.0);

    assert_abs_diff_eq!(sun.a, 0.257355456581692, epsilon = 1e-8);
    assert_abs_diff_eq!(sun.b, 0.7588631194462752, epsilon = 1e-8);
    assert_eq!(sun.to_string(), "06:11 / 18:13");
}

#[test]
fn test_twilights_bracket_the_day() {
    let jd = philadelphia_day(3, 17);
    let observer = philadelphia();

    let expected = [
        (RiseSetKind::CivilTwilight, 0.23863098903549257, 0.7776251229841535),
        (RiseSetKind::NauticalTwilight, 0.2167614899139892, 0.799547646877873),
        (RiseSetKind::AstronomicalTwilight, 0.19457388762890054, 0.8218053418753323),
    ];

    let mut previous = find_rise_set(RiseSetKind::Sun, jd, &observer).unwrap();
    for (kind, a, b) in expected {
        let twilight = find_rise_set(kind, jd, &observer).unwrap();
        assert_abs_diff_eq!(twilight.a, a, epsilon = 1e-8);
        assert_abs_diff_eq!(twilight.b, b, epsilon = 1e-8);

        // deeper twilight starts earlier and ends later
        assert!(twilight.a < previous.a);
        assert!(twilight.b > previous.b);
        previous = twilight;
    }
}

#[test]
fn test_solstice_day_lengths() {
    let observer = philadelphia();

    let june = find_rise_set(RiseSetKind::Sun, philadelphia_day(6, 21), &observer).unwrap();
    assert_abs_diff_eq!(june.a, 0.19075902, epsilon = 1e-7);
    assert_abs_diff_eq!(june.b, 0.81643712, epsilon = 1e-7);

    let december = find_rise_set(RiseSetKind::Sun, philadelphia_day(12, 21), &observer).unwrap();
    assert_abs_diff_eq!(december.a, 0.30678483, epsilon = 1e-7);
    assert_abs_diff_eq!(december.b, 0.69546381, epsilon = 1e-7);

    let june_length = june.b - june.a;
    let december_length = december.b - december.a;
    // about 15h at 40°N in June, 9h20m in December
    assert_abs_diff_eq!(june_length * 24.0, 15.0, epsilon = 0.1);
    assert_abs_diff_eq!(december_length * 24.0, 9.33, epsilon = 0.1);
}

#[test]
fn test_moonrise_moonset() {
    let moon = find_rise_set(RiseSetKind::Moon, philadelphia_day(3, 17), &philadelphia()).unwrap();
    // waxing crescent near first quarter: sets after midnight, rises before noon
    assert_abs_diff_eq!(moon.a, 0.44951952202907947, epsilon = 1e-8);
    assert_abs_diff_eq!(moon.b, 0.08526465521360009, epsilon = 1e-8);
    assert!(moon.b < moon.a);
}

#[test]
fn test_planet_rise_set() {
    let jd = philadelphia_day(3, 17);
    let observer = philadelphia();
    let expected = [
        (BodyKind::Mars, 0.20834531968342535, 0.6453479876959864),
        (BodyKind::Venus, 0.22837744064629353, 0.6854123398625925),
        (BodyKind::Jupiter, 0.34246092321543853, 0.919574777595056),
        (BodyKind::Saturn, 0.23830982024506447, 0.7009005275757478),
    ];
    for (body, a, b) in expected {
        let times = find_rise_set(RiseSetKind::Planet(body), jd, &observer).unwrap();
        assert_abs_diff_eq!(times.a, a, epsilon = 1e-8);
        assert_abs_diff_eq!(times.b, b, epsilon = 1e-8);
    }
}

#[test]
fn test_midnight_sun_and_polar_night() {
    let arctic = ObserverLocation::from_degrees(75.0, 0.0, 0).unwrap();

    let june = local_midnight_julian_day(2024, 6, 21, 0).unwrap();
    let sun = find_rise_set(RiseSetKind::Sun, june, &arctic).unwrap();
    assert_eq!(sun, TimePair::new(INVALID, INVALID));
    assert_eq!(sun.rise(), None);
    assert_eq!(sun.set(), None);

    let december = local_midnight_julian_day(2024, 12, 21, 0).unwrap();
    let sun = find_rise_set(RiseSetKind::Sun, december, &arctic).unwrap();
    assert_eq!(sun, TimePair::default());
}

#[test]
fn test_southern_hemisphere() {
    // Sydney, AEST (UTC+10): sunrise 05:56, sunset 18:10 on 2024-03-17
    let sydney = ObserverLocation::from_degrees(-33.9, 151.2, 10).unwrap();
    let jd = local_midnight_julian_day(2024, 3, 17, sydney.timezone()).unwrap();
    let sun = find_rise_set(RiseSetKind::Sun, jd, &sydney).unwrap();

    assert_abs_diff_eq!(sun.a, 0.2472796789209365, epsilon = 1e-7);
    assert_abs_diff_eq!(sun.b, 0.7572418040984342, epsilon = 1e-7);
}

#[test]
fn test_tighter_tolerance_agrees() {
    let jd = philadelphia_day(3, 17);
    let params = EventSearchParams::builder()
        .max_iterations(50)
        .tolerance(1e-8)
        .build()
        .unwrap();

    let fine = find_rise_set_with(RiseSetKind::Sun, jd, &philadelphia(), &params).unwrap();
    let coarse = find_rise_set(RiseSetKind::Sun, jd, &philadelphia()).unwrap();

    // 1e-4 day tolerance: about 9 seconds
    assert_abs_diff_eq!(fine.a, coarse.a, epsilon = 1e-4);
    assert_abs_diff_eq!(fine.b, coarse.b, epsilon = 1e-4);
}

#[test]
fn test_grazing_sunrise_stays_in_its_hour() {
    init_logging();
    // 2024-01-01 near the Antarctic circle: the Sun sets in hour 10, barely dips under the
    // rising threshold and rises again within hour 11
    let observer = ObserverLocation::from_degrees(-66.0, -170.0, 0).unwrap();
    let sun = find_rise_set(RiseSetKind::Sun, 2460310.5, &observer).unwrap();

    let rise = sun.rise().unwrap();
    assert!((11.0 / 24.0..=12.0 / 24.0).contains(&rise), "rise: {rise}");
    assert_abs_diff_eq!(rise, 0.46771267136831135, epsilon = 1e-7);
    assert_abs_diff_eq!(sun.b, 0.4559824185424916, epsilon = 1e-7);
    assert_eq!(sun.to_string(), "11:14 / 10:57");
}

#[test]
fn test_fractions_stay_within_the_day() {
    let kinds = [
        RiseSetKind::Sun,
        RiseSetKind::Moon,
        RiseSetKind::CivilTwilight,
        RiseSetKind::AstronomicalTwilight,
    ];
    for day in (0..366).step_by(14) {
        let jd = 2460310.5 + day as f64;
        for latitude in [-66.0, -50.0, 0.0, 50.0, 66.0] {
            for longitude in [-170.0, 0.0] {
                let observer = ObserverLocation::from_degrees(latitude, longitude, 0).unwrap();
                for kind in kinds {
                    let times = find_rise_set(kind, jd, &observer).unwrap();
                    for slot in [times.a, times.b] {
                        assert!(
                            slot == INVALID || (0.0..1.0).contains(&slot),
                            "{kind:?} at ({latitude}, {longitude}), JD {jd}: {slot}"
                        );
                    }
                }
            }
        }
    }
}
