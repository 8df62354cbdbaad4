use approx::assert_abs_diff_eq;
use itertools::Itertools;

use planetary_ephemeris::events::{season_change, Season};
use planetary_ephemeris::lunar::{
    age_of_moon_in_days, lunation, quarter_change, MoonQuarter, SYNODIC_MONTH,
};
use planetary_ephemeris::time::julian_day;

mod common;
use common::init_logging;

#[test]
fn test_quarters_of_march_2024() {
    init_logging();
    // 2024-02-25 0h UT
    let start = 2460365.5;

    let found: Vec<(f64, MoonQuarter, f64)> = (0..36)
        .map(|k| start + k as f64)
        .filter_map(|jd| {
            quarter_change(jd)
                .unwrap()
                .map(|(quarter, fraction)| (jd, quarter, fraction))
        })
        .collect();

    let quarters: Vec<MoonQuarter> = found.iter().map(|(_, q, _)| *q).collect();
    assert_eq!(
        quarters,
        vec![
            MoonQuarter::LastQuarter,
            MoonQuarter::NewMoon,
            MoonQuarter::FirstQuarter,
            MoonQuarter::FullMoon,
        ]
    );

    // 2024-03-03 15:23, 03-10 09:00, 03-17 04:11, 03-25 07:00 UT
    let days: Vec<f64> = found.iter().map(|(jd, _, _)| *jd).collect();
    assert_eq!(days, vec![2460372.5, 2460379.5, 2460386.5, 2460394.5]);

    // consecutive quarters are about a quarter of a synodic month apart
    for ((jd0, _, f0), (jd1, _, f1)) in found.iter().tuple_windows() {
        let interval = (jd1 + f1) - (jd0 + f0);
        assert!(
            (6.0..8.5).contains(&interval),
            "interval between quarters: {interval} days"
        );
    }
}

#[test]
fn test_age_follows_the_quarters() {
    let new_moon = 2460379.5 + 0.37648379015742045;
    let age = age_of_moon_in_days(new_moon);
    assert!(age.min(SYNODIC_MONTH - age) < 1e-3, "age at new moon: {age}");

    let full_moon = 2460394.5 + 0.29323072652285115;
    assert_abs_diff_eq!(age_of_moon_in_days(full_moon), SYNODIC_MONTH / 2.0, epsilon = 1e-3);

    let last_quarter = 2460372.5 + 0.6426774705039817;
    assert_abs_diff_eq!(
        age_of_moon_in_days(last_quarter),
        0.75 * SYNODIC_MONTH,
        epsilon = 1e-3
    );
}

#[test]
fn test_lunation_advances_monthly() {
    let start = julian_day(2020, 1, 1, 0, 0, 0).unwrap();
    let numbers: Vec<i64> = (0..60)
        .map(|k| lunation(start + k as f64 * SYNODIC_MONTH + 3.3))
        .collect();

    for (n0, n1) in numbers.iter().tuple_windows() {
        assert_eq!(n1 - n0, 1);
    }
    // 2020-01-04, nine days after the new moon of 2019-12-26
    assert_eq!(numbers[0], 1200);
}

#[test]
fn test_seasons_of_2024() {
    // 2024-01-01 0h UT
    let start = 2460310.5;
    let found: Vec<(f64, Season, f64)> = (0..366)
        .map(|k| start + k as f64)
        .filter_map(|jd| {
            season_change(jd)
                .unwrap()
                .map(|(season, fraction)| (jd, season, fraction))
        })
        .collect();

    let expected = [
        (2460389.5, Season::MarchEquinox),
        (2460481.5, Season::JuneSolstice),
        (2460575.5, Season::SeptemberEquinox),
        (2460665.5, Season::DecemberSolstice),
    ];
    assert_eq!(found.len(), expected.len());
    for ((jd, season, fraction), (expected_jd, expected_season)) in found.iter().zip(expected) {
        assert_eq!(*jd, expected_jd);
        assert_eq!(*season, expected_season);
        assert!((0.0..1.0).contains(fraction));
    }

    // 2024-03-20 03:06 UT apparent, the geometric longitude crosses 0° about 8 min earlier
    assert_abs_diff_eq!(found[0].2, 0.1232848063727273, epsilon = 1e-6);
}
