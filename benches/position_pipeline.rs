use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use planetary_ephemeris::constants::J2000;
use planetary_ephemeris::events::{find_rise_set, season_change, RiseSetKind};
use planetary_ephemeris::lunar::quarter_change;
use planetary_ephemeris::observer::ObserverLocation;
use planetary_ephemeris::position::{compute_position, BodyKind, PositionOptions};

/// Random Julian Day within a century of J2000.
#[inline]
fn rand_jd(rng: &mut StdRng) -> f64 {
    J2000 + rng.random_range(-18_262.5..18_262.5)
}

fn rand_observer(rng: &mut StdRng) -> ObserverLocation {
    ObserverLocation::from_degrees(
        rng.random_range(-60.0..60.0),
        rng.random_range(-180.0..180.0),
        0,
    )
    .unwrap()
}

/// Full pipeline (light time, topocentric) for every body.
fn bench_compute_position(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 1_000usize;
    let options = PositionOptions::default();

    for body in BodyKind::ALL {
        c.bench_function(&format!("compute_position/{body}"), |b| {
            b.iter_batched(
                || {
                    (0..samples)
                        .map(|_| (rand_jd(&mut rng), rand_observer(&mut rng)))
                        .collect::<Vec<_>>()
                },
                |cases| {
                    for (jd, observer) in cases {
                        let p = compute_position(body, black_box(jd), &observer, &options).unwrap();
                        black_box(p);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

/// Low precision pipeline, as sampled by the event finder.
fn bench_low_precision(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 1_000usize;
    let options = PositionOptions::low_precision();

    c.bench_function("compute_position/low_precision_moon", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_jd(&mut rng), rand_observer(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (jd, observer) in cases {
                    let p = compute_position(BodyKind::Moon, black_box(jd), &observer, &options);
                    black_box(p.ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_events(c: &mut Criterion) {
    let observer = ObserverLocation::from_degrees(40.0, -75.8, -5).unwrap();
    // 2024-03-17, local midnight in Philadelphia
    let jd = 2460386.5 + 5.0 / 24.0;

    c.bench_function("find_rise_set/sun", |b| {
        b.iter(|| black_box(find_rise_set(RiseSetKind::Sun, black_box(jd), &observer).ok()))
    });
    c.bench_function("find_rise_set/moon", |b| {
        b.iter(|| black_box(find_rise_set(RiseSetKind::Moon, black_box(jd), &observer).ok()))
    });
    c.bench_function("quarter_change", |b| {
        b.iter(|| black_box(quarter_change(black_box(2460386.5)).ok()))
    });
    c.bench_function("season_change", |b| {
        b.iter(|| black_box(season_change(black_box(2460389.5)).ok()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_compute_position, bench_low_precision, bench_events
);
criterion_main!(benches);
