//! A benchmark for the flip tracker.

use coinflip::tracker::FlipTracker;
use coinflip::Outcome;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn test_record_unbounded() {
    let mut tracker = FlipTracker::new();
    for i in 0..100_000 {
        let outcome = if i % 3 == 0 {
            Outcome::Heads
        } else {
            Outcome::Tails
        };
        tracker.record(outcome);
    }

    black_box(tracker.total());
}

fn test_record_bounded() {
    let mut tracker = FlipTracker::bounded(100);
    for i in 0..100_000 {
        let outcome = if i % 3 == 0 {
            Outcome::Heads
        } else {
            Outcome::Tails
        };
        tracker.record(outcome);
    }

    black_box(tracker.total());
}

fn test_flip_seeded() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(3);
    let mut tracker = FlipTracker::new();
    for _ in 0..100_000 {
        tracker.flip(&mut rng);
    }

    black_box(tracker.total());
}

fn test_percentage_series() {
    let mut tracker = FlipTracker::new();
    for i in 0..10_000 {
        let outcome = if i % 2 == 0 {
            Outcome::Heads
        } else {
            Outcome::Tails
        };
        tracker.record(outcome);
    }

    for _ in 0..100 {
        black_box(tracker.percentage_series().len());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("record unbounded", |b| b.iter(test_record_unbounded));
    c.bench_function("record bounded", |b| b.iter(test_record_bounded));
    c.bench_function("flip seeded", |b| b.iter(test_flip_seeded));
    c.bench_function("percentage series", |b| b.iter(test_percentage_series));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
