use coinflip::tracker::FlipTracker;
use coinflip::{Outcome, Stats};

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_invariants_hold_for_random_runs() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tracker = FlipTracker::new();
        for i in 1..=200 {
            tracker.flip(&mut rng);

            let stats = tracker.stats();
            assert_eq!(stats.heads + stats.tails, stats.total);
            assert_eq!(stats.total, i);
            assert_eq!(tracker.recorded_len(), i as usize);

            let series = tracker.percentage_series();
            assert_eq!(series.len(), i as usize);
            for value in series {
                assert!((-100.0..=100.0).contains(&value));
            }
        }
    }
}

#[test]
fn test_retention_with_and_without_a_bound() {
    for n in [0usize, 1, 50, 99, 100, 101, 150, 250] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut bounded = FlipTracker::bounded(100);
        let mut unbounded = FlipTracker::new();
        for _ in 0..n {
            bounded.flip(&mut rng);
            unbounded.flip(&mut rng);
        }

        assert_eq!(bounded.total(), n as u64);
        assert_eq!(bounded.recorded_len(), n.min(100));
        assert_eq!(bounded.cumulative_heads().len(), n.min(100));
        assert_eq!(bounded.cumulative_tails().len(), n.min(100));

        assert_eq!(unbounded.total(), n as u64);
        assert_eq!(unbounded.recorded_len(), n);
    }
}

#[test]
fn test_series_of_alternating_outcomes() {
    // Alternate heads and tails. After an odd number of flips heads lead by
    // exactly one, after an even number the split is perfect.
    let mut tracker = FlipTracker::new();
    for i in 0..100 {
        if i % 2 == 0 {
            tracker.record(Outcome::Heads);
        } else {
            tracker.record(Outcome::Tails);
        }
    }

    let series = tracker.percentage_series();
    for (i, &value) in series.iter().enumerate() {
        let flips = (i + 1) as f64;
        let expected = if (i + 1) % 2 == 1 { 100.0 / flips } else { 0.0 };
        assert!((value - expected).abs() < 1e-9);
    }
}

#[test]
fn test_three_heads_one_tail() {
    let mut tracker = FlipTracker::new();
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Tails);
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Heads);

    let series = tracker.percentage_series();
    assert_eq!(series.len(), 4);
    assert_eq!(series[3], 50.0);

    let stats = tracker.stats();
    assert_eq!(stats.heads, 3);
    assert_eq!(stats.tails, 1);
    assert_eq!(stats.heads_pct, 75.0);
    assert_eq!(stats.tails_pct, 25.0);
}

#[test]
fn test_evicted_flips_still_count() {
    // A one-sided run that overflows the bound. The retained window moves
    // but the running totals that feed the series keep growing.
    let mut tracker = FlipTracker::bounded(100);
    for _ in 0..150 {
        tracker.record(Outcome::Heads);
    }

    assert_eq!(tracker.heads(), 150);
    assert_eq!(tracker.recorded_len(), 100);
    assert_eq!(tracker.cumulative_heads().front(), Some(&51));
    assert_eq!(tracker.cumulative_heads().back(), Some(&150));
    for value in tracker.percentage_series() {
        assert_eq!(value, 100.0);
    }
}

#[test]
fn test_empty_and_reset_states() {
    let mut tracker = FlipTracker::new();
    assert!(tracker.percentage_series().is_empty());
    assert_eq!(tracker.stats(), Stats::default());

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..40 {
        tracker.flip(&mut rng);
    }
    assert_eq!(tracker.total(), 40);

    tracker.reset();
    assert!(tracker.is_empty());
    assert!(tracker.percentage_series().is_empty());
    assert_eq!(tracker.stats(), Stats::default());

    // The tracker is fully usable again after a reset.
    for _ in 0..40 {
        tracker.flip(&mut rng);
    }
    assert_eq!(tracker.total(), 40);
    assert_eq!(tracker.recorded_len(), 40);
}

#[test]
fn test_flips_are_roughly_fair() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tracker = FlipTracker::new();
    for _ in 0..10_000 {
        tracker.flip(&mut rng);
    }

    // A fair draw stays well within 5% of an even split over this many
    // flips.
    let stats = tracker.stats();
    assert!(stats.heads > 4500 && stats.heads < 5500);
    assert!((stats.heads_pct - 50.0).abs() < 5.0);

    // The tail of the series settles close to zero.
    let series = tracker.percentage_series();
    let last = series[series.len() - 1];
    assert!(last.abs() < 10.0);
}
