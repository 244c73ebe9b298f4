//! This module implements the statistics tracker that backs both of the
//! user-facing shells. It owns the running counters, the recent-outcome
//! history and the cumulative per-flip totals that the chart series is
//! derived from.

use std::collections::VecDeque;

use rand::Rng;

use crate::{Outcome, Stats};

/// Records coin-flip outcomes and derives the percentage series from them.
///
/// The tracker keeps two kinds of state that age differently. The raw
/// counters cover every flip since the last reset. The per-flip sequences
/// can be bounded to a fixed capacity, in which case they only retain the
/// most recent flips. A bounded tracker therefore reports totals over more
/// flips than its history shows.
pub struct FlipTracker {
    /// Number of heads since the last reset.
    heads: u64,
    /// Number of tails since the last reset.
    tails: u64,
    /// Number of flips since the last reset. Always `heads + tails`.
    total: u64,
    /// The retained outcomes, oldest first.
    history: VecDeque<Outcome>,
    /// The heads total as it stood after each retained flip.
    cumulative_heads: VecDeque<u64>,
    /// The tails total as it stood after each retained flip.
    cumulative_tails: VecDeque<u64>,
    /// Upper bound on the retained sequences, or None for unbounded growth.
    capacity: Option<usize>,
}

impl FlipTracker {
    /// Create a tracker that retains every flip.
    pub fn new() -> FlipTracker {
        FlipTracker {
            heads: 0,
            tails: 0,
            total: 0,
            history: VecDeque::new(),
            cumulative_heads: VecDeque::new(),
            cumulative_tails: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a tracker that retains only the most recent `capacity` flips.
    /// The raw counters still cover every flip.
    pub fn bounded(capacity: usize) -> FlipTracker {
        assert!(capacity > 0, "the history capacity can't be zero");
        FlipTracker {
            heads: 0,
            tails: 0,
            total: 0,
            history: VecDeque::with_capacity(capacity),
            cumulative_heads: VecDeque::with_capacity(capacity),
            cumulative_tails: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Draw one outcome from `rng` and record it. Returns the drawn outcome.
    pub fn flip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let outcome = rng.gen();
        self.record(outcome);
        outcome
    }

    /// Record a known outcome. This is the bookkeeping half of the flip
    /// operation, split out so that callers with a predetermined sequence of
    /// outcomes can drive the tracker without a source of randomness.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Heads => self.heads += 1,
            Outcome::Tails => self.tails += 1,
        }
        self.total += 1;
        if let Some(capacity) = self.capacity {
            if self.history.len() == capacity {
                self.history.pop_front();
                self.cumulative_heads.pop_front();
                self.cumulative_tails.pop_front();
            }
        }
        self.history.push_back(outcome);
        self.cumulative_heads.push_back(self.heads);
        self.cumulative_tails.push_back(self.tails);
        self.verify();
    }

    /// The percentage by which heads exceed tails, one entry per retained
    /// flip. Entry `i` is `(heads - tails) / (heads + tails) * 100` over the
    /// running totals after that flip, so a fair sequence drifts toward zero
    /// as the totals grow. An empty tracker yields an empty series.
    pub fn percentage_series(&self) -> Vec<f64> {
        // Every retained entry was recorded after a flip, so the divisor
        // `heads + tails` is at least one.
        self.cumulative_heads
            .iter()
            .zip(self.cumulative_tails.iter())
            .map(|(&h, &t)| (h as f64 - t as f64) / (h + t) as f64 * 100.0)
            .collect()
    }

    /// A snapshot of the counters and their percentage split. The split is
    /// reported as zero on an empty tracker.
    pub fn stats(&self) -> Stats {
        let (heads_pct, tails_pct) = if self.total > 0 {
            let total = self.total as f64;
            (
                self.heads as f64 / total * 100.0,
                self.tails as f64 / total * 100.0,
            )
        } else {
            (0.0, 0.0)
        };
        Stats {
            heads: self.heads,
            tails: self.tails,
            total: self.total,
            heads_pct,
            tails_pct,
        }
    }

    /// Clear the counters and the retained sequences. The capacity setting
    /// survives the reset.
    pub fn reset(&mut self) {
        self.heads = 0;
        self.tails = 0;
        self.total = 0;
        self.history.clear();
        self.cumulative_heads.clear();
        self.cumulative_tails.clear();
        self.verify();
    }

    pub fn heads(&self) -> u64 {
        self.heads
    }

    pub fn tails(&self) -> u64 {
        self.tails
    }

    /// Number of flips since the last reset, including flips that were
    /// evicted from the history.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The retained outcomes, oldest first.
    pub fn history(&self) -> &VecDeque<Outcome> {
        &self.history
    }

    /// The heads total after each retained flip.
    pub fn cumulative_heads(&self) -> &VecDeque<u64> {
        &self.cumulative_heads
    }

    /// The tails total after each retained flip.
    pub fn cumulative_tails(&self) -> &VecDeque<u64> {
        &self.cumulative_tails
    }

    /// Number of retained flips. For a bounded tracker this saturates at the
    /// capacity while `total` keeps growing.
    pub fn recorded_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The retention bound this tracker was created with.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Check the internal invariants in debug builds.
    fn verify(&self) {
        debug_assert_eq!(self.total, self.heads + self.tails);
        debug_assert_eq!(self.history.len(), self.cumulative_heads.len());
        debug_assert_eq!(self.history.len(), self.cumulative_tails.len());
        if let Some(capacity) = self.capacity {
            debug_assert!(self.history.len() <= capacity);
        }
        // The newest retained entry always mirrors the raw counters.
        if let Some(&last) = self.cumulative_heads.back() {
            debug_assert_eq!(last, self.heads);
        }
        if let Some(&last) = self.cumulative_tails.back() {
            debug_assert_eq!(last, self.tails);
        }
    }
}

impl Default for FlipTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_empty_tracker() {
    let tracker = FlipTracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.recorded_len(), 0);
    assert!(tracker.percentage_series().is_empty());
    let stats = tracker.stats();
    assert_eq!(stats.heads, 0);
    assert_eq!(stats.tails, 0);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.heads_pct, 0.0);
    assert_eq!(stats.tails_pct, 0.0);
}

#[test]
fn test_counts_match_total() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(13);
    let mut tracker = FlipTracker::new();
    for i in 1..=1000 {
        tracker.flip(&mut rng);
        let stats = tracker.stats();
        assert_eq!(stats.heads + stats.tails, stats.total);
        assert_eq!(stats.total, i);
        assert_eq!(tracker.recorded_len(), i as usize);
    }
    let stats = tracker.stats();
    assert!((stats.heads_pct + stats.tails_pct - 100.0).abs() < 1e-9);
}

#[test]
fn test_flip_reports_what_it_records() {
    use rand::rngs::mock::StepRng;

    // An all-zero bit source always lands on the same side.
    let mut rng = StepRng::new(0, 0);
    let mut tracker = FlipTracker::new();
    for _ in 0..25 {
        let outcome = tracker.flip(&mut rng);
        assert_eq!(outcome, Outcome::Tails);
    }
    assert_eq!(tracker.heads(), 0);
    assert_eq!(tracker.tails(), 25);
}

#[test]
fn test_percentage_series_values() {
    let mut tracker = FlipTracker::new();
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Tails);
    // Three heads and one tail give an excess of (3 - 1) / 4 = 50%.
    assert_eq!(tracker.percentage_series(), vec![100.0, 100.0, 100.0, 50.0]);
}

#[test]
fn test_series_matches_history() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(7);
    let mut tracker = FlipTracker::new();
    for _ in 0..500 {
        tracker.flip(&mut rng);
    }
    let series = tracker.percentage_series();
    assert_eq!(series.len(), 500);

    // Recompute the series from the raw history and compare.
    let mut heads: i64 = 0;
    let mut tails: i64 = 0;
    for (i, outcome) in tracker.history().iter().enumerate() {
        match outcome {
            Outcome::Heads => heads += 1,
            Outcome::Tails => tails += 1,
        }
        let expected = (heads - tails) as f64 / (i + 1) as f64 * 100.0;
        assert!((series[i] - expected).abs() < 1e-9);
        assert!((-100.0..=100.0).contains(&series[i]));
    }
}

#[test]
fn test_bounded_retention() {
    let mut tracker = FlipTracker::bounded(100);
    // Flips 1..=50 are heads, 51..=150 are tails.
    for _ in 0..50 {
        tracker.record(Outcome::Heads);
    }
    for _ in 0..100 {
        tracker.record(Outcome::Tails);
    }

    // The raw counters cover all 150 flips, the sequences only the last 100.
    assert_eq!(tracker.heads(), 50);
    assert_eq!(tracker.tails(), 100);
    assert_eq!(tracker.total(), 150);
    assert_eq!(tracker.recorded_len(), 100);
    assert_eq!(tracker.history().len(), 100);
    assert_eq!(tracker.cumulative_heads().len(), 100);
    assert_eq!(tracker.cumulative_tails().len(), 100);

    // The oldest retained entry is flip 51, the first tail.
    assert_eq!(tracker.history().front(), Some(&Outcome::Tails));
    assert_eq!(tracker.cumulative_heads().front(), Some(&50));
    assert_eq!(tracker.cumulative_tails().front(), Some(&1));
    assert_eq!(tracker.cumulative_heads().back(), Some(&50));
    assert_eq!(tracker.cumulative_tails().back(), Some(&100));

    // The retained series still divides by the true running totals, so the
    // oldest entry is (50 - 1) / 51 and the newest (50 - 100) / 150.
    let series = tracker.percentage_series();
    assert_eq!(series.len(), 100);
    assert!((series[0] - 49.0 / 51.0 * 100.0).abs() < 1e-9);
    assert!((series[99] - (-50.0 / 150.0 * 100.0)).abs() < 1e-9);
}

#[test]
fn test_reset() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(99);
    let mut tracker = FlipTracker::bounded(10);
    for _ in 0..35 {
        tracker.flip(&mut rng);
    }
    assert_eq!(tracker.total(), 35);
    assert_eq!(tracker.recorded_len(), 10);

    tracker.reset();
    assert!(tracker.is_empty());
    assert_eq!(tracker.total(), 0);
    assert_eq!(tracker.recorded_len(), 0);
    assert!(tracker.percentage_series().is_empty());
    assert_eq!(tracker.stats(), Stats::default());

    // The retention bound survives a reset.
    assert_eq!(tracker.capacity(), Some(10));
    for _ in 0..35 {
        tracker.flip(&mut rng);
    }
    assert_eq!(tracker.total(), 35);
    assert_eq!(tracker.recorded_len(), 10);
}
