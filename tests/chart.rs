use coinflip::chart;
use coinflip::tracker::FlipTracker;
use coinflip::Outcome;

#[test]
fn test_chart_of_a_short_run() {
    let mut tracker = FlipTracker::new();
    tracker.record(Outcome::Heads);
    tracker.record(Outcome::Tails);
    tracker.record(Outcome::Tails);

    let text = chart::render(&tracker.percentage_series(), 30);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "The Law of Large Numbers");
    assert_eq!(lines.len(), 3 + 3);

    // One row per flip, in flip order, ending with the value.
    assert!(lines[3].starts_with("     1 "));
    assert!(lines[3].ends_with("+100.0"));
    assert!(lines[4].ends_with("+0.0"));
    assert!(lines[5].ends_with("-33.3"));
}

#[test]
fn test_chart_of_a_long_run_is_sampled() {
    let mut tracker = FlipTracker::new();
    for i in 0..5000 {
        if i % 2 == 0 {
            tracker.record(Outcome::Heads);
        } else {
            tracker.record(Outcome::Tails);
        }
    }

    let text = chart::render(&tracker.percentage_series(), 30);
    let rows = text.lines().count() - 3;
    assert!(rows > 0 && rows <= 30);
    assert!(text.lines().last().unwrap().starts_with("  5000 "));
}

#[test]
fn test_chart_of_an_empty_tracker() {
    let tracker = FlipTracker::new();
    let text = chart::render(&tracker.percentage_series(), 30);
    assert!(text.contains("-- empty --"));
}

#[test]
fn test_bars_follow_the_counts() {
    let mut tracker = FlipTracker::new();
    for _ in 0..8 {
        tracker.record(Outcome::Heads);
    }
    for _ in 0..2 {
        tracker.record(Outcome::Tails);
    }

    let text = chart::count_bars(&tracker.stats());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    // The heads bar spans the full width, the tails bar a quarter of it.
    assert_eq!(lines[0].matches('#').count(), 40);
    assert_eq!(lines[1].matches('#').count(), 10);
    assert!(lines[0].ends_with("- 8 (80.0%)"));
    assert!(lines[1].ends_with("- 2 (20.0%)"));
}
