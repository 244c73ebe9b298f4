//! This module renders the tracker state as plain text for the console
//! shell: a sideways line chart of the percentage series and proportional
//! bars for the raw counters.

use crate::Stats;

/// Number of character cells in the plotted strip. Odd, so that the zero
/// axis falls on a single center cell.
const STRIP_WIDTH: usize = 61;

/// The viewing window for the series, in percent. The series itself can
/// reach +/-100 but interesting runs settle well inside this window, so
/// values beyond it are drawn pinned to the nearest edge.
const Y_LIMIT: f64 = 50.0;

/// Width of the widest counter bar, in characters.
const BAR_WIDTH: u64 = 40;

/// Render the percentage series as a sideways line chart, one row per
/// sampled flip. The chart reads top to bottom in flip order, the marker
/// column is the excess of heads over tails and the center axis is the
/// even split. At most `max_rows` rows are emitted.
pub fn render(series: &[f64], max_rows: usize) -> String {
    assert!(max_rows > 0);
    let mut out = String::new();
    out.push_str("The Law of Large Numbers\n");
    out.push_str("Excess Heads Over Tails (%). The '|' axis is Equal (50/50).\n");
    if series.is_empty() {
        out.push_str("-- empty --\n");
        return out;
    }
    out.push_str(&format!("{:>6} {:<30}{}{:>30}\n", "flip", "-50", "0", "+50"));

    // Sample evenly when there are more points than rows, anchored at the
    // end so the newest flip always gets a row.
    let step = (series.len() + max_rows - 1) / max_rows;
    let mut picked = Vec::new();
    let mut i = series.len();
    while i > 0 {
        picked.push(i - 1);
        i = i.saturating_sub(step);
    }
    picked.reverse();

    for idx in picked {
        let value = series[idx];
        out.push_str(&format!("{:>6} {} {:+7.1}\n", idx + 1, strip(value), value));
    }
    out
}

/// Build the strip for a single value, with '*' on the value cell and '|'
/// on the zero axis.
fn strip(value: f64) -> String {
    let center = (STRIP_WIDTH - 1) / 2;
    let pinned = value.clamp(-Y_LIMIT, Y_LIMIT);
    let cell = ((pinned + Y_LIMIT) / (2.0 * Y_LIMIT) * (STRIP_WIDTH - 1) as f64).round() as usize;
    (0..STRIP_WIDTH)
        .map(|i| {
            if i == cell {
                '*'
            } else if i == center {
                '|'
            } else {
                ' '
            }
        })
        .collect()
}

/// Render the raw counters as proportional bars. The longer bar always
/// spans the full width and the other is scaled against it.
pub fn count_bars(stats: &Stats) -> String {
    let mut out = String::new();
    let max = stats.heads.max(stats.tails);
    if max == 0 {
        out.push_str("-- empty --\n");
        return out;
    }
    for (label, count, pct) in [
        ("heads", stats.heads, stats.heads_pct),
        ("tails", stats.tails, stats.tails_pct),
    ] {
        out.push_str(&format!("{}) ", label));
        let len = (BAR_WIDTH * count) / max;
        for _ in 0..len {
            out.push('#');
        }
        out.push_str(&format!(" - {} ({:.1}%)\n", count, pct));
    }
    out
}

#[test]
fn test_render_empty() {
    let text = render(&[], 20);
    assert!(text.contains("The Law of Large Numbers"));
    assert!(text.contains("-- empty --"));
}

#[test]
fn test_render_marks_the_axis() {
    // A perfectly balanced value lands exactly on the axis cell.
    let text = render(&[0.0], 20);
    let row = text.lines().last().unwrap();
    let cells: Vec<char> = row.chars().collect();
    assert_eq!(cells[7 + 30], '*');
    assert_eq!(row.matches('|').count(), 0);
    assert!(row.ends_with("+0.0"));
}

#[test]
fn test_render_pins_to_the_window() {
    // +/-100 percent sits outside the +/-50 window and is pinned to the
    // edges; the axis stays visible.
    let text = render(&[100.0, -100.0], 20);
    let rows: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(rows.len(), 2);

    let first: Vec<char> = rows[0].chars().collect();
    assert_eq!(first[7 + 60], '*');
    assert_eq!(first[7 + 30], '|');
    assert!(rows[0].ends_with("+100.0"));

    let second: Vec<char> = rows[1].chars().collect();
    assert_eq!(second[7], '*');
    assert_eq!(second[7 + 30], '|');
    assert!(rows[1].ends_with("-100.0"));
}

#[test]
fn test_render_samples_long_series() {
    let series: Vec<f64> = (0..1000).map(|_| 0.0).collect();
    let text = render(&series, 20);
    let rows = text.lines().count() - 3;
    assert!(rows <= 20);
    // The newest flip is always shown.
    let last = text.lines().last().unwrap();
    assert!(last.starts_with("  1000 "));
}

#[test]
fn test_render_short_series_keeps_every_row() {
    let series = [100.0, 0.0, -100.0 / 3.0, 0.0];
    let text = render(&series, 20);
    let rows: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with("     1 "));
    assert!(rows[3].starts_with("     4 "));
    assert!(rows[2].ends_with("-33.3"));
}

#[test]
fn test_count_bars() {
    let stats = Stats {
        heads: 1,
        tails: 2,
        total: 3,
        heads_pct: 100.0 / 3.0,
        tails_pct: 200.0 / 3.0,
    };
    let text = count_bars(&stats);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("heads) {} - 1 (33.3%)", "#".repeat(20)));
    assert_eq!(lines[1], format!("tails) {} - 2 (66.7%)", "#".repeat(40)));
}

#[test]
fn test_count_bars_empty() {
    let text = count_bars(&Stats::default());
    assert_eq!(text, "-- empty --\n");
}
