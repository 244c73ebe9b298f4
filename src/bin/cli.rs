//! This is the command line tool that drives the coin flip simulator. By
//! default it runs an interactive menu; with --flips it runs a hands-free
//! batch of flips and prints the results.

extern crate clap;
extern crate env_logger;
extern crate log;
extern crate rand;

use clap::{value_parser, Arg, Command};
use coinflip::chart;
use coinflip::prompt::{read_line, read_value};
use coinflip::tracker::FlipTracker;
use coinflip::Outcome;
use rand::Rng;

use std::io::{self, BufRead, Write};
use std::time::Instant;
use std::{thread, time::Duration};

/// Maximum number of rows in the printed chart.
const CHART_ROWS: usize = 30;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:.3} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn new_tracker(capacity: Option<usize>) -> FlipTracker {
    match capacity {
        Some(limit) => FlipTracker::bounded(limit),
        None => FlipTracker::new(),
    }
}

fn show_flip(outcome: Outcome) {
    match outcome {
        Outcome::Heads => println!("HEADS!"),
        Outcome::Tails => println!("TAILS!"),
    }
}

fn show_stats(tracker: &FlipTracker) {
    let stats = tracker.stats();
    println!();
    println!("Statistics:");
    println!("   Heads: {}", stats.heads);
    println!("   Tails: {}", stats.tails);
    println!("   Total Flips: {}", stats.total);
    if stats.total > 0 {
        println!(
            "   Heads: {:.1}% | Tails: {:.1}%",
            stats.heads_pct, stats.tails_pct
        );
        print!("{}", chart::count_bars(&stats));
    }
}

fn show_chart(tracker: &FlipTracker) {
    if tracker.is_empty() {
        println!("No data to plot yet. Flip some coins first!");
        return;
    }
    let series = tracker.percentage_series();
    print!("{}", chart::render(&series, CHART_ROWS));
}

fn auto_flip<R: Rng + ?Sized>(
    tracker: &mut FlipTracker,
    rng: &mut R,
    flips: u64,
    delay: Duration,
) {
    println!();
    println!(
        "Auto-flipping {} times with {}s delay...",
        flips,
        delay.as_secs_f64()
    );
    for i in 1..=flips {
        print!("Flip {}: ", i);
        show_flip(tracker.flip(rng));
        thread::sleep(delay);
    }
    println!("Auto-flip complete!");
}

/// Run one batch of flips without the menu and print the results.
fn run_batch(flips: u64, delay: Duration, capacity: Option<usize>) {
    let mut tracker = new_tracker(capacity);
    let mut rng = rand::thread_rng();

    log::info!("Flipping {} coins with {}ms delay", flips, delay.as_millis());
    let x = Timer::new();
    auto_flip(&mut tracker, &mut rng, flips, delay);
    drop(x);

    show_stats(&tracker);
    show_chart(&tracker);
}

/// The interactive menu loop. Returns when the user exits or the input is
/// exhausted.
fn run_menu<R: BufRead>(input: &mut R, capacity: Option<usize>) {
    let mut tracker = new_tracker(capacity);
    let mut rng = rand::thread_rng();

    println!("Welcome to the Coin Flip Simulator!");
    println!("{}", "=".repeat(50));

    loop {
        println!();
        println!("Options:");
        println!("1. Flip coin once");
        println!("2. Auto-flip multiple times");
        println!("3. Show statistics");
        println!("4. Show graph");
        println!("5. Reset statistics");
        println!("6. Exit");

        print!("\nEnter your choice (1-6): ");
        let _ = io::stdout().flush();
        let choice = match read_line(input) {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                show_flip(tracker.flip(&mut rng));
                show_stats(&tracker);
            }
            "2" => {
                let flips = match read_value::<u64, _>("How many flips? ", input) {
                    Some(value) => value,
                    None => break,
                };
                let secs = match read_value::<f64, _>("Delay between flips (seconds)? ", input) {
                    Some(value) => value,
                    None => break,
                };
                // Negative or non-finite delays count as no delay.
                let delay = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
                auto_flip(&mut tracker, &mut rng, flips, delay);
                show_stats(&tracker);
            }
            "3" => show_stats(&tracker),
            "4" => show_chart(&tracker),
            "5" => {
                tracker.reset();
                println!("Statistics reset!");
            }
            "6" => {
                println!("Thanks for using the Coin Flip Simulator!");
                break;
            }
            _ => println!("Invalid choice! Please enter 1-6."),
        }
    }
}

fn main() {
    let matches = Command::new("coinflip")
        .version("1.x")
        .arg(
            Arg::new("flips")
                .short('n')
                .long("flips")
                .value_name("N")
                .help("Run N flips without the menu and show the results")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_name("MS")
                .help("Delay between flips for the hands-free run")
                .value_parser(value_parser!(u64))
                .default_value("0")
                .num_args(1),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .value_name("N")
                .help("Retain only the last N flips for the graph")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let capacity = matches
        .get_one::<u64>("capacity")
        .map(|&limit| limit as usize);
    let delay_ms = matches.get_one::<u64>("delay-ms").copied().unwrap_or(0);

    if let Some(&flips) = matches.get_one::<u64>("flips") {
        run_batch(flips, Duration::from_millis(delay_ms), capacity);
        return;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(&mut input, capacity);
}
