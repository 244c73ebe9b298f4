//! This module implements the timer behind the hands-free flipping mode.
//! The timer runs on a background thread and hands each tick to a callback.
//! The callback runs on the timer thread, so it must marshal any real work
//! back to the thread that owns the tracker instead of touching it directly.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A repeating timer on a background thread.
///
/// Cancellation is cooperative: the loop checks a shared flag before every
/// tick, so one tick that is already underway may still be delivered after
/// a stop is requested. The thread is never joined; it exits on its own
/// within one interval of the stop request.
pub struct AutoFlip {
    running: Arc<AtomicBool>,
    interval_ms: Arc<AtomicU64>,
}

impl AutoFlip {
    /// Spawn the timer thread. The first tick is delivered right away and
    /// later ticks follow every `interval_ms` milliseconds.
    pub fn start<F>(interval_ms: u64, mut tick: F) -> AutoFlip
    where
        F: FnMut() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let interval = Arc::new(AtomicU64::new(interval_ms));

        let flag = running.clone();
        let pace = interval.clone();
        thread::spawn(move || {
            while flag.load(Ordering::SeqCst) {
                tick();
                // The interval is re-read on every pass so that pace changes
                // apply without a restart.
                let ms = pace.load(Ordering::SeqCst);
                thread::sleep(Duration::from_millis(ms));
            }
        });

        AutoFlip {
            running,
            interval_ms: interval,
        }
    }

    /// Ask the timer thread to exit. Returns immediately; the thread keeps
    /// running for at most one more interval.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Change the tick interval. Takes effect after the sleep that is
    /// currently in progress.
    pub fn set_interval_ms(&self, ms: u64) {
        self.interval_ms.store(ms, Ordering::SeqCst);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.load(Ordering::SeqCst)
    }
}

impl Drop for AutoFlip {
    fn drop(&mut self) {
        self.stop();
    }
}

#[test]
fn test_ticks_until_stopped() {
    let count = Arc::new(AtomicU64::new(0));
    let counter = count.clone();
    let auto = AutoFlip::start(1, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(auto.is_running());

    thread::sleep(Duration::from_millis(200));
    assert!(count.load(Ordering::SeqCst) > 0);

    auto.stop();
    assert!(!auto.is_running());

    // Give any in-flight tick time to land, then check that the count has
    // frozen. One stale tick after the stop is within contract.
    thread::sleep(Duration::from_millis(100));
    let frozen = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(100));
    assert!(count.load(Ordering::SeqCst) <= frozen + 1);
}

#[test]
fn test_drop_requests_a_stop() {
    let count = Arc::new(AtomicU64::new(0));
    let counter = count.clone();
    {
        let _auto = AutoFlip::start(1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(50));
    }

    thread::sleep(Duration::from_millis(100));
    let frozen = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(100));
    assert!(count.load(Ordering::SeqCst) <= frozen + 1);
}

#[test]
fn test_interval_updates_pace_the_running_thread() {
    let count = Arc::new(AtomicU64::new(0));
    let counter = count.clone();
    let auto = AutoFlip::start(1, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(auto.interval_ms(), 1);

    thread::sleep(Duration::from_millis(100));
    assert!(count.load(Ordering::SeqCst) > 0);

    // Stretch the interval beyond the test's horizon. The loop re-reads
    // the pace on its next pass, so at most one more short-pace tick can
    // land before the count freezes.
    auto.set_interval_ms(60_000);
    assert_eq!(auto.interval_ms(), 60_000);

    thread::sleep(Duration::from_millis(100));
    let frozen = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(300));
    assert!(count.load(Ordering::SeqCst) <= frozen + 1);

    auto.stop();
}
