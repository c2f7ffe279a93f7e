//! Timer and counter behavior under concurrent workers

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use amicoin_metrics::{AtomicCounter, AtomicTimer, Clock, MiningMetrics};
use parking_lot::Mutex;

/// Clock that only moves when a test says so
#[derive(Clone)]
struct SteppedClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl SteppedClock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

#[test]
fn concurrent_counter_updates_are_not_lost() {
    let counter = Arc::new(AtomicCounter::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..10_000 {
                    counter.increment();
                }
                for _ in 0..2_500 {
                    counter.decrement();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(counter.get(), 8 * 7_500);
}

#[test]
fn overlapping_threads_record_one_interval() {
    let clock = SteppedClock::new();
    let timer = Arc::new(AtomicTimer::with_clock(clock.clone()));
    let started = Arc::new(Barrier::new(4));
    let release = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let timer = Arc::clone(&timer);
            let started = Arc::clone(&started);
            let release = Arc::clone(&release);
            thread::spawn(move || {
                timer.start();
                started.wait();
                release.wait();
                timer.stop();
            })
        })
        .collect();

    started.wait();
    assert!(timer.running());
    assert_eq!(timer.thread_count(), 3);

    clock.advance(Duration::from_secs(7));
    release.wait();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(!timer.running());
    assert_eq!(timer.thread_count(), 0);
    assert_eq!(timer.elapsed(), Duration::from_secs(7));
}

#[test]
fn rate_is_zero_without_elapsed_time() {
    let timer = AtomicTimer::with_clock(SteppedClock::new());
    let counter = AtomicCounter::new();
    counter.increment();
    assert_eq!(timer.rate(&counter), 0.0);
}

#[test]
fn mining_metrics_shared_between_solver_threads() {
    let metrics = Arc::new(MiningMetrics::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                metrics.mining_timer.start();
                for _ in 0..100 {
                    metrics.eh_solver_runs.increment();
                    metrics.solution_target_checks.increment();
                }
                metrics.mining_timer.stop();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.eh_solver_runs, 400);
    assert_eq!(snapshot.solution_target_checks, 400);
    assert_eq!(snapshot.miner_threads, 0);
    assert!(snapshot.local_sol_ps >= 0.0);
}
