//! Lock-light counters and a shared stopwatch for node metrics
//!
//! Solver and validation threads bump [`AtomicCounter`]s and bracket their
//! work with [`AtomicTimer::start`] / [`AtomicTimer::stop`]; a reporting loop
//! reads rates and a [`MetricsSnapshot`] without stopping them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::Serialize;

/// 64-bit counter shared between threads
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicU64,
}

impl AtomicCounter {
    /// Create a counter at zero
    pub const fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Add one, wrapping on overflow
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Subtract one, wrapping on underflow
    pub fn decrement(&self) {
        self.value.fetch_sub(1, Ordering::Relaxed);
    }

    /// Current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Source of monotonic time for [`AtomicTimer`].
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;
}

/// The system's monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Default)]
struct TimerState {
    threads: u64,
    started_at: Option<Instant>,
    total: Duration,
}

/// Stopwatch shared by any number of worker threads.
///
/// Time accumulates while at least one worker is between `start` and `stop`.
/// Overlapping workers count the wall-clock interval once.
#[derive(Debug, Default)]
pub struct AtomicTimer<C: Clock = MonotonicClock> {
    clock: C,
    state: Mutex<TimerState>,
}

impl AtomicTimer<MonotonicClock> {
    /// Create a stopped timer on the monotonic clock
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<C: Clock> AtomicTimer<C> {
    /// Create a stopped timer reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(TimerState::default()),
        }
    }

    /// Register a worker; the first one starts the clock.
    pub fn start(&self) {
        let mut state = self.state.lock();
        state.threads += 1;
        if state.threads == 1 {
            state.started_at = Some(self.clock.now());
        }
    }

    /// Unregister a worker; the last one adds the interval to the total.
    ///
    /// A stop without a matching start is ignored.
    pub fn stop(&self) {
        let mut state = self.state.lock();
        if state.threads == 0 {
            tracing::warn!("AtomicTimer stopped more times than started");
            return;
        }
        state.threads -= 1;
        if state.threads == 0 {
            if let Some(started_at) = state.started_at.take() {
                let now = self.clock.now();
                state.total += now.saturating_duration_since(started_at);
            }
        }
    }

    /// Whether any worker is running
    pub fn running(&self) -> bool {
        self.state.lock().threads > 0
    }

    /// Number of running workers
    pub fn thread_count(&self) -> u64 {
        self.state.lock().threads
    }

    /// Accumulated time, including the interval in progress
    pub fn elapsed(&self) -> Duration {
        let state = self.state.lock();
        let mut elapsed = state.total;
        if let Some(started_at) = state.started_at {
            elapsed += self.clock.now().saturating_duration_since(started_at);
        }
        elapsed
    }

    /// `count` per second of accumulated time; zero before any time has passed
    pub fn rate(&self, count: &AtomicCounter) -> f64 {
        let seconds = self.elapsed().as_secs_f64();
        if seconds == 0.0 {
            return 0.0;
        }
        count.get() as f64 / seconds
    }
}

/// Point-in-time view of [`MiningMetrics`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Seconds since the start time was marked
    pub uptime_secs: i64,
    /// Transactions validated
    pub transactions_validated: u64,
    /// Equihash solver runs
    pub eh_solver_runs: u64,
    /// Solutions checked against the target
    pub solution_target_checks: u64,
    /// Solver threads currently running
    pub miner_threads: u64,
    /// Local solutions per second
    pub local_sol_ps: f64,
    /// Blocks mined by this node
    pub mined_blocks: u64,
    /// Mined blocks that left the main chain
    pub orphaned_blocks: u64,
}

/// Counters a mining node reports on
#[derive(Debug, Default)]
pub struct MiningMetrics {
    /// Transactions that passed validation
    pub transactions_validated: AtomicCounter,
    /// Equihash solver invocations
    pub eh_solver_runs: AtomicCounter,
    /// Candidate solutions compared against the target
    pub solution_target_checks: AtomicCounter,
    /// Time spent with at least one solver thread running
    pub mining_timer: AtomicTimer,
    start_time: OnceCell<DateTime<Utc>>,
    mined_blocks: AtomicCounter,
    orphaned_blocks: AtomicCounter,
    tracked_blocks: Mutex<Vec<[u8; 32]>>,
}

impl MiningMetrics {
    /// Create empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the node start time; later calls keep the first value.
    pub fn mark_start_time(&self) -> DateTime<Utc> {
        *self.start_time.get_or_init(Utc::now)
    }

    /// Recorded start time, if marked
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time.get().copied()
    }

    /// Seconds since the start time; zero when it was never marked
    pub fn uptime(&self) -> i64 {
        self.uptime_at(Utc::now())
    }

    fn uptime_at(&self, now: DateTime<Utc>) -> i64 {
        self.start_time
            .get()
            .map(|start| (now - *start).num_seconds().max(0))
            .unwrap_or(0)
    }

    /// Solutions checked per second of mining time
    pub fn local_sol_ps(&self) -> f64 {
        self.mining_timer.rate(&self.solution_target_checks)
    }

    /// Remember a block this node mined
    pub fn track_mined_block(&self, hash: [u8; 32]) {
        self.mined_blocks.increment();
        self.tracked_blocks.lock().push(hash);
        tracing::info!("Mined block tracked ({} total)", self.mined_blocks.get());
    }

    /// Number of blocks this node mined
    pub fn mined_blocks(&self) -> u64 {
        self.mined_blocks.get()
    }

    /// Number of mined blocks dropped as orphans
    pub fn orphaned_blocks(&self) -> u64 {
        self.orphaned_blocks.get()
    }

    /// Hashes of mined blocks still tracked, oldest first
    pub fn tracked_blocks(&self) -> Vec<[u8; 32]> {
        self.tracked_blocks.lock().clone()
    }

    /// Stop tracking mined blocks that are no longer in the main chain.
    ///
    /// Returns how many were dropped.
    pub fn prune_orphaned_blocks<F>(&self, mut in_main_chain: F) -> usize
    where
        F: FnMut(&[u8; 32]) -> bool,
    {
        let mut tracked = self.tracked_blocks.lock();
        let before = tracked.len();
        tracked.retain(|hash| in_main_chain(hash));
        let pruned = before - tracked.len();
        drop(tracked);

        for _ in 0..pruned {
            self.orphaned_blocks.increment();
        }
        if pruned > 0 {
            tracing::info!("Dropped {} orphaned mined blocks", pruned);
        }
        pruned
    }

    /// Capture every value at once
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_secs: self.uptime(),
            transactions_validated: self.transactions_validated.get(),
            eh_solver_runs: self.eh_solver_runs.get(),
            solution_target_checks: self.solution_target_checks.get(),
            miner_threads: self.mining_timer.thread_count(),
            local_sol_ps: self.local_sol_ps(),
            mined_blocks: self.mined_blocks(),
            orphaned_blocks: self.orphaned_blocks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Clock advanced by hand
    #[derive(Clone)]
    struct ManualClock {
        base: Instant,
        offset: Arc<Mutex<Duration>>,
    }

    impl ManualClock {
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

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock()
        }
    }

    #[test]
    fn test_counter() {
        let counter = AtomicCounter::new();
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_counter_wraps() {
        let counter = AtomicCounter::new();
        counter.decrement();
        assert_eq!(counter.get(), u64::MAX);
        counter.increment();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_overlapping_workers_count_once() {
        let clock = ManualClock::new();
        let timer = AtomicTimer::with_clock(clock.clone());

        timer.start();
        clock.advance(Duration::from_secs(2));
        timer.start();
        assert_eq!(timer.thread_count(), 2);
        clock.advance(Duration::from_secs(3));
        timer.stop();
        assert!(timer.running());
        clock.advance(Duration::from_secs(5));
        timer.stop();

        assert!(!timer.running());
        assert_eq!(timer.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_elapsed_includes_running_interval() {
        let clock = ManualClock::new();
        let timer = AtomicTimer::with_clock(clock.clone());

        timer.start();
        clock.advance(Duration::from_secs(4));
        timer.stop();
        clock.advance(Duration::from_secs(100));
        timer.start();
        clock.advance(Duration::from_secs(6));

        assert_eq!(timer.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_excess_stop_ignored() {
        let clock = ManualClock::new();
        let timer = AtomicTimer::with_clock(clock.clone());

        timer.stop();
        assert_eq!(timer.thread_count(), 0);

        timer.start();
        clock.advance(Duration::from_secs(1));
        timer.stop();
        timer.stop();
        assert_eq!(timer.thread_count(), 0);
        assert_eq!(timer.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_rate() {
        let clock = ManualClock::new();
        let timer = AtomicTimer::with_clock(clock.clone());
        let counter = AtomicCounter::new();
        for _ in 0..50 {
            counter.increment();
        }

        assert_eq!(timer.rate(&counter), 0.0);

        timer.start();
        assert_eq!(timer.rate(&counter), 0.0);
        clock.advance(Duration::from_secs(10));
        timer.stop();
        assert!((timer.rate(&counter) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_start_time_marked_once() {
        let metrics = MiningMetrics::new();
        assert_eq!(metrics.uptime(), 0);
        assert!(metrics.start_time().is_none());

        let first = metrics.mark_start_time();
        let second = metrics.mark_start_time();
        assert_eq!(first, second);
        assert_eq!(metrics.uptime_at(first + chrono::Duration::seconds(90)), 90);
    }

    #[test]
    fn test_track_mined_block() {
        let metrics = MiningMetrics::new();
        metrics.track_mined_block([1u8; 32]);
        metrics.track_mined_block([2u8; 32]);
        assert_eq!(metrics.mined_blocks(), 2);
        assert_eq!(metrics.tracked_blocks(), vec![[1u8; 32], [2u8; 32]]);
    }

    #[test]
    fn test_prune_orphaned_blocks() {
        let metrics = MiningMetrics::new();
        for byte in 1..=4u8 {
            metrics.track_mined_block([byte; 32]);
        }

        let pruned = metrics.prune_orphaned_blocks(|hash| hash[0] % 2 == 0);
        assert_eq!(pruned, 2);
        assert_eq!(metrics.tracked_blocks(), vec![[2u8; 32], [4u8; 32]]);
        assert_eq!(metrics.mined_blocks(), 4);
        assert_eq!(metrics.orphaned_blocks(), 2);

        assert_eq!(metrics.prune_orphaned_blocks(|_| true), 0);
        assert_eq!(metrics.snapshot().orphaned_blocks, 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = MiningMetrics::new();
        metrics.transactions_validated.increment();
        metrics.eh_solver_runs.increment();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.transactions_validated, 1);
        assert_eq!(snapshot.local_sol_ps, 0.0);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["eh_solver_runs"], 1);
        assert_eq!(json["miner_threads"], 0);
        assert_eq!(json["orphaned_blocks"], 0);
    }
}
