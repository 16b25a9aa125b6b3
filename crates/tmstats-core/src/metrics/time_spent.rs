//! Time-spent metric: wall-clock milliseconds accumulated across start/stop
//! intervals.
//!
//! Durations come from the monotonic clock and are truncated to whole
//! milliseconds per interval. The `*_at` variants take an explicit instant so
//! callers (and tests) can drive the clock themselves.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::proto::MetricPublisherPublishMessage;

use super::Metric;

/// Elapsed-time accumulator with two states: idle (`started == None`) and
/// running (`started == Some(interval_start)`).
#[derive(Debug, Default, Clone)]
pub struct TimeSpentMetric {
    total_ms: u64,
    started: Option<Instant>,
}

fn elapsed_ms(from: Instant, to: Instant) -> u64 {
    u64::try_from(to.saturating_duration_since(from).as_millis()).unwrap_or(u64::MAX)
}

impl TimeSpentMetric {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an interval. No-op while already running; the clock is not reset.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Close the current interval. No-op while idle.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn stop_at(&mut self, now: Instant) {
        if let Some(begin) = self.started.take() {
            self.total_ms = self.total_ms.saturating_add(elapsed_ms(begin, now));
        }
    }

    /// Report and reset at `now`. A running interval is flushed and restarted
    /// at `now`, so measurement continues across the report boundary.
    pub fn get_and_reset_at(
        &mut self,
        name: &str,
        sink: &mut MetricPublisherPublishMessage,
        now: Instant,
    ) {
        if let Some(begin) = self.started {
            self.total_ms = self.total_ms.saturating_add(elapsed_ms(begin, now));
            self.started = Some(now);
        }
        sink.push(name, self.total_ms.to_string());
        self.total_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Milliseconds from completed intervals since the last reset.
    pub fn accumulated_ms(&self) -> u64 {
        self.total_ms
    }
}

impl Metric for TimeSpentMetric {
    fn get_and_reset(&mut self, name: &str, sink: &mut MetricPublisherPublishMessage) {
        self.get_and_reset_at(name, sink, Instant::now());
    }
}

/// Thread-safe time-spent metric.
///
/// Worker threads bracket work with `start`/`stop` while the reporting path
/// drains it; the mutex serializes both sides. A poisoned lock is recovered
/// since every mutation leaves the counter consistent.
#[derive(Debug, Default)]
pub struct SharedTimeSpentMetric {
    inner: Mutex<TimeSpentMetric>,
}

impl SharedTimeSpentMetric {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TimeSpentMetric> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("time-spent metric lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    pub fn start(&self) {
        self.lock().start();
    }

    pub fn stop(&self) {
        self.lock().stop();
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    /// Run `f` with exclusive access to the underlying counter.
    pub fn with<R>(&self, f: impl FnOnce(&mut TimeSpentMetric) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn report(&self, name: &str, sink: &mut MetricPublisherPublishMessage) {
        self.lock().get_and_reset(name, sink);
    }
}

impl Metric for SharedTimeSpentMetric {
    fn get_and_reset(&mut self, name: &str, sink: &mut MetricPublisherPublishMessage) {
        self.report(name, sink);
    }
}

impl Metric for std::sync::Arc<SharedTimeSpentMetric> {
    fn get_and_reset(&mut self, name: &str, sink: &mut MetricPublisherPublishMessage) {
        self.report(name, sink);
    }
}
