//! Collector contract consumed by the stats dispatcher.
//!
//! The collector owns every named metric and exception record; the dispatcher
//! only holds a shared handle and calls it synchronously on the reactor
//! thread, so a slow collector stalls the whole endpoint.

pub mod memory;

use tmstats_core::error::Result;
use tmstats_core::proto::{ExceptionLogRequest, ExceptionLogResponse, MetricRequest, MetricResponse};

pub use memory::{ExceptionEntry, InMemoryCollector};

/// Answers the three stats queries from in-process state.
pub trait MetricsCollector: Send + Sync {
    /// Report (and reset) the selected metrics.
    fn get_metrics(&self, req: &MetricRequest) -> Result<MetricResponse>;
    /// Matching raw exception records.
    fn get_exceptions(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse>;
    /// Matching exception records aggregated by stacktrace.
    fn get_exceptions_summary(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse>;
}
