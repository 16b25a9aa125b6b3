//! Reportable metric primitives.
//!
//! Every metric is drained by the reporting path through [`Metric::get_and_reset`],
//! which appends exactly one datum to a publish message and zeroes the metric.
//!
//! # Serialization contract
//! Metrics carry no internal locking: every mutator takes `&mut self`, so the
//! borrow checker demands exclusive access. Share a counter between worker
//! threads and the reporting path through [`SharedTimeSpentMetric`] (or another
//! `Mutex`) and never through aliasing.

pub mod count;
pub mod time_spent;

use crate::proto::MetricPublisherPublishMessage;

pub use count::CountMetric;
pub use time_spent::{SharedTimeSpentMetric, TimeSpentMetric};

/// A metric that can be drained into a publish message.
pub trait Metric {
    /// Append `{name, current value}` to `sink`, then reset to zero.
    fn get_and_reset(&mut self, name: &str, sink: &mut MetricPublisherPublishMessage);
}
