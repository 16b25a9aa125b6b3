//! Messages published by metric instances on every reporting cycle.

/// One reported observation. `value` is a decimal string for time-based metrics.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricDatum {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// Ordered batch of datums, built fresh per reporting cycle.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricPublisherPublishMessage {
    #[prost(message, repeated, tag = "1")]
    pub metrics: Vec<MetricDatum>,
}

impl MetricPublisherPublishMessage {
    /// Append a datum, preserving report order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.metrics.push(MetricDatum {
            name: name.into(),
            value: value.into(),
        });
    }
}
