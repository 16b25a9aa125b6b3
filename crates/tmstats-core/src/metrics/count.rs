use crate::proto::MetricPublisherPublishMessage;

use super::Metric;

/// Monotonic event counter, zeroed on every report.
#[derive(Debug, Default, Clone)]
pub struct CountMetric {
    value: u64,
}

impl CountMetric {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr(&mut self) {
        self.incr_by(1);
    }

    pub fn incr_by(&mut self, by: u64) {
        self.value = self.value.saturating_add(by);
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl Metric for CountMetric {
    fn get_and_reset(&mut self, name: &str, sink: &mut MetricPublisherPublishMessage) {
        sink.push(name, self.value.to_string());
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_and_zeroes() {
        let mut m = CountMetric::new();
        m.incr();
        m.incr_by(4);

        let mut msg = MetricPublisherPublishMessage::default();
        m.get_and_reset("__emit-count", &mut msg);
        m.get_and_reset("__emit-count", &mut msg);

        let values: Vec<_> = msg.metrics.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, ["5", "0"]);
        assert_eq!(msg.metrics[0].name, "__emit-count");
    }
}
