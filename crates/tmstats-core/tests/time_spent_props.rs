//! Property tests for the time-spent metric against a reference model.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, Instant};

use proptest::prelude::*;

use tmstats_core::metrics::TimeSpentMetric;
use tmstats_core::proto::MetricPublisherPublishMessage;

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Stop,
    Report,
}

fn op() -> impl Strategy<Value = (Op, u64)> {
    (
        prop_oneof![Just(Op::Start), Just(Op::Stop), Just(Op::Report)],
        0u64..500,
    )
}

proptest! {
    #[test]
    fn report_equals_completed_plus_running(ops in proptest::collection::vec(op(), 1..64)) {
        let base = Instant::now();
        let mut metric = TimeSpentMetric::new();

        let mut now = 0u64;
        let mut acc = 0u64;
        let mut since: Option<u64> = None;

        for (op, advance) in ops {
            now += advance;
            let at = base + Duration::from_millis(now);
            match op {
                Op::Start => {
                    metric.start_at(at);
                    since.get_or_insert(now);
                }
                Op::Stop => {
                    metric.stop_at(at);
                    if let Some(s) = since.take() {
                        acc += now - s;
                    }
                }
                Op::Report => {
                    let mut msg = MetricPublisherPublishMessage::default();
                    metric.get_and_reset_at("m", &mut msg, at);
                    let expected = acc + since.map_or(0, |s| now - s);
                    prop_assert_eq!(msg.metrics.len(), 1);
                    prop_assert_eq!(&msg.metrics[0].value, &expected.to_string());
                    prop_assert_eq!(metric.accumulated_ms(), 0);
                    acc = 0;
                    if since.is_some() {
                        since = Some(now);
                    }
                }
            }
            prop_assert_eq!(metric.is_running(), since.is_some());
        }
    }

    #[test]
    fn accumulator_never_decreases_between_resets(
        steps in proptest::collection::vec((any::<bool>(), 0u64..200), 1..64)
    ) {
        let base = Instant::now();
        let mut metric = TimeSpentMetric::new();
        let mut now = 0u64;
        let mut last = 0u64;

        for (start, advance) in steps {
            now += advance;
            let at = base + Duration::from_millis(now);
            if start { metric.start_at(at) } else { metric.stop_at(at) }
            prop_assert!(metric.accumulated_ms() >= last);
            last = metric.accumulated_ms();
        }
    }
}
