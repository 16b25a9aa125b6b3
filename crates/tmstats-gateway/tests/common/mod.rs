//! Call-counting collector double shared by dispatcher and HTTP tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tmstats_core::error::{Result, StatsError};
use tmstats_core::proto::{
    ExceptionLogRequest, ExceptionLogResponse, IndividualMetric, MetricRequest, MetricResponse,
    Status, TaskMetric, TmasterExceptionLog,
};
use tmstats_gateway::collector::MetricsCollector;

#[derive(Default)]
pub struct CountingCollector {
    pub metric_calls: AtomicUsize,
    pub exception_calls: AtomicUsize,
    pub summary_calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl CountingCollector {
    pub fn failing() -> Self {
        let c = Self::default();
        c.fail.store(true, Ordering::SeqCst);
        c
    }

    pub fn total_calls(&self) -> usize {
        self.metric_calls.load(Ordering::SeqCst)
            + self.exception_calls.load(Ordering::SeqCst)
            + self.summary_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StatsError::CollectorFailure("double told to fail".into()));
        }
        Ok(())
    }
}

pub fn canned_metrics(req: &MetricRequest) -> MetricResponse {
    MetricResponse {
        status: Some(Status::ok()),
        metric: vec![TaskMetric {
            instance_id: "container_1_word_2".into(),
            metric: vec![IndividualMetric {
                name: "__time_spent".into(),
                value: "130".into(),
                interval_values: vec![],
            }],
        }],
        interval: req.interval,
    }
}

pub fn canned_exceptions(req: &ExceptionLogRequest, count: i32) -> ExceptionLogResponse {
    ExceptionLogResponse {
        status: Some(Status::ok()),
        exceptions: vec![TmasterExceptionLog {
            hostname: "host-1".into(),
            component_name: req.component_name.clone(),
            instance_id: "container_1_word_2".into(),
            stacktrace: "java.lang.NullPointerException".into(),
            lasttime: "2026-10-19T10:00:00".into(),
            firsttime: "2026-10-19T09:00:00".into(),
            count,
            logging: "npe".into(),
        }],
    }
}

impl MetricsCollector for CountingCollector {
    fn get_metrics(&self, req: &MetricRequest) -> Result<MetricResponse> {
        self.metric_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(canned_metrics(req))
    }

    fn get_exceptions(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse> {
        self.exception_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(canned_exceptions(req, 1))
    }

    fn get_exceptions_summary(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(canned_exceptions(req, 9))
    }
}
