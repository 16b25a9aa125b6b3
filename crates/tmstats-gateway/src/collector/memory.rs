//! In-memory collector: per-component, per-instance metric registries and
//! bounded exception logs.
//!
//! Metric queries drain what they touch (`get_and_reset`), so two consecutive
//! `/stats` calls report disjoint windows.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use dashmap::DashMap;

use tmstats_core::error::Result;
use tmstats_core::metrics::{Metric, SharedTimeSpentMetric};
use tmstats_core::proto::{
    ExceptionLogRequest, ExceptionLogResponse, IndividualMetric, MetricPublisherPublishMessage,
    MetricRequest, MetricResponse, Status, TaskMetric, TmasterExceptionLog,
};

use super::MetricsCollector;

type BoxedMetric = Box<dyn Metric + Send + Sync>;

/// Exception raised by a monitored instance, as reported to the collector.
#[derive(Debug, Clone)]
pub struct ExceptionEntry {
    pub hostname: String,
    pub component_name: String,
    pub instance_id: String,
    pub stacktrace: String,
    pub logging: String,
    /// Report time; compared lexically, so use a sortable format.
    pub time: String,
}

#[derive(Default)]
struct InstanceState {
    metrics: BTreeMap<String, BoxedMetric>,
    exceptions: VecDeque<TmasterExceptionLog>,
}

#[derive(Default)]
struct ComponentState {
    instances: BTreeMap<String, InstanceState>,
}

impl ComponentState {
    fn selected<'a>(
        &'a self,
        filter: &'a [String],
    ) -> impl Iterator<Item = (&'a String, &'a InstanceState)> + 'a {
        self.instances
            .iter()
            .filter(move |(id, _)| filter.is_empty() || filter.contains(*id))
    }
}

pub struct InMemoryCollector {
    max_exceptions_per_instance: usize,
    components: DashMap<String, ComponentState>,
}

impl InMemoryCollector {
    pub fn new(max_exceptions_per_instance: usize) -> Self {
        Self {
            max_exceptions_per_instance: max_exceptions_per_instance.max(1),
            components: DashMap::new(),
        }
    }

    /// Register (or replace) a named metric for one instance.
    pub fn register_metric<M>(&self, component: &str, instance: &str, name: &str, metric: M)
    where
        M: Metric + Send + Sync + 'static,
    {
        let mut comp = self.components.entry(component.to_string()).or_default();
        comp.instances
            .entry(instance.to_string())
            .or_default()
            .metrics
            .insert(name.to_string(), Box::new(metric));
    }

    /// Register a time-spent metric and hand back the shared handle workers
    /// bracket their work with.
    pub fn time_spent(
        &self,
        component: &str,
        instance: &str,
        name: &str,
    ) -> Arc<SharedTimeSpentMetric> {
        let handle = Arc::new(SharedTimeSpentMetric::new());
        self.register_metric(component, instance, name, Arc::clone(&handle));
        handle
    }

    /// Record an exception, merging repeats of the same stacktrace.
    pub fn record_exception(&self, e: ExceptionEntry) {
        let mut comp = self.components.entry(e.component_name.clone()).or_default();
        let inst = comp.instances.entry(e.instance_id.clone()).or_default();

        if let Some(log) = inst.exceptions.iter_mut().find(|l| l.stacktrace == e.stacktrace) {
            log.count = log.count.saturating_add(1);
            log.lasttime = e.time;
            log.logging = e.logging;
            return;
        }

        inst.exceptions.push_back(TmasterExceptionLog {
            hostname: e.hostname,
            component_name: e.component_name,
            instance_id: e.instance_id,
            stacktrace: e.stacktrace,
            lasttime: e.time.clone(),
            firsttime: e.time,
            count: 1,
            logging: e.logging,
        });
        if inst.exceptions.len() > self.max_exceptions_per_instance {
            if let Some(evicted) = inst.exceptions.pop_front() {
                tracing::debug!(
                    instance = %evicted.instance_id,
                    firsttime = %evicted.firsttime,
                    "exception log full; evicted oldest entry"
                );
            }
        }
    }

    fn collect_exceptions(&self, req: &ExceptionLogRequest) -> Vec<TmasterExceptionLog> {
        let Some(comp) = self.components.get(&req.component_name) else {
            return Vec::new();
        };
        let logs = comp
            .selected(&req.instances)
            .flat_map(|(_, inst)| inst.exceptions.iter().cloned())
            .collect();
        logs
    }
}

fn drain(inst: &mut InstanceState, wanted: &[String]) -> MetricPublisherPublishMessage {
    let mut msg = MetricPublisherPublishMessage::default();
    if wanted.is_empty() {
        for (name, metric) in inst.metrics.iter_mut() {
            metric.get_and_reset(name, &mut msg);
        }
    } else {
        for name in wanted {
            if let Some(metric) = inst.metrics.get_mut(name) {
                metric.get_and_reset(name, &mut msg);
            }
        }
    }
    msg
}

impl MetricsCollector for InMemoryCollector {
    fn get_metrics(&self, req: &MetricRequest) -> Result<MetricResponse> {
        let mut res = MetricResponse {
            status: Some(Status::ok()),
            metric: Vec::new(),
            interval: req.interval,
        };

        if req.component_name.is_empty() {
            res.status = Some(Status::not_ok("component_name is required"));
            return Ok(res);
        }
        let Some(mut comp) = self.components.get_mut(&req.component_name) else {
            res.status = Some(Status::not_ok(format!(
                "unknown component: {}",
                req.component_name
            )));
            return Ok(res);
        };

        for (id, inst) in comp.instances.iter_mut() {
            if !req.instance_id.is_empty() && !req.instance_id.contains(id) {
                continue;
            }
            let published = drain(inst, &req.metric);
            res.metric.push(TaskMetric {
                instance_id: id.clone(),
                metric: published
                    .metrics
                    .into_iter()
                    .map(|d| IndividualMetric {
                        name: d.name,
                        value: d.value,
                        interval_values: Vec::new(),
                    })
                    .collect(),
            });
        }
        Ok(res)
    }

    fn get_exceptions(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse> {
        Ok(ExceptionLogResponse {
            status: Some(Status::ok()),
            exceptions: self.collect_exceptions(req),
        })
    }

    fn get_exceptions_summary(&self, req: &ExceptionLogRequest) -> Result<ExceptionLogResponse> {
        let mut merged: Vec<TmasterExceptionLog> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for log in self.collect_exceptions(req) {
            match index.get(&log.stacktrace) {
                Some(&i) => {
                    let m = &mut merged[i];
                    m.count = m.count.saturating_add(log.count);
                    if log.firsttime < m.firsttime {
                        m.firsttime = log.firsttime;
                    }
                    if log.lasttime > m.lasttime {
                        m.lasttime = log.lasttime;
                        m.logging = log.logging;
                    }
                }
                None => {
                    index.insert(log.stacktrace.clone(), merged.len());
                    merged.push(TmasterExceptionLog {
                        hostname: String::new(),
                        instance_id: String::new(),
                        ..log
                    });
                }
            }
        }

        Ok(ExceptionLogResponse {
            status: Some(Status::ok()),
            exceptions: merged,
        })
    }
}
