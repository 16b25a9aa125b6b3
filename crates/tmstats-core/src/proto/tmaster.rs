//! Topology master query messages.
//!
//! Field numbers follow the coordinator's schema so existing tooling can talk
//! to this endpoint unchanged.

/// Outcome flag carried by every response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 1,
    Notok = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(enumeration = "StatusCode", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            status: StatusCode::Ok as i32,
            message: String::new(),
        }
    }

    pub fn not_ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Notok as i32,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::Ok as i32
    }
}

/// Closed time window in seconds since the epoch.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricInterval {
    #[prost(int64, tag = "1")]
    pub start: i64,
    #[prost(int64, tag = "2")]
    pub end: i64,
}

/// `/stats` query. Empty `instance_id` / `metric` lists select everything.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricRequest {
    #[prost(string, tag = "1")]
    pub component_name: String,
    #[prost(string, repeated, tag = "2")]
    pub instance_id: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub metric: Vec<String>,
    #[prost(int64, tag = "4")]
    pub interval: i64,
    #[prost(message, optional, tag = "5")]
    pub explicit_interval: Option<MetricInterval>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntervalValue {
    #[prost(string, tag = "1")]
    pub value: String,
    #[prost(message, optional, tag = "2")]
    pub interval: Option<MetricInterval>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndividualMetric {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(message, repeated, tag = "3")]
    pub interval_values: Vec<IntervalValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TaskMetric {
    #[prost(string, tag = "1")]
    pub instance_id: String,
    #[prost(message, repeated, tag = "2")]
    pub metric: Vec<IndividualMetric>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub metric: Vec<TaskMetric>,
    #[prost(int64, tag = "3")]
    pub interval: i64,
}

/// `/exceptions` and `/exceptionsummary` query. Empty `instances` selects all.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExceptionLogRequest {
    #[prost(string, tag = "1")]
    pub component_name: String,
    #[prost(string, repeated, tag = "2")]
    pub instances: Vec<String>,
}

/// One de-duplicated exception record (same stacktrace, same instance).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TmasterExceptionLog {
    #[prost(string, tag = "1")]
    pub hostname: String,
    #[prost(string, tag = "2")]
    pub component_name: String,
    #[prost(string, tag = "3")]
    pub instance_id: String,
    #[prost(string, tag = "4")]
    pub stacktrace: String,
    #[prost(string, tag = "5")]
    pub lasttime: String,
    #[prost(string, tag = "6")]
    pub firsttime: String,
    #[prost(int32, tag = "7")]
    pub count: i32,
    #[prost(string, tag = "8")]
    pub logging: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExceptionLogResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub exceptions: Vec<TmasterExceptionLog>,
}
