//! Built-in query routes.

use bytes::Bytes;
use prost::Message;

use tmstats_core::error::Result;
use tmstats_core::proto::{
    decode_request, encode_message, ExceptionLogRequest, MetricRequest, QueryRequest,
};

use crate::collector::MetricsCollector;

use super::dispatcher::QueryRoute;

pub const STATS_PATH: &str = "/stats";
pub const EXCEPTIONS_PATH: &str = "/exceptions";
pub const EXCEPTION_SUMMARY_PATH: &str = "/exceptionsummary";

/// Decode (and validate) -> query -> encode. Request and response are owned
/// locals, dropped on every exit path.
fn serve<Req, Res>(body: Bytes, query: impl FnOnce(&Req) -> Result<Res>) -> Result<Bytes>
where
    Req: QueryRequest,
    Res: Message,
{
    let req: Req = decode_request(body)?;
    let res = query(&req)?;
    encode_message(&res)
}

/// `/stats`: current metric values.
pub struct StatsRoute;

impl QueryRoute for StatsRoute {
    fn path(&self) -> &'static str {
        STATS_PATH
    }

    fn handle(&self, collector: &dyn MetricsCollector, body: Bytes) -> Result<Bytes> {
        serve(body, |req: &MetricRequest| collector.get_metrics(req))
    }
}

/// `/exceptions`: raw exception records.
pub struct ExceptionsRoute;

impl QueryRoute for ExceptionsRoute {
    fn path(&self) -> &'static str {
        EXCEPTIONS_PATH
    }

    fn handle(&self, collector: &dyn MetricsCollector, body: Bytes) -> Result<Bytes> {
        serve(body, |req: &ExceptionLogRequest| collector.get_exceptions(req))
    }
}

/// `/exceptionsummary`: exception records aggregated by stacktrace.
pub struct ExceptionSummaryRoute;

impl QueryRoute for ExceptionSummaryRoute {
    fn path(&self) -> &'static str {
        EXCEPTION_SUMMARY_PATH
    }

    fn handle(&self, collector: &dyn MetricsCollector, body: Bytes) -> Result<Bytes> {
        serve(body, |req: &ExceptionLogRequest| {
            collector.get_exceptions_summary(req)
        })
    }
}
