//! Wire schema for the stats endpoint (protobuf via `prost`).
//!
//! - `system`: metric datums published by every reportable metric.
//! - `tmaster`: query/response messages for `/stats`, `/exceptions` and
//!   `/exceptionsummary`.
//!
//! Payloads are opaque bytes at the transport boundary. Decoding never panics:
//! truncated or malformed input is reported as `StatsError::BadRequest`.

pub mod system;
pub mod tmaster;

use bytes::{Bytes, BytesMut};
use prost::Message;

use crate::error::{Result, StatsError};

pub use system::{MetricDatum, MetricPublisherPublishMessage};
pub use tmaster::{
    ExceptionLogRequest, ExceptionLogResponse, IndividualMetric, IntervalValue, MetricInterval,
    MetricRequest, MetricResponse, Status, StatusCode, TaskMetric, TmasterExceptionLog,
};

/// Decode a complete request payload into `M`.
pub fn decode_message<M: Message + Default>(payload: Bytes) -> Result<M> {
    Ok(M::decode(payload)?)
}

/// A query body. `component_name` is a required field on the wire, so a
/// body without one is as undecodable as a truncated one.
pub trait QueryRequest: Message + Default {
    fn component_name(&self) -> &str;

    fn validate(&self) -> Result<()> {
        if self.component_name().is_empty() {
            return Err(StatsError::BadRequest(
                "missing required field: component_name".into(),
            ));
        }
        Ok(())
    }
}

impl QueryRequest for MetricRequest {
    fn component_name(&self) -> &str {
        &self.component_name
    }
}

impl QueryRequest for ExceptionLogRequest {
    fn component_name(&self) -> &str {
        &self.component_name
    }
}

/// Decode and validate a query body.
pub fn decode_request<R: QueryRequest>(payload: Bytes) -> Result<R> {
    let req: R = decode_message(payload)?;
    req.validate()?;
    Ok(req)
}

/// Encode `msg` into a frozen buffer sized to its exact encoded length.
pub fn encode_message<M: Message>(msg: &M) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(msg.encoded_len());
    msg.encode(&mut buf)?;
    Ok(buf.freeze())
}
