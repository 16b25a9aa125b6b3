//! tmstats core: wire schema, metric primitives, and error types.
//!
//! This crate defines the query messages exchanged with the topology master's
//! stats endpoint, the reportable metric types (time-spent and count), and the
//! error surface shared by the gateway. It carries no transport or runtime
//! dependencies so it can be embedded next to any worker.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed payloads surface as `StatsError::BadRequest` instead of crashing
//! the process that hosts the endpoint.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod proto;

/// Shared result type.
pub use error::{Result, StatsError};
