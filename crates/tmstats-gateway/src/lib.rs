//! tmstats gateway library entry.
//!
//! This crate wires the config, collector, dispatcher, and HTTP transport into
//! the topology master's stats endpoint. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collector;
pub mod config;
pub mod dispatch;
pub mod router;
pub mod server;
pub mod transport;
