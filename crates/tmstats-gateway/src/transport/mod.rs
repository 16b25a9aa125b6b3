//! Transport layer (HTTP).
//!
//! Exposes the axum handlers that feed request bodies to the dispatcher and
//! turn its results into octet-stream replies.

pub mod http;
