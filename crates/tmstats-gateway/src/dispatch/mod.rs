//! Dispatcher module exports.
//!
//! Re-exports the dispatcher, the route trait, and the built-in query routes so
//! downstream consumers can depend on this module directly.

pub mod dispatcher;
pub mod routes;

pub use dispatcher::{Dispatcher, QueryRoute};
pub use routes::{ExceptionSummaryRoute, ExceptionsRoute, StatsRoute};
