//! Top-level facade crate for tmstats.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use tmstats_core::*;
}

pub mod gateway {
    pub use tmstats_gateway::*;
}
