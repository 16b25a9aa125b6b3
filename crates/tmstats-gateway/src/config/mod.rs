//! Stats endpoint config loader (strict parsing).

pub mod schema;

use std::fs;

use tmstats_core::error::{Result, StatsError};

pub use schema::{CollectorSection, StatsConfig, StatsSection};

pub fn load_from_file(path: &str) -> Result<StatsConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StatsError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<StatsConfig> {
    let cfg: StatsConfig = serde_yaml::from_str(s)
        .map_err(|e| StatsError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
