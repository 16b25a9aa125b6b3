use std::net::SocketAddr;

use serde::Deserialize;
use tmstats_core::error::{Result, StatsError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    pub version: u32,

    #[serde(default)]
    pub stats: StatsSection,

    #[serde(default)]
    pub collector: CollectorSection,
}

impl StatsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion);
        }

        self.stats.validate()?;
        self.collector.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl StatsSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StatsError::BadRequest(format!(
                "stats.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorSection {
    #[serde(default = "default_max_exceptions_per_instance")]
    pub max_exceptions_per_instance: usize,
}

impl Default for CollectorSection {
    fn default() -> Self {
        Self {
            max_exceptions_per_instance: default_max_exceptions_per_instance(),
        }
    }
}

impl CollectorSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10_000).contains(&self.max_exceptions_per_instance) {
            return Err(StatsError::BadRequest(
                "collector.max_exceptions_per_instance must be between 1 and 10000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8888".into()
}
fn default_max_exceptions_per_instance() -> usize {
    100
}
