use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;

use tmstats_core::error::{ClientCode, Result, StatsError};

use crate::collector::MetricsCollector;

use super::routes::{ExceptionSummaryRoute, ExceptionsRoute, StatsRoute};

/// One query path: decode the body, ask the collector, encode the answer.
pub trait QueryRoute: Send + Sync {
    fn path(&self) -> &'static str;
    fn handle(&self, collector: &dyn MetricsCollector, body: Bytes) -> Result<Bytes>;
}

/// Path -> route table bound to one collector.
pub struct Dispatcher {
    collector: Arc<dyn MetricsCollector>,
    routes: DashMap<&'static str, Arc<dyn QueryRoute>>,
}

impl Dispatcher {
    /// Empty table; see [`Dispatcher::with_default_routes`].
    pub fn new(collector: Arc<dyn MetricsCollector>) -> Self {
        Self {
            collector,
            routes: DashMap::new(),
        }
    }

    /// `/stats`, `/exceptions` and `/exceptionsummary`.
    pub fn with_default_routes(collector: Arc<dyn MetricsCollector>) -> Self {
        let d = Self::new(collector);
        d.register(Arc::new(StatsRoute));
        d.register(Arc::new(ExceptionsRoute));
        d.register(Arc::new(ExceptionSummaryRoute));
        d
    }

    pub fn register(&self, route: Arc<dyn QueryRoute>) {
        self.routes.insert(route.path(), route);
    }

    pub fn registered_paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.routes.iter().map(|e| *e.key()).collect();
        paths.sort_unstable();
        paths
    }

    /// Run the route bound to `path`. Every failure is logged before it is
    /// returned; the collector is only reached once the body decoded.
    pub fn dispatch(&self, path: &str, body: Bytes) -> Result<Bytes> {
        let route = self.routes.get(path).map(|e| Arc::clone(e.value()));
        let Some(route) = route else {
            return Err(self.reject_unknown(path));
        };

        tracing::info!(%path, len = body.len(), "stats query received");
        match route.handle(self.collector.as_ref(), body) {
            Ok(out) => {
                tracing::info!(%path, len = out.len(), "stats query done");
                Ok(out)
            }
            Err(e) => {
                match e.client_code() {
                    ClientCode::BadRequest => {
                        tracing::error!(%path, error = %e, "unable to decipher post data")
                    }
                    _ => tracing::error!(%path, error = %e, "stats query failed"),
                }
                Err(e)
            }
        }
    }

    /// Catch-all: nothing is decoded for unmatched paths.
    pub fn reject_unknown(&self, path: &str) -> StatsError {
        tracing::warn!(%path, "unknown stats request");
        StatsError::RouteNotFound(path.to_string())
    }
}
