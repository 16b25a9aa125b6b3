//! Shared application state for the stats endpoint.

use std::sync::Arc;

use crate::collector::MetricsCollector;
use crate::dispatch::Dispatcher;

#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// State with the built-in query routes bound to `collector`.
    pub fn new(collector: Arc<dyn MetricsCollector>) -> Self {
        Self::from_dispatcher(Dispatcher::with_default_routes(collector))
    }

    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
