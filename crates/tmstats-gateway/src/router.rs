//! Axum router wiring.
//!
//! One route per registered query path (any method, as the coordinator's
//! clients POST but older tooling GETs with a body), plus a fallback that
//! rejects everything else with 400. The body limit is lifted so oversized
//! queries still land on the 200/400 contract instead of 413.

use axum::{extract::DefaultBodyLimit, routing::any, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for path in state.dispatcher().registered_paths() {
        router = router.route(path, any(transport::http::handle_query));
    }
    router
        .fallback(transport::http::handle_unknown)
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
