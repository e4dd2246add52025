//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use rehnuma_app::ports::{Narrator, ServiceRepository, StepRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, TR, N>(state: AppState<SR, TR, N>) -> Router
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
