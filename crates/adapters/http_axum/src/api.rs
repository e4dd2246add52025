//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod chat;
pub mod districts;
pub mod emergency;
#[allow(clippy::missing_errors_doc)]
pub mod services;
pub mod symptoms;

use axum::Router;
use axum::routing::{get, post};

use rehnuma_app::ports::{Narrator, ServiceRepository, StepRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR, TR, N>() -> Router<AppState<SR, TR, N>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    Router::new()
        // Content
        .route("/services", get(services::list::<SR, TR, N>))
        .route("/services/{id}", get(services::get::<SR, TR, N>))
        // Lookup tables
        .route("/districts", get(districts::list))
        .route("/districts/areas", get(districts::areas))
        .route("/districts/lookup", get(districts::lookup))
        .route("/symptoms", get(symptoms::list))
        .route("/symptoms/lookup", get(symptoms::lookup))
        .route("/emergency-contacts", get(emergency::list))
        // Assistant
        .route("/chat", post(chat::send::<SR, TR, N>))
}
