//! Shared application state for axum handlers.

use std::sync::Arc;

use rehnuma_app::ports::{Narrator, ServiceRepository, StepRepository};
use rehnuma_app::services::assistant::Assistant;
use rehnuma_app::services::content_service::ContentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types and the narrator to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR, TR, N> {
    /// Read access to services and their steps.
    pub content_service: Arc<ContentService<SR, TR>>,
    /// Chat use-case.
    pub assistant: Arc<Assistant<N>>,
}

impl<SR, TR, N> Clone for AppState<SR, TR, N> {
    fn clone(&self) -> Self {
        Self {
            content_service: Arc::clone(&self.content_service),
            assistant: Arc::clone(&self.assistant),
        }
    }
}

impl<SR, TR, N> AppState<SR, TR, N>
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(content_service: ContentService<SR, TR>, assistant: Assistant<N>) -> Self {
        Self::from_arcs(Arc::new(content_service), Arc::new(assistant))
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the content service is shared with the seeder before
    /// the HTTP state is built.
    pub fn from_arcs(
        content_service: Arc<ContentService<SR, TR>>,
        assistant: Arc<Assistant<N>>,
    ) -> Self {
        Self {
            content_service,
            assistant,
        }
    }
}
