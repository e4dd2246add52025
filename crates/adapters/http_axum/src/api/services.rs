//! JSON REST handlers for guided services.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use rehnuma_app::ports::{Narrator, ServiceRepository, StepRepository};
use rehnuma_domain::id::ServiceId;
use rehnuma_domain::service::{Category, Service, ServiceWithSteps};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub category: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ServiceWithSteps>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services?type=`
///
/// An empty `type` lists everything; an unknown one matches nothing.
pub async fn list<SR, TR, N>(
    State(state): State<AppState<SR, TR, N>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => match Category::from_str(value) {
            Ok(category) => Some(category),
            Err(_) => {
                tracing::debug!(value, "unknown service type requested");
                return Ok(ListResponse::Ok(Json(Vec::new())));
            }
        },
    };

    let services = state.content_service.list_services(category).await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /api/services/{id}`
pub async fn get<SR, TR, N>(
    State(state): State<AppState<SR, TR, N>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    let service_id = ServiceId::from_str(&id).map_err(|_| ApiError::InvalidId)?;
    let service = state.content_service.get_service(service_id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
