//! Chat endpoint backed by the rule-based assistant.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use rehnuma_app::ports::{Narrator, ServiceRepository, StepRepository};
use rehnuma_domain::language::Language;
use rehnuma_domain::responder::{ActionLink, Topic};
use rehnuma_domain::session::Session;
use rehnuma_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub lang: Language,
}

/// Reply in the requested language plus both renderings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub reply_en: String,
    pub reply_ur: String,
    pub topic: Option<Topic>,
    pub actions: Vec<ActionLink>,
}

/// Possible responses from the chat endpoint.
pub enum SendResponse {
    Ok(Json<ChatReply>),
}

impl IntoResponse for SendResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/chat`
///
/// Each request gets its own muted session; speech is left to the client.
pub async fn send<SR, TR, N>(
    State(state): State<AppState<SR, TR, N>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<SendResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    TR: StepRepository + Send + Sync + 'static,
    N: Narrator + Send + Sync + 'static,
{
    let Json(req) = body?;
    let mut session = Session::new(req.lang);
    session.muted = true;

    let weekday = time::karachi_weekday(time::now());
    let reply = state
        .assistant
        .handle(&mut session, &req.message, weekday)
        .await?;

    Ok(SendResponse::Ok(Json(ChatReply {
        reply: reply.text.get(req.lang).to_string(),
        reply_en: reply.text.en,
        reply_ur: reply.text.ur,
        topic: reply.topic,
        actions: reply.actions,
    })))
}
