//! Chat use-case: classify input, extend the transcript and
//! narrate the reply.

use chrono::Weekday;
use tracing::{debug, warn};

use rehnuma_domain::error::{RehnumaError, ValidationError};
use rehnuma_domain::responder::{self, Reply};
use rehnuma_domain::session::Session;

use crate::ports::Narrator;

pub struct Assistant<N> {
    narrator: N,
}

impl<N: Narrator> Assistant<N> {
    pub fn new(narrator: N) -> Self {
        Self { narrator }
    }

    /// Answer `input` within `session`.
    ///
    /// The exchange is appended to the session transcript. Unless the session
    /// is muted, any narration still playing is cancelled before the reply is
    /// spoken. Narration failures are logged and do not fail the reply.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMessage`] when `input` is blank.
    pub async fn handle(
        &self,
        session: &mut Session,
        input: &str,
        weekday: Weekday,
    ) -> Result<Reply, RehnumaError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let reply = responder::respond(input, weekday);
        debug!(topic = ?reply.topic, "classified chat input");
        let spoken = session.record_exchange(input, &reply).content.clone();

        if !session.muted
            && let Err(err) = self.narrate(&spoken, session).await
        {
            warn!(error = %err, "narration failed");
        }
        Ok(reply)
    }

    /// Listen for one spoken question and answer it.
    ///
    /// Resolves to `Ok(None)` when nothing was recognised.
    ///
    /// # Errors
    ///
    /// Returns an error from the narrator's recogniser, or from [`Self::handle`].
    pub async fn listen(
        &self,
        session: &mut Session,
        weekday: Weekday,
    ) -> Result<Option<Reply>, RehnumaError> {
        match self.narrator.recognize(session.language).await? {
            Some(heard) if !heard.trim().is_empty() => {
                self.handle(session, &heard, weekday).await.map(Some)
            }
            _ => Ok(None),
        }
    }

    async fn narrate(&self, text: &str, session: &Session) -> Result<(), RehnumaError> {
        self.narrator.cancel().await?;
        self.narrator
            .speak(text, session.language, session.voice_rate)
            .await
    }
}
