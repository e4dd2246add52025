//! Narrator for hosts without speech hardware.

use std::future::Future;

use tracing::debug;

use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::language::Language;

use crate::ports::Narrator;

/// Drops every utterance and never hears anything.
///
/// Used server-side, where speech belongs to the client.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn cancel(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        async { Ok(()) }
    }

    fn speak(
        &self,
        text: &str,
        language: Language,
        rate: f32,
    ) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        debug!(
            locale = language.speech_locale(),
            rate,
            chars = text.chars().count(),
            "utterance dropped"
        );
        async { Ok(()) }
    }

    fn recognize(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Option<String>, RehnumaError>> + Send {
        debug!(locale = language.speech_locale(), "no speech input available");
        async { Ok(None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_accept_speech_and_hear_nothing() {
        let narrator = SilentNarrator;
        narrator.cancel().await.unwrap();
        narrator.speak("سلام", Language::Ur, 0.85).await.unwrap();
        assert_eq!(narrator.recognize(Language::Ur).await.unwrap(), None);
    }
}
