//! Narrator port: speech output and input provided by the host platform.

use std::future::Future;

use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::language::Language;

/// Text-to-speech and speech recognition.
///
/// Implementations are fire-and-forget: `speak` returns once the utterance is
/// queued, not when it finishes.
pub trait Narrator {
    /// Stop any utterance currently playing or queued.
    fn cancel(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send;

    /// Queue `text` for narration in `language` at `rate` (1.0 is normal speed).
    fn speak(
        &self,
        text: &str,
        language: Language,
        rate: f32,
    ) -> impl Future<Output = Result<(), RehnumaError>> + Send;

    /// Listen for one utterance. `Ok(None)` when nothing was recognised.
    fn recognize(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Option<String>, RehnumaError>> + Send;
}

impl<T: Narrator + Send + Sync> Narrator for std::sync::Arc<T> {
    fn cancel(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        (**self).cancel()
    }

    fn speak(
        &self,
        text: &str,
        language: Language,
        rate: f32,
    ) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        (**self).speak(text, language, rate)
    }

    fn recognize(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Option<String>, RehnumaError>> + Send {
        (**self).recognize(language)
    }
}
