//! Per-user session context: display preferences and the assistant transcript.
//!
//! A [`Session`] is owned by whoever renders for one user (a request handler,
//! a UI shell) and passed explicitly; there is no process-wide preference.

use serde::Serialize;

use crate::language::{Bilingual, Language};
use crate::responder::{ActionLink, Reply};

/// Default speech rate; slightly slower than normal for clarity.
pub const DEFAULT_VOICE_RATE: f32 = 0.85;

/// Who wrote a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One line of the assistant transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionLink>,
}

/// Opening message of every conversation.
#[must_use]
pub fn greeting() -> Bilingual {
    Bilingual::new(
        "Hello! I am your E-Sarkari Assistant. I can provide deep details on NADRA, Passports, and Hospital SOPs. How can I guide you?",
        "سلام! میں آپ کا ای-سرکاری مددگار ہوں۔ میں نادرا، پاسپورٹ اور ہسپتال کے طریقہ کار پر تفصیلی معلومات دے سکتا ہوں۔ میں آپ کی کیا مدد کروں؟",
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub language: Language,
    /// Larger text and controls for elderly users.
    pub elderly_mode: bool,
    /// Suppresses narration of replies.
    pub muted: bool,
    pub voice_rate: f32,
    transcript: Vec<Message>,
}

impl Session {
    /// Start a session whose transcript opens with the greeting in `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            elderly_mode: false,
            muted: false,
            voice_rate: DEFAULT_VOICE_RATE,
            transcript: vec![Message {
                role: Role::Bot,
                content: greeting().get(language).to_string(),
                actions: Vec::new(),
            }],
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Append the user's input and the bot's reply, rendered in the session
    /// language. Returns the bot message.
    pub fn record_exchange(&mut self, input: &str, reply: &Reply) -> &Message {
        self.transcript.push(Message {
            role: Role::User,
            content: input.to_string(),
            actions: Vec::new(),
        });
        self.transcript.push(Message {
            role: Role::Bot,
            content: reply.text.get(self.language).to_string(),
            actions: reply.actions.clone(),
        });
        &self.transcript[self.transcript.len() - 1]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
