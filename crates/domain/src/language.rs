//! Display language and bilingual text.

use serde::{Deserialize, Serialize};

/// Language the user reads the guide in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ur,
}

impl Language {
    /// Pick the variant matching this language.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, ur: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::Ur => ur,
        }
    }

    /// BCP-47 locale used for speech synthesis and recognition.
    #[must_use]
    pub fn speech_locale(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ur => "ur-PK",
        }
    }
}

/// A piece of text carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub ur: String,
}

impl Bilingual {
    #[must_use]
    pub fn new(en: impl Into<String>, ur: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ur: ur.into(),
        }
    }

    /// Text for `lang`.
    #[must_use]
    pub fn get(&self, lang: Language) -> &str {
        lang.pick(&self.en, &self.ur)
    }

    /// `true` when neither language carries any text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ur.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pick_text_for_language() {
        let text = Bilingual::new("Hello", "سلام");
        assert_eq!(text.get(Language::En), "Hello");
        assert_eq!(text.get(Language::Ur), "سلام");
    }

    #[test]
    fn should_be_blank_only_when_both_sides_empty() {
        assert!(Bilingual::new("", " ").is_blank());
        assert!(!Bilingual::new("", "سلام").is_blank());
    }

    #[test]
    fn should_map_language_to_speech_locale() {
        assert_eq!(Language::En.speech_locale(), "en-US");
        assert_eq!(Language::Ur.speech_locale(), "ur-PK");
    }

    #[test]
    fn should_deserialize_lowercase_language_codes() {
        let lang: Language = serde_json::from_str("\"ur\"").unwrap();
        assert_eq!(lang, Language::Ur);
    }
}
