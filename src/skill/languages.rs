// Language resolver - maps spoken language names to target codes

use super::error::{Result, SkillError};
use std::fmt;

/// Target languages the skill can translate into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    German,
    Italian,
    Spanish,
    Portuguese,
    Hindi,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
        Language::Hindi,
        Language::Japanese,
    ];

    /// Resolve a free-text language name, ignoring case and surrounding whitespace
    pub fn resolve(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase();

        match normalized.as_str() {
            "english" => Ok(Language::English),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            "italian" => Ok(Language::Italian),
            "spanish" => Ok(Language::Spanish),
            "portuguese" => Ok(Language::Portuguese),
            "hindi" => Ok(Language::Hindi),
            "japanese" => Ok(Language::Japanese),
            _ => Err(SkillError::UnsupportedLanguage(normalized)),
        }
    }

    /// Two-letter code understood by the translation service
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Hindi => "hi",
            Language::Japanese => "ja",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
            Language::Hindi => "hindi",
            Language::Japanese => "japanese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
