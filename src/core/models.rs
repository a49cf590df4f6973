use chrono::Utc;
use serde::{
    Deserialize,
    Serialize,
};

/// One editable row of the preview grid. Ids are generated locally from the
/// clock and are not stable across restarts; the server file is the system
/// of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub id: i64,
    pub word: String,
    pub meaning: String,
    pub pronunciation: String,
    pub language: String,
}

impl VocabularyEntry {
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            word: String::new(),
            meaning: String::new(),
            pronunciation: String::new(),
            language: String::new(),
        }
    }

    /// A row takes part in save and flashcard generation only when both the
    /// word and the meaning are non-empty after trimming.
    pub fn has_content(&self) -> bool {
        !self.word.trim().is_empty() && !self.meaning.trim().is_empty()
    }
}

pub fn fresh_entry_id() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Word,
    Meaning,
    Pronunciation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Vietnamese,
    Chinese,
    German,
    French,
    Spanish,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Vietnamese,
        Language::Chinese,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Japanese,
    ];

    // The backend's TTS service only ships voices for these.
    pub const VOICE_SUPPORTED: [Language; 4] =
        [Language::Vietnamese, Language::Chinese, Language::English, Language::German];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Vietnamese => "Vietnamese",
            Language::Chinese => "Chinese",
            Language::German => "German",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
        }
    }

    pub fn has_voice(&self) -> bool {
        Self::VOICE_SUPPORTED.contains(self)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

pub const WORD_COUNT_CHOICES: [u32; 5] = [10, 15, 20, 25, 30];

/// The form the user filled in on the AI tab, carried along with the
/// generated rows so the preview screen can show where they came from.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub prompt: String,
    pub word_lang: Language,
    pub meaning_lang: Language,
    pub level: Level,
    pub words_num: u32,
}
