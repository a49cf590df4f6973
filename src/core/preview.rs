use crate::{
    backend::types::WordPair,
    core::{
        models::{
            fresh_entry_id,
            AiSettings,
            EntryField,
            VocabularyEntry,
        },
        FlashdeckError,
    },
};

/// Where the preview's rows came from. Exactly one origin per visit, by
/// construction.
#[derive(Debug, Clone)]
pub enum PreviewSource {
    /// Only a filename is known; the rows still have to be fetched.
    Upload { filename: String },
    /// The files screen already fetched the rows.
    File { filename: String, rows: Vec<WordPair> },
    /// Rows came back from the AI generator and live nowhere else yet.
    Ai { settings: AiSettings, rows: Vec<WordPair> },
}

/// The in-memory vocabulary list behind the preview grid. Holds no I/O;
/// screens call the task manager with what these methods return.
#[derive(Debug, Default)]
pub struct PreviewState {
    pub filename: Option<String>,
    pub entries: Vec<VocabularyEntry>,
}

impl PreviewState {
    pub fn from_rows(filename: Option<String>, rows: &[WordPair]) -> Self {
        Self { filename, entries: entries_from_rows(rows) }
    }

    pub fn set_rows(&mut self, rows: &[WordPair]) {
        self.entries = entries_from_rows(rows);
    }

    pub fn add_row(&mut self) -> i64 {
        let id = fresh_entry_id();
        self.entries.push(VocabularyEntry::empty(id));
        id
    }

    pub fn edit(&mut self, id: i64, field: EntryField, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            match field {
                EntryField::Word => entry.word = value,
                EntryField::Meaning => entry.meaning = value,
                EntryField::Pronunciation => entry.pronunciation = value,
            }
        }
    }

    pub fn delete(&mut self, id: i64) {
        self.entries.retain(|e| e.id != id);
    }

    /// Whole-list replace payload for `updateDoc`: trimmed rows that have
    /// both a word and a meaning. Errors instead of sending nothing.
    pub fn save_updates(&self) -> Result<Vec<WordPair>, FlashdeckError> {
        let updates: Vec<WordPair> = self
            .entries
            .iter()
            .filter(|e| e.has_content())
            .map(|e| WordPair {
                word: e.word.trim().to_string(),
                meaning: e.meaning.trim().to_string(),
            })
            .collect();

        if updates.is_empty() {
            return Err(FlashdeckError::EmptyWordList);
        }

        Ok(updates)
    }
}

fn entries_from_rows(rows: &[WordPair]) -> Vec<VocabularyEntry> {
    let base = fresh_entry_id();
    rows.iter()
        .enumerate()
        .map(|(index, row)| VocabularyEntry {
            id: base + index as i64,
            word: row.word.trim().to_string(),
            meaning: row.meaning.trim().to_string(),
            pronunciation: String::new(),
            language: String::new(),
        })
        .collect()
}

/// Per-entry request plan for flashcard generation. `None` marks a row that
/// is skipped (and counted as a failure) because a field is missing.
pub fn flashcard_plan(entries: &[VocabularyEntry]) -> Vec<Option<(String, String)>> {
    entries
        .iter()
        .map(|e| {
            e.has_content()
                .then(|| (e.word.trim().to_string(), e.meaning.trim().to_string()))
        })
        .collect()
}

/// Aggregated outcome of the sequential flashcard batch, surfaced once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }

    pub fn describe(&self) -> String {
        format!("Generated {} of {} flashcards", self.succeeded, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, word: &str, meaning: &str) -> VocabularyEntry {
        VocabularyEntry {
            id,
            word: word.to_string(),
            meaning: meaning.to_string(),
            pronunciation: String::new(),
            language: String::new(),
        }
    }

    fn row(word: &str, meaning: &str) -> WordPair {
        WordPair { word: word.to_string(), meaning: meaning.to_string() }
    }

    #[test]
    fn maps_backend_rows_into_entries() {
        let state = PreviewState::from_rows(Some("deck.xlsx".into()), &[row("Apple", "A fruit")]);

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].word, "Apple");
        assert_eq!(state.entries[0].meaning, "A fruit");
        assert!(state.entries[0].pronunciation.is_empty());
    }

    #[test]
    fn add_row_appends_one_empty_entry() {
        let mut state = PreviewState::from_rows(None, &[row("Apple", "A fruit")]);

        let id = state.add_row();

        assert_eq!(state.entries.len(), 2);
        let added = state.entries.last().unwrap();
        assert_eq!(added.id, id);
        assert!(added.word.is_empty());
        assert!(added.meaning.is_empty());
    }

    #[test]
    fn edit_replaces_only_the_named_field() {
        let mut state = PreviewState::default();
        state.entries = vec![entry(1, "Apple", "A fruit"), entry(2, "Dog", "A pet")];

        state.edit(2, EntryField::Meaning, "A domestic animal".into());

        assert_eq!(state.entries[0].meaning, "A fruit");
        assert_eq!(state.entries[1].word, "Dog");
        assert_eq!(state.entries[1].meaning, "A domestic animal");
    }

    #[test]
    fn delete_removes_exactly_the_matching_entry() {
        let mut state = PreviewState::default();
        state.entries = vec![entry(1, "a", "1"), entry(2, "b", "2"), entry(3, "c", "3")];

        state.delete(2);

        let remaining: Vec<i64> = state.entries.iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![1, 3]);
        assert_eq!(state.entries[0].word, "a");
        assert_eq!(state.entries[1].word, "c");
    }

    #[test]
    fn save_keeps_trimmed_complete_rows_and_drops_the_rest() {
        let mut state = PreviewState::default();
        state.entries = vec![
            entry(1, "  Apple ", " A fruit "),
            entry(2, "", "orphan meaning"),
            entry(3, "orphan word", "   "),
        ];

        let updates = state.save_updates().unwrap();

        assert_eq!(updates, vec![row("Apple", "A fruit")]);
    }

    #[test]
    fn save_with_no_complete_rows_is_an_error() {
        let mut state = PreviewState::default();
        state.entries = vec![entry(1, "", ""), entry(2, "word", "")];

        assert!(matches!(state.save_updates(), Err(FlashdeckError::EmptyWordList)));
    }

    #[test]
    fn load_then_save_round_trips_the_word_set() {
        let rows = vec![row("Apple", "A fruit"), row("Dog", "A pet")];
        let state = PreviewState::from_rows(Some("deck.xlsx".into()), &rows);

        assert_eq!(state.save_updates().unwrap(), rows);
    }

    #[test]
    fn flashcard_plan_skips_incomplete_rows() {
        let entries = vec![entry(1, "Cat", "Mèo"), entry(2, "", "x")];

        let plan = flashcard_plan(&entries);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0], Some(("Cat".to_string(), "Mèo".to_string())));
        assert_eq!(plan[1], None);

        // A batch where only the planned request succeeds reports 1 of 2.
        let succeeded = plan.iter().flatten().count();
        let summary = BatchSummary { succeeded, total: plan.len() };
        assert_eq!(summary.describe(), "Generated 1 of 2 flashcards");
        assert!(!summary.all_succeeded());
    }
}
