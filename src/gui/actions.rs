use crate::{
    core::{
        models::EntryField,
        preview::PreviewSource,
    },
    gui::app::Screen,
};

// A simple ui action queue so widgets never need mutable access to the
// whole app while a panel closure is borrowing it.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Navigation
    Goto(Screen),
    OpenPreview(PreviewSource),

    // Create screen
    PickUploadFile,
    SaveTemplate,
    UploadSelected,
    GenerateWords,

    // Files screen
    RefreshFiles,
    OpenFile(String),
    ConfirmDeleteFile(String),
    DeleteFile(String),

    // Preview grid
    AddRow,
    EditEntry { id: i64, field: EntryField, value: String },
    DeleteEntry(i64),
    SaveDeck,
    GenerateAudio,
    GenerateFlashcards,
    PlayRowAudio(usize),

    // Video screen
    GenerateVideo,
    SaveVideoAs,
    OpenVideo,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
