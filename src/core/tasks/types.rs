use std::path::PathBuf;

use crate::{
    backend::types::WordPair,
    core::preview::BatchSummary,
};

/// Why a document was fetched, so the result can be routed back to the
/// screen that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPurpose {
    /// The files screen is opening a file into the preview.
    OpenPreview,
    /// The preview screen is resolving an upload-sourced filename.
    ResolveUpload,
}

/// A failed document load, kept structured so a missing file can be told
/// apart from everything else.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub not_found: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    BackendStatus(bool),

    FilesListed(Result<Vec<String>, String>),
    DocUploaded(Result<String, String>),
    DocLoaded {
        filename: String,
        purpose: LoadPurpose,
        result: Result<Vec<WordPair>, LoadError>,
    },
    DocSaved {
        filename: String,
        result: Result<(), String>,
    },
    DocDeleted {
        filename: String,
        result: Result<(), String>,
    },

    WordsGenerated(Result<Vec<WordPair>, String>),
    AudioGenerated(Result<Vec<String>, String>),
    FlashcardsGenerated(BatchSummary),
    VideoGenerated(Result<PathBuf, String>),
}
