use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Server responded {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Malformed word row: {0}")]
    MalformedRow(String),

    #[error("No rows with both a word and a meaning")]
    EmptyWordList,

    #[error("FlashdeckError: {0}")]
    Custom(String),
}

impl FlashdeckError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FlashdeckError::Api { status: 404, .. })
    }

    /// Text for transient notifications: the backend's detail message when it
    /// sent one, else something generic a user can act on.
    pub fn user_message(&self) -> String {
        match self {
            FlashdeckError::Api { detail, .. } if !detail.is_empty() => detail.clone(),
            FlashdeckError::Api { status, .. } => format!("Server error (status {})", status),
            FlashdeckError::Reqwest(_) => "Network error or server unreachable".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for FlashdeckError {
    fn from(error: std::io::Error) -> Self {
        FlashdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlashdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlashdeckError::Reqwest(Box::new(error))
    }
}
