use serde::{
    Deserialize,
    Serialize,
};

use crate::core::FlashdeckError;

/// One Word/Meaning row as the backend serializes it.
///
/// `viewDoc` historically emitted some rows as a stringified tuple,
/// `"('Word', 'Meaning')"`, instead of the documented object form. Both
/// decode to the same `WordPair` here; the tuple text never leaves this
/// module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRow", rename_all = "PascalCase")]
pub struct WordPair {
    pub word: String,
    pub meaning: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Object {
        #[serde(rename = "Word", alias = "word")]
        word: String,
        #[serde(rename = "Meaning", alias = "meaning")]
        meaning: String,
    },
    Tuple(String),
}

impl TryFrom<RawRow> for WordPair {
    type Error = FlashdeckError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        match raw {
            RawRow::Object { word, meaning } => Ok(WordPair { word, meaning }),
            RawRow::Tuple(text) => parse_tuple_row(&text),
        }
    }
}

fn parse_tuple_row(text: &str) -> Result<WordPair, FlashdeckError> {
    let malformed = || FlashdeckError::MalformedRow(text.to_string());

    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = Vec::with_capacity(2);
    let mut rest = inner.trim();
    for _ in 0..2 {
        let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"').ok_or_else(malformed)?;
        rest = &rest[quote.len_utf8()..];
        let end = rest.find(quote).ok_or_else(malformed)?;
        fields.push(rest[..end].to_string());
        rest = rest[end + quote.len_utf8()..].trim_start();
        rest = rest.strip_prefix(',').map(str::trim_start).unwrap_or(rest);
    }

    if !rest.is_empty() {
        return Err(malformed());
    }

    let meaning = fields.pop().unwrap_or_default();
    let word = fields.pop().unwrap_or_default();
    Ok(WordPair { word, meaning })
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub filename: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateRequest {
    pub updates: Vec<WordPair>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiPromptRequest {
    pub user_prompt: String,
    pub word_lang: String,
    pub meaning_lang: String,
    pub level: String,
    pub words_num: u32,
}

/// The AI endpoint has answered both as a bare row list and as
/// `{message, words}`; accept either and hand rows upward.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AiPromptResponse {
    Wrapped {
        #[serde(default)]
        message: Option<String>,
        words: WordSet,
    },
    Bare(WordSet),
}

impl AiPromptResponse {
    pub fn into_rows(self) -> Vec<WordPair> {
        match self {
            AiPromptResponse::Wrapped { words, .. } => words.into_rows(),
            AiPromptResponse::Bare(words) => words.into_rows(),
        }
    }
}

/// `words` arrives either as a row list or as a word→meaning object.
/// `serde_json`'s preserve_order keeps the object form in server order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WordSet {
    Rows(Vec<WordPair>),
    Pairs(serde_json::Map<String, serde_json::Value>),
}

impl WordSet {
    pub fn into_rows(self) -> Vec<WordPair> {
        match self {
            WordSet::Rows(rows) => rows,
            WordSet::Pairs(pairs) => pairs
                .into_iter()
                .map(|(word, meaning)| WordPair {
                    word,
                    meaning: match meaning {
                        serde_json::Value::String(text) => text,
                        other => other.to_string(),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AudioResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub audio_paths: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub video_path: String,
}

/// FastAPI error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_object_rows() {
        let rows: Vec<WordPair> =
            serde_json::from_str(r#"[{"Word": "Apple", "Meaning": "A fruit"}]"#).unwrap();
        assert_eq!(rows, vec![WordPair { word: "Apple".into(), meaning: "A fruit".into() }]);
    }

    #[test]
    fn decodes_tuple_rows() {
        let rows: Vec<WordPair> =
            serde_json::from_str(r#"["('Apple', 'A fruit')", "(\"Dog\", \"A pet\")"]"#).unwrap();
        assert_eq!(
            rows,
            vec![
                WordPair { word: "Apple".into(), meaning: "A fruit".into() },
                WordPair { word: "Dog".into(), meaning: "A pet".into() },
            ]
        );
    }

    #[test]
    fn rejects_malformed_tuple_rows() {
        assert!(serde_json::from_str::<Vec<WordPair>>(r#"["Apple - A fruit"]"#).is_err());
        assert!(serde_json::from_str::<Vec<WordPair>>(r#"["('Apple')"]"#).is_err());
    }

    #[test]
    fn serializes_rows_in_wire_casing() {
        let payload = UpdateRequest {
            updates: vec![WordPair { word: "Apple".into(), meaning: "A fruit".into() }],
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"updates":[{"Word":"Apple","Meaning":"A fruit"}]}"#
        );
    }

    #[test]
    fn ai_response_accepts_wrapped_word_object() {
        let parsed: AiPromptResponse = serde_json::from_str(
            r#"{"message": "ok", "words": {"Banana": "A fruit", "Ant": "An insect"}}"#,
        )
        .unwrap();
        let rows = parsed.into_rows();
        // Object order is the server's order, not alphabetical.
        assert_eq!(
            rows,
            vec![
                WordPair { word: "Banana".into(), meaning: "A fruit".into() },
                WordPair { word: "Ant".into(), meaning: "An insect".into() },
            ]
        );
    }

    #[test]
    fn ai_response_accepts_bare_row_list() {
        let parsed: AiPromptResponse =
            serde_json::from_str(r#"[{"Word": "Cat", "Meaning": "Mèo"}]"#).unwrap();
        assert_eq!(
            parsed.into_rows(),
            vec![WordPair { word: "Cat".into(), meaning: "Mèo".into() }]
        );
    }
}
