pub mod types;

use std::{
    path::Path,
    time::Duration,
};

use reqwest::{
    multipart,
    Client,
    Response,
};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use crate::core::FlashdeckError;
use types::{
    AiPromptRequest,
    AiPromptResponse,
    AudioResponse,
    ErrorBody,
    FileListResponse,
    StatusResponse,
    UpdateRequest,
    UploadResponse,
    VideoResponse,
    WordPair,
};

/// Thin wrapper over the flashcard backend's HTTP API: request shaping and
/// response decoding only. Callers decide what a failure means for the UI.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, FlashdeckError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| FlashdeckError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Liveness probe for the connection indicator.
    pub async fn ping(&self) -> Result<(), FlashdeckError> {
        let response = self.client.get(self.url("/")).send().await?;
        fail_on_status(response).await?;
        Ok(())
    }

    pub async fn upload_doc(&self, path: &Path) -> Result<UploadResponse, FlashdeckError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("vocabulary.xlsx")
            .to_string();
        let mime = mime_for(&file_name);
        let bytes = tokio::fs::read(path).await?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| FlashdeckError::Custom(format!("Invalid upload mime type: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        let response =
            self.client.post(self.url("/home/uploadDoc")).multipart(form).send().await?;
        decode_json(response).await
    }

    pub async fn list_files(&self) -> Result<Vec<String>, FlashdeckError> {
        let response = self.client.get(self.url("/home/listFiles")).send().await?;
        let list: FileListResponse = decode_json(response).await?;
        Ok(list.files)
    }

    pub async fn view_doc(&self, filename: &str) -> Result<Vec<WordPair>, FlashdeckError> {
        let response = self
            .client
            .get(self.url("/home/viewDoc"))
            .query(&[("filename", filename)])
            .send()
            .await?;
        decode_json(response).await
    }

    /// Full replace of the server file's word/meaning rows.
    pub async fn update_doc(
        &self,
        filename: &str,
        updates: Vec<WordPair>,
    ) -> Result<StatusResponse, FlashdeckError> {
        let response = self
            .client
            .put(self.url("/home/updateDoc"))
            .query(&[("filename", filename)])
            .json(&UpdateRequest { updates })
            .send()
            .await?;
        decode_json(response).await
    }

    pub async fn delete_doc(&self, filename: &str) -> Result<StatusResponse, FlashdeckError> {
        let response = self
            .client
            .delete(self.url("/home/deleteDoc"))
            .query(&[("filename", filename)])
            .send()
            .await?;
        decode_json(response).await
    }

    pub async fn process_ai_prompt(
        &self,
        request: &AiPromptRequest,
    ) -> Result<Vec<WordPair>, FlashdeckError> {
        let response = self
            .client
            .post(self.url("/home/process_ai_prompt"))
            .json(request)
            .send()
            .await?;
        let parsed: AiPromptResponse = decode_json(response).await?;
        Ok(parsed.into_rows())
    }

    pub async fn generate_audio(
        &self,
        filename: &str,
        language: &str,
    ) -> Result<Vec<String>, FlashdeckError> {
        let response = self
            .client
            .post(self.url("/home/generate_audio_for_file"))
            .form(&[("filename", filename), ("language", language)])
            .send()
            .await?;
        let parsed: AudioResponse = decode_json(response).await?;
        Ok(parsed.audio_paths)
    }

    /// One image per call; only success or failure matters to the caller.
    pub async fn generate_flashcard(
        &self,
        word: &str,
        meaning: &str,
    ) -> Result<(), FlashdeckError> {
        let response = self
            .client
            .get(self.url("/home/generate_flashcard"))
            .query(&[("word", word), ("meaning", meaning)])
            .send()
            .await?;
        fail_on_status(response).await?;
        Ok(())
    }

    pub async fn generate_video(&self) -> Result<VideoResponse, FlashdeckError> {
        let response = self
            .client
            .post(self.url("/home/generate_flashcard_video_with_audio"))
            .send()
            .await?;
        decode_json(response).await
    }

    /// Streams the rendered video to `dest`.
    pub async fn download_video(&self, video_name: &str, dest: &Path) -> Result<(), FlashdeckError> {
        let response = self
            .client
            .get(self.url(&format!("/home/download/video/{video_name}")))
            .send()
            .await?;
        let mut response = fail_on_status(response).await?;

        let mut file = tokio::fs::File::create(dest).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

async fn fail_on_status(response: Response) -> Result<Response, FlashdeckError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_default();

    Err(FlashdeckError::Api { status: status.as_u16(), detail })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, FlashdeckError> {
    let response = fail_on_status(response).await?;
    Ok(response.json::<T>().await?)
}

fn mime_for(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some("csv") => "text/csv",
        Some("xls") => "application/vnd.ms-excel",
        _ => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    }
}
