use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::{
    LoadError,
    LoadPurpose,
    TaskResult,
};
use crate::{
    backend::{
        types::{
            AiPromptRequest,
            WordPair,
        },
        BackendClient,
    },
    core::{
        preview::BatchSummary,
        FlashdeckError,
    },
};

/// Runs every backend call off the GUI thread. Each operation gets its own
/// thread, blocks on the shared runtime, and posts one `TaskResult`; the GUI
/// drains the channel once per frame. There is no cancellation: navigating
/// away leaves a request to complete or fail on its own.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn check_backend(&self, client: BackendClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { client.ping().await.is_ok() });
            let _ = sender.send(TaskResult::BackendStatus(connected));
        });
    }

    pub fn list_files(&self, client: BackendClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.list_files())
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::FilesListed(result));
        });
    }

    pub fn upload_doc(&self, client: BackendClient, path: PathBuf) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.upload_doc(&path))
                .map(|response| response.filename)
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::DocUploaded(result));
        });
    }

    pub fn load_doc(&self, client: BackendClient, filename: String, purpose: LoadPurpose) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(client.view_doc(&filename)).map_err(|e| LoadError {
                not_found: e.is_not_found(),
                message: e.user_message(),
            });

            let _ = sender.send(TaskResult::DocLoaded { filename, purpose, result });
        });
    }

    pub fn save_doc(&self, client: BackendClient, filename: String, updates: Vec<WordPair>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.update_doc(&filename, updates))
                .map(|_| ())
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::DocSaved { filename, result });
        });
    }

    pub fn delete_doc(&self, client: BackendClient, filename: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.delete_doc(&filename))
                .map(|_| ())
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::DocDeleted { filename, result });
        });
    }

    pub fn generate_words(&self, client: BackendClient, request: AiPromptRequest) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.process_ai_prompt(&request))
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::WordsGenerated(result));
        });
    }

    pub fn generate_audio(&self, client: BackendClient, filename: String, language: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(client.generate_audio(&filename, &language))
                .map_err(|e| e.user_message());

            let _ = sender.send(TaskResult::AudioGenerated(result));
        });
    }

    /// Flashcards are generated strictly one request at a time; a failed row
    /// is logged and the loop moves on. One summary comes back at the end.
    pub fn generate_flashcards(&self, client: BackendClient, plan: Vec<Option<(String, String)>>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let summary = runtime.block_on(async {
                let total = plan.len();
                let mut succeeded = 0;

                for step in plan {
                    let Some((word, meaning)) = step else {
                        continue;
                    };

                    match client.generate_flashcard(&word, &meaning).await {
                        Ok(()) => succeeded += 1,
                        Err(e) => {
                            eprintln!("Flashcard generation failed for '{}': {}", word, e)
                        }
                    }
                }

                BatchSummary { succeeded, total }
            });

            let _ = sender.send(TaskResult::FlashcardsGenerated(summary));
        });
    }

    /// Asks the backend to render the video, then streams it into a temp
    /// file the user can save or play from the video screen.
    pub fn generate_video(&self, client: BackendClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result: Result<PathBuf, FlashdeckError> = runtime.block_on(async {
                let info = client.generate_video().await?;

                let video_name = Path::new(&info.video_path)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .ok_or_else(|| {
                        FlashdeckError::Custom(format!(
                            "Backend returned an invalid video path: {}",
                            info.video_path
                        ))
                    })?
                    .to_string();

                let dest =
                    std::env::temp_dir().join(format!("flashdeck_{}.mp4", uuid::Uuid::new_v4()));
                client.download_video(&video_name, &dest).await?;

                Ok(dest)
            });

            let _ = sender.send(TaskResult::VideoGenerated(result.map_err(|e| e.user_message())));
        });
    }
}
