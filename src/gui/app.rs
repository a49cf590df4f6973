use std::{
    path::Path,
    time::Instant,
};

use eframe::egui;
use rfd::FileDialog;

use crate::{
    backend::BackendClient,
    core::{
        preview::{
            flashcard_plan,
            PreviewSource,
            PreviewState,
        },
        tasks::{
            types::LoadPurpose,
            TaskManager,
            TaskResult,
        },
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        message_overlay::MessageOverlay,
        screens::{
            self,
            CreateScreen,
            FilesScreen,
            PreviewScreen,
            SlideshowScreen,
            VideoScreen,
        },
        settings::{
            ServerSettingsModal,
            SettingsData,
        },
        theme::{
            set_theme,
            Theme,
        },
        toasts::Toasts,
        top_bar::TopBar,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";

const TEMPLATE_CSV: &str = "\
Word,Meaning
Apple,A fruit
Table,A piece of furniture
Dog,A domestic animal
Computer,An electronic device
Book,A set of written pages
Sun,The star in our solar system
Water,A liquid essential for life
Car,A four-wheeled vehicle
Phone,A communication device
Mountain,A large natural elevation
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Create,
    Files,
    Preview,
    Slideshow,
    Video,
}

pub struct FlashdeckApp {
    pub screen: Screen,
    pub settings: SettingsData,
    pub theme: Theme,

    // UI state
    pub toasts: Toasts,
    pub overlay: MessageOverlay,
    pub server_modal: ServerSettingsModal,

    // Screens
    pub create: CreateScreen,
    pub files: FilesScreen,
    pub preview: PreviewScreen,
    pub slideshow: SlideshowScreen,
    pub video: VideoScreen,

    // Backend
    pub backend_connected: bool,
    last_backend_check: Option<Instant>,
    client: BackendClient,
    task_manager: TaskManager,
}

impl FlashdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.options_mut(|options| {
            options.theme_preference = if settings.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        let client =
            BackendClient::new(&settings.server_url).expect("Failed to build the HTTP client");

        let task_manager = TaskManager::new();
        task_manager.check_backend(client.clone());

        Self {
            screen: Screen::Home,
            settings,
            theme,
            toasts: Toasts::new(),
            overlay: MessageOverlay::new(),
            server_modal: ServerSettingsModal::new(),
            create: CreateScreen::default(),
            files: FilesScreen::default(),
            preview: PreviewScreen::default(),
            slideshow: SlideshowScreen::default(),
            video: VideoScreen::default(),
            backend_connected: false,
            last_backend_check: Some(Instant::now()),
            client,
            task_manager,
        }
    }
}

impl eframe::App for FlashdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_backend_status();
        self.sync_theme_preference(ctx);

        let mut actions = ActionQueue::new();

        TopBar::show(ctx, self, &mut actions);

        match self.screen {
            Screen::Home => screens::home::show(ctx, self, &mut actions),
            Screen::Create => screens::create::show(ctx, self, &mut actions),
            Screen::Files => screens::files::show(ctx, self, &mut actions),
            Screen::Preview => screens::preview::show(ctx, self, &mut actions),
            Screen::Slideshow => screens::slideshow::show(ctx, self, &mut actions),
            Screen::Video => screens::video::show(ctx, self, &mut actions),
        }

        if let Some(url) = self.server_modal.show(ctx) {
            self.apply_server_url(url);
        }

        self.overlay.show(ctx, &self.theme);
        self.toasts.show(ctx, &self.theme);

        let had_actions = !actions.is_empty();
        self.execute_actions(&mut actions);

        if had_actions {
            ctx.request_repaint();
        }
    }
}

impl FlashdeckApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::BackendStatus(connected) => {
                self.backend_connected = connected;
            }

            TaskResult::FilesListed(result) => {
                self.files.loading = false;
                match result {
                    Ok(files) => self.files.files = files,
                    Err(message) => {
                        self.toasts.error(format!("Failed to fetch files: {}", message))
                    }
                }
            }

            TaskResult::DocUploaded(result) => {
                self.create.uploading = false;
                match result {
                    Ok(filename) => {
                        self.toasts.success(format!("Uploaded '{}'", filename));
                        self.create.uploaded_filename = Some(filename.clone());
                        self.remember_filename(filename);
                    }
                    Err(message) => self.toasts.error(format!("Upload failed: {}", message)),
                }
            }

            TaskResult::DocLoaded { filename, purpose, result } => match purpose {
                LoadPurpose::OpenPreview => {
                    self.files.opening = None;
                    match result {
                        Ok(rows) => self.open_preview(PreviewSource::File { filename, rows }),
                        Err(error) => self
                            .toasts
                            .error(format!("Failed to fetch file: {}", error.message)),
                    }
                }
                LoadPurpose::ResolveUpload => {
                    self.overlay.clear_message();
                    match result {
                        Ok(rows) => {
                            self.preview.loading = false;
                            self.preview.state.set_rows(&rows);
                            self.remember_filename(filename);
                        }
                        Err(error) => {
                            let message =
                                self.preview.apply_load_failure(&error, &mut self.settings);
                            self.save_settings();
                            self.toasts.error(message);
                            self.goto_files();
                        }
                    }
                }
            },

            TaskResult::DocSaved { filename, result } => {
                self.preview.saving = false;
                match result {
                    Ok(()) => {
                        self.toasts.success(format!("Saved '{}'", filename));
                        self.remember_filename(filename);
                    }
                    Err(message) => self.toasts.error(format!("Save failed: {}", message)),
                }
            }

            TaskResult::DocDeleted { filename, result } => match result {
                Ok(()) => {
                    self.toasts.success(format!("Deleted '{}'", filename));
                    if self.settings.last_filename.as_deref() == Some(filename.as_str()) {
                        self.settings.last_filename = None;
                        self.save_settings();
                    }
                    self.refresh_files();
                }
                Err(message) => self.toasts.error(format!("Delete failed: {}", message)),
            },

            TaskResult::WordsGenerated(result) => {
                self.create.generating = false;
                match result {
                    Ok(rows) if rows.is_empty() => {
                        self.toasts.info("The AI returned no words. Try a different prompt")
                    }
                    Ok(rows) => {
                        let settings = self.create.ai_settings();
                        self.open_preview(PreviewSource::Ai { settings, rows });
                    }
                    Err(message) => {
                        self.toasts.error(format!("AI generation failed: {}", message))
                    }
                }
            }

            TaskResult::AudioGenerated(result) => {
                self.preview.audio_busy = false;
                match result {
                    Ok(paths) => {
                        self.toasts.success(format!("Generated {} audio files", paths.len()));
                        self.preview.audio_paths = paths;
                    }
                    Err(message) => {
                        self.toasts.error(format!("Audio generation failed: {}", message))
                    }
                }
            }

            TaskResult::FlashcardsGenerated(summary) => {
                self.preview.flashcards_busy = false;
                if summary.total == 0 {
                    self.toasts.info("Nothing to generate, the list is empty");
                } else if summary.all_succeeded() {
                    self.toasts.success(summary.describe());
                } else if summary.succeeded == 0 {
                    self.toasts.error(summary.describe());
                } else {
                    self.toasts.info(summary.describe());
                }
            }

            TaskResult::VideoGenerated(result) => {
                self.video.busy = false;
                match result {
                    Ok(path) => {
                        self.toasts.success("Video ready");
                        self.video.downloaded = Some(path);
                    }
                    Err(message) => {
                        self.toasts.error(format!("Video generation failed: {}", message))
                    }
                }
            }
        }
    }

    fn execute_actions(&mut self, actions: &mut ActionQueue) {
        for action in actions.drain() {
            match action {
                UiAction::Goto(screen) => self.goto(screen),
                UiAction::OpenPreview(source) => self.open_preview(source),

                UiAction::PickUploadFile => {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Spreadsheets", &["csv", "xlsx", "xls"])
                        .pick_file()
                    {
                        self.create.selected_file = Some(path);
                        self.create.uploaded_filename = None;
                    }
                }
                UiAction::SaveTemplate => self.save_template(),
                UiAction::UploadSelected => {
                    if let Some(path) = self.create.selected_file.clone() {
                        self.create.uploading = true;
                        self.task_manager.upload_doc(self.client.clone(), path);
                    }
                }
                UiAction::GenerateWords => {
                    self.create.generating = true;
                    self.task_manager
                        .generate_words(self.client.clone(), self.create.ai_request());
                }

                UiAction::RefreshFiles => self.refresh_files(),
                UiAction::OpenFile(filename) => {
                    self.files.opening = Some(filename.clone());
                    self.task_manager.load_doc(
                        self.client.clone(),
                        filename,
                        LoadPurpose::OpenPreview,
                    );
                }
                UiAction::ConfirmDeleteFile(filename) => {
                    self.files.confirm_delete = Some(filename);
                }
                UiAction::DeleteFile(filename) => {
                    self.task_manager.delete_doc(self.client.clone(), filename);
                }

                UiAction::AddRow => {
                    self.preview.state.add_row();
                }
                UiAction::EditEntry { id, field, value } => {
                    self.preview.state.edit(id, field, value);
                }
                UiAction::DeleteEntry(id) => self.preview.state.delete(id),
                UiAction::SaveDeck => self.save_deck(),
                UiAction::GenerateAudio => self.generate_audio(),
                UiAction::GenerateFlashcards => {
                    self.preview.flashcards_busy = true;
                    let plan = flashcard_plan(&self.preview.state.entries);
                    self.task_manager.generate_flashcards(self.client.clone(), plan);
                }
                UiAction::PlayRowAudio(index) => self.play_row_audio(index),

                UiAction::GenerateVideo => {
                    self.video.busy = true;
                    self.video.downloaded = None;
                    self.task_manager.generate_video(self.client.clone());
                }
                UiAction::SaveVideoAs => self.save_video_as(),
                UiAction::OpenVideo => {
                    if let Some(path) = self.video.downloaded.clone() {
                        if let Err(e) = open::that(path) {
                            self.toasts.error(format!("Could not open the video: {}", e));
                        }
                    }
                }
            }
        }
    }

    fn goto(&mut self, screen: Screen) {
        if screen == Screen::Files && !self.files.loading {
            self.refresh_files();
        }
        if screen == Screen::Slideshow {
            self.slideshow.reset();
        }
        self.screen = screen;
    }

    fn goto_files(&mut self) {
        self.refresh_files();
        self.screen = Screen::Files;
    }

    fn refresh_files(&mut self) {
        self.files.loading = true;
        self.task_manager.list_files(self.client.clone());
    }

    fn remember_filename(&mut self, filename: String) {
        self.settings.last_filename = Some(filename);
        self.save_settings();
    }

    pub fn open_preview(&mut self, source: PreviewSource) {
        match source {
            PreviewSource::Upload { filename } => {
                self.preview.reset(
                    PreviewState { filename: Some(filename.clone()), entries: Vec::new() },
                    None,
                );
                self.preview.loading = true;
                self.overlay.set_message("Loading vocabulary…".to_string());
                self.task_manager.load_doc(
                    self.client.clone(),
                    filename,
                    LoadPurpose::ResolveUpload,
                );
            }
            PreviewSource::File { filename, rows } => {
                self.preview
                    .reset(PreviewState::from_rows(Some(filename.clone()), &rows), None);
                self.remember_filename(filename);
            }
            PreviewSource::Ai { settings, rows } => {
                self.preview.reset(PreviewState::from_rows(None, &rows), Some(settings));
            }
        }

        self.slideshow.reset();
        self.screen = Screen::Preview;
    }

    fn save_deck(&mut self) {
        let Some(filename) = self.preview.state.filename.clone() else {
            self.toasts.info("This list isn't on the server yet. Upload it as a file first");
            return;
        };

        match self.preview.state.save_updates() {
            Ok(updates) => {
                self.preview.saving = true;
                self.task_manager.save_doc(self.client.clone(), filename, updates);
            }
            Err(e) => self.toasts.error(e.user_message()),
        }
    }

    fn generate_audio(&mut self) {
        let Some(filename) = self.preview.state.filename.clone() else {
            self.toasts.info("Save the list to the server before generating audio");
            return;
        };

        self.preview.audio_busy = true;
        self.task_manager.generate_audio(
            self.client.clone(),
            filename,
            self.preview.audio_language.as_str().to_string(),
        );
    }

    fn play_row_audio(&mut self, index: usize) {
        match self.preview.audio_paths.get(index) {
            // The audio files live where the backend wrote them; that is only
            // playable when the server runs on this machine.
            Some(path) if Path::new(path).exists() => {
                if let Err(e) = open::that(path) {
                    self.toasts.error(format!("Could not play audio: {}", e));
                }
            }
            Some(path) => self.toasts.info(format!("Audio is on the server at {}", path)),
            None => self.toasts.info("Generate audio first"),
        }
    }

    fn save_template(&mut self) {
        let Some(dest) = FileDialog::new().set_file_name("flashcard_template.csv").save_file()
        else {
            return;
        };

        match std::fs::write(&dest, TEMPLATE_CSV) {
            Ok(()) => self.toasts.success(format!("Template saved to {}", dest.display())),
            Err(e) => self.toasts.error(format!("Could not save the template: {}", e)),
        }
    }

    fn save_video_as(&mut self) {
        let Some(source) = self.video.downloaded.clone() else {
            return;
        };
        let Some(dest) = FileDialog::new().set_file_name("flashcard_video.mp4").save_file()
        else {
            return;
        };

        match std::fs::copy(&source, &dest) {
            Ok(_) => self.toasts.success(format!("Video saved to {}", dest.display())),
            Err(e) => self.toasts.error(format!("Could not save the video: {}", e)),
        }
    }

    fn apply_server_url(&mut self, url: String) {
        match BackendClient::new(&url) {
            Ok(client) => {
                self.client = client;
                self.settings.server_url = url;
                self.save_settings();
                self.backend_connected = false;
                self.last_backend_check = None;
                self.toasts.success("Server address updated");
            }
            Err(e) => self.toasts.error(e.user_message()),
        }
    }

    fn update_backend_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_backend_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= 5,
        };

        if should_check {
            self.task_manager.check_backend(self.client.clone());
            self.last_backend_check = Some(now);
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
