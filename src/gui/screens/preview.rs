use eframe::egui;

use crate::{
    core::{
        models::{
            AiSettings,
            Language,
        },
        preview::PreviewState,
        tasks::types::LoadError,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::{
            FlashdeckApp,
            Screen,
        },
        settings::SettingsData,
        vocab_table::vocabulary_table,
    },
};

/// Preview/edit screen state. One busy flag per one-shot action; a second
/// click while busy is a no-op because the button is disabled, nothing more.
pub struct PreviewScreen {
    pub state: PreviewState,
    pub ai_settings: Option<AiSettings>,

    pub audio_language: Language,
    pub audio_paths: Vec<String>,

    pub loading: bool,
    pub saving: bool,
    pub audio_busy: bool,
    pub flashcards_busy: bool,
}

impl Default for PreviewScreen {
    fn default() -> Self {
        Self {
            state: PreviewState::default(),
            ai_settings: None,
            audio_language: Language::English,
            audio_paths: Vec::new(),
            loading: false,
            saving: false,
            audio_busy: false,
            flashcards_busy: false,
        }
    }
}

impl PreviewScreen {
    /// Fresh visit; whatever the previous visit left behind is dropped.
    pub fn reset(&mut self, state: PreviewState, ai_settings: Option<AiSettings>) {
        self.state = state;
        self.ai_settings = ai_settings;
        self.audio_paths.clear();
        self.loading = false;
        self.saving = false;
        self.audio_busy = false;
        self.flashcards_busy = false;
    }

    pub fn any_busy(&self) -> bool {
        self.loading || self.saving || self.audio_busy || self.flashcards_busy
    }

    /// A failed load of an upload-sourced file forgets the cached filename
    /// and sends the user back to the files screen with the reason.
    pub fn apply_load_failure(
        &mut self,
        error: &LoadError,
        settings: &mut SettingsData,
    ) -> String {
        self.loading = false;
        settings.last_filename = None;

        if error.not_found {
            format!("That file is no longer on the server: {}", error.message)
        } else {
            format!("Could not load the file: {}", error.message)
        }
    }

    pub fn title(&self) -> String {
        match (&self.state.filename, &self.ai_settings) {
            (Some(filename), _) => filename.clone(),
            (None, Some(settings)) => format!("AI deck: \"{}\"", settings.prompt),
            (None, None) => "Untitled deck".to_string(),
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading(ui.ctx(), &app.preview.title()));
        ui.label(
            egui::RichText::new("Review and edit the word list before generating anything.")
                .color(app.theme.comment(ui.ctx())),
        );
        ui.add_space(8.0);

        if app.preview.loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Loading vocabulary…");
            });
            return;
        }

        let busy = app.preview.any_busy();

        ui_action_row(ui, app, busy, actions);
        ui.add_space(8.0);
        ui.separator();

        if app.preview.state.entries.is_empty() {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("This list is empty. Add a row to get started.")
                        .color(app.theme.comment(ui.ctx())),
                );
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                vocabulary_table(ui, &app.theme, &app.preview.state.entries, !busy, actions);
            });
        }

        ui.add_space(8.0);
        if ui.add_enabled(!busy, egui::Button::new("➕ Add row")).clicked() {
            actions.push(UiAction::AddRow);
        }
    });
}

fn ui_action_row(ui: &mut egui::Ui, app: &mut FlashdeckApp, busy: bool, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("💾 Save")).clicked() {
            actions.push(UiAction::SaveDeck);
        }
        if app.preview.saving {
            ui.add(egui::Spinner::new());
        }

        ui.add_space(14.0);

        egui::ComboBox::from_id_salt("audio_language")
            .selected_text(app.preview.audio_language.as_str())
            .show_ui(ui, |ui| {
                for lang in Language::VOICE_SUPPORTED {
                    ui.selectable_value(&mut app.preview.audio_language, lang, lang.as_str());
                }
            });
        if ui.add_enabled(!busy, egui::Button::new("🔊 Generate audio")).clicked() {
            actions.push(UiAction::GenerateAudio);
        }
        if app.preview.audio_busy {
            ui.add(egui::Spinner::new());
        }

        ui.add_space(14.0);

        if ui.add_enabled(!busy, egui::Button::new("🖼 Generate flashcards")).clicked() {
            actions.push(UiAction::GenerateFlashcards);
        }
        if app.preview.flashcards_busy {
            ui.add(egui::Spinner::new());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_entries = !app.preview.state.entries.is_empty();
            if ui.add_enabled(has_entries, egui::Button::new("Create video →")).clicked() {
                actions.push(UiAction::Goto(Screen::Video));
            }
            if ui.add_enabled(has_entries, egui::Button::new("Study slideshow →")).clicked() {
                actions.push(UiAction::Goto(Screen::Slideshow));
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_clears_the_cached_filename() {
        let mut screen = PreviewScreen::default();
        screen.loading = true;
        let mut settings = SettingsData::default();
        settings.last_filename = Some("vocab.xlsx".to_string());

        let error =
            LoadError { not_found: true, message: "File not found.".to_string() };
        let message = screen.apply_load_failure(&error, &mut settings);

        assert!(settings.last_filename.is_none());
        assert!(!screen.loading);
        assert!(message.contains("File not found."));
    }
}
