use std::path::PathBuf;

use eframe::egui;

use crate::{
    backend::types::AiPromptRequest,
    core::{
        models::{
            AiSettings,
            Language,
            Level,
            WORD_COUNT_CHOICES,
        },
        preview::PreviewSource,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::FlashdeckApp,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTab {
    Upload,
    Ai,
}

pub struct CreateScreen {
    pub tab: CreateTab,

    // Upload tab
    pub selected_file: Option<PathBuf>,
    pub uploading: bool,
    pub uploaded_filename: Option<String>,

    // AI tab
    pub prompt: String,
    pub word_lang: Language,
    pub meaning_lang: Language,
    pub level: Level,
    pub words_num: u32,
    pub generating: bool,
}

impl Default for CreateScreen {
    fn default() -> Self {
        Self {
            tab: CreateTab::Upload,
            selected_file: None,
            uploading: false,
            uploaded_filename: None,
            prompt: String::new(),
            word_lang: Language::English,
            meaning_lang: Language::Vietnamese,
            level: Level::Beginner,
            words_num: WORD_COUNT_CHOICES[0],
            generating: false,
        }
    }
}

impl CreateScreen {
    pub fn ai_request(&self) -> AiPromptRequest {
        AiPromptRequest {
            user_prompt: self.prompt.trim().to_string(),
            word_lang: self.word_lang.as_str().to_string(),
            meaning_lang: self.meaning_lang.as_str().to_string(),
            level: self.level.as_str().to_string(),
            words_num: self.words_num,
        }
    }

    pub fn ai_settings(&self) -> AiSettings {
        AiSettings {
            prompt: self.prompt.trim().to_string(),
            word_lang: self.word_lang,
            meaning_lang: self.meaning_lang,
            level: self.level,
            words_num: self.words_num,
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading(ui.ctx(), "Create flashcards"));
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut app.create.tab, CreateTab::Upload, "Upload file");
            ui.selectable_value(&mut app.create.tab, CreateTab::Ai, "AI generator");
        });
        ui.separator();
        ui.add_space(10.0);

        match app.create.tab {
            CreateTab::Upload => ui_upload_tab(ui, app, actions),
            CreateTab::Ai => ui_ai_tab(ui, app, actions),
        }
    });
}

fn ui_upload_tab(ui: &mut egui::Ui, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.label("Upload a CSV or Excel file with Word and Meaning columns.");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save template…").clicked() {
                actions.push(UiAction::SaveTemplate);
            }
        });
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        if ui.button("Browse for file").clicked() {
            actions.push(UiAction::PickUploadFile);
        }

        if let Some(path) = &app.create.selected_file {
            ui.label(format!(
                "Selected: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            ));
        } else {
            ui.label(
                egui::RichText::new("No file selected").color(app.theme.comment(ui.ctx())),
            );
        }
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let can_upload = app.create.selected_file.is_some() && !app.create.uploading;
        if ui.add_enabled(can_upload, egui::Button::new("Upload")).clicked() {
            actions.push(UiAction::UploadSelected);
        }

        if app.create.uploading {
            ui.add(egui::Spinner::new());
            ui.label("Uploading…");
        }
    });

    if let Some(filename) = app.create.uploaded_filename.clone() {
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(format!("Uploaded as '{}'", filename))
                .color(app.theme.green(ui.ctx())),
        );
        if ui.button("Preview and edit →").clicked() {
            actions.push(UiAction::OpenPreview(PreviewSource::Upload { filename }));
        }
    }
}

fn ui_ai_tab(ui: &mut egui::Ui, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    ui.label("What would you like to learn?");
    ui.add(
        egui::TextEdit::singleline(&mut app.create.prompt)
            .hint_text("e.g. I want to learn about animals and nature")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        egui::ComboBox::from_label("Word language")
            .selected_text(app.create.word_lang.as_str())
            .show_ui(ui, |ui| {
                for lang in Language::ALL {
                    ui.selectable_value(&mut app.create.word_lang, lang, lang.as_str());
                }
            });

        ui.add_space(20.0);

        egui::ComboBox::from_label("Meaning language")
            .selected_text(app.create.meaning_lang.as_str())
            .show_ui(ui, |ui| {
                for lang in Language::ALL {
                    ui.selectable_value(&mut app.create.meaning_lang, lang, lang.as_str());
                }
            });
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        egui::ComboBox::from_label("Difficulty")
            .selected_text(app.create.level.as_str())
            .show_ui(ui, |ui| {
                for level in Level::ALL {
                    ui.selectable_value(&mut app.create.level, level, level.as_str());
                }
            });

        ui.add_space(20.0);

        egui::ComboBox::from_label("Number of words")
            .selected_text(format!("{} words", app.create.words_num))
            .show_ui(ui, |ui| {
                for count in WORD_COUNT_CHOICES {
                    ui.selectable_value(
                        &mut app.create.words_num,
                        count,
                        format!("{} words", count),
                    );
                }
            });
    });

    if !app.create.word_lang.has_voice() || !app.create.meaning_lang.has_voice() {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(
                "⚠ Audio is only available for Vietnamese, Chinese, English and German.",
            )
            .color(app.theme.orange(ui.ctx())),
        );
    }

    ui.add_space(14.0);

    ui.horizontal(|ui| {
        let can_generate = !app.create.prompt.trim().is_empty() && !app.create.generating;
        if ui.add_enabled(can_generate, egui::Button::new("Generate flashcards")).clicked() {
            actions.push(UiAction::GenerateWords);
        }

        if app.create.generating {
            ui.add(egui::Spinner::new());
            ui.label("Asking the AI…");
        }
    });
}
