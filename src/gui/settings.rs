use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub server_url: String,
    pub dark_mode: bool,
    /// Last filename the backend accepted. Cleared as soon as the server no
    /// longer knows the file.
    pub last_filename: Option<String>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { server_url: DEFAULT_SERVER_URL.to_string(), dark_mode: true, last_filename: None }
    }
}

/// Modal for editing the backend base URL.
pub struct ServerSettingsModal {
    open: bool,
    url: String,
}

impl ServerSettingsModal {
    pub fn new() -> Self {
        Self { open: false, url: String::new() }
    }

    pub fn open_with(&mut self, current_url: &str) {
        self.url = current_url.to_string();
        self.open = true;
    }

    /// Returns the confirmed URL, if any.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        if !self.open {
            return None;
        }

        let mut confirmed = None;

        let modal = egui::Modal::new(egui::Id::new("server_settings_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.heading("Server");
            ui.add_space(8.0);

            ui.label("Base URL of the flashcard backend:");
            ui.text_edit_singleline(&mut self.url);

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_save = !self.url.trim().is_empty();
                    if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                        confirmed = Some(self.url.trim().to_string());
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        confirmed
    }
}

impl Default for ServerSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
