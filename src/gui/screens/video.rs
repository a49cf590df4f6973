use std::path::PathBuf;

use eframe::egui;

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::{
        FlashdeckApp,
        Screen,
    },
};

#[derive(Default)]
pub struct VideoScreen {
    pub busy: bool,
    /// Temp file the finished video was streamed into.
    pub downloaded: Option<PathBuf>,
}

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading(ui.ctx(), "Video flashcards"));
        ui.label(
            egui::RichText::new(
                "The server renders your saved deck into a narrated slideshow video.",
            )
            .color(app.theme.comment(ui.ctx())),
        );
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.add_enabled(!app.video.busy, egui::Button::new("🎬 Generate video")).clicked() {
                actions.push(UiAction::GenerateVideo);
            }

            if app.video.busy {
                ui.add(egui::Spinner::new());
                ui.label("Rendering on the server, this can take a while…");
            }
        });

        if let Some(path) = app.video.downloaded.clone() {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Video downloaded.").color(app.theme.green(ui.ctx())),
            );
            ui.label(
                egui::RichText::new(path.display().to_string())
                    .size(12.0)
                    .color(app.theme.comment(ui.ctx())),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("💾 Save video as…").clicked() {
                    actions.push(UiAction::SaveVideoAs);
                }
                if ui.button("▶ Open").clicked() {
                    actions.push(UiAction::OpenVideo);
                }
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "ℹ The video is not kept on the server. Save it somewhere to keep it.",
                )
                .size(12.0)
                .color(app.theme.orange(ui.ctx())),
            );
        }

        ui.add_space(30.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Back to slideshow").clicked() {
                actions.push(UiAction::Goto(Screen::Slideshow));
            }
            if ui.button("Create new flashcards").clicked() {
                actions.push(UiAction::Goto(Screen::Create));
            }
        });
    });
}
