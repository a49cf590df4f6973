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
pub struct FilesScreen {
    pub files: Vec<String>,
    pub loading: bool,
    /// Filename whose rows are currently being fetched for the preview.
    pub opening: Option<String>,
    pub confirm_delete: Option<String>,
}

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(app.theme.heading(ui.ctx(), "Saved files"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!app.files.loading, egui::Button::new("⟳ Refresh")).clicked() {
                    actions.push(UiAction::RefreshFiles);
                }
            });
        });
        ui.separator();
        ui.add_space(8.0);

        if app.files.loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Fetching file list…");
            });
            return;
        }

        if app.files.files.is_empty() {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No files on the server yet.")
                        .color(app.theme.comment(ui.ctx())),
                );
                if ui.button("Create your first deck").clicked() {
                    actions.push(UiAction::Goto(Screen::Create));
                }
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for filename in &app.files.files {
                ui.horizontal(|ui| {
                    let is_cached =
                        app.settings.last_filename.as_deref() == Some(filename.as_str());
                    let text = if is_cached {
                        egui::RichText::new(filename).color(app.theme.cyan(ui.ctx()))
                    } else {
                        egui::RichText::new(filename)
                    };
                    ui.label(text);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            actions.push(UiAction::ConfirmDeleteFile(filename.clone()));
                        }

                        let opening_this =
                            app.files.opening.as_deref() == Some(filename.as_str());
                        if opening_this {
                            ui.add(egui::Spinner::new());
                        } else if ui.button("Open").clicked() {
                            actions.push(UiAction::OpenFile(filename.clone()));
                        }
                    });
                });
                ui.separator();
            }
        });
    });

    ui_confirm_delete(ctx, app, actions);
}

fn ui_confirm_delete(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    let Some(filename) = app.files.confirm_delete.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("confirm_delete_modal")).show(ctx, |ui| {
        ui.set_width(360.0);

        ui.label(format!("Delete '{}' from the server?", filename));
        ui.label(
            egui::RichText::new("This cannot be undone.")
                .size(12.0)
                .color(app.theme.red(ui.ctx())),
        );
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    actions.push(UiAction::DeleteFile(filename.clone()));
                    app.files.confirm_delete = None;
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    app.files.confirm_delete = None;
                    ui.close();
                }
            });
        });
    });

    if modal.should_close() {
        app.files.confirm_delete = None;
    }
}
