use eframe::egui::{
    self,
    containers,
};

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

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.add_space(8.0);

                if ui.selectable_label(app.screen == Screen::Home, "Home").clicked() {
                    actions.push(UiAction::Goto(Screen::Home));
                }
                if ui.selectable_label(app.screen == Screen::Create, "Create").clicked() {
                    actions.push(UiAction::Goto(Screen::Create));
                }
                if ui.selectable_label(app.screen == Screen::Files, "Files").clicked() {
                    actions.push(UiAction::Goto(Screen::Files));
                }

                let has_deck = !app.preview.state.entries.is_empty();
                ui.add_enabled_ui(has_deck, |ui| {
                    if ui
                        .selectable_label(app.screen == Screen::Preview, "Preview")
                        .clicked()
                    {
                        actions.push(UiAction::Goto(Screen::Preview));
                    }
                    if ui
                        .selectable_label(app.screen == Screen::Slideshow, "Slideshow")
                        .clicked()
                    {
                        actions.push(UiAction::Goto(Screen::Slideshow));
                    }
                    if ui.selectable_label(app.screen == Screen::Video, "Video").clicked() {
                        actions.push(UiAction::Goto(Screen::Video));
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Server…").clicked() {
                        app.server_modal.open_with(&app.settings.server_url);
                        ui.close();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, app.backend_connected);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, connected: bool) {
        let color = if connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if connected {
            "Connected to the flashcard server"
        } else {
            "Not connected to the flashcard server"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("server").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
