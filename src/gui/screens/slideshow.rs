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
pub struct SlideshowScreen {
    pub index: usize,
    pub show_front: bool,
}

impl SlideshowScreen {
    pub fn reset(&mut self) {
        self.index = 0;
        self.show_front = true;
    }
}

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(app.theme.heading(ui.ctx(), "Interactive flashcards"));
        ui.label(
            egui::RichText::new("Click the card to flip it.")
                .color(app.theme.comment(ui.ctx())),
        );
        ui.add_space(16.0);

        let total = app.preview.state.entries.len();
        if total == 0 {
            ui.vertical_centered(|ui| {
                ui.label("Nothing to study yet.");
                if ui.button("Back to preview").clicked() {
                    actions.push(UiAction::Goto(Screen::Preview));
                }
            });
            return;
        }

        // Rows may have been deleted since the last frame.
        if app.slideshow.index >= total {
            app.slideshow.index = total - 1;
        }

        let entry = app.preview.state.entries[app.slideshow.index].clone();

        ui.vertical_centered(|ui| {
            let card = egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(420.0, 200.0));
                    ui.centered_and_justified(|ui| {
                        if app.slideshow.show_front {
                            ui.vertical_centered(|ui| {
                                ui.add_space(60.0);
                                ui.label(
                                    egui::RichText::new(&entry.word)
                                        .size(34.0)
                                        .color(app.theme.cyan(ui.ctx())),
                                );
                                if !entry.pronunciation.is_empty() {
                                    ui.label(
                                        egui::RichText::new(&entry.pronunciation)
                                            .size(18.0)
                                            .color(app.theme.comment(ui.ctx())),
                                    );
                                }
                            });
                        } else {
                            ui.label(
                                egui::RichText::new(&entry.meaning)
                                    .size(24.0)
                                    .color(app.theme.orange(ui.ctx())),
                            );
                        }
                    });
                });

            if card.response.interact(egui::Sense::click()).clicked() {
                app.slideshow.show_front = !app.slideshow.show_front;
            }

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let width = 420.0;
                let pad = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.add_space(pad);

                if ui
                    .add_enabled(app.slideshow.index > 0, egui::Button::new("⬅ Previous"))
                    .clicked()
                {
                    app.slideshow.index -= 1;
                    app.slideshow.show_front = true;
                }

                ui.label(format!("Card {} of {}", app.slideshow.index + 1, total));

                if ui
                    .add_enabled(app.slideshow.index + 1 < total, egui::Button::new("Next ➡"))
                    .clicked()
                {
                    app.slideshow.index += 1;
                    app.slideshow.show_front = true;
                }

                if ui.button("🔊").on_hover_text("Play audio for this card").clicked() {
                    actions.push(UiAction::PlayRowAudio(app.slideshow.index));
                }
            });

            ui.add_space(24.0);

            ui.horizontal(|ui| {
                let width = 320.0;
                let pad = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.add_space(pad);

                if ui.button("Back to preview").clicked() {
                    actions.push(UiAction::Goto(Screen::Preview));
                }
                if ui.button("Create video").clicked() {
                    actions.push(UiAction::Goto(Screen::Video));
                }
            });
        });
    });
}
