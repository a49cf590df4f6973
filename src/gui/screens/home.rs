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

pub fn show(ctx: &egui::Context, app: &mut FlashdeckApp, actions: &mut ActionQueue) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.label(
                egui::RichText::new("Learn faster with interactive flashcards")
                    .size(30.0)
                    .color(app.theme.cyan(ui.ctx())),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Upload a vocabulary list or let the AI write one, then turn it into \
                     audio, flashcards and video.",
                )
                .color(app.theme.comment(ui.ctx())),
            );

            ui.add_space(30.0);

            ui.horizontal(|ui| {
                // Center the two entry buttons by padding half the leftover width.
                let button_width = 360.0;
                let pad = ((ui.available_width() - button_width) / 2.0).max(0.0);
                ui.add_space(pad);

                if ui
                    .add(egui::Button::new("Create flashcards").min_size(egui::vec2(170.0, 40.0)))
                    .clicked()
                {
                    actions.push(UiAction::Goto(Screen::Create));
                }
                if ui
                    .add(egui::Button::new("Browse saved files").min_size(egui::vec2(170.0, 40.0)))
                    .clicked()
                {
                    actions.push(UiAction::Goto(Screen::Files));
                }
            });

            ui.add_space(50.0);
            ui.separator();
            ui.add_space(20.0);

            ui.label(app.theme.heading(ui.ctx(), "How it works"));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let steps = [
                    ("1. Create", "Upload a spreadsheet or prompt the AI generator"),
                    ("2. Preview", "Review and edit the word list"),
                    ("3. Save", "Store the deck on the server"),
                    ("4. Study", "Generate audio, flashcards and video"),
                ];

                let col_width = ui.available_width() / steps.len() as f32;
                for (title, text) in steps {
                    ui.allocate_ui(egui::vec2(col_width, 90.0), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .strong()
                                    .color(app.theme.orange(ui.ctx())),
                            );
                            ui.label(
                                egui::RichText::new(text)
                                    .size(12.0)
                                    .color(app.theme.comment(ui.ctx())),
                            );
                        });
                    });
                }
            });
        });
    });
}
