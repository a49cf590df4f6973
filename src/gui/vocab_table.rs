use eframe::egui::{
    self,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::models::{
        EntryField,
        VocabularyEntry,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

/// Editable word/meaning/pronunciation grid. Owns no state: every change is
/// pushed onto the action queue and applied by the app afterwards.
pub fn vocabulary_table(
    ui: &mut Ui,
    theme: &Theme,
    entries: &[VocabularyEntry],
    enabled: bool,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size.max(28.0);

    ui.add_enabled_ui(enabled, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(140.0))
            .column(Column::remainder().at_least(140.0))
            .column(Column::remainder().at_least(110.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, "Word"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, "Meaning"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, "Pronunciation"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, "Audio"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(&ctx, ""));
                });
            })
            .body(|body| {
                body.rows(row_height, entries.len(), |mut row| {
                    let index = row.index();
                    let entry = &entries[index];

                    ui_text_cell(&mut row, entry, EntryField::Word, actions);
                    ui_text_cell(&mut row, entry, EntryField::Meaning, actions);
                    ui_text_cell(&mut row, entry, EntryField::Pronunciation, actions);

                    row.col(|ui| {
                        if ui
                            .button("🔊")
                            .on_hover_text("Play the generated audio for this row")
                            .clicked()
                        {
                            actions.push(UiAction::PlayRowAudio(index));
                        }
                    });

                    row.col(|ui| {
                        let delete = egui::Button::new(
                            egui::RichText::new("🗑").color(theme.red(&ctx)),
                        );
                        if ui.add(delete).on_hover_text("Remove this row").clicked() {
                            actions.push(UiAction::DeleteEntry(entry.id));
                        }
                    });
                });
            });
    });
}

fn ui_text_cell(
    row: &mut egui_extras::TableRow,
    entry: &VocabularyEntry,
    field: EntryField,
    actions: &mut ActionQueue,
) {
    row.col(|ui| {
        let mut value = match field {
            EntryField::Word => entry.word.clone(),
            EntryField::Meaning => entry.meaning.clone(),
            EntryField::Pronunciation => entry.pronunciation.clone(),
        };

        let response = ui.add(
            egui::TextEdit::singleline(&mut value).desired_width(ui.available_width() - 8.0),
        );
        if response.changed() {
            actions.push(UiAction::EditEntry { id: entry.id, field, value });
        }
    });
}
