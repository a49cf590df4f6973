use eframe::egui;

use crate::gui::theme::Theme;

/// Dimming overlay with a spinner, shown while a blocking load is in
/// flight (for example resolving an uploaded filename into rows).
pub struct MessageOverlay {
    message: Option<String>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn is_active(&self) -> bool {
        self.message.is_some()
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        let Some(message) = &self.message else {
            return;
        };

        egui::Area::new(egui::Id::new("message_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_size = ui.ctx().screen_rect().size();
                ui.allocate_space(screen_size);
                ui.painter().rect_filled(
                    ui.ctx().screen_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(120),
                );
            });

        egui::Window::new("message_box")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(220.0, 90.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke =
                    egui::Stroke::new(2.0, theme.cyan(ui.ctx()));

                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(message);
                });
            });
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
