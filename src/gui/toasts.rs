use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

struct Toast {
    kind: ToastKind,
    text: String,
    born: Instant,
}

/// Transient notifications, stacked under the top bar and dropped after a
/// few seconds. Every remote success or failure ends up here.
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        self.queue.push(Toast { kind, text, born: Instant::now() });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.queue.retain(|toast| toast.born.elapsed() < TOAST_LIFETIME);
        if self.queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_stack"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 36.0))
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let accent = match toast.kind {
                        ToastKind::Success => theme.green(ctx),
                        ToastKind::Info => theme.cyan(ctx),
                        ToastKind::Error => theme.red(ctx),
                    };

                    egui::Frame::popup(ui.style()).stroke(egui::Stroke::new(1.5, accent)).show(
                        ui,
                        |ui| {
                            ui.set_max_width(420.0);
                            ui.label(egui::RichText::new(&toast.text).color(accent));
                        },
                    );
                    ui.add_space(6.0);
                }
            });

        // Keep repainting so toasts expire even while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
