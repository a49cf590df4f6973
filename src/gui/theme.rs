use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Accent palette with a dark and a light variant; egui's active theme
/// preference decides which one a widget reads.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(80, 160, 100),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(60, 150, 190),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );
}
