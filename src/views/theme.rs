use eframe::egui::{self, Color32, FontId};

use crate::app::settings::ThemeChoice;

/// Named colours the card paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_background: Color32,
    pub card_background: Color32,
    pub title_text: Color32,
    pub content_text: Color32,
    pub pro_tag_background: Color32,
    pub pro_tag_text: Color32,
    pub completed_tag_background: Color32,
    pub completed_tag_text: Color32,
    pub progress_track: Color32,
    pub progress_fill: Color32,
    pub bookmark: Color32,
    pub placeholder: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        window_background: Color32::from_rgb(20, 22, 26),
        card_background: Color32::from_rgb(36, 39, 45),
        title_text: Color32::from_rgb(235, 235, 235),
        content_text: Color32::from_rgb(170, 174, 180),
        pro_tag_background: Color32::from_rgb(108, 64, 170),
        pro_tag_text: Color32::WHITE,
        completed_tag_background: Color32::from_rgb(33, 133, 88),
        completed_tag_text: Color32::WHITE,
        progress_track: Color32::from_rgb(58, 62, 70),
        progress_fill: Color32::from_rgb(33, 170, 108),
        bookmark: Color32::from_rgb(240, 178, 50),
        placeholder: Color32::from_rgb(58, 58, 58),
    };

    pub const LIGHT: Palette = Palette {
        window_background: Color32::from_rgb(238, 240, 243),
        card_background: Color32::WHITE,
        title_text: Color32::from_rgb(28, 30, 34),
        content_text: Color32::from_rgb(98, 102, 110),
        pro_tag_background: Color32::from_rgb(123, 80, 190),
        pro_tag_text: Color32::WHITE,
        completed_tag_background: Color32::from_rgb(33, 150, 98),
        completed_tag_text: Color32::WHITE,
        progress_track: Color32::from_rgb(220, 223, 228),
        progress_fill: Color32::from_rgb(33, 170, 108),
        bookmark: Color32::from_rgb(226, 150, 20),
        placeholder: Color32::from_rgb(210, 212, 216),
    };

    pub fn for_theme(theme: ThemeChoice) -> Palette {
        match theme {
            ThemeChoice::Dark => Palette::DARK,
            ThemeChoice::Light => Palette::LIGHT,
        }
    }
}

/// Card title font.
pub fn title4() -> FontId {
    FontId::proportional(17.0)
}

/// Subtitle, description and date font.
pub fn caption() -> FontId {
    FontId::proportional(13.0)
}

/// Badge label font.
pub fn tag() -> FontId {
    FontId::proportional(11.0)
}

/// Switch egui visuals to the chosen scheme.
pub fn apply(ctx: &egui::Context, theme: ThemeChoice) {
    let palette = Palette::for_theme(theme);
    let mut visuals = match theme {
        ThemeChoice::Dark => egui::Visuals::dark(),
        ThemeChoice::Light => egui::Visuals::light(),
    };
    visuals.panel_fill = palette.window_background;
    visuals.window_fill = palette.card_background;
    ctx.set_visuals(visuals);
}
