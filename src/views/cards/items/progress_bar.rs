use eframe::egui::{self, Rounding, Sense, Vec2};

use crate::types::Progress;
use crate::ui_constants::progress_bar::HEIGHT;
use crate::views::theme::Palette;

/// Rounded bar across the full available width, filled to `progress`.
pub fn draw_progress_bar(ui: &mut egui::Ui, progress: Progress, palette: &Palette) {
    let (rect, resp) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), HEIGHT), Sense::hover());
    resp.on_hover_text(format!("{}%", progress.percent()));
    let rounding = Rounding::same(HEIGHT / 2.0);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, rounding, palette.progress_track);

    let fill_w = rect.width() * progress.get();
    if fill_w <= 0.0 {
        return;
    }
    let fill = egui::Rect::from_min_size(rect.min, Vec2::new(fill_w, rect.height()));
    painter.rect_filled(fill, rounding, palette.progress_fill);
}
