use eframe::egui::{self, load::SizedTexture, Color32, Rounding, Sense, Vec2};

use crate::app::artwork::ArtworkState;
use crate::ui_constants::thumbnail::{FADE_SECS, ROUNDING, SIZE};
use crate::views::theme::Palette;

/// Fixed-size rounded thumbnail. Until a texture is ready (no URL, still
/// loading, or failed) only the placeholder tile is drawn; the image then
/// fades in over it.
pub fn draw_thumbnail(ui: &mut egui::Ui, artwork: Option<&ArtworkState>, palette: &Palette) {
    let (rect, _resp) = ui.allocate_exact_size(Vec2::splat(SIZE), Sense::hover());
    let rounding = Rounding::same(ROUNDING);
    ui.painter().rect_filled(rect, rounding, palette.placeholder);

    let Some(ArtworkState::Loaded { texture, loaded_at }) = artwork else {
        return;
    };

    let now = ui.input(|i| i.time);
    let opacity = fade_opacity(now - loaded_at);
    if opacity < 1.0 {
        ui.ctx().request_repaint();
    }

    let [w, h] = texture.size();
    egui::Image::from_texture(SizedTexture::from_handle(texture))
        .uv(fill_uv(w as f32, h as f32))
        .rounding(rounding)
        .tint(Color32::WHITE.gamma_multiply(opacity))
        .paint_at(ui, rect);
}

fn fade_opacity(elapsed_secs: f64) -> f32 {
    ((elapsed_secs as f32) / FADE_SECS).clamp(0.0, 1.0)
}

/// Centre crop so the image fills a square without stretching.
fn fill_uv(w: f32, h: f32) -> egui::Rect {
    if w <= 0.0 || h <= 0.0 {
        return egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    }
    let (uw, vh) = if w > h { (h / w, 1.0) } else { (1.0, w / h) };
    let u0 = (1.0 - uw) / 2.0;
    let v0 = (1.0 - vh) / 2.0;
    egui::Rect::from_min_max(egui::pos2(u0, v0), egui::pos2(u0 + uw, v0 + vh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_runs_from_zero_to_one() {
        assert_eq!(fade_opacity(0.0), 0.0);
        assert!((fade_opacity(FADE_SECS as f64 / 2.0) - 0.5).abs() < 1e-4);
        assert_eq!(fade_opacity(10.0), 1.0);
        assert_eq!(fade_opacity(-1.0), 0.0);
    }

    #[test]
    fn wide_images_crop_horizontally() {
        let uv = fill_uv(200.0, 100.0);
        assert!((uv.min.x - 0.25).abs() < 1e-6 && (uv.max.x - 0.75).abs() < 1e-6);
        assert_eq!((uv.min.y, uv.max.y), (0.0, 1.0));

        let uv = fill_uv(100.0, 400.0);
        assert_eq!((uv.min.x, uv.max.x), (0.0, 1.0));
        assert!((uv.height() - 0.25).abs() < 1e-6);

        assert_eq!(fill_uv(0.0, 10.0).width(), 1.0);
    }
}
