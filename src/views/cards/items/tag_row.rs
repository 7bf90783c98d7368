use eframe::egui::{self, Color32, Rounding, Sense, Stroke, Vec2};

use crate::ui_constants::{card, tag};
use crate::views::cards::layout::{StatusTag, TagRow};
use crate::views::theme::{self, Palette};

/// Pro badge, then the completed badge or release line, then the bookmark
/// pushed to the right edge.
pub fn draw_tag_row(ui: &mut egui::Ui, row: &TagRow, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        if let Some(label) = &row.pro {
            draw_chip(ui, label, palette.pro_tag_background, palette.pro_tag_text);
            ui.add_space(card::PRO_TRAILING);
        }

        match &row.status {
            StatusTag::Completed { label } => {
                draw_chip(
                    ui,
                    label,
                    palette.completed_tag_background,
                    palette.completed_tag_text,
                );
            }
            StatusTag::ReleasedAt(text) => {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(text)
                            .font(theme::caption())
                            .color(palette.content_text),
                    )
                    .truncate(true),
                );
            }
        }

        if row.bookmarked {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                draw_bookmark(ui, palette.bookmark);
            });
        }
    });
}

/// Small rounded label sized to its text.
fn draw_chip(ui: &mut egui::Ui, text: &str, bg: Color32, fg: Color32) {
    let font = theme::tag();
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_uppercase(), font.clone(), fg);
    let chip_w = galley.size().x + 2.0 * tag::PAD_X;

    let (rect, _resp) = ui.allocate_exact_size(Vec2::new(chip_w, tag::HEIGHT), Sense::hover());
    let p = ui.painter_at(rect);
    p.rect_filled(rect, Rounding::same(tag::ROUNDING), bg);
    p.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text.to_uppercase(),
        font,
        fg,
    );
}

/// Filled ribbon with a notch at the bottom.
fn draw_bookmark(ui: &mut egui::Ui, color: Color32) {
    let size = card::BOOKMARK_SIZE;
    let (rect, _resp) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let p = ui.painter_at(rect);

    let x0 = rect.min.x + size * 0.2;
    let x1 = rect.max.x - size * 0.2;
    let xc = rect.center().x;
    let y0 = rect.min.y + size * 0.05;
    let y_mid = rect.min.y + size * 0.6;
    let y_notch = rect.min.y + size * 0.75;
    let y1 = rect.max.y - size * 0.05;

    p.rect_filled(
        egui::Rect::from_min_max(egui::pos2(x0, y0), egui::pos2(x1, y_mid)),
        Rounding {
            nw: 2.0,
            ne: 2.0,
            sw: 0.0,
            se: 0.0,
        },
        color,
    );
    // Two tails meeting at the notch; each is convex on its own
    for (outer, inner_top) in [(x0, xc), (x1, xc)] {
        p.add(egui::Shape::convex_polygon(
            vec![
                egui::pos2(outer, y_mid),
                egui::pos2(inner_top, y_mid),
                egui::pos2(inner_top, y_notch),
                egui::pos2(outer, y1),
            ],
            color,
            Stroke::NONE,
        ));
    }
}
