use eframe::egui::{self, Rounding};

use crate::app::artwork::ArtworkState;
use crate::ui_constants::{card, thumbnail};
use crate::views::cards::layout::CardLayout;
use crate::views::theme::{self, Palette};

use super::progress_bar::draw_progress_bar;
use super::tag_row::draw_tag_row;
use super::text_block::draw_text_line;
use super::thumbnail::draw_thumbnail;

/// One catalog row: text stack with thumbnail on the right, description,
/// tag row, and a progress bar along the bottom edge while in progress.
/// Strictly constrained to `width` so stacked cards line up.
pub fn card_view(
    ui: &mut egui::Ui,
    layout: &CardLayout,
    artwork: Option<&ArtworkState>,
    palette: &Palette,
    width: f32,
) -> egui::Response {
    ui.set_min_width(width);
    ui.set_max_width(width);

    ui.push_id(("catalog_card", layout.id), |ui| {
        draw_card_frame(ui, layout, artwork, palette, width)
    })
    .inner
}

fn draw_card_frame(
    ui: &mut egui::Ui,
    layout: &CardLayout,
    artwork: Option<&ArtworkState>,
    palette: &Palette,
    width: f32,
) -> egui::Response {
    let frame_out = egui::Frame::none()
        .fill(palette.card_background)
        .rounding(Rounding::same(card::ROUNDING))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = 0.0;

            egui::Frame::none()
                .inner_margin(egui::Margin::same(card::PADDING))
                .show(ui, |ui| {
                    let inner_w = width - 2.0 * card::PADDING;
                    ui.set_width(inner_w);
                    draw_header(ui, layout, artwork, palette, inner_w);
                    draw_text_line(
                        ui,
                        &layout.description,
                        theme::caption(),
                        palette.content_text,
                        inner_w,
                        card::DESCRIPTION_LINE_SPACING,
                    );
                    ui.add_space(card::TAG_ROW_TOP_GAP);
                    draw_tag_row(ui, &layout.tags, palette);
                });

            if let Some(progress) = layout.progress {
                draw_progress_bar(ui, progress, palette);
            }
        });

    frame_out.response
}

/// Title and subtitle on the left, thumbnail top-aligned on the right.
fn draw_header(
    ui: &mut egui::Ui,
    layout: &CardLayout,
    artwork: Option<&ArtworkState>,
    palette: &Palette,
    inner_w: f32,
) {
    let gap = crate::ui_constants::spacing::MEDIUM;
    let text_w = (inner_w - thumbnail::SIZE - gap).max(0.0);

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        ui.allocate_ui_with_layout(
            egui::vec2(text_w, thumbnail::SIZE),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                ui.set_width(text_w);
                ui.spacing_mut().item_spacing.y = card::TEXT_STACK_SPACING;
                draw_text_line(
                    ui,
                    &layout.title,
                    theme::title4(),
                    palette.title_text,
                    text_w - card::TITLE_TRAILING,
                    0.0,
                );
                draw_text_line(
                    ui,
                    &layout.subtitle,
                    theme::caption(),
                    palette.content_text,
                    text_w,
                    0.0,
                );
            },
        );
        draw_thumbnail(ui, artwork, palette);
    });
    ui.add_space(card::TEXT_STACK_SPACING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ContentListDisplayable, ContentType, DynamicContentDisplayable, Progress, ViewProgress,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn layout(view_progress: ViewProgress, bookmarked: bool) -> CardLayout {
        let model = ContentListDisplayable {
            id: 9,
            name: "Drawing in iOS with SwiftUI".into(),
            parent_name: None,
            content_type: ContentType::Collection,
            card_view_subtitle: "iOS & Swift".into(),
            description_plain_text: "A long description that will need to wrap onto more than two lines once it is laid out inside a narrow card".into(),
            professional: true,
            released_at: Utc.with_ymd_and_hms(2019, 10, 4, 0, 0, 0).unwrap(),
            duration: 10080,
            card_artwork_url: None,
            ordinal: None,
            technology_triple_string: String::new(),
            content_summary_metadata_string: String::new(),
            contributor_string: String::new(),
            video_identifier: None,
        };
        let dynamic = DynamicContentDisplayable {
            view_progress,
            bookmarked,
            ..Default::default()
        };
        CardLayout::build(&model, &dynamic, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    }

    fn card_height(layout: &CardLayout) -> f32 {
        let ctx = egui::Context::default();
        let mut height = 0.0;
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let resp = card_view(ui, layout, None, &Palette::DARK, 320.0);
                height = resp.rect.height();
            });
        });
        height
    }

    #[test]
    fn card_keeps_requested_width() {
        let ctx = egui::Context::default();
        let mut width = 0.0;
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let resp = card_view(ui, &layout(ViewProgress::NotStarted, true), None, &Palette::LIGHT, 320.0);
                width = resp.rect.width();
            });
        });
        assert!((width - 320.0).abs() < 1.0, "width={width}");
    }

    #[test]
    fn progress_bar_adds_height_only_in_progress() {
        let not_started = card_height(&layout(ViewProgress::NotStarted, false));
        let in_progress = card_height(&layout(
            ViewProgress::InProgress(Progress::new(0.4).unwrap()),
            false,
        ));
        assert!(not_started > 0.0);
        assert!(
            (in_progress - not_started - crate::ui_constants::progress_bar::HEIGHT).abs() < 0.5,
            "not_started={not_started} in_progress={in_progress}"
        );
    }
}
