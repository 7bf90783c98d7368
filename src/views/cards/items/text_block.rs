use eframe::egui::{self, text::LayoutJob, Color32, FontId, TextFormat};

use crate::views::cards::layout::TextLine;

/// Wrapped label cut to `line.max_lines` rows with a trailing ellipsis.
pub fn draw_text_line(
    ui: &mut egui::Ui,
    line: &TextLine,
    font: FontId,
    color: Color32,
    max_width: f32,
    extra_line_spacing: f32,
) -> egui::Response {
    let row_height = ui.fonts(|f| f.row_height(&font));
    let mut job = LayoutJob::single_section(
        line.text.clone(),
        TextFormat {
            font_id: font,
            color,
            line_height: (extra_line_spacing > 0.0).then_some(row_height + extra_line_spacing),
            ..Default::default()
        },
    );
    job.wrap.max_width = max_width.max(0.0);
    job.wrap.max_rows = line.max_lines.unwrap_or(usize::MAX);
    job.wrap.break_anywhere = false;

    let galley = ui.fonts(|f| f.layout_job(job));
    ui.add(egui::Label::new(galley).selectable(false))
}
