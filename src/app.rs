// Hosting window for the card list: loads the catalog, owns the artwork
// loader and theme, and lays cards out in a scrollable column.

use chrono::Utc;
use eframe::{egui, App};
use std::sync::Arc;
use strum::IntoEnumIterator;

use crate::localization::{self, translate, translate_with, SupportedLang};
use crate::ui_constants::CARD_GAP;
use crate::views::cards::{card_view, CardLayout};
use crate::views::theme::{self, Palette};

pub mod artwork;
pub mod catalog;
mod logs_ui;
mod runtime;
pub mod settings;

pub use runtime::rt;

use artwork::{ArtworkManager, ArtworkProvider};
use catalog::CatalogEntry;
use settings::{with_settings, with_settings_mut, ThemeChoice};

pub struct CatalogApp {
    entries: Vec<CatalogEntry>,
    load_error: Option<String>,
    artwork: ArtworkManager,
    applied_theme: Option<ThemeChoice>,
}

impl CatalogApp {
    pub fn new(provider: Arc<dyn ArtworkProvider>) -> Self {
        let (catalog_path, concurrency) =
            with_settings(|st| (st.catalog_path.clone(), st.artwork_fetch_concurrency));

        let (entries, load_error) = match catalog_path {
            Some(path) => match catalog::load_catalog(&path) {
                Ok(entries) => (entries, None),
                Err(e) => {
                    log::error!("{e}");
                    (Vec::new(), Some(e.to_string()))
                }
            },
            None => {
                log::info!("No catalog configured; showing preview items");
                (catalog::preview_catalog(Utc::now()), None)
            }
        };

        Self {
            entries,
            load_error,
            artwork: ArtworkManager::new(provider, concurrency),
            applied_theme: None,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) -> Palette {
        let wanted = with_settings(|st| st.theme);
        if self.applied_theme != Some(wanted) {
            theme::apply(ctx, wanted);
            self.applied_theme = Some(wanted);
        }
        Palette::for_theme(wanted)
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut theme_choice = with_settings(|st| st.theme);
                let before = theme_choice;
                ui.selectable_value(&mut theme_choice, ThemeChoice::Dark, translate("menu-theme-dark"));
                ui.selectable_value(&mut theme_choice, ThemeChoice::Light, translate("menu-theme-light"));
                if theme_choice != before {
                    with_settings_mut(|st| st.theme = theme_choice);
                    settings::save_settings_to_disk();
                }

                ui.separator();
                self.draw_language_menu(ui);

                ui.separator();
                if ui.button(translate("menu-logs")).clicked() {
                    logs_ui::open_logs();
                }
                if ui
                    .button("↻")
                    .on_hover_text(translate("artwork-retry"))
                    .clicked()
                {
                    self.artwork.retry_failed();
                }
            });
        });
    }

    fn draw_language_menu(&mut self, ui: &mut egui::Ui) {
        let current = with_settings(|st| st.language);
        let mut selected = current;
        let selected_text = match current {
            Some(lang) => lang.to_string(),
            None => format!(
                "{} ({})",
                translate("language-auto"),
                localization::get_current_language()
            ),
        };
        egui::ComboBox::from_label(translate("menu-language"))
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, translate("language-auto"));
                for lang in SupportedLang::iter() {
                    ui.selectable_value(&mut selected, Some(lang), lang.to_string());
                }
            });
        if selected != current {
            with_settings_mut(|st| st.language = selected);
            settings::save_settings_to_disk();
            let res = match selected {
                Some(lang) => localization::set_current_language(lang),
                None => localization::initialize_localization(None),
            };
            if let Err(e) = res {
                log::error!("Language switch failed: {e}");
            }
        }
    }

    fn draw_cards(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        if let Some(err) = &self.load_error {
            ui.colored_label(
                egui::Color32::from_rgb(220, 80, 80),
                translate_with("catalog-load-failed", &[("error", err.clone())]),
            );
            return;
        }
        if self.entries.is_empty() {
            ui.label(translate("catalog-empty"));
            return;
        }

        let width = with_settings(|st| st.card_width).min(ui.available_width());
        let today = Utc::now().date_naive();
        let ctx = ui.ctx().clone();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spacing_mut().item_spacing.y = CARD_GAP;
                    for entry in &self.entries {
                        let layout = CardLayout::build(&entry.content, &entry.dynamic, today);
                        let art = match &layout.artwork_url {
                            Some(url) => {
                                self.artwork.request(&ctx, url);
                                self.artwork.state(url)
                            }
                            None => None,
                        };
                        card_view(ui, &layout, art, palette, width);
                    }
                });
            });
    }
}

impl App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() && logs_ui::is_open() {
            ctx.request_repaint();
        }

        self.artwork.poll(ctx);
        let palette = self.sync_theme(ctx);

        self.draw_toolbar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(crate::ui_constants::spacing::LARGE);
            self.draw_cards(ui, &palette);
        });

        logs_ui::draw_logs_viewport(ctx);
    }
}
