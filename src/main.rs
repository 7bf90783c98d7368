#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console in release builds
// Entry point stays minimal: window config and app start. Everything else lives in `app`.

use eframe::{egui, egui_wgpu::WgpuConfiguration};
use std::sync::Arc;

mod app;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

use app::artwork::{ArtworkProvider, CachingProvider, NetworkProvider};

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    let (preferred_lang, cache_dir) =
        app::settings::with_settings(|st| (st.language, st.cache_dir.clone()));
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }

    let provider: Arc<dyn ArtworkProvider> = match NetworkProvider::new() {
        Ok(network) => Arc::new(CachingProvider::new(network, cache_dir)),
        Err(e) => {
            log::error!("Artwork loading unavailable: {e}");
            std::process::exit(1);
        }
    };

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([320.0, 240.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(move |_cc| Box::new(app::CatalogApp::new(provider))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
