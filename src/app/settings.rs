// Settings store: data types, global state, load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::localization::SupportedLang;
use crate::ui_constants::CARD_WIDTH;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("artwork_cache")
}

fn default_card_width() -> f32 {
    CARD_WIDTH
}

fn default_fetch_concurrency() -> usize {
    4
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeChoice,
    // None = follow system locale
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_card_width")]
    pub card_width: f32,
    // JSON catalog to show instead of the built-in preview items
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_fetch_concurrency")]
    pub artwork_fetch_concurrency: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            language: None,
            cache_dir: default_cache_dir(),
            card_width: default_card_width(),
            catalog_path: None,
            artwork_fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    // "auto" or anything unknown means system locale
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(SupportedLang::from_code))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    // Override for tests and portable setups
    if let Ok(p) = std::env::var("CATALOG_SETTINGS_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(st) => {
            with_settings_mut(|cur| *cur = st);
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = with_settings(AppSettings::clone);
    match st.save_to_file(&path) {
        Ok(()) => log::info!("Saved settings to {}", path.to_string_lossy()),
        Err(e) => log::error!(
            "Failed to save settings to {}: {}",
            path.to_string_lossy(),
            e
        ),
    }
}

/// Read settings through a closure. A poisoned lock still yields the data.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap_or_else(|e| e.into_inner());
    f(&st)
}

pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap_or_else(|e| e.into_inner());
    f(&mut st)
}
