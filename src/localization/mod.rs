use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

#[derive(
    strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum SupportedLang {
    #[strum(serialize = "English")]
    English,
    #[strum(serialize = "Русский")]
    Russian,
}

impl SupportedLang {
    pub fn code(self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Russian => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        let short = code.split(['-', '_']).next().unwrap_or_default();
        match short {
            "en" => Some(SupportedLang::English),
            "ru" => Some(SupportedLang::Russian),
            _ => None,
        }
    }

    fn ftl_source(self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Russian => include_str!("resources/ru.ftl"),
        }
    }
}

const FALLBACK_LANG: SupportedLang = SupportedLang::English;

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .as_deref()
        .and_then(SupportedLang::from_code)
        .unwrap_or(FALLBACK_LANG)
}

fn build_bundle(lang: SupportedLang) -> Result<Bundle, LocalizationError> {
    let langid: LanguageIdentifier = lang
        .code()
        .parse()
        .map_err(|e| LocalizationError::InitError(format!("bad language id: {e}")))?;
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // Isolation marks would leak into painted labels.
    bundle.set_use_isolating(false);
    let res = FluentResource::try_new(lang.ftl_source().to_string()).map_err(|(_, errs)| {
        LocalizationError::InitError(format!("{} ftl parse errors: {errs:?}", lang.code()))
    })?;
    bundle
        .add_resource(res)
        .map_err(|errs| LocalizationError::InitError(format!("{errs:?}")))?;
    Ok(bundle)
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles = HashMap::new();
        for lang in [SupportedLang::English, SupportedLang::Russian] {
            match build_bundle(lang) {
                Ok(b) => {
                    bundles.insert(lang, b);
                }
                Err(e) => log::error!("Localization bundle {} unavailable: {e}", lang.code()),
            }
        }
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn set_current(&mut self, lang: SupportedLang) -> Result<(), LocalizationError> {
        if !self.bundles.contains_key(&lang) {
            return Err(LocalizationError::UnsupportedLanguage(lang.code().to_string()));
        }
        self.current = lang;
        Ok(())
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for lang in [self.current, FALLBACK_LANG] {
            let Some(b) = self.bundles.get(&lang) else {
                continue;
            };
            if let Some(pat) = b.get_message(id).and_then(|m| m.value()) {
                let mut errors = vec![];
                let s = b.format_pattern(pat, args, &mut errors).to_string();
                if !errors.is_empty() {
                    log::debug!("fluent errors for {id}: {errors:?}");
                }
                return s;
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Initialize localization. `None` picks the system locale; an unavailable
/// language falls back to English.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        mgr.set_current(lang).or_else(|_| mgr.set_current(FALLBACK_LANG))
    })
}

pub fn set_current_language(lang: SupportedLang) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| cell.borrow_mut().set_current(lang))
}

pub fn get_current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with string arguments.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

/// Translate a message with numeric arguments so plural selectors apply.
pub fn translate_counts(message_id: &str, args: &[(&str, u64)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, FluentValue::from(*v));
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_default_for_new_threads() {
        assert_eq!(get_current_language(), SupportedLang::English);
        assert_eq!(translate("tag-pro"), "Pro");
        assert_eq!(translate("tag-completed"), "Completed");
    }

    #[test]
    fn plural_selectors_use_numbers() {
        assert_eq!(translate_counts("duration-minutes", &[("minutes", 1)]), "1 min");
        assert_eq!(translate_counts("duration-minutes", &[("minutes", 14)]), "14 mins");
        assert_eq!(
            translate_counts("duration-hours-minutes", &[("hours", 2), ("minutes", 48)]),
            "2 hrs, 48 mins"
        );
    }

    #[test]
    fn missing_key_is_visible() {
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }

    #[test]
    fn switching_language_falls_back_per_key() {
        set_current_language(SupportedLang::Russian).unwrap();
        assert_eq!(translate("tag-completed"), "Пройдено");
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
        set_current_language(SupportedLang::English).unwrap();
    }

    #[test]
    fn language_codes() {
        assert_eq!(SupportedLang::from_code("ru_RU"), Some(SupportedLang::Russian));
        assert_eq!(SupportedLang::from_code("en-GB"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_code("de"), None);
    }
}
