//! Language state controller.
//!
//! Holds the active UI language in a context-provided signal, persists it
//! in localStorage, and hands out the matching static translation bag.
//! When storage is unavailable the preference simply lives in memory for
//! the session and the locale-hint fallback applies again on the next load.

use contracts::i18n::{translations, TranslationBag};
use contracts::types::Language;
use leptos::prelude::*;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "language";

fn load_language_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
}

fn save_language_to_storage(language: Language) {
    let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("localStorage unavailable; language preference kept in memory only");
        return;
    };
    if storage
        .set_item(LANGUAGE_STORAGE_KEY, language.code())
        .is_err()
    {
        log::warn!("failed to persist language preference");
    }
}

/// Mirrors the active language into `<html lang>` for accessibility and
/// SEO tooling.
fn apply_document_lang(language: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("lang", language.code());
    }
}

fn detect_initial_language() -> Language {
    let stored = load_language_from_storage();
    let hint = window().and_then(|w| w.navigator().language());
    Language::resolve(stored.as_deref(), hint.as_deref())
}

/// Language context type.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    /// Current language signal.
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn get(&self) -> Language {
        self.language.get()
    }

    /// Flips es↔en, persists the new value and updates the document
    /// language attribute.
    pub fn toggle(&self) {
        let next = self.language.get_untracked().toggled();
        self.language.set(next);
        save_language_to_storage(next);
        apply_document_lang(next);
    }

    /// Strings for the current language. The bags are complete statics,
    /// so consumers never see a partial set.
    pub fn strings(&self) -> &'static TranslationBag {
        translations(self.language.get())
    }
}

/// Provides the language context to children components.
#[component]
pub fn LanguageProvider(children: Children) -> impl IntoView {
    let initial = detect_initial_language();
    apply_document_lang(initial);

    provide_context(LanguageContext {
        language: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the language context.
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("LanguageContext not found. Wrap your app with LanguageProvider.")
}
