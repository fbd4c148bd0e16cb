//! Theme management module for the application.
//!
//! Provides a context-based binary light/dark theme with localStorage
//! persistence. When nothing is persisted the host's
//! `prefers-color-scheme` hint decides.

use contracts::types::Theme;
use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn save_theme_to_storage(theme: Theme) {
    let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("localStorage unavailable; theme preference kept in memory only");
        return;
    };
    let _ = storage.set_item(THEME_STORAGE_KEY, theme.code());
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Sets `data-theme` on the root element and toggles the `dark` class,
/// the hooks the stylesheet keys off.
fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.code());
    let class_list = root.class_list();
    let _ = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Set the theme, persist it and restyle the document.
    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }
}

/// Provides the theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = Theme::resolve(load_theme_from_storage().as_deref(), prefers_dark());
    apply_theme(initial);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
