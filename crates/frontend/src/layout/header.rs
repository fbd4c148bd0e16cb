//! Fixed page header: section navigation with active highlight, language
//! and theme toggles, and a collapsible mobile menu.

use crate::shared::active_section::use_active_section;
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use crate::shared::theme::use_theme;
use contracts::i18n::TranslationBag;
use contracts::types::{SectionId, Theme};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Past this scroll offset the header gets its solid background.
const SCROLLED_AFTER_PX: f64 = 20.0;

fn nav_label(bag: &'static TranslationBag, section: SectionId) -> &'static str {
    match section {
        SectionId::Home => bag.nav.home,
        SectionId::About => bag.nav.about,
        SectionId::Technologies => bag.nav.technologies,
        SectionId::Experience => bag.nav.experience,
        SectionId::Contact => bag.nav.contact,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let language = use_language();
    let theme = use_theme();
    let sections = use_active_section();
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Window scroll listener driving the header background. The header
    // lives for the whole app, so the closure is leaked on purpose.
    Effect::new(move |_| {
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let offset = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            set_scrolled.set(offset > SCROLLED_AFTER_PX);
        });
        if let Some(win) = window() {
            let _ =
                win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            on_scroll.forget();
        }
    });

    let navigate = move |section: SectionId| {
        sections.navigate_to(section);
        set_menu_open.set(false);
    };

    let nav_buttons = move |extra_class: &'static str| {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        class=move || {
                            let state = if sections.get() == section { "is-active" } else { "" };
                            format!("header__nav-link {extra_class} {state}")
                        }
                        on:click=move |_| navigate(section)
                    >
                        {move || nav_label(language.strings(), section)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if scrolled.get() { "header header--scrolled" } else { "header" }
        }>
            <nav class="header__inner">
                <button class="header__logo" on:click=move |_| navigate(SectionId::Home)>
                    "Álvaro Miñarro"
                </button>

                <div class="header__nav">{nav_buttons("")}</div>

                <div class="header__controls">
                    <button
                        class="header__control"
                        aria-label=move || {
                            format!("Switch to {}", language.get().toggled().code())
                        }
                        on:click=move |_| language.toggle()
                    >
                        {icon("globe")}
                        <span>{move || language.get().toggled().code().to_uppercase()}</span>
                    </button>

                    <button
                        class="header__control"
                        aria-label="Toggle color theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || {
                            if theme.get() == Theme::Dark { icon("sun") } else { icon("moon") }
                        }}
                    </button>

                    <button
                        class="header__control header__menu-toggle"
                        aria-label="Toggle mobile menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="header__mobile-menu">
                    {nav_buttons("header__nav-link--mobile")}
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::i18n::{EN, ES};

    #[test]
    fn nav_labels_cover_every_section_in_both_languages() {
        for bag in [&ES, &EN] {
            for section in SectionId::ALL {
                assert!(!nav_label(bag, section).is_empty());
            }
        }
        assert_eq!(nav_label(&ES, SectionId::Home), "Inicio");
        assert_eq!(nav_label(&EN, SectionId::Contact), "Contact");
    }
}
