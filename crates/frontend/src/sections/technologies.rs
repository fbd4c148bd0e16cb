//! Technologies grid: level legend, category filter and one card per
//! visible technology. Filtering is a stable pass over the static table.

use crate::shared::components::ui::Section;
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::data::TECHNOLOGIES;
use contracts::filter::filter_technologies;
use contracts::i18n::{level_label, TranslationBag};
use contracts::types::{Category, CategoryFilter, Level, SectionId, Technology};
use leptos::prelude::*;

fn filter_label(bag: &'static TranslationBag, filter: CategoryFilter) -> &'static str {
    let categories = &bag.technologies.categories;
    match filter {
        CategoryFilter::All => categories.all,
        CategoryFilter::Only(Category::Mobile) => categories.mobile,
        CategoryFilter::Only(Category::Frontend) => categories.frontend,
        CategoryFilter::Only(Category::Backend) => categories.backend,
        CategoryFilter::Only(Category::Database) => categories.database,
        CategoryFilter::Only(Category::Tools) => categories.tools,
    }
}

fn filter_icon(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All | CategoryFilter::Only(Category::Mobile) => "cpu",
        CategoryFilter::Only(Category::Frontend) => "palette",
        CategoryFilter::Only(Category::Backend) => "server",
        CategoryFilter::Only(Category::Database) => "database",
        CategoryFilter::Only(Category::Tools) => "wrench",
    }
}

#[component]
pub fn Technologies() -> impl IntoView {
    let language = use_language();
    let (active_filter, set_active_filter) = signal(CategoryFilter::default());

    view! {
        <Section id=SectionId::Technologies class="technologies">
            <div class="section__header">
                <span class="section__header-icon">{icon("cpu")}</span>
                <h2 class="section__title">{move || language.strings().technologies.title}</h2>
                <p class="section__subtitle">
                    {move || language.strings().technologies.subtitle}
                </p>
            </div>

            <div class="technologies__legend">
                {[Level::Learning, Level::Advanced, Level::Expert]
                    .into_iter()
                    .map(|level| {
                        view! {
                            <span class=format!("legend legend--{}", level.stars())>
                                {(0..level.stars()).map(|_| icon("star")).collect_view()}
                                {move || level_label(language.get(), level)}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="technologies__filters">
                {CategoryFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == filter {
                                        "filter-button is-active"
                                    } else {
                                        "filter-button"
                                    }
                                }
                                on:click=move |_| set_active_filter.set(filter)
                            >
                                {icon(filter_icon(filter))}
                                {move || filter_label(language.strings(), filter)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="technologies__grid">
                <For
                    each=move || filter_technologies(&TECHNOLOGIES, active_filter.get())
                    key=|tech| tech.name
                    children=move |tech| view! { <TechCard tech=tech /> }
                />
            </div>
        </Section>
    }
}

#[component]
fn TechCard(tech: &'static Technology) -> impl IntoView {
    let language = use_language();

    view! {
        <div class=format!("tech-card {}", tech.color)>
            {tech.level
                .map(|level| {
                    view! {
                        <span class=format!("tech-card__level tech-card__level--{}", level.stars())>
                            {(0..level.stars()).map(|_| icon("star")).collect_view()}
                        </span>
                    }
                })}
            <div class="tech-card__icon">
                <TechIcon tech=tech />
            </div>
            <h3 class="tech-card__name">{tech.name}</h3>
            {tech.level
                .map(|level| {
                    view! {
                        <p class="tech-card__level-label">
                            {move || level_label(language.get(), level)}
                        </p>
                    }
                })}
        </div>
    }
}

/// Icon slot of a card: an image for asset paths, plain text for emoji.
/// A failed image load falls back to the technology's initial and is
/// logged for diagnostics, never surfaced.
#[component]
fn TechIcon(tech: &'static Technology) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    if tech.icon.starts_with('/') {
        view! {
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! {
                        <span class="tech-card__glyph">
                            {tech.name.chars().next().unwrap_or('?')}
                        </span>
                    }
                }
            >
                <img
                    src=tech.icon
                    alt=tech.name
                    on:error=move |_| {
                        log::warn!("failed to load technology icon {}", tech.icon);
                        set_failed.set(true);
                    }
                />
            </Show>
        }
        .into_any()
    } else {
        view! { <span class="tech-card__glyph">{tech.icon}</span> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::i18n::{EN, ES};

    #[test]
    fn filter_labels_exist_for_every_button() {
        for bag in [&ES, &EN] {
            for filter in CategoryFilter::ALL {
                assert!(!filter_label(bag, filter).is_empty());
            }
        }
        assert_eq!(filter_label(&ES, CategoryFilter::All), "Todas");
        assert_eq!(
            filter_label(&EN, CategoryFilter::Only(Category::Database)),
            "Databases"
        );
    }
}
