//! Work-history timeline with per-entry expand/collapse. Collapsed cards
//! truncate their technology chips and show a "+N" overflow count.

use crate::shared::components::ui::{Button, Section};
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::data::EXPERIENCE_ENTRIES;
use contracts::filter::{overflow_count, visible_technologies, ExpandedSet, COLLAPSED_TECH_LIMIT};
use contracts::i18n::employment_label;
use contracts::types::{ExperienceEntry, SectionId};
use leptos::prelude::*;

#[component]
pub fn Experience() -> impl IntoView {
    let language = use_language();
    let expanded = RwSignal::new(ExpandedSet::new());

    view! {
        <Section id=SectionId::Experience class="experience">
            <div class="section__header">
                <span class="section__header-icon">{icon("briefcase")}</span>
                <h2 class="section__title">{move || language.strings().experience.title}</h2>
                <p class="section__subtitle">
                    {move || language.strings().experience.subtitle}
                </p>
            </div>

            <div class="experience__timeline">
                {EXPERIENCE_ENTRIES
                    .iter()
                    .map(|entry| view! { <ExperienceCard entry=entry expanded=expanded /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExperienceCard(
    entry: &'static ExperienceEntry,
    expanded: RwSignal<ExpandedSet>,
) -> impl IntoView {
    let language = use_language();
    let is_expanded = move || expanded.with(|set| set.contains(entry.id));
    let is_personal = entry.company == "Proyecto Personal";
    let expandable =
        entry.technologies.len() > COLLAPSED_TECH_LIMIT || !entry.achievements.is_empty();

    view! {
        <article class="experience-card">
            <span class=if is_personal {
                "experience-card__kind experience-card__kind--personal"
            } else {
                "experience-card__kind experience-card__kind--professional"
            }>
                {move || {
                    let strings = &language.strings().experience;
                    if is_personal { strings.personal } else { strings.professional }
                }}
            </span>

            <h3 class="experience-card__position">{entry.position}</h3>
            <p class="experience-card__company">{entry.company}</p>

            <div class="experience-card__meta">
                <span class="experience-card__meta-item">
                    {icon("calendar")}
                    {move || {
                        format!("{} - {}", entry.period, language.strings().experience.present)
                    }}
                </span>
                {entry
                    .location
                    .map(|location| {
                        view! {
                            <span class="experience-card__meta-item">
                                {icon("map-pin")}
                                {location}
                            </span>
                        }
                    })}
                {entry
                    .employment
                    .map(|employment| {
                        view! {
                            <span class="experience-card__employment">
                                {move || employment_label(language.get(), employment)}
                            </span>
                        }
                    })}
            </div>

            {entry
                .project_image
                .map(|image| {
                    view! {
                        <img
                            src=image
                            alt=format!("{} project", entry.company)
                            class="experience-card__image"
                            on:error=move |_| {
                                log::warn!("failed to load project image {image}");
                            }
                        />
                    }
                })}

            <p class="experience-card__description">{entry.description}</p>

            <div class="experience-card__technologies">
                <h4 class="experience-card__subtitle">
                    {icon("award")}
                    {move || language.strings().experience.used_technologies}
                </h4>
                <div class="experience-card__chips">
                    {move || {
                        visible_technologies(entry.technologies, is_expanded())
                            .iter()
                            .map(|tech| view! { <span class="chip">{*tech}</span> })
                            .collect_view()
                    }}
                    <Show when=move || {
                        overflow_count(entry.technologies.len(), is_expanded()) > 0
                    }>
                        <span class="chip chip--overflow">
                            {move || {
                                format!(
                                    "+{}",
                                    overflow_count(entry.technologies.len(), is_expanded()),
                                )
                            }}
                        </span>
                    </Show>
                </div>
            </div>

            <Show when=move || is_expanded() && !entry.achievements.is_empty()>
                <div class="experience-card__achievements">
                    <h4 class="experience-card__subtitle">
                        {icon("award")}
                        {move || language.strings().experience.achievements}
                    </h4>
                    <ul>
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| view! { <li>{*achievement}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </Show>

            <Show when=move || expandable>
                <Button
                    variant="ghost"
                    size="sm"
                    class="experience-card__toggle"
                    on_click=Callback::new(move |_| {
                        expanded.update(|set| set.toggle(entry.id));
                    })
                >
                    {move || {
                        let strings = &language.strings().experience;
                        if is_expanded() { strings.view_less } else { strings.view_more }
                    }}
                    {move || {
                        if is_expanded() { icon("chevron-up") } else { icon("chevron-down") }
                    }}
                </Button>
            </Show>
        </article>
    }
}
