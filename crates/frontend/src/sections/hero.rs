//! Landing section: greeting, role, status badge, calls to action and the
//! profile portrait with its load-failure fallback.

use crate::shared::active_section::use_active_section;
use crate::shared::components::ui::{Button, Section};
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::types::SectionId;
use leptos::prelude::*;

const PROFILE_IMAGE: &str = "/perfil.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    let language = use_language();
    let sections = use_active_section();
    let (portrait_failed, set_portrait_failed) = signal(false);

    view! {
        <Section id=SectionId::Home class="hero">
            <div class="hero__grid">
                <div class="hero__portrait">
                    <Show
                        when=move || !portrait_failed.get()
                        fallback=|| view! { <span class="hero__portrait-fallback">"ÁM"</span> }
                    >
                        <img
                            src=PROFILE_IMAGE
                            alt="Álvaro Miñarro"
                            class="hero__portrait-image"
                            on:error=move |_| {
                                log::warn!("failed to load profile image {PROFILE_IMAGE}");
                                set_portrait_failed.set(true);
                            }
                        />
                    </Show>
                    <span class="hero__float hero__float--android">
                        <img src="/android.svg" alt="Android" />
                    </span>
                    <span class="hero__float hero__float--kotlin">
                        <img src="/kotlin.svg" alt="Kotlin" />
                    </span>
                    <span class="hero__float hero__float--compose">
                        <img src="/jetpackcompose.svg" alt="Jetpack Compose" />
                    </span>
                </div>

                <div class="hero__intro">
                    <p class="hero__greeting">{move || language.strings().hero.greeting}</p>
                    <h1 class="hero__name">{move || language.strings().hero.name}</h1>
                    <h2 class="hero__role">{move || language.strings().hero.role}</h2>
                    <p class="hero__education">{move || language.strings().hero.education}</p>
                    <p class="hero__description">{move || language.strings().hero.description}</p>

                    <div class="hero__badges">
                        <span class="badge badge--primary">
                            {move || language.strings().hero.badges.android_expert}
                        </span>
                        <span class="badge badge--accent">
                            {move || language.strings().hero.badges.kotlin_compose}
                        </span>
                        <span class="badge badge--neutral">
                            {move || language.strings().hero.badges.full_stack}
                        </span>
                    </div>

                    <div class="hero__status">
                        <span class="hero__status-dot"></span>
                        {move || language.strings().hero.status}
                    </div>

                    <div class="hero__actions">
                        <Button
                            variant="primary"
                            size="lg"
                            on_click=Callback::new(move |_| {
                                sections.navigate_to(SectionId::Contact)
                            })
                        >
                            {move || language.strings().hero.cta}
                            {icon("arrow-right")}
                        </Button>
                        <Button variant="secondary" size="lg" href="#" target="_blank">
                            {icon("download")}
                            {move || language.strings().hero.download_cv}
                        </Button>
                    </div>
                </div>
            </div>

            <button
                class="hero__scroll-hint"
                on:click=move |_| sections.navigate_to(SectionId::About)
            >
                <span>{move || language.strings().hero.scroll}</span>
                {icon("chevron-down")}
            </button>
        </Section>
    }
}
