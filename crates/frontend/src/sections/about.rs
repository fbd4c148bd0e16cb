use crate::shared::components::ui::{Button, Section};
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::types::SectionId;
use leptos::prelude::*;

struct SkillBar {
    name: &'static str,
    /// Rough self-assessment in percent, display-only.
    percent: u8,
    color: &'static str,
}

const SKILLS: [SkillBar; 6] = [
    SkillBar { name: "Android Development", percent: 95, color: "tech-green" },
    SkillBar { name: "Kotlin & Jetpack Compose", percent: 95, color: "tech-purple" },
    SkillBar { name: "JavaScript/TypeScript", percent: 85, color: "tech-blue" },
    SkillBar { name: "Angular & React", percent: 80, color: "tech-red" },
    SkillBar { name: "Kotlin Multiplatform", percent: 60, color: "tech-yellow" },
    SkillBar { name: "AWS & Firebase", percent: 75, color: "tech-orange" },
];

#[component]
pub fn About() -> impl IntoView {
    let language = use_language();

    view! {
        <Section id=SectionId::About class="about">
            <div class="section__header">
                <span class="section__header-icon">{icon("user")}</span>
                <h2 class="section__title">{move || language.strings().about.title}</h2>
                <p class="section__subtitle">{move || language.strings().about.subtitle}</p>
            </div>

            <div class="about__grid">
                <div class="about__text">
                    {move || {
                        language
                            .strings()
                            .about
                            .description
                            .iter()
                            .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                            .collect_view()
                    }}

                    <div class="about__cta">
                        <Button variant="primary" size="lg" href="#" target="_blank">
                            {icon("download")}
                            {move || language.strings().about.download_cv}
                        </Button>
                    </div>
                </div>

                <div class="about__portrait">
                    <img src="/perfil.jpg" alt="Álvaro Miñarro" class="about__portrait-image" />
                </div>
            </div>

            <div class="about__skills">
                <h3 class="about__skills-title">{move || language.strings().about.skills}</h3>
                <div class="about__skills-grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill">
                                    <div class="skill__row">
                                        <span class="skill__name">{skill.name}</span>
                                        <span class="skill__percent">
                                            {format!("{}%", skill.percent)}
                                        </span>
                                    </div>
                                    <div class="skill__track">
                                        <div
                                            class=format!("skill__bar {}", skill.color)
                                            style=format!("width: {}%", skill.percent)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}
