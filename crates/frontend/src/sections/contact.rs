use crate::shared::components::ui::Section;
use crate::shared::icons::icon;
use crate::shared::language::use_language;
use contracts::data::CONTACT_LINKS;
use contracts::types::{ContactLink, SectionId};
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let language = use_language();

    view! {
        <Section id=SectionId::Contact class="contact">
            <div class="section__header">
                <span class="section__header-icon">{icon("mail")}</span>
                <h2 class="section__title">{move || language.strings().contact.title}</h2>
                <p class="section__subtitle">{move || language.strings().contact.subtitle}</p>
            </div>

            <div class="contact__grid">
                <div class="contact__text">
                    <h3 class="contact__cta-title">
                        {move || language.strings().contact.cta_title}
                    </h3>
                    <p class="contact__cta-description">
                        {move || language.strings().contact.cta_description}
                    </p>
                    <div class="contact__status">
                        <span class="contact__status-dot"></span>
                        {move || language.strings().hero.status}
                    </div>
                </div>

                <div class="contact__links">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| view! { <ContactCard link=link /> })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn ContactCard(link: &'static ContactLink) -> impl IntoView {
    let language = use_language();
    let is_email = link.name == "Email";

    view! {
        <a
            class=format!("contact-card {}", link.color)
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
        >
            <span class="contact-card__icon">
                {if link.icon.starts_with('/') {
                    view! { <img src=link.icon alt=link.name /> }.into_any()
                } else {
                    view! { <span class="contact-card__glyph">{link.icon}</span> }.into_any()
                }}
            </span>
            <span class="contact-card__body">
                <span class="contact-card__name">
                    {move || {
                        if is_email { language.strings().contact.links.email } else { link.name }
                    }}
                </span>
                <span class="contact-card__hint">
                    {move || {
                        let links = &language.strings().contact.links;
                        if is_email {
                            links.email_hint.to_string()
                        } else {
                            format!("{} {}", links.connect_hint, link.name)
                        }
                    }}
                </span>
            </span>
            {icon("external-link")}
        </a>
    }
}
