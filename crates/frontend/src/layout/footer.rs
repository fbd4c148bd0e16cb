use crate::shared::icons::icon;
use crate::shared::language::use_language;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let language = use_language();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__made-with">
                    <span>{move || language.strings().footer.made_with}</span>
                    <span class="footer__icon footer__icon--heart">{icon("heart")}</span>
                    <span>{move || language.strings().footer.and}</span>
                    <span class="footer__icon footer__icon--code">{icon("code")}</span>
                    <span>"Rust + Leptos"</span>
                </div>
                <p class="footer__rights">
                    {move || format!("© {} Álvaro. {}", year, language.strings().footer.rights)}
                </p>
            </div>
        </footer>
    }
}
