use contracts::types::SectionId;
use leptos::prelude::*;

/// Page-section wrapper. The DOM id comes from the fixed [`SectionId`]
/// set; it is what the active-section observer and anchor scrolling key
/// off, so sections never invent their own ids.
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id.id()
            class=move || format!("section {}", class.get().unwrap_or_default())
        >
            <div class="section__container">{children()}</div>
        </section>
    }
}
