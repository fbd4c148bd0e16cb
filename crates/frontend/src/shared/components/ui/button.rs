use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost) and sizes
/// (sm, md, lg). With `href` set it renders an anchor instead, keeping
/// the same styling.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm", or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Render as a link to this URL instead of a button
    #[prop(optional, into)]
    href: MaybeProp<String>,
    /// Anchor target, only used together with `href`
    #[prop(optional, into)]
    target: MaybeProp<String>,
    /// Click event handler
    #[prop(optional, into)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref().unwrap_or("md") {
        "sm" => "button--small",
        "lg" => "button--large",
        _ => "",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let full_class =
        move || format!("button {} {} {}", variant_class(), size_class(), additional_class());

    // A button never becomes a link after mount, so the branch is taken once.
    if let Some(href) = href.get_untracked() {
        let target = target.get_untracked();
        let rel = target
            .as_deref()
            .eq(&Some("_blank"))
            .then_some("noopener noreferrer");
        view! {
            <a class=full_class href=href target=target rel=rel>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <button
                type="button"
                class=full_class
                on:click=move |ev| {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any()
    }
}
