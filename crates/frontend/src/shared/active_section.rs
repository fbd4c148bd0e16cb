//! Active-section tracker.
//!
//! Two writers feed the `active` signal: explicit navigation (nav clicks)
//! and a passive IntersectionObserver over the five fixed sections. An
//! explicit write may be transiently overwritten by an observation event
//! fired during the scroll animation; position and highlight reconcile
//! once the animation settles on the target, so this is accepted jitter
//! rather than something to synchronize away.

use contracts::types::SectionId;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Height of the fixed header; scroll targets land just below it.
const HEADER_OFFSET_PX: i32 = 80;
/// A section counts as visible once 30% of it is on screen.
const VISIBILITY_THRESHOLD: f64 = 0.3;
/// Ignore a band near the top and bottom edges of the viewport.
const VIEWPORT_MARGIN: &str = "-100px 0px -100px 0px";

fn scroll_target_top(offset_top: i32) -> f64 {
    f64::from(offset_top - HEADER_OFFSET_PX)
}

/// Active-section context type.
#[derive(Clone, Copy)]
pub struct ActiveSectionContext {
    /// Section currently highlighted in the nav.
    pub active: RwSignal<SectionId>,
}

impl ActiveSectionContext {
    fn new() -> Self {
        Self {
            active: RwSignal::new(SectionId::Home),
        }
    }

    pub fn get(&self) -> SectionId {
        self.active.get()
    }

    /// Smooth-scrolls to `section` and marks it active immediately; the
    /// signal write does not wait for the animation.
    pub fn navigate_to(&self, section: SectionId) {
        if let Some(win) = window() {
            let target = win
                .document()
                .and_then(|document| document.get_element_by_id(section.id()))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = target {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(scroll_target_top(element.offset_top()));
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        }
        self.active.set(section);
    }
}

/// Keeps the observer and its JS callback alive together; dropping the
/// closure while the observer still fires would leave a dangling shim.
struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

impl SectionObserver {
    fn register(active: RwSignal<SectionId>) -> Option<Self> {
        let document = window()?.document()?;

        let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    if let Some(section) = SectionId::from_id(&entry.target().id()) {
                        active.set(section);
                    }
                }
            }
        });

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        options.set_root_margin(VIEWPORT_MARGIN);

        let observer = match web_sys::IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("failed to create section observer: {err:?}");
                return None;
            }
        };

        for section in SectionId::ALL {
            if let Some(element) = document.get_element_by_id(section.id()) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Provides the active-section context and wires up passive observation.
#[component]
pub fn ActiveSectionProvider(children: Children) -> impl IntoView {
    let ctx = ActiveSectionContext::new();
    provide_context(ctx);

    // The section elements exist only after the children have rendered,
    // so registration happens in an effect.
    let registration = StoredValue::new_local(None::<SectionObserver>);
    Effect::new(move |_| {
        if registration.with_value(|observer| observer.is_none()) {
            registration.set_value(SectionObserver::register(ctx.active));
        }
    });
    on_cleanup(move || {
        registration.update_value(|slot| {
            if let Some(observer) = slot.take() {
                observer.disconnect();
            }
        });
    });

    children()
}

/// Hook to use the active-section context.
pub fn use_active_section() -> ActiveSectionContext {
    use_context::<ActiveSectionContext>()
        .expect("ActiveSectionContext not found. Wrap your app with ActiveSectionProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_accounts_for_the_fixed_header() {
        assert_eq!(scroll_target_top(200), 120.0);
        assert_eq!(scroll_target_top(80), 0.0);
        // The browser clamps negative targets to the top of the page.
        assert_eq!(scroll_target_top(0), -80.0);
    }
}
