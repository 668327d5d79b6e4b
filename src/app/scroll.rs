use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    sections::{ActiveSectionTracker, SectionId, SectionLayout},
    state::ThemeMode,
};

/// Vertical window scroll offset. The underlying listener is attached when
/// the calling component mounts and removed when its owner is disposed.
pub fn use_scroll_offset() -> Signal<f64> {
    let (_, y) = use_window_scroll();
    y
}

/// Active section for nav highlighting, recomputed on every scroll tick.
pub fn use_active_section(scroll_y: Signal<f64>) -> ReadSignal<SectionId> {
    let (active, set_active) = signal(SectionId::default());

    Effect::new(move |prev: Option<ActiveSectionTracker>| {
        let mut tracker = prev.unwrap_or_default();
        let y = scroll_y.get();
        if tracker.update(y, &measure_sections()) {
            log::debug!("active section: {} (scroll {y})", tracker.active());
            set_active.set(tracker.active());
        }
        tracker
    });

    active
}

/// Reads each section anchor's offset and height from the rendered page.
/// Anchors that are missing or not HTML elements are left out.
fn measure_sections() -> Vec<SectionLayout> {
    let document = document();
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document
                .get_element_by_id(section.anchor())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionLayout::new(
                section,
                el.offset_top().into(),
                el.offset_height().into(),
            ))
        })
        .collect()
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn ScrollTopButton(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] theme: Signal<ThemeMode>,
) -> impl IntoView {
    move || {
        visible.get().then(move || {
            view! {
                <button
                    on:click=move |_| scroll_to_top()
                    aria-label="Scroll to top"
                    class=move || {
                        format!(
                            "fixed bottom-6 right-6 p-3 rounded-full shadow-lg transition-colors z-50 animate-fade-up hover:scale-110 active:scale-90 {}",
                            theme.get().pick("bg-gray-800 hover:bg-gray-700", "bg-white hover:bg-gray-100"),
                        )
                    }
                >
                    <span class="block w-6 h-6 text-xl leading-6">"↑"</span>
                </button>
            }
        })
    }
}
