use leptos::prelude::*;

use crate::{content::ContentError, state::ThemeMode};

#[component]
pub fn SectionHeading(
    title: &'static str,
    intro: &'static str,
    #[prop(into)] theme: Signal<ThemeMode>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 animate-fade-up">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <div class=move || {
                format!("h-1 w-20 mx-auto {}", theme.get().pick("bg-blue-500", "bg-blue-600"))
            }></div>
            <p class="mt-6 max-w-2xl mx-auto text-lg opacity-90">{intro}</p>
        </div>
    }
}

/// Technology labels as rounded chips.
#[component]
pub fn TechChips(
    items: &'static [String],
    #[prop(into)] theme: Signal<ThemeMode>,
    #[prop(default = "px-3 py-1 text-sm")] size: &'static str,
) -> impl IntoView {
    items
        .iter()
        .map(|tech| {
            view! {
                <span class=move || {
                    format!(
                        "{size} rounded-full {}",
                        theme.get().pick("bg-gray-700 text-blue-300", "bg-gray-200 text-blue-700"),
                    )
                }>{tech.as_str()}</span>
            }
        })
        .collect_view()
}

/// Shown in place of a section body when the bundled content didn't load.
#[component]
pub fn ContentUnavailable(error: &'static ContentError) -> impl IntoView {
    view! {
        <div class="p-4 rounded-md border border-red-500/40 text-center">
            <p class="font-medium text-red-500">"This section is unavailable right now."</p>
            <p class="mt-2 text-sm opacity-70">{error.to_string()}</p>
        </div>
    }
}
