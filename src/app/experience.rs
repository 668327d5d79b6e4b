use leptos::{either::*, prelude::*};

use crate::{
    content::{portfolio, ExperienceEntry},
    sections::SectionId,
    state::ThemeMode,
};

use super::components::{ContentUnavailable, SectionHeading, TechChips};

#[component]
pub fn Experience(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let body = match portfolio() {
        Ok(p) => Either::Left(view! { <Timeline entries=p.experience.as_slice() theme /> }),
        Err(e) => Either::Right(view! { <ContentUnavailable error=e /> }),
    };

    view! {
        <section
            id=SectionId::Experience.anchor()
            class=move || format!("py-24 {}", theme.get().pick("bg-gray-800", "bg-gray-100"))
        >
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    title="Experience"
                    intro="My professional journey and work experience in the software development industry."
                    theme
                />
                {body}
            </div>
        </section>
    }
}

#[component]
fn Timeline(entries: &'static [ExperienceEntry], #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    view! {
        <div class="relative">
            <div class=move || {
                format!(
                    "absolute left-0 md:left-1/2 h-full w-0.5 transform -translate-x-1/2 {}",
                    theme.get().pick("bg-gray-700", "bg-gray-300"),
                )
            }></div>
            <div class="space-y-12">
                {entries
                    .iter()
                    .enumerate()
                    .map(move |(index, entry)| view! { <TimelineItem entry index theme /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(
    entry: &'static ExperienceEntry,
    index: usize,
    #[prop(into)] theme: Signal<ThemeMode>,
) -> impl IntoView {
    // alternate sides of the line on wide screens
    let side = if index % 2 == 0 {
        "md:ml-auto"
    } else {
        "md:mr-auto md:pl-0 pl-8"
    };

    view! {
        <div class="relative">
            <div class=move || {
                format!(
                    "absolute left-0 md:left-1/2 -translate-x-1/2 top-0 z-10 w-5 h-5 rounded-full border-4 animate-zoom-in {}",
                    theme.get().pick("bg-gray-900 border-blue-500", "bg-white border-blue-600"),
                )
            }></div>

            <div class=format!("md:w-5/12 animate-fade-up {side}") style="animation-delay: 300ms">
                <div class=move || {
                    format!("p-6 rounded-xl shadow-lg {}", theme.get().pick("bg-gray-900", "bg-white"))
                }>
                    <h3 class="text-xl font-bold mb-1">{entry.role.as_str()}</h3>
                    <h4 class=move || {
                        format!("text-lg mb-3 {}", theme.get().pick("text-blue-400", "text-blue-600"))
                    }>{entry.company.as_str()}</h4>

                    <div class="flex flex-wrap gap-4 mb-4 text-sm opacity-80">
                        <div class="flex items-center">
                            <span class="mr-1" aria-hidden="true">"📅"</span>
                            <span>{entry.period.as_str()}</span>
                        </div>
                        <div class="flex items-center">
                            <span class="mr-1" aria-hidden="true">"📍"</span>
                            <span>{entry.location.as_str()}</span>
                        </div>
                    </div>

                    <p class="mb-4 opacity-90">{entry.description.as_str()}</p>

                    {(!entry.achievements.is_empty())
                        .then(|| {
                            view! {
                                <div class="mb-4">
                                    <h5 class="font-semibold mb-2">"Key Achievements:"</h5>
                                    <ul class="list-disc pl-5 space-y-1 opacity-90">
                                        {entry
                                            .achievements
                                            .iter()
                                            .map(|a| view! { <li>{a.as_str()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}

                    <div class="flex flex-wrap gap-2">
                        <TechChips items=entry.technologies.as_slice() theme size="px-2 py-1 text-xs" />
                    </div>
                </div>
            </div>
        </div>
    }
}
