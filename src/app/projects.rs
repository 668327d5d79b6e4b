use leptos::{either::*, prelude::*};

use crate::{
    content::{portfolio, Portfolio, ProjectEntry},
    sections::SectionId,
    state::{ExpansionState, ThemeMode},
};

use super::components::{ContentUnavailable, SectionHeading, TechChips};

#[component]
pub fn Projects(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let body = match portfolio() {
        Ok(p) => Either::Left(view! { <ProjectGrid portfolio=p theme /> }),
        Err(e) => Either::Right(view! { <ContentUnavailable error=e /> }),
    };

    view! {
        <section
            id=SectionId::Projects.anchor()
            class=move || format!("py-24 {}", theme.get().pick("bg-gray-800", "bg-gray-100"))
        >
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    title="Projects"
                    intro="A selection of my recent work, showcasing my skills and expertise in software development."
                    theme
                />
                {body}
            </div>
        </section>
    }
}

#[component]
fn ProjectGrid(portfolio: &'static Portfolio, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let (expansion, set_expansion) = signal(ExpansionState::default());
    let on_toggle = move |id: u32| {
        set_expansion.update(|state| state.toggle(id));
        let shown = expansion.with_untracked(|state| {
            state
                .resolve(&portfolio.projects)
                .map(|p| p.title.as_str())
        });
        log::debug!("expanded project: {shown:?}");
    };

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            {portfolio
                .projects
                .iter()
                .enumerate()
                .map(move |(index, project)| {
                    let expanded = Signal::derive(move || expansion.get().is_expanded(project.id));
                    view! {
                        <ProjectCard
                            project
                            index
                            expanded
                            on_toggle=move || on_toggle(project.id)
                            theme
                        />
                    }
                })
                .collect_view()}
        </div>
        <div class="mt-12 text-center animate-fade-in" style="animation-delay: 600ms">
            <a
                href=portfolio.profile.links.github.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class=move || {
                    format!(
                        "inline-flex items-center px-6 py-3 rounded-lg text-white font-semibold transition-transform hover:scale-105 active:scale-95 {}",
                        theme.get().pick("bg-blue-500 hover:bg-blue-600", "bg-blue-600 hover:bg-blue-700"),
                    )
                }
            >
                "View All Projects"
                <i class="devicon-github-plain ml-2"></i>
            </a>
        </div>
    }
}

#[component]
fn ProjectCard<F>(
    project: &'static ProjectEntry,
    index: usize,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: F,
    #[prop(into)] theme: Signal<ThemeMode>,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let accent = move || {
        theme
            .get()
            .pick("text-blue-400 hover:text-blue-300", "text-blue-600 hover:text-blue-500")
    };

    view! {
        <div
            class=move || {
                format!(
                    "rounded-xl overflow-hidden shadow-lg transition-all duration-300 hover:-translate-y-2 animate-fade-up {}",
                    theme.get().pick("bg-gray-900", "bg-white"),
                )
            }
            style:animation-delay=format!("{}ms", index * 200)
        >
            <div class="h-48 overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title.as_str()}</h3>
                <p class="opacity-90 mb-4 line-clamp-2">{project.description.as_str()}</p>

                {move || {
                    expanded
                        .get()
                        .then(move || {
                            view! {
                                <div class="mb-4 animate-expand">
                                    <p class="mb-4">{project.long_description.as_str()}</p>
                                    <div class="mb-4">
                                        <h4 class="font-semibold mb-2">"Technologies:"</h4>
                                        <div class="flex flex-wrap gap-2">
                                            <TechChips items=project.tech_stack.as_slice() theme />
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}

                <div class="flex justify-between items-center mt-4">
                    <button on:click=move |_| on_toggle() class=move || format!("text-sm {}", accent())>
                        {move || if expanded.get() { "Show Less" } else { "Learn More" }}
                    </button>
                    <div class="flex gap-4 text-sm">
                        {project
                            .links
                            .repo
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=move || accent()
                                        aria-label="Source code"
                                    >
                                        <i class="devicon-github-plain mr-1"></i>
                                        "Code"
                                    </a>
                                }
                            })}
                        {project
                            .links
                            .live
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=move || accent()
                                        aria-label="Live demo"
                                    >
                                        <i class="extra-link mr-1"></i>
                                        "Live"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
