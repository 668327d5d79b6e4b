use leptos::{either::*, prelude::*};

use crate::{
    content::{portfolio, ExpertiseCard, SkillEntry, Skills as SkillTable},
    sections::SectionId,
    state::{CategoryFilter, ThemeMode},
};

use super::components::{ContentUnavailable, SectionHeading};

#[component]
pub fn Skills(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let body = match portfolio() {
        Ok(p) => Either::Left(view! {
            <SkillBoard skills=&p.skills theme />
            <Expertise cards=p.skills.expertise.as_slice() theme />
        }),
        Err(e) => Either::Right(view! { <ContentUnavailable error=e /> }),
    };

    view! {
        <section
            id=SectionId::Skills.anchor()
            class=move || format!("py-24 {}", theme.get().pick("bg-gray-900", "bg-white"))
        >
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading
                    title="Skills"
                    intro="My technical skills and expertise across various technologies and tools."
                    theme
                />
                {body}
            </div>
        </section>
    }
}

#[component]
fn SkillBoard(skills: &'static SkillTable, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::new(skills));

    let visible = move || {
        filter.with(|f| {
            debug_assert!(
                skills.has_category(f.active()),
                "skill category '{}' has no skill list",
                f.active()
            );
            f.visible(skills)
        })
    };

    view! {
        <div class="flex justify-center mb-12 overflow-x-auto">
            <div class="flex space-x-2 md:space-x-4">
                {skills
                    .categories
                    .iter()
                    .map(move |category| {
                        let id = category.id.as_str();
                        view! {
                            <button
                                on:click=move |_| set_filter.update(|f| f.select(id))
                                class=move || {
                                    let mode = theme.get();
                                    let colors = if filter.with(|f| f.is_active(id)) {
                                        mode.pick("bg-blue-500 text-white", "bg-blue-600 text-white")
                                    } else {
                                        mode.pick(
                                            "bg-gray-800 hover:bg-gray-700 text-gray-200",
                                            "bg-gray-200 hover:bg-gray-300 text-gray-800",
                                        )
                                    };
                                    format!(
                                        "px-4 py-2 rounded-full text-sm md:text-base whitespace-nowrap transition-colors hover:scale-105 active:scale-95 {colors}",
                                    )
                                }
                            >
                                {category.name.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="grid md:grid-cols-2 gap-x-12 gap-y-6">
            {move || {
                visible()
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| view! { <SkillBar skill index theme /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static SkillEntry, index: usize, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let delay = format!("{}ms", index * 100);

    view! {
        <div class="mb-4 animate-slide-right" style:animation-delay=delay.clone()>
            <div class="flex justify-between mb-2">
                <span class="font-medium">{skill.name.as_str()}</span>
                {skill
                    .level
                    .map(|level| {
                        view! {
                            <span class=move || {
                                theme.get().pick("text-blue-400", "text-blue-600")
                            }>{format!("{level}%")}</span>
                        }
                    })}
            </div>
            {skill
                .level
                .map(|level| {
                    view! {
                        <div class=move || {
                            format!(
                                "h-2 w-full rounded-full {}",
                                theme.get().pick("bg-gray-700", "bg-gray-200"),
                            )
                        }>
                            <div
                                class=move || {
                                    format!(
                                        "h-full rounded-full animate-grow {}",
                                        theme.get().pick("bg-blue-500", "bg-blue-600"),
                                    )
                                }
                                style:width=format!("{level}%")
                                style:animation-delay=delay
                            ></div>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn Expertise(cards: &'static [ExpertiseCard], #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    (!cards.is_empty())
        .then(|| {
            view! {
                <div class="mt-20 animate-fade-up" style="animation-delay: 400ms">
                    <h3 class="text-2xl font-semibold text-center mb-10">"Technical Expertise"</h3>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                        {cards
                            .iter()
                            .enumerate()
                            .map(|(index, card)| {
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "p-6 rounded-xl text-center shadow-lg transition-transform hover:-translate-y-2 hover:scale-105 animate-fade-up {}",
                                                theme.get().pick("bg-gray-800", "bg-gray-100"),
                                            )
                                        }
                                        style:animation-delay=format!("{}ms", 200 + index * 100)
                                    >
                                        <div class="text-4xl mb-4">{card.icon.as_str()}</div>
                                        <h4 class="text-lg font-semibold mb-1">{card.title.as_str()}</h4>
                                        <p class=move || {
                                            format!(
                                                "font-medium {}",
                                                theme.get().pick("text-blue-400", "text-blue-600"),
                                            )
                                        }>{card.value.as_str()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
}
