use leptos::{either::*, prelude::*};

use crate::{
    content::portfolio,
    sections::{nav_items, NavItem, SectionId},
};

use super::ThemeState;

#[component]
pub fn NavBar(theme: ThemeState, #[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let brand = portfolio()
        .map(|p| p.profile.brand.as_str())
        .unwrap_or("DEV");

    let accent = move || theme.read().pick("text-blue-400", "text-blue-600");
    let link_class = move |item: NavItem, base: &'static str| {
        if active.get() == item.section {
            format!("{base} {}", accent())
        } else {
            format!("{base} hover:text-blue-500 transition-colors")
        }
    };

    let theme_icon = move || {
        if theme.read().is_dark() {
            Either::Left(view! { <span aria-hidden="true">"☀"</span> })
        } else {
            Either::Right(view! { <span aria-hidden="true">"☾"</span> })
        }
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 backdrop-blur-lg {}",
                theme.read().pick("bg-gray-900/80", "bg-white/80"),
            )
        }>
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <a href=SectionId::About.href() class="text-xl font-bold animate-slide-right">
                    <span class=accent>{brand}</span>
                    "Portfolio"
                </a>

                <div class="hidden md:flex items-center space-x-8 animate-fade-down">
                    {nav_items()
                        .map(move |item| {
                            view! {
                                <a href=item.section.href() class=move || link_class(item, "")>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| theme.toggle()
                        aria-label="Toggle theme"
                        class=move || {
                            format!(
                                "p-2 rounded-full transition-colors {}",
                                theme.read().pick("bg-gray-800 hover:bg-gray-700", "bg-gray-100 hover:bg-gray-200"),
                            )
                        }
                    >
                        {theme_icon}
                    </button>
                </div>

                <div class="md:hidden flex items-center">
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        class="p-2"
                    >
                        <div class="w-6 h-0.5 bg-current mb-1.5"></div>
                        <div class="w-6 h-0.5 bg-current mb-1.5"></div>
                        <div class="w-6 h-0.5 bg-current"></div>
                    </button>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(move || {
                        view! {
                            <div class=move || {
                                format!(
                                    "md:hidden p-4 animate-fade-down {}",
                                    theme.read().pick("bg-gray-800", "bg-white"),
                                )
                            }>
                                {nav_items()
                                    .map(move |item| {
                                        view! {
                                            <a
                                                href=item.section.href()
                                                class=move || link_class(item, "block py-2")
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <button on:click=move |_| theme.toggle() class="flex items-center py-2">
                                    <span class="mr-2">{theme_icon}</span>
                                    {move || theme.read().toggle_label()}
                                </button>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
