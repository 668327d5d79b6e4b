mod about;
mod components;
mod experience;
mod footer;
mod nav;
mod projects;
mod scroll;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::portfolio,
    sections::{show_scroll_top, SectionId},
    state::ThemeMode,
};

use about::About;
use experience::Experience;
use footer::Footer;
use nav::NavBar;
use projects::Projects;
use scroll::{use_active_section, use_scroll_offset, ScrollTopButton};
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio()
        .map(|p| p.profile.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Page-lifetime dark/light mode. The root owns it; sections get a read-only
/// signal and only the nav bar toggles it.
#[derive(Clone, Copy)]
pub struct ThemeState(RwSignal<ThemeMode>);

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self(RwSignal::new(ThemeMode::default()))
    }

    pub fn read(&self) -> ThemeMode {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|mode| *mode = mode.toggled());
        log::debug!("theme switched to {:?}", self.0.get_untracked());
    }

    pub fn mode(&self) -> Signal<ThemeMode> {
        self.0.read_only().into()
    }
}

fn section_view(section: SectionId, theme: Signal<ThemeMode>) -> AnyView {
    match section {
        SectionId::About => view! { <About theme /> }.into_any(),
        SectionId::Projects => view! { <Projects theme /> }.into_any(),
        SectionId::Skills => view! { <Skills theme /> }.into_any(),
        SectionId::Experience => view! { <Experience theme /> }.into_any(),
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let theme = ThemeState::new();
    let mode = theme.mode();
    let scroll_y = use_scroll_offset();
    let active = use_active_section(scroll_y);
    let show_top = Signal::derive(move || show_scroll_top(scroll_y.get()));

    view! {
        <Title text="Portfolio" />
        <div class=move || mode.get().pick("dark", "")>
            <div class=move || {
                format!(
                    "min-h-screen transition-colors duration-300 {}",
                    mode.get().pick("bg-gray-900 text-white", "bg-gray-50 text-gray-900"),
                )
            }>
                <NavBar theme active />
                <main>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| section_view(section, mode))
                        .collect_view()}
                </main>
                <Footer theme=mode />
                <ScrollTopButton visible=show_top theme=mode />
            </div>
        </div>
    }
}
