use leptos::{either::*, prelude::*};

use crate::{
    content::{portfolio, Profile},
    sections::SectionId,
    state::ThemeMode,
};

use super::components::ContentUnavailable;

#[component]
pub fn About(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let body = match portfolio() {
        Ok(p) => Either::Left(view! { <Hero profile=&p.profile theme /> }),
        Err(e) => Either::Right(view! { <ContentUnavailable error=e /> }),
    };

    view! {
        <section
            id=SectionId::About.anchor()
            class="min-h-screen flex flex-col justify-center pt-20 animate-fade-in"
        >
            {body}
            <div class="flex justify-center pb-8">
                <a href=SectionId::Projects.href() class="text-center animate-bounce-slow">
                    <div class=move || {
                        format!(
                            "border-2 rounded-full p-2 w-10 h-10 leading-5 {}",
                            theme.get().pick("border-gray-700", "border-gray-300"),
                        )
                    }>"⌄"</div>
                </a>
            </div>
        </section>
    }
}

#[component]
fn Hero(profile: &'static Profile, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let accent = move || theme.get().pick("text-blue-400", "text-blue-600");
    let social_class = move || {
        format!(
            "p-3 rounded-full text-xl transition-all hover:-translate-y-1 {}",
            theme.get().pick("bg-gray-800 hover:bg-gray-700", "bg-gray-100 hover:bg-gray-200"),
        )
    };
    let links = &profile.links;

    view! {
        <div class="max-w-6xl mx-auto px-6 py-20 grid md:grid-cols-2 gap-12 items-center">
            <div class="animate-slide-right">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Hi, I'm " <span class=accent>{profile.name.as_str()}</span>
                </h1>
                <h2 class="text-2xl md:text-3xl font-semibold mb-6 animate-fade-in">
                    {profile.headline.as_str()}
                </h2>
                <p class="text-lg mb-8 max-w-lg opacity-90">{profile.summary.as_str()}</p>
                <div class="flex space-x-4 mb-8">
                    <a
                        href=links.github.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=social_class
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=links.linkedin.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=social_class
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a href=links.mailto() class=social_class aria-label="Email">
                        <i class="extra-email"></i>
                    </a>
                </div>
                <a
                    href=links.resume.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=move || {
                        format!(
                            "inline-flex items-center px-6 py-3 rounded-lg text-white font-semibold transition-transform hover:scale-105 active:scale-95 {}",
                            theme.get().pick("bg-blue-500 hover:bg-blue-600", "bg-blue-600 hover:bg-blue-700"),
                        )
                    }
                >
                    "View Resume"
                    <i class="extra-link ml-2"></i>
                </a>
            </div>

            <div class="flex justify-center animate-zoom-in">
                <div class=move || {
                    format!(
                        "w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 {}",
                        theme.get().pick("border-blue-500", "border-blue-600"),
                    )
                }>
                    <div class="w-full h-full bg-blue-300 flex items-center justify-center text-5xl font-bold">
                        {profile.initials.as_str()}
                    </div>
                </div>
            </div>
        </div>
    }
}
