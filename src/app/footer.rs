use leptos::prelude::*;

use crate::{
    content::{portfolio, Profile},
    state::ThemeMode,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let footer_class = move || {
        format!(
            "py-10 border-t {}",
            theme.get().pick("bg-gray-900 border-gray-800", "bg-white border-gray-200"),
        )
    };

    view! {
        <footer class=footer_class>
            <div class="max-w-6xl mx-auto px-6">
                {portfolio().ok().map(|p| view! { <FooterLinks profile=&p.profile theme /> })}
            </div>
        </footer>
    }
}

#[component]
fn FooterLinks(profile: &'static Profile, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
    let (first, rest) = profile
        .name
        .split_once(' ')
        .unwrap_or((profile.name.as_str(), ""));
    let links = &profile.links;
    let link_class = "opacity-80 hover:opacity-100 text-xl transition-transform hover:-translate-y-1";

    view! {
        <div class="flex flex-col md:flex-row justify-between items-center">
            <div class="mb-6 md:mb-0">
                <h2 class="text-xl font-bold">
                    <span class=move || {
                        theme.get().pick("text-blue-400", "text-blue-600")
                    }>{first}</span>
                    " "
                    {rest}
                </h2>
                <p class="mt-2 opacity-80">{profile.footer_note.as_str()}</p>
            </div>

            <div class="flex space-x-6 items-center">
                <a
                    href=links.github.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label="GitHub Profile"
                >
                    <i class="devicon-github-plain"></i>
                </a>
                <a
                    href=links.linkedin.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=link_class
                    aria-label="LinkedIn Profile"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
                <a href=links.mailto() class=link_class aria-label="Email">
                    <i class="extra-email"></i>
                </a>
            </div>
        </div>

        <div class="mt-8 text-center">
            <p class="opacity-60 text-sm">
                {format!("© {BUILD_YEAR} {}. All rights reserved.", profile.name)}
            </p>
        </div>
    }
}
