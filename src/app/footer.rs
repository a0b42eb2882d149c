use leptos::prelude::*;

use crate::config::{build_year, section_anchor, NAV_SECTIONS};
use crate::profiles::Profile;

use super::browser::{scroll_to_section, scroll_to_top};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let year = build_year();

    view! {
        <footer class="relative border-t border-gray-800 bg-black py-12 px-6">
            <div class="mx-auto max-w-6xl flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="text-center md:text-left">
                    <p class="text-gray-300">
                        "Made with " <span class="text-red-600">"♥"</span> " by " {profile.name.clone()}
                    </p>
                    <p class="text-sm text-gray-500">{format!("© {year} {}. All rights reserved.", profile.name)}</p>
                </div>
                <nav class="flex flex-wrap justify-center gap-4 text-sm text-gray-400">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|label| {
                            view! {
                                <button
                                    class="hover:text-white"
                                    on:click=move |_| scroll_to_section(&section_anchor(label))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="w-10 h-10 rounded-full bg-red-600 hover:bg-red-700 text-white"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_top()
                >
                    "↑"
                </button>
            </div>
        </footer>
    }
}
