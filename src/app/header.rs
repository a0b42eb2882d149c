use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::{section_anchor, NAV_SECTIONS};
use crate::profiles::Profile;
use crate::scroll::{is_scrolled, scroll_progress};

use super::browser::{page_metrics, scroll_to_section};
use super::effects::use_effect_controls;
use super::logo::Logo;
use super::selector::ProfileSelector;

#[component]
pub fn Header(
    #[prop(into)] profile: Signal<&'static Profile>,
    profiles: &'static [Profile],
    on_select: Callback<String>,
) -> impl IntoView {
    let controls = use_effect_controls();
    let (_, scroll_y) = use_window_scroll();
    let (scrolled, set_scrolled) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);
    let (menu_open, set_menu_open) = signal(false);

    Effect::watch(
        move || scroll_y.get(),
        move |top, _, _| {
            let (doc_height, viewport_height) = page_metrics();
            set_scrolled.set(is_scrolled(*top));
            set_progress.set(scroll_progress(*top, doc_height, viewport_height));
        },
        true,
    );

    let go_to = move |label: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(&section_anchor(label));
    };

    let nav_links = move |class: &'static str| {
        NAV_SECTIONS
            .into_iter()
            .map(|label| {
                view! {
                    <button class=class on:click=move |_| go_to(label)>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-black/90 backdrop-blur shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-gradient-to-b from-black/80 to-transparent"
            }
        }>
            <div
                class="absolute top-0 left-0 h-0.5 bg-red-600 transition-[width] duration-150"
                style=move || format!("width: {:.1}%", progress.get())
            ></div>
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between gap-4">
                <button class="flex items-center gap-3" on:click=move |_| go_to("Home")>
                    <Logo />
                    <span class="hidden sm:inline text-xl font-bold text-red-600">
                        {move || profile.get().first_name().to_string()}
                    </span>
                </button>
                <nav class="hidden md:flex items-center gap-6">
                    {nav_links("text-sm text-gray-300 hover:text-white transition-colors")}
                </nav>
                <div class="flex items-center gap-3">
                    <button
                        class="rounded px-3 py-1 text-xs uppercase tracking-wide border border-gray-600 text-gray-300 hover:border-white"
                        title="Switch theme"
                        on:click=move |_| controls.theme.update(|t| *t = t.next())
                    >
                        {move || controls.theme.get().label()}
                    </button>
                    <ProfileSelector profile profiles on_select />
                    <button
                        class="md:hidden text-gray-300 hover:text-white"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col px-4 pb-4 gap-2 bg-black/95">
                    {nav_links("text-left py-2 text-gray-300 hover:text-white")}
                </nav>
            </Show>
        </header>
    }
}
