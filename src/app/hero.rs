use leptos::prelude::*;
use leptos_use::{
    use_interval_fn_with_options, use_timeout_fn, UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::config::{HERO_REVEAL_DELAY_MS, TYPEWRITER_INTERVAL_MS};
use crate::effects::{hero_dots, Typewriter};
use crate::profiles::Profile;

use super::browser::scroll_to_section;
use super::effects::ScopedLoop;
use super::selector::AvatarBadge;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_visible.set(true), HERO_REVEAL_DELAY_MS);
    Effect::new(move |_| start(()));

    let typewriter = RwSignal::new(Typewriter::new(profile.role.clone()));
    let typing = ScopedLoop::new();
    let interval = use_interval_fn_with_options(
        move || {
            let more = typewriter.try_update(|t| t.tick()).unwrap_or(false);
            if !more {
                typing.stop();
            }
        },
        TYPEWRITER_INTERVAL_MS,
        UseIntervalFnOptions::default().immediate(true),
    );
    typing.bind("typewriter", interval.pause);

    let dots = hero_dots(&profile.id)
        .into_iter()
        .map(|style| {
            view! { <span class="absolute w-1 h-1 rounded-full bg-red-500/60 animate-pulse" style=style></span> }
        })
        .collect_view();

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-black via-gray-900 to-black"
        >
            <div class="absolute inset-0" aria-hidden="true">
                {dots}
            </div>
            <div class=move || {
                format!(
                    "relative z-10 mx-auto max-w-6xl px-6 pt-24 grid md:grid-cols-2 gap-12 items-center transition-all duration-1000 {}",
                    if visible.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" },
                )
            }>
                <div>
                    <p class="text-red-500 uppercase tracking-widest text-sm mb-4">"Featured Profile"</p>
                    <h1 class="text-5xl md:text-7xl font-extrabold mb-4">{profile.name.clone()}</h1>
                    <h2 class="text-2xl md:text-3xl text-gray-300 mb-6 h-10">
                        {move || typewriter.with(|t| t.visible().to_string())}
                        <span class="animate-pulse">"|"</span>
                    </h2>
                    <p class="text-lg text-gray-400 mb-8 max-w-xl">{profile.description.clone()}</p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        <a
                            href=profile.resume.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-3 rounded bg-white text-black font-semibold hover:bg-gray-200"
                        >
                            "▶ View Resume"
                        </a>
                        <button
                            class="px-6 py-3 rounded bg-gray-700/80 text-white font-semibold hover:bg-gray-600"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="flex gap-5 text-sm text-gray-400">
                        <a href=profile.github.clone() target="_blank" rel="noopener noreferrer" class="hover:text-white">
                            "GitHub"
                        </a>
                        <a href=profile.linkedin.clone() target="_blank" rel="noopener noreferrer" class="hover:text-white">
                            "LinkedIn"
                        </a>
                        <a href=profile.email.clone() class="hover:text-white">
                            "Email"
                        </a>
                    </div>
                </div>
                <div class="flex justify-center">
                    <AvatarBadge
                        glyph=profile.avatar.as_str()
                        name=profile.name.as_str()
                        size="w-64 h-64 md:w-80 md:h-80 text-8xl shadow-2xl ring-4 ring-red-600/40"
                    />
                </div>
            </div>
        </section>
    }
}
