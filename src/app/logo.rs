use leptos::{html, prelude::*};

use crate::config::{LOGO_FALLBACK, LOGO_PATH, SITE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogoState {
    Loading,
    Loaded,
    Failed,
}

/// Site logo with a pulsing placeholder while loading and text initials if
/// the image can't be fetched.
#[component]
pub fn Logo() -> impl IntoView {
    let (state, set_state) = signal(LogoState::Loading);
    let img = NodeRef::<html::Img>::new();

    // a server-rendered image may settle before hydration attaches handlers
    Effect::new(move |_| {
        if let Some(img) = img.get() {
            if img.complete() {
                set_state.set(if img.natural_width() > 0 {
                    LogoState::Loaded
                } else {
                    LogoState::Failed
                });
            }
        }
    });

    view! {
        <span class="relative inline-flex w-10 h-10 items-center justify-center">
            <Show when=move || state.get() == LogoState::Loading>
                <span class="absolute inset-0 rounded bg-gray-700 animate-pulse"></span>
            </Show>
            <Show
                when=move || state.get() != LogoState::Failed
                fallback=|| {
                    view! {
                        <span class="w-10 h-10 rounded bg-red-600 text-white font-bold flex items-center justify-center">
                            {LOGO_FALLBACK}
                        </span>
                    }
                }
            >
                <img
                    node_ref=img
                    src=LOGO_PATH
                    alt=SITE_NAME
                    class=move || {
                        if state.get() == LogoState::Loaded {
                            "w-10 h-10 object-contain opacity-100 transition-opacity"
                        } else {
                            "w-10 h-10 object-contain opacity-0"
                        }
                    }
                    on:load=move |_| set_state.set(LogoState::Loaded)
                    on:error=move |_| {
                        log::warn!("logo failed to load from {LOGO_PATH}");
                        set_state.set(LogoState::Failed)
                    }
                />
            </Show>
        </span>
    }
}
