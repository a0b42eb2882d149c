use codee::string::JsonSerdeWasmCodec;
use leptos::{ev, prelude::*};
use leptos_use::{storage::use_local_storage, use_event_listener, use_window};

use crate::config::{INSTALL_DISMISSED_KEY, SITE_NAME};

use super::browser::call_method;

/// "Add to home screen" banner, shown once the browser offers an install
/// prompt and until the visitor dismisses it.
#[component]
pub fn InstallPrompt() -> impl IntoView {
    let (dismissed, set_dismissed, _) =
        use_local_storage::<bool, JsonSerdeWasmCodec>(INSTALL_DISMISSED_KEY);
    let deferred = StoredValue::new_local(None::<web_sys::Event>);
    let (available, set_available) = signal(false);

    let _ = use_event_listener(
        use_window(),
        ev::Custom::<web_sys::Event>::new("beforeinstallprompt"),
        move |e| {
            // keep the browser's own mini-infobar from showing
            e.prevent_default();
            deferred.set_value(Some(e));
            set_available.set(true);
        },
    );

    let install = move |_| {
        let Some(event) = deferred.try_update_value(Option::take).flatten() else {
            return;
        };
        if let Err(e) = call_method(&event, "prompt") {
            log::warn!("install prompt failed: {e:?}");
        }
        set_available.set(false);
    };

    view! {
        <Show when=move || available.get() && !dismissed.get()>
            <div class="fixed bottom-6 right-6 z-40 max-w-xs rounded-lg bg-gray-900 border border-gray-700 shadow-xl p-4 animate-fadeIn">
                <p class="font-semibold mb-1">{format!("Install {SITE_NAME}")}</p>
                <p class="text-sm text-gray-400 mb-3">"Add this portfolio to your home screen for quick access."</p>
                <div class="flex gap-2 justify-end">
                    <button
                        class="px-3 py-1 text-sm text-gray-400 hover:text-white"
                        on:click=move |_| set_dismissed.set(true)
                    >
                        "Not now"
                    </button>
                    <button
                        class="px-3 py-1 text-sm rounded bg-red-600 hover:bg-red-700 text-white"
                        on:click=install
                    >
                        "Install"
                    </button>
                </div>
            </div>
        </Show>
    }
}
