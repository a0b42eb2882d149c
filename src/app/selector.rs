use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use crate::profiles::Profile;

/// The profile's initials in a coloured tile.
#[component]
pub fn AvatarBadge(
    glyph: &'static str,
    name: &'static str,
    #[prop(default = "w-8 h-8 text-sm")] size: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!(
                "{size} inline-flex shrink-0 items-center justify-center rounded bg-gradient-to-br from-red-600 to-red-900 font-bold text-white select-none",
            )
            role="img"
            aria-label=name
        >
            {glyph}
        </span>
    }
}

/// Dropdown listing every loaded profile. Picking one reports its id and
/// closes the menu; so does any click outside it.
#[component]
pub fn ProfileSelector(
    #[prop(into)] profile: Signal<&'static Profile>,
    profiles: &'static [Profile],
    on_select: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let root = NodeRef::<html::Div>::new();

    let _ = on_click_outside(root, move |_| set_open.set(false));

    let active_id = Memo::new(move |_| profile.get().id.clone());

    view! {
        <div node_ref=root class="relative">
            <button
                class="flex items-center gap-2 rounded px-2 py-1 hover:bg-gray-800"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || {
                    let profile = profile.get();
                    view! { <AvatarBadge glyph=profile.avatar.as_str() name=profile.name.as_str() /> }
                }}
                <span class="text-xs text-gray-400">"▾"</span>
            </button>
            <Show when=move || open.get()>
                <ul
                    class="absolute right-0 mt-2 w-56 rounded-md bg-black/95 border border-gray-700 shadow-xl py-1"
                    role="listbox"
                >
                    {profiles
                        .iter()
                        .map(|p| {
                            let id = p.id.clone();
                            let is_active = {
                                let id = id.clone();
                                move || active_id.with(|active| *active == id)
                            };
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "w-full flex items-center gap-3 px-3 py-2 text-left bg-gray-800 text-white"
                                            } else {
                                                "w-full flex items-center gap-3 px-3 py-2 text-left text-gray-300 hover:bg-gray-800"
                                            }
                                        }
                                        role="option"
                                        on:click={
                                            let id = id.clone();
                                            move |_| {
                                                set_open.set(false);
                                                on_select.run(id.clone());
                                            }
                                        }
                                    >
                                        <AvatarBadge glyph=p.avatar.as_str() name=p.name.as_str() />
                                        <span class="flex flex-col">
                                            <span class="text-sm">{p.name.clone()}</span>
                                            <span class="text-xs text-gray-500">{p.role.clone()}</span>
                                        </span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_renders_glyph_as_text() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <AvatarBadge glyph="SK" name="Saksham Kumar" /> }.to_html());
        assert!(html.contains("SK"));
        assert!(html.contains("aria-label=\"Saksham Kumar\""));
        assert!(!html.contains("<img"));
    }
}
