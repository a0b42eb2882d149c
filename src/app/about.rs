use leptos::{html, prelude::*};

use crate::profiles::Profile;

use super::reveal::{fade_in_class, reveal_class, use_reveal};

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, Signal::stored(profile.id.clone()));
    let about = &profile.about;

    let highlights = [
        ("Experience", about.experience.clone()),
        ("Passion", about.passion.clone()),
    ];

    view! {
        <section node_ref=section id="about" class="py-24 px-6 bg-black">
            <div class=move || format!("mx-auto max-w-6xl {}", reveal_class(revealed.get()))>
                <h2 class="text-4xl font-bold mb-12">
                    "About " <span class="text-red-600">{profile.first_name().to_string()}</span>
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="md:col-span-2 space-y-6">
                        {highlights
                            .into_iter()
                            .map(|(title, body)| {
                                view! {
                                    <div class="rounded-lg bg-gray-900 p-6 border border-gray-800">
                                        <h3 class="text-xl font-semibold text-red-500 mb-2">{title}</h3>
                                        <p class="text-gray-300 leading-relaxed">{body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class=move || format!("grid grid-cols-2 md:grid-cols-1 gap-6 {}", fade_in_class(revealed.get()))>
                        <Stat value=about.stats.projects label="Projects Completed" />
                        <Stat value=about.stats.years label="Years of Experience" />
                        {(!profile.location.is_empty())
                            .then(|| {
                                view! {
                                    <div class="rounded-lg bg-gray-900 p-6 text-center border border-gray-800">
                                        <div class="text-lg font-semibold">{profile.location.clone()}</div>
                                        <div class="text-sm text-gray-400">"Based In"</div>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: u32, label: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-gray-900 p-6 text-center border border-gray-800">
            <div class="text-4xl font-extrabold text-red-600">{value} "+"</div>
            <div class="text-sm text-gray-400">{label}</div>
        </div>
    }
}
