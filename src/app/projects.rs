use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::profiles::{Profile, Project};
use crate::projects::{filter_projects, tag_categories, tag_preview, Category, ProjectFilter};

use super::reveal::{reveal_class, use_reveal};

#[component]
pub fn Projects(profile: &'static Profile) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, Signal::stored(profile.id.clone()));
    let filter = RwSignal::new(ProjectFilter::default());
    let selected = RwSignal::new(None::<&'static Project>);

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });

    let visible = Memo::new(move |_| filter.with(|f| filter_projects(&profile.projects, f)));

    let options = tag_categories(&profile.projects)
        .into_iter()
        .map(|tag| view! { <option value=tag.to_string()>{tag.to_string()}</option> })
        .collect_view();

    view! {
        <section node_ref=section id="projects" class="py-24 px-6 bg-black">
            <div class=move || format!("mx-auto max-w-6xl {}", reveal_class(revealed.get()))>
                <h2 class="text-4xl font-bold mb-8">"Featured " <span class="text-red-600">"Projects"</span></h2>
                <div class="flex flex-col sm:flex-row gap-4 mb-10">
                    <input
                        type="search"
                        placeholder="Search projects..."
                        class="flex-1 rounded bg-gray-900 border border-gray-700 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-red-600"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |e| {
                            let query = event_target_value(&e);
                            filter.update(|f| f.query = query);
                        }
                    />
                    <select
                        class="rounded bg-gray-900 border border-gray-700 px-4 py-2"
                        prop:value=move || filter.with(|f| f.category.value().to_string())
                        on:change=move |e| {
                            let category = Category::from_value(event_target_value(&e));
                            filter.update(|f| f.category = category);
                        }
                    >
                        <option value="">"All Categories"</option>
                        {options}
                    </select>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project selected /> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="text-center text-gray-500 py-12">
                        {move || {
                            filter
                                .with(|f| format!("No projects match your search in {}.", f.category.label()))
                        }}
                    </p>
                </Show>
                <Show when=move || filter.with(ProjectFilter::is_active)>
                    <div class="text-center mt-6">
                        <button
                            class="text-sm text-gray-400 underline hover:text-white"
                            on:click=move |_| filter.set(ProjectFilter::default())
                        >
                            "Clear filters"
                        </button>
                    </div>
                </Show>
            </div>
            {move || {
                selected.get().map(|project| view! { <ProjectModal project selected /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, selected: RwSignal<Option<&'static Project>>) -> impl IntoView {
    let preview = tag_preview(project);
    let hidden = preview.hidden;
    let tags = preview
        .shown
        .iter()
        .map(|tag| view! { <span class="text-xs px-2 py-0.5 rounded bg-gray-800 text-gray-300">{tag.clone()}</span> })
        .collect_view();

    view! {
        <button
            class="group text-left rounded-lg overflow-hidden bg-gray-900 border border-gray-800 hover:scale-105 hover:border-red-600 transition-transform duration-300"
            on:click=move |_| selected.set(Some(project))
        >
            <div class="relative aspect-video overflow-hidden">
                <img src=project.image.clone() alt=project.title.clone() class="w-full h-full object-cover" loading="lazy" />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-2 left-2 text-xs font-bold px-2 py-1 rounded bg-red-600 text-white">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="p-4">
                <h3 class="text-lg font-semibold mb-2 group-hover:text-red-500">{project.title.clone()}</h3>
                <p class="text-sm text-gray-400 mb-3 line-clamp-2">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {tags}
                    {(hidden > 0)
                        .then(|| view! { <span class="text-xs px-2 py-0.5 text-gray-500">{format!("+{hidden}")}</span> })}
                </div>
            </div>
        </button>
    }
}

#[component]
fn ProjectModal(project: &'static Project, selected: RwSignal<Option<&'static Project>>) -> impl IntoView {
    let close = move |_| selected.set(None);
    let links = [("Live Demo", &project.demo_url), ("Source Code", &project.github_url)]
        .into_iter()
        .filter(|(_, url)| !url.is_empty() && url.as_str() != "#")
        .map(|(label, url)| {
            view! {
                <a
                    href=url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-4 py-2 rounded bg-red-600 hover:bg-red-700 text-white text-sm font-semibold"
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4 animate-fadeIn"
            role="dialog"
            aria-modal="true"
            on:click=close
        >
            <div
                class="relative max-w-2xl w-full rounded-lg overflow-hidden bg-gray-900 border border-gray-700"
                on:click=|e| e.stop_propagation()
            >
                <button
                    class="absolute top-3 right-3 z-10 w-8 h-8 rounded-full bg-black/70 text-white hover:bg-black"
                    aria-label="Close"
                    on:click=close
                >
                    "✕"
                </button>
                <img src=project.image.clone() alt=project.title.clone() class="w-full aspect-video object-cover" />
                <div class="p-6">
                    <h3 class="text-2xl font-bold mb-3">{project.title.clone()}</h3>
                    <p class="text-gray-300 mb-4">{project.description.clone()}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="text-xs px-2 py-1 rounded bg-gray-800 text-gray-300">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <div class="flex gap-3">{links}</div>
                </div>
            </div>
        </div>
    }
}
