use leptos::{html, prelude::*};
use leptos_use::{
    use_interval_fn_with_options, use_timeout_fn, UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::config::{SKILL_BARS_DELAY_MS, SKILL_BAR_STAGGER_MS, SKILL_COUNTER_INTERVAL_MS};
use crate::profiles::{Profile, Skill};
use crate::skills::{category_color, group_by_category, CountUp};

use super::effects::ScopedLoop;
use super::reveal::{reveal_class, use_reveal};

#[component]
pub fn Skills(profile: &'static Profile) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section, Signal::stored(profile.id.clone()));

    let (filled, set_filled) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_filled.set(true), SKILL_BARS_DELAY_MS);
    Effect::watch(
        move || revealed.get(),
        move |revealed, _, _| {
            if *revealed {
                start(());
            }
        },
        false,
    );
    let filled: Signal<bool> = filled.into();

    let bars = profile
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| view! { <SkillBar skill index filled /> })
        .collect_view();

    let categories = group_by_category(&profile.skills)
        .into_iter()
        .map(|summary| {
            let color = category_color(summary.name);
            let average = summary.rounded_average();
            let width = summary.width_percent();
            view! {
                <div class="rounded-lg bg-gray-900 p-5 border border-gray-800">
                    <div class="flex justify-between mb-1">
                        <span class="font-semibold">{summary.name.to_string()}</span>
                        <span class="text-sm text-gray-400">{format!("{average}%")}</span>
                    </div>
                    <p class="text-xs text-gray-500 mb-3">
                        {format!("{} skills", summary.skills.len())}
                    </p>
                    <div class="h-1.5 rounded bg-gray-800 overflow-hidden">
                        <div
                            class=format!("h-full {color} transition-[width] duration-1000")
                            style=move || {
                                format!("width: {}%", if filled.get() { width } else { 0.0 })
                            }
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let learning = (!profile.learning.is_empty())
        .then(|| {
            view! {
                <div class="mt-12">
                    <h3 class="text-xl font-semibold mb-4">"Currently Learning"</h3>
                    <div class="flex flex-wrap gap-3">
                        {profile
                            .learning
                            .iter()
                            .map(|topic| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-sm border border-red-600/60 text-red-400">
                                        {topic.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        });

    view! {
        <section node_ref=section id="skills" class="py-24 px-6 bg-gradient-to-b from-black to-gray-950">
            <div class=move || format!("mx-auto max-w-6xl {}", reveal_class(revealed.get()))>
                <h2 class="text-4xl font-bold mb-12">"Skills & " <span class="text-red-600">"Expertise"</span></h2>
                <div class="grid md:grid-cols-2 gap-x-12 gap-y-6 mb-16">{bars}</div>
                <h3 class="text-2xl font-semibold mb-6">"By Category"</h3>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{categories}</div>
                {learning}
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, index: usize, filled: Signal<bool>) -> impl IntoView {
    let target = skill.width_percent();
    let counter = RwSignal::new(CountUp::new(target));

    let counting = ScopedLoop::new();
    let interval = use_interval_fn_with_options(
        move || {
            let more = counter.try_update(|c| c.tick()).unwrap_or(false);
            if !more {
                counting.stop();
            }
        },
        SKILL_COUNTER_INTERVAL_MS,
        UseIntervalFnOptions::default().immediate(false),
    );
    let resume = interval.resume;
    counting.bind("skill-counter", interval.pause);

    Effect::watch(
        move || filled.get(),
        move |filled, _, _| {
            if *filled {
                resume();
            }
        },
        false,
    );

    let delay_ms = index as u32 * SKILL_BAR_STAGGER_MS;

    view! {
        <div>
            <div class="flex justify-between mb-2">
                <span class="font-medium">{skill.name.clone()}</span>
                <span class="text-sm text-gray-400 tabular-nums">
                    {move || format!("{}%", counter.with(CountUp::current))}
                </span>
            </div>
            <div class="h-2 rounded bg-gray-800 overflow-hidden">
                <div
                    class=format!("h-full {} transition-[width] duration-1000 ease-out", category_color(&skill.category))
                    style=move || {
                        format!(
                            "width: {}%; transition-delay: {delay_ms}ms",
                            if filled.get() { target } else { 0 },
                        )
                    }
                ></div>
            </div>
        </div>
    }
}
