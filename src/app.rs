mod about;
mod browser;
mod contact;
mod effects;
mod footer;
mod header;
mod hero;
mod install;
mod logo;
mod projects;
mod reveal;
mod selector;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profiles::{profiles, Profile};
use crate::selection::Selection;

use about::About;
use contact::Contact;
use effects::{
    CodeRainCanvas, ConfettiLayer, CursorTrail, EffectControls, KonamiListener, ParticleBackdrop,
    VoiceControl,
};
use footer::Footer;
use header::Header;
use hero::Hero;
use install::InstallPrompt;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/png" href="/Logo.png" />
                <link rel="manifest" href="/manifest.json" />
                <link rel="stylesheet" id="leptos" href="/pkg/folioflix.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("FolioFlix - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    match Selection::new(profiles()) {
        Ok(selection) => Either::Left(view! { <Site selection /> }),
        Err(e) => Either::Right(view! {
            <Title text="Unavailable" />
            <main class="min-h-screen flex items-center justify-center text-gray-300">
                <p>{e.to_string()}</p>
            </main>
        }),
    }
}

#[component]
fn Site(selection: Selection<'static>) -> impl IntoView {
    let all_profiles = selection.profiles();
    let selection = RwSignal::new(selection);
    let profile = Memo::new(move |_| selection.with(|s| s.active()));
    let on_select = Callback::new(move |id: String| {
        selection.update(|s| {
            if let Err(e) = s.select(&id) {
                log::warn!("ignoring profile switch: {e}");
            }
        });
    });

    let controls = EffectControls::new();
    provide_context(controls);

    view! {
        <Title text="Portfolio" />
        <div class=move || format!("min-h-screen transition-colors duration-500 {}", controls.theme.get().class())>
            <ParticleBackdrop />
            <Show when=move || controls.rain.get()>
                <CodeRainCanvas />
            </Show>
            <CursorTrail />
            <ConfettiLayer />
            <KonamiListener />
            <Header profile profiles=all_profiles on_select />
            <main class="relative">
                // sections rebuild from scratch whenever the profile identity changes
                {move || {
                    let profile: &'static Profile = profile.get();
                    view! {
                        <Hero profile />
                        <About profile />
                        <Skills profile />
                        <Projects profile />
                    }
                }}
                <Contact profile />
            </main>
            {move || {
                let profile: &'static Profile = profile.get();
                view! { <Footer profile /> }
            }}
            <VoiceControl />
            <InstallPrompt />
        </div>
    }
}
