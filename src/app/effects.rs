use std::f64::consts::TAU;
use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::CanvasRenderingContext2d;

use crate::config::{
    CONFETTI_PIECES, CONFETTI_TTL_MS, PARTICLE_COUNT, RAIN_COLUMN_WIDTH, TRAIL_LEN, TRAIL_TTL_MS,
};
use crate::effects::{
    parse_voice_command, CodeRain, Confetti, KonamiTracker, LoopGuard, ParticleField, Theme, Trail,
    VoiceCommand,
};

use super::browser::{
    call_method, fit_canvas, global_constructor, now_ms, random_seed, window_viewport,
};

const RAIN_FRAME_MS: f64 = 50.0;

/// Page-wide switches for the decorative layers, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct EffectControls {
    pub theme: RwSignal<Theme>,
    pub rain: RwSignal<bool>,
    /// Bumped once per confetti burst request.
    pub celebrate: RwSignal<u32>,
}

impl EffectControls {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            rain: RwSignal::new(false),
            celebrate: RwSignal::new(0),
        }
    }

    pub fn apply(&self, command: VoiceCommand) {
        log::debug!("applying {command:?}");
        match command {
            VoiceCommand::SetTheme(theme) => self.theme.set(theme),
            VoiceCommand::NextTheme => self.theme.update(|t| *t = t.next()),
            VoiceCommand::Celebrate => self.celebrate.update(|n| *n += 1),
            VoiceCommand::ToggleRain => self.rain.update(|on| *on = !*on),
        }
    }
}

pub fn use_effect_controls() -> EffectControls {
    use_context::<EffectControls>().unwrap_or_else(|| {
        log::warn!("effect controls missing from context");
        EffectControls::new()
    })
}

/// Holds at most one running loop for the current reactive owner and stops
/// it when the owner is cleaned up.
#[derive(Clone, Copy)]
pub struct ScopedLoop(StoredValue<Option<LoopGuard>>);

impl ScopedLoop {
    pub fn new() -> Self {
        let slot = StoredValue::new(None::<LoopGuard>);
        on_cleanup(move || {
            let _ = slot.try_update_value(|guard| guard.take());
        });
        Self(slot)
    }

    /// Takes ownership of a loop's pause handle. A previously bound loop is
    /// stopped first.
    pub fn bind(&self, name: &'static str, pause: impl Fn() + 'static) {
        let pause = StoredValue::new_local(pause);
        let guard = LoopGuard::new(name, move || {
            let _ = pause.try_with_value(|pause| pause());
        });
        let _ = self.0.try_update_value(|slot| slot.replace(guard));
    }

    pub fn stop(&self) {
        let _ = self.0.try_update_value(|slot| {
            if let Some(guard) = slot {
                guard.stop();
            }
        });
    }
}

#[component]
pub fn CursorTrail() -> impl IntoView {
    let trail = RwSignal::new(Trail::new(TRAIL_LEN, TRAIL_TTL_MS));
    let (now, set_now) = signal(0.0_f64);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let t = now_ms();
        set_now.set(t);
        trail.update(|trail| trail.push(f64::from(e.client_x()), f64::from(e.client_y()), t));
    });

    let frames = ScopedLoop::new();
    let raf = use_raf_fn(move |_: UseRafFnCallbackArgs| {
        if trail.with_untracked(Trail::is_empty) {
            return;
        }
        let t = now_ms();
        set_now.set(t);
        trail.update(|trail| trail.prune(t));
    });
    frames.bind("cursor-trail", raf.pause);

    view! {
        <div class="pointer-events-none fixed inset-0 z-50" aria-hidden="true">
            {move || {
                let now = now.get();
                trail
                    .with(|trail| {
                        let ttl = trail.ttl_ms();
                        let aura = trail
                            .head()
                            .map(|head| {
                                let style = format!(
                                    "left: {}px; top: {}px; opacity: {:.2}",
                                    head.x - 48.0,
                                    head.y - 48.0,
                                    head.opacity(now, ttl) * 0.35,
                                );
                                view! {
                                    <div
                                        class="absolute w-24 h-24 rounded-full bg-red-600 blur-2xl"
                                        style=style
                                    ></div>
                                }
                            });
                        let dots = trail
                            .points()
                            .enumerate()
                            .map(|(i, point)| {
                                let size = 4.0 + i as f64 * 0.5;
                                let style = format!(
                                    "left: {}px; top: {}px; width: {size}px; height: {size}px; opacity: {:.2}",
                                    point.x - size / 2.0,
                                    point.y - size / 2.0,
                                    point.opacity(now, ttl),
                                );
                                view! { <div class="absolute rounded-full bg-red-500" style=style></div> }
                            })
                            .collect_view();
                        view! {
                            {aura}
                            {dots}
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn ParticleBackdrop() -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);
    let controls = use_effect_controls();

    let frames = ScopedLoop::new();
    let raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(canvas) = canvas.get_untracked() else {
            return;
        };
        let viewport = window_viewport();
        let Some(ctx) = fit_canvas(&canvas, viewport) else {
            return;
        };
        let color = match controls.theme.get_untracked() {
            Theme::Light => "#1f2937",
            Theme::Matrix => "#4ade80",
            Theme::Noir => "#ef4444",
        };
        field.update_value(|field| {
            let field = field
                .get_or_insert_with(|| ParticleField::new(PARTICLE_COUNT, viewport, random_seed()));
            field.resize(viewport);
            field.step(args.delta);
            ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
            ctx.set_fill_style_str(color);
            for p in field.particles() {
                ctx.set_global_alpha(p.opacity);
                ctx.begin_path();
                if ctx.arc(p.x, p.y, p.size, 0.0, TAU).is_ok() {
                    ctx.fill();
                }
            }
            ctx.set_global_alpha(1.0);
        });
    });
    frames.bind("particles", raf.pause);

    view! {
        <canvas
            node_ref=canvas
            class="pointer-events-none fixed inset-0 z-0 opacity-40"
            aria-hidden="true"
        ></canvas>
    }
}

#[component]
pub fn CodeRainCanvas() -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let rain = StoredValue::new(None::<CodeRain>);
    let elapsed = StoredValue::new(0.0_f64);

    let frames = ScopedLoop::new();
    let raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        elapsed.update_value(|e| *e += args.delta);
        if elapsed.get_value() < RAIN_FRAME_MS {
            return;
        }
        elapsed.set_value(0.0);
        let Some(canvas) = canvas.get_untracked() else {
            return;
        };
        let viewport = window_viewport();
        let Some(ctx) = fit_canvas(&canvas, viewport) else {
            return;
        };
        rain.update_value(|rain| {
            let rain = rain
                .get_or_insert_with(|| CodeRain::new(viewport, RAIN_COLUMN_WIDTH, random_seed()));
            rain.resize(viewport);
            draw_rain(&ctx, rain, viewport.width, viewport.height);
            rain.step();
        });
    });
    frames.bind("code-rain", raf.pause);

    view! {
        <canvas
            node_ref=canvas
            class="pointer-events-none fixed inset-0 z-0 opacity-60"
            aria-hidden="true"
        ></canvas>
    }
}

fn draw_rain(ctx: &CanvasRenderingContext2d, rain: &mut CodeRain, width: f64, height: f64) {
    // translucent wash leaves fading tails behind each glyph
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.08)");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str("#22c55e");
    let size = rain.column_width();
    ctx.set_font(&format!("{size}px monospace"));
    let drops = rain.drops().to_vec();
    for (column, row) in drops.into_iter().enumerate() {
        if row < 0.0 {
            continue;
        }
        let glyph = rain.glyph().to_string();
        let _ = ctx.fill_text(&glyph, column as f64 * size, row * size);
    }
}

/// Mounts a confetti canvas for each burst request and unmounts it once
/// every piece has settled.
#[component]
pub fn ConfettiLayer() -> impl IntoView {
    let controls = use_effect_controls();
    let active = RwSignal::new(false);

    Effect::watch(
        move || controls.celebrate.get(),
        move |_, _, _| active.set(true),
        false,
    );

    view! {
        <Show when=move || active.get()>
            <ConfettiCanvas on_idle=Callback::new(move |_| active.set(false)) />
        </Show>
    }
}

#[component]
fn ConfettiCanvas(on_idle: Callback<()>) -> impl IntoView {
    let controls = use_effect_controls();
    let canvas = NodeRef::<html::Canvas>::new();
    let confetti = StoredValue::new(None::<Confetti>);

    // further requests while mounted add to the running burst
    Effect::watch(
        move || controls.celebrate.get(),
        move |_, _, _| {
            let viewport = window_viewport();
            confetti.update_value(|confetti| {
                confetti
                    .get_or_insert_with(|| Confetti::new(viewport, CONFETTI_TTL_MS, random_seed()))
                    .burst(CONFETTI_PIECES);
            });
        },
        true,
    );

    let frames = ScopedLoop::new();
    let raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(canvas) = canvas.get_untracked() else {
            return;
        };
        let viewport = window_viewport();
        let Some(ctx) = fit_canvas(&canvas, viewport) else {
            return;
        };
        let idle = confetti
            .try_update_value(|confetti| {
                let Some(confetti) = confetti else {
                    return true;
                };
                confetti.resize(viewport);
                confetti.step(args.delta);
                ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
                for piece in confetti.pieces() {
                    ctx.save();
                    if ctx.translate(piece.x, piece.y).is_ok() && ctx.rotate(piece.rotation).is_ok() {
                        ctx.set_fill_style_str(piece.color);
                        ctx.fill_rect(-4.0, -2.0, 8.0, 4.0);
                    }
                    ctx.restore();
                }
                confetti.is_idle()
            })
            .unwrap_or(true);
        if idle {
            frames.stop();
            // let the owner finish this frame before it is torn down
            set_timeout(move || on_idle.run(()), Duration::ZERO);
        }
    });
    frames.bind("confetti", raf.pause);

    view! {
        <canvas
            node_ref=canvas
            class="pointer-events-none fixed inset-0 z-50"
            aria-hidden="true"
        ></canvas>
    }
}

#[component]
pub fn KonamiListener() -> impl IntoView {
    let controls = use_effect_controls();
    let tracker = StoredValue::new(KonamiTracker::default());

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        let key = e.key();
        if tracker.try_update_value(|t| t.press(&key)).unwrap_or(false) {
            log::info!("konami code entered");
            controls.apply(VoiceCommand::Celebrate);
            controls.apply(VoiceCommand::SetTheme(Theme::Matrix));
        }
    });
}

/// Browser speech recognition session. The JS callbacks live as long as
/// this value; dropping it aborts the session.
struct Recognition {
    inner: JsValue,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl Drop for Recognition {
    fn drop(&mut self) {
        let _ = call_method(&self.inner, "abort");
    }
}

const RECOGNITION_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Pulls the newest transcript out of a `SpeechRecognitionEvent`.
fn latest_transcript(event: &JsValue) -> Option<String> {
    let get = |target: &JsValue, key: JsValue| js_sys::Reflect::get(target, &key).ok();
    let index = get(event, "resultIndex".into())?.as_f64()?;
    let results = get(event, "results".into())?;
    let result = get(&results, JsValue::from_f64(index))?;
    let alternative = get(&result, JsValue::from_f64(0.0))?;
    get(&alternative, "transcript".into())?.as_string()
}

fn start_recognition(
    constructor: &js_sys::Function,
    controls: EffectControls,
    heard: WriteSignal<Option<String>>,
    listening: WriteSignal<bool>,
) -> Result<Recognition, JsValue> {
    let inner = js_sys::Reflect::construct(constructor, &js_sys::Array::new())?;
    js_sys::Reflect::set(&inner, &"lang".into(), &"en-US".into())?;
    js_sys::Reflect::set(&inner, &"interimResults".into(), &JsValue::FALSE)?;

    let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let Some(transcript) = latest_transcript(&event) else {
            return;
        };
        log::debug!("heard {transcript:?}");
        match parse_voice_command(&transcript) {
            Some(command) => controls.apply(command),
            None => log::debug!("no command in {transcript:?}"),
        }
        heard.set(Some(transcript));
    });
    let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| listening.set(false));
    js_sys::Reflect::set(&inner, &"onresult".into(), on_result.as_ref())?;
    js_sys::Reflect::set(&inner, &"onend".into(), on_end.as_ref())?;
    call_method(&inner, "start")?;

    Ok(Recognition {
        inner,
        _on_result: on_result,
        _on_end: on_end,
    })
}

#[component]
pub fn VoiceControl() -> impl IntoView {
    let controls = use_effect_controls();
    let (supported, set_supported) = signal(false);
    let (listening, set_listening) = signal(false);
    let (heard, set_heard) = signal(None::<String>);
    let session = StoredValue::new_local(None::<Recognition>);

    Effect::new(move |_| {
        set_supported.set(global_constructor(&RECOGNITION_NAMES).is_some());
    });
    on_cleanup(move || {
        let _ = session.try_update_value(|s| s.take());
    });

    let toggle = move |_| {
        if listening.get_untracked() {
            session.update_value(|s| *s = None);
            set_listening.set(false);
            return;
        }
        let Some(constructor) = global_constructor(&RECOGNITION_NAMES) else {
            set_supported.set(false);
            return;
        };
        match start_recognition(&constructor, controls, set_heard, set_listening) {
            Ok(recognition) => {
                session.update_value(|s| *s = Some(recognition));
                set_listening.set(true);
            }
            Err(e) => log::warn!("speech recognition failed to start: {e:?}"),
        }
    };

    view! {
        <div class="fixed bottom-6 left-6 z-40 flex flex-col items-start gap-2">
            <Show
                when=move || supported.get()
                fallback=|| {
                    view! {
                        <p class="text-xs text-gray-500">"Voice commands aren't supported in this browser"</p>
                    }
                }
            >
                <button
                    class=move || {
                        if listening.get() {
                            "rounded-full px-4 py-2 text-sm bg-red-600 text-white animate-pulse"
                        } else {
                            "rounded-full px-4 py-2 text-sm bg-gray-800 text-gray-200 hover:bg-gray-700"
                        }
                    }
                    on:click=toggle
                    aria-pressed=move || listening.get().to_string()
                >
                    {move || if listening.get() { "Listening..." } else { "Voice" }}
                </button>
                {move || {
                    heard
                        .get()
                        .map(|text| {
                            view! { <p class="text-xs text-gray-400">"Heard: \"" {text} "\""</p> }
                        })
                }}
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_pause(count: &Arc<AtomicUsize>) -> impl Fn() + 'static {
        let count = count.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_owner_cleanup_stops_bound_loop() {
        let paused = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let frames = ScopedLoop::new();
            frames.bind("particles", counting_pause(&paused));
        });
        assert_eq!(paused.load(Ordering::SeqCst), 0);

        owner.cleanup();
        assert_eq!(paused.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rebinding_stops_previous_loop() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let frames = ScopedLoop::new();
            frames.bind("confetti", counting_pause(&first));
            assert_eq!(first.load(Ordering::SeqCst), 0);

            frames.bind("confetti", counting_pause(&second));
            assert_eq!(first.load(Ordering::SeqCst), 1);
            assert_eq!(second.load(Ordering::SeqCst), 0);
        });

        owner.cleanup();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_then_cleanup_pauses_once() {
        let paused = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let typing = ScopedLoop::new();
            typing.bind("typewriter", counting_pause(&paused));
            typing.stop();
            typing.stop();
        });
        owner.cleanup();
        assert_eq!(paused.load(Ordering::SeqCst), 1);
    }
}
