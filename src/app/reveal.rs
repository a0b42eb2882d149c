use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::config::REVEAL_THRESHOLD;
use crate::selection::RevealGate;

const REPLAY_DELAY_MS: u64 = 50;

/// Reveals once when `target` is sufficiently on screen, and re-arms when
/// `key` (the profile id) changes.
pub fn use_reveal(target: NodeRef<html::Section>, key: Signal<String>) -> Signal<bool> {
    let gate = StoredValue::new(RevealGate::new(key.get_untracked()));
    let last_fraction = StoredValue::new(0.0_f64);
    let (revealed, set_revealed) = signal(false);

    Effect::watch(
        move || key.get(),
        move |key, _, _| {
            let rearmed = gate.try_update_value(|g| g.rekey(key)).unwrap_or(false);
            if !rearmed {
                return;
            }
            set_revealed.set(false);
            // the observer only reports crossings, so replay the last sample
            // once the hidden state has painted
            set_timeout(
                move || {
                    let fraction = last_fraction.try_get_value().unwrap_or(0.0);
                    if gate.try_update_value(|g| g.observe(fraction)).unwrap_or(false) {
                        set_revealed.set(true);
                    }
                },
                Duration::from_millis(REPLAY_DELAY_MS),
            );
        },
        false,
    );

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let fraction = entries
                .iter()
                .filter(|e| e.is_intersecting())
                .map(|e| e.intersection_ratio())
                .fold(0.0, f64::max);
            last_fraction.set_value(fraction);
            if gate.try_update_value(|g| g.observe(fraction)).unwrap_or(false) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    revealed.into()
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "transition-all duration-1000 opacity-100 translate-y-0"
    } else {
        "transition-all duration-1000 opacity-0 translate-y-10"
    }
}

pub fn fade_in_class(revealed: bool) -> &'static str {
    if revealed {
        "animate-fadeIn"
    } else {
        ""
    }
}
