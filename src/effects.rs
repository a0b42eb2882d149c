//! Models behind the decorative animations. They hold no browser state, so
//! the loops that drive them live in `app::effects`.

use fastrand::Rng;

use crate::config::HERO_DOTS;

mod confetti;
mod lifecycle;
mod particles;
mod rain;
mod trail;
mod typewriter;
mod voice;

pub use confetti::{Confetti, Piece};
pub use lifecycle::LoopGuard;
pub use particles::{Particle, ParticleField};
pub use rain::CodeRain;
pub use trail::{Trail, TrailPoint};
pub use typewriter::Typewriter;
pub use voice::{parse_voice_command, KonamiTracker, Theme, VoiceCommand};

/// Positions of the drifting background dots. Seeded by profile so the
/// server and the browser agree on the markup.
pub fn hero_dots(profile_id: &str) -> Vec<String> {
    let mut rng = Rng::with_seed(seed_for(profile_id));
    (0..HERO_DOTS)
        .map(|_| {
            format!(
                "left: {:.1}%; top: {:.1}%; animation-delay: {:.1}s; animation-duration: {:.1}s",
                rng.f64() * 100.0,
                rng.f64() * 100.0,
                rng.f64() * 3.0,
                2.0 + rng.f64() * 3.0,
            )
        })
        .collect()
}

/// Drawable area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// FNV-1a of `key`, used to seed effects that must render the same on the
/// server and in the browser.
pub fn seed_for(key: &str) -> u64 {
    key.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable_per_key() {
        assert_eq!(seed_for("saksham"), seed_for("saksham"));
        assert_ne!(seed_for("saksham"), seed_for("aayush"));
        assert_eq!(seed_for(""), 0xcbf2_9ce4_8422_2325);
    }

    #[test]
    fn test_hero_dots_match_between_renders() {
        assert_eq!(hero_dots("saksham"), hero_dots("saksham"));
        assert_ne!(hero_dots("saksham"), hero_dots("aayush"));
        assert_eq!(hero_dots("saksham").len(), HERO_DOTS);
    }

    #[test]
    fn test_viewport_contains_edges() {
        let viewport = Viewport::new(10.0, 5.0);
        assert!(viewport.contains(0.0, 0.0));
        assert!(viewport.contains(10.0, 5.0));
        assert!(!viewport.contains(10.1, 1.0));
        assert!(!viewport.contains(1.0, -0.1));
    }
}
