//! Tunables shared by the sections and the effect loops.

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;
/// Delay before the hero plays its entrance animation.
pub const HERO_REVEAL_DELAY_MS: f64 = 100.0;
/// Delay between a skills reveal and its bars starting to fill.
pub const SKILL_BARS_DELAY_MS: f64 = 500.0;
pub const SKILL_BAR_STAGGER_MS: u32 = 100;
pub const SKILL_COUNTER_INTERVAL_MS: u64 = 20;
/// How long "Message Sent!" stays up before the form resets.
pub const SUBMITTED_DISPLAY_MS: f64 = 3000.0;
/// Scroll offset past which the header gets its solid background.
pub const HEADER_SCROLLED_PX: f64 = 50.0;
pub const TYPEWRITER_INTERVAL_MS: u64 = 60;
pub const HERO_DOTS: usize = 20;

pub const TRAIL_LEN: usize = 12;
pub const TRAIL_TTL_MS: f64 = 400.0;
pub const PARTICLE_COUNT: usize = 40;
pub const RAIN_COLUMN_WIDTH: f64 = 16.0;
pub const CONFETTI_PIECES: usize = 120;
pub const CONFETTI_TTL_MS: f64 = 3500.0;

pub const LOGO_PATH: &str = "/Logo.png";
pub const LOGO_FALLBACK: &str = "FF";
pub const SITE_NAME: &str = "FolioFlix";
pub const INSTALL_DISMISSED_KEY: &str = "install_prompt_dismissed";

pub const NAV_SECTIONS: [&str; 5] = ["Home", "About", "Skills", "Projects", "Contact"];

/// Timestamp captured by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> i32 {
    use chrono::Datelike;
    chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or(2024)
}

pub fn section_anchor(label: &str) -> String {
    label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_comes_from_stamp() {
        assert!(build_year() >= 2024);
    }

    #[test]
    fn test_nav_anchors_match_section_ids() {
        let anchors = NAV_SECTIONS.map(section_anchor);
        assert_eq!(anchors, ["home", "about", "skills", "projects", "contact"]);
    }
}
