#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Noir,
    Light,
    Matrix,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::Noir => Theme::Light,
            Theme::Light => Theme::Matrix,
            Theme::Matrix => Theme::Noir,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Noir => "theme-noir bg-black text-white",
            Theme::Light => "theme-light bg-gray-100 text-gray-900",
            Theme::Matrix => "theme-matrix bg-black text-green-400",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Noir => "noir",
            Theme::Light => "light",
            Theme::Matrix => "matrix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    SetTheme(Theme),
    NextTheme,
    Celebrate,
    ToggleRain,
}

/// Maps a recognised phrase to a command. Matching is by keyword so
/// "switch to dark mode please" works as well as "dark mode".
pub fn parse_voice_command(transcript: &str) -> Option<VoiceCommand> {
    let t = transcript.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| t.contains(w));
    if has(&["matrix"]) {
        Some(VoiceCommand::SetTheme(Theme::Matrix))
    } else if has(&["dark", "night", "noir"]) {
        Some(VoiceCommand::SetTheme(Theme::Noir))
    } else if has(&["light", "bright", "day mode"]) {
        Some(VoiceCommand::SetTheme(Theme::Light))
    } else if has(&["party", "confetti", "celebrate"]) {
        Some(VoiceCommand::Celebrate)
    } else if has(&["rain", "code"]) {
        Some(VoiceCommand::ToggleRain)
    } else if has(&["theme", "switch", "change"]) {
        Some(VoiceCommand::NextTheme)
    } else {
        None
    }
}

const KONAMI: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    /// Feeds one key; returns true when the sequence completes.
    pub fn press(&mut self, key: &str) -> bool {
        let key = if key.len() == 1 {
            key.to_lowercase()
        } else {
            key.to_string()
        };
        if key == KONAMI[self.progress] {
            self.progress += 1;
        } else {
            // "up up up" still leaves the last two ups as a valid prefix
            self.progress = match (key == KONAMI[0], self.progress) {
                (true, 2) => 2,
                (true, _) => 1,
                (false, _) => 0,
            };
        }
        if self.progress == KONAMI.len() {
            self.progress = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_commands() {
        assert_eq!(
            parse_voice_command("Switch to DARK mode"),
            Some(VoiceCommand::SetTheme(Theme::Noir))
        );
        assert_eq!(
            parse_voice_command("light mode"),
            Some(VoiceCommand::SetTheme(Theme::Light))
        );
        assert_eq!(
            parse_voice_command("enter the matrix"),
            Some(VoiceCommand::SetTheme(Theme::Matrix))
        );
        assert_eq!(parse_voice_command("party time"), Some(VoiceCommand::Celebrate));
        assert_eq!(parse_voice_command("make it rain"), Some(VoiceCommand::ToggleRain));
        assert_eq!(parse_voice_command("change theme"), Some(VoiceCommand::NextTheme));
        assert_eq!(parse_voice_command("hello"), None);
    }

    #[test]
    fn test_theme_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.next().next().next(), theme);
    }

    #[test]
    fn test_konami_sequence() {
        let mut tracker = KonamiTracker::default();
        let mut keys = vec!["ArrowUp"];
        keys.extend(KONAMI);
        let fired = keys.iter().filter(|k| tracker.press(k)).count();
        assert_eq!(fired, 1);

        assert!(!tracker.press("ArrowUp"));
        assert!(!tracker.press("x"));
        for key in KONAMI.iter().take(9) {
            assert!(!tracker.press(key));
        }
        assert!(tracker.press("A"));
    }
}
