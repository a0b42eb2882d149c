use crate::config::REVEAL_THRESHOLD;
use crate::profiles::{Profile, ProfileError};

/// The active profile, plus an epoch that advances every time the identity
/// of the active profile changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    profiles: &'a [Profile],
    active: usize,
    epoch: u64,
}

impl<'a> Selection<'a> {
    pub fn new(profiles: &'a [Profile]) -> Result<Self, ProfileError> {
        if profiles.is_empty() {
            return Err(ProfileError::Empty);
        }
        Ok(Self {
            profiles,
            active: 0,
            epoch: 0,
        })
    }

    pub fn profiles(&self) -> &'a [Profile] {
        self.profiles
    }

    pub fn active(&self) -> &'a Profile {
        &self.profiles[self.active]
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Switch to the profile with `id`. Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: &str) -> Result<&'a Profile, ProfileError> {
        let profiles = self.profiles;
        let index = profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;
        let profile = &profiles[index];
        if index != self.active {
            self.active = index;
            self.epoch += 1;
            log::debug!("switched to profile {} (epoch {})", profile.name, self.epoch);
        }
        Ok(profile)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Revealed,
}

/// One-shot entrance trigger for a section, re-armed when the profile changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGate {
    key: String,
    threshold: f64,
    state: Reveal,
}

impl RevealGate {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_threshold(key, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(key: impl Into<String>, threshold: f64) -> Self {
        Self {
            key: key.into(),
            threshold,
            state: Reveal::Hidden,
        }
    }

    pub fn state(&self) -> Reveal {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == Reveal::Revealed
    }

    /// Feed a visibility sample. Returns true only on the transition to
    /// `Revealed`.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.state == Reveal::Revealed || visible_fraction < self.threshold {
            return false;
        }
        self.state = Reveal::Revealed;
        true
    }

    /// Forces the reveal regardless of visibility (used by the hero).
    pub fn open(&mut self) -> bool {
        self.observe(f64::INFINITY)
    }

    /// Re-arms the gate if `key` names a different profile.
    pub fn rekey(&mut self, key: &str) -> bool {
        if self.key == key {
            return false;
        }
        self.key = key.to_string();
        self.state = Reveal::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::fixtures;

    fn two_profiles() -> Vec<Profile> {
        vec![
            fixtures::profile("jane", "Jane Doe"),
            fixtures::profile("sam", "Sam Roe"),
        ]
    }

    #[test]
    fn test_defaults_to_first_profile() {
        let profiles = two_profiles();
        let selection = Selection::new(&profiles).expect("should have profiles");
        assert_eq!(selection.active().id, "jane");
        assert_eq!(selection.epoch(), 0);
    }

    #[test]
    fn test_empty_store_is_an_error() {
        assert_eq!(Selection::new(&[]), Err(ProfileError::Empty));
    }

    #[test]
    fn test_select_switches_profile_and_rearms_reveals() {
        let profiles = two_profiles();
        let mut selection = Selection::new(&profiles).expect("should have profiles");
        let mut about = RevealGate::new(selection.active().id.clone());
        assert!(about.observe(0.5));

        let profile = selection.select("sam").expect("sam should exist");
        assert_eq!(profile.name, "Sam Roe");
        assert_eq!(selection.active().role, "Sam Roe's role");
        assert_eq!(selection.active().skills, profiles[1].skills);
        assert_eq!(selection.epoch(), 1);

        assert!(about.rekey(&selection.active().id));
        assert_eq!(about.state(), Reveal::Hidden);
        assert!(about.observe(0.5));
    }

    #[test]
    fn test_reselecting_same_profile_keeps_epoch() {
        let profiles = two_profiles();
        let mut selection = Selection::new(&profiles).expect("should have profiles");
        selection.select("jane").expect("jane should exist");
        assert_eq!(selection.epoch(), 0);

        let mut gate = RevealGate::new("jane");
        gate.observe(1.0);
        assert!(!gate.rekey("jane"));
        assert!(gate.is_revealed());
    }

    #[test]
    fn test_unknown_selection_leaves_state() {
        let profiles = two_profiles();
        let mut selection = Selection::new(&profiles).expect("should have profiles");
        assert_eq!(
            selection.select("ghost"),
            Err(ProfileError::NotFound("ghost".to_string()))
        );
        assert_eq!(selection.active().id, "jane");
        assert_eq!(selection.epoch(), 0);
    }

    #[test]
    fn test_switching_back_and_forth_tracks_index() {
        let profiles = two_profiles();
        let mut selection = Selection::new(&profiles).expect("should have profiles");
        assert_eq!(selection.select("sam").map(|p| p.name.as_str()), Ok("Sam Roe"));
        assert_eq!(selection.select("jane").map(|p| p.name.as_str()), Ok("Jane Doe"));
        assert_eq!(selection.active().id, "jane");
        assert_eq!(selection.epoch(), 2);
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut gate = RevealGate::with_threshold("jane", 0.3);
        assert!(!gate.observe(0.1));
        assert!(gate.observe(0.3));
        assert!(!gate.observe(0.9));
        assert!(!gate.open());
        assert!(gate.is_revealed());
    }
}
