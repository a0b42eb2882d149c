use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static GLOBAL_PROFILES: LazyLock<Vec<Profile>> = LazyLock::new(|| match load_profiles() {
    Ok(profiles) => profiles,
    Err(e) => {
        log::error!("couldn't load profiles: {e}");
        Vec::new()
    }
});

#[derive(Embed)]
#[folder = "profiles"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: i32,
    pub category: String,
}

impl Skill {
    /// Bar width in percent. Levels outside 0..=100 are clamped so a bad
    /// record can't overflow its track.
    pub fn width_percent(&self) -> i32 {
        self.level.clamp(0, 100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub projects: u32,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub experience: String,
    pub passion: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub avatar: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub learning: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub about: About,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// The bare address behind the `mailto:` link.
    pub fn email_address(&self) -> &str {
        self.email.strip_prefix("mailto:").unwrap_or(&self.email)
    }

    pub fn phone_number(&self) -> &str {
        self.phone
            .split_once(" - ")
            .map(|(number, _)| number)
            .unwrap_or(&self.phone)
    }

    pub fn phone_note(&self) -> Option<&str> {
        self.phone.split_once(" - ").map(|(_, note)| note)
    }

    pub fn tel_link(&self) -> String {
        let digits = self
            .phone_number()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("No profiles available")]
    Empty,
    #[error("Couldn't parse profile {file}: {reason}")]
    Parse { file: String, reason: String },
}

/// Parses every embedded profile, ordered by file name.
pub fn load_profiles() -> Result<Vec<Profile>, ProfileError> {
    let mut files = Assets::iter().collect::<Vec<_>>();
    files.sort();
    files
        .into_iter()
        .map(|file| {
            let content = Assets::get(&file).ok_or_else(|| ProfileError::Parse {
                file: file.to_string(),
                reason: "missing embedded file".to_string(),
            })?;
            serde_json::from_slice::<Profile>(&content.data).map_err(|e| ProfileError::Parse {
                file: file.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn profiles() -> &'static [Profile] {
    &GLOBAL_PROFILES
}

pub fn find_profile<'a>(profiles: &'a [Profile], id: &str) -> Result<&'a Profile, ProfileError> {
    profiles
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProfileError::NotFound(id.to_string()))
}

pub fn get_profile(id: &str) -> Result<&'static Profile, ProfileError> {
    find_profile(profiles(), id)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profiles_parse_in_order() {
        let profiles = load_profiles().expect("embedded profiles should parse");
        let ids = profiles.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["saksham", "aayush"]);
        for profile in &profiles {
            assert!(!profile.skills.is_empty());
            assert!(!profile.projects.is_empty());
            let mut project_ids = profile.projects.iter().map(|p| p.id).collect::<Vec<_>>();
            project_ids.sort();
            project_ids.dedup();
            assert_eq!(project_ids.len(), profile.projects.len());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let profile = get_profile("aayush").expect("aayush should exist");
        assert_eq!(profile.name, "Aayush Chawla");
        assert_eq!(profile.location, "Delhi, India");
    }

    #[test]
    fn test_lookup_unknown_id_is_not_found() {
        assert_eq!(
            get_profile("nobody"),
            Err(ProfileError::NotFound("nobody".to_string()))
        );
        assert!(find_profile(&[], "saksham").is_err());
    }

    #[test]
    fn test_contact_helpers() {
        let profile = fixtures::profile("jane", "Jane Doe");
        assert_eq!(profile.first_name(), "Jane");
        assert_eq!(profile.email_address(), "jane@example.com");
        assert_eq!(profile.phone_number(), "(+1 555 0100)");
        assert_eq!(profile.phone_note(), Some("not actual number"));
        assert_eq!(profile.tel_link(), "tel:(+15550100)");
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(fixtures::skill("a", 140, "x").width_percent(), 100);
        assert_eq!(fixtures::skill("a", -5, "x").width_percent(), 0);
        assert_eq!(fixtures::skill("a", 64, "x").width_percent(), 64);
    }
}
