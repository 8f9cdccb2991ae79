//! Author profile and skill records for the about/skills panels.

use serde::Deserialize;

/// The author blurb shown on the sticky-note about panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name used in the greeting.
    pub name: String,

    /// One-line role description under the greeting.
    #[serde(default)]
    pub tagline: String,

    /// Extra biography lines revealed when the note is expanded.
    #[serde(default)]
    pub bio: Vec<String>,

    /// Contact email shown under the contact form.
    #[serde(default)]
    pub email: String,

    /// Location line, if any.
    #[serde(default)]
    pub location: Option<String>,
}

/// One entry in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Skill name (e.g. "React").
    pub name: String,

    /// Self-assessed proficiency, 0-100. Values above 100 are clamped
    /// at render time rather than rejected.
    pub level: u8,

    /// Short description shown when the skill is selected.
    #[serde(default)]
    pub description: String,
}

impl Skill {
    /// Proficiency clamped into the displayable 0-100 range.
    pub fn clamped_level(&self) -> u8 {
        self.level.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_with_minimal_fields() {
        let profile: Profile = toml::from_str(r#"name = "Lincoln""#).expect("should parse");
        assert_eq!(profile.name, "Lincoln");
        assert!(profile.bio.is_empty());
        assert_eq!(profile.location, None);
    }

    #[test]
    fn skill_level_is_clamped_to_one_hundred() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: 250,
            description: String::new(),
        };
        assert_eq!(skill.clamped_level(), 100);
    }
}
