//! Portfolio content: what the desk actually shows.
//!
//! Content is data, not code — a bundle of project, skill, and profile
//! records. A built-in bundle ships in the binary; users can replace it
//! with a TOML file (see [`loader`]).

pub mod loader;

pub use loader::{default_content_path, load_content_file, ContentError};

use crate::model::{Profile, Project, Skill};
use serde::Deserialize;

/// Everything the desk scene displays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    /// Author blurb for the about note and contact footer.
    pub profile: Profile,

    /// Projects rotated on the laptop screen.
    #[serde(default)]
    pub web_projects: Vec<Project>,

    /// Projects rotated on the phone screen.
    #[serde(default)]
    pub mobile_projects: Vec<Project>,

    /// Entries for the skills grid.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl PortfolioContent {
    /// The content bundle compiled into the binary.
    ///
    /// Used whenever no content file is present. Empty project lists are
    /// legal — the displays then show a placeholder and never cycle.
    pub fn built_in() -> Self {
        Self {
            profile: Profile {
                name: "Lincoln".to_string(),
                tagline: "Full-Stack Developer passionate about creating web and mobile applications.".to_string(),
                bio: vec![
                    "Focus: React, Node.js, and modern web technologies".to_string(),
                    "Experience: 2+ years building scalable applications".to_string(),
                    "Passion: Games, sports, and new technologies".to_string(),
                    "Fun fact: I love traveling.".to_string(),
                ],
                email: "alex.dev@example.com".to_string(),
                location: Some("Atlanta, GA".to_string()),
            },
            web_projects: vec![
                Project {
                    title: "Interactive Developer Portfolio".to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Tailwind CSS".to_string(),
                        "Framer Motion".to_string(),
                        "Vite".to_string(),
                    ],
                    description: "A dynamic and interactive developer portfolio featuring an animated desk scene with auto-cycling project displays and theme switching capabilities.".to_string(),
                    live_url: Some("https://lincolnbruce.online/".to_string()),
                    repo_url: Some("https://github.com/abruce4/Portfolio".to_string()),
                    store_url: None,
                },
                Project {
                    title: "Le Nouveau Maquis".to_string(),
                    tech: vec![
                        "Wordpress".to_string(),
                        "Elementor".to_string(),
                        "Kubio".to_string(),
                    ],
                    description: "A website for a local restaurant, built with Wordpress and Elementor.".to_string(),
                    live_url: Some("https://lnmaquis.com".to_string()),
                    repo_url: Some("https://github.com/abruce4/lnmaquis".to_string()),
                    store_url: None,
                },
            ],
            mobile_projects: vec![
                Project {
                    title: "LN MAQUIS".to_string(),
                    tech: vec![
                        "React Native".to_string(),
                        "Expo".to_string(),
                        "Firebase".to_string(),
                    ],
                    description: "A mobile app for a local restaurant, built with React Native and Expo.".to_string(),
                    live_url: None,
                    repo_url: Some("https://github.com/abruce4/lnmaquis".to_string()),
                    store_url: Some("https://testflight.apple.com/join/KTcB2cCQ".to_string()),
                },
                Project {
                    title: "HydrateNow".to_string(),
                    tech: vec![
                        "React Native".to_string(),
                        "Expo".to_string(),
                        "TypeScript".to_string(),
                    ],
                    description: "A water tracking app.".to_string(),
                    live_url: None,
                    repo_url: Some("https://github.com/abruce4/HydrateNow".to_string()),
                    store_url: Some(
                        "https://play.google.com/store/apps/details?id=com.abruce4.hydratenow"
                            .to_string(),
                    ),
                },
            ],
            skills: vec![
                Skill {
                    name: "React".to_string(),
                    level: 95,
                    description: "Advanced proficiency with hooks, context, and state management"
                        .to_string(),
                },
                Skill {
                    name: "JavaScript".to_string(),
                    level: 90,
                    description: "ES6+, async/await, functional programming, and modern patterns"
                        .to_string(),
                },
                Skill {
                    name: "Node.js".to_string(),
                    level: 85,
                    description: "Server-side development, APIs, and microservices architecture"
                        .to_string(),
                },
                Skill {
                    name: "Firebase".to_string(),
                    level: 95,
                    description: "Auth, Firestore, and serverless functions at application scale"
                        .to_string(),
                },
                Skill {
                    name: "CSS/Tailwind".to_string(),
                    level: 88,
                    description: "Responsive design, animations, and modern CSS frameworks"
                        .to_string(),
                },
                Skill {
                    name: "Wordpress".to_string(),
                    level: 90,
                    description: "Theme customization and site building for small businesses"
                        .to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_bundle_has_both_display_surfaces_populated() {
        let content = PortfolioContent::built_in();
        assert!(content.web_projects.len() > 1, "laptop should cycle");
        assert!(content.mobile_projects.len() > 1, "phone should cycle");
        assert!(!content.skills.is_empty());
        assert!(!content.profile.name.is_empty());
    }

    #[test]
    fn built_in_skill_levels_are_displayable() {
        for skill in PortfolioContent::built_in().skills {
            assert!(skill.clamped_level() <= 100);
        }
    }
}
