//! Project records shown on the display surfaces.

use serde::Deserialize;

/// One showcased project.
///
/// Opaque to the carousel controller; only the display surfaces read the
/// fields. Web projects typically carry `live_url` + `repo_url`, mobile
/// projects `repo_url` + `store_url`, but nothing enforces that — absent
/// links simply render no action row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Display title.
    pub title: String,

    /// Technology tags rendered as chips.
    #[serde(default)]
    pub tech: Vec<String>,

    /// Short prose description.
    #[serde(default)]
    pub description: String,

    /// Deployed/live URL, if the project is reachable online.
    #[serde(default)]
    pub live_url: Option<String>,

    /// Source repository URL.
    #[serde(default)]
    pub repo_url: Option<String>,

    /// App-store or distribution URL for mobile projects.
    #[serde(default)]
    pub store_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_deserializes_from_toml_with_defaults() {
        let project: Project = toml::from_str(
            r#"
            title = "HydrateNow"
            tech = ["React Native", "Expo"]
            "#,
        )
        .expect("minimal project should parse");

        assert_eq!(project.title, "HydrateNow");
        assert_eq!(project.tech.len(), 2);
        assert!(project.description.is_empty());
        assert_eq!(project.live_url, None);
    }

    #[test]
    fn project_rejects_unknown_fields() {
        let result: Result<Project, _> = toml::from_str(
            r#"
            title = "X"
            banner = "nope"
            "#,
        );
        assert!(result.is_err(), "unknown fields should be rejected");
    }
}
