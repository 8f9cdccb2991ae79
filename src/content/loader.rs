//! Content file loading.
//!
//! A content file is a TOML rendition of [`PortfolioContent`]. A missing
//! file is not an error — the built-in bundle is used instead — but a
//! file that exists and cannot be read or parsed is reported rather than
//! silently ignored.

use std::path::PathBuf;

use thiserror::Error;

use super::PortfolioContent;

/// Errors raised while loading a portfolio content file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The file exists but could not be read.
    #[error("Failed to read content file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The file was read but is not valid content TOML.
    #[error("Invalid content TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Default content file location: `<config dir>/deskfolio/content.toml`.
///
/// Returns `None` when the platform has no config directory.
pub fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskfolio").join("content.toml"))
}

/// Load a content file if it exists.
///
/// Returns `Ok(None)` for a missing file so callers can fall back to
/// [`PortfolioContent::built_in`].
pub fn load_content_file(
    path: impl Into<PathBuf>,
) -> Result<Option<PortfolioContent>, ContentError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ContentError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let content: PortfolioContent =
        toml::from_str(&contents).map_err(|e| ContentError::ParseError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("deskfolio_content_{name}.toml"));
        fs::write(&path, contents).expect("write temp content file");
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let result = load_content_file("/nonexistent/deskfolio/content.toml");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn valid_file_parses_into_content() {
        let path = temp_file(
            "valid",
            r#"
            [profile]
            name = "Ada"
            tagline = "Engineer"

            [[web_projects]]
            title = "Analytical Engine"
            tech = ["Brass"]

            [[skills]]
            name = "Mathematics"
            level = 100
            "#,
        );

        let content = load_content_file(&path)
            .expect("load should succeed")
            .expect("file exists");
        assert_eq!(content.profile.name, "Ada");
        assert_eq!(content.web_projects.len(), 1);
        assert!(content.mobile_projects.is_empty());
        assert_eq!(content.skills[0].clamped_level(), 100);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        let path = temp_file("malformed", "profile = [not toml");

        let err = load_content_file(&path).expect_err("should fail to parse");
        assert!(matches!(err, ContentError::ParseError { .. }));
        assert!(err.to_string().contains("Invalid content TOML"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let path = temp_file(
            "unknown_key",
            r#"
            [profile]
            name = "Ada"

            [mystery]
            value = 1
            "#,
        );

        let err = load_content_file(&path).expect_err("unknown section should fail");
        assert!(matches!(err, ContentError::ParseError { .. }));

        let _ = fs::remove_file(path);
    }
}
