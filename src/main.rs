//! deskfolio - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use deskfolio::content::PortfolioContent;
use deskfolio::model::{AppError, Theme};

/// Terminal developer portfolio: an animated desk scene with
/// auto-cycling project displays.
#[derive(Parser, Debug)]
#[command(name = "deskfolio")]
#[command(version)]
#[command(about = "TUI developer portfolio with auto-cycling project displays")]
pub struct Args {
    /// Visual theme
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Carousel auto-advance interval in milliseconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Path to a portfolio content TOML file
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set NO_COLOR for consistent color handling throughout.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = deskfolio::config::load_config_with_precedence(args.config.clone())?;
        let merged = deskfolio::config::merge_config(config_file);
        let with_env = deskfolio::config::apply_env_overrides(merged);

        let theme_override = args.theme.as_deref().and_then(|s| s.parse::<Theme>().ok());
        deskfolio::config::apply_cli_overrides(
            with_env,
            theme_override,
            args.interval_ms,
            args.content.clone(),
        )
    };

    deskfolio::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Load portfolio content, falling back to the built-in bundle.
    let content = match &config.content_path {
        Some(path) => match deskfolio::content::load_content_file(path)? {
            Some(content) => {
                info!(path = %path.display(), "Loaded portfolio content file");
                content
            }
            None => {
                info!(path = %path.display(), "Content file not found, using built-in content");
                PortfolioContent::built_in()
            }
        },
        None => PortfolioContent::built_in(),
    };

    deskfolio::view::run_with_config(config, content, args.no_color)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["deskfolio", "--help"]);
        // Help returns Err with DisplayHelp, which is success.
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["deskfolio", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["deskfolio"]);
        assert_eq!(args.theme, None);
        assert_eq!(args.interval_ms, None);
        assert_eq!(args.content, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
    }

    #[test]
    fn theme_light_parses() {
        let args = Args::parse_from(["deskfolio", "--theme", "light"]);
        assert_eq!(args.theme, Some("light".to_string()));
    }

    #[test]
    fn theme_dark_parses() {
        let args = Args::parse_from(["deskfolio", "--theme", "dark"]);
        assert_eq!(args.theme, Some("dark".to_string()));
    }

    #[test]
    fn invalid_theme_rejects() {
        let result = Args::try_parse_from(["deskfolio", "--theme", "sepia"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn interval_accepts_positive_values() {
        let args = Args::parse_from(["deskfolio", "--interval-ms", "2500"]);
        assert_eq!(args.interval_ms, Some(2500));
    }

    #[test]
    fn interval_rejects_zero() {
        let result = Args::try_parse_from(["deskfolio", "--interval-ms", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn content_and_config_paths_parse() {
        let args = Args::parse_from([
            "deskfolio",
            "--content",
            "/tmp/content.toml",
            "--config",
            "/tmp/config.toml",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("/tmp/content.toml")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn no_color_flag_parses() {
        let args = Args::parse_from(["deskfolio", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn theme_flows_through_config_precedence_chain() {
        use deskfolio::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            theme: Some(Theme::Dark),
            cycle_interval_ms: None,
            manual_resume_ms: None,
            content_path: None,
            log_file_path: None,
            keybindings: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.theme, Theme::Dark, "config file overrides default");

        let with_cli = apply_cli_overrides(merged, Some(Theme::Light), None, None);
        assert_eq!(with_cli.theme, Theme::Light, "CLI overrides config file");
    }
}
