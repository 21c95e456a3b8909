//! Starter Select - pick your starter creature from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use starter_app::config::{self, ColorSchemePreference, Settings};
use starter_core::logging;
use starter_core::prelude::*;

/// Starter Select - pick your starter creature from the terminal
#[derive(Parser, Debug)]
#[command(name = "starter")]
#[command(about = "Pick your starter creature from the terminal", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured color scheme (auto, light or dark)
    #[arg(long, value_name = "SCHEME")]
    color_scheme: Option<ColorSchemePreference>,
}

/// Load settings for the given arguments; command-line flags win over the file
fn settings_for(args: &Args) -> Settings {
    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(scheme) = args.color_scheme {
        debug!("Color scheme overridden from command line: {:?}", scheme);
        settings.ui.color_scheme = scheme;
    }
    settings
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Starter Select starting");
    info!("═══════════════════════════════════════════════════════");

    let settings = settings_for(&args);

    let result = starter_tui::run(settings);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
    }

    info!("Starter Select exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_CONFIG: &str = "/nonexistent/starter-select/config.toml";

    #[test]
    fn test_color_scheme_flag_overrides_settings() {
        let args = Args::try_parse_from([
            "starter",
            "--config",
            MISSING_CONFIG,
            "--color-scheme",
            "dark",
        ])
        .unwrap();

        assert_eq!(args.color_scheme, Some(ColorSchemePreference::Dark));
        assert_eq!(settings_for(&args).ui.color_scheme, ColorSchemePreference::Dark);
    }

    #[test]
    fn test_color_scheme_flag_is_case_insensitive() {
        let args = Args::try_parse_from(["starter", "--color-scheme", "LIGHT"]).unwrap();
        assert_eq!(args.color_scheme, Some(ColorSchemePreference::Light));
    }

    #[test]
    fn test_without_flag_settings_keep_file_value() {
        let args = Args::try_parse_from(["starter", "--config", MISSING_CONFIG]).unwrap();

        assert_eq!(args.color_scheme, None);
        assert_eq!(settings_for(&args), Settings::default());
    }

    #[test]
    fn test_unknown_color_scheme_rejected() {
        let result = Args::try_parse_from(["starter", "--color-scheme", "sepia"]);
        assert!(result.is_err());
    }
}
