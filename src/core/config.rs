//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub shows: ShowsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub band_name: Option<String>,
    pub export_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowsConfig {
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BAND_NAME: &str = "The Headliners";
pub const DEFAULT_SHOWS_URL: &str = "http://localhost:8000/data/shows.json";

/// Where exported calendars land when nothing else is configured:
/// the user's download directory, falling back to the working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub band_name: String,
    pub shows_url: String,
    pub export_dir: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# band_name = "The Headliners"       # Used in the title bar and .ics filename
# export_dir = "/home/me/Downloads"  # Where exported calendars are written

# [shows]
# url = "http://localhost:8000/data/shows.json"   # Or set MARQUEE_SHOWS_URL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_shows_url` and `cli_export_dir` come from CLI flags (None = not specified).
pub fn resolve(
    config: &MarqueeConfig,
    cli_shows_url: Option<&str>,
    cli_export_dir: Option<&Path>,
) -> ResolvedConfig {
    // Shows URL: CLI → env → config → default
    let shows_url = cli_shows_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MARQUEE_SHOWS_URL").ok())
        .or_else(|| config.shows.url.clone())
        .unwrap_or_else(|| DEFAULT_SHOWS_URL.to_string());

    // Band name: env → config → default
    let band_name = std::env::var("MARQUEE_BAND")
        .ok()
        .or_else(|| config.general.band_name.clone())
        .unwrap_or_else(|| DEFAULT_BAND_NAME.to_string());

    // Export dir: CLI → env → config → default
    let export_dir = cli_export_dir
        .map(|p| p.to_path_buf())
        .or_else(|| std::env::var("MARQUEE_EXPORT_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.export_dir.clone().map(PathBuf::from))
        .unwrap_or_else(default_export_dir);

    ResolvedConfig {
        band_name,
        shows_url,
        export_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MarqueeConfig::default();
        assert!(config.general.band_name.is_none());
        assert!(config.shows.url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MarqueeConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.band_name, DEFAULT_BAND_NAME);
        assert_eq!(resolved.shows_url, DEFAULT_SHOWS_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MarqueeConfig {
            general: GeneralConfig {
                band_name: Some("Static Age".to_string()),
                export_dir: Some("/tmp/calendars".to_string()),
            },
            shows: ShowsConfig {
                url: Some("https://staticage.example/shows.json".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.band_name, "Static Age");
        assert_eq!(resolved.shows_url, "https://staticage.example/shows.json");
        assert_eq!(resolved.export_dir, PathBuf::from("/tmp/calendars"));
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = MarqueeConfig {
            shows: ShowsConfig {
                url: Some("https://from-file.example/shows.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(
            &config,
            Some("https://from-cli.example/shows.json"),
            Some(Path::new("/tmp/out")),
        );
        assert_eq!(resolved.shows_url, "https://from-cli.example/shows.json");
        assert_eq!(resolved.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
band_name = "Static Age"
export_dir = "/home/me/Downloads"

[shows]
url = "https://staticage.example/data/shows.json"
"#;
        let config: MarqueeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.band_name.as_deref(), Some("Static Age"));
        assert_eq!(
            config.shows.url.as_deref(),
            Some("https://staticage.example/data/shows.json")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
band_name = "Static Age"
"#;
        let config: MarqueeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.band_name.as_deref(), Some("Static Age"));
        assert!(config.general.export_dir.is_none());
        assert!(config.shows.url.is_none());
    }
}
