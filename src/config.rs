//! Viewer configuration
//!
//! Loaded from a JSON file under the platform config dir. Every field is
//! optional; missing keys fall back to the defaults below. Environment
//! variables are applied on top, and CLI flags on top of those (see `main`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

use crate::constants::{self, assets};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding the profile photo and certificate images
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default = "default_certificates_subdir")]
    pub certificates_subdir: String,
    #[serde(default = "default_profile_photo")]
    pub profile_photo: String,
    /// Extensions treated as images when building the certificate catalog
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_assets_dir() -> PathBuf {
    PathBuf::from(assets::DEFAULT_DIR)
}

fn default_certificates_subdir() -> String {
    assets::CERTIFICATES_SUBDIR.to_string()
}

fn default_profile_photo() -> String {
    assets::PROFILE_PHOTO.to_string()
}

fn default_image_extensions() -> Vec<String> {
    assets::IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_window_width() -> f32 {
    1100.0
}

fn default_window_height() -> f32 {
    860.0
}

fn default_log_level() -> String {
    constants::config::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            certificates_subdir: default_certificates_subdir(),
            profile_photo: default_profile_photo(),
            image_extensions: default_image_extensions(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: default_log_level(),
        }
    }
}

/// Map a log level name to a tracing level; unknown names mean INFO
pub fn parse_log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load from the default location, writing a default file on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::path();

        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, creating default config");
            let config = Config::default();
            // A read-only config dir is not fatal; we just run on defaults
            if let Err(e) = config.save_to(&config_path) {
                warn!(error = ?e, "Failed to write default config");
            }
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Apply `LOG_LEVEL` and `PORTFOLIO_ASSETS_DIR` if set
    pub fn apply_env_overrides(&mut self) {
        let log_level = env::var(constants::env::LOG_LEVEL).ok();
        let assets_dir = env::var_os(constants::env::ASSETS_DIR).map(PathBuf::from);
        self.apply_overrides(log_level, assets_dir);
    }

    /// Replace fields with any provided override; empty values are ignored
    pub fn apply_overrides(&mut self, log_level: Option<String>, assets_dir: Option<PathBuf>) {
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        if let Some(dir) = assets_dir.filter(|d| !d.as_os_str().is_empty()) {
            self.assets_dir = dir;
        }
    }

    pub fn certificates_dir(&self) -> PathBuf {
        self.assets_dir.join(&self.certificates_subdir)
    }

    pub fn profile_photo_path(&self) -> PathBuf {
        self.assets_dir.join(&self.profile_photo)
    }

    pub fn trace_level(&self) -> Level {
        parse_log_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "assets_dir": "/srv/portfolio", "log_level": "debug" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/portfolio"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.certificates_subdir, "certificates");
        assert_eq!(config.image_extensions, vec!["jpg", "jpeg", "png"]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.profile_photo = "me.png".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_overrides_replace_fields() {
        let mut config = Config::default();
        config.apply_overrides(Some("trace".to_string()), Some(PathBuf::from("/tmp/assets")));
        assert_eq!(config.trace_level(), Level::TRACE);
        assert_eq!(config.certificates_dir(), PathBuf::from("/tmp/assets/certificates"));
        assert_eq!(config.profile_photo_path(), PathBuf::from("/tmp/assets/profile.jpg"));
    }

    #[test]
    fn test_empty_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".to_string()), Some(PathBuf::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level("warn"), Level::WARN);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }
}
