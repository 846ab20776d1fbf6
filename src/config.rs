use crate::core::{Result, TvEventsError};
use crate::platform::{Os, Platform};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UIConfig,
    pub platform: Option<PlatformConfig>,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI-related configuration.
#[derive(Debug, Default, Deserialize)]
pub struct UIConfig {
    pub show_help: Option<bool>,
}

/// Overrides for platform detection.
#[derive(Debug, Deserialize)]
pub struct PlatformConfig {
    pub os: Option<Os>,
    pub is_tv: Option<bool>,
}

/// Terminal input configuration.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct InputConfig {
    /// Whether the terminal reports key repeat and release events. When set,
    /// holding select produces a long press instead of a plain press.
    #[serde(default)]
    pub key_release_events: bool,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl Config {
    /// Platform after applying the `[platform]` overrides to detection.
    pub fn platform(&self) -> Platform {
        let detected = Platform::detect();
        match &self.platform {
            Some(p) => Platform::new(
                p.os.unwrap_or(detected.os),
                p.is_tv.unwrap_or(detected.is_tv),
            ),
            None => detected,
        }
    }

    pub fn show_help(&self) -> bool {
        self.ui.show_help.unwrap_or(true)
    }
}

/// Default location of the configuration file, if the platform has a
/// config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tvevents").join("config.toml"))
}

/// Default location of the log file used by the terminal front end.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tvevents").join("tvevents.log"))
}

/// Loads configuration from a TOML file at the given path.
///
/// # Arguments
///
/// * `path` - The file path to the TOML configuration file.
///
/// # Example
///
/// ```no_run
/// let config = tvevents::config::load_config("config.toml").expect("Failed to load config");
/// println!("{:?}", config);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| TvEventsError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| TvEventsError::Config(e.to_string()))
}

/// Loads the explicit path if given, else the default file if it exists,
/// else the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(Config::default()),
    }
}
