use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the weatherapi.com API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Environment variable holding the location query, e.g. a city name.
pub const LOCATION_VAR: &str = "WEATHER_LOCATION";

/// weatherapi.com caps forecast requests at 14 days.
pub const MAX_FORECAST_DAYS: u8 = 14;

const DEFAULT_FORECAST_DAYS: u8 = 3;
const DEFAULT_FORECAST_HOUR: u32 = 11;

/// Runtime configuration, assembled once at startup and handed to the rest
/// of the program. Nothing below the entry point reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub location: String,

    /// Forecast days requested from the service; the free tier caps this at 3.
    pub forecast_days: u8,

    /// Hour of day (0-23) whose entry is reported for upcoming days.
    pub forecast_hour: u32,
}

impl Config {
    /// Read the required variables from the process environment and merge
    /// display preferences from the settings file, if one exists.
    pub fn from_env() -> Result<Self> {
        let settings = Settings::load()?;
        Self::from_lookup(settings, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        settings: Settings,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = require(&lookup, API_KEY_VAR)?;
        let location = require(&lookup, LOCATION_VAR)?;

        let forecast_days = settings.forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS);
        if !(1..=MAX_FORECAST_DAYS).contains(&forecast_days) {
            return Err(anyhow!(
                "forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {forecast_days}"
            ));
        }

        let forecast_hour = settings.forecast_hour.unwrap_or(DEFAULT_FORECAST_HOUR);
        if forecast_hour > 23 {
            return Err(anyhow!("forecast_hour must be between 0 and 23, got {forecast_hour}"));
        }

        Ok(Self { api_key, location, forecast_days, forecast_hour })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name).filter(|value| !value.is_empty()).ok_or_else(|| anyhow!("{name} is not set"))
}

/// Optional display preferences stored on disk.
///
/// Example TOML:
/// forecast_days = 3
/// forecast_hour = 11
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub forecast_days: Option<u8>,
    pub forecast_hour: Option<u32>,
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_file_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }

    /// Path to the settings file.
    pub fn settings_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("settings.toml"))
    }
}
