use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_secs(3);

/// Longest a status-bar message may stay on screen
pub const MAX_FLASH_DURATION: Duration = Duration::from_secs(60);

/// Terminal color scheme selection.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ThemeMode::Auto),
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Optional user configuration.
///
/// Example YAML:
/// ```yaml
/// theme: auto
/// flash_duration: 3s
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeMode,

    /// How long status-bar messages stay visible (humantime format)
    #[serde(default = "default_flash_duration")]
    pub flash_duration: String,
}

fn default_flash_duration() -> String {
    humantime::format_duration(DEFAULT_FLASH_DURATION).to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            flash_duration: default_flash_duration(),
        }
    }
}

impl Config {
    /// Parsed flash duration. Falls back to the default when the string is
    /// invalid; `validate_config` reports that case at startup.
    pub fn flash_duration(&self) -> Duration {
        humantime::parse_duration(&self.flash_duration).unwrap_or(DEFAULT_FLASH_DURATION)
    }
}
