pub mod init;
mod schema;

pub use schema::{Config, ThemeMode, DEFAULT_FLASH_DURATION, MAX_FLASH_DURATION};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/revenue-scorecard/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("revenue-scorecard")
}

/// Get the default config file path (~/.config/revenue-scorecard/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Ensure the directory that will hold `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional explicit path. If None, uses the default path and falls
///   back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        crate::log_info!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    crate::log_info!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match humantime::parse_duration(&config.flash_duration) {
        Ok(d) if d.is_zero() => {
            errors.push("flash_duration: must be greater than zero".to_string());
        }
        Ok(d) if d > MAX_FLASH_DURATION => {
            errors.push(format!(
                "flash_duration: '{}' exceeds the {}s maximum",
                config.flash_duration,
                MAX_FLASH_DURATION.as_secs()
            ));
        }
        Ok(_) => {}
        Err(e) => {
            errors.push(format!(
                "flash_duration: invalid format '{}' - {}",
                config.flash_duration, e
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("revenue-scorecard-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/revenue-scorecard/config.yaml"));
    }

    #[test]
    fn test_missing_explicit_path_errors() {
        let path = temp_path("does-not-exist.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("load.yaml");
        fs::write(&path, "theme: dark\nflash_duration: 2s\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.flash_duration, "2s");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_invalid_yaml() {
        let path = temp_path("invalid.yaml");
        fs::write(&path, "theme: [unclosed\n").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_flash_duration() {
        let config = Config {
            flash_duration: "soon".to_string(),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("flash_duration"));
    }

    #[test]
    fn test_zero_flash_duration() {
        let config = Config {
            flash_duration: "0s".to_string(),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("greater than zero"));
    }

    #[test]
    fn test_flash_duration_too_long() {
        let config = Config {
            flash_duration: "5m".to_string(),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("maximum"));
    }
}
