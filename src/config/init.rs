use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{ensure_parent_dir, get_config_path, validate_config, Config, ThemeMode};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    Ok(parse_yes_no(&input, default_yes))
}

fn parse_yes_no(input: &str, default_yes: bool) -> bool {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        default_yes
    } else {
        input == "y" || input == "yes"
    }
}

/// Check a candidate flash duration the same way startup validation does.
fn check_flash_duration(input: &str) -> Result<(), String> {
    let candidate = Config {
        flash_duration: input.to_string(),
        ..Config::default()
    };
    validate_config(&candidate).map_err(|errors| errors.join("; "))
}

/// Serialize and write the config atomically, creating the directory if needed.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    ensure_parent_dir(path)?;

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

/// Run the interactive init wizard to create a config file.
///
/// If `path` is Some, writes there; otherwise to the default config path.
pub fn run_init_wizard(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(get_config_path);

    println!();
    println!("Revenue Scorecard Configuration");
    println!("===============================");
    println!();

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("A config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing config.");
            return Ok(());
        }
    }

    let defaults = Config::default();

    println!("Theme controls the scorecard colors. 'auto' follows your terminal background.");
    let theme = loop {
        let input = prompt_with_default("Theme (auto/dark/light)", defaults.theme.as_str())?;
        match ThemeMode::parse(&input) {
            Some(mode) => break mode,
            None => println!("  Invalid: choose auto, dark or light. Try again."),
        }
    };

    println!();
    println!("Status messages (like 'Opened: Book Strategy Audit') fade after this long.");
    let flash_duration = loop {
        let input = prompt_with_default("Message duration", &defaults.flash_duration)?;
        match check_flash_duration(&input) {
            Ok(()) => break input,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    let config = Config {
        theme,
        flash_duration,
    };
    write_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
        assert!(parse_yes_no("Yes", false));
        assert!(parse_yes_no("y", false));
        assert!(!parse_yes_no("nope", true));
    }

    #[test]
    fn test_check_flash_duration() {
        assert!(check_flash_duration("2s").is_ok());
        assert!(check_flash_duration("later").is_err());
        assert!(check_flash_duration("0s").is_err());
    }

    #[test]
    fn test_write_config_roundtrip() {
        let dir = env::temp_dir().join(format!("revenue-scorecard-init-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let config = Config {
            theme: ThemeMode::Light,
            flash_duration: "4s".to_string(),
        };

        write_config(&path, &config).unwrap();
        let loaded = crate::config::load_config(Some(path.clone())).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }
}
