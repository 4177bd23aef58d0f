use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::utils::calendar::{DEFAULT_YEAR_PAGE_SIZE, MAX_YEAR_PAGE_SIZE};
use crate::utils::time::HourPadding;

/// Display settings read from `~/.gamify/rc`
///
/// The file holds `key=value` lines; `#` starts a comment. Recognised keys:
///
/// - `display.pad_hour=true|false` - zero-pad the hour of 12-hour times
/// - `picker.year_page_size=<n>` - years per page for `gamify years`, 1 to 1000
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub hour_padding: HourPadding,
    pub year_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hour_padding: HourPadding::Padded,
            year_page_size: DEFAULT_YEAR_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)?;
        Some(home.join(".gamify").join("rc"))
    }

    /// Load from the configuration file, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                anyhow::bail!("Expected key=value, found '{}'", line);
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "display.pad_hour" => {
                    let pad: bool = value.parse()
                        .with_context(|| format!("display.pad_hour must be true or false, got '{}'", value))?;
                    config.hour_padding = if pad { HourPadding::Padded } else { HourPadding::Unpadded };
                }
                "picker.year_page_size" => {
                    let size: u32 = value.parse()
                        .with_context(|| format!("picker.year_page_size must be a number, got '{}'", value))?;
                    if !(1..=MAX_YEAR_PAGE_SIZE).contains(&size) {
                        anyhow::bail!("picker.year_page_size must be between 1 and {}, got {}", MAX_YEAR_PAGE_SIZE, size);
                    }
                    config.year_page_size = size;
                }
                other => log::debug!("ignoring unknown config key '{}'", other),
            }
        }

        Ok(config)
    }
}
