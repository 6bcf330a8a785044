//! Configuration handling for the TUI

use crate::state::wizard::RentalPeriod;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a JSON fixture file
pub const FIXTURES_ENV: &str = "NEXUS_FIXTURES";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Start on the landing page instead of the logo animation
    pub skip_splash: Option<bool>,
    /// Rental period a new wizard starts with ("daily", "weekly", "monthly")
    pub default_rental_period: Option<String>,
    /// JSON fixture file served instead of the built-in catalog
    pub fixtures_path: Option<PathBuf>,
    /// Prefix for money amounts
    pub currency_symbol: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("africa", "nexus", "nexus-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }

    pub fn rental_period(&self) -> RentalPeriod {
        self.default_rental_period
            .as_deref()
            .map(RentalPeriod::from_input)
            .unwrap_or_default()
    }

    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Fixture file to load; the environment wins over the config file
    pub fn fixtures_source(&self, env_value: Option<String>) -> Option<PathBuf> {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.fixtures_path.clone())
    }
}
