//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tabconsole/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_HORIZONTAL_STEP;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub tabs: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrollConfig {
    pub horizontal_step: Option<usize>,
    pub wrap: Option<bool>,
}

/// Color names or `#rrggbb` strings; parsed by the TUI when building its theme.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub active_tab_fg: Option<String>,
    pub inactive_tab_fg: Option<String>,
    pub border_fg: Option<String>,
    pub help_fg: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TABS: [&str; 4] = ["Tab1", "Tab2", "Tab3", "License"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tabs: Vec<String>,
    pub horizontal_step: usize,
    pub wrap: bool,
    pub theme: ThemeConfig,
}

/// Overrides collected from command-line flags. Empty/false = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub tabs: Vec<String>,
    pub wrap: bool,
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

/// Returns the path to `~/.tabconsole/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tabconsole").join("config.toml"))
}

/// Load config from `~/.tabconsole/config.toml`.
pub fn load_config() -> Result<ConsoleConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ConsoleConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default there and
/// returns `ConsoleConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ConsoleConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ConsoleConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r##"# tabconsole configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# tabs = ["Tab1", "Tab2", "Tab3", "License"]   # Or set TABCONSOLE_TABS="a,b,c"

# [scroll]
# horizontal_step = 5                          # Columns per Ctrl+Left/Right
# wrap = false                                 # Soft-wrap long lines instead

# [theme]                                      # Color names or "#rrggbb"
# status_fg = "cyan"
# status_bg = "black"
# active_tab_fg = "magenta"
# inactive_tab_fg = "green"
# border_fg = "darkgray"
# help_fg = "gray"
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Split a comma-separated tab list, dropping blank entries.
fn parse_tab_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ConsoleConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var("TABCONSOLE_TABS").ok())
}

fn resolve_with_env(
    config: &ConsoleConfig,
    cli: &CliOverrides,
    env_tabs: Option<String>,
) -> ResolvedConfig {
    // Tabs: CLI → env → config → default. Empty lists fall through.
    let tabs = Some(cli.tabs.clone())
        .filter(|t| !t.is_empty())
        .or_else(|| env_tabs.map(|v| parse_tab_list(&v)).filter(|t| !t.is_empty()))
        .or_else(|| config.general.tabs.clone().filter(|t| !t.is_empty()))
        .unwrap_or_else(|| DEFAULT_TABS.iter().map(|s| s.to_string()).collect());

    // A zero step would make Ctrl+Left/Right dead keys
    let horizontal_step = match config.scroll.horizontal_step {
        Some(0) => {
            warn!("scroll.horizontal_step must be positive, using {}", DEFAULT_HORIZONTAL_STEP);
            DEFAULT_HORIZONTAL_STEP
        }
        Some(step) => step,
        None => DEFAULT_HORIZONTAL_STEP,
    };

    ResolvedConfig {
        tabs,
        horizontal_step,
        wrap: cli.wrap || config.scroll.wrap.unwrap_or(false),
        theme: config.theme.clone(),
    }
}
