//! Configuration handling for the project board
//!
//! Configuration is stored in `.board/config.toml` (project) and
//! `~/.config/project-board/config.toml` (global). Both files are optional;
//! missing files fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory that marks a board project root
pub const BOARD_DIR: &str = ".board";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Rules applied to the new-project form
///
/// Bounds are exclusive, so the defaults accept descriptions of 6+
/// characters and 2 to 5 people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRules {
    /// Description must be longer than this many characters
    pub description_min_length: usize,

    /// People count must be greater than this
    pub people_min: u32,

    /// People count must be less than this
    pub people_max: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1,
            people_max: 6,
        }
    }
}

impl InputRules {
    /// Checks the rules can ever accept input
    pub fn check(&self) -> Result<(), ConfigError> {
        let bounded = self.people_max != 0 && self.people_min != 0;
        if bounded && self.people_max <= self.people_min.saturating_add(1) {
            return Err(ConfigError::Invalid(format!(
                "input.people_max ({}) leaves no room above input.people_min ({})",
                self.people_max, self.people_min
            )));
        }
        Ok(())
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Project-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    /// Form validation rules
    pub input: InputRules,

    /// Terminal UI settings
    pub tui: TuiConfig,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub board: BoardConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project_root = Self::find_project_root();
        let board = match &project_root {
            Some(root) => Self::load_board_config(root)?,
            None => BoardConfig::default(),
        };

        board.input.check()?;

        tracing::debug!(project_root = ?project_root, "configuration loaded");

        Ok(Self {
            board,
            global,
            project_root,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "project-board", "project-board")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads board configuration from a specific root
    pub fn load_board_config(project_root: &Path) -> Result<BoardConfig> {
        let config_path = Self::config_path(project_root);

        if !config_path.exists() {
            return Ok(BoardConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")
    }

    /// Path of the project config file under a root
    pub fn config_path(project_root: &Path) -> PathBuf {
        project_root.join(BOARD_DIR).join("config.toml")
    }

    /// Finds the project root by looking for a `.board/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_project_root_from(&current)
    }

    /// Walks up from `start` looking for a `.board/` directory
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(BOARD_DIR).is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Creates `.board/config.toml` under `path` with default settings
    ///
    /// An existing config file is left untouched.
    pub fn init(path: &Path) -> Result<PathBuf> {
        let board_dir = path.join(BOARD_DIR);
        fs::create_dir_all(&board_dir)
            .with_context(|| format!("Failed to create {}", board_dir.display()))?;

        let config_path = Self::config_path(path);
        if !config_path.exists() {
            let content = toml::to_string_pretty(&BoardConfig::default())
                .context("Failed to serialize project config")?;
            fs::write(&config_path, content).with_context(|| {
                format!("Failed to write project config: {}", config_path.display())
            })?;
        }

        Ok(config_path)
    }
}
