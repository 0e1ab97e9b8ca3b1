//! User configuration.
//!
//! The config file is optional and read-only. Every field has a default, so
//! a partial file (or none at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TodoError};

const APP_DIR: &str = "todo";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TodoConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize status glyphs (done green, pending red).
    pub color: bool,
    pub done_glyph: String,
    pub pending_glyph: String,
    /// Print a count summary after listing all tasks.
    pub show_summary: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            done_glyph: "✓".to_string(),
            pending_glyph: "✗".to_string(),
            show_summary: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"todo_core=debug"`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl TodoConfig {
    /// Default location: `<config dir>/todo/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, the default path is read if
    /// present, otherwise defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(TodoError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.display.done_glyph.trim().is_empty() {
            return Err(TodoError::config("display.done_glyph must not be empty"));
        }
        if self.display.pending_glyph.trim().is_empty() {
            return Err(TodoError::config("display.pending_glyph must not be empty"));
        }
        Ok(())
    }
}
