//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use timetable_core::sources::default_sources;
use timetable_core::{ConfigError, SourceEntry, SourceTable};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timetable to read when no input is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<PathBuf>,

    /// Where to write the result when no output is given. Stdout if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    /// Known sources and their priorities.
    pub sources: Vec<SourceEntry>,

    /// Order of source groups in the output. Defaults to priority order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<Vec<String>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("input_path", &self.input_path)
            .field("output_path", &self.output_path)
            .field("sources", &self.sources.len())
            .field("display_order", &self.display_order)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            sources: default_sources(),
            display_order: None,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TIMETABLE_*)
        figment = figment.merge(Env::prefixed("TIMETABLE_"));

        figment.extract()
    }

    /// Validates the source settings into a table.
    pub fn source_table(&self) -> Result<SourceTable, ConfigError> {
        SourceTable::new(self.sources.clone(), self.display_order.clone())
    }
}

/// Returns the platform-specific config directory for timetable.
///
/// On Linux: `~/.config/timetable`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timetable"))
}
