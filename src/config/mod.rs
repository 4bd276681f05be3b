// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! Application configuration.
//!
//! This module manages the application configuration file. Only display and
//! logging preferences live here; stopwatch state is never persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "stopwatch";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub dark_mode: bool,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dark_mode: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// The directory log files are written to, if one can be determined.
    ///
    /// An explicit `log_dir` wins, otherwise the platform cache directory is
    /// used.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(CONFIG_NAME)))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_mode_and_info_logging() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.dark_mode);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("/tmp/stopwatch-logs")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_dir(), Some(PathBuf::from("/tmp/stopwatch-logs")));
    }

    #[test]
    fn default_log_dir_is_named_after_the_app() {
        let config = AppConfig::default();
        if let Some(dir) = config.log_dir() {
            assert!(dir.ends_with(CONFIG_NAME));
        }
    }
}
