/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::common::ComponentId;

/// Configuration for a Sentinel runtime.
///
/// Loaded from a TOML file in XDG-compliant directories. Every section and every
/// key is optional; anything left out keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Run-loop limits
    pub limits: LimitsConfig,
    /// Default values configuration
    pub defaults: DefaultsConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// How long `ActorHandle::stop` waits for a single actor, in milliseconds
    pub actor_shutdown_timeout_ms: u64,
    /// How long a full runtime shutdown waits before cancelling stragglers, in milliseconds
    pub system_shutdown_timeout_ms: u64,
}

/// Run-loop limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Pause between loop iterations, in milliseconds
    pub poll_interval_ms: u64,
    /// Most events handled per iteration; 0 drains the mailbox completely
    pub drain_batch_limit: usize,
}

/// Default configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Registry name of the security monitor
    pub monitor_name: String,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            actor_shutdown_timeout_ms: 10_000,
            system_shutdown_timeout_ms: 30_000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,
            drain_batch_limit: 0,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            monitor_name: "security".to_string(),
        }
    }
}

/// Errors from reading an explicit configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// File that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SentinelConfig {
    /// Pause between run-loop iterations.
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.limits.poll_interval_ms)
    }

    /// Per-actor stop timeout.
    pub const fn actor_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.actor_shutdown_timeout_ms)
    }

    /// Convert system shutdown timeout to Duration
    pub const fn system_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.system_shutdown_timeout_ms)
    }

    /// Registry name of the security monitor.
    pub fn monitor_id(&self) -> ComponentId {
        ComponentId::new(&self.defaults.monitor_name)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `sentinel/config.toml` under `$XDG_CONFIG_HOME` and then the
    /// platform fallbacks. If no configuration file is found, returns the default
    /// configuration. If a file exists but is malformed, logs an error and uses
    /// defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("sentinel") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let Some(path) = xdg_dirs.find_config_file("config.toml") else {
            info!("No configuration file found, using defaults");
            return Self::default();
        };

        info!("Loading configuration from: {}", path.display());
        match Self::load_from(&path) {
            Ok(config) => {
                info!("Successfully loaded configuration");
                config
            }
            Err(e) => {
                error!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: SentinelConfig = SentinelConfig::load();
}
