// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::Limits;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "tacit.config.yaml";

/// Configuration for a local tacit instance.
///
/// Merged lowest to highest precedence: struct defaults, then the YAML
/// config file (if one exists), then `TACIT_`-prefixed environment
/// variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the CLI persists the engine + mock substrate between runs.
    pub state_file: PathBuf,
    /// Log level for the fmt subscriber: trace | debug | info | warn | error
    pub log_level: String,
    /// Seed for the mock substrate's handle derivation.
    pub mock_seed: u64,
    /// Free-text length bounds enforced at survey creation.
    pub limits: Limits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("tacit.state.bin"),
            log_level: "info".to_string(),
            mock_seed: 0,
            limits: Limits::default(),
        }
    }
}

/// Load the config at `config_file` or from `tacit.config.yaml` in the
/// current directory if not provided. A missing file is not an error; the
/// defaults plus environment variables apply.
pub fn load_config(config_file: Option<&Path>) -> Result<AppConfig> {
    let path = config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if path.exists() {
        figment = figment.merge(Yaml::file(&path));
    }

    figment
        .merge(Env::prefixed("TACIT_"))
        .extract()
        .context("Could not parse configuration")
}
