// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::Path;

use crate::chainstore::ChainStoreConfig;
use crate::db::parity_db_config::ParityDbConfig;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Configuration of a checkpoint store and its backing database, as read from
/// the host service's configuration file.
#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub chain_store: ChainStoreConfig,
    pub parity_db: ParityDbConfig,
}

impl Config {
    pub fn from_toml_str(toml_string: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(toml_string)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
