// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use parity_db::CompressionType;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// `ParityDb` configuration exposed in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParityDbConfig {
    pub enable_statistics: bool,
    pub compression: Compression,
}

/// Column compression. Checkpoint states are mostly small CBOR records, so
/// LZ4 is the default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Compression {
    None,
    #[default]
    Lz4,
    Snappy,
}

impl From<Compression> for CompressionType {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::None => CompressionType::NoCompression,
            Compression::Lz4 => CompressionType::Lz4,
            Compression::Snappy => CompressionType::Snappy,
        }
    }
}
