// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::blocks::TipsetKey;
use thiserror::Error;

/// Checkpoint store error
#[derive(Debug, Error)]
pub enum Error {
    /// The tipset being saved does not descend from the latest checkpoint.
    #[error("Tipset {attempted} does not descend from the latest checkpoint {latest}")]
    OutOfOrderSave {
        latest: TipsetKey,
        attempted: TipsetKey,
    },
    #[error("Encoding checkpoint failed: {0}")]
    Encode(String),
    #[error("Decoding checkpoint failed: {0}")]
    Decode(String),
    /// A persisted key under the checkpoint prefix could not be parsed.
    #[error("Corrupt checkpoint key: {0}")]
    CorruptKey(String),
    #[error("Tipset ordering failed: {0:#}")]
    Orderer(anyhow::Error),
    #[error("Database error: {0:#}")]
    Db(anyhow::Error),
}
