// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::num::NonZeroUsize;

use nonzero_ext::nonzero;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ChainStoreConfig {
    /// Maximum number of retained checkpoints. Saving past this evicts the
    /// oldest ones. Lowering it between restarts evicts the surplus when the
    /// store is opened.
    #[default(nonzero!(20usize))]
    pub max_checkpoints: NonZeroUsize,
    /// Treat every tipset as preceding itself without asking the orderer.
    #[default(true)]
    pub reflexive_precedence: bool,
}
