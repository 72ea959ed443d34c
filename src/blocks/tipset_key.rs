// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use cid::Cid;
use serde::{Deserialize, Serialize};

/// A set of CIDs forming a unique key for a tipset.
///
/// Equal keys refer to the same tipset. The order of the CIDs is part of the
/// key, so callers are expected to build keys from the canonical (ticket
/// sorted) block order of the tipset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipsetKey(nunny::Vec<Cid>);

impl TipsetKey {
    /// Builds a key from a list of block CIDs, returning `None` when the list
    /// is empty.
    pub fn new(cids: Vec<Cid>) -> Option<Self> {
        nunny::Vec::new(cids).ok().map(Self)
    }

    /// Returns the block CIDs of this key.
    pub fn cids(&self) -> &[Cid] {
        &self.0
    }

    pub fn into_cids(self) -> nunny::Vec<Cid> {
        self.0
    }

    /// Number of blocks in the tipset.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, keys hold at least one block.
    pub fn is_empty(&self) -> bool {
        self.cids().is_empty()
    }
}

impl From<nunny::Vec<Cid>> for TipsetKey {
    fn from(cids: nunny::Vec<Cid>) -> Self {
        Self(cids)
    }
}

impl From<Cid> for TipsetKey {
    fn from(cid: Cid) -> Self {
        Self(nunny::vec![cid])
    }
}

impl fmt::Display for TipsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .iter()
            .map(|cid| cid.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{s}}}")
    }
}
