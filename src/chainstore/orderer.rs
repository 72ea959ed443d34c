// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use crate::blocks::TipsetKey;

/// Answers ancestry questions about tipsets.
///
/// Answers may change between calls as the chain advances, so they are never
/// cached. Implementations are called while the checkpoint store is locked
/// and must not call back into it.
pub trait TipsetOrderer {
    /// Returns `true` if `from` is an ancestor of `to`. Whether a tipset
    /// precedes itself is left to the implementation; see
    /// [`ChainStoreConfig::reflexive_precedence`](super::ChainStoreConfig::reflexive_precedence).
    fn precedes(&self, from: &TipsetKey, to: &TipsetKey) -> anyhow::Result<bool>;
}

impl<T: ?Sized + TipsetOrderer> TipsetOrderer for &T {
    fn precedes(&self, from: &TipsetKey, to: &TipsetKey) -> anyhow::Result<bool> {
        (**self).precedes(from, to)
    }
}

impl<T: ?Sized + TipsetOrderer> TipsetOrderer for Arc<T> {
    fn precedes(&self, from: &TipsetKey, to: &TipsetKey) -> anyhow::Result<bool> {
        self.as_ref().precedes(from, to)
    }
}
