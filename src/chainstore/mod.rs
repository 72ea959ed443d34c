// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Fork-aware checkpoint store.
//!
//! A [`ChainStore`] associates application state with tipsets as the chain
//! advances and, when asked to load state for a tipset, rewinds to the most
//! recent checkpoint that is still an ancestor of it. Checkpoints that only
//! existed on an abandoned fork are pruned on the way.

mod checkpoint;
mod codec;
mod config;
mod errors;
mod orderer;
mod store;

pub use self::{
    codec::{DagCborCodec, JsonCodec, StateCodec},
    config::ChainStoreConfig,
    errors::Error,
    orderer::TipsetOrderer,
    store::ChainStore,
};
