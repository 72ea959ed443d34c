// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Fork-aware checkpoint storage for services that follow a Filecoin chain.
//!
//! See [`chainstore::ChainStore`] for the entry point.

pub mod blocks;
pub mod chainstore;
pub mod config;
pub mod db;
#[cfg(test)]
mod test_utils;

pub use chainstore::{ChainStore, ChainStoreConfig, Error, TipsetOrderer};
pub use config::Config;
