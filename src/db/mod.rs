// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod memory;
pub mod parity_db;
pub mod parity_db_config;

pub use memory::MemoryDB;

use std::sync::Arc;

/// A single mutation inside an atomic batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DbOp {
    Put(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
}

/// Transactional key-value interface used to persist checkpoints.
///
/// Implementations must apply every operation of a [`BatchStore::commit`] call
/// or none of them. Readers running concurrently with a commit must never
/// observe a partially applied batch.
pub trait BatchStore {
    /// Reads a single value, returning `None` if the key doesn't exist.
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>>;

    /// Atomically applies all operations, in order.
    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()>;

    /// Returns every entry whose key starts with `prefix`. No ordering is
    /// guaranteed.
    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>>;
}

/// Extension trait for the [`BatchStore`] trait. It is implemented for all types that implement
/// [`BatchStore`].
pub trait BatchStoreExt {
    fn write_bin(&self, key: &[u8], value: &[u8]) -> anyhow::Result<()>;
    fn delete(&self, key: &[u8]) -> anyhow::Result<()>;
    fn exists(&self, key: &[u8]) -> anyhow::Result<bool>;
}

impl<T: ?Sized + BatchStore> BatchStoreExt for T {
    fn write_bin(&self, key: &[u8], value: &[u8]) -> anyhow::Result<()> {
        self.commit(vec![DbOp::Put(key.to_vec(), value.to_vec())])
    }

    fn delete(&self, key: &[u8]) -> anyhow::Result<()> {
        self.commit(vec![DbOp::Delete(key.to_vec())])
    }

    fn exists(&self, key: &[u8]) -> anyhow::Result<bool> {
        Ok(self.read_bin(key)?.is_some())
    }
}

impl<T: ?Sized + BatchStore> BatchStore for &T {
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        (**self).read_bin(key)
    }

    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()> {
        (**self).commit(ops)
    }

    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>> {
        (**self).entries_with_prefix(prefix)
    }
}

impl<T: ?Sized + BatchStore> BatchStore for Arc<T> {
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        self.as_ref().read_bin(key)
    }

    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()> {
        self.as_ref().commit(ops)
    }

    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>> {
        self.as_ref().entries_with_prefix(prefix)
    }
}

/// Traits for collecting DB stats
pub trait DBStatistics {
    fn get_statistics(&self) -> Option<String> {
        None
    }
}

impl<DB: DBStatistics> DBStatistics for Arc<DB> {
    fn get_statistics(&self) -> Option<String> {
        self.as_ref().get_statistics()
    }
}
