// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeMap;

use super::{BatchStore, DBStatistics, DbOp};
use parking_lot::RwLock;

/// A thread-safe in-memory [`BatchStore`]. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryDB {
    db: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryDB {
    /// Number of stored entries across all key namespaces.
    pub fn len(&self) -> usize {
        self.db.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.read().is_empty()
    }
}

impl Clone for MemoryDB {
    fn clone(&self) -> Self {
        Self {
            db: RwLock::new(self.db.read().clone()),
        }
    }
}

impl BatchStore for MemoryDB {
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.db.read().get(key).cloned())
    }

    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()> {
        // a single write guard spans the whole batch
        let mut db = self.db.write();
        for op in ops {
            match op {
                DbOp::Put(key, value) => {
                    db.insert(key, value);
                }
                DbOp::Delete(key) => {
                    db.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>> {
        Ok(self
            .db
            .read()
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

impl DBStatistics for MemoryDB {}
