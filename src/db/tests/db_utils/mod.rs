// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod parity;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::db::{BatchStore, DbOp, MemoryDB};

/// In-memory store whose next commits can be made to fail, leaving its
/// contents untouched.
#[derive(Debug, Default)]
pub struct FlakyDB {
    inner: MemoryDB,
    fail_commits: AtomicBool,
}

impl FlakyDB {
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &MemoryDB {
        &self.inner
    }
}

impl BatchStore for FlakyDB {
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        self.inner.read_bin(key)
    }

    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()> {
        if self.fail_commits.load(Ordering::SeqCst) {
            anyhow::bail!("injected commit failure");
        }
        self.inner.commit(ops)
    }

    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>> {
        self.inner.entries_with_prefix(prefix)
    }
}
