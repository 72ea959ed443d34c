// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::PathBuf;

use super::{BatchStore, DBStatistics, DbOp};
use crate::db::parity_db_config::ParityDbConfig;

use anyhow::{Context as _, anyhow};
use parity_db::{CompressionType, Db, Options};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};
use tracing::warn;

/// Columns of the checkpoint database.
#[derive(Copy, Clone, Debug, Display, PartialEq, FromRepr, EnumIter)]
#[repr(u8)]
enum DbColumn {
    /// Namespaced key-value entries. Values are overwritten and deleted in
    /// place, so this column is neither reference counted nor content
    /// addressed.
    Entries,
}

impl DbColumn {
    fn create_column_options(compression: CompressionType) -> Vec<parity_db::ColumnOptions> {
        DbColumn::iter()
            .map(|col| match col {
                DbColumn::Entries => parity_db::ColumnOptions {
                    // explicitly disable preimage, otherwise we are not able
                    // to overwrite entries
                    preimage: false,
                    // This is needed for key retrieval.
                    btree_index: true,
                    compression,
                    ..Default::default()
                },
            })
            .collect()
    }
}

pub struct ParityDb {
    pub db: parity_db::Db,
    statistics_enabled: bool,
}

impl ParityDb {
    fn to_options(path: PathBuf, config: &ParityDbConfig) -> Options {
        let mut options = Options::with_columns(&path, DbColumn::iter().count() as u8);
        options.sync_wal = true;
        options.sync_data = true;
        options.stats = config.enable_statistics;
        options.columns = DbColumn::create_column_options(config.compression.into());
        options
    }

    pub fn open(path: impl Into<PathBuf>, config: &ParityDbConfig) -> anyhow::Result<Self> {
        let opts = Self::to_options(path.into(), config);
        Ok(Self {
            db: Db::open_or_create(&opts)?,
            statistics_enabled: opts.stats,
        })
    }
}

impl BatchStore for ParityDb {
    fn read_bin(&self, key: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
        let column = DbColumn::Entries;
        self.db
            .get(column as u8, key)
            .map_err(|e| anyhow!("error from column {column}: {e}"))
    }

    fn commit(&self, ops: Vec<DbOp>) -> anyhow::Result<()> {
        let column = DbColumn::Entries;
        let tx = ops.into_iter().map(|op| match op {
            DbOp::Put(key, value) => (column as u8, key, Some(value)),
            DbOp::Delete(key) => (column as u8, key, None),
        });
        self.db
            .commit(tx)
            .map_err(|e| anyhow!("error committing to column {column}: {e}"))
    }

    fn entries_with_prefix(&self, prefix: &[u8]) -> anyhow::Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut iter = self
            .db
            .iter(DbColumn::Entries as u8)
            .context("error iterating over entries")?;
        let mut entries = vec![];
        while let Some((key, value)) = iter.next()? {
            if key.starts_with(prefix) {
                entries.push((key, value));
            }
        }
        Ok(entries)
    }
}

impl DBStatistics for ParityDb {
    fn get_statistics(&self) -> Option<String> {
        if !self.statistics_enabled {
            return None;
        }

        let mut buf = Vec::new();
        if let Err(err) = self.db.write_stats_text(&mut buf, None) {
            warn!("Unable to write database statistics: {err}");
            return None;
        }

        match String::from_utf8(buf) {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!("Malformed statistics: {e}");
                None
            }
        }
    }
}
