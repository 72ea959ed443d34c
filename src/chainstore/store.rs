// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::path::PathBuf;

use crate::blocks::TipsetKey;
use crate::config::Config;
use crate::db::{BatchStore, DbOp, parity_db::ParityDb};
use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use super::{
    ChainStoreConfig, DagCborCodec, Error, StateCodec, TipsetOrderer,
    checkpoint::{CHECKPOINT_KEY_PREFIX, Checkpoint},
};

/// Checkpoints in save order, oldest first.
#[derive(Debug, Default)]
struct Checkpoints {
    entries: VecDeque<Checkpoint>,
    next_seq: u64,
}

/// Stores application state at tipsets and rewinds it across forks.
///
/// The sequence of checkpoints and its persisted mirror are guarded by a
/// single lock. Every durable change is committed as one batch before the
/// in-memory sequence is touched, so a failed operation leaves the store as
/// it was.
pub struct ChainStore<DB, O, C = DagCborCodec> {
    db: DB,
    orderer: O,
    config: ChainStoreConfig,
    checkpoints: Mutex<Checkpoints>,
    _codec: PhantomData<fn() -> C>,
}

impl<DB, O> ChainStore<DB, O>
where
    DB: BatchStore,
    O: TipsetOrderer,
{
    /// Opens a store encoding state as DAG-CBOR, recovering the checkpoints
    /// persisted in `db`.
    pub fn new(db: DB, orderer: O, config: ChainStoreConfig) -> Result<Self, Error> {
        Self::with_codec(db, orderer, config)
    }
}

impl<O> ChainStore<ParityDb, O>
where
    O: TipsetOrderer,
{
    /// Opens (or creates) a `ParityDb` at `path` and recovers the store from it.
    pub fn open(path: impl Into<PathBuf>, orderer: O, config: &Config) -> Result<Self, Error> {
        let db = ParityDb::open(path, &config.parity_db).map_err(Error::Db)?;
        Self::new(db, orderer, config.chain_store.clone())
    }
}

impl<DB, O, C> ChainStore<DB, O, C>
where
    DB: BatchStore,
    O: TipsetOrderer,
    C: StateCodec,
{
    pub fn with_codec(db: DB, orderer: O, config: ChainStoreConfig) -> Result<Self, Error> {
        let checkpoints = Self::recover(&db, config.max_checkpoints.get())?;
        debug!(
            "Recovered {} checkpoints, latest: {}",
            checkpoints.entries.len(),
            checkpoints
                .entries
                .back()
                .map(|c| c.tipset_key.to_string())
                .unwrap_or_else(|| "none".into())
        );
        Ok(Self {
            db,
            orderer,
            config,
            checkpoints: Mutex::new(checkpoints),
            _codec: PhantomData,
        })
    }

    fn recover(db: &DB, capacity: usize) -> Result<Checkpoints, Error> {
        let mut entries = db
            .entries_with_prefix(CHECKPOINT_KEY_PREFIX)
            .map_err(Error::Db)?
            .into_iter()
            .map(|(key, value)| Checkpoint::from_entry(&key, &value))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|c| c.seq);
        let next_seq = entries.last().map_or(0, |c| c.seq + 1);

        let surplus = entries.len().saturating_sub(capacity);
        if surplus > 0 {
            warn!(
                "Found {} persisted checkpoints but capacity is {capacity}, evicting the oldest {surplus}",
                entries.len()
            );
            let ops = entries[..surplus]
                .iter()
                .map(|c| DbOp::Delete(c.db_key()))
                .collect();
            db.commit(ops).map_err(Error::Db)?;
            entries.drain(..surplus);
        }

        Ok(Checkpoints {
            entries: entries.into(),
            next_seq,
        })
    }

    fn precedes(&self, from: &TipsetKey, to: &TipsetKey) -> Result<bool, Error> {
        if self.config.reflexive_precedence && from == to {
            return Ok(true);
        }
        self.orderer.precedes(from, to).map_err(Error::Orderer)
    }

    /// Saves `state` as the checkpoint for `tipset_key`.
    ///
    /// The tipset must descend from (or equal) the latest checkpoint, otherwise
    /// [`Error::OutOfOrderSave`] is returned and nothing changes. Once the
    /// store holds more than [`ChainStoreConfig::max_checkpoints`] entries the
    /// oldest are evicted in the same batch as the new checkpoint is written.
    pub fn save<T: Serialize>(&self, tipset_key: &TipsetKey, state: &T) -> Result<(), Error> {
        let mut checkpoints = self.checkpoints.lock();
        if let Some(latest) = checkpoints.entries.back()
            && !self.precedes(&latest.tipset_key, tipset_key)?
        {
            return Err(Error::OutOfOrderSave {
                latest: latest.tipset_key.clone(),
                attempted: tipset_key.clone(),
            });
        }

        let checkpoint = Checkpoint {
            seq: checkpoints.next_seq,
            tipset_key: tipset_key.clone(),
            state: C::encode(state)?,
        };
        let evicted = (checkpoints.entries.len() + 1).saturating_sub(self.capacity());
        let ops = checkpoints
            .entries
            .iter()
            .take(evicted)
            .map(|c| DbOp::Delete(c.db_key()))
            .chain(std::iter::once(DbOp::Put(
                checkpoint.db_key(),
                checkpoint.to_record_bytes()?,
            )))
            .collect();
        self.db.commit(ops).map_err(Error::Db)?;

        debug!(
            "Saved checkpoint #{} at tipset {tipset_key}, evicted {evicted}",
            checkpoint.seq
        );
        checkpoints.entries.drain(..evicted);
        checkpoints.entries.push_back(checkpoint);
        checkpoints.next_seq += 1;
        Ok(())
    }

    /// Loads the state of the most recent checkpoint that precedes `target`
    /// and prunes every newer checkpoint.
    ///
    /// Returns `None`, without error, when no checkpoint precedes `target`; in
    /// that case all checkpoints are pruned. Pruning only happens once the
    /// base state has been decoded successfully.
    pub fn load_and_prune<T: DeserializeOwned>(
        &self,
        target: &TipsetKey,
    ) -> Result<Option<(TipsetKey, T)>, Error> {
        let mut checkpoints = self.checkpoints.lock();

        let mut base = None;
        for (idx, checkpoint) in checkpoints.entries.iter().enumerate().rev() {
            if self.precedes(&checkpoint.tipset_key, target)? {
                base = Some(idx);
                break;
            }
        }

        let loaded = match base {
            Some(idx) => {
                let checkpoint = &checkpoints.entries[idx];
                Some((
                    checkpoint.tipset_key.clone(),
                    C::decode(&checkpoint.state)?,
                ))
            }
            None => None,
        };

        let keep = base.map_or(0, |idx| idx + 1);
        let pruned = checkpoints.entries.len() - keep;
        if pruned > 0 {
            let ops = checkpoints
                .entries
                .range(keep..)
                .map(|c| DbOp::Delete(c.db_key()))
                .collect();
            self.db.commit(ops).map_err(Error::Db)?;
            info!("Pruned {pruned} checkpoints not preceding tipset {target}");
            checkpoints.entries.truncate(keep);
        }

        match &loaded {
            Some((key, _)) => debug!("Loaded checkpoint at tipset {key} for target {target}"),
            None => debug!("No checkpoint precedes tipset {target}"),
        }
        Ok(loaded)
    }

    /// Like [`ChainStore::load_and_prune`], but writes the state into `state`.
    /// `state` is left untouched when no checkpoint precedes `target`.
    pub fn load_and_prune_into<T: DeserializeOwned>(
        &self,
        target: &TipsetKey,
        state: &mut T,
    ) -> Result<Option<TipsetKey>, Error> {
        Ok(self.load_and_prune(target)?.map(|(base, loaded)| {
            *state = loaded;
            base
        }))
    }

    /// Maximum number of retained checkpoints.
    pub fn capacity(&self) -> usize {
        self.config.max_checkpoints.get()
    }

    pub fn config(&self) -> &ChainStoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.checkpoints.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.lock().entries.is_empty()
    }

    /// Tipset of the most recent checkpoint.
    pub fn latest(&self) -> Option<TipsetKey> {
        self.checkpoints
            .lock()
            .entries
            .back()
            .map(|c| c.tipset_key.clone())
    }

    /// Tipsets of all retained checkpoints, oldest first.
    pub fn tipset_keys(&self) -> Vec<TipsetKey> {
        self.checkpoints
            .lock()
            .entries
            .iter()
            .map(|c| c.tipset_key.clone())
            .collect()
    }
}
