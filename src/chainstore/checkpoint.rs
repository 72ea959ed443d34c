// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::blocks::TipsetKey;
use fvm_ipld_encoding::tuple::*;

use super::Error;

/// Namespace of checkpoint entries in the backing store. Each key is this
/// prefix followed by the big-endian sequence number of the checkpoint.
pub(super) const CHECKPOINT_KEY_PREFIX: &[u8] = b"/chainstore/checkpoints/";

/// A state payload saved at a tipset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Checkpoint {
    /// Position in save order. Strictly increasing over the lifetime of the
    /// store, including across restarts.
    pub seq: u64,
    pub tipset_key: TipsetKey,
    /// State encoded by the store's codec.
    pub state: Vec<u8>,
}

/// Persisted form of a [`Checkpoint`]. The sequence number lives in the key.
#[derive(Serialize_tuple, Deserialize_tuple)]
struct CheckpointRecord {
    tipset_key: TipsetKey,
    #[serde(with = "fvm_ipld_encoding::strict_bytes")]
    state: Vec<u8>,
}

impl Checkpoint {
    pub fn db_key(&self) -> Vec<u8> {
        db_key(self.seq)
    }

    /// Encodes the checkpoint as a DAG-CBOR record, regardless of the codec
    /// used for the state itself.
    pub fn to_record_bytes(&self) -> Result<Vec<u8>, Error> {
        let record = CheckpointRecord {
            tipset_key: self.tipset_key.clone(),
            state: self.state.clone(),
        };
        fvm_ipld_encoding::to_vec(&record).map_err(|e| Error::Encode(e.to_string()))
    }

    /// Rebuilds a checkpoint from a persisted key-value pair.
    pub fn from_entry(key: &[u8], value: &[u8]) -> Result<Self, Error> {
        let seq = parse_db_key(key)?;
        let CheckpointRecord { tipset_key, state } = fvm_ipld_encoding::from_slice(value)
            .map_err(|e| Error::Decode(format!("checkpoint #{seq}: {e}")))?;
        Ok(Self {
            seq,
            tipset_key,
            state,
        })
    }
}

fn db_key(seq: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(CHECKPOINT_KEY_PREFIX.len() + 8);
    key.extend_from_slice(CHECKPOINT_KEY_PREFIX);
    key.extend_from_slice(&seq.to_be_bytes());
    key
}

fn parse_db_key(key: &[u8]) -> Result<u64, Error> {
    key.strip_prefix(CHECKPOINT_KEY_PREFIX)
        .and_then(|seq| <[u8; 8]>::try_from(seq).ok())
        .map(u64::from_be_bytes)
        .ok_or_else(|| Error::CorruptKey(format!("{key:?}")))
}
