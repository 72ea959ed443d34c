// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::blocks::TipsetKey;
use cid::Cid;
use fvm_ipld_encoding::DAG_CBOR;
use multihash_codetable::{Code::Blake2b256, MultihashDigest};

/// Creates a block CID whose digest is derived from `seed`.
pub fn block_cid(seed: &[u8]) -> Cid {
    Cid::new_v1(DAG_CBOR, Blake2b256.digest(seed))
}

/// Creates a single-block tipset key derived from `seed`.
pub fn tipset_key(seed: &[u8]) -> TipsetKey {
    TipsetKey::from(block_cid(seed))
}

/// Creates a single-block tipset key for the `n`-th tipset on the branch
/// named `branch`.
pub fn branch_key(branch: &str, n: usize) -> TipsetKey {
    tipset_key(format!("{branch}/{n}").as_bytes())
}
