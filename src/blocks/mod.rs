// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod tipset_key;

pub use tipset_key::TipsetKey;
