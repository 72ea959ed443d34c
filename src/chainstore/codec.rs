// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Serialize, de::DeserializeOwned};

use super::Error;

/// Serializes application state into checkpoint payloads. The format is
/// opaque to the store.
pub trait StateCodec {
    fn encode<T: Serialize>(state: &T) -> Result<Vec<u8>, Error>;
    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error>;
}

/// DAG-CBOR, the encoding used for IPLD data on Filecoin.
#[derive(Debug, Clone, Copy, Default)]
pub struct DagCborCodec;

impl StateCodec for DagCborCodec {
    fn encode<T: Serialize>(state: &T) -> Result<Vec<u8>, Error> {
        fvm_ipld_encoding::to_vec(state).map_err(|e| Error::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
        fvm_ipld_encoding::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
    }
}

/// Plain JSON, handy when the persisted state needs to be inspected by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl StateCodec for JsonCodec {
    fn encode<T: Serialize>(state: &T) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(state).map_err(|e| Error::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
        serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
    }
}
