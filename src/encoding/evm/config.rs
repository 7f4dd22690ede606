use std::{collections::HashMap, fs};

use alloy_primitives::{Address, Bytes};
use serde::Deserialize;

use crate::encoding::{
    errors::EncodingError,
    evm::{constants::DEFAULT_ADDRESSES_JSON, utils::bytes_to_address},
};

/// Balancer-related addresses deployed on one chain.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChainAddresses {
    /// The proxy-exchange wrapper issuing direct calls.
    pub augustus: Bytes,
    /// Default `ExchangeProxy`, used when routing data does not name one.
    pub exchange_proxy: Bytes,
}

impl ChainAddresses {
    pub fn augustus_address(&self) -> Result<Address, EncodingError> {
        bytes_to_address(&self.augustus)
    }
}

/// Per-chain address book, keyed by chain name.
#[derive(Clone, Debug)]
pub struct AddressConfig {
    chains: HashMap<String, ChainAddresses>,
}

impl AddressConfig {
    /// Parses the addresses in the file at the given path, or the bundled defaults if no path is
    /// given.
    pub fn new(file_path: Option<String>) -> Result<Self, EncodingError> {
        let config_str = if let Some(ref path) = file_path {
            fs::read_to_string(path).map_err(|e| {
                EncodingError::FatalError(format!(
                    "Error reading addresses file from {:?}: {}",
                    file_path, e
                ))
            })?
        } else {
            DEFAULT_ADDRESSES_JSON.to_string()
        };
        let chains: HashMap<String, ChainAddresses> = serde_json::from_str(&config_str)
            .map_err(|e| EncodingError::FatalError(format!("Invalid addresses file: {}", e)))?;
        Ok(Self { chains })
    }

    pub fn for_chain(&self, chain: &str) -> Result<&ChainAddresses, EncodingError> {
        self.chains
            .get(&chain.to_lowercase())
            .ok_or_else(|| {
                EncodingError::FatalError(format!("No addresses found for chain {}", chain))
            })
    }
}
