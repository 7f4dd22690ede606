use alloy_primitives::{address, Address};

pub const DEFAULT_ADDRESSES_JSON: &str = include_str!("../../../config/balancer_addresses.json");

/// Sentinel standing in for the chain's native asset wherever a token address is expected.
pub const NATIVE_TOKEN_ADDRESS: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Dex keys under which the surrounding adapter registry finds the Balancer adapter.
pub const BALANCER_DEX_KEYS: &[&str] = &["balancer"];
