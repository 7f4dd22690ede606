pub mod dex_adapter;
pub mod errors;
#[cfg(feature = "evm")]
pub mod evm;
pub mod models;
mod serde_primitives;
pub mod simple_exchange;
