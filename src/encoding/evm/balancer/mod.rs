pub mod abi;
pub mod adapter;
pub mod call;
