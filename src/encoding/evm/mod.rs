pub mod approvals;
pub mod balancer;
pub mod config;
pub mod constants;
pub mod simple_exchange;
pub mod utils;
