use std::future::Future;

use alloy_primitives::{Address, U256};

use crate::encoding::errors::EncodingError;

/// Source of ERC20 allowances, typically backed by an RPC node.
///
/// Lookup failures should be reported as `EncodingError::RecoverableError`.
pub trait AllowanceProvider: Send + Sync {
    /// Returns how much of `token` the `spender` may currently pull from `owner`.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256, EncodingError>> + Send;
}

/// Reports a zero allowance for everything, so an approval is always emitted.
///
/// Used when no node is available, e.g. when encoding offline.
#[derive(Clone, Copy, Debug, Default)]
pub struct UncheckedAllowances;

impl AllowanceProvider for UncheckedAllowances {
    async fn allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, EncodingError> {
        Ok(U256::ZERO)
    }
}
