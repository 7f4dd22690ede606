use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use num_bigint::BigUint;
use tracing::trace;

use crate::encoding::{
    errors::EncodingError,
    evm::{
        approvals::AllowanceProvider,
        balancer::abi::IERC20,
        utils::{biguint_to_u256, bytes_to_address, is_native},
    },
    models::SimpleExchangeParam,
    simple_exchange::SimpleExchange,
};

/// Builds direct calls for a proxy-exchange wrapper holding the funds being swapped.
///
/// # Fields
/// * `augustus`: Address of the wrapper contract issuing the calls.
/// * `allowances`: Source of the wrapper's current ERC20 allowances.
pub struct EVMSimpleExchange<A: AllowanceProvider> {
    augustus: Address,
    allowances: A,
}

impl<A: AllowanceProvider> EVMSimpleExchange<A> {
    pub fn new(augustus: Address, allowances: A) -> Self {
        EVMSimpleExchange { augustus, allowances }
    }

    /// Returns the `approve` call data needed before `spender` can pull `amount` of `token`, or
    /// `None` if the current allowance already covers it.
    async fn approval_call(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Option<Vec<u8>>, EncodingError> {
        let allowance = self
            .allowances
            .allowance(token, self.augustus, spender)
            .await?;
        trace!(%token, %spender, %allowance, %amount, "checked allowance");
        if allowance >= amount {
            return Ok(None);
        }
        Ok(Some(IERC20::approveCall { spender, amount: U256::MAX }.abi_encode()))
    }
}

impl<A: AllowanceProvider> SimpleExchange for EVMSimpleExchange<A> {
    async fn build_simple_param_without_native_conversion(
        &self,
        src_token: &Bytes,
        src_amount: &BigUint,
        _dest_token: &Bytes,
        _dest_amount: &BigUint,
        call_data: Bytes,
        target_exchange: &Bytes,
    ) -> Result<SimpleExchangeParam, EncodingError> {
        let target = bytes_to_address(target_exchange)?;
        let mut param = SimpleExchangeParam::default();

        let value = if is_native(src_token) {
            src_amount.clone()
        } else {
            let token = bytes_to_address(src_token)?;
            if let Some(approve) = self
                .approval_call(token, target, biguint_to_u256(src_amount)?)
                .await?
            {
                param.callees.push(src_token.clone());
                param.calldata.push(Bytes::from(approve));
                param.values.push(BigUint::ZERO);
            }
            BigUint::ZERO
        };

        param.callees.push(target_exchange.clone());
        param.calldata.push(call_data);
        param.values.push(value);
        Ok(param)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::encoding::evm::approvals::UncheckedAllowances;

    struct FixedAllowance {
        allowance: U256,
        calls: AtomicUsize,
    }

    impl FixedAllowance {
        fn new(allowance: u64) -> Self {
            FixedAllowance { allowance: U256::from(allowance), calls: AtomicUsize::new(0) }
        }
    }

    impl AllowanceProvider for FixedAllowance {
        async fn allowance(
            &self,
            _token: Address,
            owner: Address,
            spender: Address,
        ) -> Result<U256, EncodingError> {
            assert_eq!(owner, augustus());
            assert_eq!(spender, bytes_to_address(&proxy()).unwrap());
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.allowance)
        }
    }

    struct FailingAllowance;

    impl AllowanceProvider for FailingAllowance {
        async fn allowance(
            &self,
            _token: Address,
            _owner: Address,
            _spender: Address,
        ) -> Result<U256, EncodingError> {
            Err(EncodingError::RecoverableError("connection refused".to_string()))
        }
    }

    fn augustus() -> Address {
        Address::from_str("0x1bD435F3C054b6e901B7b108a0ab7617C808677b").unwrap()
    }

    fn proxy() -> Bytes {
        Bytes::from_str("0x3E66B66Fd1d0b02fDa6C811Da9E0547970DB2f21").unwrap()
    }

    fn eth() -> Bytes {
        Bytes::from_str("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE").unwrap()
    }

    fn dai() -> Bytes {
        Bytes::from_str("0x6b175474e89094c44da98b954eedeac495271d0f").unwrap()
    }

    fn swap_call_data() -> Bytes {
        Bytes::from_str("0xdeadbeef").unwrap()
    }

    #[tokio::test]
    async fn test_native_source_attaches_value() {
        let allowances = FixedAllowance::new(0);
        let exchange = EVMSimpleExchange::new(augustus(), allowances);

        let param = exchange
            .build_simple_param_without_native_conversion(
                &eth(),
                &BigUint::from(1000u32),
                &dai(),
                &BigUint::from(990u32),
                swap_call_data(),
                &proxy(),
            )
            .await
            .unwrap();

        assert_eq!(param.callees, vec![proxy()]);
        assert_eq!(param.calldata, vec![swap_call_data()]);
        assert_eq!(param.values, vec![BigUint::from(1000u32)]);
        assert_eq!(param.network_fee, BigUint::ZERO);
        assert_eq!(exchange.allowances.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_insufficient_allowance_prepends_approval() {
        let exchange = EVMSimpleExchange::new(augustus(), FixedAllowance::new(10));

        let param = exchange
            .build_simple_param_without_native_conversion(
                &dai(),
                &BigUint::from(500u32),
                &eth(),
                &BigUint::from(480u32),
                swap_call_data(),
                &proxy(),
            )
            .await
            .unwrap();

        let expected_approve = IERC20::approveCall {
            spender: bytes_to_address(&proxy()).unwrap(),
            amount: U256::MAX,
        }
        .abi_encode();
        assert_eq!(param.callees, vec![dai(), proxy()]);
        assert_eq!(param.calldata, vec![Bytes::from(expected_approve), swap_call_data()]);
        assert_eq!(param.values, vec![BigUint::ZERO, BigUint::ZERO]);
        assert_eq!(
            hex::encode(&param.calldata[0][..4]),
            // approve(address,uint256)
            "095ea7b3"
        );
    }

    #[tokio::test]
    async fn test_sufficient_allowance_skips_approval() {
        let exchange = EVMSimpleExchange::new(augustus(), FixedAllowance::new(500));

        let param = exchange
            .build_simple_param_without_native_conversion(
                &dai(),
                &BigUint::from(500u32),
                &eth(),
                &BigUint::from(480u32),
                swap_call_data(),
                &proxy(),
            )
            .await
            .unwrap();

        assert_eq!(param.callees, vec![proxy()]);
        assert_eq!(param.values, vec![BigUint::ZERO]);
        assert_eq!(exchange.allowances.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unchecked_allowances_always_approve() {
        let exchange = EVMSimpleExchange::new(augustus(), UncheckedAllowances);

        let param = exchange
            .build_simple_param_without_native_conversion(
                &dai(),
                &BigUint::from(1u32),
                &eth(),
                &BigUint::from(1u32),
                swap_call_data(),
                &proxy(),
            )
            .await
            .unwrap();

        assert_eq!(param.callees.len(), 2);
    }

    #[tokio::test]
    async fn test_allowance_failure_is_recoverable() {
        let exchange = EVMSimpleExchange::new(augustus(), FailingAllowance);

        let result = exchange
            .build_simple_param_without_native_conversion(
                &dai(),
                &BigUint::from(1u32),
                &eth(),
                &BigUint::from(1u32),
                swap_call_data(),
                &proxy(),
            )
            .await;

        assert_eq!(
            result,
            Err(EncodingError::RecoverableError("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_target_exchange() {
        let exchange = EVMSimpleExchange::new(augustus(), UncheckedAllowances);

        let result = exchange
            .build_simple_param_without_native_conversion(
                &eth(),
                &BigUint::from(1u32),
                &dai(),
                &BigUint::from(1u32),
                swap_call_data(),
                &Bytes::new(),
            )
            .await;

        assert!(matches!(result, Err(EncodingError::InvalidInput(_))));
    }
}
