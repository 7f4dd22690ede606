use std::future::Future;

use alloy_primitives::Bytes;
use num_bigint::BigUint;

use crate::encoding::{errors::EncodingError, models::SimpleExchangeParam};

/// Wraps an already encoded swap call into the calls a proxy-exchange wrapper issues itself.
///
/// Implementors own every native-asset concern of the direct execution path: attaching the
/// transaction value and approving the target to pull ERC20 tokens. The swap call is passed
/// through as is, without wrapping or unwrapping the native asset.
pub trait SimpleExchange: Send + Sync {
    fn build_simple_param_without_native_conversion(
        &self,
        src_token: &Bytes,
        src_amount: &BigUint,
        dest_token: &Bytes,
        dest_amount: &BigUint,
        call_data: Bytes,
        target_exchange: &Bytes,
    ) -> impl Future<Output = Result<SimpleExchangeParam, EncodingError>> + Send;
}
