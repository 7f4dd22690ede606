use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use num_bigint::BigUint;
use tracing::debug;

use crate::encoding::{
    errors::EncodingError,
    evm::{
        balancer::abi::{self, BalancerFunction, IExchangeProxy},
        utils::{biguint_to_u256, bytes_to_address, is_native, u256_to_biguint},
    },
    models::{RoutingLeg, SwapIntent, SwapSide},
};

/// An `ExchangeProxy` call together with the exact positional arguments of its entry point.
///
/// A native asset travels as transaction value rather than through a token transfer, so each
/// direction has its own entry point and argument shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapCall {
    /// `batchEthInSwapExactIn(swaps, tokenOut, minTotalAmountOut)`
    NativeIn { swaps: Vec<RoutingLeg>, dest_token: Bytes, dest_amount: BigUint },
    /// `batchEthOutSwapExactIn(swaps, tokenIn, totalAmountIn, minTotalAmountOut)`
    NativeOut {
        swaps: Vec<RoutingLeg>,
        src_token: Bytes,
        src_amount: BigUint,
        dest_amount: BigUint,
    },
    /// `batchSwapExactIn(swaps, tokenIn, tokenOut, totalAmountIn, minTotalAmountOut)`
    TokenToToken {
        swaps: Vec<RoutingLeg>,
        src_token: Bytes,
        dest_token: Bytes,
        src_amount: BigUint,
        dest_amount: BigUint,
    },
}

impl SwapCall {
    /// Picks the entry point for a sell intent.
    ///
    /// Only the native-ness of the two tokens matters. A native source wins over a native
    /// destination.
    pub fn select(intent: &SwapIntent) -> Result<SwapCall, EncodingError> {
        if intent.side == SwapSide::Buy {
            return Err(EncodingError::UnsupportedSide(intent.side));
        }
        let swaps = intent.data.swaps.clone();

        let call = if is_native(&intent.src_token) {
            SwapCall::NativeIn {
                swaps,
                dest_token: intent.dest_token.clone(),
                dest_amount: intent.dest_amount.clone(),
            }
        } else if is_native(&intent.dest_token) {
            SwapCall::NativeOut {
                swaps,
                src_token: intent.src_token.clone(),
                src_amount: intent.src_amount.clone(),
                dest_amount: intent.dest_amount.clone(),
            }
        } else {
            SwapCall::TokenToToken {
                swaps,
                src_token: intent.src_token.clone(),
                dest_token: intent.dest_token.clone(),
                src_amount: intent.src_amount.clone(),
                dest_amount: intent.dest_amount.clone(),
            }
        };
        debug!(function = call.function().name(), hops = intent.data.swaps.len(), "selected call");
        Ok(call)
    }

    pub fn function(&self) -> BalancerFunction {
        match self {
            SwapCall::NativeIn { .. } => BalancerFunction::BatchEthInSwapExactIn,
            SwapCall::NativeOut { .. } => BalancerFunction::BatchEthOutSwapExactIn,
            SwapCall::TokenToToken { .. } => BalancerFunction::BatchSwapExactIn,
        }
    }

    pub fn swaps(&self) -> &[RoutingLeg] {
        match self {
            SwapCall::NativeIn { swaps, .. } |
            SwapCall::NativeOut { swaps, .. } |
            SwapCall::TokenToToken { swaps, .. } => swaps,
        }
    }

    /// Encodes the call as `ExchangeProxy` call data: the 4-byte selector followed by the
    /// ABI-encoded arguments.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let function = self.function();
        let context = function.name();
        let swaps = encode_swaps(context, self.swaps())?;
        let call_data = match self {
            SwapCall::NativeIn { dest_token, dest_amount, .. } => {
                IExchangeProxy::batchEthInSwapExactInCall {
                    swaps,
                    tokenOut: address_arg(context, "destToken", dest_token)?,
                    minTotalAmountOut: uint_arg(context, "destAmount", dest_amount)?,
                }
                .abi_encode()
            }
            SwapCall::NativeOut { src_token, src_amount, dest_amount, .. } => {
                IExchangeProxy::batchEthOutSwapExactInCall {
                    swaps,
                    tokenIn: address_arg(context, "srcToken", src_token)?,
                    totalAmountIn: uint_arg(context, "srcAmount", src_amount)?,
                    minTotalAmountOut: uint_arg(context, "destAmount", dest_amount)?,
                }
                .abi_encode()
            }
            SwapCall::TokenToToken { src_token, dest_token, src_amount, dest_amount, .. } => {
                IExchangeProxy::batchSwapExactInCall {
                    swaps,
                    tokenIn: address_arg(context, "srcToken", src_token)?,
                    tokenOut: address_arg(context, "destToken", dest_token)?,
                    totalAmountIn: uint_arg(context, "srcAmount", src_amount)?,
                    minTotalAmountOut: uint_arg(context, "destAmount", dest_amount)?,
                }
                .abi_encode()
            }
        };
        debug!(function = function.name(), len = call_data.len(), "encoded call data");
        Ok(call_data)
    }

    /// Decodes `ExchangeProxy` call data produced by [`SwapCall::encode`].
    pub fn decode(data: &[u8]) -> Result<SwapCall, EncodingError> {
        let selector = data.get(..4).ok_or_else(|| {
            EncodingError::InvalidInput(format!("Call data too short: {} bytes", data.len()))
        })?;
        let function = BalancerFunction::from_selector(selector).ok_or_else(|| {
            EncodingError::InvalidInput(format!(
                "Unknown ExchangeProxy selector: 0x{}",
                hex::encode(selector)
            ))
        })?;
        let decode_error = |e: alloy_sol_types::Error| {
            EncodingError::InvalidInput(format!("Failed to decode {}: {}", function.name(), e))
        };

        let call = match function {
            BalancerFunction::BatchEthInSwapExactIn => {
                let call = IExchangeProxy::batchEthInSwapExactInCall::abi_decode(data, true)
                    .map_err(decode_error)?;
                SwapCall::NativeIn {
                    swaps: decode_swaps(call.swaps),
                    dest_token: Bytes::copy_from_slice(call.tokenOut.as_slice()),
                    dest_amount: u256_to_biguint(call.minTotalAmountOut),
                }
            }
            BalancerFunction::BatchEthOutSwapExactIn => {
                let call = IExchangeProxy::batchEthOutSwapExactInCall::abi_decode(data, true)
                    .map_err(decode_error)?;
                SwapCall::NativeOut {
                    swaps: decode_swaps(call.swaps),
                    src_token: Bytes::copy_from_slice(call.tokenIn.as_slice()),
                    src_amount: u256_to_biguint(call.totalAmountIn),
                    dest_amount: u256_to_biguint(call.minTotalAmountOut),
                }
            }
            BalancerFunction::BatchSwapExactIn => {
                let call = IExchangeProxy::batchSwapExactInCall::abi_decode(data, true)
                    .map_err(decode_error)?;
                SwapCall::TokenToToken {
                    swaps: decode_swaps(call.swaps),
                    src_token: Bytes::copy_from_slice(call.tokenIn.as_slice()),
                    dest_token: Bytes::copy_from_slice(call.tokenOut.as_slice()),
                    src_amount: u256_to_biguint(call.totalAmountIn),
                    dest_amount: u256_to_biguint(call.minTotalAmountOut),
                }
            }
        };
        Ok(call)
    }
}

/// Converts routing legs into the ABI `Swap` struct, naming the offending leg on failure.
///
/// `context` identifies what is being encoded in the resulting error.
pub(crate) fn encode_swaps(
    context: &'static str,
    swaps: &[RoutingLeg],
) -> Result<Vec<abi::Swap>, EncodingError> {
    swaps
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            Ok(abi::Swap {
                pool: address_arg(context, &format!("swaps[{i}].pool"), &leg.pool)?,
                tokenInParam: uint_arg(
                    context,
                    &format!("swaps[{i}].tokenInParam"),
                    &leg.token_in_param,
                )?,
                tokenOutParam: uint_arg(
                    context,
                    &format!("swaps[{i}].tokenOutParam"),
                    &leg.token_out_param,
                )?,
                maxPrice: uint_arg(context, &format!("swaps[{i}].maxPrice"), &leg.max_price)?,
            })
        })
        .collect()
}

pub(crate) fn decode_swaps(swaps: Vec<abi::Swap>) -> Vec<RoutingLeg> {
    swaps
        .into_iter()
        .map(|swap| RoutingLeg {
            pool: Bytes::copy_from_slice(swap.pool.as_slice()),
            token_in_param: u256_to_biguint(swap.tokenInParam),
            token_out_param: u256_to_biguint(swap.tokenOutParam),
            max_price: u256_to_biguint(swap.maxPrice),
        })
        .collect()
}

/// Converts an address argument, reporting `field` under `context` if it is not 20 bytes.
pub(crate) fn address_arg(
    context: &'static str,
    field: &str,
    value: &Bytes,
) -> Result<Address, EncodingError> {
    bytes_to_address(value).map_err(|_| EncodingError::InvalidArgument {
        context,
        field: field.to_string(),
        reason: format!("expected a 20-byte address, got {} bytes", value.len()),
    })
}

fn uint_arg(
    context: &'static str,
    field: &str,
    value: &BigUint,
) -> Result<U256, EncodingError> {
    biguint_to_u256(value).map_err(|_| EncodingError::InvalidArgument {
        context,
        field: field.to_string(),
        reason: format!("{} does not fit in uint256", value),
    })
}
