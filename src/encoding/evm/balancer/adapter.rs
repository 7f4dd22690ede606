use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;
use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::encoding::{
    dex_adapter::DexAdapter,
    errors::EncodingError,
    evm::{
        balancer::{
            abi::BalancerPath,
            call::{address_arg, encode_swaps, SwapCall},
        },
        constants::BALANCER_DEX_KEYS,
    },
    models::{AdapterExchangeParam, SimpleExchangeParam, SwapIntent, SwapSide},
    simple_exchange::SimpleExchange,
};

/// Context reported by argument errors raised while encoding the adapter payload.
const ADAPTER_PAYLOAD: &str = "balancerAdapterPayload";

/// Encodes sell swaps against the Balancer v1 `ExchangeProxy`.
///
/// # Fields
/// * `simple_exchange`: Collaborator wrapping the encoded swap call for direct execution.
pub struct BalancerAdapter<S: SimpleExchange> {
    simple_exchange: S,
}

impl<S: SimpleExchange> BalancerAdapter<S> {
    pub fn new(simple_exchange: S) -> Self {
        BalancerAdapter { simple_exchange }
    }

    fn ensure_sell(intent: &SwapIntent) -> Result<(), EncodingError> {
        if intent.side == SwapSide::Buy {
            warn!(
                src_token = ?intent.src_token,
                dest_token = ?intent.dest_token,
                "rejecting buy intent"
            );
            return Err(EncodingError::UnsupportedSide(intent.side));
        }
        Ok(())
    }
}

/// Rejects an `exchange_proxy` that is not a 20-byte address.
fn ensure_exchange_proxy(context: &'static str, intent: &SwapIntent) -> Result<(), EncodingError> {
    address_arg(context, "exchangeProxy", &intent.data.exchange_proxy).map(|_| ())
}

impl<S: SimpleExchange> DexAdapter for BalancerAdapter<S> {
    fn dex_keys(&self) -> &'static [&'static str] {
        BALANCER_DEX_KEYS
    }

    /// Encodes the routing path as the single `(Swap[] swaps)` struct the router's Balancer
    /// adapter decodes. No entry point is chosen here; the router picks it on-chain.
    fn adapter_param(&self, intent: &SwapIntent) -> Result<AdapterExchangeParam, EncodingError> {
        Self::ensure_sell(intent)?;
        ensure_exchange_proxy(ADAPTER_PAYLOAD, intent)?;
        let swaps = encode_swaps(ADAPTER_PAYLOAD, &intent.data.swaps)?;
        let payload = BalancerPath { swaps }.abi_encode();
        debug!(hops = intent.data.swaps.len(), len = payload.len(), "encoded adapter payload");

        Ok(AdapterExchangeParam {
            target_exchange: intent.data.exchange_proxy.clone(),
            payload: Bytes::from(payload),
            network_fee: BigUint::ZERO,
        })
    }

    async fn simple_param(&self, intent: &SwapIntent) -> Result<SimpleExchangeParam, EncodingError> {
        Self::ensure_sell(intent)?;
        let call = SwapCall::select(intent)?;
        ensure_exchange_proxy(call.function().name(), intent)?;
        let call_data = call.encode()?;

        self.simple_exchange
            .build_simple_param_without_native_conversion(
                &intent.src_token,
                &intent.src_amount,
                &intent.dest_token,
                &intent.dest_amount,
                Bytes::from(call_data),
                &intent.data.exchange_proxy,
            )
            .await
    }
}
