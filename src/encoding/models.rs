use alloy_primitives::Bytes;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::encoding::serde_primitives::{biguint_string, biguint_string_vec};

/// Direction of a swap. `Sell` fixes the input amount, `Buy` fixes the output amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapSide {
    Sell,
    Buy,
}

/// One hop of a Balancer routing path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingLeg {
    /// Address of the Balancer pool.
    pub pool: Bytes,
    #[serde(with = "biguint_string")]
    pub token_in_param: BigUint,
    #[serde(with = "biguint_string")]
    pub token_out_param: BigUint,
    #[serde(with = "biguint_string")]
    pub max_price: BigUint,
}

/// Routing metadata computed upstream for a Balancer swap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancerData {
    /// The `ExchangeProxy` contract executing the path.
    pub exchange_proxy: Bytes,
    /// Hops in execution order.
    pub swaps: Vec<RoutingLeg>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapIntent {
    /// The token being sold.
    pub src_token: Bytes,
    /// The token being bought.
    pub dest_token: Bytes,
    #[serde(with = "biguint_string")]
    pub src_amount: BigUint,
    /// Minimum amount of `dest_token` expected for a sell.
    #[serde(with = "biguint_string")]
    pub dest_amount: BigUint,
    pub side: SwapSide,
    pub data: BalancerData,
}

/// Payload consumed by the generic router's adapter-call convention.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterExchangeParam {
    pub target_exchange: Bytes,
    pub payload: Bytes,
    #[serde(with = "biguint_string")]
    pub network_fee: BigUint,
}

/// The calls a proxy-exchange wrapper issues to execute a swap by itself.
///
/// `callees`, `calldata` and `values` are parallel lists. The swap call is always the last entry;
/// any preceding entries set up approvals for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleExchangeParam {
    pub callees: Vec<Bytes>,
    pub calldata: Vec<Bytes>,
    #[serde(with = "biguint_string_vec")]
    pub values: Vec<BigUint>,
    #[serde(with = "biguint_string")]
    pub network_fee: BigUint,
}
