use std::collections::HashMap;

use alloy_sol_types::{sol, SolCall};
use lazy_static::lazy_static;

sol! {
    /// A single hop through a Balancer v1 pool, as the `ExchangeProxy` expects it.
    #[derive(Debug, PartialEq, Eq)]
    struct Swap {
        address pool;
        uint256 tokenInParam;
        uint256 tokenOutParam;
        uint256 maxPrice;
    }

    /// The routing-path structure forwarded to the router's Balancer adapter.
    #[derive(Debug, PartialEq, Eq)]
    struct BalancerPath {
        Swap[] swaps;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IExchangeProxy {
        function batchSwapExactIn(
            Swap[] swaps,
            address tokenIn,
            address tokenOut,
            uint256 totalAmountIn,
            uint256 minTotalAmountOut
        ) external returns (uint256 totalAmountOut);

        function batchEthInSwapExactIn(
            Swap[] swaps,
            address tokenOut,
            uint256 minTotalAmountOut
        ) external payable returns (uint256 totalAmountOut);

        function batchEthOutSwapExactIn(
            Swap[] swaps,
            address tokenIn,
            uint256 totalAmountIn,
            uint256 minTotalAmountOut
        ) external returns (uint256 totalAmountOut);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// `ExchangeProxy` entry points used for exact-input swaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BalancerFunction {
    BatchEthInSwapExactIn,
    BatchEthOutSwapExactIn,
    BatchSwapExactIn,
}

impl BalancerFunction {
    pub const ALL: [BalancerFunction; 3] = [
        BalancerFunction::BatchEthInSwapExactIn,
        BalancerFunction::BatchEthOutSwapExactIn,
        BalancerFunction::BatchSwapExactIn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BalancerFunction::BatchEthInSwapExactIn => "batchEthInSwapExactIn",
            BalancerFunction::BatchEthOutSwapExactIn => "batchEthOutSwapExactIn",
            BalancerFunction::BatchSwapExactIn => "batchSwapExactIn",
        }
    }

    /// Canonical signature, e.g. `batchSwapExactIn((address,uint256,uint256,uint256)[],...)`.
    pub fn signature(&self) -> &'static str {
        match self {
            BalancerFunction::BatchEthInSwapExactIn => {
                IExchangeProxy::batchEthInSwapExactInCall::SIGNATURE
            }
            BalancerFunction::BatchEthOutSwapExactIn => {
                IExchangeProxy::batchEthOutSwapExactInCall::SIGNATURE
            }
            BalancerFunction::BatchSwapExactIn => IExchangeProxy::batchSwapExactInCall::SIGNATURE,
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        match self {
            BalancerFunction::BatchEthInSwapExactIn => {
                IExchangeProxy::batchEthInSwapExactInCall::SELECTOR
            }
            BalancerFunction::BatchEthOutSwapExactIn => {
                IExchangeProxy::batchEthOutSwapExactInCall::SELECTOR
            }
            BalancerFunction::BatchSwapExactIn => IExchangeProxy::batchSwapExactInCall::SELECTOR,
        }
    }

    pub fn from_selector(selector: &[u8]) -> Option<BalancerFunction> {
        let selector: [u8; 4] = selector.try_into().ok()?;
        SELECTORS.get(&selector).copied()
    }
}

lazy_static! {
    static ref SELECTORS: HashMap<[u8; 4], BalancerFunction> = BalancerFunction::ALL
        .iter()
        .map(|function| (function.selector(), *function))
        .collect();
}
