use std::future::Future;

use crate::encoding::{
    errors::EncodingError,
    models::{AdapterExchangeParam, SimpleExchangeParam, SwapIntent},
};

/// An exchange adapter must implement this trait in order to be used by the adapter registry.
///
/// The same intent can be encoded for both deployment contexts: as a payload forwarded by the
/// generic router (`adapter_param`) or as calls issued directly by a proxy-exchange wrapper
/// (`simple_param`).
pub trait DexAdapter: Send + Sync {
    /// Keys under which the registry looks this adapter up.
    fn dex_keys(&self) -> &'static [&'static str];

    fn supports_dex(&self, dex_key: &str) -> bool {
        self.dex_keys()
            .iter()
            .any(|key| key.eq_ignore_ascii_case(dex_key))
    }

    fn adapter_param(&self, intent: &SwapIntent) -> Result<AdapterExchangeParam, EncodingError>;

    fn simple_param(
        &self,
        intent: &SwapIntent,
    ) -> impl Future<Output = Result<SimpleExchangeParam, EncodingError>> + Send;
}
