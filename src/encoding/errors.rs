use std::io;

use thiserror::Error;

use crate::encoding::models::SwapSide;

/// Represents the outer-level, user-facing errors of the balancer adapter encoding package.
///
/// Variants:
/// - `UnsupportedSide`: The swap side is not implemented by the adapter. Only sell (exact input)
///   swaps can be encoded.
/// - `InvalidArgument`: An argument could not be ABI-encoded, e.g. an address that is not 20 bytes
///   long or an amount that does not fit in a `uint256`. `context` names the entry point (or the
///   adapter payload) and `field` the offending argument.
/// - `InvalidInput`: Indicates that the encoding or decoding has failed due to bad input.
/// - `FatalError`: There is problem with the application setup.
/// - `RecoverableError`: Indicates that the encoding has failed with a recoverable error. Retrying
///   at a later time may succeed. It may have failed due to a temporary issue, such as a network
///   problem.
#[derive(Error, Debug, PartialEq)]
pub enum EncodingError {
    #[error("Unsupported swap side: {0:?}. Only sell swaps are supported")]
    UnsupportedSide(SwapSide),
    #[error("Invalid argument `{field}` for {context}: {reason}")]
    InvalidArgument { context: &'static str, field: String, reason: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Fatal error: {0}")]
    FatalError(String),
    #[error("Recoverable error: {0}")]
    RecoverableError(String),
}

impl From<io::Error> for EncodingError {
    fn from(err: io::Error) -> Self {
        EncodingError::FatalError(err.to_string())
    }
}

impl From<serde_json::Error> for EncodingError {
    fn from(err: serde_json::Error) -> Self {
        EncodingError::InvalidInput(err.to_string())
    }
}
