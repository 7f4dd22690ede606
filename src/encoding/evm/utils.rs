use alloy_primitives::{Address, Bytes, U256};
use num_bigint::BigUint;

use crate::encoding::{errors::EncodingError, evm::constants::NATIVE_TOKEN_ADDRESS};

/// Returns true if `token` is the native asset sentinel rather than a token contract.
pub fn is_native(token: &Bytes) -> bool {
    token[..] == NATIVE_TOKEN_ADDRESS[..]
}

/// Safely converts a `Bytes` object to an `Address` object.
///
/// Checks the length of the `Bytes` before attempting to convert, and returns an `EncodingError`
/// if not 20 bytes long.
pub fn bytes_to_address(address: &Bytes) -> Result<Address, EncodingError> {
    if address.len() == 20 {
        Ok(Address::from_slice(address))
    } else {
        Err(EncodingError::InvalidInput(format!("Invalid address: {:?}", address)))
    }
}

/// Converts a `BigUint` to a `U256`, failing if the value needs more than 256 bits.
pub fn biguint_to_u256(value: &BigUint) -> Result<U256, EncodingError> {
    if value.bits() > 256 {
        return Err(EncodingError::InvalidInput(format!("Value {} overflows uint256", value)));
    }
    Ok(U256::from_be_slice(&value.to_bytes_be()))
}

pub fn u256_to_biguint(value: U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}
