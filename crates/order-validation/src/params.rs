//! Encoding of the strategy specific parameter blob carried by maker orders.
//!
//! All floor strategies take one unsigned integer: an absolute premium or
//! discount in the currency's smallest unit, or a basis point rate. It is
//! encoded as a single big-endian 32 byte word, the ABI encoding of a
//! `uint256`.

use {
    crate::error::{Error, InvalidOrder},
    alloy::primitives::{Bytes, U256},
};

pub fn decode_uint(params: &[u8]) -> Result<U256, Error> {
    let word: [u8; 32] = params
        .try_into()
        .map_err(|_| InvalidOrder::MalformedParameters { len: params.len() })?;
    Ok(U256::from_be_bytes(word))
}

pub fn encode_uint(value: U256) -> Bytes {
    Bytes::copy_from_slice(&value.to_be_bytes::<32>())
}
