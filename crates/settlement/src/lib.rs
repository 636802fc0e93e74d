//! Reference settlement of a matched maker/taker pair.
//!
//! Glues the pricing core to its collaborators: signature verification,
//! single-use nonces, royalty lookups and asset transfers. Every check runs
//! before anything is transferred, and a failed settlement leaves the nonce
//! registry as it found it.

mod engine;
mod error;
pub mod nonces;
pub mod transfer;

pub use {
    engine::{Executed, Settlement, SignatureVerifying},
    error::Error,
    nonces::{InMemoryNonces, NonceRegistry},
    transfer::{AssetTransferring, ItemTransfer, Transfer, Transfers},
};
