//! Splits an execution price between the protocol, the collection's creator
//! and the seller.
//!
//! The seller's proceeds are always computed as the remainder, so the three
//! parts add up to the price exactly and any truncation goes to the seller.

mod distributor;
mod error;
pub mod royalty;

pub use {
    distributor::{Distribution, FeeDistributor},
    error::Error,
    royalty::{RegistryRoyalties, RoyaltyResolving},
};
