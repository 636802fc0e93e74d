//! Contains the order and settlement models shared by the pricing,
//! validation, fee and settlement crates.

pub mod order;
pub mod royalty;

pub use {
    alloy::primitives::{Address, Bytes, U256},
    order::{
        AssetKind,
        ExecutionResult,
        MakerAsk,
        MakerBid,
        OrderData,
        QuoteType,
        StrategyId,
        TakerAsk,
        TakerBid,
    },
    royalty::RoyaltyInfo,
};

/// The currency sentinel denoting the chain's native asset. It is used in
/// place of an actual token address on ask orders settled in native currency.
pub const NATIVE_CURRENCY: Address = Address::ZERO;
