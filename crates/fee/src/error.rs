use alloy::{
    primitives::{Address, Selector, U256},
    sol_types::SolError,
};

mod abi {
    alloy::sol! {
        error CreatorFeeTooHigh();
        error BundleRoyaltyConflict(address collection);
        error FeesExceedPrice();
    }
}

/// Fee policy violations. Always fatal to the enclosing settlement.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("creator fee of {rate_bp}bp exceeds the maximum of {max_bp}bp")]
    CreatorFeeTooHigh { rate_bp: u16, max_bp: u16 },
    #[error("items of collection {collection} declare different royalties")]
    BundleRoyaltyConflict { collection: Address },
    #[error("fees of {fees} exceed the price of {price}")]
    FeesExceedPrice { price: U256, fees: U256 },
    #[error("royalty lookup failed: {0:?}")]
    Royalty(#[source] anyhow::Error),
}

impl Error {
    /// Fixed width identifier of the failure. Lookup failures have no
    /// identifier of their own.
    pub fn selector(&self) -> Option<Selector> {
        match self {
            Self::CreatorFeeTooHigh { .. } => Some(abi::CreatorFeeTooHigh::SELECTOR.into()),
            Self::BundleRoyaltyConflict { .. } => {
                Some(abi::BundleRoyaltyConflict::SELECTOR.into())
            }
            Self::FeesExceedPrice { .. } => Some(abi::FeesExceedPrice::SELECTOR.into()),
            Self::Royalty(_) => None,
        }
    }
}
