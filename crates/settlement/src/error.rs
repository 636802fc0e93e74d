use alloy::primitives::{Address, U256};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid maker signature: {0:?}")]
    InvalidSignature(#[source] anyhow::Error),
    #[error("nonce {nonce} of maker {maker} was already used")]
    NonceInvalidated { maker: Address, nonce: U256 },
    #[error(transparent)]
    Validation(#[from] order_validation::Error),
    #[error(transparent)]
    Fee(#[from] fee::Error),
    #[error("transfer failed: {0:?}")]
    Transfer(#[source] anyhow::Error),
}

impl Error {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSignature(_) => "InvalidSignature",
            Self::NonceInvalidated { .. } => "NonceInvalidated",
            Self::Validation(err) => err.name(),
            Self::Fee(fee::Error::CreatorFeeTooHigh { .. }) => "CreatorFeeTooHigh",
            Self::Fee(fee::Error::BundleRoyaltyConflict { .. }) => "BundleRoyaltyConflict",
            Self::Fee(fee::Error::FeesExceedPrice { .. }) => "FeesExceedPrice",
            Self::Fee(fee::Error::Royalty(_)) => "RoyaltyLookup",
            Self::Transfer(_) => "Transfer",
        }
    }
}
