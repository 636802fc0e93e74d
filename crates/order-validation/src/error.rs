use {
    alloy::primitives::{Address, U256},
    model::StrategyId,
};

/// Closed taxonomy of pricing failures.
///
/// Structural defects (`OrderInvalid`, `WrongCurrency`, `StrategyNotActive`)
/// are detected before the oracle is read, oracle defects while reading it
/// and counter-party bound violations only after the price is resolved.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid order: {0}")]
    OrderInvalid(InvalidOrder),
    #[error("currency {0} is not accepted by the strategy")]
    WrongCurrency(Address),
    #[error("strategy {0} is not active")]
    StrategyNotActive(StrategyId),
    #[error("taker bid {max_price} is below execution price {price}")]
    BidTooLow { price: U256, max_price: U256 },
    #[error("taker ask {min_price} is above execution price {price}")]
    AskTooHigh { price: U256, min_price: U256 },
    #[error(transparent)]
    Oracle(#[from] price_oracle::Error),
}

/// Why an order is structurally invalid. All of these surface as the same
/// `OrderInvalid` identifier externally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrder {
    #[error("strategy {0} is not registered")]
    UnknownStrategy(StrategyId),
    #[error("strategy cannot price this side of the book")]
    WrongQuoteType,
    #[error("only single items with an amount of 1 are supported")]
    NotSingleItem,
    #[error("taker does not match the maker's item")]
    ItemMismatch,
    #[error("expected a single 32 byte word of parameters, got {len} bytes")]
    MalformedParameters { len: usize },
    #[error("discount is not below the floor price")]
    DiscountExceedsFloor,
    #[error("discount of 100% or more")]
    DiscountTooHigh,
    #[error("price computation overflows")]
    PriceOverflow,
}

impl From<InvalidOrder> for Error {
    fn from(value: InvalidOrder) -> Self {
        Self::OrderInvalid(value)
    }
}

impl Error {
    /// Stable name of the taxonomy entry, used for metric labels and as the
    /// error signature at the interface.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OrderInvalid(_) => "OrderInvalid",
            Self::WrongCurrency(_) => "WrongCurrency",
            Self::StrategyNotActive(_) => "StrategyNotActive",
            Self::BidTooLow { .. } => "BidTooLow",
            Self::AskTooHigh { .. } => "AskTooHigh",
            Self::Oracle(price_oracle::Error::PriceFeedNotAvailable(_))
            | Self::Oracle(price_oracle::Error::Feed(_)) => "PriceFeedNotAvailable",
            Self::Oracle(price_oracle::Error::InvalidPrice(_)) => "InvalidOraclePrice",
            Self::Oracle(price_oracle::Error::Stale { .. }) => "PriceStale",
        }
    }
}
