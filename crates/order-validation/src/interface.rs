//! The bit-exact boundary towards off-chain indexers and order book UIs.
//!
//! Failures are identified by the 4 byte selector of a Solidity style error
//! declaration, a zero selector means "valid". Inside the crate errors stay
//! rich; they are only flattened here.

use {
    crate::{error::Error, validator::ValidationOutcome},
    alloy::{primitives::Selector, sol_types::SolError},
    serde::Serialize,
};

mod abi {
    alloy::sol! {
        error OrderInvalid();
        error WrongCurrency();
        error StrategyNotActive();
        error BidTooLow();
        error AskTooHigh();
        error PriceFeedNotAvailable();
        error InvalidOraclePrice();
        error PriceStale();
    }
}

/// Identifier reported for valid orders.
pub const VALID: Selector = Selector::ZERO;

impl Error {
    pub fn selector(&self) -> Selector {
        use price_oracle::Error as Oracle;

        Selector::from(match self {
            Self::OrderInvalid(_) => abi::OrderInvalid::SELECTOR,
            Self::WrongCurrency(_) => abi::WrongCurrency::SELECTOR,
            Self::StrategyNotActive(_) => abi::StrategyNotActive::SELECTOR,
            Self::BidTooLow { .. } => abi::BidTooLow::SELECTOR,
            Self::AskTooHigh { .. } => abi::AskTooHigh::SELECTOR,
            Self::Oracle(Oracle::PriceFeedNotAvailable(_) | Oracle::Feed(_)) => {
                abi::PriceFeedNotAvailable::SELECTOR
            }
            Self::Oracle(Oracle::InvalidPrice(_)) => abi::InvalidOraclePrice::SELECTOR,
            Self::Oracle(Oracle::Stale { .. }) => abi::PriceStale::SELECTOR,
        })
    }
}

/// Probe result as exposed to other systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResponse {
    pub is_valid: bool,
    pub error_selector: Selector,
}

impl From<&ValidationOutcome> for ProbeResponse {
    fn from(outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid => Self {
                is_valid: true,
                error_selector: VALID,
            },
            ValidationOutcome::Invalid(err) => Self {
                is_valid: false,
                error_selector: err.selector(),
            },
        }
    }
}
