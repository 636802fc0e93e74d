//! Pricing and validation of maker orders priced off a collection's floor.
//!
//! The crate is organised around a single pure pricing pipeline with two
//! thin call sites:
//!
//! - **Strict** ([`OrderValidator::execute_ask`],
//!   [`OrderValidator::execute_bid`]): used at settlement time with a matched
//!   taker. Any violation is returned as an [`Error`] which aborts the
//!   settlement.
//! - **Probe** ([`OrderValidator::probe_ask`], [`OrderValidator::probe_bid`]):
//!   maker order only. Runs the maker side checks (item shape, currency,
//!   parameters, oracle health) and returns a [`ValidationOutcome`] instead
//!   of failing, so standing orders can be swept in bulk.
//!
//! The fixed width error identifiers other systems decode live in
//! [`interface`] only; everything else works with the rich [`Error`].

mod error;
pub mod interface;
pub mod params;
pub mod registry;
pub mod strategy;
mod validator;

pub use {
    error::{Error, InvalidOrder},
    registry::{MAX_PROTOCOL_FEE_BP, RegistryError, StrategyInfo, StrategyRegistry},
    strategy::Strategy,
    validator::{OrderValidator, ValidationOutcome},
};
