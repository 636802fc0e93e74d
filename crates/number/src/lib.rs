//! Numeric helpers shared by the pricing crates: basis point arithmetic on
//! [`alloy::primitives::U256`], unit conversions and serde adapters.

pub mod bps;
pub mod serialization;
pub mod units;

pub use bps::{BPS_SCALE, U256Ext};
