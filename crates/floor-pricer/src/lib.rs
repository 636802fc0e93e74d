//! Offline evaluation of floor priced orders.
//!
//! Prices maker orders against a configured snapshot of oracle rounds, probes
//! standing orders in bulk and splits execution prices into fees, without
//! touching any chain.

pub mod cli;
pub mod config;
mod run;

pub use run::{run, start};
