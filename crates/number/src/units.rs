use alloy::primitives::{U256, utils::Unit};

/// Conversions from human readable amounts into the smallest currency unit.
pub trait EthUnit: std::marker::Sized {
    /// Returns the current wei amount.
    fn wei(self) -> U256;

    /// Returns the current milli-Eth amount as wei (i.e. 1e15 wei).
    fn milli_eth(self) -> U256 {
        self.wei() * U256::from(1_000_000_000_000_000u64)
    }

    /// Returns the current Eth amount as wei (i.e. 1e18 wei).
    fn eth(self) -> U256 {
        self.wei() * Unit::ETHER.wei()
    }
}

impl EthUnit for u64 {
    fn wei(self) -> U256 {
        U256::from(self)
    }
}

impl EthUnit for u128 {
    fn wei(self) -> U256 {
        U256::from(self)
    }
}
