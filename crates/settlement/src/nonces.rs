use {
    alloy::primitives::{Address, U256},
    dashmap::DashSet,
};

/// Single-use tokens consumed by executed or cancelled maker orders.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait NonceRegistry: Send + Sync {
    fn is_invalidated(&self, maker: Address, nonce: U256) -> bool;

    /// Marks the nonce as consumed. Returns `false` if it already was, in
    /// which case the caller lost the race for it.
    fn invalidate(&self, maker: Address, nonce: U256) -> bool;

    /// Undoes an `invalidate` of a settlement that failed afterwards.
    fn restore(&self, maker: Address, nonce: U256);

    /// Cancels orders on behalf of their maker.
    fn cancel(&self, maker: Address, nonces: &[U256]) {
        for nonce in nonces {
            self.invalidate(maker, *nonce);
        }
    }
}

/// Process local nonce registry.
#[derive(Debug, Default)]
pub struct InMemoryNonces(DashSet<(Address, U256)>);

impl NonceRegistry for InMemoryNonces {
    fn is_invalidated(&self, maker: Address, nonce: U256) -> bool {
        self.0.contains(&(maker, nonce))
    }

    fn invalidate(&self, maker: Address, nonce: U256) -> bool {
        self.0.insert((maker, nonce))
    }

    fn restore(&self, maker: Address, nonce: U256) {
        self.0.remove(&(maker, nonce));
    }
}
