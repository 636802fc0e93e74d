use {
    alloy::primitives::{Address, U256},
    model::AssetKind,
};

/// A currency payment. The native currency is denoted by
/// [`model::NATIVE_CURRENCY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub currency: Address,
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

/// Movement of the traded items from seller to buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTransfer {
    pub collection: Address,
    pub asset_kind: AssetKind,
    pub from: Address,
    pub to: Address,
    pub item_ids: Vec<U256>,
    pub amounts: Vec<U256>,
}

/// Everything a settlement moves. Applied all or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfers {
    pub payments: Vec<Transfer>,
    pub items: ItemTransfer,
}

/// Custody of currencies and assets.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait AssetTransferring: Send + Sync {
    /// Executes all transfers atomically: either every one of them happens or
    /// none does.
    async fn transfer(&self, transfers: &Transfers) -> anyhow::Result<()>;
}
