use {
    alloy::primitives::{Address, I256, U256},
    anyhow::Result,
    std::{collections::HashMap, sync::Arc},
};

/// The two fields of an oracle round the adapter cares about. Any other
/// metadata a feed reports (round ids, start timestamps) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    /// Signed answer as reported by the feed.
    pub answer: I256,
    /// Unix timestamp of the last update.
    pub updated_at: U256,
}

/// An external price feed for a single collection.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    /// Reads the most recent round. One call is one indivisible observation.
    async fn latest_round_data(&self) -> Result<RoundData>;
}

/// Read-only lookup from a collection to its registered feed.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait FeedRegistry: Send + Sync {
    fn feed(&self, collection: Address) -> Option<Arc<dyn PriceFeed>>;
}

/// A feed that always reports the same round.
#[derive(Debug, Clone, Copy)]
pub struct FixedFeed(pub RoundData);

#[async_trait::async_trait]
impl PriceFeed for FixedFeed {
    async fn latest_round_data(&self) -> Result<RoundData> {
        Ok(self.0)
    }
}

/// Feeds registered up front, keyed by collection.
#[derive(Clone, Default)]
pub struct StaticFeeds(HashMap<Address, Arc<dyn PriceFeed>>);

impl FromIterator<(Address, Arc<dyn PriceFeed>)> for StaticFeeds {
    fn from_iter<T: IntoIterator<Item = (Address, Arc<dyn PriceFeed>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FeedRegistry for StaticFeeds {
    fn feed(&self, collection: Address) -> Option<Arc<dyn PriceFeed>> {
        self.0.get(&collection).cloned()
    }
}
