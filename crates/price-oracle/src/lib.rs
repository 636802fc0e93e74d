//! Floor price oracle adapter.
//!
//! Wraps a per-collection external price feed and exposes a single "current
//! floor price" read that rejects non-positive answers and readings older
//! than the configured maximum latency. The mapping from collection to feed
//! is injected as a read-only [`FeedRegistry`] capability, so the adapter is
//! a function of its explicit inputs and trivially testable with fake feeds.

pub mod clock;
pub mod feed;
mod oracle;

pub use {
    clock::{Clock, FixedClock, SystemClock},
    feed::{FeedRegistry, FixedFeed, PriceFeed, RoundData, StaticFeeds},
    oracle::{ConfigError, Error, FloorPriceOracle, MAX_LATENCY_CEILING},
};

#[cfg(any(test, feature = "test-util"))]
pub use {
    clock::MockClock,
    feed::{MockFeedRegistry, MockPriceFeed},
};
