use {
    crate::{clock::Clock, feed::FeedRegistry},
    alloy::primitives::{Address, I256, U256},
    std::{sync::Arc, time::Duration},
};

/// Readings may never be accepted when they are older than a day, whatever
/// the configuration says.
pub const MAX_LATENCY_CEILING: Duration = Duration::from_secs(24 * 60 * 60);

/// Reads floor prices from the feed registered for a collection.
///
/// There is no caching: every call re-reads the feed.
#[derive(Clone)]
pub struct FloorPriceOracle {
    feeds: Arc<dyn FeedRegistry>,
    clock: Arc<dyn Clock>,
    max_latency: Duration,
}

impl FloorPriceOracle {
    pub fn new(
        feeds: Arc<dyn FeedRegistry>,
        clock: Arc<dyn Clock>,
        max_latency: Duration,
    ) -> Result<Self, ConfigError> {
        if max_latency > MAX_LATENCY_CEILING {
            return Err(ConfigError::LatencyToleranceTooHigh(max_latency));
        }
        Ok(Self {
            feeds,
            clock,
            max_latency,
        })
    }

    /// Returns the current floor price of the collection in the smallest
    /// currency unit.
    pub async fn floor_price(&self, collection: Address) -> Result<U256, Error> {
        let feed = self
            .feeds
            .feed(collection)
            .ok_or(Error::PriceFeedNotAvailable(collection))?;
        let round = feed.latest_round_data().await.map_err(|err| {
            tracing::warn!(?collection, ?err, "failed to read price feed");
            Error::Feed(err)
        })?;

        if !round.answer.is_positive() {
            return Err(Error::InvalidPrice(round.answer));
        }

        let now = U256::from(self.clock.now());
        let deadline = round
            .updated_at
            .saturating_add(U256::from(self.max_latency.as_secs()));
        if now > deadline {
            tracing::debug!(
                ?collection,
                updated_at = %round.updated_at,
                %now,
                "stale floor price"
            );
            return Err(Error::Stale {
                updated_at: round.updated_at,
                now,
            });
        }

        Ok(round.answer.into_raw())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no price feed registered for collection {0}")]
    PriceFeedNotAvailable(Address),
    #[error("price feed read failed")]
    Feed(#[source] anyhow::Error),
    #[error("oracle reported non-positive price {0}")]
    InvalidPrice(I256),
    #[error("oracle price last updated at {updated_at} is stale at {now}")]
    Stale { updated_at: U256, now: U256 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("maximum latency {0:?} exceeds the one day ceiling")]
    LatencyToleranceTooHigh(Duration),
}
