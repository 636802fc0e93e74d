//! Configuration of the pricer, loaded from a TOML file.

use {
    alloy::primitives::U256,
    fee::{FeeDistributor, RegistryRoyalties},
    model::RoyaltyInfo,
    number::BPS_SCALE,
    order_validation::{OrderValidator, StrategyInfo, StrategyRegistry},
    price_oracle::{
        Clock,
        FixedClock,
        FixedFeed,
        FloorPriceOracle,
        PriceFeed,
        RoundData,
        StaticFeeds,
        SystemClock,
    },
    std::{path::Path, sync::Arc},
};

mod file;

/// Everything needed to price and split orders.
pub struct Config {
    pub validator: OrderValidator,
    pub fees: FeeDistributor,
    pub royalties: RegistryRoyalties,
}

/// Load the pricer configuration from a TOML file.
///
/// # Panics
///
/// This method panics if the config is invalid or on I/O errors.
pub async fn load(path: &Path) -> Config {
    let data = tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("I/O error while reading {path:?}: {e:?}"));
    parse(&data).unwrap_or_else(|e| panic!("Configuration error while reading {path:?}: {e:?}"))
}

pub(crate) fn parse(data: &str) -> anyhow::Result<Config> {
    let config: file::Config = toml::de::from_str(data)?;
    anyhow::ensure!(
        config.max_creator_fee_bp <= BPS_SCALE,
        "max creator fee of {}bp exceeds 100%",
        config.max_creator_fee_bp
    );

    let feeds: StaticFeeds = config
        .feeds
        .into_iter()
        .map(|snapshot| {
            let feed = FixedFeed(RoundData {
                answer: snapshot.answer,
                updated_at: U256::from(snapshot.updated_at),
            });
            (snapshot.collection, Arc::new(feed) as Arc<dyn PriceFeed>)
        })
        .collect();
    let clock: Arc<dyn Clock> = match config.now {
        Some(now) => Arc::new(FixedClock(now)),
        None => Arc::new(SystemClock),
    };
    let oracle = FloorPriceOracle::new(Arc::new(feeds), clock, config.max_latency)?;

    let strategies = StrategyRegistry::new(config.strategies.into_iter().map(|strategy| {
        (
            strategy.id,
            StrategyInfo {
                strategy: strategy.kind,
                is_active: strategy.active,
                protocol_fee_bp: strategy.protocol_fee_bp,
            },
        )
    }))?;

    let royalties = config
        .royalties
        .into_iter()
        .map(|royalty| {
            (
                royalty.collection,
                RoyaltyInfo {
                    recipient: royalty.recipient,
                    rate_bp: royalty.rate_bp,
                },
            )
        })
        .collect();

    Ok(Config {
        validator: OrderValidator::new(oracle, strategies, config.wrapped_native),
        fees: FeeDistributor::new(config.max_creator_fee_bp),
        royalties: RegistryRoyalties::new(royalties),
    })
}
