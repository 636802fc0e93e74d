use {
    alloy::primitives::{Address, I256},
    model::StrategyId,
    order_validation::Strategy,
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
    std::time::Duration,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// The wrapped native token, the only ERC20 accepted by the strategies.
    pub wrapped_native: Address,

    /// Oracle readings older than this are stale.
    #[serde(with = "humantime_serde")]
    pub max_latency: Duration,

    /// Royalties above this rate fail the settlement.
    pub max_creator_fee_bp: u16,

    /// Evaluate at this unix timestamp instead of the wall clock. Useful to
    /// replay old feed snapshots.
    #[serde(default)]
    pub now: Option<u64>,

    #[serde(default, rename = "strategy")]
    pub strategies: Vec<StrategyConfig>,

    #[serde(default, rename = "feed")]
    pub feeds: Vec<FeedSnapshot>,

    #[serde(default, rename = "royalty")]
    pub royalties: Vec<RoyaltyConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StrategyConfig {
    pub id: StrategyId,
    pub kind: Strategy,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub protocol_fee_bp: u16,
}

fn default_active() -> bool {
    true
}

/// The last round a collection's feed reported.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FeedSnapshot {
    pub collection: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub answer: I256,
    pub updated_at: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RoyaltyConfig {
    pub collection: Address,
    pub recipient: Address,
    pub rate_bp: u16,
}
