//! Maker and taker orders of the floor price strategies.
//!
//! A maker order is the signed, standing intent. A taker order is the
//! counter-offer submitted at settlement time. Neither is persisted by the
//! pricing core; both are constructed from input for the duration of one
//! settlement.

use {
    alloy::primitives::{Address, Bytes, U256},
    number::serialization::HexOrDecimalU256,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    std::fmt::{self, Display},
};

/// Which side of the trade the maker is on.
#[derive(
    Eq,
    PartialEq,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Serialize,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuoteType {
    Bid,
    #[default]
    Ask,
}

/// The kind of asset an order trades. The floor price strategies only ever
/// move a single unit, regardless of the kind.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Erc721,
    Erc1155,
}

/// Numeric identifier of the pricing strategy named on a maker order.
#[derive(
    Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug, Default, Deserialize, Serialize, Hash,
)]
#[serde(transparent)]
pub struct StrategyId(pub u16);

impl Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields shared by maker asks and maker bids.
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    /// The account that signed the order.
    pub signer: Address,
    pub collection: Address,
    /// Settlement currency. [`crate::NATIVE_CURRENCY`] for the native asset.
    pub currency: Address,
    pub strategy_id: StrategyId,
    pub asset_kind: AssetKind,
    /// Single use nonce, invalidated once the order executes.
    #[serde_as(as = "HexOrDecimalU256")]
    pub order_nonce: U256,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub item_ids: Vec<U256>,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub amounts: Vec<U256>,
    /// Strategy specific parameters, interpreted by the named strategy.
    #[serde(default)]
    pub additional_parameters: Bytes,
}

/// A standing intent to sell.
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakerAsk {
    #[serde(flatten)]
    pub data: OrderData,
    /// The lowest price the seller accepts, whatever the oracle says.
    #[serde_as(as = "HexOrDecimalU256")]
    pub min_price: U256,
}

/// A standing intent to buy.
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakerBid {
    #[serde(flatten)]
    pub data: OrderData,
    /// The highest price the buyer pays, whatever the oracle says.
    #[serde_as(as = "HexOrDecimalU256")]
    pub max_price: U256,
}

/// The counter-offer to a [`MakerAsk`].
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakerBid {
    /// Receiver of the purchased item.
    pub recipient: Address,
    #[serde_as(as = "HexOrDecimalU256")]
    pub max_price: U256,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub item_ids: Vec<U256>,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub amounts: Vec<U256>,
}

/// The counter-offer to a [`MakerBid`].
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakerAsk {
    /// Receiver of the sale proceeds.
    pub recipient: Address,
    #[serde_as(as = "HexOrDecimalU256")]
    pub min_price: U256,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub item_ids: Vec<U256>,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub amounts: Vec<U256>,
}

/// What a strategy settles a maker/taker pair at.
#[serde_as]
#[derive(Eq, PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde_as(as = "HexOrDecimalU256")]
    pub price: U256,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub item_ids: Vec<U256>,
    #[serde_as(as = "Vec<HexOrDecimalU256>")]
    pub amounts: Vec<U256>,
    /// Whether the maker's nonce must be invalidated after execution.
    pub is_nonce_invalidated: bool,
}
