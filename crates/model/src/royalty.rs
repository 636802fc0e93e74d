use {
    alloy::primitives::Address,
    serde::{Deserialize, Serialize},
};

/// Creator royalty owed on a sale: who receives it and at which rate.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RoyaltyInfo {
    pub recipient: Address,
    /// Rate in basis points of the execution price.
    pub rate_bp: u16,
}

impl RoyaltyInfo {
    /// A royalty paid to nobody is no royalty at all.
    pub fn is_payable(&self) -> bool {
        !self.recipient.is_zero() && self.rate_bp > 0
    }
}
