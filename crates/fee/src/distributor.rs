use {
    crate::error::Error,
    alloy::primitives::{Address, U256},
    model::RoyaltyInfo,
    number::{BPS_SCALE, U256Ext, serialization::HexOrDecimalU256},
    serde::Serialize,
    serde_with::serde_as,
};

/// How an execution price is split.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde_as(as = "HexOrDecimalU256")]
    pub protocol_fee: U256,
    /// Recipient of `royalty_fee`. `None` when no royalty is owed.
    pub creator: Option<Address>,
    #[serde_as(as = "HexOrDecimalU256")]
    pub royalty_fee: U256,
    #[serde_as(as = "HexOrDecimalU256")]
    pub seller_proceeds: U256,
}

impl Distribution {
    /// The sum of all parts, equal to the execution price.
    pub fn total(&self) -> U256 {
        self.protocol_fee + self.royalty_fee + self.seller_proceeds
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FeeDistributor {
    max_creator_fee_bp: u16,
}

impl FeeDistributor {
    /// Creates a distributor rejecting royalties above `max_creator_fee_bp`.
    /// The ceiling itself is capped at 100%.
    pub fn new(max_creator_fee_bp: u16) -> Self {
        Self {
            max_creator_fee_bp: max_creator_fee_bp.min(BPS_SCALE),
        }
    }

    pub fn max_creator_fee_bp(&self) -> u16 {
        self.max_creator_fee_bp
    }

    pub fn distribute(
        &self,
        price: U256,
        protocol_fee_bp: u16,
        royalty: Option<RoyaltyInfo>,
    ) -> Result<Distribution, Error> {
        let royalty = royalty.filter(RoyaltyInfo::is_payable);
        if let Some(royalty) =
            royalty.filter(|royalty| royalty.rate_bp > self.max_creator_fee_bp)
        {
            return Err(Error::CreatorFeeTooHigh {
                rate_bp: royalty.rate_bp,
                max_bp: self.max_creator_fee_bp,
            });
        }

        let fees_exceed_price = || Error::FeesExceedPrice {
            price,
            fees: U256::MAX,
        };
        let protocol_fee = price
            .checked_mul_bps(U256::from(protocol_fee_bp))
            .ok_or_else(fees_exceed_price)?;
        let royalty_fee = match royalty {
            Some(royalty) => price
                .checked_mul_bps(U256::from(royalty.rate_bp))
                .ok_or_else(fees_exceed_price)?,
            None => U256::ZERO,
        };
        let fees = protocol_fee.saturating_add(royalty_fee);
        let seller_proceeds = price
            .checked_sub(fees)
            .ok_or(Error::FeesExceedPrice { price, fees })?;

        Ok(Distribution {
            protocol_fee,
            creator: royalty.map(|royalty| royalty.recipient),
            royalty_fee,
            seller_proceeds,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    const CREATOR: Address = address!("00000000000000000000000000000000000000c0");

    fn royalty(rate_bp: u16) -> Option<RoyaltyInfo> {
        Some(RoyaltyInfo {
            recipient: CREATOR,
            rate_bp,
        })
    }

    #[test]
    fn splits_price() {
        let distribution = FeeDistributor::new(1_000)
            .distribute(U256::from(100), 200, royalty(300))
            .unwrap();
        assert_eq!(
            distribution,
            Distribution {
                protocol_fee: U256::from(2),
                creator: Some(CREATOR),
                royalty_fee: U256::from(3),
                seller_proceeds: U256::from(95),
            }
        );
        assert_eq!(distribution.total(), U256::from(100));
    }

    #[test]
    fn remainder_goes_to_seller() {
        let distributor = FeeDistributor::new(BPS_SCALE);
        for price in [0u64, 1, 99, 101, 9_999, 123_456_789] {
            for (protocol_fee_bp, rate_bp) in [(0, 0), (1, 1), (200, 300), (499, 9_501)] {
                let price = U256::from(price);
                let distribution = distributor
                    .distribute(price, protocol_fee_bp, royalty(rate_bp))
                    .unwrap();
                assert_eq!(distribution.total(), price);
            }
        }

        let distribution = distributor
            .distribute(U256::from(99), 200, royalty(300))
            .unwrap();
        assert_eq!(distribution.protocol_fee, U256::from(1));
        assert_eq!(distribution.royalty_fee, U256::from(2));
        assert_eq!(distribution.seller_proceeds, U256::from(96));
    }

    #[test]
    fn unpaid_royalties_are_ignored() {
        let distributor = FeeDistributor::new(1_000);
        let nobody = Some(RoyaltyInfo {
            recipient: Address::ZERO,
            rate_bp: 5_000,
        });
        for royalty in [None, nobody, royalty(0)] {
            let distribution = distributor
                .distribute(U256::from(100), 200, royalty)
                .unwrap();
            assert_eq!(distribution.creator, None);
            assert_eq!(distribution.royalty_fee, U256::ZERO);
            assert_eq!(distribution.seller_proceeds, U256::from(98));
        }
    }

    #[test]
    fn rejects_excessive_fees() {
        let distributor = FeeDistributor::new(1_000);
        assert!(matches!(
            distributor.distribute(U256::from(100), 200, royalty(1_001)),
            Err(Error::CreatorFeeTooHigh {
                rate_bp: 1_001,
                max_bp: 1_000
            })
        ));
        assert!(distributor.distribute(U256::from(100), 200, royalty(1_000)).is_ok());

        let distributor = FeeDistributor::new(BPS_SCALE);
        assert!(matches!(
            distributor.distribute(U256::from(100), 500, royalty(9_600)),
            Err(Error::FeesExceedPrice { .. })
        ));
        assert!(matches!(
            distributor.distribute(U256::MAX, u16::MAX, None),
            Err(Error::FeesExceedPrice { .. })
        ));
    }

    #[test]
    fn ceiling_is_capped() {
        assert_eq!(FeeDistributor::new(u16::MAX).max_creator_fee_bp(), BPS_SCALE);
    }
}
