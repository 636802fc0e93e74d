//! The floor price strategy family.
//!
//! Every variant derives a "desired" price from the oracle floor and its
//! parameter, then clamps it with the maker's pre-committed bound: an ask
//! never sells below its `min_price`, a bid never pays above its `max_price`.
//! The taker's bound is not part of the formula, it is checked against the
//! final price by the validator.
//!
//! Basis point variants truncate (see [`number::bps`]).

use {
    crate::error::{Error, InvalidOrder},
    alloy::primitives::{Address, U256},
    model::{NATIVE_CURRENCY, QuoteType},
    number::{BPS_SCALE, U256Ext},
    serde::{Deserialize, Serialize},
};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Ask at `floor + premium`.
    FixedPremiumAsk,
    /// Ask at `floor * (10000 + premium_bp) / 10000`.
    PercentagePremiumAsk,
    /// Bid at `floor - discount`.
    FixedDiscountBid,
    /// Bid at `floor * (10000 - discount_bp) / 10000`.
    PercentageDiscountBid,
}

impl Strategy {
    pub fn quote_type(&self) -> QuoteType {
        match self {
            Self::FixedPremiumAsk | Self::PercentagePremiumAsk => QuoteType::Ask,
            Self::FixedDiscountBid | Self::PercentageDiscountBid => QuoteType::Bid,
        }
    }

    /// Asks settle in the native asset or its wrapped token. Bids can only
    /// pre-commit the wrapped token.
    pub fn accepts_currency(&self, currency: Address, wrapped_native: Address) -> bool {
        match self.quote_type() {
            QuoteType::Ask => currency == NATIVE_CURRENCY || currency == wrapped_native,
            QuoteType::Bid => currency == wrapped_native,
        }
    }

    /// Rejects parameters that can not produce a price whatever the floor.
    pub fn check_parameter(&self, parameter: U256) -> Result<(), Error> {
        match self {
            Self::PercentageDiscountBid if parameter >= U256::from(BPS_SCALE) => {
                Err(InvalidOrder::DiscountTooHigh.into())
            }
            _ => Ok(()),
        }
    }

    /// The oracle derived price, before the maker's bound is applied.
    pub fn desired_price(&self, floor: U256, parameter: U256) -> Result<U256, Error> {
        let price = match self {
            Self::FixedPremiumAsk => floor.checked_add(parameter),
            Self::PercentagePremiumAsk => floor.checked_add_bps(parameter),
            Self::FixedDiscountBid => {
                if parameter >= floor {
                    return Err(InvalidOrder::DiscountExceedsFloor.into());
                }
                floor.checked_sub(parameter)
            }
            Self::PercentageDiscountBid => {
                self.check_parameter(parameter)?;
                floor.checked_sub_bps(parameter)
            }
        };
        price.ok_or_else(|| InvalidOrder::PriceOverflow.into())
    }

    /// Clamps the desired price with the maker's bound. The oracle price is
    /// only used when it is more favorable to the maker.
    pub fn bound(&self, desired: U256, maker_bound: U256) -> U256 {
        match self.quote_type() {
            QuoteType::Ask => desired.max(maker_bound),
            QuoteType::Bid => desired.min(maker_bound),
        }
    }

    /// `bound(desired_price(floor, parameter), maker_bound)`.
    pub fn price(&self, floor: U256, parameter: U256, maker_bound: U256) -> Result<U256, Error> {
        Ok(self.bound(self.desired_price(floor, parameter)?, maker_bound))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, number::units::EthUnit};

    fn u(value: u64) -> U256 {
        U256::from(value)
    }

    #[test]
    fn fixed_premium_ask() {
        let strategy = Strategy::FixedPremiumAsk;
        assert_eq!(
            strategy.price(10u64.eth(), 1u64.eth(), 9u64.eth()).unwrap(),
            11u64.eth()
        );
        // The maker's minimum wins over an adverse oracle.
        assert_eq!(
            strategy.price(10u64.eth(), 1u64.eth(), 12u64.eth()).unwrap(),
            12u64.eth()
        );
        assert!(matches!(
            strategy.price(U256::MAX, u(1), u(0)),
            Err(Error::OrderInvalid(InvalidOrder::PriceOverflow))
        ));
    }

    #[test]
    fn fixed_premium_is_monotonic() {
        let strategy = Strategy::FixedPremiumAsk;
        let min_price = u(50);
        let mut last = U256::ZERO;
        for floor in (0..100).step_by(7) {
            for premium in (0..100).step_by(9) {
                let price = strategy.price(u(floor), u(premium), min_price).unwrap();
                assert_eq!(price, u(floor + premium).max(min_price));
                let higher_premium = strategy.price(u(floor), u(premium + 1), min_price).unwrap();
                let higher_floor = strategy.price(u(floor + 1), u(premium), min_price).unwrap();
                assert!(higher_premium >= price && higher_floor >= price);
            }
            let price = strategy.price(u(floor), u(0), min_price).unwrap();
            assert!(price >= last);
            last = price;
        }
    }

    #[test]
    fn percentage_premium_truncates() {
        let strategy = Strategy::PercentagePremiumAsk;
        assert_eq!(strategy.price(u(101), u(50), u(0)).unwrap(), u(101));
        assert_eq!(strategy.price(u(10_000), u(50), u(0)).unwrap(), u(10_050));
        assert_eq!(
            strategy.price(10u64.eth(), u(1_000), u(0)).unwrap(),
            11u64.eth()
        );
        // No upper bound on the premium rate.
        assert_eq!(strategy.price(u(100), u(20_000), u(0)).unwrap(), u(300));
    }

    #[test]
    fn fixed_discount_bid() {
        let strategy = Strategy::FixedDiscountBid;
        assert_eq!(
            strategy.price(10u64.eth(), 1u64.eth(), 20u64.eth()).unwrap(),
            9u64.eth()
        );
        // The maker's maximum wins over a favorable oracle for the seller.
        assert_eq!(
            strategy.price(10u64.eth(), 1u64.eth(), 8u64.eth()).unwrap(),
            8u64.eth()
        );
        for discount in [10u64.eth(), 11u64.eth()] {
            assert!(matches!(
                strategy.price(10u64.eth(), discount, 20u64.eth()),
                Err(Error::OrderInvalid(InvalidOrder::DiscountExceedsFloor))
            ));
        }
        for floor in 1..50 {
            for discount in 0..floor {
                assert_eq!(
                    strategy.price(u(floor), u(discount), u(30)).unwrap(),
                    u(floor - discount).min(u(30))
                );
            }
        }
    }

    #[test]
    fn percentage_discount_bid() {
        let strategy = Strategy::PercentageDiscountBid;
        // 101 * 9950 / 10000 = 100.495
        assert_eq!(strategy.price(u(101), u(50), U256::MAX).unwrap(), u(100));
        assert_eq!(
            strategy.price(10u64.eth(), u(1_000), U256::MAX).unwrap(),
            9u64.eth()
        );
        assert_eq!(strategy.price(u(1), u(9_999), U256::MAX).unwrap(), u(0));
        for discount in [10_000, 10_001, u64::MAX] {
            assert!(matches!(
                strategy.price(u(100), u(discount), U256::MAX),
                Err(Error::OrderInvalid(InvalidOrder::DiscountTooHigh))
            ));
        }
    }

    #[test]
    fn currencies() {
        let weth = Address::repeat_byte(0xef);
        let other = Address::repeat_byte(0x01);
        for strategy in [Strategy::FixedPremiumAsk, Strategy::PercentagePremiumAsk] {
            assert!(strategy.accepts_currency(NATIVE_CURRENCY, weth));
            assert!(strategy.accepts_currency(weth, weth));
            assert!(!strategy.accepts_currency(other, weth));
        }
        for strategy in [Strategy::FixedDiscountBid, Strategy::PercentageDiscountBid] {
            assert!(!strategy.accepts_currency(NATIVE_CURRENCY, weth));
            assert!(strategy.accepts_currency(weth, weth));
            assert!(!strategy.accepts_currency(other, weth));
        }
    }

    #[test]
    fn names() {
        assert_eq!(Strategy::FixedPremiumAsk.to_string(), "fixed-premium-ask");
        assert_eq!(
            "percentage-discount-bid".parse::<Strategy>().unwrap(),
            Strategy::PercentageDiscountBid
        );
    }
}
