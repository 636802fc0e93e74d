use {
    crate::{
        error::{Error, InvalidOrder},
        strategy::Strategy,
    },
    model::{QuoteType, StrategyId},
    std::collections::{HashMap, hash_map::Entry},
};

/// Protocol fees above 5% are rejected at configuration time.
pub const MAX_PROTOCOL_FEE_BP: u16 = 500;

/// How a registered strategy id is priced and charged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrategyInfo {
    pub strategy: Strategy,
    pub is_active: bool,
    /// Protocol fee charged on executions of this strategy.
    pub protocol_fee_bp: u16,
}

/// The strategies maker orders may name. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct StrategyRegistry(HashMap<StrategyId, StrategyInfo>);

impl StrategyRegistry {
    pub fn new(
        strategies: impl IntoIterator<Item = (StrategyId, StrategyInfo)>,
    ) -> Result<Self, RegistryError> {
        let mut registry = HashMap::new();
        for (id, info) in strategies {
            if info.protocol_fee_bp > MAX_PROTOCOL_FEE_BP {
                return Err(RegistryError::ProtocolFeeTooHigh {
                    id,
                    protocol_fee_bp: info.protocol_fee_bp,
                });
            }
            match registry.entry(id) {
                Entry::Occupied(_) => return Err(RegistryError::DuplicateId(id)),
                Entry::Vacant(entry) => {
                    entry.insert(info);
                }
            }
        }
        Ok(Self(registry))
    }

    /// Looks up the strategy a maker order names for the given side of the
    /// book.
    pub fn get(&self, id: StrategyId, quote_type: QuoteType) -> Result<&StrategyInfo, Error> {
        let info = self.0.get(&id).ok_or(InvalidOrder::UnknownStrategy(id))?;
        if info.strategy.quote_type() != quote_type {
            return Err(InvalidOrder::WrongQuoteType.into());
        }
        if !info.is_active {
            return Err(Error::StrategyNotActive(id));
        }
        Ok(info)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("strategy id {0} registered twice")]
    DuplicateId(StrategyId),
    #[error("strategy {id} protocol fee of {protocol_fee_bp}bp exceeds the maximum")]
    ProtocolFeeTooHigh { id: StrategyId, protocol_fee_bp: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(strategy: Strategy, is_active: bool) -> StrategyInfo {
        StrategyInfo {
            strategy,
            is_active,
            protocol_fee_bp: 50,
        }
    }

    #[test]
    fn lookups() {
        let registry = StrategyRegistry::new([
            (StrategyId(1), info(Strategy::FixedPremiumAsk, true)),
            (StrategyId(2), info(Strategy::FixedDiscountBid, false)),
        ])
        .unwrap();

        assert_eq!(
            registry.get(StrategyId(1), QuoteType::Ask).unwrap().strategy,
            Strategy::FixedPremiumAsk
        );
        assert!(matches!(
            registry.get(StrategyId(1), QuoteType::Bid),
            Err(Error::OrderInvalid(InvalidOrder::WrongQuoteType))
        ));
        assert!(matches!(
            registry.get(StrategyId(2), QuoteType::Bid),
            Err(Error::StrategyNotActive(StrategyId(2)))
        ));
        assert!(matches!(
            registry.get(StrategyId(3), QuoteType::Ask),
            Err(Error::OrderInvalid(InvalidOrder::UnknownStrategy(StrategyId(3))))
        ));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            StrategyRegistry::new([
                (StrategyId(1), info(Strategy::FixedPremiumAsk, true)),
                (StrategyId(1), info(Strategy::FixedDiscountBid, true)),
            ]),
            Err(RegistryError::DuplicateId(StrategyId(1)))
        ));
        let mut expensive = info(Strategy::FixedPremiumAsk, true);
        expensive.protocol_fee_bp = MAX_PROTOCOL_FEE_BP + 1;
        assert!(matches!(
            StrategyRegistry::new([(StrategyId(1), expensive)]),
            Err(RegistryError::ProtocolFeeTooHigh { .. })
        ));
    }
}
