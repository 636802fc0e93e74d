use {
    crate::{
        error::{Error, InvalidOrder},
        params,
        registry::StrategyRegistry,
        strategy::Strategy,
    },
    alloy::primitives::{Address, U256},
    model::{ExecutionResult, MakerAsk, MakerBid, OrderData, QuoteType, TakerAsk, TakerBid},
    price_oracle::FloorPriceOracle,
};

/// Whether a standing maker order is currently fulfillable. A `Valid`
/// answer is a snapshot; settlement re-validates from scratch.
#[derive(Debug)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Error),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Prices maker orders off the floor of their collection.
///
/// Holds no mutable state: every call reads the oracle once and is otherwise
/// a function of its inputs.
#[derive(Clone)]
pub struct OrderValidator {
    oracle: FloorPriceOracle,
    strategies: StrategyRegistry,
    /// The wrapped native token, the only ERC20 the strategies settle in.
    wrapped_native: Address,
}

impl OrderValidator {
    pub fn new(
        oracle: FloorPriceOracle,
        strategies: StrategyRegistry,
        wrapped_native: Address,
    ) -> Self {
        Self {
            oracle,
            strategies,
            wrapped_native,
        }
    }

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    /// Strict validation of a taker bid against a maker ask, using the
    /// strategy the ask names.
    pub async fn execute_ask(
        &self,
        taker_bid: &TakerBid,
        maker_ask: &MakerAsk,
    ) -> Result<ExecutionResult, Error> {
        let info = self
            .strategies
            .get(maker_ask.data.strategy_id, QuoteType::Ask)?;
        self.execute_ask_with(info.strategy, taker_bid, maker_ask)
            .await
    }

    /// Strict validation of a taker ask against a maker bid, using the
    /// strategy the bid names.
    pub async fn execute_bid(
        &self,
        taker_ask: &TakerAsk,
        maker_bid: &MakerBid,
    ) -> Result<ExecutionResult, Error> {
        let info = self
            .strategies
            .get(maker_bid.data.strategy_id, QuoteType::Bid)?;
        self.execute_bid_with(info.strategy, taker_ask, maker_bid)
            .await
    }

    /// Prices a maker ask with the given strategy and checks the taker's
    /// maximum against the final price.
    pub async fn execute_ask_with(
        &self,
        strategy: Strategy,
        taker_bid: &TakerBid,
        maker_ask: &MakerAsk,
    ) -> Result<ExecutionResult, Error> {
        let result: Result<_, Error> = async {
            ensure_quote_type(strategy, QuoteType::Ask)?;
            let parameter = self.check_maker(strategy, &maker_ask.data)?;
            check_taker(&maker_ask.data, &taker_bid.item_ids, &taker_bid.amounts)?;
            let price = self
                .quote(strategy, &maker_ask.data, parameter, maker_ask.min_price)
                .await?;
            if taker_bid.max_price < price {
                return Err(Error::BidTooLow {
                    price,
                    max_price: taker_bid.max_price,
                });
            }
            Ok(execution(price, &maker_ask.data))
        }
        .await;
        Metrics::get().record_execution(strategy, &result);
        result
    }

    /// Prices a maker bid with the given strategy and checks the taker's
    /// minimum against the final price.
    pub async fn execute_bid_with(
        &self,
        strategy: Strategy,
        taker_ask: &TakerAsk,
        maker_bid: &MakerBid,
    ) -> Result<ExecutionResult, Error> {
        let result: Result<_, Error> = async {
            ensure_quote_type(strategy, QuoteType::Bid)?;
            let parameter = self.check_maker(strategy, &maker_bid.data)?;
            check_taker(&maker_bid.data, &taker_ask.item_ids, &taker_ask.amounts)?;
            let price = self
                .quote(strategy, &maker_bid.data, parameter, maker_bid.max_price)
                .await?;
            if taker_ask.min_price > price {
                return Err(Error::AskTooHigh {
                    price,
                    min_price: taker_ask.min_price,
                });
            }
            Ok(execution(price, &maker_bid.data))
        }
        .await;
        Metrics::get().record_execution(strategy, &result);
        result
    }

    /// Probes whether a maker ask is currently fulfillable. Never fails.
    pub async fn probe_ask(&self, maker_ask: &MakerAsk) -> ValidationOutcome {
        self.probe(QuoteType::Ask, &maker_ask.data, maker_ask.min_price)
            .await
    }

    /// Probes whether a maker bid is currently fulfillable. Never fails.
    pub async fn probe_bid(&self, maker_bid: &MakerBid) -> ValidationOutcome {
        self.probe(QuoteType::Bid, &maker_bid.data, maker_bid.max_price)
            .await
    }

    /// Maker side checks only: there is no taker, so neither the taker's
    /// bound nor the final price are checked.
    async fn probe(
        &self,
        quote_type: QuoteType,
        order: &OrderData,
        maker_bound: U256,
    ) -> ValidationOutcome {
        let strategy = match self.strategies.get(order.strategy_id, quote_type) {
            Ok(info) => info.strategy,
            Err(err) => {
                Metrics::get().record_probe("unknown", &err);
                return ValidationOutcome::Invalid(err);
            }
        };
        let result: Result<_, Error> = async {
            let parameter = self.check_maker(strategy, order)?;
            self.quote(strategy, order, parameter, maker_bound).await
        }
        .await;

        match result {
            Ok(_) => {
                Metrics::get().record_valid_probe(strategy);
                ValidationOutcome::Valid
            }
            Err(err) => {
                tracing::debug!(
                    %strategy,
                    collection = ?order.collection,
                    nonce = %order.order_nonce,
                    ?err,
                    "maker order not fulfillable"
                );
                Metrics::get().record_probe(strategy.into(), &err);
                ValidationOutcome::Invalid(err)
            }
        }
    }

    /// Structural checks of the maker order. Returns the decoded strategy
    /// parameter. Does not touch the oracle.
    fn check_maker(&self, strategy: Strategy, order: &OrderData) -> Result<U256, Error> {
        if order.item_ids.len() != 1 || order.amounts != [U256::from(1)] {
            return Err(InvalidOrder::NotSingleItem.into());
        }
        if !strategy.accepts_currency(order.currency, self.wrapped_native) {
            return Err(Error::WrongCurrency(order.currency));
        }
        let parameter = params::decode_uint(&order.additional_parameters)?;
        strategy.check_parameter(parameter)?;
        Ok(parameter)
    }

    /// Reads the floor and computes the maker-bounded price.
    async fn quote(
        &self,
        strategy: Strategy,
        order: &OrderData,
        parameter: U256,
        maker_bound: U256,
    ) -> Result<U256, Error> {
        let floor = self.oracle.floor_price(order.collection).await?;
        let price = strategy.price(floor, parameter, maker_bound)?;
        tracing::debug!(
            %strategy,
            collection = ?order.collection,
            %floor,
            %parameter,
            %price,
            "priced maker order"
        );
        Ok(price)
    }
}

fn ensure_quote_type(strategy: Strategy, quote_type: QuoteType) -> Result<(), Error> {
    if strategy.quote_type() != quote_type {
        return Err(InvalidOrder::WrongQuoteType.into());
    }
    Ok(())
}

/// The taker must name exactly the maker's single item, with an amount of 1.
fn check_taker(order: &OrderData, item_ids: &[U256], amounts: &[U256]) -> Result<(), Error> {
    if item_ids != order.item_ids.as_slice() || amounts != [U256::from(1)] {
        return Err(InvalidOrder::ItemMismatch.into());
    }
    Ok(())
}

fn execution(price: U256, order: &OrderData) -> ExecutionResult {
    ExecutionResult {
        price,
        item_ids: order.item_ids.clone(),
        amounts: order.amounts.clone(),
        // Single item, non partial fills: every execution consumes the order.
        is_nonce_invalidated: true,
    }
}

#[derive(prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "order_validation")]
struct Metrics {
    /// Probe validations by strategy and outcome.
    #[metric(labels("strategy", "result"))]
    probe_outcomes: prometheus::IntCounterVec,
    /// Strict validations by strategy and outcome.
    #[metric(labels("strategy", "result"))]
    execution_outcomes: prometheus::IntCounterVec,
}

impl Metrics {
    fn get() -> &'static Self {
        Metrics::instance(observe::metrics::get_storage_registry()).unwrap()
    }

    fn record_valid_probe(&self, strategy: Strategy) {
        self.probe_outcomes
            .with_label_values(&[strategy.into(), "Valid"])
            .inc();
    }

    fn record_probe(&self, strategy: &str, err: &Error) {
        self.probe_outcomes
            .with_label_values(&[strategy, err.name()])
            .inc();
    }

    fn record_execution(&self, strategy: Strategy, result: &Result<ExecutionResult, Error>) {
        let outcome = match result {
            Ok(_) => "Valid",
            Err(err) => err.name(),
        };
        self.execution_outcomes
            .with_label_values(&[strategy.into(), outcome])
            .inc();
    }
}
