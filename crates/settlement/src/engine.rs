use {
    crate::{
        error::Error,
        nonces::NonceRegistry,
        transfer::{AssetTransferring, ItemTransfer, Transfer, Transfers},
    },
    alloy::primitives::{Address, Bytes, U256},
    fee::{Distribution, FeeDistributor, RoyaltyResolving},
    model::{ExecutionResult, MakerAsk, MakerBid, OrderData, QuoteType, TakerAsk, TakerBid},
    order_validation::OrderValidator,
    std::sync::Arc,
};

/// Checks that a maker order was signed by its signer.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait SignatureVerifying: Send + Sync {
    async fn verify(&self, order: &OrderData, signature: &Bytes) -> anyhow::Result<()>;
}

/// Outcome of a successful settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub price: U256,
    pub distribution: Distribution,
    pub transfers: Transfers,
}

/// Executes matched maker/taker pairs.
pub struct Settlement {
    validator: OrderValidator,
    fees: FeeDistributor,
    protocol_fee_recipient: Address,
    royalties: Arc<dyn RoyaltyResolving>,
    signatures: Arc<dyn SignatureVerifying>,
    nonces: Arc<dyn NonceRegistry>,
    assets: Arc<dyn AssetTransferring>,
}

/// Who pays and who delivers in a settlement.
struct Parties {
    buyer: Address,
    item_recipient: Address,
    seller: Address,
    proceeds_recipient: Address,
}

impl Settlement {
    pub fn new(
        validator: OrderValidator,
        fees: FeeDistributor,
        protocol_fee_recipient: Address,
        royalties: Arc<dyn RoyaltyResolving>,
        signatures: Arc<dyn SignatureVerifying>,
        nonces: Arc<dyn NonceRegistry>,
        assets: Arc<dyn AssetTransferring>,
    ) -> Self {
        Self {
            validator,
            fees,
            protocol_fee_recipient,
            royalties,
            signatures,
            nonces,
            assets,
        }
    }

    /// `taker` buys the item a maker ask offers.
    pub async fn execute_taker_bid(
        &self,
        taker: Address,
        taker_bid: &TakerBid,
        maker_ask: &MakerAsk,
        maker_signature: &Bytes,
    ) -> Result<Executed, Error> {
        let result: Result<_, Error> = async {
            let order = &maker_ask.data;
            self.check_maker(order, maker_signature).await?;
            let info = *self
                .validator
                .strategies()
                .get(order.strategy_id, QuoteType::Ask)?;
            let execution = self
                .validator
                .execute_ask_with(info.strategy, taker_bid, maker_ask)
                .await?;
            let parties = Parties {
                buyer: taker,
                item_recipient: or(taker_bid.recipient, taker),
                seller: order.signer,
                proceeds_recipient: order.signer,
            };
            self.settle(order, info.protocol_fee_bp, execution, parties)
                .await
        }
        .await;
        Metrics::get().record(QuoteType::Ask, &result);
        result
    }

    /// `taker` sells the item a maker bid asks for.
    pub async fn execute_taker_ask(
        &self,
        taker: Address,
        taker_ask: &TakerAsk,
        maker_bid: &MakerBid,
        maker_signature: &Bytes,
    ) -> Result<Executed, Error> {
        let result: Result<_, Error> = async {
            let order = &maker_bid.data;
            self.check_maker(order, maker_signature).await?;
            let info = *self
                .validator
                .strategies()
                .get(order.strategy_id, QuoteType::Bid)?;
            let execution = self
                .validator
                .execute_bid_with(info.strategy, taker_ask, maker_bid)
                .await?;
            let parties = Parties {
                buyer: order.signer,
                item_recipient: order.signer,
                seller: taker,
                proceeds_recipient: or(taker_ask.recipient, taker),
            };
            self.settle(order, info.protocol_fee_bp, execution, parties)
                .await
        }
        .await;
        Metrics::get().record(QuoteType::Bid, &result);
        result
    }

    async fn check_maker(&self, order: &OrderData, signature: &Bytes) -> Result<(), Error> {
        self.signatures
            .verify(order, signature)
            .await
            .map_err(Error::InvalidSignature)?;
        if self.nonces.is_invalidated(order.signer, order.order_nonce) {
            return Err(Error::NonceInvalidated {
                maker: order.signer,
                nonce: order.order_nonce,
            });
        }
        Ok(())
    }

    async fn settle(
        &self,
        order: &OrderData,
        protocol_fee_bp: u16,
        execution: ExecutionResult,
        parties: Parties,
    ) -> Result<Executed, Error> {
        let royalty =
            fee::royalty::resolve(self.royalties.as_ref(), order.collection, &execution.item_ids)
                .await?;
        let distribution = self
            .fees
            .distribute(execution.price, protocol_fee_bp, royalty)?;

        let payment = |to, amount| Transfer {
            currency: order.currency,
            from: parties.buyer,
            to,
            amount,
        };
        let payments = [
            payment(self.protocol_fee_recipient, distribution.protocol_fee),
            payment(
                distribution.creator.unwrap_or_default(),
                distribution.royalty_fee,
            ),
            payment(parties.proceeds_recipient, distribution.seller_proceeds),
        ]
        .into_iter()
        .filter(|payment| !payment.amount.is_zero())
        .collect();
        let transfers = Transfers {
            payments,
            items: ItemTransfer {
                collection: order.collection,
                asset_kind: order.asset_kind,
                from: parties.seller,
                to: parties.item_recipient,
                item_ids: execution.item_ids,
                amounts: execution.amounts,
            },
        };

        let (maker, nonce) = (order.signer, order.order_nonce);
        if execution.is_nonce_invalidated && !self.nonces.invalidate(maker, nonce) {
            return Err(Error::NonceInvalidated { maker, nonce });
        }
        if let Err(err) = self.assets.transfer(&transfers).await {
            if execution.is_nonce_invalidated {
                self.nonces.restore(maker, nonce);
            }
            return Err(Error::Transfer(err));
        }

        tracing::info!(
            ?maker,
            %nonce,
            collection = ?order.collection,
            price = %execution.price,
            "settled order"
        );
        Ok(Executed {
            price: execution.price,
            distribution,
            transfers,
        })
    }
}

/// `recipient`, unless it is unset.
fn or(recipient: Address, fallback: Address) -> Address {
    if recipient.is_zero() {
        fallback
    } else {
        recipient
    }
}

#[derive(prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "settlement")]
struct Metrics {
    /// Settlement attempts by maker side and outcome.
    #[metric(labels("side", "result"))]
    settlements: prometheus::IntCounterVec,
}

impl Metrics {
    fn get() -> &'static Self {
        Metrics::instance(observe::metrics::get_storage_registry()).unwrap()
    }

    fn record(&self, side: QuoteType, result: &Result<Executed, Error>) {
        let outcome = match result {
            Ok(_) => "Success",
            Err(err) => err.kind(),
        };
        self.settlements
            .with_label_values(&[side.into(), outcome])
            .inc();
    }
}
