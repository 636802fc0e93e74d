use {
    crate::{
        cli::{self, Command},
        config::{self, Config},
    },
    alloy::primitives::{Address, Selector, U256},
    anyhow::Context,
    clap::Parser,
    fee::Distribution,
    model::{ExecutionResult, MakerAsk, MakerBid, QuoteType, TakerAsk, TakerBid},
    number::serialization::HexOrDecimalU256,
    order_validation::{ValidationOutcome, interface::ProbeResponse},
    serde::{Serialize, de::DeserializeOwned},
    serde_with::serde_as,
    std::path::Path,
};

pub async fn start(args: impl Iterator<Item = String>) -> anyhow::Result<()> {
    let args = cli::Args::parse_from(args);
    observe::tracing::initialize(&args.log_filter, args.stderr_threshold);
    observe::metrics::setup_registry(Some("floor_pricer".into()), None);
    tracing::info!("running floor pricer with {args:#?}");
    let config = config::load(&args.config).await;
    let result = run(&config, args.command).await;
    if args.print_metrics {
        eprintln!("{}", observe::metrics::encode(observe::metrics::get_registry()));
    }
    result
}

/// Executes one command and prints its JSON result to stdout.
pub async fn run(config: &Config, command: Command) -> anyhow::Result<()> {
    let output = match command {
        Command::Probe { side, orders } => {
            let orders = read(&orders).await?;
            serde_json::to_string_pretty(&probe(config, side, &orders).await?)?
        }
        Command::Execute { side, maker, taker } => {
            let (maker, taker) = (read(&maker).await?, read(&taker).await?);
            serde_json::to_string_pretty(&execute(config, side, &maker, &taker).await?)?
        }
        Command::Split {
            collection,
            price,
            protocol_fee_bp,
            item_ids,
        } => serde_json::to_string_pretty(
            &split(config, collection, &item_ids, price, protocol_fee_bp).await?,
        )?,
    };
    println!("{output}");
    Ok(())
}

async fn read(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {path:?}"))
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> anyhow::Result<T> {
    serde_json::from_str(json).with_context(|| format!("parsing {what}"))
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeReport {
    signer: Address,
    #[serde_as(as = "HexOrDecimalU256")]
    order_nonce: U256,
    #[serde(flatten)]
    response: ProbeResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ProbeReport {
    fn new(signer: Address, order_nonce: U256, outcome: ValidationOutcome) -> Self {
        Self {
            signer,
            order_nonce,
            response: ProbeResponse::from(&outcome),
            reason: match outcome {
                ValidationOutcome::Valid => None,
                ValidationOutcome::Invalid(err) => Some(err.to_string()),
            },
        }
    }
}

/// Probes a JSON array of maker orders. Invalid orders are reported, not
/// failed on.
async fn probe(config: &Config, side: QuoteType, orders: &str) -> anyhow::Result<Vec<ProbeReport>> {
    let mut reports = Vec::new();
    match side {
        QuoteType::Ask => {
            for ask in parse::<Vec<MakerAsk>>(orders, "maker asks")? {
                let outcome = config.validator.probe_ask(&ask).await;
                reports.push(ProbeReport::new(ask.data.signer, ask.data.order_nonce, outcome));
            }
        }
        QuoteType::Bid => {
            for bid in parse::<Vec<MakerBid>>(orders, "maker bids")? {
                let outcome = config.validator.probe_bid(&bid).await;
                reports.push(ProbeReport::new(bid.data.signer, bid.data.order_nonce, outcome));
            }
        }
    }
    let valid = reports.iter().filter(|report| report.response.is_valid).count();
    tracing::info!(total = reports.len(), valid, "probed maker orders");
    Ok(reports)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Execution {
    #[serde(flatten)]
    result: ExecutionResult,
    distribution: Distribution,
}

/// Strictly prices a matched pair and splits the price.
async fn execute(
    config: &Config,
    side: QuoteType,
    maker: &str,
    taker: &str,
) -> anyhow::Result<Execution> {
    let (data, result) = match side {
        QuoteType::Ask => {
            let maker: MakerAsk = parse(maker, "maker ask")?;
            let taker: TakerBid = parse(taker, "taker bid")?;
            let result = config.validator.execute_ask(&taker, &maker).await;
            (maker.data, result)
        }
        QuoteType::Bid => {
            let maker: MakerBid = parse(maker, "maker bid")?;
            let taker: TakerAsk = parse(taker, "taker ask")?;
            let result = config.validator.execute_bid(&taker, &maker).await;
            (maker.data, result)
        }
    };
    let result = result.map_err(|err| {
        let selector = err.selector();
        anyhow::Error::new(err).context(format!("order rejected with {selector}"))
    })?;

    let info = config.validator.strategies().get(data.strategy_id, side)?;
    let distribution = split(
        config,
        data.collection,
        &result.item_ids,
        result.price,
        info.protocol_fee_bp,
    )
    .await?;
    Ok(Execution {
        result,
        distribution,
    })
}

async fn split(
    config: &Config,
    collection: Address,
    item_ids: &[U256],
    price: U256,
    protocol_fee_bp: u16,
) -> anyhow::Result<Distribution> {
    let royalty = fee::royalty::resolve(&config.royalties, collection, item_ids).await?;
    config
        .fees
        .distribute(price, protocol_fee_bp, royalty)
        .map_err(|err| {
            let selector = err.selector().unwrap_or(Selector::ZERO);
            anyhow::Error::new(err).context(format!("fee split rejected with {selector}"))
        })
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    const APE: &str = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const ONE_ETH: &str = "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000";

    fn config() -> Config {
        config::parse(include_str!("../example.toml")).unwrap()
    }

    fn maker(strategy_id: u16, collection: &str, price_field: &str, price: &str) -> String {
        let mut order = json!({
            "signer": "0x0000000000000000000000000000000000000a11",
            "collection": collection,
            "currency": WETH,
            "strategyId": strategy_id,
            "assetKind": "erc721",
            "orderNonce": "1",
            "itemIds": ["42"],
            "amounts": ["1"],
            "additionalParameters": ONE_ETH,
        });
        order[price_field] = json!(price);
        order.to_string()
    }

    #[tokio::test]
    async fn executes_premium_ask() {
        let maker = maker(1, APE, "minPrice", "9000000000000000000");
        let taker = json!({
            "recipient": "0x0000000000000000000000000000000000000b0b",
            "maxPrice": "11000000000000000000",
            "itemIds": ["42"],
            "amounts": ["1"],
        })
        .to_string();

        let execution = execute(&config(), QuoteType::Ask, &maker, &taker)
            .await
            .unwrap();
        assert_eq!(execution.result.price, U256::from(11_000_000_000_000_000_000u128));
        assert_eq!(
            execution.distribution.protocol_fee,
            U256::from(220_000_000_000_000_000u128)
        );
        assert_eq!(
            execution.distribution.royalty_fee,
            U256::from(330_000_000_000_000_000u128)
        );
        assert_eq!(execution.distribution.total(), execution.result.price);

        let taker = taker.replace("11000000000000000000", "10900000000000000000");
        let err = execute(&config(), QuoteType::Ask, &maker, &taker)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<order_validation::Error>(),
            Some(order_validation::Error::BidTooLow { .. })
        ));
    }

    #[tokio::test]
    async fn probes_in_bulk() {
        let orders = format!(
            "[{}, {}]",
            maker(3, APE, "maxPrice", "10000000000000000000"),
            maker(3, WETH, "maxPrice", "10000000000000000000"),
        );
        let reports = probe(&config(), QuoteType::Bid, &orders).await.unwrap();

        assert!(reports[0].response.is_valid);
        assert!(reports[0].reason.is_none());
        assert!(!reports[1].response.is_valid);
        assert!(reports[1].reason.is_some());

        let serialized = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(serialized["isValid"], json!(true));
        assert_eq!(serialized["errorSelector"], json!("0x00000000"));
        assert_eq!(serialized["orderNonce"], json!("1"));
    }

    #[tokio::test]
    async fn splits_with_registered_royalty() {
        let collection = APE.parse().unwrap();
        let distribution = split(&config(), collection, &[U256::from(1)], U256::from(100), 200)
            .await
            .unwrap();
        assert_eq!(distribution.protocol_fee, U256::from(2));
        assert_eq!(distribution.royalty_fee, U256::from(3));
        assert_eq!(distribution.seller_proceeds, U256::from(95));

        let distribution = split(&config(), Address::ZERO, &[U256::from(1)], U256::from(100), 200)
            .await
            .unwrap();
        assert_eq!(distribution.creator, None);
        assert_eq!(distribution.seller_proceeds, U256::from(98));
    }
}
