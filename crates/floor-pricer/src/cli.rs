use {
    alloy::primitives::{Address, U256},
    model::QuoteType,
    std::path::PathBuf,
    tracing::level_filters::LevelFilter,
};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Path to the configuration file. This file should be in TOML format.
    /// For an example see `crates/floor-pricer/example.toml`.
    #[clap(long, env)]
    pub config: PathBuf,

    /// The log filter.
    #[clap(
        long,
        env,
        default_value = "warn,floor_pricer=info,order_validation=debug,price_oracle=debug"
    )]
    pub log_filter: String,

    /// At which log level logs should be printed to stderr instead of stdout.
    #[clap(long, env, default_value = "error")]
    pub stderr_threshold: LevelFilter,

    /// Print the collected metrics in the prometheus text format to stderr
    /// once the command finished.
    #[clap(long, env)]
    pub print_metrics: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Checks whether standing maker orders are currently fulfillable.
    Probe {
        /// Which side the maker orders are on.
        #[clap(long)]
        side: QuoteType,

        /// JSON file with an array of maker orders.
        orders: PathBuf,
    },

    /// Prices a matched maker/taker pair and splits the resulting price.
    Execute {
        /// Which side the maker order is on.
        #[clap(long)]
        side: QuoteType,

        /// JSON file with the maker order.
        maker: PathBuf,

        /// JSON file with the taker order.
        taker: PathBuf,
    },

    /// Splits a price into protocol fee, royalty and seller proceeds.
    Split {
        /// Collection the items belong to, used to look up the royalty.
        #[clap(long)]
        collection: Address,

        /// Execution price in the currency's smallest unit.
        #[clap(long)]
        price: U256,

        #[clap(long)]
        protocol_fee_bp: u16,

        #[clap(long, value_delimiter = ',')]
        item_ids: Vec<U256>,
    },
}
