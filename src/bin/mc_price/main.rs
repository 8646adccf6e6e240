//! mc-price - Monte Carlo option prices from the command line
//!
//! ```text
//! mc-price --option call --S0 100 --K 100 --seed 42
//! mc-price --option put --style asian --n_steps 50 --paths-csv paths.csv
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, or `-v` for debug); stdout carries only
//! the price line.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gbm_mc_rs::{GbmParams, OptionType, Seed};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod export;
mod price;

use config::CliConfig;
use error::Result;
use price::{PriceRequest, Style};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OptionArg {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    European,
    Asian,
}

/// Monte Carlo Option Pricing
#[derive(Parser)]
#[command(name = "mc-price")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Option type
    #[arg(long, value_enum)]
    option: OptionArg,

    /// Contract style
    #[arg(long, value_enum, default_value = "european")]
    style: StyleArg,

    /// Initial stock price
    #[arg(long = "S0")]
    s0: Option<f64>,

    /// Strike price
    #[arg(long = "K")]
    k: Option<f64>,

    /// Risk-free rate
    #[arg(long = "r", allow_negative_numbers = true)]
    r: Option<f64>,

    /// Volatility
    #[arg(long)]
    sigma: Option<f64>,

    /// Time to maturity in years
    #[arg(long = "T")]
    t: Option<f64>,

    /// Number of simulations
    #[arg(long = "n_sim")]
    n_sim: Option<usize>,

    /// Time steps per path (asian only)
    #[arg(long = "n_steps")]
    n_steps: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Write the time grid and first paths as CSV (asian only)
    #[arg(long = "paths-csv")]
    paths_csv: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "mc_price.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Merge flags over the config file defaults.
    fn into_request(self, config: CliConfig) -> PriceRequest {
        let d = config.defaults;
        PriceRequest {
            option_type: match self.option {
                OptionArg::Call => OptionType::Call,
                OptionArg::Put => OptionType::Put,
            },
            style: match self.style {
                StyleArg::European => Style::European,
                StyleArg::Asian => Style::Asian,
            },
            params: GbmParams::new(
                self.s0.unwrap_or(d.spot),
                self.r.unwrap_or(d.rate),
                self.sigma.unwrap_or(d.sigma),
                self.t.unwrap_or(d.maturity),
            ),
            strike: self.k.unwrap_or(d.strike),
            n_sim: self.n_sim.unwrap_or(d.n_sim),
            n_steps: self.n_steps.unwrap_or(d.n_steps),
            seed: Seed::from(self.seed.or(d.seed)),
            paths_csv: self.paths_csv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = CliConfig::from_file(&cli.config)?;
    info!("Configuration loaded from {}", cli.config.display());

    let request = cli.into_request(config);
    let price = price::run(&request)?;

    println!(
        "{}",
        price::format_price_line(request.option_type, request.style, price)
    );
    Ok(())
}
