//! Price command implementation

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use gbm_mc_rs::{
    path_sample, price_asian, price_european, Averaging, GbmParams, OptionType, Seed,
};
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::export::{write_paths_csv, MAX_EXPORTED_PATHS};

/// Contract style being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    European,
    Asian,
}

/// Fully resolved pricing request (flags merged over config defaults).
#[derive(Debug, Clone)]
pub struct PriceRequest {
    pub option_type: OptionType,
    pub style: Style,
    pub params: GbmParams,
    pub strike: f64,
    pub n_sim: usize,
    pub n_steps: usize,
    pub seed: Seed,
    pub paths_csv: Option<PathBuf>,
}

/// Run the price command
pub fn run(request: &PriceRequest) -> Result<f64> {
    if request.n_sim == 0 {
        return Err(CliError::InvalidArgument("--n_sim must be positive".to_string()));
    }
    if request.style == Style::European && request.paths_csv.is_some() {
        return Err(CliError::InvalidArgument(
            "--paths-csv is only available with --style asian".to_string(),
        ));
    }

    info!("Starting pricing...");
    info!("  Option: {} ({:?})", request.option_type, request.style);
    info!(
        "  S0={} K={} r={} sigma={} T={}",
        request.params.spot,
        request.strike,
        request.params.rate,
        request.params.volatility,
        request.params.maturity
    );
    info!("  Monte Carlo paths: {}", request.n_sim);
    info!("  Seed: {:?}", request.seed);

    let started = Instant::now();
    let mut rng = request.seed.rng();

    let price = match request.style {
        Style::European => price_european(
            request.option_type,
            &request.params,
            request.strike,
            request.n_sim,
            &mut rng,
        ),
        Style::Asian => {
            info!("  Steps per path: {}", request.n_steps);
            let paths = path_sample(&request.params, request.n_steps, request.n_sim, &mut rng)?;
            debug!("Sampled {} x {} path matrix", paths.n_sim(), paths.n_steps() + 1);

            if let Some(file) = &request.paths_csv {
                let writer = BufWriter::new(File::create(file)?);
                write_paths_csv(writer, &paths, request.params.maturity, MAX_EXPORTED_PATHS)?;
                info!("Wrote first {} paths to {}", MAX_EXPORTED_PATHS.min(paths.n_sim()), file.display());
            }

            price_asian(
                &paths,
                request.option_type,
                request.strike,
                request.params.rate,
                request.params.maturity,
                Averaging::ExcludeInitial,
            )
        }
    };

    debug!("Pricing took {:?}", started.elapsed());
    info!("Pricing complete");
    Ok(price)
}

/// The line printed to stdout.
pub fn format_price_line(option_type: OptionType, style: Style, price: f64) -> String {
    let label = option_type.to_string().to_uppercase();
    match style {
        Style::European => format!("Monte Carlo {} option price: {:.4}", label, price),
        Style::Asian => format!("Monte Carlo ASIAN {} option price: {:.4}", label, price),
    }
}
