//! PAM capacity CLI
//!
//! Evaluates MI and BICM GMI for one constellation at one SNR and prints
//! `MI=<value>, GMI=<value>`. Defaults reproduce the reference link:
//! 4-PAM {-3, -1, 3, 1}, uniform prior, 10 dB.
//!
//! # Examples
//!
//! - `pam_capacity` - reference link
//! - `pam_capacity --snr-db 3 --order 8 --labeling natural`
//! - `pam_capacity --amplitudes=-3,-1,1,3 --prior 0.1,0.4,0.4,0.1`
//! - `pam_capacity --monte-carlo 100000 --seed 7 -vv`

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pam_capacity::link::DEFAULT_SNR_DB;
use pam_capacity::{
    evaluate, CapacityResult, Labeling, LinkParams, MonteCarloEstimator, PamConstellation,
};

/// MI / BICM GMI of PAM over AWGN
#[derive(Parser, Debug)]
#[command(name = "pam_capacity")]
#[command(version)]
#[command(about = "Mutual information and BICM GMI of a PAM constellation over AWGN")]
struct Cli {
    /// Signal-to-noise ratio Es/s² in dB
    #[arg(long, default_value_t = DEFAULT_SNR_DB, allow_hyphen_values = true)]
    snr_db: f64,

    /// Amplitudes in label order, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "order")]
    amplitudes: Option<Vec<f64>>,

    /// Symbol prior aligned with the amplitudes (default: uniform)
    #[arg(long, value_delimiter = ',')]
    prior: Option<Vec<f64>>,

    /// Build an equally spaced M-PAM preset instead of explicit amplitudes
    #[arg(long)]
    order: Option<usize>,

    /// Bit labeling for --order presets (natural or gray)
    #[arg(long, default_value_t = Labeling::Gray)]
    labeling: Labeling,

    /// Also print sampled estimates from this many draws
    #[arg(long)]
    monte_carlo: Option<usize>,

    /// Seed for --monte-carlo
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_constellation(cli: &Cli) -> CapacityResult<PamConstellation> {
    let amplitudes = match (&cli.amplitudes, cli.order) {
        (Some(amplitudes), _) => amplitudes.clone(),
        (None, Some(order)) => {
            PamConstellation::with_labeling(order, cli.labeling)?.amplitudes().to_vec()
        }
        (None, None) => PamConstellation::default().amplitudes().to_vec(),
    };

    match &cli.prior {
        Some(prior) => PamConstellation::new(amplitudes, prior.clone()),
        None => PamConstellation::uniform(amplitudes),
    }
}

fn run(cli: &Cli) -> CapacityResult<()> {
    let pam = build_constellation(cli)?;
    let params = LinkParams::from_constellation(&pam, cli.snr_db);
    let report = evaluate(&params)?;

    println!("MI={:.6}, GMI={:.6}", report.mi, report.gmi);

    if let Some(samples) = cli.monte_carlo {
        let estimator = MonteCarloEstimator::new(samples, cli.seed)?;
        let mi = estimator.estimate_mi(&pam, report.noise_scale)?;
        let gmi = estimator.estimate_gmi(&pam, report.noise_scale)?;
        println!("MI_MC={:.6}, GMI_MC={:.6}", mi, gmi);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        tracing::error!("evaluation failed: {}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
