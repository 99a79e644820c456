//! Main entry point for the glicko-calc matchup calculator
//!
//! Reads two competitors' ratings from the command line, runs the Glicko
//! engine and prints the expected outcome and the rating changes for a win
//! or a loss on either side.

use anyhow::Result;
use clap::Parser;
use glicko_calc::config::AppConfig;
use glicko_calc::presentation::{engine_deviation, render_report};
use glicko_calc::rating::GlickoCalculator;
use glicko_calc::RatingPoint;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Glicko matchup calculator
#[derive(Parser)]
#[command(
    name = "glicko-calc",
    version,
    about = "Glicko rating calculator for a single game between two competitors",
    long_about = "Computes the win probability of a hypothetical game and the rating and \
                 deviation each competitor would have after a win or a loss. Deviations \
                 are given and shown on the display scale (see deviation_scale)."
)]
struct Args {
    /// Own rating value
    #[arg(long, value_name = "RATING", allow_hyphen_values = true)]
    own_rating: Option<f64>,

    /// Own deviation, display scale
    #[arg(long, value_name = "DEVIATION", allow_hyphen_values = true)]
    own_deviation: Option<f64>,

    /// Opponent rating value
    #[arg(long, value_name = "RATING", allow_hyphen_values = true)]
    opp_rating: Option<f64>,

    /// Opponent deviation, display scale
    #[arg(long, value_name = "DEVIATION", allow_hyphen_values = true)]
    opp_deviation: Option<f64>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Show the perceptual win chance instead of the raw one
    #[arg(long)]
    perceptual: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without calculating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.perceptual {
        config.display.perceptual_probability = true;
    }

    glicko_calc::config::validate_config(&config)?;
    Ok(config)
}

/// Build a rating point from CLI input, falling back to the configured
/// default for anything omitted
fn read_rating(
    value: Option<f64>,
    display_deviation: Option<f64>,
    default: &RatingPoint,
    config: &AppConfig,
) -> Result<RatingPoint> {
    let deviation = display_deviation
        .map(|d| engine_deviation(d, config.display.deviation_scale))
        .unwrap_or(default.deviation());
    RatingPoint::new(value.unwrap_or(default.value()), deviation)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let calculator = GlickoCalculator::new(config.rating.clone())?;
    let default = calculator.default_rating()?;

    let own = read_rating(args.own_rating, args.own_deviation, &default, config)?;
    let opponent = read_rating(args.opp_rating, args.opp_deviation, &default, config)?;
    debug!(own = %own, opponent = %opponent, "Calculating matchup");

    let report = calculator.matchup(&own, &opponent);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, &config.display));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("{} {}: configuration is valid", config.service.name, glicko_calc::VERSION);
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("Calculation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
