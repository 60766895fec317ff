//! `beats` entry point.
//!
//! Prints the current instant, or one given on the command line, in
//! Internet Time. Display settings come from a TOML config file and can be
//! overridden by flags.

mod report;

use anyhow::{Context, Result};
use beat_common::{BeatConfig, OutputFormat, Precision, Timestamp};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::report::BeatReport;

/// Environment variable naming a config file.
const CONFIG_ENV: &str = "BEAT_CONFIG_PATH";

/// Config file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "config/beats.toml";

/// `beats` command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "beats",
    about = "Print Internet Time (.beat) for now or a given instant",
    version,
    long_about = None
)]
struct Args {
    /// Instant to convert: milliseconds since the Unix epoch or RFC 3339
    /// (defaults to now).
    #[arg(long, short = 't', value_name = "MILLIS|RFC3339", allow_hyphen_values = true)]
    timestamp: Option<Timestamp>,

    /// Fractional beat digits (0 = whole beats, 2 = centibeats).
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    precision: Option<i64>,

    /// Prefix the value with '@'.
    #[arg(long, short = 'a')]
    at_sign: bool,

    /// Output format.
    #[arg(long, short = 'f', value_enum)]
    format: Option<FormatArg>,

    /// Path to a configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,
}

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting beats");

    let mut config = load_config(&args)?;
    apply_overrides(&mut config, &args)?;

    if args.print_config {
        print!("{}", config.to_toml().context("Failed to serialize config")?);
        return Ok(());
    }

    let timestamp = args.timestamp.unwrap_or_else(Timestamp::now);
    let report = BeatReport::new(timestamp, &config.display);
    info!(
        timestamp_ms = report.timestamp_ms,
        beats = %report.beats,
        "Converted instant"
    );

    let output = report
        .render(config.display.format)
        .context("Failed to render output")?;
    println!("{output}");
    Ok(())
}

/// Initialize logging with the specified log level.
///
/// Logs go to stderr so stdout carries only the converted value.
fn init_logging(level: &str) {
    let filter = format!("beats={level},beat_time={level},beat_common={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `BEAT_CONFIG_PATH` environment variable
/// 3. `config/beats.toml` (working directory)
/// 4. Built-in defaults
fn load_config(args: &Args) -> Result<BeatConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return BeatConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from {CONFIG_ENV}");
            return BeatConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {CONFIG_ENV}={env_path}"));
        }
        warn!(
            path = %env_path,
            "{CONFIG_ENV} set but file does not exist, checking other locations"
        );
    }

    let local_path = PathBuf::from(LOCAL_CONFIG);
    if local_path.exists() {
        info!(?local_path, "Loading config from local path");
        return BeatConfig::from_file(&local_path)
            .with_context(|| format!("Failed to load config from {}", local_path.display()));
    }

    debug!("No config file found, using built-in defaults");
    Ok(BeatConfig::default())
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_overrides(config: &mut BeatConfig, args: &Args) -> Result<()> {
    if let Some(digits) = args.precision {
        config.display.precision =
            Precision::try_from(digits).context("Invalid --precision")?;
    }
    if args.at_sign {
        config.display.at_sign = true;
    }
    if let Some(format) = args.format {
        config.display.format = format.into();
    }
    Ok(())
}
