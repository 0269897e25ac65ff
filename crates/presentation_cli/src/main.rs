//! Ride neuron CLI
//!
//! Host for a single ride estimate request: reads invocation parameters from
//! the command line (falling back to the `[neuron]` config section), runs the
//! request and prints the result for the speech layer.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{RideEstimateRequester, RideRequestParams};
use clap::Parser;
use infrastructure::{AppConfig, GeocodingAdapter, RideEstimateAdapter, init_logging};
use secrecy::SecretString;
use tracing::{error, info};

/// Ride neuron CLI
#[derive(Debug, Parser)]
#[command(name = "ride-neuron")]
#[command(author, version, about = "Pickup time and fare estimates for a voice assistant", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Uber server token
    #[arg(long, env = "UBER_API_KEY", hide_env_values = true)]
    uber_api_key: Option<String>,

    /// Yandex geocoder API key
    #[arg(long, env = "YANDEX_API_KEY", hide_env_values = true)]
    yandex_api_key: Option<String>,

    /// Ride tier to report (default: uberX)
    #[arg(long)]
    drive_mode: Option<String>,

    /// Start latitude
    #[arg(long, allow_hyphen_values = true)]
    start_latitude: Option<f64>,

    /// Start longitude
    #[arg(long, allow_hyphen_values = true)]
    start_longitude: Option<f64>,

    /// Start address (takes precedence over coordinates)
    #[arg(long)]
    start_address: Option<String>,

    /// Destination address (enables the fare estimate)
    #[arg(long)]
    end_address: Option<String>,

    /// Print the result message as JSON instead of a sentence
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Invocation parameters given on the command line
    fn params(&self) -> RideRequestParams {
        RideRequestParams {
            uber_api_key: self.uber_api_key.clone().map(SecretString::from),
            yandex_api_key: self.yandex_api_key.clone().map(SecretString::from),
            drive_mode: self.drive_mode.clone(),
            start_latitude: self.start_latitude,
            start_longitude: self.start_longitude,
            start_address: self.start_address.clone(),
            end_address: self.end_address.clone(),
        }
    }
}

/// Log filter for a `-v` count; `None` keeps the configured level
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(level) = log_filter_from_verbosity(cli.verbose) {
        config.logging.level = level.to_string();
    }

    init_logging(&config.logging).context("Failed to initialize logging")?;

    let geocoding = GeocodingAdapter::with_config(&config.geocoding)?;
    let rides = RideEstimateAdapter::with_config(&config.uber)?;
    let requester = RideEstimateRequester::new(Arc::new(geocoding), Arc::new(rides));

    let params = cli.params().with_defaults(config.neuron);

    match requester.execute(params).await {
        Ok(message) => {
            info!(empty = message.is_empty(), "Request completed");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&message)?);
            } else {
                println!("{}", message.to_speech());
            }
            Ok(())
        },
        Err(e) => {
            error!(error = %e, "Ride estimate request failed");
            Err(e.into())
        },
    }
}
