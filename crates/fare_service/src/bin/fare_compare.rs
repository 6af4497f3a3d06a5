//! Command-line fare comparison: geocode two places, route between them,
//! and print the provider/vehicle quote set as JSON.
//!
//! Without the `nominatim` feature the binary runs fully offline against a
//! small fixture of demo places.

use std::process::exit;

use clap::Parser;
use fare_core::estimate::QuoteAggregator;
use fare_core::market::MarketSimulator;
use fare_service::geocoder::Geocoder;
use fare_service::routing::GridRoutePlanner;
use fare_service::service::ComparisonService;

#[derive(Parser)]
#[command(
    name = "fare_compare",
    about = "Compare simulated ride-hailing fares between two places"
)]
struct Cli {
    /// Pickup location (free text)
    pickup: String,
    /// Drop location (free text)
    drop: String,
    /// Hour of day (0-23) the estimate is for
    #[arg(long, default_value_t = 12)]
    hour: u8,
    /// RNG seed for a reproducible market draw
    #[arg(long)]
    seed: Option<u64>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let market = match cli.seed {
        Some(seed) => MarketSimulator::from_seed(seed),
        None => MarketSimulator::from_entropy(),
    };

    let geocoder = build_geocoder()?;
    let mut service = ComparisonService::new(
        geocoder,
        GridRoutePlanner::default(),
        QuoteAggregator::new(market),
    );

    let response = service.compare(&cli.pickup, &cli.drop, cli.hour)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(json)
}

#[cfg(feature = "nominatim")]
fn build_geocoder() -> Result<impl Geocoder, Box<dyn std::error::Error>> {
    Ok(fare_service::geocoder::nominatim::NominatimGeocoder::public()?)
}

/// Offline demo places a few minutes apart, so any pair routes within the
/// default grid extent.
#[cfg(not(feature = "nominatim"))]
fn build_geocoder() -> Result<impl Geocoder, Box<dyn std::error::Error>> {
    use fare_service::geocoder::FixtureGeocoder;
    Ok(FixtureGeocoder::new()
        .with_place("Central Station", 52.5251, 13.3694)
        .with_place("Old Town", 52.5170, 13.4030)
        .with_place("Airport", 52.5447, 13.3500)
        .with_place("Harbor", 52.5070, 13.4470))
}
