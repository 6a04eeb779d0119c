//! The `resolve` subcommand: reverse-geocode a coordinate.

use clap::Args;

use hackfind_core::{AppConfig, Coordinate};
use hackfind_geocode::NominatimClient;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Latitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
}

pub async fn run(args: ResolveArgs, config: &AppConfig) -> anyhow::Result<()> {
    let coord = Coordinate::new(args.lat, args.lng)?;
    let geocoder = NominatimClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocode_base_url,
    )?;
    let place = geocoder.resolve_place(coord).await;
    println!("{}", place.label());
    Ok(())
}
