//! The `find` subcommand: drive one session through a single location event.

use clap::Args;

use hackfind_core::{parse_strictness, AppConfig};
use hackfind_geocode::NominatimClient;
use hackfind_search::TavilyClient;
use hackfind_session::{LocationSession, SessionConfig};

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Latitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Filter strictness: lenient, strict, or strictest.
    #[arg(long)]
    pub strictness: Option<String>,

    /// Maximum number of events to return.
    #[arg(long)]
    pub max_results: Option<usize>,
}

pub async fn run(args: FindArgs, config: &AppConfig) -> anyhow::Result<()> {
    let geocoder = NominatimClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocode_base_url,
    )?;
    let searcher = TavilyClient::with_base_url(
        config.tavily_api_key.clone(),
        config.request_timeout_secs,
        &config.search_base_url,
    )?;

    let mut session_config = SessionConfig::from_app_config(config);
    if let Some(strictness) = &args.strictness {
        session_config.strictness = parse_strictness(strictness);
    }
    if let Some(max_results) = args.max_results {
        session_config.max_results = max_results;
    }

    let mut session = LocationSession::new(geocoder, searcher, &session_config);
    let events = session.on_location(args.lat, args.lng).await?;

    if events.is_empty() {
        println!("no events found");
    } else {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
    }

    let ack = session.on_end();
    tracing::debug!(end = ack.end, "session acknowledged end event");
    session.run().await;
    Ok(())
}
