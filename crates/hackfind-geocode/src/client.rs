//! HTTP client for the Nominatim reverse-geocoding endpoint.
//!
//! Wraps `reqwest` with typed error handling and a degrading
//! [`NominatimClient::resolve_place`] wrapper that never fails past the
//! crate boundary.

use std::time::Duration;

use reqwest::{Client, Url};

use hackfind_core::{Coordinate, PlaceDescription};

use crate::error::GeocodeError;
use crate::types::{Address, ReverseResponse};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// City-granularity zoom for reverse lookups.
const REVERSE_ZOOM: &str = "10";

/// Client for the Nominatim reverse-geocoding API.
///
/// Use [`NominatimClient::new`] for production or
/// [`NominatimClient::with_base_url`] to point at a mock server in tests.
pub struct NominatimClient {
    client: Client,
    reverse_url: Url,
}

impl NominatimClient {
    /// Creates a new client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // join resolves to `<base>/reverse` rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let reverse_url = Url::parse(&normalised)
            .and_then(|base| base.join("reverse"))
            .map_err(|e| GeocodeError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            reverse_url,
        })
    }

    /// Reverse-geocodes a coordinate into a structured [`Address`].
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON.
    pub async fn reverse(&self, coord: Coordinate) -> Result<Address, GeocodeError> {
        let url = self.reverse_request_url(coord);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse(lat={}, lon={})", coord.lat, coord.lng),
                source: e,
            })?;

        Ok(parsed.address.unwrap_or_default())
    }

    /// Resolves a coordinate to a place description, degrading gracefully.
    ///
    /// On any failure (network, non-2xx, malformed body) or an empty address,
    /// logs the degradation and returns the coordinate-label form. Never
    /// returns an error.
    pub async fn resolve_place(&self, coord: Coordinate) -> PlaceDescription {
        match self.reverse(coord).await {
            Ok(address) => {
                let place = address.to_place();
                if place.is_empty() {
                    tracing::warn!(
                        lat = coord.lat,
                        lng = coord.lng,
                        "reverse geocoding returned no address parts; using coordinate label"
                    );
                    PlaceDescription::from_coordinate(coord)
                } else {
                    place
                }
            }
            Err(e) => {
                tracing::warn!(
                    lat = coord.lat,
                    lng = coord.lng,
                    error = %e,
                    "reverse geocoding failed; using coordinate label"
                );
                PlaceDescription::from_coordinate(coord)
            }
        }
    }

    /// Builds the full `reverse` request URL with percent-encoded query
    /// parameters.
    fn reverse_request_url(&self, coord: Coordinate) -> Url {
        let mut url = self.reverse_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", "json");
            pairs.append_pair("lat", &coord.lat.to_string());
            pairs.append_pair("lon", &coord.lng.to_string());
            pairs.append_pair("zoom", REVERSE_ZOOM);
        }
        url
    }
}
