//! Location pipeline orchestration.

use hackfind_core::{Coordinate, EventRecord};
use hackfind_geocode::NominatimClient;
use hackfind_search::{extract_event, filter_results, FilterConfig, QueryTerms, SearchError, TavilyClient};

/// How many raw candidates to request per accepted result, giving the filter
/// room to reject generic and out-of-scope hits.
const CANDIDATE_FACTOR: usize = 3;

/// Run the full lookup pipeline for one coordinate.
///
/// 1. Resolve the coordinate to a place description (degrades to a
///    coordinate label on geocoder failure).
/// 2. Build the provider query from the place components.
/// 3. Search, requesting extra candidates for the filter to chew through.
/// 4. Filter hits against the place's location terms.
/// 5. Extract a normalized [`EventRecord`] per accepted hit.
///
/// Collaborator failures (geocoder, search provider, missing credential) are
/// logged and degrade the output; this function never fails. Callers always
/// get a list, possibly empty.
pub async fn run_location_pipeline(
    geocoder: &NominatimClient,
    searcher: &TavilyClient,
    query_terms: &QueryTerms,
    filter: &FilterConfig,
    coord: Coordinate,
) -> Vec<EventRecord> {
    let place = geocoder.resolve_place(coord).await;
    let query = query_terms.build(&place);
    tracing::debug!(place = %place.label(), query = %query, "searching for events");

    let candidates = filter.max_results * CANDIDATE_FACTOR;
    let raw = match searcher.search(&query, candidates).await {
        Ok(results) => results,
        Err(e @ SearchError::MissingApiKey) => {
            tracing::error!(error = %e, "search credential missing; returning no events");
            return Vec::new();
        }
        Err(e) => {
            tracing::error!(error = %e, "search provider call failed; returning no events");
            return Vec::new();
        }
    };

    let total = raw.len();
    let accepted = filter_results(raw, &place.location_terms(), filter);
    tracing::info!(
        place = %place.label(),
        candidates = total,
        accepted = accepted.len(),
        "filtered search results"
    );

    accepted
        .iter()
        .map(|result| extract_event(result, coord))
        .collect()
}
