//! Mapping accepted search hits to normalized event records.

use hackfind_core::{Coordinate, EventRecord, NO_DESCRIPTION, UNNAMED_EVENT};

use crate::filter::clean_title;
use crate::types::RawResult;

/// Builds an [`EventRecord`] from an accepted search hit.
///
/// The title is cleaned of site-name decoration; empty or absent fields fall
/// back to fixed placeholders. The location label is derived from the
/// original coordinate, not from the provider.
#[must_use]
pub fn extract_event(result: &RawResult, coord: Coordinate) -> EventRecord {
    let name = result
        .title
        .as_deref()
        .map(clean_title)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNNAMED_EVENT.to_owned());

    let description = result
        .snippet
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_owned());

    EventRecord {
        name,
        description,
        location: Some(format!("Near {:.2}, {:.2}", coord.lat, coord.lng)),
        date: result.published_date.clone(),
    }
}
