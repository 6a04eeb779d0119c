//! The normalized event record returned to session callers.

use serde::{Deserialize, Serialize};

/// Placeholder name when a search result has no usable title.
pub const UNNAMED_EVENT: &str = "Unnamed Hackathon";

/// Placeholder description when a search result has no snippet.
pub const NO_DESCRIPTION: &str = "No description available";

/// A hackathon (or similar tech event) extracted from an accepted search
/// result. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub description: String,
    /// Coordinate-derived label (`"Near {lat}, {lng}"`), not provider-derived.
    #[serde(default)]
    pub location: Option<String>,
    /// The provider's published date, passed through unmodified.
    #[serde(default)]
    pub date: Option<String>,
}
