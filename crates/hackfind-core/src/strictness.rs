//! Filter strictness: how many independent heuristic signals a search result
//! must satisfy before it is treated as a genuine event listing.

/// Strictness tiers for result filtering.
///
/// - `Lenient`: one location-term match, no venue or recency signals.
/// - `Strict`: two location-term matches plus an explicit venue marker.
/// - `Strictest`: `Strict` plus recency and open-registration signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    Lenient,
    Strict,
    Strictest,
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Lenient => write!(f, "lenient"),
            Strictness::Strict => write!(f, "strict"),
            Strictness::Strictest => write!(f, "strictest"),
        }
    }
}

/// Parse a string into a `Strictness` tier.
///
/// Unrecognized values default to `Strictness::Strict`.
#[must_use]
pub fn parse_strictness(s: &str) -> Strictness {
    match s.to_ascii_lowercase().as_str() {
        "lenient" => Strictness::Lenient,
        "strictest" => Strictness::Strictest,
        _ => Strictness::Strict,
    }
}
