//! Deterministic search-query construction.

use chrono::Datelike;
use hackfind_core::PlaceDescription;

/// Term configuration for query construction.
///
/// `build` is a pure function of this configuration and the place
/// description; the current year is injected as plain data so query text is
/// deterministic in tests.
#[derive(Debug, Clone)]
pub struct QueryTerms {
    /// Event-type synonyms, OR-ed together as quoted exact matches.
    pub event_terms: Vec<String>,
    /// Adds `("registration open" OR "tickets available")`.
    pub require_registration: bool,
    /// Adds a current-or-next-year / "upcoming" / "scheduled" clause.
    pub require_recency: bool,
    /// Appends negative terms excluding past or archived event pages.
    pub exclude_past: bool,
    pub current_year: i32,
}

impl QueryTerms {
    /// Default term set for the given year.
    #[must_use]
    pub fn for_year(current_year: i32) -> Self {
        Self {
            event_terms: [
                "hackathon",
                "tech event",
                "coding competition",
                "developer conference",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            require_registration: true,
            require_recency: true,
            exclude_past: true,
            current_year,
        }
    }

    /// Default term set for the current calendar year.
    #[must_use]
    pub fn current() -> Self {
        Self::for_year(chrono::Utc::now().year())
    }

    /// Builds the provider query string.
    ///
    /// Every non-empty place component is embedded as a quoted exact-match
    /// term.
    #[must_use]
    pub fn build(&self, place: &PlaceDescription) -> String {
        let events = quoted_disjunction(&self.event_terms);
        let locations = quoted_disjunction(place.components());

        let mut query = format!("({events}) AND ({locations})");

        if self.require_recency {
            let next_year = self.current_year + 1;
            query.push_str(&format!(
                " AND ({} OR {} OR \"upcoming\" OR \"scheduled\")",
                self.current_year, next_year
            ));
        }
        if self.require_registration {
            query.push_str(" AND (\"registration open\" OR \"tickets available\")");
        }
        if self.exclude_past {
            query.push_str(" -\"past events\" -\"archived\"");
        }

        query
    }
}

fn quoted_disjunction(terms: &[String]) -> String {
    terms
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(" OR ")
}
