//! Heuristic acceptance rules for raw search hits.
//!
//! A hit is accepted only when it looks like a genuine, specific, upcoming
//! event rather than a generic listing page. All predicates operate on
//! lowercased text; absent fields are treated as empty strings. Which
//! predicates apply depends on the configured [`Strictness`] tier.

use hackfind_core::Strictness;

use crate::types::RawResult;

/// Titles containing any of these phrases look like aggregator index pages,
/// not specific events.
const GENERIC_TITLE_PHRASES: &[&str] = &[
    "upcoming hackathons",
    "hackathon list",
    "events near",
    "tech events",
    "upcoming events",
    "find hackathons",
    "hackathon calendar",
];

/// Explicit venue/location markers expected in a real event page.
const VENUE_PHRASES: &[&str] = &[
    "venue:",
    "location:",
    "address:",
    "held at",
    "taking place at",
    "will be held",
    "hosted at",
    "convention center",
    "university",
];

const REGISTRATION_PHRASES: &[&str] = &[
    "registration open",
    "registration is open",
    "register now",
    "tickets available",
];

const SCHEDULE_PHRASES: &[&str] = &["upcoming", "scheduled"];

const PAST_EVENT_PHRASES: &[&str] = &[
    "was held",
    "took place",
    "concluded",
    "past event",
    "archived",
];

/// Configuration for one filtering pass.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub strictness: Strictness,
    /// Cap on the number of accepted results.
    pub max_results: usize,
    /// Year used by the recency predicate (strictest tier only).
    pub current_year: i32,
}

impl FilterConfig {
    #[must_use]
    pub fn new(strictness: Strictness, max_results: usize, current_year: i32) -> Self {
        Self {
            strictness,
            max_results,
            current_year,
        }
    }
}

/// Filters raw hits down to plausible event listings.
///
/// Preserves input order and truncates to `config.max_results`.
#[must_use]
pub fn filter_results(
    results: Vec<RawResult>,
    location_terms: &[String],
    config: &FilterConfig,
) -> Vec<RawResult> {
    results
        .into_iter()
        .filter(|result| accepts(result, location_terms, config))
        .take(config.max_results)
        .collect()
}

/// Conjunction of the tier's acceptance predicates.
fn accepts(result: &RawResult, location_terms: &[String], config: &FilterConfig) -> bool {
    let title = result.title.as_deref().unwrap_or("").to_lowercase();
    if contains_any(&title, GENERIC_TITLE_PHRASES) {
        return false;
    }

    let content = result.combined_content();

    let required_matches = match config.strictness {
        Strictness::Lenient => 1,
        Strictness::Strict | Strictness::Strictest => 2,
    };
    let matched = location_terms
        .iter()
        .filter(|term| !term.is_empty() && content.contains(term.as_str()))
        .count();
    if matched < required_matches {
        return false;
    }

    let needs_venue = matches!(
        config.strictness,
        Strictness::Strict | Strictness::Strictest
    );
    if needs_venue && !contains_any(&content, VENUE_PHRASES) {
        return false;
    }

    if config.strictness == Strictness::Strictest {
        let is_current = mentions_recent_year(&content, config.current_year)
            || contains_any(&content, SCHEDULE_PHRASES);
        let is_open = contains_any(&content, REGISTRATION_PHRASES);
        let is_past = contains_any(&content, PAST_EVENT_PHRASES);
        if !is_current || !is_open || is_past {
            return false;
        }
    }

    true
}

/// Removes site-name decoration added by indexing services.
///
/// Keeps the text after the first `:` (site prefix), then the text before
/// the first `|`, `-`, or `–` (site suffix), trimmed of whitespace.
#[must_use]
pub fn clean_title(title: &str) -> String {
    let mut cleaned = title
        .split_once(':')
        .map_or(title, |(_, rest)| rest);
    for separator in ['|', '-', '–'] {
        if let Some((head, _)) = cleaned.split_once(separator) {
            cleaned = head;
        }
    }
    cleaned.trim().to_string()
}

fn contains_any(content: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| content.contains(phrase))
}

fn mentions_recent_year(content: &str, current_year: i32) -> bool {
    content.contains(&current_year.to_string())
        || content.contains(&(current_year + 1).to_string())
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
