//! Tavily search API wire types.

use serde::{Deserialize, Serialize};

/// Request body for the Tavily `search` endpoint.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub search_depth: &'a str,
    pub max_results: usize,
    pub sort_by: &'a str,
    pub include_raw_content: bool,
}

/// Top-level search response: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// A single raw search hit, passed through from the provider.
///
/// Every field is optional; filtering treats absent fields as empty strings,
/// never as errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

impl RawResult {
    /// Lowercased concatenation of title, snippet, and raw content — the
    /// text the filter predicates operate on.
    #[must_use]
    pub fn combined_content(&self) -> String {
        format!(
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.snippet.as_deref().unwrap_or(""),
            self.raw_content.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_content_lowercases_and_joins() {
        let result = RawResult {
            title: Some("SF Hacks".to_owned()),
            snippet: Some("A Hackathon".to_owned()),
            raw_content: None,
            published_date: None,
        };
        assert_eq!(result.combined_content(), "sf hacks a hackathon ");
    }

    #[test]
    fn combined_content_of_empty_result_is_whitespace_only() {
        assert_eq!(RawResult::default().combined_content().trim(), "");
    }
}
