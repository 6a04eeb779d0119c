use crate::Strictness;

/// Process-wide configuration, loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// Search-provider credential. Absence degrades searches to empty
    /// results rather than failing startup.
    pub tavily_api_key: Option<String>,
    pub log_level: String,
    pub geocode_base_url: String,
    pub search_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Wall-clock budget for one full location pipeline step.
    pub step_timeout_secs: u64,
    pub max_results: usize,
    pub strictness: Strictness,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "tavily_api_key",
                &self.tavily_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("geocode_base_url", &self.geocode_base_url)
            .field("search_base_url", &self.search_base_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("step_timeout_secs", &self.step_timeout_secs)
            .field("max_results", &self.max_results)
            .field("strictness", &self.strictness)
            .finish()
    }
}
