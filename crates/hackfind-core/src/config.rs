use crate::app_config::AppConfig;
use crate::strictness::parse_strictness;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let tavily_api_key = lookup("TAVILY_API_KEY").ok();
    let log_level = or_default("HACKFIND_LOG_LEVEL", "info");
    let geocode_base_url = or_default(
        "HACKFIND_GEOCODE_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let search_base_url = or_default("HACKFIND_SEARCH_BASE_URL", "https://api.tavily.com");
    let user_agent = or_default("HACKFIND_USER_AGENT", "HackathonFinder/1.0");
    let request_timeout_secs = parse_u64("HACKFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let step_timeout_secs = parse_u64("HACKFIND_STEP_TIMEOUT_SECS", "30")?;
    let max_results = parse_usize("HACKFIND_MAX_RESULTS", "5")?;
    let strictness = parse_strictness(&or_default("HACKFIND_STRICTNESS", "strict"));

    Ok(AppConfig {
        tavily_api_key,
        log_level,
        geocode_base_url,
        search_base_url,
        user_agent,
        request_timeout_secs,
        step_timeout_secs,
        max_results,
        strictness,
    })
}
