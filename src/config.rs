/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Live market data is considered fresh for 5 minutes
    pub const STALE_TIME_MS: u32 = 300_000;

    /// Summary and market pulse refetch interval (5 minutes)
    pub const LIVE_REFRESH_MS: u32 = 300_000;

    /// Historical averages only change daily
    pub const HISTORICAL_STALE_TIME_MS: u32 = 3_600_000;

    /// Attempts per query, including the first one
    pub const MAX_RETRY_ATTEMPTS: u32 = 3;

    /// First retry delay; doubled on each further attempt
    pub const RETRY_INITIAL_DELAY_MS: u32 = 500;

    /// Every upstream path is namespaced under this prefix (served by the proxy)
    pub const API_PREFIX: &'static str = "/api";

    pub const API_KEY_HEADER: &'static str = "x-api-key";

    /// Origin used when no browser location is available
    pub const DEFAULT_ORIGIN: &'static str = "http://localhost:8080";

    /// API key baked in at build time via `AEMO_API_KEY`
    pub fn api_key() -> &'static str {
        option_env!("AEMO_API_KEY").unwrap_or("")
    }

    /// Explicit origin override via `AEMO_API_ORIGIN`
    pub fn api_origin() -> Option<&'static str> {
        option_env!("AEMO_API_ORIGIN")
    }

    /// `tracing` filter directive, overridable via `NEM_DASHBOARD_LOG`
    pub fn log_filter() -> &'static str {
        option_env!("NEM_DASHBOARD_LOG").unwrap_or(if cfg!(debug_assertions) {
            "nem_dashboard=debug,info"
        } else {
            "nem_dashboard=info,warn"
        })
    }
}
