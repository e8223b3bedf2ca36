use crate::models::filters::ZeroInputPolicy;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the taxi statistics API, overridable at build time with `TAXI_API_URL`
    pub const API_BASE_URL: &'static str = match option_env!("TAXI_API_URL") {
        Some(url) => url,
        None => "http://localhost:8009",
    };

    /// Client-wide request timeout in milliseconds (20 seconds)
    pub const REQUEST_TIMEOUT_MS: u64 = 20_000;

    /// How a numeric filter input that parses to exactly zero is treated.
    ///
    /// `UseFallback` keeps the historical behaviour where `0` is replaced by the
    /// field's fallback value; `Accept` passes `0` through.
    pub const ZERO_INPUT_POLICY: ZeroInputPolicy = ZeroInputPolicy::UseFallback;

    /// Delay before re-rendering charts after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// `localStorage` key for the selected chart
    pub const ACTIVE_CHART_KEY: &'static str = "active_chart";

    /// `localStorage` key for the filter values
    pub const FILTERS_KEY: &'static str = "filters";
}
