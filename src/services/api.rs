use crate::config::Config;
use crate::models::{
    error::AppError,
    trips::{PickupHotspot, RoutePattern, TripRecord},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

// API CONFIGURATION
/// Configuration for the taxi statistics API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL for route patterns above the server's popularity threshold.
    pub fn corporate_patterns_url(&self, limit: u32) -> String {
        format!("{}/corporate/patterns?limit={limit}", self.base_url)
    }

    /// URL for the busiest pickup locations over the trailing `days`.
    pub fn top_pickups_url(&self, limit: u32, days: u32) -> String {
        format!("{}/hotspots/pickup?limit={limit}&days={days}", self.base_url)
    }

    /// URL for trips at or above both fare and distance thresholds.
    pub fn premium_trips_url(&self, limit: u32, min_fare: f64, min_distance: f64) -> String {
        format!(
            "{}/trips/premium?limit={limit}&min_fare={min_fare}&min_distance={min_distance}",
            self.base_url
        )
    }

    /// URL for trips carrying exactly `passenger_count` passengers.
    pub fn trips_by_passenger_count_url(&self, passenger_count: u32, limit: u32) -> String {
        format!(
            "{}/customers/{passenger_count}/trips?limit={limit}",
            self.base_url
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(Config::REQUEST_TIMEOUT_MS)),
        }
    }
}

// TAXI CLIENT
/// HTTP client for the taxi statistics API.
pub struct TaxiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl TaxiClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn corporate_patterns(&self, limit: u32) -> Result<Vec<RoutePattern>, AppError> {
        self.fetch(&self.config.corporate_patterns_url(limit)).await
    }

    pub async fn top_pickups(&self, limit: u32, days: u32) -> Result<Vec<PickupHotspot>, AppError> {
        self.fetch(&self.config.top_pickups_url(limit, days)).await
    }

    pub async fn premium_trips(
        &self,
        limit: u32,
        min_fare: f64,
        min_distance: f64,
    ) -> Result<Vec<TripRecord>, AppError> {
        self.fetch(&self.config.premium_trips_url(limit, min_fare, min_distance))
            .await
    }

    pub async fn trips_by_passenger_count(
        &self,
        passenger_count: u32,
        limit: u32,
    ) -> Result<Vec<TripRecord>, AppError> {
        self.fetch(&self.config.trips_by_passenger_count_url(passenger_count, limit))
            .await
    }

    /// Executes a single GET and decodes the body as-is.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: &reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Timeout(error.to_string())
    } else {
        AppError::Network(error.to_string())
    }
}

/// Creates an error for a non-2xx status.
fn error_for_status(status: u16, body: String) -> AppError {
    let body = if body.trim().is_empty() {
        "<empty body>".to_string()
    } else {
        body
    };
    AppError::Http { status, body }
}

// CONVENIENCE FUNCTIONS
/// Fetches corporate route patterns using default configuration.
pub async fn get_corporate_patterns(limit: u32) -> Result<Vec<RoutePattern>, AppError> {
    TaxiClient::new()?.corporate_patterns(limit).await
}

/// Fetches the top pickup locations using default configuration.
pub async fn get_top_pickups(limit: u32, days: u32) -> Result<Vec<PickupHotspot>, AppError> {
    TaxiClient::new()?.top_pickups(limit, days).await
}

/// Fetches premium trips using default configuration.
pub async fn get_premium_trips(
    limit: u32,
    min_fare: f64,
    min_distance: f64,
) -> Result<Vec<TripRecord>, AppError> {
    TaxiClient::new()?
        .premium_trips(limit, min_fare, min_distance)
        .await
}

/// Fetches trips for a passenger count using default configuration.
pub async fn get_trips_by_passenger_count(
    passenger_count: u32,
    limit: u32,
) -> Result<Vec<TripRecord>, AppError> {
    TaxiClient::new()?
        .trips_by_passenger_count(passenger_count, limit)
        .await
}
