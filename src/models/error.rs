/// Every failure the dashboard can surface.
///
/// Kept `Clone + PartialEq` so it can sit inside component state and props.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
