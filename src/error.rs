use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication and insights pipeline.
///
/// The three domain variants mirror the stages of a run: configuration is
/// validated once before any request (`Config`), the authorization code is
/// exchanged exactly once (`AuthExchange`), and the top-tracks snapshot is
/// fetched exactly once (`DataFetch`). None of these is retried; the flow is
/// single-shot and interactive, and authorization codes are single-use.
#[derive(Error, Debug)]
pub enum TrendError {
    /// Missing, placeholder or malformed configuration. Fatal before any
    /// request is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The token endpoint answered with a non-success status, or a success
    /// response without an access token. Carries the raw body so the
    /// operator can see what the provider said.
    #[error("token exchange failed (status {status}): {body}")]
    AuthExchange { status: StatusCode, body: String },

    /// The top-tracks endpoint answered with a non-success status, commonly
    /// an expired token or insufficient scope.
    #[error("top tracks request failed (status {status}): {body}")]
    DataFetch { status: StatusCode, body: String },

    /// The interactive login flow ended without receiving a token.
    #[error("authentication timed out before a token was received")]
    AuthTimeout,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering failed (backend or drawing error from plotters).
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, TrendError>;
