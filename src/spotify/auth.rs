use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;
use url::Url;

use crate::{
    config::Config,
    error::{Result, TrendError},
    server::start_api_server,
    types::{AuthState, SharedAuthState, Token, TokenResponse},
    warning,
};

/// Builds the provider authorization URL for the login link.
///
/// Pure and deterministic: serializes `client_id`, `response_type=code`,
/// `redirect_uri` and `scope` as a percent-encoded query string against the
/// configured authorize endpoint. The redirect URI is emitted exactly as
/// configured, since the provider matches it verbatim against the registered
/// value.
///
/// # Errors
///
/// Only fails when the configured authorize endpoint is not a valid URL,
/// which [`Config::validate`] has already ruled out for loaded configs.
///
/// # Example
///
/// ```
/// let url = build_authorization_url(&config)?;
/// println!("Log in with Spotify: {}", url);
/// ```
pub fn build_authorization_url(config: &Config) -> Result<String> {
    let mut url =
        Url::parse(&config.auth_url).map_err(|e| TrendError::Config(e.to_string()))?;

    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", &config.scope);

    Ok(url.into())
}

/// Exchanges an authorization code for an access token.
///
/// Performs the single outbound POST of the authorization-code flow, carrying
/// `grant_type=authorization_code`, the code, the redirect URI and the client
/// credentials as a form body.
///
/// The exchange is never retried: authorization codes are single-use and
/// expire within minutes, so on failure the provider's status and raw
/// response body are surfaced to the operator instead.
///
/// # Errors
///
/// - [`TrendError::AuthExchange`] when the token endpoint answers with a
///   non-success status, or with a success response that lacks a non-empty
///   `access_token` field
/// - [`TrendError::Http`] for network-level failures
pub async fn exchange_code_for_token(config: &Config, code: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(TrendError::AuthExchange { status, body });
    }

    let token_response: TokenResponse = res.json().await?;

    // A 2xx answer without a token is still a failed exchange and must be
    // visible, never an authenticated-looking success.
    let access_token = match token_response.access_token {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(TrendError::AuthExchange {
                status,
                body: "token response did not contain an access_token".to_string(),
            });
        }
    };

    Ok(Token {
        access_token,
        scope: token_response.scope.unwrap_or_default(),
        expires_in: token_response.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Runs the interactive login flow and returns an access token.
///
/// Drives the whole authorization-code flow for one run:
/// 1. Builds the authorization URL and stores it in the shared
///    `Unauthenticated` state
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser (or asks the user
///    to navigate manually when that fails)
/// 4. Waits for the callback handler to exchange the returned code and flip
///    the shared state to `Authenticated`
///
/// The token is handed back to the caller and lives only for this run; it is
/// never persisted.
///
/// # Errors
///
/// - [`TrendError::Config`] when the authorize endpoint is malformed
/// - [`TrendError::AuthTimeout`] when no token arrives within 60 seconds
pub async fn login(config: &Config) -> Result<Token> {
    let authorize_url = build_authorization_url(config)?;

    let shared_state: SharedAuthState = Arc::new(Mutex::new(AuthState::Unauthenticated {
        authorize_url: authorize_url.clone(),
    }));

    let server_config = Arc::new(config.clone());
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_config, server_state).await;
    });

    if webbrowser::open(&authorize_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            authorize_url
        )
    }

    wait_for_token(shared_state).await
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state once per second for up to 60 seconds while the
/// callback handler runs concurrently. Returns the token as soon as the
/// state transitions to `Authenticated`.
async fn wait_for_token(shared_state: SharedAuthState) -> Result<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let AuthState::Authenticated { token } = &*lock {
            return Ok(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Err(TrendError::AuthTimeout)
}
