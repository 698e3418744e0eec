//! Configuration management for the trend CLI.
//!
//! Configuration is collected once at startup into an explicit [`Config`]
//! struct and validated before any request is attempted. Values come from
//! environment variables, optionally loaded from a `.env` file in the
//! platform-specific local data directory (`sptrendcli/.env`), with
//! application defaults for everything except the Spotify credentials.

use std::{env, path::PathBuf};

use url::Url;

use crate::error::{Result, TrendError};

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8080/callback";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_SCOPE: &str =
    "user-read-private user-read-email user-top-read user-read-recently-played";

/// Placeholder values shipped in `.env.example`; treated the same as missing.
const PLACEHOLDERS: [&str; 2] = ["your-client-id", "your-client-secret"];

/// Application configuration, resolved once per run.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Must exactly match the redirect URI registered with the provider.
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Bind address of the local OAuth callback server.
    pub server_addr: String,
}

impl Config {
    /// Loads configuration from the environment and validates it.
    ///
    /// Looks for a `.env` file in the local data directory first:
    /// - Linux: `~/.local/share/sptrendcli/.env`
    /// - macOS: `~/Library/Application Support/sptrendcli/.env`
    /// - Windows: `%LOCALAPPDATA%/sptrendcli/.env`
    ///
    /// Falling back to a `.env` in the working directory, then to plain
    /// environment variables. Credentials are required; endpoints, scope,
    /// redirect URI and server address have Spotify defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Config`] when a credential is missing or still a
    /// placeholder, or when a configured endpoint is not a valid URL.
    pub async fn from_env() -> Result<Self> {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sptrendcli/.env");
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| TrendError::Config(e.to_string()))?;
        }

        if path.is_file() {
            dotenv::from_path(&path).map_err(|e| TrendError::Config(e.to_string()))?;
        } else {
            dotenv::dotenv().ok();
        }

        let config = Config {
            client_id: env::var("SPOTIFY_API_AUTH_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: env::var("SPOTIFY_API_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            scope: env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks credentials and endpoint URLs once, before any request.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("SPOTIFY_API_AUTH_CLIENT_ID", &self.client_id),
            ("SPOTIFY_API_AUTH_CLIENT_SECRET", &self.client_secret),
        ] {
            if value.is_empty() {
                return Err(TrendError::Config(format!("{} is not set", name)));
            }
            if PLACEHOLDERS.contains(&value.as_str()) {
                return Err(TrendError::Config(format!(
                    "{} still contains the placeholder value '{}'",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("SPOTIFY_API_AUTH_URL", &self.auth_url),
            ("SPOTIFY_API_TOKEN_URL", &self.token_url),
            ("SPOTIFY_API_URL", &self.api_url),
            ("SPOTIFY_API_REDIRECT_URI", &self.redirect_uri),
        ] {
            Url::parse(value).map_err(|e| {
                TrendError::Config(format!("{} is not a valid URL ({}): {}", name, value, e))
            })?;
        }

        Ok(())
    }
}
