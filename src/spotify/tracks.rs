use reqwest::Client;

use crate::{
    config::Config,
    error::{Result, TrendError},
    types::{TopTracksResponse, TrackSnapshot},
};

/// Fetches the authenticated user's top tracks.
///
/// Performs one authenticated GET against `/me/top/tracks` and maps each
/// returned track object into a [`TrackSnapshot`] (name, popularity, first
/// artist, album, duration in minutes). One snapshot per track per run; no
/// history is retained.
///
/// # Arguments
///
/// * `config` - Validated application configuration (API base URL)
/// * `token` - Bearer access token from the login flow
/// * `limit` - Maximum number of tracks to return (Spotify caps this at 50)
///
/// # Errors
///
/// Returns [`TrendError::DataFetch`] with the provider's status and raw body
/// when the endpoint answers with a non-success status - commonly an expired
/// token or a token without the `user-top-read` scope. The call is not
/// retried; the caller surfaces the error and renders an empty result.
pub async fn fetch_top_tracks(
    config: &Config,
    token: &str,
    limit: u32,
) -> Result<Vec<TrackSnapshot>> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}",
        uri = &config.api_url,
        limit = limit
    );

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TrendError::DataFetch { status, body });
    }

    let res = response.json::<TopTracksResponse>().await?;

    Ok(res.items.into_iter().map(TrackSnapshot::from).collect())
}
