use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::Mutex;

/// Access token obtained from the authorization-code exchange.
///
/// Lives for a single run; it is never persisted and is discarded when the
/// command finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw response of the token endpoint.
///
/// `access_token` is optional on purpose: a 2xx answer without a token is a
/// failed exchange and must surface as an error, not as an
/// authenticated-looking success.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

/// State of the interactive login flow.
///
/// A run starts `Unauthenticated` holding only the precomputed authorization
/// URL; the callback handler performs the single transition to
/// `Authenticated` after a successful code exchange.
#[derive(Debug, Clone)]
pub enum AuthState {
    Unauthenticated { authorize_url: String },
    Authenticated { token: Token },
}

/// Auth flow state shared between the login driver and the callback handler.
pub type SharedAuthState = Arc<Mutex<AuthState>>;

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub popularity: u8,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

/// One track as displayed in the dashboard: a single popularity snapshot
/// taken at request time, no history.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSnapshot {
    pub name: String,
    /// Provider-supplied score, 0-100 at request time.
    pub popularity: u8,
    pub artist: String,
    pub album: String,
    pub duration_min: f64,
}

impl From<TrackItem> for TrackSnapshot {
    fn from(item: TrackItem) -> Self {
        let artist = item
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default();
        // duration in minutes, rounded to two decimals
        let duration_min = (item.duration_ms as f64 / 60_000.0 * 100.0).round() / 100.0;

        TrackSnapshot {
            name: item.name,
            popularity: item.popularity,
            artist,
            album: item.album.name,
            duration_min,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub popularity: u8,
    pub artist: String,
    pub album: String,
    pub duration_min: String,
}

impl From<&TrackSnapshot> for TrackTableRow {
    fn from(snapshot: &TrackSnapshot) -> Self {
        TrackTableRow {
            name: snapshot.name.clone(),
            popularity: snapshot.popularity,
            artist: snapshot.artist.clone(),
            album: snapshot.album.clone(),
            duration_min: format!("{:.2}", snapshot.duration_min),
        }
    }
}

#[derive(Tabled)]
pub struct ForecastTableRow {
    pub name: String,
    pub current: String,
    pub projected: String,
    pub trend: String,
    pub basis: String,
}

/// Per-track projection of popularity into future days.
///
/// `observed` holds the real snapshots the fit saw; `projected` holds the
/// extrapolated values, one per future day. `synthetic` is set when the fit
/// ran on a duplicated single snapshot rather than a real series, which makes
/// the projection a flat presentation stub rather than a trend.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    pub observed: Vec<f64>,
    pub projected: Vec<f64>,
    pub synthetic: bool,
}
