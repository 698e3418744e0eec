//! # Spotify Integration Module
//!
//! Primary integration layer between the CLI and the Spotify Web API. It
//! implements the OAuth 2.0 authorization-code flow and the single data
//! endpoint this application consumes, handling all HTTP communication and
//! error mapping.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the authorization-code flow:
//! - **Authorization URL**: Builds the percent-encoded login link
//!   (`client_id`, `response_type=code`, `redirect_uri`, `scope`)
//! - **Local Callback Server**: Temporary HTTP server that receives the
//!   provider redirect carrying the `code` query parameter
//! - **Token Exchange**: Exchanges the single-use authorization code plus
//!   client credentials for an access token, exactly once, without retries
//! - **Browser Integration**: Opens the authorization URL in the default
//!   browser, with a manual fallback
//!
//! ### Tracks Module
//!
//! [`tracks`] - Fetches the authenticated user's top tracks
//! (`GET /me/top/tracks`) and maps them into [`crate::types::TrackSnapshot`]
//! values for display and forecasting.
//!
//! ## Error Handling
//!
//! Every call in this module is one-shot: a non-success status surfaces as
//! [`crate::TrendError::AuthExchange`] or [`crate::TrendError::DataFetch`]
//! with the raw response body attached, and the current run aborts that
//! stage. Authorization codes expire quickly and are single-use, so an
//! automatic retry of the exchange would be unsafe; the data fetch is
//! likewise surfaced to the user instead of retried.
//!
//! ## API Coverage
//!
//! - `GET /authorize` - browser redirect target (never called directly)
//! - `POST /api/token` - authorization-code exchange
//! - `GET /me/top/tracks` - top-tracks snapshot
//!
//! ## Session Model
//!
//! Each run is an isolated session: the token obtained by [`auth::login`]
//! lives in memory for the duration of the command and is discarded
//! afterwards. There is no token cache and no refresh.

pub mod auth;
pub mod tracks;
