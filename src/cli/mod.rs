//! # CLI Module
//!
//! User-facing command implementations. Each command is a single-shot run:
//! it authenticates interactively when it needs the API, uses the obtained
//! token, and discards it on exit. There is no state shared between runs.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the interactive Spotify login flow, or just prints the
//!   login link with `--print-url`
//! - [`tracks`] - Logs in and displays the user's top tracks as a table
//! - [`forecast`] - Logs in, fetches top tracks and renders a popularity
//!   forecast as a table plus a PNG chart
//!
//! ## Error Handling
//!
//! Commands surface failures with the output macros from the crate root: a
//! failed data fetch is reported as a warning and renders an empty result,
//! while configuration and authentication failures terminate the run. No
//! call in this layer is retried.

mod auth;
mod forecast;
mod tracks;

pub use auth::auth;
pub use forecast::forecast;
pub use tracks::tracks;
