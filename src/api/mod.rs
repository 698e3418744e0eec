//! # API Module
//!
//! HTTP endpoints served by the temporary local server that backs the OAuth
//! login flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the provider redirect after the user authorizes
//!   the application. Reads the `code` query parameter, performs the token
//!   exchange and transitions the shared auth state from `Unauthenticated`
//!   to `Authenticated`.
//! - [`health`] - Health check returning application status and version.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async handler wired up by [`crate::server::router`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
