//! Spotify Top-Track Trend CLI Library
//!
//! This library backs a small dashboard-style CLI that authenticates a user
//! with Spotify, fetches their top tracks and produces a naive linear
//! forecast of each track's popularity over the next weeks.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `chart` - PNG chart rendering for popularity forecasts
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading and validation
//! - `error` - Error types and the crate-wide `Result` alias
//! - `forecast` - Least-squares popularity projection
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use sptrendcli::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> sptrendcli::Result<()> {
//!     let config = config::Config::from_env().await?;
//!     cli::tracks(&config, 10).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod forecast;
pub mod server;
pub mod spotify;
pub mod types;

pub use error::{Result, TrendError};

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`. Used for general status updates
/// throughout the application.
///
/// # Example
///
/// ```
/// info!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`. Used to confirm that an
/// operation completed successfully.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Accepts the same arguments as `println!` and terminates the process with
/// exit code 1 afterwards. Reserved for unrecoverable errors at the CLI
/// layer; library code returns [`error::TrendError`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration: {}", e);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`. Used for recoverable issues the
/// user should notice, such as a failed fetch that falls back to an empty
/// result.
///
/// # Example
///
/// ```
/// warning!("Could not open browser, navigate manually to {}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
