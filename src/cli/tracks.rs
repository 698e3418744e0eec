use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config,
    error,
    error::TrendError,
    info, spotify,
    types::{TrackSnapshot, TrackTableRow},
    warning,
};

pub async fn tracks(config: &Config, limit: u32) {
    let token = match spotify::auth::login(config).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let snapshots = fetch_snapshots(config, &token.access_token, limit).await;

    if snapshots.is_empty() {
        info!("No tracks to display.");
        return;
    }

    let table_rows: Vec<TrackTableRow> = snapshots.iter().map(TrackTableRow::from).collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Fetches the top-tracks snapshot with a spinner.
///
/// A failed fetch is surfaced as a warning and yields an empty list, so the
/// calling command renders an empty result instead of crashing.
pub(crate) async fn fetch_snapshots(
    config: &Config,
    token: &str,
    limit: u32,
) -> Vec<TrackSnapshot> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching top tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = spotify::tracks::fetch_top_tracks(config, token, limit).await;
    pb.finish_and_clear();

    match result {
        Ok(snapshots) => snapshots,
        Err(TrendError::DataFetch { status, body }) => {
            warning!(
                "Could not fetch top tracks (status {}). Check that your token has the user-top-read scope.\n{}",
                status,
                body
            );
            Vec::new()
        }
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    }
}
