use std::path::Path;

use tabled::Table;

use crate::{
    chart::{self, ChartOptions},
    config::Config,
    error, forecast as projection, info, spotify, success,
    types::ForecastTableRow,
    warning,
};

use super::tracks::fetch_snapshots;

pub async fn forecast(config: &Config, limit: u32, horizon_days: usize, output: &Path) {
    let token = match spotify::auth::login(config).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let snapshots = fetch_snapshots(config, &token.access_token, limit).await;

    if snapshots.is_empty() {
        info!("No tracks to forecast.");
        return;
    }

    let series = projection::project_popularity(&snapshots, horizon_days);

    let table_rows: Vec<ForecastTableRow> = series
        .iter()
        .map(|(name, s)| {
            let current = s.observed.last().copied().unwrap_or(0.0);
            let projected = s.projected.last().copied().unwrap_or(current);
            let trend = if projected > current {
                "rising"
            } else if projected < current {
                "falling"
            } else {
                "flat"
            };
            ForecastTableRow {
                name: name.clone(),
                current: format!("{:.0}", current),
                projected: format!("{:.1}", projected),
                trend: trend.to_string(),
                basis: if s.synthetic {
                    "single snapshot".to_string()
                } else {
                    "observed series".to_string()
                },
            }
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);

    if series.values().any(|s| s.synthetic) {
        warning!(
            "Projections marked 'single snapshot' extrapolate one popularity value; the trend line is flat by construction."
        );
    }

    let options = ChartOptions::default();
    match chart::render_forecast_chart(&series, output, &options) {
        Ok(_) => success!("Forecast chart written to {}", output.display()),
        Err(e) => warning!("Could not render forecast chart: {}", e),
    }
}
