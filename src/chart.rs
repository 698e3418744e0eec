//! PNG chart rendering for popularity forecasts.

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;

use crate::{
    error::{Result, TrendError},
    types::ProjectionSeries,
};

/// Styling options for the forecast chart.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Title displayed at the top of the chart
    pub title: String,

    /// Label for the X-axis
    pub x_label: String,

    /// Label for the Y-axis
    pub y_label: String,

    /// Width of the chart in pixels
    pub width: u32,

    /// Height of the chart in pixels
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Popularity Forecast - Top Tracks".to_string(),
            x_label: "Days".to_string(),
            y_label: "Popularity".to_string(),
            width: 1000,
            height: 500,
        }
    }
}

/// Renders observed and projected popularity per track as a PNG line chart.
///
/// Each track gets two line series: the observed snapshots in a solid
/// palette color and the projection in a lighter shade of the same color.
/// The y axis is fixed to the popularity domain (0-100). An empty series map
/// draws nothing and returns without touching the output path.
///
/// # Errors
///
/// Returns [`TrendError::Chart`] when the plotters backend cannot write the
/// file or a drawing operation fails.
pub fn render_forecast_chart(
    series: &BTreeMap<String, ProjectionSeries>,
    path: &Path,
    options: &ChartOptions,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let max_len = series
        .values()
        .map(|s| s.observed.len() + s.projected.len())
        .max()
        .unwrap_or(1);

    let root =
        BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..max_len as f64, 0f64..100f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc(&options.x_label)
        .y_desc(&options.y_label)
        .draw()
        .map_err(chart_err)?;

    for (idx, (name, projection)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        let observed: Vec<(f64, f64)> = projection
            .observed
            .iter()
            .enumerate()
            .map(|(x, y)| (x as f64, *y))
            .collect();

        let start = projection.observed.len();
        let projected: Vec<(f64, f64)> = projection
            .projected
            .iter()
            .enumerate()
            .map(|(x, y)| ((start + x) as f64, *y))
            .collect();

        chart
            .draw_series(LineSeries::new(observed, color.stroke_width(2)))
            .map_err(chart_err)?
            .label(format!("{} (actual)", name))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        let faded = color.mix(0.4);
        chart
            .draw_series(LineSeries::new(projected, faded.stroke_width(2)))
            .map_err(chart_err)?
            .label(format!("{} (forecast)", name))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], faded.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> TrendError {
    TrendError::Chart(e.to_string())
}
