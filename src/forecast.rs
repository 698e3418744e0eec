//! Least-squares popularity projection.
//!
//! The upstream API only ever returns a single popularity snapshot per
//! track, so a real time series does not exist. The projection is therefore
//! a presentation stub: when a track has only one observation, a synthetic
//! two-point series `(value, value)` at indices `(0, 1)` makes the fit
//! well-defined and yields a flat line. That branch is explicit and the
//! result carries a `synthetic` flag so callers can tell projections built
//! from synthetic data apart from real ones. More data would improve the fit
//! in principle, but structurally there is at most one true observation per
//! run.

use std::collections::BTreeMap;

use crate::types::{ProjectionSeries, TrackSnapshot};

/// Projects each track's popularity `horizon_days` days into the future.
///
/// For every distinct track name the popularity values are collected in
/// input order, a least-squares line is fitted against the observation index
/// and extrapolated for `horizon_days` further indices. Tracks with a single
/// observation get the synthetic two-point treatment described in the module
/// docs, which produces a constant projection at the observed value.
///
/// Zero input tracks produce an empty mapping; callers attempt no chart in
/// that case.
pub fn project_popularity(
    snapshots: &[TrackSnapshot],
    horizon_days: usize,
) -> BTreeMap<String, ProjectionSeries> {
    let mut observed_by_name: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for snapshot in snapshots {
        observed_by_name
            .entry(snapshot.name.clone())
            .or_default()
            .push(snapshot.popularity as f64);
    }

    observed_by_name
        .into_iter()
        .map(|(name, observed)| {
            let synthetic = observed.len() < 2;
            let fitted: Vec<f64> = if synthetic {
                vec![observed[0], observed[0]]
            } else {
                observed.clone()
            };

            let (slope, intercept) = linear_fit(&fitted);
            let start = fitted.len();
            let projected = (start..start + horizon_days)
                .map(|x| slope * x as f64 + intercept)
                .collect();

            (
                name,
                ProjectionSeries {
                    observed,
                    projected,
                    synthetic,
                },
            )
        })
        .collect()
}

/// Ordinary least-squares fit of `ys` against `x = 0, 1, 2, ...`.
///
/// Returns `(slope, intercept)`. Degenerate inputs (fewer than two points)
/// fall back to a flat line through the single value, or through zero for an
/// empty slice.
fn linear_fit(ys: &[f64]) -> (f64, f64) {
    let n = ys.len();
    if n < 2 {
        return (0.0, ys.first().copied().unwrap_or(0.0));
    }

    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (y - mean_y);
        variance += dx * dx;
    }

    let slope = covariance / variance;
    (slope, mean_y - slope * mean_x)
}
