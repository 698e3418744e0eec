use sptrendcli::forecast::project_popularity;
use sptrendcli::types::TrackSnapshot;

// Helper function to create a test snapshot
fn create_test_snapshot(name: &str, popularity: u8) -> TrackSnapshot {
    TrackSnapshot {
        name: name.to_string(),
        popularity,
        artist: format!("{} Artist", name),
        album: format!("{} Album", name),
        duration_min: 3.5,
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {} to equal {}", a, b);
}

#[test]
fn test_single_point_projects_constant_value() {
    let snapshots = vec![create_test_snapshot("Song", 50)];
    let series = project_popularity(&snapshots, 30);

    let projection = series.get("Song").expect("series for track");

    // A duplicated single observation has slope zero, so the projection is
    // constant at the observed value across the whole horizon
    assert_eq!(projection.projected.len(), 30);
    for value in &projection.projected {
        assert_close(*value, 50.0);
    }

    // The fit ran on synthetic data and says so
    assert!(projection.synthetic);

    // Observed keeps only the real snapshot, not the synthetic duplicate
    assert_eq!(projection.observed, vec![50.0]);
}

#[test]
fn test_zero_tracks_produce_empty_mapping() {
    let series = project_popularity(&[], 30);
    assert!(series.is_empty());
}

#[test]
fn test_two_tracks_project_independently() {
    let snapshots = vec![
        create_test_snapshot("A", 70),
        create_test_snapshot("B", 40),
    ];
    let series = project_popularity(&snapshots, 30);

    // Exactly the two track names, nothing else
    let keys: Vec<&String> = series.keys().collect();
    assert_eq!(keys, vec!["A", "B"]);

    let a = &series["A"];
    let b = &series["B"];
    assert_eq!(a.projected.len(), 30);
    assert_eq!(b.projected.len(), 30);

    for value in &a.projected {
        assert_close(*value, 70.0);
    }
    for value in &b.projected {
        assert_close(*value, 40.0);
    }

    assert!(a.synthetic);
    assert!(b.synthetic);
}

#[test]
fn test_repeated_snapshots_form_real_series() {
    // Two snapshots under the same name form a real two-point series
    let snapshots = vec![
        create_test_snapshot("Song", 40),
        create_test_snapshot("Song", 60),
    ];
    let series = project_popularity(&snapshots, 3);

    let projection = &series["Song"];
    assert!(!projection.synthetic);
    assert_eq!(projection.observed, vec![40.0, 60.0]);

    // Points (0, 40) and (1, 60) fit a line with slope 20, so the
    // extrapolation continues at indices 2, 3, 4
    assert_eq!(projection.projected.len(), 3);
    assert_close(projection.projected[0], 80.0);
    assert_close(projection.projected[1], 100.0);
    assert_close(projection.projected[2], 120.0);
}

#[test]
fn test_declining_series_projects_downward() {
    let snapshots = vec![
        create_test_snapshot("Song", 60),
        create_test_snapshot("Song", 40),
    ];
    let series = project_popularity(&snapshots, 2);

    let projection = &series["Song"];
    assert_close(projection.projected[0], 20.0);
    assert_close(projection.projected[1], 0.0);
}

#[test]
fn test_zero_horizon_projects_nothing() {
    let snapshots = vec![create_test_snapshot("Song", 50)];
    let series = project_popularity(&snapshots, 0);

    let projection = &series["Song"];
    assert!(projection.projected.is_empty());
    assert!(projection.synthetic);
}
