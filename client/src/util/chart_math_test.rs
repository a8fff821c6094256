use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn percent_of_handles_empty_total() {
    assert!(approx(percent_of(25.0, 200.0), 12.5));
    assert_eq!(percent_of(5.0, 0.0), 0.0);
}

#[test]
fn donut_segments_start_at_twelve_and_are_contiguous() {
    let segments = donut_segments(&[1.0, 1.0, 2.0]);
    assert!(approx(segments[0].start_deg, -90.0));
    assert!(approx(segments[0].sweep_deg, 90.0));
    assert!(approx(segments[1].start_deg, 0.0));
    assert!(approx(segments[2].start_deg, 90.0));
    assert!(approx(segments[2].sweep_deg, 180.0));
}

#[test]
fn single_value_donut_is_capped_below_full_turn() {
    let segments = donut_segments(&[42.0]);
    assert!(approx(segments[0].sweep_deg, MAX_SWEEP_DEG));
}

#[test]
fn non_positive_values_get_no_sweep() {
    let segments = donut_segments(&[0.0, -3.0, 5.0]);
    assert_eq!(segments[0].sweep_deg, 0.0);
    assert_eq!(segments[1].sweep_deg, 0.0);
    assert!(approx(segments[2].start_deg, -90.0));
    assert!(donut_segments(&[]).is_empty());
}

#[test]
fn ring_path_uses_large_arc_flag_past_half_turn() {
    let small = ring_path(50.0, 50.0, 40.0, 25.0, ArcSegment { start_deg: -90.0, sweep_deg: 90.0 });
    let large = ring_path(50.0, 50.0, 40.0, 25.0, ArcSegment { start_deg: -90.0, sweep_deg: 270.0 });
    assert!(small.starts_with("M 50.000 10.000 A 40 40 0 0 1"));
    assert!(large.contains("A 40 40 0 1 1"));
    assert!(large.ends_with('Z'));
}

#[test]
fn scale_points_maps_extremes_to_edges() {
    let points = scale_points(&[10.0, 20.0, 15.0], 100.0, 50.0, 5.0);
    assert_eq!(points.len(), 3);
    assert!(approx(points[0].0, 5.0));
    assert!(approx(points[2].0, 95.0));
    assert!(approx(points[0].1, 45.0));
    assert!(approx(points[1].1, 5.0));
    assert!(approx(points[2].1, 25.0));
}

#[test]
fn flat_series_sits_mid_height() {
    let points = scale_points(&[3.0, 3.0], 20.0, 10.0, 0.0);
    assert!(points.iter().all(|(_, y)| approx(*y, 5.0)));
}

#[test]
fn polyline_joins_pairs() {
    assert_eq!(polyline(&[(0.0, 1.0), (2.5, 3.25)]), "0.00,1.00 2.50,3.25");
    assert_eq!(polyline(&[]), "");
}
