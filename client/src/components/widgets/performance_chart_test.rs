use super::*;

fn series(n: usize) -> Vec<PerformancePoint> {
    (0..n).map(|i| PerformancePoint { date: format!("d{i}"), value: 100.0 + i as f64 }).collect()
}

#[test]
fn windowed_keeps_trailing_points() {
    let points = series(100);
    let month = windowed(&points, Range::Month);
    assert_eq!(month.len(), 21);
    assert_eq!(month[0].date, "d79");
    assert_eq!(windowed(&points, Range::Year).len(), 100);
    assert_eq!(windowed(&points, Range::All).len(), 100);
}

#[test]
fn period_return_compares_first_and_last() {
    let points = vec![
        PerformancePoint { date: "a".into(), value: 200.0 },
        PerformancePoint { date: "b".into(), value: 210.0 },
    ];
    assert_eq!(period_return(&points), Some(5.0));
    assert_eq!(period_return(&[]), None);
    assert_eq!(period_return(&[PerformancePoint { date: "z".into(), value: 0.0 }]), None);
}
