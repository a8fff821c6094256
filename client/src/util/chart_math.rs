//! SVG geometry for the donut and line charts.
//!
//! Angles are degrees, clockwise, with 0° at three o'clock; donuts start at
//! twelve o'clock (-90°).

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

pub const DONUT_START_DEG: f64 = -90.0;
/// A full 360° arc has coincident endpoints and draws nothing.
pub const MAX_SWEEP_DEG: f64 = 359.999;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub start_deg: f64,
    pub sweep_deg: f64,
}

pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

/// One arc per value, proportional to its share. Non-positive values get a
/// zero sweep so indices still line up with the legend.
pub fn donut_segments(values: &[f64]) -> Vec<ArcSegment> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    let mut start = DONUT_START_DEG;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 { (value / total * 360.0).min(MAX_SWEEP_DEG) } else { 0.0 };
            let segment = ArcSegment { start_deg: start, sweep_deg: sweep };
            start += sweep;
            segment
        })
        .collect()
}

pub fn point_on_circle(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed ring-segment path between `inner` and `outer` radii.
pub fn ring_path(cx: f64, cy: f64, outer: f64, inner: f64, segment: ArcSegment) -> String {
    let end = segment.start_deg + segment.sweep_deg;
    let large = u8::from(segment.sweep_deg > 180.0);
    let (ox0, oy0) = point_on_circle(cx, cy, outer, segment.start_deg);
    let (ox1, oy1) = point_on_circle(cx, cy, outer, end);
    let (ix1, iy1) = point_on_circle(cx, cy, inner, end);
    let (ix0, iy0) = point_on_circle(cx, cy, inner, segment.start_deg);
    format!(
        "M {ox0:.3} {oy0:.3} A {outer} {outer} 0 {large} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {inner} {inner} 0 {large} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// Map a series onto a `width`×`height` box with `pad` inset. The smallest
/// value sits on the bottom edge; a flat series is drawn mid-height.
pub fn scale_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let inner_w = (width - 2.0 * pad).max(0.0);
    let inner_h = (height - 2.0 * pad).max(0.0);
    let step = if values.len() > 1 { inner_w / (values.len() - 1) as f64 } else { 0.0 };
    let range = max - min;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + step * i as f64;
            let t = if range > 0.0 { (v - min) / range } else { 0.5 };
            (x, pad + inner_h * (1.0 - t))
        })
        .collect()
}

/// `points` attribute for `<polyline>`.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect::<Vec<_>>().join(" ")
}
