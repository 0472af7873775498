// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked geometry: bar spans and stream bands.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Brush;

use vantage_core::Shape;
use vantage_transforms::StackedSpan;

use crate::scale::ScaleLinear;

/// Maps one stacked span to a rect shape at scene position `x` with width `width`.
///
/// The vertical extent comes from the span's `start`/`end` through `y_scale`; a
/// zero-value span degenerates to a zero-height rect, which stays renderable and keeps
/// its key in the frame.
pub fn stacked_rect(
    span: &StackedSpan,
    x: f64,
    width: f64,
    y_scale: &ScaleLinear,
    fill: Brush,
) -> Shape {
    let a = y_scale.map(span.start);
    let b = y_scale.map(span.end);
    let rect = Rect::new(x, a.min(b), x + width.max(0.0), a.max(b));
    Shape::rect(rect, fill)
}

/// Builds a closed band path for one series of a stream chart.
///
/// `points` are `(x, bottom, top)` triples in scene coordinates, ordered along x. The
/// outline runs forward along the top edge and back along the bottom. An empty input
/// yields an empty path; a single point yields a degenerate vertical sliver rather than
/// a malformed path.
pub fn series_band(points: &[(f64, f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    let Some(&(x0, bottom0, top0)) = points.first() else {
        return p;
    };
    p.move_to((x0, bottom0));
    p.line_to((x0, top0));
    for &(x, _, top) in points.iter().skip(1) {
        p.line_to((x, top));
    }
    for &(x, bottom, _) in points.iter().rev().skip(1) {
        p.line_to((x, bottom));
    }
    p.close_path();
    p
}

/// Builds an open polyline through `points`, used for bump-chart series lines.
pub fn polyline(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p
}

/// Collects `(x, bottom, top)` triples for one series across ordered categories.
///
/// Categories without a span for this series contribute a flat `(x, base, base)` point
/// so the band stays continuous.
pub fn series_band_points(
    spans: &[StackedSpan],
    series: &str,
    category_xs: &[(&str, f64)],
    base_y: f64,
    y_scale: &ScaleLinear,
) -> Vec<(f64, f64, f64)> {
    category_xs
        .iter()
        .map(|&(category, x)| {
            match spans
                .iter()
                .find(|s| s.series == series && s.category == category)
            {
                Some(s) => {
                    let a = y_scale.map(s.start);
                    let b = y_scale.map(s.end);
                    (x, a.max(b), a.min(b))
                }
                None => (x, base_y, base_y),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use vantage_core::Key;

    use super::*;

    fn span(series: &str, category: &str, start: f64, end: f64) -> StackedSpan {
        StackedSpan {
            key: Key::series(series, category),
            series: String::from(series),
            category: String::from(category),
            start,
            end,
            value: end - start,
        }
    }

    #[test]
    fn rect_height_matches_span_extent() {
        let y = ScaleLinear::new((0.0, 100.0), (200.0, 0.0));
        let shape = stacked_rect(&span("a", "x", 10.0, 60.0), 5.0, 20.0, &y, Brush::default());
        match shape {
            Shape::Rect(r) => {
                assert_eq!(r.rect.width(), 20.0);
                assert_eq!(r.rect.height(), 100.0);
                assert_eq!(r.rect.y0, 80.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn zero_value_span_is_still_a_rect() {
        let y = ScaleLinear::new((0.0, 100.0), (200.0, 0.0));
        let shape = stacked_rect(&span("a", "x", 30.0, 30.0), 0.0, 10.0, &y, Brush::default());
        match shape {
            Shape::Rect(r) => assert_eq!(r.rect.height(), 0.0),
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn band_path_closes_and_single_point_degenerates() {
        let band = series_band(&[(0.0, 100.0, 80.0), (10.0, 100.0, 70.0)]);
        assert!(!band.elements().is_empty());
        let sliver = series_band(&[(5.0, 50.0, 40.0)]);
        assert!(!sliver.elements().is_empty());
        assert!(series_band(&[]).elements().is_empty());
    }

    #[test]
    fn missing_categories_flatten_to_the_baseline() {
        let y = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        let spans = [span("a", "x", 0.0, 5.0)];
        let pts = series_band_points(&spans, "a", &[("x", 0.0), ("y", 10.0)], 100.0, &y);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1], (10.0, 100.0, 100.0));
        assert!(pts[0].2 < pts[0].1, "top sits above bottom in a y-down scene");
    }
}
