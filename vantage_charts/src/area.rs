// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart area arrangement.
//!
//! A measure/arrange split in miniature: margins are measured first (from tick labels
//! and guide thickness), then the plot rectangle is arranged inside the view. Layout
//! functions only ever see the resulting [`ChartArea`], so a resize is just a re-run
//! with a new view size.

use kurbo::{Point, Rect};

use crate::measure::TextMeasurer;

/// Per-side margins around the plot rectangle, in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Left margin (value axis labels).
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin (title).
    pub top: f64,
    /// Bottom margin (category axis labels).
    pub bottom: f64,
}

impl Margins {
    /// Creates margins from the four sides.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Computes a left margin wide enough for `tick_labels` plus tick decoration.
    pub fn measure_left(
        measurer: &dyn TextMeasurer,
        tick_labels: &[&str],
        tick_padding: f64,
        font_size: f64,
    ) -> f64 {
        let mut max_w = 0.0_f64;
        for s in tick_labels {
            let (w, _h) = measurer.measure(s, font_size);
            max_w = max_w.max(w);
        }
        max_w + tick_padding.max(0.0)
    }
}

/// The arranged drawing area for one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartArea {
    /// Outer view bounds, origin at (0, 0).
    pub view: Rect,
    /// Plot rectangle the scales map into.
    pub plot: Rect,
}

impl ChartArea {
    /// Arranges a plot rectangle inside a view of the given size.
    ///
    /// Margins larger than the view collapse the plot to a zero-size rectangle rather
    /// than inverting it.
    pub fn arrange(width: f64, height: f64, margins: Margins) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let x0 = margins.left.max(0.0).min(width);
        let y0 = margins.top.max(0.0).min(height);
        let x1 = (width - margins.right.max(0.0)).max(x0);
        let y1 = (height - margins.bottom.max(0.0)).max(y0);
        Self {
            view: Rect::new(0.0, 0.0, width, height),
            plot: Rect::new(x0, y0, x1, y1),
        }
    }

    /// Returns the plot center, used as the origin for radial charts.
    pub fn center(&self) -> Point {
        Point::new(
            (self.plot.x0 + self.plot.x1) / 2.0,
            (self.plot.y0 + self.plot.y1) / 2.0,
        )
    }

    /// Returns the largest radius that fits inside the plot rectangle.
    pub fn max_radius(&self) -> f64 {
        (self.plot.width().min(self.plot.height()) / 2.0).max(0.0)
    }

    /// Horizontal extent of the plot as a scale range, left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.plot.x0, self.plot.x1)
    }

    /// Vertical extent of the plot as a scale range, bottom to top.
    ///
    /// Inverted so larger data values map upward in a y-down scene.
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot.y1, self.plot.y0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn margins_inset_the_plot() {
        let area = ChartArea::arrange(640.0, 480.0, Margins::new(50.0, 20.0, 10.0, 30.0));
        assert_eq!(area.plot, Rect::new(50.0, 10.0, 620.0, 450.0));
        assert_eq!(area.y_range(), (450.0, 10.0));
    }

    #[test]
    fn oversized_margins_collapse_instead_of_inverting() {
        let area = ChartArea::arrange(100.0, 100.0, Margins::new(80.0, 80.0, 0.0, 0.0));
        assert_eq!(area.plot.width(), 0.0);
        assert!(area.plot.x0 <= area.plot.x1);
    }

    #[test]
    fn radius_fits_the_shorter_side() {
        let area = ChartArea::arrange(400.0, 300.0, Margins::default());
        assert_eq!(area.max_radius(), 150.0);
        assert_eq!(area.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn left_margin_tracks_widest_tick_label() {
        let m = HeuristicTextMeasurer;
        let w = Margins::measure_left(&m, &["10", "1000"], 6.0, 10.0);
        assert_eq!(w, 0.6 * 10.0 * 4.0 + 6.0);
    }

    #[test]
    fn left_margin_measures_through_an_erased_measurer() {
        // Call sites hold `&dyn TextMeasurer`, so the erased form must be accepted.
        let m: &dyn TextMeasurer = &HeuristicTextMeasurer;
        assert_eq!(Margins::measure_left(m, &["10"], 0.0, 10.0), 12.0);
    }
}
