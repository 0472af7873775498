// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared visual style for chart layout.

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A width/height pair in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visual constants shared by the layout functions.
///
/// Everything here is plain data so a host can restyle a chart without touching layout
/// code. Defaults match the demo renderer.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    /// Fill palette for series, cycled by series index.
    pub series_fills: Vec<Brush>,
    /// Label and tick font size.
    pub font_size: f64,
    /// Guide line color (grid, axes).
    pub guide_color: Color,
    /// Label text color.
    pub label_color: Color,
    /// Alpha multiplier applied to non-highlighted series while one is highlighted.
    pub dim_alpha: f32,
    /// Minimum vertical spacing between relaxed labels.
    pub label_spacing: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_fills: default_series_fills(8),
            font_size: 12.0,
            guide_color: css::BLACK.with_alpha(40.0 / 255.0),
            label_color: css::BLACK,
            dim_alpha: 0.25,
            label_spacing: 20.0,
        }
    }
}

impl ChartStyle {
    /// Returns the fill for the series at `index`, cycling the palette.
    pub fn series_fill(&self, index: usize) -> Brush {
        if self.series_fills.is_empty() {
            return Brush::Solid(css::GRAY);
        }
        self.series_fills[index % self.series_fills.len()].clone()
    }

    /// Returns `fill` dimmed by [`ChartStyle::dim_alpha`].
    ///
    /// Only solid brushes are dimmed; gradients pass through unchanged.
    pub fn dimmed(&self, fill: &Brush) -> Brush {
        match fill {
            Brush::Solid(c) => Brush::Solid(c.multiply_alpha(self.dim_alpha)),
            other => other.clone(),
        }
    }
}

/// Returns a categorical fill palette suitable for stacked series.
///
/// Colors come from named CSS colors and repeat when `count` exceeds the palette
/// length.
pub fn default_series_fills(count: usize) -> Vec<Brush> {
    const PALETTE: [Color; 8] = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];

    (0..count)
        .map(|i| Brush::Solid(PALETTE[i % PALETTE.len()]))
        .collect()
}
