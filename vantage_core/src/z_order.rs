// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for generated shapes.
//!
//! Shapes carry an explicit `z_index` for render ordering. The layout layer assigns
//! these consistently so callers don't have to hand-tune paint order per chart.
//! Renderers should sort by `(z_index, Key)` for a deterministic tie-break.

/// Plot background and frame fills.
pub const BACKDROP: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID: i32 = -50;

/// Filled series shapes (bars, stacked spans, sectors).
pub const SERIES_FILL: i32 = 0;
/// Stroked series shapes (lines, connectors).
pub const SERIES_STROKE: i32 = 10;
/// Point glyphs drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Series and axis labels.
pub const LABELS: i32 = 40;
/// The empty-data placeholder glyph.
pub const PLACEHOLDER: i32 = 60;
/// Hover tooltips, above everything else.
pub const TOOLTIP: i32 = 90;
