// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Vantage layout engine.
//!
//! One parameterized pipeline replaces a family of per-chart draw routines: a
//! [`ChartDescriptor`] declares a chart's kind, stacking policy, domain policy, and
//! styling, and `layout` maps the current records plus a playback window into a keyed
//! [`vantage_core::LayoutFrame`].
//!
//! Layout is a pure function: identical inputs produce identical frames, with no hidden
//! call-to-call state. Anything that needs a display surface (text metrics) is injected
//! through [`TextMeasurer`], so the engine is testable headless.

#![no_std]

extern crate alloc;

mod area;
mod descriptor;
#[cfg(not(feature = "std"))]
mod float;
mod labels;
mod measure;
#[cfg(test)]
mod pipeline_tests;
mod radial;
mod scale;
mod stacked;
mod style;

pub use area::{ChartArea, Margins};
pub use descriptor::{ChartDescriptor, ChartKind, LayoutParams, LegendItem, RelationRule};
pub use labels::{RELAX_MAX_ITERS, relax_labels};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, truncate_to_width};
pub use radial::{MIN_SECTOR_RADIUS, rose_sector, slice_mid_angle};
pub use scale::{DomainPolicy, ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScalePoint};
pub use stacked::{polyline, series_band, series_band_points, stacked_rect};
pub use style::{ChartStyle, Size, default_series_fills};
