// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction and playback for Vantage charts.
//!
//! This crate owns everything transient about a mounted chart:
//! - [`ViewState`]: selection, hover target, playback position, last render
//!   parameters for resize replay.
//! - Hit-testing and hover: pointer to key, key to tooltip and highlight dimming.
//! - [`Playback`]: a deterministic, externally-clocked advance schedule.
//! - [`ChartInstance`]: the per-mount handle tying a descriptor, a dataset, the
//!   retained scene, and the above together, replaying the full pipeline on resize or
//!   playback ticks.
//!
//! Nothing here draws. Renderers consume the [`vantage_core::ShapeDiff`] streams the
//! instance emits.

#![no_std]

extern crate alloc;

mod hit;
mod hover;
mod instance;
mod playback;
mod view_state;

pub use hit::hit_test;
pub use hover::{Highlight, Tooltip, clamp_tooltip, tooltip_text};
pub use instance::{ChartInstance, SelectFn};
pub use playback::{Playback, PlaybackState};
pub use view_state::ViewState;
