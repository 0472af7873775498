// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record transforms for the Vantage pipeline.
//!
//! This crate provides:
//! - a fail-soft normalizer from raw fetched structures into keyed [`vantage_core::Record`]s,
//! - a playback window filter over record ordering hints,
//! - stacking with a declared series order and a fixed baseline, and
//! - top-k "Others" aggregation.
//!
//! All operations are pure functions of their inputs: identical inputs produce identical
//! outputs, and bad inputs degrade to empty outputs rather than errors, so a chart with
//! nothing to show renders a placeholder instead of failing.

#![no_std]

extern crate alloc;

mod aggregate;
mod normalize;
mod raw;
mod stack;
mod window;

pub use aggregate::aggregate_others;
pub use normalize::normalize;
pub use raw::{NamedColumn, RawData, RawNode, RawRow};
pub use stack::{SeriesOrder, StackBaseline, StackPolicy, StackedSpan, stack};
pub use window::{visible_max, window_up_to};
