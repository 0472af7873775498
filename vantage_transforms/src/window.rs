// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback window filtering.

extern crate alloc;

use alloc::vec::Vec;

use vantage_core::{Dataset, Record};

/// Returns the records visible under an inclusive playback bound.
///
/// A record is visible when its ordering hint is `<= bound`. Records without a hint
/// (pure categorical data) are always visible, so mixing windowed and unwindowed charts
/// over one dataset behaves.
pub fn window_up_to(dataset: &Dataset, bound: f64) -> Vec<Record> {
    dataset
        .records()
        .iter()
        .filter(|r| r.order().is_none_or(|o| o <= bound))
        .cloned()
        .collect()
}

/// Returns the maximum finite primary measure among `records`.
///
/// This is the "window maximum" used by rescaling axis domain policies.
pub fn visible_max(records: &[Record]) -> Option<f64> {
    let mut max = f64::NEG_INFINITY;
    for r in records {
        let v = r.value();
        if v.is_finite() {
            max = max.max(v);
        }
    }
    max.is_finite().then_some(max)
}
