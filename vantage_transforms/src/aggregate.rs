// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-k series aggregation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use vantage_core::{Key, Record};

/// Folds all but the `keep` largest series into a synthetic series.
///
/// Series rank by total absolute primary measure. Records of kept series pass through
/// unchanged and in order; records of folded series are summed per category into one
/// record keyed `(others_label, category)`, appended after the kept records in
/// first-seen category order. Records without a composite key pass through untouched.
///
/// This is the one sanctioned exception to key bijection between records and shapes:
/// several input keys may collapse into one `Others` key.
pub fn aggregate_others(records: &[Record], keep: usize, others_label: &str) -> Vec<Record> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in records {
        if let Some(series) = r.key().series_name() {
            *totals.entry(series).or_insert(0.0) += r.value().abs();
        }
    }
    if totals.len() <= keep {
        return records.to_vec();
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(core::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    let kept: HashSet<&str> = ranked[..keep].iter().map(|&(s, _)| s).collect();

    let mut out = Vec::new();
    let mut folded_order: Vec<String> = Vec::new();
    let mut folded: HashMap<String, (f64, Option<f64>)> = HashMap::new();
    for r in records {
        match r.key().series_name() {
            Some(series) if !kept.contains(series) => {
                let category = r.key().category().unwrap_or_default();
                let entry = folded
                    .entry(String::from(category))
                    .or_insert_with(|| {
                        folded_order.push(String::from(category));
                        (0.0, r.order())
                    });
                entry.0 += r.value();
            }
            _ => out.push(r.clone()),
        }
    }
    for category in folded_order {
        let (sum, order) = folded[&category];
        let mut record = Record::new(Key::series(others_label, category), [sum]);
        if let Some(order) = order {
            record = record.with_order(order);
        }
        out.push(record);
    }
    out
}
