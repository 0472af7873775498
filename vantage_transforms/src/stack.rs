// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack layout: per-category offset accumulation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;
use vantage_core::{Key, Record};

/// Stack baseline alignment. Fixed per chart instance at descriptor construction,
/// never inferred from the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackBaseline {
    /// Spans accumulate upward from zero (negative values downward), bar-chart style.
    #[default]
    Floor,
    /// Each category's stack is centered on zero, streamgraph style. Intended for
    /// non-negative values; widths use the absolute value.
    Center,
}

/// The rule ordering series within each stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesOrder {
    /// An explicit order list. Series not listed follow in first-seen order.
    Declared(Vec<String>),
    /// Descending total across all categories, ties broken by name.
    TotalDesc,
}

/// Stacking parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct StackPolicy {
    /// Baseline alignment.
    pub baseline: StackBaseline,
    /// Series ordering rule.
    pub order: SeriesOrder,
    /// Fixed inter-series padding, in data units, inserted between consecutive spans.
    /// Padding shifts spans apart; it never changes a span's extent.
    pub padding: f64,
}

impl Default for StackPolicy {
    fn default() -> Self {
        Self {
            baseline: StackBaseline::Floor,
            order: SeriesOrder::TotalDesc,
            padding: 0.0,
        }
    }
}

/// One stacked span: the offset interval a record occupies within its category.
///
/// `end - start` always equals the span's extent (`value` for floor stacks of
/// positive data), so stacking conserves the unstacked input sum per category.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSpan {
    /// The originating record's key.
    pub key: Key,
    /// Series name.
    pub series: String,
    /// Category name.
    pub category: String,
    /// Offset where the span starts.
    pub start: f64,
    /// Offset where the span ends. Below `start` for negative floor-stacked values.
    pub end: f64,
    /// The record's original value.
    pub value: f64,
}

/// Stacks records by category.
///
/// Records whose key carries no category (bare indices) are skipped. Within each
/// category, series are processed in the policy's order and offsets accumulate with
/// fixed padding between consecutive spans. Span order in the output is category-major
/// (categories in first-seen order), then series order.
pub fn stack(records: &[Record], policy: &StackPolicy) -> Vec<StackedSpan> {
    let mut categories: Vec<&str> = Vec::new();
    let mut series_order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut by_cell: HashMap<(&str, &str), &Record> = HashMap::new();

    for r in records {
        let Some(category) = r.key().category() else {
            continue;
        };
        let series = r.key().series_name().unwrap_or(category);
        if !categories.contains(&category) {
            categories.push(category);
        }
        if !series_order.contains(&series) {
            series_order.push(series);
        }
        *totals.entry(series).or_insert(0.0) += r.value().abs();
        by_cell.insert((series, category), r);
    }

    match &policy.order {
        SeriesOrder::Declared(declared) => {
            let mut ordered: Vec<&str> = declared
                .iter()
                .map(String::as_str)
                .filter(|s| series_order.contains(s))
                .collect();
            for s in &series_order {
                if !ordered.contains(s) {
                    ordered.push(s);
                }
            }
            series_order = ordered;
        }
        SeriesOrder::TotalDesc => {
            series_order.sort_by(|a, b| {
                let ta = totals.get(a).copied().unwrap_or(0.0);
                let tb = totals.get(b).copied().unwrap_or(0.0);
                tb.partial_cmp(&ta)
                    .unwrap_or(core::cmp::Ordering::Equal)
                    .then_with(|| a.cmp(b))
            });
        }
    }

    let mut out = Vec::new();
    for category in categories {
        let cell_records: SmallVec<[(&str, &Record); 8]> = series_order
            .iter()
            .filter_map(|&s| by_cell.get(&(s, category)).map(|&r| (s, r)))
            .collect();

        match policy.baseline {
            StackBaseline::Floor => {
                let mut up = 0.0_f64;
                let mut down = 0.0_f64;
                for (series, r) in &cell_records {
                    let v = r.value();
                    let (start, end) = if v >= 0.0 {
                        let span = (up, up + v);
                        up = span.1 + policy.padding;
                        span
                    } else {
                        let span = (down, down + v);
                        down = span.1 - policy.padding;
                        span
                    };
                    out.push(StackedSpan {
                        key: r.key().clone(),
                        series: String::from(*series),
                        category: String::from(category),
                        start,
                        end,
                        value: v,
                    });
                }
            }
            StackBaseline::Center => {
                let total: f64 = cell_records.iter().map(|(_, r)| r.value().abs()).sum();
                let n = cell_records.len();
                let padded = total + policy.padding * n.saturating_sub(1) as f64;
                let mut cursor = -padded / 2.0;
                for (series, r) in &cell_records {
                    let width = r.value().abs();
                    out.push(StackedSpan {
                        key: r.key().clone(),
                        series: String::from(*series),
                        category: String::from(category),
                        start: cursor,
                        end: cursor + width,
                        value: r.value(),
                    });
                    cursor += width + policy.padding;
                }
            }
        }
    }
    out
}
