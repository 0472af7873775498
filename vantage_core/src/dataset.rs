// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The current normalized record set.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::key::Key;
use crate::record::Record;

/// The normalized record list for one chart, with a by-key index.
///
/// A dataset is recreated wholesale on every raw-data reload; downstream state
/// (selections, retained shapes) is reconciled against the new instance rather
/// than patched in place.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    index: HashMap<Key, usize>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from records.
    ///
    /// If two records share a key, the later one replaces the earlier one; a key maps
    /// to exactly one record.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut out = Self::new();
        for record in records {
            match out.index.get(record.key()) {
                Some(&at) => out.records[at] = record,
                None => {
                    out.index.insert(record.key().clone(), out.records.len());
                    out.records.push(record);
                }
            }
        }
        out
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by key.
    pub fn get(&self, key: &Key) -> Option<&Record> {
        self.index.get(key).map(|&at| &self.records[at])
    }

    /// Returns `true` if `key` identifies a record in this dataset.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the maximum finite value of the given measure across all records.
    ///
    /// This is the "global maximum" used by stable-axis domain policies.
    pub fn max_measure(&self, index: usize) -> Option<f64> {
        let mut max = f64::NEG_INFINITY;
        for r in &self.records {
            let v = r.measure(index);
            if v.is_finite() {
                max = max.max(v);
            }
        }
        max.is_finite().then_some(max)
    }

    /// Returns the `(min, max)` range of ordering hints, ignoring records without one.
    pub fn order_bounds(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in &self.records {
            if let Some(o) = r.order() {
                min = min.min(o);
                max = max.max(o);
            }
        }
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}
