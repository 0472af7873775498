// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized observations.

extern crate alloc;

use smallvec::SmallVec;

use crate::key::Key;

/// One normalized observation: a stable key, numeric measures, and an optional
/// ordering hint (typically the time axis value).
///
/// Records are immutable once built. Non-finite measures are coerced to `0.0` at
/// construction so `NaN` never propagates into layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    key: Key,
    measures: SmallVec<[f64; 4]>,
    order: Option<f64>,
}

impl Record {
    /// Creates a record, coercing non-finite measures to `0.0`.
    pub fn new(key: Key, measures: impl IntoIterator<Item = f64>) -> Self {
        Self {
            key,
            measures: measures
                .into_iter()
                .map(|v| if v.is_finite() { v } else { 0.0 })
                .collect(),
            order: None,
        }
    }

    /// Sets the ordering hint. Non-finite hints are discarded.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order.is_finite().then_some(order);
        self
    }

    /// Returns this record's key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the measure at `index`, or `0.0` if the record has fewer measures.
    pub fn measure(&self, index: usize) -> f64 {
        self.measures.get(index).copied().unwrap_or(0.0)
    }

    /// Returns the primary measure (index 0).
    pub fn value(&self) -> f64 {
        self.measure(0)
    }

    /// Returns all measures in declaration order.
    pub fn measures(&self) -> &[f64] {
        &self.measures
    }

    /// Returns the ordering hint, if any.
    pub fn order(&self) -> Option<f64> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn non_finite_measures_coerce_to_zero() {
        let r = Record::new(Key::name("a"), vec![1.0, f64::NAN, f64::INFINITY]);
        assert_eq!(r.measures(), &[1.0, 0.0, 0.0]);
        assert_eq!(r.value(), 1.0);
    }

    #[test]
    fn missing_measures_read_as_zero() {
        let r = Record::new(Key::name("a"), [2.0]);
        assert_eq!(r.measure(5), 0.0);
    }

    #[test]
    fn non_finite_order_hint_is_discarded() {
        let r = Record::new(Key::name("a"), [1.0]).with_order(f64::NAN);
        assert_eq!(r.order(), None);
    }
}
