// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable observation identity.

extern crate alloc;

use alloc::string::String;

/// Identity of one normalized observation.
///
/// Keys are the unit of layout and reconciliation: the shape a key maps to in one frame
/// animates into the shape it maps to in the next, so identity must stay stable across
/// reloads for transitions to be continuous.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A bare positional index, for data without meaningful names.
    Index(u64),
    /// A named category.
    Name(String),
    /// A composite `(series, category)` pair, used by stacked and stream data where one
    /// series contributes one span per category.
    Series {
        /// Series (stack layer) name.
        series: String,
        /// Category (stack group) name.
        category: String,
    },
}

impl Key {
    /// Creates a named key.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a composite series/category key.
    pub fn series(series: impl Into<String>, category: impl Into<String>) -> Self {
        Self::Series {
            series: series.into(),
            category: category.into(),
        }
    }

    /// Returns the series name for composite keys.
    pub fn series_name(&self) -> Option<&str> {
        match self {
            Self::Series { series, .. } => Some(series),
            _ => None,
        }
    }

    /// Returns the category label, if this key carries one.
    ///
    /// Named keys are their own category.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
            Self::Series { category, .. } => Some(category),
        }
    }
}

impl core::fmt::Display for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Name(name) => f.write_str(name),
            Self::Series { series, category } => write!(f, "{series}/{category}"),
        }
    }
}
