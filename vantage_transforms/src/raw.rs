// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input shapes, as handed over by the data-source collaborator.
//!
//! The pipeline is agnostic to how these were fetched or cached; it only sees parsed
//! in-memory structures. Three shapes cover the feeds this system consumes: a shared
//! axis with named columns, a flat row list, and a nested group tree.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One named numeric column, aligned to the table's axis.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedColumn {
    /// Series name.
    pub name: String,
    /// Values, aligned to [`RawData::Columns::axis`]. Shorter columns read as `0.0`
    /// past their end.
    pub values: Vec<f64>,
}

/// One observation row in a flat feed.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRow {
    /// Subset discriminator; the normalizer's `choice` selects one group.
    pub group: String,
    /// Series name. Empty for single-series feeds.
    pub series: String,
    /// Category label.
    pub category: String,
    /// Numeric measure.
    pub value: f64,
    /// Optional ordering hint (typically a year).
    pub order: Option<f64>,
}

/// One node of a nested group tree.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    /// Node name.
    pub name: String,
    /// Leaf value. Ignored for interior nodes, whose value is the sum of their leaves.
    pub value: f64,
    /// Child nodes; empty for leaves.
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Creates a leaf node.
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Creates an interior node.
    pub fn group(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            value: 0.0,
            children,
        }
    }

    /// Sums the values of all leaves under this node (its own value if it is a leaf).
    pub fn leaf_sum(&self) -> f64 {
        if self.children.is_empty() {
            self.value
        } else {
            self.children.iter().map(Self::leaf_sum).sum()
        }
    }
}

/// A raw fetched structure, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum RawData {
    /// Object-of-arrays: a shared ordering axis plus named series columns.
    Columns {
        /// The shared axis (e.g. years), also the record ordering hint.
        axis: Vec<f64>,
        /// Named series columns.
        series: Vec<NamedColumn>,
    },
    /// A flat row list, grouped by [`RawRow::group`].
    Rows(Vec<RawRow>),
    /// A forest of named groups with leaf values.
    Tree(Vec<RawNode>),
}
