// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout frames: the complete geometry of one render pass.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::dataset::Dataset;
use crate::key::Key;
use crate::shape::Shape;

/// The window/selection parameter a frame was computed for.
///
/// Frames are replaced wholesale on every pass; the tag travels with the frame so the
/// scene and the interaction layer can tell which inputs produced the geometry they
/// are looking at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameTag {
    /// No visible records. The renderer maps this to a placeholder, never an error.
    Empty,
    /// The full dataset, no windowing.
    Full,
    /// All records with an ordering hint up to (and including) `bound`.
    Window {
        /// Inclusive upper bound on record ordering hints.
        bound: f64,
    },
}

impl FrameTag {
    /// Returns `true` for the empty tag.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The computed geometry for one render pass.
///
/// A frame holds **series shapes**, keyed by record identity (one shape per record key,
/// so diffs map one-to-one onto data), and **guide shapes** (series labels, connectors,
/// legends) under synthetic keys. Guide keys share the scene namespace with series keys,
/// so layout code namespaces them (e.g. `label:France`).
#[derive(Clone, Debug)]
pub struct LayoutFrame {
    tag: FrameTag,
    shapes: Vec<(Key, i32, Shape)>,
    guides: Vec<(Key, i32, Shape)>,
    index: HashMap<Key, usize>,
}

impl LayoutFrame {
    /// Creates an empty frame with the given tag.
    pub fn new(tag: FrameTag) -> Self {
        Self {
            tag,
            shapes: Vec::new(),
            guides: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates the canonical "no data" frame.
    pub fn empty() -> Self {
        Self::new(FrameTag::Empty)
    }

    /// Returns the tag this frame was computed for.
    pub fn tag(&self) -> FrameTag {
        self.tag
    }

    /// Adds a series shape.
    ///
    /// A key maps to exactly one shape; pushing an existing key replaces its shape.
    pub fn push(&mut self, key: Key, z_index: i32, shape: Shape) {
        match self.index.get(&key) {
            Some(&at) => self.shapes[at] = (key, z_index, shape),
            None => {
                self.index.insert(key.clone(), self.shapes.len());
                self.shapes.push((key, z_index, shape));
            }
        }
    }

    /// Adds a guide shape under a synthetic key.
    pub fn push_guide(&mut self, key: Key, z_index: i32, shape: Shape) {
        self.guides.push((key, z_index, shape));
    }

    /// Looks up a series shape by key.
    pub fn get(&self, key: &Key) -> Option<&Shape> {
        self.index.get(key).map(|&at| &self.shapes[at].2)
    }

    /// Returns the series shapes in insertion order.
    pub fn shapes(&self) -> &[(Key, i32, Shape)] {
        &self.shapes
    }

    /// Returns the guide shapes in insertion order.
    pub fn guides(&self) -> &[(Key, i32, Shape)] {
        &self.guides
    }

    /// Iterates series shapes followed by guide shapes.
    pub fn all(&self) -> impl Iterator<Item = &(Key, i32, Shape)> {
        self.shapes.iter().chain(self.guides.iter())
    }

    /// Returns the number of series shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the frame has no shapes at all.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.guides.is_empty()
    }

    /// Drops series shapes whose key no longer exists in `dataset`.
    ///
    /// Stale keys are dropped, not left dangling: the scene will emit exits for them on
    /// the next tick instead of retaining orphaned geometry.
    pub fn retain_known_keys(&mut self, dataset: &Dataset) {
        if self.shapes.iter().all(|(k, _, _)| dataset.contains_key(k)) {
            return;
        }
        self.shapes.retain(|(k, _, _)| dataset.contains_key(k));
        self.index.clear();
        for (at, (k, _, _)) in self.shapes.iter().enumerate() {
            self.index.insert(k.clone(), at);
        }
    }
}
