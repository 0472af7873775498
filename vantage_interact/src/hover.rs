// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state: tooltip content/placement and highlight dimming.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use vantage_charts::RelationRule;
use vantage_core::{Key, LayoutFrame, Record};

/// Tooltip content and placement for the container to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Content string, already formatted.
    pub text: String,
    /// Anchor position in scene coordinates, clamped to the container.
    pub pos: Point,
}

/// Offset from the pointer to the tooltip anchor.
const TOOLTIP_OFFSET: f64 = 12.0;

/// Builds the tooltip string for a hovered record.
pub fn tooltip_text(record: &Record, format_value: fn(f64) -> String) -> String {
    format!("{}: {}", record.key(), format_value(record.value()))
}

/// Places a tooltip of the given size near `pointer`, clamped so it never leaves
/// `bounds`.
///
/// The tooltip prefers sitting below-right of the pointer; when that would overflow, it
/// is pushed back inside rather than flipped, which keeps placement continuous as the
/// pointer moves.
pub fn clamp_tooltip(pointer: Point, width: f64, height: f64, bounds: Rect) -> Point {
    let x = (pointer.x + TOOLTIP_OFFSET)
        .min(bounds.x1 - width)
        .max(bounds.x0);
    let y = (pointer.y + TOOLTIP_OFFSET)
        .min(bounds.y1 - height)
        .max(bounds.y0);
    Point::new(x, y)
}

/// The dim-everything-unrelated highlight for one hovered key.
///
/// Hover state never leaks into layout: the highlight is recomputed from the current
/// frame on every pointer event and dropped wholesale on leave.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
    /// Keys to render dimmed while the hover lasts.
    pub dimmed: Vec<Key>,
}

impl Highlight {
    /// Computes the dim set for `hovered` over the frame's series shapes.
    pub fn compute(frame: &LayoutFrame, hovered: &Key, relation: RelationRule) -> Self {
        let dimmed = frame
            .shapes()
            .iter()
            .filter(|(key, _, _)| !relation.related(hovered, key))
            .map(|(key, _, _)| key.clone())
            .collect();
        Self { dimmed }
    }

    /// Returns `true` when nothing is dimmed.
    pub fn is_empty(&self) -> bool {
        self.dimmed.is_empty()
    }
}
