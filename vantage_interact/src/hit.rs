// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit-testing over layout frames.

use kurbo::Point;
use vantage_core::{Key, LayoutFrame, Shape};

/// Returns the topmost series key under `pointer`, if any.
///
/// Rects hit by containment, points by radius, paths by bounding box (an approximation
/// that matches how these charts treat sectors and bands). Only series shapes are
/// targets; guides (labels, grid lines) are inert. Ties on z-index go to the later
/// shape, matching paint order.
pub fn hit_test(frame: &LayoutFrame, pointer: Point) -> Option<&Key> {
    let mut best: Option<(i32, &Key)> = None;
    for (key, z, shape) in frame.shapes() {
        if !contains(shape, pointer) {
            continue;
        }
        if best.is_none_or(|(bz, _)| *z >= bz) {
            best = Some((*z, key));
        }
    }
    best.map(|(_, key)| key)
}

fn contains(shape: &Shape, p: Point) -> bool {
    match shape {
        Shape::Point(s) => s.center.distance(p) <= s.radius.max(HIT_SLOP),
        Shape::Rect(_) | Shape::Path(_) => {
            shape.bounds().is_some_and(|b| b.contains(p))
        }
        Shape::Text(_) => false,
    }
}

/// Minimum hit radius for point shapes, so tiny dots stay targetable.
const HIT_SLOP: f64 = 4.0;
