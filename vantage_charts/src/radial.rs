// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial (rose) geometry.
//!
//! A rose chart assigns each category a fixed angular slice by index; the slice's outer
//! radius encodes the value. Angles are radians, measured from the positive x axis.

use kurbo::{BezPath, Circle, Point, Shape as _};

/// Smallest outer radius a sector is allowed to collapse to.
///
/// Zero-value categories still get a visible sliver of a slice so the category remains
/// hover-targetable.
pub const MIN_SECTOR_RADIUS: f64 = 1.0;

/// Curve flattening tolerance for sector outlines.
const SECTOR_TOLERANCE: f64 = 0.1;

/// Builds the sector path for the category at `index` out of `count` slices.
///
/// The angular slice size is `2π / count`, so slice placement is a deterministic
/// function of category index alone. `radius` is clamped below by
/// [`MIN_SECTOR_RADIUS`], and a non-positive `count` yields an empty path.
pub fn rose_sector(center: Point, radius: f64, index: usize, count: usize) -> BezPath {
    if count == 0 {
        return BezPath::new();
    }
    let slice = core::f64::consts::TAU / count as f64;
    let start = slice * index as f64;
    let radius = radius.max(MIN_SECTOR_RADIUS);

    let circle = Circle::new(center, radius);
    let segment = circle.segment(0.0, start, slice);
    segment.path_elements(SECTOR_TOLERANCE).collect()
}

/// Returns the mid-angle of the slice at `index`, used for anchoring labels and
/// tooltips outside the sector.
pub fn slice_mid_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let slice = core::f64::consts::TAU / count as f64;
    slice * index as f64 + slice / 2.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape as _;

    use super::*;

    #[test]
    fn sector_bounds_stay_inside_the_radius() {
        let center = Point::new(100.0, 100.0);
        let path = rose_sector(center, 40.0, 0, 8);
        let bounds = path.bounding_box();
        assert!(!path.elements().is_empty());
        assert!(bounds.x1 <= 140.0 + 1e-6);
        assert!(bounds.y1 <= 140.0 + 1e-6);
    }

    #[test]
    fn zero_radius_clamps_to_a_sliver() {
        let path = rose_sector(Point::new(0.0, 0.0), 0.0, 2, 4);
        let bounds = path.bounding_box();
        assert!(bounds.width() > 0.0 || bounds.height() > 0.0);
    }

    #[test]
    fn slice_angles_advance_by_index() {
        let a0 = slice_mid_angle(0, 4);
        let a1 = slice_mid_angle(1, 4);
        assert!((a1 - a0 - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn empty_category_set_yields_empty_path() {
        assert!(rose_sector(Point::new(0.0, 0.0), 10.0, 0, 0).elements().is_empty());
    }
}
