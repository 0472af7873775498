// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space shape descriptors.
//!
//! These are the payloads layout produces and the scene retains: plain geometry plus
//! paint, with no renderer handles. Equality is structural, which is what lets the scene
//! treat "same payload" as "no visible transition".

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape as _};
use peniko::Brush;

/// Horizontal text anchoring, in SVG terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    #[default]
    Start,
    /// Anchor at the center of the text run.
    Middle,
    /// Anchor at the end of the text run.
    End,
}

/// An axis-aligned filled rectangle (bars, stacked spans, swatches).
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled circle (scatter points, bump nodes, bubble glyphs).
#[derive(Clone, Debug, PartialEq)]
pub struct PointShape {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// An arbitrary filled/stroked path (sectors, series lines, map outlines).
#[derive(Clone, Debug)]
pub struct PathShape {
    /// Path in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is `0.0`.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl PartialEq for PathShape {
    fn eq(&self, other: &Self) -> bool {
        self.path.elements() == other.path.elements()
            && self.fill == other.fill
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
    }
}

/// An unshaped text run (labels, tooltips, the empty-data placeholder).
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Fill paint.
    pub fill: Brush,
}

/// One shape in a layout frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled rectangle.
    Rect(RectShape),
    /// Filled circle.
    Point(PointShape),
    /// Filled/stroked path.
    Path(PathShape),
    /// Text run.
    Text(TextShape),
}

impl Shape {
    /// Creates a rect shape.
    pub fn rect(rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::Rect(RectShape {
            rect,
            fill: fill.into(),
        })
    }

    /// Creates a point shape.
    pub fn point(center: Point, radius: f64, fill: impl Into<Brush>) -> Self {
        Self::Point(PointShape {
            center,
            radius,
            fill: fill.into(),
        })
    }

    /// Creates a filled path shape with no stroke.
    pub fn path(path: BezPath, fill: impl Into<Brush>) -> Self {
        Self::Path(PathShape {
            path,
            fill: fill.into(),
            stroke: Brush::default(),
            stroke_width: 0.0,
        })
    }

    /// Creates a stroked path shape with no fill.
    pub fn stroked_path(path: BezPath, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self::Path(PathShape {
            path,
            fill: Brush::Solid(peniko::Color::TRANSPARENT),
            stroke: stroke.into(),
            stroke_width,
        })
    }

    /// Creates a text shape.
    pub fn text(pos: Point, text: impl Into<String>, font_size: f64) -> Self {
        Self::Text(TextShape {
            pos,
            text: text.into(),
            font_size,
            anchor: TextAnchor::Start,
            fill: Brush::default(),
        })
    }

    /// Returns the fill paint.
    pub fn fill(&self) -> &Brush {
        match self {
            Self::Rect(s) => &s.fill,
            Self::Point(s) => &s.fill,
            Self::Path(s) => &s.fill,
            Self::Text(s) => &s.fill,
        }
    }

    /// Replaces the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self {
            Self::Rect(s) => s.fill = fill,
            Self::Point(s) => s.fill = fill,
            Self::Path(s) => s.fill = fill,
            Self::Text(s) => s.fill = fill,
        }
        self
    }

    /// Returns the bounding rectangle, if the shape has defined geometric bounds.
    ///
    /// Text bounds depend on shaping and are estimated downstream by measurers.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(s) => Some(s.rect),
            Self::Point(s) => Some(Rect::new(
                s.center.x - s.radius,
                s.center.y - s.radius,
                s.center.x + s.radius,
                s.center.y + s.radius,
            )),
            Self::Path(s) => Some(s.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn equal_payloads_compare_equal() {
        let a = Shape::rect(Rect::new(0.0, 0.0, 10.0, 10.0), css::ORANGE);
        let b = Shape::rect(Rect::new(0.0, 0.0, 10.0, 10.0), css::ORANGE);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_fill(css::CRIMSON));
    }

    #[test]
    fn point_bounds_cover_the_radius() {
        let s = Shape::point(Point::new(5.0, 5.0), 2.0, css::ORANGE);
        assert_eq!(s.bounds(), Some(Rect::new(3.0, 3.0, 7.0, 7.0)));
    }
}
