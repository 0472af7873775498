// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vantage_demo`.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use vantage_core::{Key, Shape, ShapeDiff, TextAnchor};

/// A retained shape map that mirrors one chart container.
///
/// Diffs from the reconciler are applied in order; serialization walks the
/// retained shapes sorted by `(z_index, key)` so output is deterministic.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    shapes: HashMap<Key, (i32, Shape)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[ShapeDiff]) {
        for diff in diffs {
            match diff {
                ShapeDiff::Enter {
                    key, z_index, new, ..
                }
                | ShapeDiff::Update {
                    key, z_index, new, ..
                } => {
                    self.shapes.insert(key.clone(), (*z_index, new.clone()));
                }
                ShapeDiff::Exit { key, .. } => {
                    self.shapes.remove(key);
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        };

        let mut out = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" "#,
                r#"width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
                "\n"
            ),
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );

        let mut entries: Vec<_> = self.shapes.iter().collect();
        entries.sort_by(|a, b| (a.1.0, a.0).cmp(&(b.1.0, b.0)));
        for (_key, (_z, shape)) in entries {
            write_shape(&mut out, shape);
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for (_z, shape) in self.shapes.values() {
            let b = match shape {
                Shape::Text(t) => text_extents(t.pos.x, t.pos.y, t.font_size, t.anchor, &t.text),
                _ => shape.bounds()?,
            };
            bounds = Some(bounds.map_or(b, |r| r.union(b)));
        }
        // A padding margin so strokes at the edge survive.
        bounds.map(|r| r.inflate(10.0, 10.0))
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    // Infallible writer; the `let _` keeps fmt::Write's Result quiet.
    let _ = match shape {
        Shape::Rect(r) => write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            r.rect.x0,
            r.rect.y0,
            r.rect.width(),
            r.rect.height(),
            paint_attrs("fill", &r.fill),
        ),
        Shape::Point(p) => write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            p.center.x,
            p.center.y,
            p.radius,
            paint_attrs("fill", &p.fill),
        ),
        Shape::Path(p) => {
            let stroke = if p.stroke_width > 0.0 {
                format!(
                    r#"{} stroke-width="{}""#,
                    paint_attrs("stroke", &p.stroke),
                    p.stroke_width
                )
            } else {
                String::new()
            };
            write!(
                out,
                r#"<path d="{}"{}{}/>"#,
                p.path.to_svg(),
                paint_attrs("fill", &p.fill),
                stroke,
            )
        }
        Shape::Text(t) => {
            let anchor = match t.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            write!(
                out,
                concat!(
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" "#,
                    r#"text-anchor="{}"{}>{}</text>"#
                ),
                t.pos.x,
                t.pos.y,
                t.font_size,
                anchor,
                paint_attrs("fill", &t.fill),
                escape_xml(&t.text),
            )
        }
    };
    out.push('\n');
}

/// Renders a brush as ` name="#rrggbb"` plus an opacity attribute when not opaque.
/// Non-solid brushes fall back to `none`.
fn paint_attrs(name: &str, brush: &Brush) -> String {
    let Brush::Solid(color) = brush else {
        return format!(r#" {name}="none""#);
    };
    let rgba = color.to_rgba8();
    let mut attrs = format!(r##" {name}="#{:02x}{:02x}{:02x}""##, rgba.r, rgba.g, rgba.b);
    if rgba.a != 255 {
        let _ = write!(attrs, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
    attrs
}

/// Rough anchored text extents, assuming ~0.6em per glyph and a midline at `y`.
fn text_extents(x: f64, y: f64, font_size: f64, anchor: TextAnchor, text: &str) -> Rect {
    let width = 0.6 * font_size * text.chars().count() as f64;
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y - 0.5 * font_size, x1, y + 0.5 * font_size)
}

fn escape_xml(s: &str) -> String {
    s.chars().fold(String::with_capacity(s.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
        out
    })
}
