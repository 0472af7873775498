// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart descriptors.
//!
//! One descriptor replaces a family of near-identical draw routines: it declares the
//! chart kind, stacking policy, domain policy, relation rule, and styling, and
//! [`ChartDescriptor::layout`] turns the current dataset plus a playback window into a
//! keyed [`LayoutFrame`]. Layout is pure: identical inputs yield identical frames.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use peniko::Brush;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use vantage_core::{
    Dataset, FrameTag, Key, LayoutFrame, Record, Shape, TextAnchor, TextShape, z_order,
};
use vantage_transforms::{
    StackBaseline, StackPolicy, StackedSpan, stack, visible_max, window_up_to,
};

use crate::area::{ChartArea, Margins};
use crate::labels::{RELAX_MAX_ITERS, relax_labels};
use crate::measure::TextMeasurer;
use crate::radial::{rose_sector, slice_mid_angle};
use crate::scale::{DomainPolicy, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScalePoint};
use crate::stacked::{polyline, series_band, series_band_points, stacked_rect};
use crate::style::ChartStyle;

/// The chart families the pipeline can lay out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Floor-stacked vertical bars, one band per category.
    StackedBars,
    /// Center-stacked stream bands over an ordered category axis.
    Stream,
    /// Rose chart: fixed angular slices, radius encodes value.
    Rose,
    /// Bump chart: one line per series over an ordered category axis.
    Bump,
}

/// What counts as "related" to a hovered key when dimming everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationRule {
    /// Keys sharing the hovered key's series.
    SameSeries,
    /// Keys sharing the hovered key's category.
    SameCategory,
    /// Only the hovered key itself.
    SameKey,
}

impl RelationRule {
    /// Returns `true` when `other` should stay at full strength while `hovered` is
    /// hovered.
    pub fn related(&self, hovered: &Key, other: &Key) -> bool {
        if hovered == other {
            return true;
        }
        match self {
            Self::SameKey => false,
            Self::SameSeries => match (hovered.series_name(), other.series_name()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Self::SameCategory => match (hovered.category(), other.category()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// One legend entry for the container to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Series label.
    pub label: String,
    /// Swatch fill.
    pub fill: Brush,
}

/// Per-pass layout parameters.
///
/// These are the values the playback/resize driver replays: canvas dimensions, the
/// current window bound, and the precomputed all-time maximum for
/// [`DomainPolicy::Global`] charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Canvas width in scene units.
    pub width: f64,
    /// Canvas height in scene units.
    pub height: f64,
    /// Inclusive playback bound over record ordering hints; `None` shows everything.
    pub window: Option<f64>,
    /// All-time maximum for global-domain charts.
    pub global_max: Option<f64>,
}

impl LayoutParams {
    /// Creates unwindowed parameters for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            window: None,
            global_max: None,
        }
    }

    /// Sets the playback window bound.
    pub fn with_window(mut self, bound: f64) -> Self {
        self.window = Some(bound);
        self
    }

    /// Sets the precomputed all-time maximum.
    pub fn with_global_max(mut self, max: f64) -> Self {
        self.global_max = Some(max);
        self
    }

    /// Returns these parameters at a new canvas size, for resize replay.
    pub fn resized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A chart's declarative configuration.
#[derive(Clone, Debug)]
pub struct ChartDescriptor {
    /// Chart family.
    pub kind: ChartKind,
    /// Stacking policy (baseline, series order, padding). Fixed at construction.
    pub stack: StackPolicy,
    /// Axis domain policy. Fixed at construction.
    pub domain: DomainPolicy,
    /// Hover relation rule for highlight dimming.
    pub relation: RelationRule,
    /// Visual style.
    pub style: ChartStyle,
    /// Value formatter for tick and tooltip text.
    pub format_value: fn(f64) -> String,
}

impl ChartDescriptor {
    /// Creates a descriptor with per-kind defaults.
    ///
    /// Streams default to a centered baseline and roses to key-only relation; everything
    /// else starts from floor stacking and same-series dimming.
    pub fn new(kind: ChartKind) -> Self {
        let baseline = if kind == ChartKind::Stream {
            StackBaseline::Center
        } else {
            StackBaseline::Floor
        };
        let stack = StackPolicy {
            baseline,
            ..StackPolicy::default()
        };
        let relation = match kind {
            ChartKind::Rose => RelationRule::SameKey,
            _ => RelationRule::SameSeries,
        };
        Self {
            kind,
            stack,
            domain: DomainPolicy::Window,
            relation,
            style: ChartStyle::default(),
            format_value: format_value_plain,
        }
    }

    /// Replaces the stacking policy.
    pub fn with_stack(mut self, stack: StackPolicy) -> Self {
        self.stack = stack;
        self
    }

    /// Replaces the domain policy.
    pub fn with_domain(mut self, domain: DomainPolicy) -> Self {
        self.domain = domain;
        self
    }

    /// Replaces the relation rule.
    pub fn with_relation(mut self, relation: RelationRule) -> Self {
        self.relation = relation;
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the value formatter.
    pub fn with_format(mut self, format_value: fn(f64) -> String) -> Self {
        self.format_value = format_value;
        self
    }

    /// Builds legend items for the given series, in order, with the palette this
    /// descriptor assigns them.
    pub fn legend_items(&self, series: &[&str]) -> Vec<LegendItem> {
        series
            .iter()
            .enumerate()
            .map(|(i, label)| LegendItem {
                label: String::from(*label),
                fill: self.style.series_fill(i),
            })
            .collect()
    }

    /// Lays out one frame for the visible window of `dataset`.
    ///
    /// Zero visible records produce a frame tagged [`FrameTag::Empty`] carrying only the
    /// "no data" placeholder guide, never an error. Every series shape's key is a record
    /// key from `dataset`; stale keys cannot survive into the output.
    pub fn layout(
        &self,
        dataset: &Dataset,
        params: &LayoutParams,
        measurer: &dyn TextMeasurer,
    ) -> LayoutFrame {
        let visible = match params.window {
            Some(bound) => window_up_to(dataset, bound),
            None => dataset.records().to_vec(),
        };
        if visible.is_empty() {
            return self.empty_frame(params);
        }

        let tag = match params.window {
            Some(bound) => FrameTag::Window { bound },
            None => FrameTag::Full,
        };
        // Category and series axes come from the full dataset, not the window: a
        // surviving key must keep its resting position as playback advances, so axis
        // geometry cannot depend on how much of the data is currently visible.
        let axes = record_axes(dataset.records());
        let mut frame = LayoutFrame::new(tag);
        match self.kind {
            ChartKind::StackedBars => {
                self.layout_stacked_bars(&visible, &axes, params, measurer, &mut frame);
            }
            ChartKind::Stream => self.layout_stream(&visible, &axes, params, measurer, &mut frame),
            ChartKind::Rose => self.layout_rose(&visible, params, &mut frame),
            ChartKind::Bump => self.layout_bump(&visible, &axes, params, measurer, &mut frame),
        }
        frame.retain_known_keys(dataset);
        frame
    }

    /// Builds the "no data" frame: empty of series shapes, with a centered placeholder
    /// glyph as its only guide.
    fn empty_frame(&self, params: &LayoutParams) -> LayoutFrame {
        let mut frame = LayoutFrame::empty();
        let center = Point::new(params.width / 2.0, params.height / 2.0);
        let shape = Shape::Text(TextShape {
            pos: center,
            text: String::from("No data"),
            font_size: self.style.font_size,
            anchor: TextAnchor::Middle,
            fill: Brush::Solid(self.style.label_color),
        });
        frame.push_guide(Key::name("placeholder"), z_order::PLACEHOLDER, shape);
        frame
    }

    fn layout_stacked_bars(
        &self,
        visible: &[Record],
        axes: &Axes,
        params: &LayoutParams,
        measurer: &dyn TextMeasurer,
        frame: &mut LayoutFrame,
    ) {
        let spans = stack(visible, &self.stack);
        let Axes { categories, series } = axes;
        if categories.is_empty() {
            return;
        }

        let domain = self.value_domain(&spans, params);
        let y_spec = ScaleLinearSpec::new(domain).with_nice(true);
        let tick_probe = ScaleLinear::new(domain, (0.0, 1.0)).ticks(TICK_COUNT);
        let margins = self.axis_margins(&tick_probe, measurer);
        let area = ChartArea::arrange(params.width, params.height, margins);

        let band = ScaleBandSpec::new(categories.len()).instantiate(area.x_range());
        let y_scale = y_spec.instantiate(area.y_range(), TICK_COUNT);

        for span in &spans {
            let Some(cat) = categories.iter().position(|c| c == &span.category) else {
                continue;
            };
            let fill = self.series_fill_for(series, span);
            let shape = stacked_rect(span, band.x(cat), band.band_width(), &y_scale, fill);
            frame.push(span.key.clone(), z_order::SERIES_FILL, shape);
        }

        self.push_value_guides(frame, &area, &y_scale);
        for (i, category) in categories.iter().enumerate() {
            let x = band.x(i) + band.band_width() / 2.0;
            self.push_axis_label(frame, category, Point::new(x, area.plot.y1 + self.style.font_size + 4.0));
        }
    }

    fn layout_stream(
        &self,
        visible: &[Record],
        axes: &Axes,
        params: &LayoutParams,
        measurer: &dyn TextMeasurer,
        frame: &mut LayoutFrame,
    ) {
        let spans = stack(visible, &self.stack);
        let Axes { categories, series } = axes;
        if categories.is_empty() {
            return;
        }

        let domain = self.value_domain(&spans, params);
        let margins = self.axis_margins(&[], measurer);
        let area = ChartArea::arrange(params.width, params.height, margins);
        let x = ScalePoint::new(area.x_range(), categories.len());
        let y_scale = ScaleLinearSpec::new(domain).instantiate(area.y_range(), TICK_COUNT);

        // One band segment per record, spanning from its category to the next one, so
        // each key owns exactly one shape and adjoining segments read as one band.
        let base_y = y_scale.map(0.0);
        for span in &spans {
            let Some(cat) = categories.iter().position(|c| c == &span.category) else {
                continue;
            };
            let mut columns: Vec<(&str, f64)> = alloc::vec![(span.category.as_str(), x.x(cat))];
            if let Some(next_cat) = categories.get(cat + 1) {
                columns.push((next_cat.as_str(), x.x(cat + 1)));
            }
            let points = series_band_points(&spans, &span.series, &columns, base_y, &y_scale);
            let fill = self.series_fill_for(series, span);
            let shape = Shape::path(series_band(&points), fill);
            frame.push(span.key.clone(), z_order::SERIES_FILL, shape);
        }

        for (i, category) in categories.iter().enumerate() {
            self.push_axis_label(
                frame,
                category,
                Point::new(x.x(i), area.plot.y1 + self.style.font_size + 4.0),
            );
        }
        self.push_series_end_labels(frame, series, |s| {
            let (i, last) = categories.iter().enumerate().rev().find_map(|(i, c)| {
                spans
                    .iter()
                    .find(|sp| sp.series == s && sp.category == *c)
                    .map(|sp| (i, sp))
            })?;
            let mid = (y_scale.map(last.start) + y_scale.map(last.end)) / 2.0;
            Some((x.x(i) + 6.0, mid))
        });
    }

    fn layout_rose(&self, visible: &[Record], params: &LayoutParams, frame: &mut LayoutFrame) {
        let margins = Margins::new(8.0, 8.0, 8.0, 8.0);
        let area = ChartArea::arrange(params.width, params.height, margins);
        let center = area.center();
        let window_max = visible_max(visible);
        let max = self.domain.resolve_max(window_max, params.global_max);
        let count = visible.len();

        for (i, record) in visible.iter().enumerate() {
            let radius = (record.value().max(0.0) / max) * area.max_radius();
            let path = rose_sector(center, radius, i, count);
            let shape = Shape::path(path, self.style.series_fill(i));
            frame.push(record.key().clone(), z_order::SERIES_FILL, shape);
        }

        let label_radius = area.max_radius() + 2.0;
        for (i, record) in visible.iter().enumerate() {
            let Some(category) = record.key().category() else {
                continue;
            };
            let angle = slice_mid_angle(i, count);
            let pos = Point::new(
                center.x + label_radius * angle.cos(),
                center.y + label_radius * angle.sin(),
            );
            self.push_axis_label(frame, category, pos);
        }
    }

    fn layout_bump(
        &self,
        visible: &[Record],
        axes: &Axes,
        params: &LayoutParams,
        measurer: &dyn TextMeasurer,
        frame: &mut LayoutFrame,
    ) {
        let Axes { categories, series } = axes;
        if categories.is_empty() {
            return;
        }

        let window_max = visible_max(visible);
        let max = self.domain.resolve_max(window_max, params.global_max);
        let tick_probe = ScaleLinear::new((0.0, max), (0.0, 1.0)).ticks(TICK_COUNT);
        let margins = self.axis_margins(&tick_probe, measurer);
        let area = ChartArea::arrange(params.width, params.height, margins);
        let x = ScalePoint::new(area.x_range(), categories.len());
        let y_scale = ScaleLinearSpec::new((0.0, max))
            .with_nice(true)
            .instantiate(area.y_range(), TICK_COUNT);

        let mut positions: HashMap<&Key, Point> = HashMap::new();
        for record in visible {
            let Some(cat) = record
                .key()
                .category()
                .and_then(|c| categories.iter().position(|k| k == c))
            else {
                continue;
            };
            positions.insert(
                record.key(),
                Point::new(x.x(cat), y_scale.map(record.value())),
            );
        }

        // Series lines underneath, one dot per record on top.
        for (si, s) in series.iter().enumerate() {
            let mut line: Vec<(f64, f64)> = Vec::new();
            for category in categories {
                let key = Key::series(s.clone(), category.clone());
                if let Some(p) = positions.get(&key) {
                    line.push((p.x, p.y));
                }
            }
            if line.len() > 1 {
                let shape = Shape::stroked_path(polyline(&line), self.style.series_fill(si), 2.0);
                frame.push_guide(
                    Key::name(format!("line:{s}")),
                    z_order::SERIES_STROKE,
                    shape,
                );
            }
        }
        for record in visible {
            let Some(&p) = positions.get(record.key()) else {
                continue;
            };
            let si = series_index(series, record.key());
            let shape = Shape::point(p, 4.0, self.style.series_fill(si));
            frame.push(record.key().clone(), z_order::SERIES_POINTS, shape);
        }

        self.push_value_guides(frame, &area, &y_scale);
        for (i, category) in categories.iter().enumerate() {
            self.push_axis_label(
                frame,
                category,
                Point::new(x.x(i), area.plot.y1 + self.style.font_size + 4.0),
            );
        }
        self.push_series_end_labels(frame, series, |s| {
            categories.iter().rev().find_map(|c| {
                positions
                    .get(&Key::series(s, c.clone()))
                    .map(|p| (p.x + 8.0, p.y))
            })
        });
    }

    /// Resolves the stacked value domain per the descriptor's domain policy.
    ///
    /// Floor stacks run from the lowest span start (negative values) to the resolved
    /// maximum; centered stacks are symmetric around zero.
    fn value_domain(&self, spans: &[StackedSpan], params: &LayoutParams) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in spans {
            lo = lo.min(s.start.min(s.end));
            hi = hi.max(s.start.max(s.end));
        }
        let window_max = (hi > f64::NEG_INFINITY).then_some(hi);
        match self.stack.baseline {
            StackBaseline::Floor => {
                let max = self.domain.resolve_max(window_max, params.global_max);
                (lo.min(0.0).min(max), max)
            }
            StackBaseline::Center => {
                let window_half = window_max.map(|m| m.max(lo.abs()));
                let half = match self.domain {
                    DomainPolicy::Window => self.domain.resolve_max(window_half, None),
                    DomainPolicy::Global => self
                        .domain
                        .resolve_max(window_half, params.global_max.map(|m| m / 2.0)),
                };
                (-half, half)
            }
        }
    }

    fn axis_margins(&self, tick_labels: &[f64], measurer: &dyn TextMeasurer) -> Margins {
        let labels: Vec<String> = tick_labels.iter().map(|&v| (self.format_value)(v)).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let left = Margins::measure_left(measurer, &refs, 8.0, self.style.font_size).max(8.0);
        Margins::new(left, 60.0, 8.0, self.style.font_size + 10.0)
    }

    fn series_fill_for(&self, series: &[String], span: &StackedSpan) -> Brush {
        let i = series.iter().position(|s| s == &span.series).unwrap_or(0);
        self.style.series_fill(i)
    }

    /// Pushes horizontal grid lines and tick labels for a value axis.
    fn push_value_guides(&self, frame: &mut LayoutFrame, area: &ChartArea, y_scale: &ScaleLinear) {
        for tick in y_scale.ticks(TICK_COUNT) {
            let y = y_scale.map(tick);
            if y < area.plot.y0 - 0.5 || y > area.plot.y1 + 0.5 {
                continue;
            }
            let mut path = kurbo::BezPath::new();
            path.move_to((area.plot.x0, y));
            path.line_to((area.plot.x1, y));
            let text = (self.format_value)(tick);
            frame.push_guide(
                Key::name(format!("grid:{text}")),
                z_order::GRID,
                Shape::stroked_path(path, self.style.guide_color, 1.0),
            );
            frame.push_guide(
                Key::name(format!("tick:{text}")),
                z_order::LABELS,
                Shape::Text(TextShape {
                    pos: Point::new(area.plot.x0 - 4.0, y + self.style.font_size / 3.0),
                    text,
                    font_size: self.style.font_size,
                    anchor: TextAnchor::End,
                    fill: Brush::Solid(self.style.label_color),
                }),
            );
        }
    }

    fn push_axis_label(&self, frame: &mut LayoutFrame, label: &str, pos: Point) {
        frame.push_guide(
            Key::name(format!("label:{label}")),
            z_order::LABELS,
            Shape::Text(TextShape {
                pos,
                text: String::from(label),
                font_size: self.style.font_size,
                anchor: TextAnchor::Middle,
                fill: Brush::Solid(self.style.label_color),
            }),
        );
    }

    /// Pushes one label per series at its rightmost point, relaxed so labels never
    /// overlap vertically.
    fn push_series_end_labels<'a>(
        &self,
        frame: &mut LayoutFrame,
        series: &'a [String],
        anchor: impl Fn(&'a str) -> Option<(f64, f64)>,
    ) {
        let mut anchors: Vec<(&str, f64, f64)> = Vec::new();
        for s in series {
            if let Some((x, y)) = anchor(s) {
                anchors.push((s, x, y));
            }
        }
        let ys: Vec<f64> = anchors.iter().map(|&(_, _, y)| y).collect();
        let relaxed = relax_labels(&ys, self.style.label_spacing, RELAX_MAX_ITERS);
        for (&(s, x, _), &y) in anchors.iter().zip(relaxed.iter()) {
            frame.push_guide(
                Key::name(format!("label:{s}")),
                z_order::LABELS,
                Shape::text(Point::new(x, y), s, self.style.font_size)
                    .with_fill(self.style.label_color),
            );
        }
    }
}

/// Tick count for value axes.
const TICK_COUNT: usize = 5;

/// First-seen category and series orders over a full dataset.
///
/// Axis order never depends on the playback window, so colors and positions stay put
/// while the window advances.
struct Axes {
    categories: Vec<String>,
    series: Vec<String>,
}

fn record_axes(records: &[Record]) -> Axes {
    let mut categories: Vec<String> = Vec::new();
    let mut series: Vec<String> = Vec::new();
    for r in records {
        if let Some(c) = r.key().category() {
            if !categories.iter().any(|k| k == c) {
                categories.push(String::from(c));
            }
        }
        if let Some(s) = r.key().series_name() {
            if !series.iter().any(|k| k == s) {
                series.push(String::from(s));
            }
        }
    }
    Axes { categories, series }
}

fn series_index(series: &[String], key: &Key) -> usize {
    key.series_name()
        .and_then(|s| series.iter().position(|k| k == s))
        .unwrap_or(0)
}

/// Default value formatter: integral values print without a fractional part.
fn format_value_plain(v: f64) -> String {
    if v.round() == v && v.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation, reason = "integral and range-checked")]
        let i = v as i64;
        i.to_string()
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Key::series("Bombing", "2001"), [10.0]).with_order(2001.0),
            Record::new(Key::series("Assault", "2001"), [5.0]).with_order(2001.0),
            Record::new(Key::series("Bombing", "2002"), [30.0]).with_order(2002.0),
            Record::new(Key::series("Assault", "2002"), [12.0]).with_order(2002.0),
        ])
    }

    fn params() -> LayoutParams {
        LayoutParams::new(640.0, 480.0)
    }

    #[test]
    fn layout_is_deterministic() {
        let d = ChartDescriptor::new(ChartKind::StackedBars);
        let ds = dataset();
        let m = HeuristicTextMeasurer;
        let p = params().with_window(2002.0);
        let a = d.layout(&ds, &p, &m);
        let b = d.layout(&ds, &p, &m);
        assert_eq!(a.shapes(), b.shapes());
        assert_eq!(a.guides(), b.guides());
        assert_eq!(a.tag(), b.tag());
    }

    #[test]
    fn every_series_shape_key_is_a_dataset_key() {
        let d = ChartDescriptor::new(ChartKind::StackedBars);
        let ds = dataset();
        let frame = d.layout(&ds, &params(), &HeuristicTextMeasurer);
        assert_eq!(frame.len(), 4, "one shape per record");
        for (key, _, _) in frame.shapes() {
            assert!(ds.contains_key(key));
        }
    }

    #[test]
    fn windowing_limits_shapes_and_keeps_resting_positions() {
        let d = ChartDescriptor::new(ChartKind::StackedBars).with_domain(DomainPolicy::Global);
        let ds = dataset();
        let m = HeuristicTextMeasurer;
        let early = d.layout(&ds, &params().with_window(2001.0).with_global_max(42.0), &m);
        let late = d.layout(&ds, &params().with_window(2002.0).with_global_max(42.0), &m);
        assert_eq!(early.len(), 2);
        assert_eq!(late.len(), 4);
        // Global domain: surviving keys keep their resting geometry across the advance.
        let key = Key::series("Bombing", "2001");
        assert_eq!(early.get(&key), late.get(&key));
    }

    #[test]
    fn empty_window_yields_placeholder_frame() {
        let d = ChartDescriptor::new(ChartKind::Stream);
        let ds = dataset();
        let frame = d.layout(&ds, &params().with_window(1900.0), &HeuristicTextMeasurer);
        assert!(frame.tag().is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.guides().len(), 1, "placeholder glyph only");
    }

    #[test]
    fn rose_gives_every_record_a_slice() {
        let d = ChartDescriptor::new(ChartKind::Rose);
        let ds = Dataset::from_records(vec![
            Record::new(Key::name("Bombing"), [12.0]),
            Record::new(Key::name("Assault"), [0.0]),
        ]);
        let frame = d.layout(&ds, &params(), &HeuristicTextMeasurer);
        assert_eq!(frame.len(), 2, "zero-value categories keep a sliver");
    }

    #[test]
    fn bump_labels_respect_minimum_spacing() {
        let style = ChartStyle {
            label_spacing: 20.0,
            ..ChartStyle::default()
        };
        let d = ChartDescriptor::new(ChartKind::Bump).with_style(style);
        let ds = Dataset::from_records(vec![
            Record::new(Key::series("a", "2001"), [10.0]),
            Record::new(Key::series("b", "2001"), [10.4]),
            Record::new(Key::series("c", "2001"), [10.8]),
        ]);
        let frame = d.layout(&ds, &params(), &HeuristicTextMeasurer);
        let mut label_ys: Vec<f64> = frame
            .guides()
            .iter()
            .filter_map(|(k, _, s)| match (k, s) {
                (Key::Name(n), Shape::Text(t)) if n.starts_with("label:")
                    && (n.ends_with(":a") || n.ends_with(":b") || n.ends_with(":c")) =>
                {
                    Some(t.pos.y)
                }
                _ => None,
            })
            .collect();
        assert_eq!(label_ys.len(), 3);
        label_ys.sort_by(f64::total_cmp);
        assert!(label_ys[1] - label_ys[0] >= 20.0 - 1e-9);
        assert!(label_ys[2] - label_ys[1] >= 20.0 - 1e-9);
    }

    #[test]
    fn legend_items_pair_labels_with_palette_fills() {
        let d = ChartDescriptor::new(ChartKind::StackedBars);
        let items = d.legend_items(&["Bombing", "Assault"]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Bombing");
        assert_eq!(items[0].fill, d.style.series_fill(0));
    }

    #[test]
    fn relation_rules_distinguish_series_and_category() {
        let a1 = Key::series("a", "2001");
        let a2 = Key::series("a", "2002");
        let b1 = Key::series("b", "2001");
        assert!(RelationRule::SameSeries.related(&a1, &a2));
        assert!(!RelationRule::SameSeries.related(&a1, &b1));
        assert!(RelationRule::SameCategory.related(&a1, &b1));
        assert!(!RelationRule::SameKey.related(&a1, &a2));
        assert!(RelationRule::SameKey.related(&a1, &a1));
    }
}
