// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pipeline demos: four chart kinds over an embedded incident dataset, plus a
//! frame-by-frame playback run, all dumped as SVG.
mod svg;

use kurbo::Rect;
use vantage_charts::{
    ChartDescriptor, ChartKind, DomainPolicy, HeuristicTextMeasurer, LayoutParams, TextMeasurer,
};
use vantage_core::Dataset;
use vantage_interact::{ChartInstance, Playback};
use vantage_transforms::{RawData, RawRow, normalize};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const STEP_INTERVAL_MS: u64 = 400;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = RawData::Rows(incident_rows());
    let dataset = normalize(&raw, "western-europe");
    tracing::info!(records = dataset.len(), "normalized embedded incidents");
    let measurer = HeuristicTextMeasurer;

    let charts = [
        (ChartKind::StackedBars, "stacked_bars"),
        (ChartKind::Stream, "stream"),
        (ChartKind::Rose, "rose"),
        (ChartKind::Bump, "bump"),
    ];
    for (kind, name) in charts {
        let svg = render_full(kind, &dataset, &measurer);
        let path = format!("vantage_{name}.svg");
        std::fs::write(&path, svg).expect("write chart svg");
        println!("wrote {path}");
    }

    let svg = render_playback(&dataset, &measurer);
    std::fs::write("vantage_bump_playback.svg", svg).expect("write playback svg");
    println!("wrote vantage_bump_playback.svg");
}

/// Lays out one chart over the whole dataset and serializes the entered scene.
fn render_full(kind: ChartKind, dataset: &Dataset, measurer: &dyn TextMeasurer) -> String {
    let mut instance = ChartInstance::new(ChartDescriptor::new(kind));
    instance.set_data(dataset.clone());
    let diffs = instance.render(LayoutParams::new(WIDTH, HEIGHT), measurer);

    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, WIDTH, HEIGHT));
    scene.apply_diffs(&diffs);
    scene.to_svg_string()
}

/// Drives playback year by year with a synthetic clock, applying each step's
/// diffs to the retained scene. The global axis domain keeps the scales still
/// while the window advances, so survivors only gain neighbors.
fn render_playback(dataset: &Dataset, measurer: &dyn TextMeasurer) -> String {
    let descriptor = ChartDescriptor::new(ChartKind::Bump).with_domain(DomainPolicy::Global);
    let playback = Playback::new(2001.0, 2010.0, 1.0, STEP_INTERVAL_MS);
    let mut instance = ChartInstance::new(descriptor).with_playback(playback);
    instance.set_data(dataset.clone());

    let params = LayoutParams::new(WIDTH, HEIGHT)
        .with_window(2001.0)
        .with_global_max(dataset.max_measure(0).unwrap_or(1.0));
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, WIDTH, HEIGHT));
    scene.apply_diffs(&instance.render(params, measurer));

    instance.play(0);
    let mut now = 0_u64;
    while instance.is_playing() {
        now += STEP_INTERVAL_MS;
        if let Some(diffs) = instance.tick_playback(now, measurer) {
            scene.apply_diffs(&diffs);
        }
    }
    scene.to_svg_string()
}

fn incident_rows() -> Vec<RawRow> {
    let bombings = [34.0, 28.0, 31.0, 45.0, 38.0, 29.0, 26.0, 22.0, 27.0, 19.0];
    let assaults = [12.0, 15.0, 11.0, 18.0, 21.0, 16.0, 14.0, 13.0, 9.0, 11.0];
    let hijackings = [4.0, 2.0, 3.0, 1.0, 2.0, 0.0, 1.0, 2.0, 1.0, 0.0];

    let mut rows = Vec::new();
    for (series, values) in [
        ("Bombing", &bombings),
        ("Assault", &assaults),
        ("Hijacking", &hijackings),
    ] {
        for (year, &value) in (2001_u32..).zip(values.iter()) {
            rows.push(row("western-europe", series, year, value));
        }
    }
    // A second group so the normalizer's choice has something to select against.
    for (year, &value) in (2001_u32..).zip([23.0, 19.0, 25.0, 17.0, 21.0].iter()) {
        rows.push(row("north-america", "Bombing", year, value));
    }
    rows
}

fn row(group: &str, series: &str, year: u32, value: f64) -> RawRow {
    RawRow {
        group: group.to_string(),
        series: series.to_string(),
        category: year.to_string(),
        value,
        order: Some(f64::from(year)),
    }
}
