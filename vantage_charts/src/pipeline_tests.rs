// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios through normalize → layout → scene.

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vantage_core::{Key, SceneState, Shape, ShapeDiff};
use vantage_transforms::{RawData, RawRow, normalize};

use crate::descriptor::{ChartDescriptor, ChartKind, LayoutParams};
use crate::measure::HeuristicTextMeasurer;
use crate::scale::DomainPolicy;

fn incident_rows() -> RawData {
    RawData::Rows(vec![
        RawRow {
            group: String::from("incidents"),
            series: String::from("incidents"),
            category: String::from("2001"),
            value: 10.0,
            order: Some(2001.0),
        },
        RawRow {
            group: String::from("incidents"),
            series: String::from("incidents"),
            category: String::from("2002"),
            value: 30.0,
            order: Some(2002.0),
        },
    ])
}

/// The canonical playback scenario: a window up to 2001 shows one point; advancing to
/// 2002 shows two, and the 2001 point's resting position is unchanged across frames.
#[test]
fn advancing_the_window_adds_points_without_moving_survivors() {
    let dataset = normalize(&incident_rows(), "incidents");
    let descriptor = ChartDescriptor::new(ChartKind::Bump).with_domain(DomainPolicy::Global);
    let measurer = HeuristicTextMeasurer;
    let params = LayoutParams::new(640.0, 480.0).with_global_max(30.0);

    let early = descriptor.layout(&dataset, &params.with_window(2001.0), &measurer);
    let late = descriptor.layout(&dataset, &params.with_window(2002.0), &measurer);
    assert_eq!(early.len(), 1);
    assert_eq!(late.len(), 2);

    let key = Key::series("incidents", "2001");
    assert_eq!(early.get(&key), late.get(&key));
}

/// Advancing the window produces an enter only for the newly visible key; the survivor
/// either updates in place or (with stable geometry) produces no diff at all.
#[test]
fn scene_diff_enters_only_the_new_key_on_advance() {
    let dataset = normalize(&incident_rows(), "incidents");
    let descriptor = ChartDescriptor::new(ChartKind::Bump).with_domain(DomainPolicy::Global);
    let measurer = HeuristicTextMeasurer;
    let params = LayoutParams::new(640.0, 480.0).with_global_max(30.0);

    let mut scene = SceneState::new();
    scene.tick(&descriptor.layout(&dataset, &params.with_window(2001.0), &measurer), 300);
    let diffs = scene.tick(&descriptor.layout(&dataset, &params.with_window(2002.0), &measurer), 300);

    let survivor = Key::series("incidents", "2001");
    let entered: Vec<&Key> = diffs
        .iter()
        .filter(|d| matches!(d, ShapeDiff::Enter { .. }))
        .map(ShapeDiff::key)
        .collect();
    assert!(entered.contains(&&Key::series("incidents", "2002")));
    assert!(!entered.contains(&&survivor), "survivors never re-enter");
    assert!(
        !diffs
            .iter()
            .any(|d| matches!(d, ShapeDiff::Exit { .. }) && *d.key() == survivor)
    );
}

/// Replaying an identical frame is visibly idempotent end to end.
#[test]
fn replaying_identical_params_produces_no_diffs() {
    let dataset = normalize(&incident_rows(), "incidents");
    let descriptor = ChartDescriptor::new(ChartKind::StackedBars);
    let measurer = HeuristicTextMeasurer;
    let params = LayoutParams::new(640.0, 480.0).with_window(2002.0);

    let mut scene = SceneState::new();
    scene.tick(&descriptor.layout(&dataset, &params, &measurer), 300);
    let replay = scene.tick(&descriptor.layout(&dataset, &params, &measurer), 300);
    assert!(replay.is_empty());
}

/// A choice absent from the feed degrades to an empty dataset and a placeholder frame,
/// never an error.
#[test]
fn missing_choice_degrades_to_placeholder() {
    let dataset = normalize(&incident_rows(), "no-such-group");
    assert!(dataset.is_empty());

    let descriptor = ChartDescriptor::new(ChartKind::Rose);
    let frame = descriptor.layout(&dataset, &LayoutParams::new(640.0, 480.0), &HeuristicTextMeasurer);
    assert!(frame.tag().is_empty());
    assert_eq!(frame.len(), 0);
    let [(key, _, Shape::Text(text))] = frame.guides() else {
        panic!("expected a single placeholder text guide");
    };
    assert_eq!(*key, Key::name("placeholder"));
    assert_eq!(text.text, "No data");
}

/// Every stream record owns exactly one band segment, with a series gap at the next
/// category falling to the baseline rather than dropping the segment.
#[test]
fn stream_layout_gives_each_record_one_band_segment() {
    let raw = RawData::Rows(vec![
        RawRow {
            group: String::from("by-type"),
            series: String::from("Bombing"),
            category: String::from("2001"),
            value: 12.0,
            order: Some(2001.0),
        },
        RawRow {
            group: String::from("by-type"),
            series: String::from("Bombing"),
            category: String::from("2002"),
            value: 6.0,
            order: Some(2002.0),
        },
        RawRow {
            group: String::from("by-type"),
            series: String::from("Assault"),
            category: String::from("2001"),
            value: 8.0,
            order: Some(2001.0),
        },
    ]);
    let dataset = normalize(&raw, "by-type");
    let descriptor = ChartDescriptor::new(ChartKind::Stream);
    let frame = descriptor.layout(&dataset, &LayoutParams::new(640.0, 480.0), &HeuristicTextMeasurer);

    assert_eq!(frame.len(), 3);
    for record in dataset.records() {
        let shape = frame.get(record.key()).expect("every record keeps its key");
        assert!(matches!(shape, Shape::Path(_)), "stream segments are paths");
    }
}

/// Stacked bar heights conserve the unstacked input sum per category, all the way from
/// raw rows to scene-space rectangle extents.
#[test]
fn stacked_layout_conserves_category_sums() {
    let raw = RawData::Rows(vec![
        RawRow {
            group: String::from("by-type"),
            series: String::from("Bombing"),
            category: String::from("2001"),
            value: 12.0,
            order: None,
        },
        RawRow {
            group: String::from("by-type"),
            series: String::from("Assault"),
            category: String::from("2001"),
            value: 8.0,
            order: None,
        },
    ]);
    let dataset = normalize(&raw, "by-type");
    let descriptor = ChartDescriptor::new(ChartKind::StackedBars);
    let frame = descriptor.layout(&dataset, &LayoutParams::new(640.0, 480.0), &HeuristicTextMeasurer);

    let heights: f64 = frame
        .shapes()
        .iter()
        .filter_map(|(_, _, s)| match s {
            Shape::Rect(r) => Some(r.rect.height()),
            _ => None,
        })
        .sum();
    // Scene height of the full stack must equal the mapped height of the summed input.
    let full = frame
        .shapes()
        .iter()
        .filter_map(|(_, _, s)| s.bounds())
        .fold(None::<kurbo::Rect>, |acc, b| {
            Some(acc.map_or(b, |a| a.union(b)))
        })
        .unwrap();
    assert!((heights - full.height()).abs() < 1e-9, "spans tile the stack without gaps");
}
