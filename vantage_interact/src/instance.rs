// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-mount chart handle.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use vantage_charts::{ChartDescriptor, LayoutParams, TextMeasurer};
use vantage_core::{Dataset, Key, LayoutFrame, SceneState, ShapeDiff};

use crate::hit::hit_test;
use crate::hover::{Highlight, Tooltip, clamp_tooltip, tooltip_text};
use crate::playback::Playback;
use crate::view_state::ViewState;

/// Navigation callback invoked on click, with the clicked category and series.
pub type SelectFn = Box<dyn FnMut(&str, Option<&str>)>;

/// One mounted chart: descriptor, data, retained scene, and view state.
///
/// The instance is the strategy object the driver replays: it holds the last render
/// parameters, so a resize or playback tick re-runs the whole pipeline (layout →
/// reconcile) without the host restating anything. Renderers apply the emitted
/// [`ShapeDiff`] stream; the instance itself never draws.
///
/// Lifecycle: uninitialized until the first [`ChartInstance::render`], then rendered
/// until [`ChartInstance::teardown`]. There is no error state; malformed input degrades
/// to the placeholder frame.
pub struct ChartInstance {
    descriptor: ChartDescriptor,
    dataset: Dataset,
    frame: LayoutFrame,
    scene: SceneState,
    view: ViewState,
    playback: Option<Playback>,
    transition_ms: u32,
    on_select: Option<SelectFn>,
}

impl core::fmt::Debug for ChartInstance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChartInstance")
            .field("descriptor", &self.descriptor)
            .field("dataset", &self.dataset)
            .field("frame", &self.frame)
            .field("scene", &self.scene)
            .field("view", &self.view)
            .field("playback", &self.playback)
            .field("transition_ms", &self.transition_ms)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl ChartInstance {
    /// Creates an uninitialized instance for a descriptor.
    pub fn new(descriptor: ChartDescriptor) -> Self {
        Self {
            descriptor,
            dataset: Dataset::new(),
            frame: LayoutFrame::empty(),
            scene: SceneState::new(),
            view: ViewState::new(),
            playback: None,
            transition_ms: 300,
            on_select: None,
        }
    }

    /// Sets the transition duration attached to emitted diffs.
    pub fn with_transition_ms(mut self, transition_ms: u32) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    /// Attaches a playback schedule.
    pub fn with_playback(mut self, playback: Playback) -> Self {
        self.playback = Some(playback);
        self
    }

    /// Attaches the navigation callback invoked on click.
    pub fn with_on_select(mut self, on_select: SelectFn) -> Self {
        self.on_select = Some(on_select);
        self
    }

    /// Returns the descriptor this instance renders with.
    pub fn descriptor(&self) -> &ChartDescriptor {
        &self.descriptor
    }

    /// Returns the most recently laid out frame.
    pub fn frame(&self) -> &LayoutFrame {
        &self.frame
    }

    /// Returns the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns `true` once the instance has rendered at least one frame.
    pub fn is_rendered(&self) -> bool {
        self.view.last_params().is_some()
    }

    /// Replaces the dataset wholesale.
    ///
    /// Selection and hover targets pointing at removed keys are cleared; retained scene
    /// geometry for removed keys exits on the next render.
    pub fn set_data(&mut self, dataset: Dataset) {
        self.view.sync_dataset(&dataset);
        self.dataset = dataset;
    }

    /// Sets the active selection, keeping it null-or-present.
    pub fn select(&mut self, key: Key) {
        self.view.select(key, &self.dataset);
    }

    /// Runs the full pipeline for `params` and returns the transition diffs.
    pub fn render(&mut self, params: LayoutParams, measurer: &dyn TextMeasurer) -> Vec<ShapeDiff> {
        let frame = self.descriptor.layout(&self.dataset, &params, measurer);
        self.view.set_last_params(params);
        let diffs = self.scene.tick(&frame, self.transition_ms);
        self.frame = frame;
        diffs
    }

    /// Replays the last render at a new canvas size.
    ///
    /// A resize before the first render is a no-op; replaying with an unchanged size
    /// produces no diffs, so there is nothing to flicker.
    pub fn resize(
        &mut self,
        width: f64,
        height: f64,
        measurer: &dyn TextMeasurer,
    ) -> Vec<ShapeDiff> {
        let Some(&params) = self.view.last_params() else {
            tracing::debug!("resize before first render; skipping replay");
            return Vec::new();
        };
        self.render(params.resized(width, height), measurer)
    }

    /// Starts or restarts playback at the host clock instant `now_ms`.
    pub fn play(&mut self, now_ms: u64) {
        if let Some(p) = &mut self.playback {
            p.play(now_ms);
        }
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        if let Some(p) = &mut self.playback {
            p.pause();
        }
    }

    /// Returns `true` while playback is advancing.
    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(Playback::is_playing)
    }

    /// Drives playback from the host clock, re-rendering when a step fires.
    ///
    /// Returns `None` when no deadline passed. Requires a prior render, whose
    /// parameters are replayed with the advanced window.
    pub fn tick_playback(
        &mut self,
        now_ms: u64,
        measurer: &dyn TextMeasurer,
    ) -> Option<Vec<ShapeDiff>> {
        let position = self.playback.as_mut()?.tick(now_ms)?;
        let params = self.view.last_params().copied()?;
        Some(self.render(params.with_window(position), measurer))
    }

    /// Handles hover enter and move: hit-test, tooltip, highlight.
    ///
    /// Returns `None` over empty space, which also clears any existing hover state, so
    /// a move off the last shape behaves as a leave.
    pub fn hover(
        &mut self,
        pointer: Point,
        bounds: Rect,
        measurer: &dyn TextMeasurer,
    ) -> Option<(Tooltip, Highlight)> {
        let Some(key) = hit_test(&self.frame, pointer).cloned() else {
            self.view.set_hover(None);
            return None;
        };
        let record = self.dataset.get(&key)?;
        let text = tooltip_text(record, self.descriptor.format_value);
        let (w, h) = measurer.measure(&text, self.descriptor.style.font_size);
        let tooltip = Tooltip {
            pos: clamp_tooltip(pointer, w + 8.0, h + 8.0, bounds),
            text,
        };
        let highlight = Highlight::compute(&self.frame, &key, self.descriptor.relation);
        self.view.set_hover(Some(key));
        Some((tooltip, highlight))
    }

    /// Handles hover leave: all hover state resets, nothing leaks into the next pass.
    pub fn hover_leave(&mut self) {
        self.view.set_hover(None);
    }

    /// Handles a click: resolves the hit key and invokes the navigation callback with
    /// its category and series. Returns `true` when a callback fired.
    pub fn click(&mut self, pointer: Point) -> bool {
        let Some(key) = hit_test(&self.frame, pointer).cloned() else {
            return false;
        };
        let Some(category) = key.category() else {
            return false;
        };
        self.view.select(key.clone(), &self.dataset);
        if let Some(on_select) = &mut self.on_select {
            on_select(category, key.series_name());
            return true;
        }
        false
    }

    /// Tears the instance down: exits every retained shape and resets all view state,
    /// returning the instance to uninitialized.
    pub fn teardown(&mut self) -> Vec<ShapeDiff> {
        let diffs = self.scene.clear(self.transition_ms);
        self.frame = LayoutFrame::empty();
        self.view.reset();
        if let Some(p) = &mut self.playback {
            p.pause();
        }
        diffs
    }
}
