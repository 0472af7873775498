// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient per-instance view state.

use vantage_charts::LayoutParams;
use vantage_core::{Dataset, Key};

/// The transient state of one mounted chart.
///
/// This lives exactly as long as the chart instance: it is created empty, mutated by
/// user events, and dropped on teardown. None of it survives into layout, which stays a
/// pure function of dataset and parameters.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    selection: Option<Key>,
    hover: Option<Key>,
    last_params: Option<LayoutParams>,
}

impl ViewState {
    /// Creates empty view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active selection.
    pub fn selection(&self) -> Option<&Key> {
        self.selection.as_ref()
    }

    /// Sets the active selection if `key` exists in `dataset`, otherwise clears it.
    ///
    /// The selection is always either empty or a key present in the current dataset.
    pub fn select(&mut self, key: Key, dataset: &Dataset) {
        if dataset.contains_key(&key) {
            self.selection = Some(key);
        } else {
            tracing::debug!(%key, "selection target not in dataset; clearing");
            self.selection = None;
        }
    }

    /// Clears the active selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns the current hover target.
    pub fn hover(&self) -> Option<&Key> {
        self.hover.as_ref()
    }

    /// Sets the hover target.
    pub fn set_hover(&mut self, key: Option<Key>) {
        self.hover = key;
    }

    /// Returns the parameters of the most recent render, for resize replay.
    pub fn last_params(&self) -> Option<&LayoutParams> {
        self.last_params.as_ref()
    }

    /// Records the parameters of a completed render.
    pub fn set_last_params(&mut self, params: LayoutParams) {
        self.last_params = Some(params);
    }

    /// Drops state that points into a dataset being replaced.
    ///
    /// Selections and hover targets for keys absent from `next` are cleared, not left
    /// dangling.
    pub fn sync_dataset(&mut self, next: &Dataset) {
        if let Some(k) = &self.selection
            && !next.contains_key(k)
        {
            tracing::debug!(key = %k, "selected key removed by dataset swap");
            self.selection = None;
        }
        if let Some(k) = &self.hover
            && !next.contains_key(k)
        {
            self.hover = None;
        }
    }

    /// Resets everything, returning the state to its just-mounted emptiness.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use vantage_core::Record;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(Key::name("France"), [10.0]),
            Record::new(Key::name("Chile"), [4.0]),
        ])
    }

    #[test]
    fn selection_is_null_or_present() {
        let ds = dataset();
        let mut view = ViewState::new();
        view.select(Key::name("France"), &ds);
        assert_eq!(view.selection(), Some(&Key::name("France")));
        view.select(Key::name("Atlantis"), &ds);
        assert_eq!(view.selection(), None);
    }

    #[test]
    fn dataset_swap_clears_dead_selection() {
        let ds = dataset();
        let mut view = ViewState::new();
        view.select(Key::name("Chile"), &ds);
        view.set_hover(Some(Key::name("Chile")));

        let next = Dataset::from_records(vec![Record::new(Key::name("France"), [12.0])]);
        view.sync_dataset(&next);
        assert_eq!(view.selection(), None);
        assert_eq!(view.hover(), None);
    }

    #[test]
    fn surviving_selection_is_kept_across_swap() {
        let ds = dataset();
        let mut view = ViewState::new();
        view.select(Key::name("France"), &ds);
        view.sync_dataset(&dataset());
        assert_eq!(view.selection(), Some(&Key::name("France")));
    }
}
