// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene and its enter/update/exit diff.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::frame::LayoutFrame;
use crate::key::Key;
use crate::shape::Shape;

/// One transition produced by reconciling a frame against the retained scene.
///
/// Every diff corresponds to exactly one key. An `Update`'s `old` payload is the last
/// committed geometry for that key, so the renderer's transition always starts from
/// where the element last rested, never from an "entering" state.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDiff {
    /// The key is new to the scene.
    Enter {
        /// The shape's key.
        key: Key,
        /// Render order hint.
        z_index: i32,
        /// Final geometry to animate in to.
        new: Shape,
        /// Transition duration in milliseconds.
        duration_ms: u32,
    },
    /// The key persists and its geometry or paint changed.
    Update {
        /// The shape's key.
        key: Key,
        /// Render order hint (of the new shape).
        z_index: i32,
        /// The last committed geometry.
        old: Shape,
        /// The geometry to animate to.
        new: Shape,
        /// Transition duration in milliseconds.
        duration_ms: u32,
    },
    /// The key is gone; animate out and remove.
    Exit {
        /// The shape's key.
        key: Key,
        /// Render order hint of the removed shape.
        z_index: i32,
        /// The last committed geometry.
        old: Shape,
        /// Transition duration in milliseconds.
        duration_ms: u32,
    },
}

impl ShapeDiff {
    /// Returns the key this diff applies to.
    pub fn key(&self) -> &Key {
        match self {
            Self::Enter { key, .. } | Self::Update { key, .. } | Self::Exit { key, .. } => key,
        }
    }
}

/// The retained geometry for one chart container.
///
/// `tick` commits a frame: it diffs the frame against the retained shapes and replaces
/// them. Because the retained side always holds the last committed geometry, a new tick
/// arriving while a transition is notionally in flight simply supersedes it, so no second
/// animation ever races on the same key.
#[derive(Debug, Default)]
pub struct SceneState {
    retained: HashMap<Key, (i32, Shape)>,
}

impl SceneState {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained shapes.
    pub fn len(&self) -> usize {
        self.retained.len()
    }

    /// Returns `true` if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    /// Looks up the retained shape for a key.
    pub fn shape(&self, key: &Key) -> Option<&(i32, Shape)> {
        self.retained.get(key)
    }

    /// Commits `frame`, returning the transitions that take the scene there.
    ///
    /// Identical payloads produce no diff at all, so replaying an unchanged frame is
    /// visibly idempotent: no elements are created, removed, or animated. Enters and
    /// updates come out in frame order; exits are sorted by key for determinism.
    pub fn tick(&mut self, frame: &LayoutFrame, duration_ms: u32) -> Vec<ShapeDiff> {
        let mut diffs = Vec::new();
        let mut seen: HashSet<&Key> = HashSet::with_capacity(frame.len());

        for (key, z_index, shape) in frame.all() {
            seen.insert(key);
            match self.retained.get(key) {
                Some((old_z, old)) if old_z == z_index && old == shape => {}
                Some((_, old)) => {
                    diffs.push(ShapeDiff::Update {
                        key: key.clone(),
                        z_index: *z_index,
                        old: old.clone(),
                        new: shape.clone(),
                        duration_ms,
                    });
                }
                None => {
                    diffs.push(ShapeDiff::Enter {
                        key: key.clone(),
                        z_index: *z_index,
                        new: shape.clone(),
                        duration_ms,
                    });
                }
            }
        }

        let mut exited: Vec<Key> = self
            .retained
            .keys()
            .filter(|k| !seen.contains(*k))
            .cloned()
            .collect();
        exited.sort();
        for key in exited {
            let (z_index, old) = self.retained.remove(&key).expect("key from retained");
            diffs.push(ShapeDiff::Exit {
                key,
                z_index,
                old,
                duration_ms,
            });
        }

        for (key, z_index, shape) in frame.all() {
            self.retained
                .insert(key.clone(), (*z_index, shape.clone()));
        }

        diffs
    }

    /// Tears the scene down, emitting exits for everything retained.
    pub fn clear(&mut self, duration_ms: u32) -> Vec<ShapeDiff> {
        let mut exited: Vec<Key> = self.retained.keys().cloned().collect();
        exited.sort();
        exited
            .into_iter()
            .map(|key| {
                let (z_index, old) = self.retained.remove(&key).expect("key from retained");
                ShapeDiff::Exit {
                    key,
                    z_index,
                    old,
                    duration_ms,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use crate::frame::FrameTag;

    use super::*;

    fn rect(x: f64) -> Shape {
        Shape::rect(Rect::new(x, 0.0, x + 1.0, 1.0), css::ORANGE)
    }

    fn frame_of(entries: &[(&str, f64)]) -> LayoutFrame {
        let mut f = LayoutFrame::new(FrameTag::Full);
        for (name, x) in entries {
            f.push(Key::name(*name), 0, rect(*x));
        }
        f
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = SceneState::new();
        let diffs = scene.tick(&frame_of(&[("a", 0.0), ("b", 1.0)]), 300);
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, ShapeDiff::Enter { duration_ms: 300, .. }))
        );
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn identical_frame_produces_no_diffs() {
        let mut scene = SceneState::new();
        let frame = frame_of(&[("a", 0.0), ("b", 1.0)]);
        scene.tick(&frame, 300);
        let diffs = scene.tick(&frame, 300);
        assert!(diffs.is_empty(), "no-op tick must not touch any element");
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn update_starts_from_last_committed_geometry() {
        let mut scene = SceneState::new();
        scene.tick(&frame_of(&[("a", 0.0)]), 300);
        let diffs = scene.tick(&frame_of(&[("a", 4.0)]), 300);
        let [ShapeDiff::Update { old, new, .. }] = &diffs[..] else {
            panic!("expected a single update");
        };
        assert_eq!(*old, rect(0.0));
        assert_eq!(*new, rect(4.0));
    }

    #[test]
    fn removed_keys_exit_and_are_forgotten() {
        let mut scene = SceneState::new();
        scene.tick(&frame_of(&[("a", 0.0), ("b", 1.0)]), 300);
        let diffs = scene.tick(&frame_of(&[("b", 1.0)]), 300);
        let [ShapeDiff::Exit { key, .. }] = &diffs[..] else {
            panic!("expected a single exit");
        };
        assert_eq!(*key, Key::name("a"));
        assert_eq!(scene.len(), 1);
        assert!(scene.shape(&Key::name("a")).is_none());
    }

    #[test]
    fn advancing_a_window_updates_survivors_instead_of_re_entering() {
        let mut scene = SceneState::new();
        scene.tick(&frame_of(&[("2001", 0.0)]), 300);
        let diffs = scene.tick(&frame_of(&[("2001", 0.0), ("2002", 1.0)]), 300);
        assert_eq!(diffs.len(), 1, "unchanged survivor must produce no diff");
        assert!(matches!(&diffs[0], ShapeDiff::Enter { key, .. } if *key == Key::name("2002")));
    }

    #[test]
    fn clear_exits_everything_deterministically() {
        let mut scene = SceneState::new();
        scene.tick(&frame_of(&[("b", 1.0), ("a", 0.0)]), 300);
        let diffs = scene.clear(0);
        assert_eq!(diffs.len(), 2);
        assert_eq!(*diffs[0].key(), Key::name("a"));
        assert_eq!(*diffs[1].key(), Key::name("b"));
        assert!(scene.is_empty());
    }
}
