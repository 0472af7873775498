// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback: a fixed-interval advance schedule over the window bound.
//!
//! There is no timer here. The host owns the event loop and calls [`Playback::tick`]
//! with its monotonic clock; playback only tracks the next deadline, which makes the
//! schedule deterministic and testable, and makes "exactly one pending timer" true by
//! construction.

/// Whether playback is armed, and when it next fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing scheduled.
    Stopped,
    /// Advancing; the next step fires at `deadline_ms`.
    Playing {
        /// Host-clock instant of the next advance, in milliseconds.
        deadline_ms: u64,
    },
}

/// The playback schedule for one chart instance.
#[derive(Clone, Debug)]
pub struct Playback {
    interval_ms: u64,
    start: f64,
    end: f64,
    step: f64,
    position: f64,
    state: PlaybackState,
}

impl Playback {
    /// Creates a stopped schedule over `[start, end]`, advancing by `step` every
    /// `interval_ms`.
    pub fn new(start: f64, end: f64, step: f64, interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            start,
            end: end.max(start),
            step: step.max(0.0),
            position: start,
            state: PlaybackState::Stopped,
        }
    }

    /// Returns the current window position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Moves the position directly (slider input), clamped to the playback range.
    pub fn seek(&mut self, position: f64) {
        self.position = position.clamp(self.start, self.end);
    }

    /// Returns `true` while a step is scheduled.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Returns the current schedule state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Starts (or restarts) playback from the host clock instant `now_ms`.
    ///
    /// Calling while already playing reschedules the single pending deadline; there is
    /// never a second concurrent schedule.
    pub fn play(&mut self, now_ms: u64) {
        if self.is_playing() {
            tracing::debug!("play while playing; restarting the schedule");
        }
        if self.position >= self.end {
            self.position = self.start;
        }
        self.state = PlaybackState::Playing {
            deadline_ms: now_ms + self.interval_ms,
        };
    }

    /// Stops playback, deterministically clearing the pending deadline.
    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Advances if the deadline has passed, returning the new window position.
    ///
    /// At most one step fires per call: a host that stalls past several deadlines gets
    /// one catch-up step and a fresh deadline, not a burst. Reaching the end of the
    /// range stops playback.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let PlaybackState::Playing { deadline_ms } = self.state else {
            return None;
        };
        if now_ms < deadline_ms {
            return None;
        }

        self.position = (self.position + self.step).min(self.end);
        if self.position >= self.end {
            self.state = PlaybackState::Stopped;
        } else {
            let next = deadline_ms + self.interval_ms;
            self.state = PlaybackState::Playing {
                deadline_ms: if next > now_ms {
                    next
                } else {
                    now_ms + self.interval_ms
                },
            };
        }
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn advances_only_at_deadlines() {
        let mut p = Playback::new(2000.0, 2003.0, 1.0, 100);
        p.play(0);
        assert_eq!(p.tick(50), None);
        assert_eq!(p.tick(100), Some(2001.0));
        assert_eq!(p.tick(120), None, "next deadline not yet reached");
        assert_eq!(p.tick(200), Some(2002.0));
    }

    #[test]
    fn stops_at_the_end_of_the_range() {
        let mut p = Playback::new(2000.0, 2001.0, 1.0, 100);
        p.play(0);
        assert_eq!(p.tick(100), Some(2001.0));
        assert!(!p.is_playing());
        assert_eq!(p.tick(500), None);
    }

    #[test]
    fn pause_clears_the_pending_deadline() {
        let mut p = Playback::new(2000.0, 2003.0, 1.0, 100);
        p.play(0);
        p.pause();
        assert_eq!(p.tick(1_000), None);
    }

    #[test]
    fn play_while_playing_keeps_a_single_schedule() {
        let mut p = Playback::new(2000.0, 2005.0, 1.0, 100);
        p.play(0);
        p.play(60);
        assert_eq!(p.tick(100), None, "old deadline was superseded");
        assert_eq!(p.tick(160), Some(2001.0));
    }

    #[test]
    fn replay_from_the_end_restarts_at_the_beginning() {
        let mut p = Playback::new(2000.0, 2001.0, 1.0, 100);
        p.play(0);
        p.tick(100);
        p.play(200);
        assert_eq!(p.position(), 2000.0);
        assert_eq!(p.tick(300), Some(2001.0));
    }

    #[test]
    fn stalled_hosts_get_one_catch_up_step() {
        let mut p = Playback::new(2000.0, 2010.0, 1.0, 100);
        p.play(0);
        assert_eq!(p.tick(950), Some(2001.0));
        assert_eq!(p.tick(960), None, "no burst after a stall");
    }
}
