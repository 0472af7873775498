// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! Shaping happens downstream of layout, so label placement and tooltip sizing work
//! against a measurer callback rather than real glyph metrics. Hosts with a text stack
//! plug their own implementation in; [`HeuristicTextMeasurer`] is good enough for
//! layout decisions like truncation and collision relaxation.

extern crate alloc;

use alloc::string::String;

/// A minimal text measurement interface used during layout.
pub trait TextMeasurer {
    /// Returns `(width, height)` in scene units for `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Estimates text extents from character count alone.
///
/// Assumes an average glyph width of ~0.6em and a height of 1em, which is close enough
/// for latin UI text at chart scales.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Truncates `text` with a trailing ellipsis so it measures no wider than `max_width`.
///
/// Returns the input unchanged when it already fits. If even one character plus the
/// ellipsis does not fit, returns a bare ellipsis rather than an empty string so the
/// label stays visibly present.
pub fn truncate_to_width(
    text: &str,
    max_width: f64,
    font_size: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    if measurer.measure(text, font_size).0 <= max_width {
        return String::from(text);
    }
    let mut out = String::new();
    for (i, _) in text.char_indices() {
        let mut candidate = String::from(&text[..i]);
        candidate.push('\u{2026}');
        if measurer.measure(&candidate, font_size).0 > max_width {
            break;
        }
        out = candidate;
    }
    if out.is_empty() {
        String::from("\u{2026}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_scales_with_length_and_size() {
        let m = HeuristicTextMeasurer;
        let (w1, h) = m.measure("abc", 10.0);
        let (w2, _) = m.measure("abcdef", 10.0);
        assert_eq!(w1, 18.0);
        assert_eq!(w2, 2.0 * w1);
        assert_eq!(h, 10.0);
    }

    #[test]
    fn truncation_keeps_fitting_text_intact() {
        let m = HeuristicTextMeasurer;
        assert_eq!(truncate_to_width("short", 1000.0, 12.0, &m), "short");
    }

    #[test]
    fn truncation_appends_ellipsis_when_too_wide() {
        let m = HeuristicTextMeasurer;
        let out = truncate_to_width("a very long label", 40.0, 10.0, &m);
        assert!(out.ends_with('\u{2026}'));
        assert!(m.measure(&out, 10.0).0 <= 40.0);
    }

    #[test]
    fn hopeless_width_yields_bare_ellipsis() {
        let m = HeuristicTextMeasurer;
        assert_eq!(truncate_to_width("label", 1.0, 10.0, &m), "\u{2026}");
    }
}
