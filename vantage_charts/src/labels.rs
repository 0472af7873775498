// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label collision relaxation.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Iteration cap for [`relax_labels`].
pub const RELAX_MAX_ITERS: usize = 32;

/// Pushes overlapping label positions apart until they are at least `min_spacing`.
///
/// This is a heuristic, not a constraint solver: for a bounded number of iterations,
/// each overlapping adjacent pair (in vertical order) is pushed apart symmetrically by
/// half its spacing deficit, which spreads movement in both directions instead of
/// shoving everything downward. A final forward cascade then settles any residual
/// overlap so the spacing guarantee is exact.
///
/// Relative order of the input positions is preserved. Returns the adjusted positions
/// in the same slot order as the input.
pub fn relax_labels(positions: &[f64], min_spacing: f64, max_iters: usize) -> Vec<f64> {
    let mut out: Vec<f64> = positions.to_vec();
    if out.len() < 2 || min_spacing <= 0.0 {
        return out;
    }

    // Work in vertical order but remember each label's original slot.
    let mut order: SmallVec<[usize; 16]> = (0..out.len()).collect();
    order.sort_by(|&a, &b| out[a].total_cmp(&out[b]));

    for _ in 0..max_iters.min(RELAX_MAX_ITERS) {
        let mut moved = false;
        for w in order.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            let deficit = min_spacing - (out[hi] - out[lo]);
            if deficit > 0.0 {
                out[lo] -= deficit / 2.0;
                out[hi] += deficit / 2.0;
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }

    // Symmetric passes converge toward the spacing from below; one forward cascade
    // makes the minimum exact.
    for w in order.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        if out[hi] < out[lo] + min_spacing {
            out[hi] = out[lo] + min_spacing;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_spaced(positions: &[f64], min_spacing: f64) {
        let mut sorted = positions.to_vec();
        sorted.sort_by(f64::total_cmp);
        for w in sorted.windows(2) {
            assert!(
                w[1] - w[0] >= min_spacing - 1e-9,
                "spacing violated: {} .. {}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn tight_cluster_spreads_to_minimum_spacing() {
        let out = relax_labels(&[10.0, 12.0, 14.0], 20.0, RELAX_MAX_ITERS);
        assert_spaced(&out, 20.0);
        assert!(out[0] < out[1] && out[1] < out[2], "order preserved");
    }

    #[test]
    fn well_spaced_labels_are_untouched() {
        let input = [0.0, 50.0, 100.0];
        assert_eq!(relax_labels(&input, 20.0, RELAX_MAX_ITERS), input);
    }

    #[test]
    fn unsorted_input_keeps_slot_order() {
        let out = relax_labels(&[40.0, 10.0, 41.0], 20.0, RELAX_MAX_ITERS);
        // Slot 1 was lowest and stays lowest; slots 0 and 2 keep their relation.
        assert!(out[1] < out[0]);
        assert!(out[0] < out[2]);
        assert_spaced(&out, 20.0);
    }

    #[test]
    fn single_label_is_a_no_op() {
        assert_eq!(relax_labels(&[33.0], 20.0, RELAX_MAX_ITERS), [33.0]);
    }
}
