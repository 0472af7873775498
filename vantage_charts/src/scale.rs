// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scales.
//!
//! Scales map data values into scene coordinates. The spec/instance split mirrors how
//! descriptors work: a spec carries domain decisions (which are per-chart policy), and
//! instantiation binds a concrete output range once the chart area is known.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How a numeric axis domain tracks playback.
///
/// This is a per-chart decision, declared on the descriptor and never recomputed ad
/// hoc: `Window` rescales as the playback window advances (tight but jumpy), `Global`
/// fixes the domain to the all-time maximum (stable but sparse early on).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Domain follows the maximum of the currently visible window.
    #[default]
    Window,
    /// Domain is the precomputed maximum across all time.
    Global,
}

impl DomainPolicy {
    /// Resolves the domain maximum for this policy.
    ///
    /// Falls back to the window maximum when no global maximum was precomputed, and to
    /// `1.0` when there is nothing visible at all, so a degenerate domain never reaches
    /// the scales.
    pub fn resolve_max(&self, window_max: Option<f64>, global_max: Option<f64>) -> f64 {
        let max = match self {
            Self::Window => window_max,
            Self::Global => global_max.or(window_max),
        };
        match max {
            Some(m) if m > 0.0 => m,
            _ => 1.0,
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` values onto `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-extent domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 - d0 == 0.0 {
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns round-numbered tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Specification for a linear scale: a domain and whether to round it outward to tick
/// boundaries before instantiation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Round the domain outward to nice tick boundaries.
    pub nice: bool,
}

impl ScaleLinearSpec {
    /// Creates a linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables nice-domain rounding.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Instantiates a concrete scale for an output range, applying `nice` if set.
    pub fn instantiate(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        let domain = if self.nice {
            let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
            match (ticks.first(), ticks.last()) {
                (Some(&lo), Some(&hi)) if lo != hi => (lo, hi),
                _ => self.domain,
            }
        } else {
            self.domain
        };
        ScaleLinear::new(domain, range)
    }
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale covering `count` bands over `range` with default padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding, in band-width units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the computed width of one band.
    pub fn band_width(&self) -> f64 {
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (self.range.1 - self.range.0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the leading edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = self.range.0.min(self.range.1);
        start + bw * self.padding_outer + step * index as f64
    }
}

/// Specification for a band scale (count and padding, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBandSpec {
    /// Creates a band scale spec with default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Instantiates a concrete scale for an output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

/// A discrete point scale: evenly spaced positions without width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a point scale with half-step outer padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.5,
        }
    }

    /// Returns the position of the point at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let n = self.count as f64;
        let start = self.range.0.min(self.range.1);
        if n <= 1.0 {
            // A single point sits mid-range.
            return start + (self.range.1 - self.range.0).abs() / 2.0;
        }
        let span = (self.range.1 - self.range.0).abs();
        let step = span / ((n - 1.0) + 2.0 * self.padding);
        start + self.padding * step + step * index as f64
    }
}

/// Round-numbered ticks covering `[lo, hi]`, snapped outward to step multiples.
fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if lo == hi {
        return alloc::vec![lo];
    }
    let step = nice_step((hi - lo) / count as f64);
    if step == 0.0 {
        return alloc::vec![lo, hi];
    }

    let first = (lo / step).floor() * step;
    let mut ticks = Vec::new();
    let mut i = 0_u32;
    loop {
        let v = first + step * f64::from(i);
        ticks.push(v);
        // Runaway guard for pathological step/span ratios.
        if v >= hi || !v.is_finite() || i >= 10_000 {
            break;
        }
        i += 1;
    }
    ticks
}

/// Snaps a raw step to the nearest 1/2/5/10 multiple of its power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let factor = match raw / magnitude {
        r if r >= 7.5 => 10.0,
        r if r >= 3.5 => 5.0,
        r if r >= 1.5 => 2.0,
        _ => 1.0,
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_and_degenerate_domains() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 0.0);
        let flat = ScaleLinear::new((5.0, 5.0), (100.0, 0.0));
        assert_eq!(flat.map(5.0), 100.0);
    }

    #[test]
    fn band_positions_are_monotonic_and_padded() {
        let b = ScaleBand::new((0.0, 100.0), 4);
        assert!(b.band_width() > 0.0);
        assert!(b.x(0) < b.x(1));
        assert!(b.x(0) > 0.0, "outer padding offsets the first band");
    }

    #[test]
    fn single_point_sits_mid_range() {
        let p = ScalePoint::new((0.0, 100.0), 1);
        assert_eq!(p.x(0), 50.0);
    }

    #[test]
    fn window_policy_follows_visible_max() {
        let policy = DomainPolicy::Window;
        assert_eq!(policy.resolve_max(Some(10.0), Some(99.0)), 10.0);
        assert_eq!(DomainPolicy::Global.resolve_max(Some(10.0), Some(99.0)), 99.0);
        // Nothing visible: clamp to a viable domain instead of 0/NaN.
        assert_eq!(policy.resolve_max(None, None), 1.0);
    }
}
