//! Set algebra computed directly on run streams, without decompression.
//!
//! Binary operations co‑iterate the two run sequences, advancing to the
//! nearest state flip on either side and emitting an output run whenever the
//! combined state changes. An exhausted side is pinned off, which both
//! terminates the walk and canonicalises the output (a trailing off stretch
//! is simply never emitted).

use crate::{
    curve::SpaceFillingCurve,
    error::Result,
    pack,
    region::PackedRegion,
};

/// Cells on in either region.
pub fn union(a: &PackedRegion, b: &PackedRegion) -> PackedRegion {
    combine(a, b, |x, y| x || y)
}

/// Cells on in both regions.
pub fn intersection(a: &PackedRegion, b: &PackedRegion) -> PackedRegion {
    combine(a, b, |x, y| x && y)
}

/// Cells on in `a` but not in `b`.
pub fn difference(a: &PackedRegion, b: &PackedRegion) -> PackedRegion {
    combine(a, b, |x, y| x && !y)
}

/// Cells on in exactly one of the two regions.
pub fn symmetric_difference(a: &PackedRegion, b: &PackedRegion) -> PackedRegion {
    combine(a, b, |x, y| x != y)
}

/// Cells of the curve not on in `region`.
///
/// Structurally O(1): toggle the leading zero and account for the uncovered
/// tail of the curve. A region covering the whole curve complements to a
/// form without a zero‑length trailing run; the canonicaliser keeps the
/// involution exact.
pub fn complement(curve: &dyn SpaceFillingCurve, region: &PackedRegion) -> PackedRegion {
    let max = curve.max_distance();
    let covered = region.covered();
    debug_assert!(covered <= max, "region covers more than its curve");
    let runs = region.runs();
    let mut out: Vec<u32> = Vec::with_capacity(runs.len() + 2);
    if runs.first() == Some(&0) {
        out.extend_from_slice(&runs[1..]);
    } else {
        out.push(0);
        out.extend_from_slice(runs);
    }
    if covered < max {
        out.push(max - covered);
    }
    PackedRegion::from_runs(out)
}

/// `region` with the cell at `coords` turned on.
pub fn insert(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    coords: &[u32],
) -> Result<PackedRegion> {
    Ok(union(region, &pack::pack_one(curve, coords)?))
}

/// `region` with the cell at `coords` turned off.
pub fn remove(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    coords: &[u32],
) -> Result<PackedRegion> {
    Ok(difference(region, &pack::pack_one(curve, coords)?))
}

/// Walks one run sequence flip by flip.
struct RunCursor<'a> {
    /// The runs being walked.
    runs: &'a [u32],
    /// Index of the run the cursor is inside.
    idx: usize,
    /// State during the current run.
    on: bool,
    /// Distance at which the state next changes; `u32::MAX` once exhausted.
    flip: u32,
}

impl<'a> RunCursor<'a> {
    /// Position a cursor at distance zero.
    fn new(region: &'a PackedRegion) -> Self {
        let runs = region.runs();
        Self {
            runs,
            idx: 0,
            on: false,
            flip: runs.first().copied().unwrap_or(u32::MAX),
        }
    }

    /// Step past the current flip.
    fn advance(&mut self) {
        self.idx += 1;
        match self.runs.get(self.idx) {
            Some(run) => {
                self.on = !self.on;
                self.flip += run;
            }
            None => {
                self.on = false;
                self.flip = u32::MAX;
            }
        }
    }
}

/// Co‑iterate two run sequences under the boolean combiner `f`.
fn combine(a: &PackedRegion, b: &PackedRegion, f: impl Fn(bool, bool) -> bool) -> PackedRegion {
    let mut left = RunCursor::new(a);
    let mut right = RunCursor::new(b);
    let mut out: Vec<u32> = Vec::new();
    let mut state = false;
    let mut skip = 0u32;
    let mut pos = 0u32;
    loop {
        let desired = f(left.on, right.on);
        if desired != state {
            out.push(skip);
            skip = 0;
            state = desired;
        }
        let next = left.flip.min(right.flip);
        if next == u32::MAX {
            break;
        }
        skip += next - pos;
        pos = next;
        if left.flip == next {
            left.advance();
        }
        if right.flip == next {
            right.advance();
        }
    }
    debug_assert!(!state, "combined state must settle off at exhaustion");
    PackedRegion::from_runs(out)
}
