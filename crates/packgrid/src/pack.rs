//! Packing dense grids into regions and materialising regions back out.
//!
//! The packer walks the curve in distance order, so a dense input is turned
//! into runs in a single pass without ever sorting. Cells outside the
//! caller's bounding box count as off but still contribute to run lengths,
//! because runs measure curve distance, not bounded cells.

use crate::{
    bounds,
    curve::SpaceFillingCurve,
    error::{Error, Result},
    region::PackedRegion,
};

/// Pack the cells of `bounds_box` for which `predicate` holds.
///
/// This is the core walk behind every dense adapter: distances are visited
/// in order, the predicate is consulted only for cells inside the box, and
/// the walk stops early once every bounded cell has been seen.
pub fn pack_with(
    curve: &dyn SpaceFillingCurve,
    bounds_box: &[u32],
    predicate: impl Fn(&[u32]) -> bool,
) -> Result<PackedRegion> {
    bounds::check_against(bounds_box, curve.dimensionality())?;
    let volume = bounds::checked_volume(bounds_box)?;

    let mut runs: Vec<u32> = Vec::new();
    let mut skip = 0u32;
    let mut on = false;
    let mut seen = 0u32;
    for d in 0..curve.max_distance() {
        let point = curve.point(d);
        let inside = point.iter().zip(bounds_box.iter()).all(|(c, b)| c < b);
        let value = inside && predicate(&point);
        if value != on {
            runs.push(skip);
            skip = 0;
            on = !on;
        }
        skip += 1;
        if inside {
            seen += 1;
            if seen == volume {
                break;
            }
        }
    }
    if on {
        runs.push(skip);
    }
    Ok(PackedRegion::from_runs(runs))
}

/// Pack a 2D boolean grid. The first axis is x, the second y.
pub fn pack_bools(curve: &dyn SpaceFillingCurve, grid: &[Vec<bool>]) -> Result<PackedRegion> {
    let bounds_box = grid_bounds(grid)?;
    pack_with(curve, &bounds_box, |c| grid[c[0] as usize][c[1] as usize])
}

/// Pack a 2D numeric grid, keeping cells strictly above zero.
pub fn pack_threshold(curve: &dyn SpaceFillingCurve, grid: &[Vec<f64>]) -> Result<PackedRegion> {
    let bounds_box = grid_bounds(grid)?;
    pack_with(curve, &bounds_box, |c| {
        grid[c[0] as usize][c[1] as usize] > 0.0
    })
}

/// Pack a 2D character grid, keeping cells equal to `key`.
pub fn pack_matching(
    curve: &dyn SpaceFillingCurve,
    grid: &[Vec<char>],
    key: char,
) -> Result<PackedRegion> {
    let bounds_box = grid_bounds(grid)?;
    pack_with(curve, &bounds_box, |c| {
        grid[c[0] as usize][c[1] as usize] == key
    })
}

/// Materialise a region into a dense row‑major boolean array over
/// `bounds_box`. Cells outside the box are silently skipped.
pub fn unpack(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    bounds_box: &[u32],
) -> Result<Vec<bool>> {
    bounds::check_against(bounds_box, curve.dimensionality())?;
    let volume = bounds::checked_volume(bounds_box)?;
    let mut cells = vec![false; volume as usize];
    for (start, len) in region.on_runs() {
        for d in start..start + len {
            let point = curve.point(d);
            if let Some(index) = bounds::bounded_index(bounds_box, &point) {
                cells[index as usize] = true;
            }
        }
    }
    Ok(cells)
}

/// The region covering every cell of the curve.
pub fn full(curve: &dyn SpaceFillingCurve) -> PackedRegion {
    PackedRegion::from_runs([0, curve.max_distance()])
}

/// The region containing exactly one cell.
pub fn pack_one(curve: &dyn SpaceFillingCurve, coords: &[u32]) -> Result<PackedRegion> {
    let d = lookup(curve, coords)?;
    Ok(PackedRegion::from_sorted_distances([d]))
}

/// The union of the enumerated cells. Duplicates are folded.
pub fn pack_several<C: AsRef<[u32]>>(
    curve: &dyn SpaceFillingCurve,
    coords: &[C],
) -> Result<PackedRegion> {
    let mut distances = Vec::with_capacity(coords.len());
    for c in coords {
        distances.push(lookup(curve, c.as_ref())?);
    }
    distances.sort_unstable();
    Ok(PackedRegion::from_sorted_distances(distances))
}

/// An axis‑aligned 2D rectangle anchored at `(x, y)`, clamped to the curve.
pub fn rectangle(
    curve: &dyn SpaceFillingCurve,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<PackedRegion> {
    let dims = curve.dimensionality();
    if dims.len() != 2 {
        return Err(Error::StrategyMismatch {
            got: 2,
            expected: dims.len(),
        });
    }
    let x_end = x.saturating_add(width).min(dims[0]);
    let y_end = y.saturating_add(height).min(dims[1]);
    if x >= x_end || y >= y_end {
        return Ok(PackedRegion::new());
    }
    pack_with(curve, &[x_end, y_end], |c| c[0] >= x && c[1] >= y)
}

/// Distance of `coords`, with boundary errors mapped per the error policy.
fn lookup(curve: &dyn SpaceFillingCurve, coords: &[u32]) -> Result<u32> {
    if coords.len() != curve.rank() {
        return Err(Error::StrategyMismatch {
            got: coords.len(),
            expected: curve.rank(),
        });
    }
    curve.distance(coords).ok_or_else(|| Error::OutOfDomain {
        requested: coords.to_vec(),
        available: curve.dimensionality().to_vec(),
    })
}

/// Validate a dense 2D grid and return its bounding box.
fn grid_bounds<T>(grid: &[Vec<T>]) -> Result<[u32; 2]> {
    if grid.is_empty() {
        return Err(Error::invalid("grid must not be empty"));
    }
    let height = grid[0].len();
    if height == 0 {
        return Err(Error::invalid("grid rows must not be empty"));
    }
    if grid.iter().any(|row| row.len() != height) {
        return Err(Error::invalid("grid rows must all have the same length"));
    }
    Ok([grid.len() as u32, height as u32])
}
