//! Morphological transforms: translate, expand, fringe, flood and
//! line‑of‑sight radiation.
//!
//! Every transform decodes the on cells it touches, works on a scratch set
//! of curve distances, and re‑emits a canonical region through the
//! sorted‑distance emitter. On the table‑backed 2D curve both directions of
//! the coordinate mapping are O(1), which keeps these passes linear in the
//! touched cells (plus the final sort).

use std::collections::HashSet;

use crate::{
    bounds,
    curve::SpaceFillingCurve,
    error::{Error, Result},
    region::PackedRegion,
};

/// Distance shaping for [`radiate`].
///
/// Distances are doubled so the Euclidean approximation can weigh a diagonal
/// step as 3 (≈ 2·√2) without leaving integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Taxicab distance: diamond‑shaped ranges.
    Manhattan,
    /// Chessboard distance: square ranges.
    Chebyshev,
    /// Integer approximation of Euclidean distance: rounded ranges.
    Euclidean,
}

impl Metric {
    /// Twice the distance covered by an offset of `(dx, dy)`.
    fn doubled(self, dx: u32, dy: u32) -> u32 {
        let hi = dx.max(dy);
        let lo = dx.min(dy);
        match self {
            Self::Manhattan => 2 * (dx + dy),
            Self::Chebyshev => 2 * hi,
            Self::Euclidean => 2 * hi + lo,
        }
    }
}

/// Shift every on cell by `(dx, dy)`, clamping to the `width × height` box.
///
/// Cells pushed past an edge pile up on the border rather than vanishing;
/// overlaps fold together.
pub fn translate(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    dx: i32,
    dy: i32,
    width: u32,
    height: u32,
) -> Result<PackedRegion> {
    check_box(curve, width, height)?;
    let mut cells: HashSet<u32> = HashSet::new();
    for d in region.on_distances() {
        let x = (i64::from(curve.coordinate(d, 0)) + i64::from(dx))
            .clamp(0, i64::from(width) - 1) as u32;
        let y = (i64::from(curve.coordinate(d, 1)) + i64::from(dy))
            .clamp(0, i64::from(height) - 1) as u32;
        if let Some(moved) = curve.distance(&[x, y]) {
            cells.insert(moved);
        }
    }
    Ok(emit(cells))
}

/// Grow the region by `radius` cells in the 4‑ or 8‑neighbour metric,
/// within the `width × height` box.
pub fn expand(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    radius: u32,
    width: u32,
    height: u32,
    eight_way: bool,
) -> Result<PackedRegion> {
    check_box(curve, width, height)?;
    let mut cells: HashSet<u32> = HashSet::new();
    grow(curve, region, radius, width, height, eight_way, &mut cells);
    Ok(emit(cells))
}

/// The cells added by [`expand`] at `radius`: the expansion minus the input.
pub fn fringe(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    radius: u32,
    width: u32,
    height: u32,
    eight_way: bool,
) -> Result<PackedRegion> {
    check_box(curve, width, height)?;
    let mut cells: HashSet<u32> = HashSet::new();
    grow(curve, region, radius, width, height, eight_way, &mut cells);
    for d in region.on_distances() {
        cells.remove(&d);
    }
    Ok(emit(cells))
}

/// Successive one‑cell‑thick rings around the region.
///
/// Ring ℓ holds exactly the cells whose neighbourhood distance from the
/// input is ℓ; the rings are pairwise disjoint and their union with the
/// input equals `expand(region, layers)`.
pub fn fringes(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    layers: u32,
    width: u32,
    height: u32,
    eight_way: bool,
) -> Result<Vec<PackedRegion>> {
    check_box(curve, width, height)?;
    let mut covered: HashSet<u32> = region.on_distances().collect();
    let mut rings = Vec::with_capacity(layers as usize);
    for _ in 0..layers {
        let mut next: HashSet<u32> = HashSet::new();
        for &d in &covered {
            let x = curve.coordinate(d, 0);
            let y = curve.coordinate(d, 1);
            for (nx, ny) in neighbours(x, y, width, height, eight_way) {
                if let Some(nd) = curve.distance(&[nx, ny])
                    && !covered.contains(&nd)
                {
                    next.insert(nd);
                }
            }
        }
        covered.extend(next.iter().copied());
        rings.push(emit(next));
    }
    Ok(rings)
}

/// Breadth‑first growth from `seed`, confined to the on cells of `within`,
/// for up to `radius` steps.
pub fn flood(
    curve: &dyn SpaceFillingCurve,
    within: &PackedRegion,
    seed: &PackedRegion,
    radius: u32,
    eight_way: bool,
) -> Result<PackedRegion> {
    require_2d(curve)?;
    let allowed: HashSet<u32> = within.on_distances().collect();
    let mut visited: HashSet<u32> = seed
        .on_distances()
        .filter(|d| allowed.contains(d))
        .collect();
    let mut frontier: Vec<u32> = visited.iter().copied().collect();
    let dims = curve.dimensionality();
    for _ in 0..radius {
        let mut next = Vec::new();
        for &d in &frontier {
            let x = curve.coordinate(d, 0);
            let y = curve.coordinate(d, 1);
            for (nx, ny) in neighbours(x, y, dims[0], dims[1], eight_way) {
                if let Some(nd) = curve.distance(&[nx, ny])
                    && allowed.contains(&nd)
                    && visited.insert(nd)
                {
                    next.push(nd);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    Ok(emit(visited))
}

/// Line‑of‑sight growth: every cell of `within` visible from some seed cell
/// within the metric radius, where off cells of `within` block sight.
///
/// Recursive shadow casting over the eight octants around each seed; a cell
/// is emitted when its doubled metric distance is at most `2·radius` and it
/// is on in `within`.
pub fn radiate(
    curve: &dyn SpaceFillingCurve,
    within: &PackedRegion,
    seed: &PackedRegion,
    radius: u32,
    metric: Metric,
) -> Result<PackedRegion> {
    require_2d(curve)?;
    let allowed: HashSet<u32> = within.on_distances().collect();
    let mut caster = ShadowCaster {
        curve,
        allowed: &allowed,
        radius,
        metric,
        visible: HashSet::new(),
    };
    for d in seed.on_distances() {
        if !allowed.contains(&d) {
            continue;
        }
        caster.visible.insert(d);
        let cx = curve.coordinate(d, 0) as i64;
        let cy = curve.coordinate(d, 1) as i64;
        for octant in OCTANTS {
            caster.cast(cx, cy, 1, 1.0, 0.0, octant);
        }
    }
    let cells = caster.visible;
    Ok(emit(cells))
}

/// Axis multipliers mapping the scanned octant onto the other seven.
const OCTANTS: [[i64; 4]; 8] = [
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, -1, 1, 0],
    [-1, 0, 0, 1],
    [-1, 0, 0, -1],
    [0, -1, -1, 0],
    [0, 1, -1, 0],
    [1, 0, 0, -1],
];

/// State shared across one radiate pass.
struct ShadowCaster<'a> {
    /// The curve, for coordinate lookups both ways.
    curve: &'a dyn SpaceFillingCurve,
    /// On cells of the bounding region; anything else blocks sight.
    allowed: &'a HashSet<u32>,
    /// Sight radius in cells.
    radius: u32,
    /// Shape of the sight range.
    metric: Metric,
    /// Accumulated visible cells.
    visible: HashSet<u32>,
}

impl ShadowCaster<'_> {
    /// The distance of `(x, y)` when it is transparent, `None` for walls and
    /// cells outside the curve.
    fn transparent(&self, x: i64, y: i64) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let d = self.curve.distance(&[x as u32, y as u32])?;
        self.allowed.contains(&d).then_some(d)
    }

    /// Scan one octant between the slopes `start` and `end`, beginning at
    /// `row` cells from the origin.
    fn cast(&mut self, cx: i64, cy: i64, row: u32, mut start: f64, end: f64, octant: [i64; 4]) {
        if start < end {
            return;
        }
        let [xx, xy, yx, yy] = octant;
        let mut new_start = 0.0;
        let mut blocked = false;
        let mut dist = row;
        while dist <= self.radius && !blocked {
            let dy = -i64::from(dist);
            for dx in dy..=0 {
                let x = cx + dx * xx + dy * xy;
                let y = cy + dx * yx + dy * yy;
                let left_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
                let right_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);
                if start < right_slope {
                    continue;
                }
                if end > left_slope {
                    break;
                }
                let cell = self.transparent(x, y);
                let in_range =
                    self.metric.doubled(dx.unsigned_abs() as u32, dist) <= 2 * self.radius;
                if in_range && let Some(d) = cell {
                    self.visible.insert(d);
                }
                if blocked {
                    if cell.is_none() {
                        new_start = right_slope;
                    } else {
                        blocked = false;
                        start = new_start;
                    }
                } else if cell.is_none() && dist < self.radius {
                    blocked = true;
                    self.cast(cx, cy, dist + 1, start, left_slope, octant);
                    new_start = right_slope;
                }
            }
            dist += 1;
        }
    }
}

/// One‑step neighbourhood of `(x, y)` inside the box.
fn neighbours(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    eight_way: bool,
) -> impl Iterator<Item = (u32, u32)> {
    let (x, y) = (i64::from(x), i64::from(y));
    let offsets: &'static [(i64, i64)] = if eight_way {
        &[
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ]
    } else {
        &[(0, -1), (-1, 0), (1, 0), (0, 1)]
    };
    offsets.iter().filter_map(move |(ox, oy)| {
        let nx = x + ox;
        let ny = y + oy;
        (nx >= 0 && ny >= 0 && nx < i64::from(width) && ny < i64::from(height))
            .then_some((nx as u32, ny as u32))
    })
}

/// Collect the full `radius` neighbourhood of every on cell into `cells`.
fn grow(
    curve: &dyn SpaceFillingCurve,
    region: &PackedRegion,
    radius: u32,
    width: u32,
    height: u32,
    eight_way: bool,
    cells: &mut HashSet<u32>,
) {
    let r = i64::from(radius);
    for d in region.on_distances() {
        let x = i64::from(curve.coordinate(d, 0));
        let y = i64::from(curve.coordinate(d, 1));
        for oy in -r..=r {
            for ox in -r..=r {
                if !eight_way && ox.abs() + oy.abs() > r {
                    continue;
                }
                let nx = x + ox;
                let ny = y + oy;
                if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                    continue;
                }
                if let Some(nd) = curve.distance(&[nx as u32, ny as u32]) {
                    cells.insert(nd);
                }
            }
        }
    }
}

/// Sort a distance scratch set into a canonical region.
fn emit(cells: HashSet<u32>) -> PackedRegion {
    let mut distances: Vec<u32> = cells.into_iter().collect();
    distances.sort_unstable();
    PackedRegion::from_sorted_distances(distances)
}

/// Reject curves that are not two‑dimensional.
fn require_2d(curve: &dyn SpaceFillingCurve) -> Result<()> {
    if curve.rank() != 2 {
        return Err(Error::StrategyMismatch {
            got: 2,
            expected: curve.rank(),
        });
    }
    Ok(())
}

/// Validate a morphology bounding box against the curve.
fn check_box(curve: &dyn SpaceFillingCurve, width: u32, height: u32) -> Result<()> {
    require_2d(curve)?;
    bounds::check_against(&[width, height], curve.dimensionality())?;
    bounds::checked_volume(&[width, height])?;
    Ok(())
}
