//! The [`SpaceFillingCurve`] trait implemented by every curve strategy.

use crate::point::Point;

/// A space‑filling curve over a bounded box of grid cells.
///
/// A strategy is a bijection between the half‑open distance range
/// `[0, max_distance)` and the cells of its box, with the adjacency property
/// that consecutive distances map to grid‑adjacent cells. That property is
/// what makes run‑length encoding along the curve space‑efficient, and every
/// strategy in this crate upholds it (closed‑loop curves additionally keep it
/// across the wrap from the last distance back to zero).
///
/// Strategies are immutable once constructed. Any lookup tables are built at
/// construction time, so a shared `&dyn SpaceFillingCurve` is safe to use
/// from any number of threads.
pub trait SpaceFillingCurve {
    /// Short human‑readable name of the strategy, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Per‑axis side lengths of the bounding box.
    fn dimensionality(&self) -> &[u32];

    /// Total number of cells traversed: the product of the side lengths.
    fn max_distance(&self) -> u32;

    /// The cell at curve distance `distance`.
    ///
    /// Out‑of‑range distances clamp to `max_distance − 1`; the clamp keeps
    /// run walks at the grid border total rather than failing.
    fn point(&self, distance: u32) -> Point;

    /// The curve distance of `coords`, or `None` when any coordinate falls
    /// outside its axis (the INVALID sentinel).
    ///
    /// Passing a slice whose rank differs from the curve's also yields
    /// `None`; the fallible APIs in [`crate::pack`] report that case as
    /// [`crate::Error::StrategyMismatch`] before querying the curve.
    fn distance(&self, coords: &[u32]) -> Option<u32>;

    /// Projection of `point(distance)` onto one axis.
    ///
    /// Table‑backed strategies override this to avoid materialising a
    /// [`Point`] in hot loops.
    fn coordinate(&self, distance: u32, axis: usize) -> u32 {
        self.point(distance)[axis]
    }

    /// Rank of the curve: the number of axes of its box.
    fn rank(&self) -> usize {
        self.dimensionality().len()
    }
}
