//! Hilbert curve strategies: the table‑backed 2D fast path and the general
//! N‑dimensional mapping.

use smallvec::SmallVec;

use crate::{
    curve::SpaceFillingCurve,
    curves::{hilbert2, hilbertn},
    error::{Error, Result},
    point::Point,
};

/// Largest side the table‑backed 2D strategy supports.
const MAX_TABLE_SIDE: u32 = 256;

/// Table‑backed 2D Hilbert curve for power‑of‑two sides up to 256.
///
/// Construction runs the 2D state machine once over every distance and
/// stores three parallel tables: per‑distance x, per‑distance y, and the
/// reverse distance keyed `x + side·y`. All queries after that are O(1)
/// lookups, which is what the morphology layer leans on.
#[derive(Debug)]
pub struct Hilbert256 {
    /// Per‑axis side lengths (both equal).
    dims: [u32; 2],
    /// x coordinate per distance.
    xs: Vec<u16>,
    /// y coordinate per distance.
    ys: Vec<u16>,
    /// Distance per cell, keyed `x + side·y`.
    dist: Vec<u16>,
}

impl Hilbert256 {
    /// Construct the curve for a power‑of‑two `side` in `[2, 256]`.
    pub fn new(side: u32) -> Result<Self> {
        if !side.is_power_of_two() || side < 2 || side > MAX_TABLE_SIDE {
            return Err(Error::invalid(format!(
                "side must be a power of two in [2, {MAX_TABLE_SIDE}], got {side}"
            )));
        }
        let order = side.trailing_zeros();
        let total = (side * side) as usize;
        let mut xs = vec![0u16; total];
        let mut ys = vec![0u16; total];
        let mut dist = vec![0u16; total];
        for d in 0..total as u32 {
            let (x, y) = hilbert2::point2(order, d);
            xs[d as usize] = x as u16;
            ys[d as usize] = y as u16;
            dist[(x + side * y) as usize] = d as u16;
        }
        tracing::debug!(side, total, "built 2D Hilbert lookup tables");
        Ok(Self {
            dims: [side, side],
            xs,
            ys,
            dist,
        })
    }

    /// The side length of the square box.
    pub fn side(&self) -> u32 {
        self.dims[0]
    }
}

impl SpaceFillingCurve for Hilbert256 {
    fn name(&self) -> &'static str {
        "hilbert256"
    }

    fn dimensionality(&self) -> &[u32] {
        &self.dims
    }

    fn max_distance(&self) -> u32 {
        self.dims[0] * self.dims[1]
    }

    fn point(&self, distance: u32) -> Point {
        let d = distance.min(self.max_distance() - 1) as usize;
        Point::new_with_rank(
            2,
            [u32::from(self.xs[d]), u32::from(self.ys[d])].as_slice(),
        )
    }

    fn distance(&self, coords: &[u32]) -> Option<u32> {
        match coords {
            [x, y] if *x < self.dims[0] && *y < self.dims[1] => {
                Some(u32::from(self.dist[(x + self.dims[0] * y) as usize]))
            }
            _ => None,
        }
    }

    fn coordinate(&self, distance: u32, axis: usize) -> u32 {
        let d = distance.min(self.max_distance() - 1) as usize;
        match axis {
            0 => u32::from(self.xs[d]),
            _ => u32::from(self.ys[d]),
        }
    }
}

/// General N‑dimensional Hilbert curve, computed per query.
///
/// Sides must be the same power of two on every axis, and the index width
/// `order · rank` must stay below 32 bits.
#[derive(Debug)]
pub struct HilbertNd {
    /// Per‑axis side lengths (all equal).
    dims: SmallVec<[u32; 8]>,
    /// Bits per axis.
    order: u32,
    /// Cached total cell count.
    max: u32,
}

impl HilbertNd {
    /// Construct a curve of the given `rank` with equal power‑of‑two `side`
    /// per axis.
    pub fn new(rank: u32, side: u32) -> Result<Self> {
        if rank == 0 {
            return Err(Error::invalid("rank must be positive"));
        }
        if !side.is_power_of_two() || side < 2 {
            return Err(Error::invalid(format!(
                "side must be a power of two >= 2, got {side}"
            )));
        }
        let order = side.trailing_zeros();
        let index_bits = order * rank;
        if index_bits >= 32 {
            return Err(Error::Overflow {
                what: "curve index width",
                value: u64::from(index_bits),
            });
        }
        Ok(Self {
            dims: SmallVec::from_elem(side, rank as usize),
            order,
            max: 1u32 << index_bits,
        })
    }
}

impl SpaceFillingCurve for HilbertNd {
    fn name(&self) -> &'static str {
        "hilbertnd"
    }

    fn dimensionality(&self) -> &[u32] {
        &self.dims
    }

    fn max_distance(&self) -> u32 {
        self.max
    }

    fn point(&self, distance: u32) -> Point {
        let d = distance.min(self.max - 1);
        Point::new_with_rank(
            self.dims.len(),
            hilbertn::point_nd(self.dims.len() as u32, self.order, d),
        )
    }

    fn distance(&self, coords: &[u32]) -> Option<u32> {
        if coords.len() != self.dims.len() {
            return None;
        }
        if coords.iter().zip(self.dims.iter()).any(|(c, s)| c >= s) {
            return None;
        }
        Some(hilbertn::distance_nd(
            self.dims.len() as u32,
            self.order,
            coords,
        ))
    }
}
