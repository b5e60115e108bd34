//! Moore curve: a closed Hilbert loop with an optionally stretched axis.
//!
//! The grid is tiled with mirrored 2D Hilbert blocks of side `2^order`, one
//! column ascending and one descending, so the final distance lands
//! grid‑adjacent to distance zero. A stretch factor lengthens the y axis by
//! adding block rows while keeping the loop closed.

use crate::{
    curve::SpaceFillingCurve,
    curves::hilbert2,
    error::{Error, Result},
    point::Point,
};

/// Closed‑loop 2D curve on a `2·2^order × 2·stretch·2^order` grid.
///
/// Unlike the open Hilbert strategies, the wrap step from
/// `max_distance − 1` back to distance 0 is also grid‑adjacent, which makes
/// the curve suitable for ring buffers of cells.
#[derive(Debug)]
pub struct MooreCurve {
    /// Bits per block axis; blocks have side `2^order`.
    order: u32,
    /// Number of block rows per column is `2·stretch`.
    stretch: u32,
    /// Per‑axis side lengths: `[2·2^order, 2·stretch·2^order]`.
    dims: [u32; 2],
    /// Cached total cell count.
    max: u32,
}

impl MooreCurve {
    /// Construct a loop from Hilbert blocks of side `2^order`, with the y
    /// axis stretched by `stretch`.
    ///
    /// `stretch == 1` gives the classic square Moore curve (four blocks).
    pub fn new(order: u32, stretch: u32) -> Result<Self> {
        if order == 0 {
            return Err(Error::invalid("order must be positive"));
        }
        if stretch == 0 {
            return Err(Error::invalid("stretch must be positive"));
        }
        if order >= 15 {
            // 2·2^order per column already exceeds the 32-bit cell budget.
            return Err(Error::Overflow {
                what: "curve index width",
                value: u64::from(order),
            });
        }
        let side = 1u32 << order;
        let width = u64::from(side) * 2;
        let height = u64::from(side) * 2 * u64::from(stretch);
        let total = width * height;
        if total > u64::from(u32::MAX) {
            return Err(Error::Overflow {
                what: "curve cell count",
                value: total,
            });
        }
        Ok(Self {
            order,
            stretch,
            dims: [width as u32, height as u32],
            max: total as u32,
        })
    }

    /// Side of one Hilbert block.
    fn block_side(&self) -> u32 {
        1 << self.order
    }

    /// Number of blocks in one column.
    fn blocks_per_column(&self) -> u32 {
        2 * self.stretch
    }
}

impl SpaceFillingCurve for MooreCurve {
    fn name(&self) -> &'static str {
        "moore"
    }

    fn dimensionality(&self) -> &[u32] {
        &self.dims
    }

    fn max_distance(&self) -> u32 {
        self.max
    }

    fn point(&self, distance: u32) -> Point {
        let d = distance.min(self.max - 1);
        let side = self.block_side();
        let cells = side * side;
        let column_blocks = self.blocks_per_column();
        let (block, local) = (d / cells, d % cells);
        let (bx, by) = hilbert2::point2(self.order, local);
        let (x, y) = if block < column_blocks {
            // Ascending left column, blocks mirrored in x.
            (side - 1 - bx, block * side + by)
        } else {
            // Descending right column, blocks mirrored in y.
            let row = 2 * column_blocks - 1 - block;
            (side + bx, row * side + (side - 1 - by))
        };
        Point::new_with_rank(2, [x, y].as_slice())
    }

    fn distance(&self, coords: &[u32]) -> Option<u32> {
        let &[x, y] = coords else { return None };
        if x >= self.dims[0] || y >= self.dims[1] {
            return None;
        }
        let side = self.block_side();
        let cells = side * side;
        let column_blocks = self.blocks_per_column();
        let row = y / side;
        let (block, bx, by) = if x < side {
            (row, side - 1 - x, y - row * side)
        } else {
            (
                2 * column_blocks - 1 - row,
                x - side,
                side - 1 - (y - row * side),
            )
        };
        Some(block * cells + hilbert2::distance2(self.order, bx, by))
    }
}
