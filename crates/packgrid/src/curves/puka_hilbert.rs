//! Puka‑Hilbert composites: odd‑sided 3D curves of side `5·2^order`.
//!
//! An outer Hilbert curve orders the cells of a `2^order` cube and a Puka
//! atom is substituted for each cell. The atom's orientation comes from the
//! entry and exit corners of its outer cell, which are read off the low
//! coordinate bits of the order + 1 Hilbert evaluation at sub‑distances `8k`
//! and `8k + 7`. Hilbert self‑similarity keeps those sub‑distances inside
//! cell `k`, and curve continuity hands each atom an entry corner
//! face‑adjacent to its predecessor's exit, so the composite inherits the
//! adjacency invariant end to end.

use crate::{
    curve::SpaceFillingCurve,
    curves::{
        hilbertn,
        puka::{self, variant_id},
    },
    error::{Error, Result},
    point::Point,
};

/// Composite curves up to this many cells precompute full lookup tables.
const TABLE_LIMIT: u32 = 1 << 20;

/// Full forward and reverse tables for a small composite.
#[derive(Debug)]
struct PhTables {
    /// x per distance.
    xs: Vec<u16>,
    /// y per distance.
    ys: Vec<u16>,
    /// z per distance.
    zs: Vec<u16>,
    /// Distance per cell, keyed `x + side·y + side²·z`.
    dist: Vec<u32>,
}

/// Odd‑sided 3D curve built from an outer Hilbert cube of Puka atoms.
///
/// `order` 3 is the table‑backed 40³ curve; `order` 8 is the 1280³ curve,
/// which answers queries by direct computation (its dense tables would not
/// fit a sensible memory budget, and three outer evaluations per query keep
/// it fast enough).
#[derive(Debug)]
pub struct PukaHilbert {
    /// Bits per axis of the outer cube.
    order: u32,
    /// Per‑axis side lengths, all `5·2^order`.
    dims: [u32; 3],
    /// Cached total cell count: `125·8^order`.
    max: u32,
    /// Dense tables for small composites.
    tables: Option<PhTables>,
}

impl PukaHilbert {
    /// Construct the composite of side `5·2^order`, `1 ≤ order ≤ 8`.
    pub fn new(order: u32) -> Result<Self> {
        if order == 0 {
            return Err(Error::invalid("order must be positive (side 5 is Puka)"));
        }
        if order > 8 {
            return Err(Error::Overflow {
                what: "curve cell count",
                value: 125u64 << (3 * order),
            });
        }
        let side = 5u32 << order;
        let max = 125u32 << (3 * order);
        let mut curve = Self {
            order,
            dims: [side, side, side],
            max,
            tables: None,
        };
        if max <= TABLE_LIMIT {
            curve.tables = Some(curve.build_tables());
            tracing::debug!(side, max, "built Puka-Hilbert lookup tables");
        }
        Ok(curve)
    }

    /// The 40³ composite.
    pub fn cube40() -> Result<Self> {
        Self::new(3)
    }

    /// The 1280³ composite.
    pub fn cube1280() -> Result<Self> {
        Self::new(8)
    }

    /// Atom orientation for outer cell `k`, from the entry/exit corners at
    /// the doubled order.
    fn variant_of(&self, k: u32) -> usize {
        let enter = hilbertn::point_nd(3, self.order + 1, 8 * k);
        let exit = hilbertn::point_nd(3, self.order + 1, 8 * k + 7);
        let corner =
            (enter[0] & 1) | ((enter[1] & 1) << 1) | ((enter[2] & 1) << 2);
        let exit_corner = (exit[0] & 1) | ((exit[1] & 1) << 1) | ((exit[2] & 1) << 2);
        let flipped = corner ^ exit_corner;
        debug_assert_eq!(flipped.count_ones(), 1, "corners must differ on one axis");
        variant_id(flipped.trailing_zeros() as usize, corner as usize)
    }

    /// Compute the cell at `distance` without tables.
    fn point_direct(&self, distance: u32) -> [u32; 3] {
        let (k, t) = (distance / 125, distance % 125);
        let cell = hilbertn::point_nd(3, self.order, k);
        let local = puka::orientations().variants[self.variant_of(k)].cells[t as usize];
        [
            5 * cell[0] + u32::from(local[0]),
            5 * cell[1] + u32::from(local[1]),
            5 * cell[2] + u32::from(local[2]),
        ]
    }

    /// Compute the distance of an in‑range cell without tables.
    fn distance_direct(&self, x: u32, y: u32, z: u32) -> u32 {
        let cell = [x / 5, y / 5, z / 5];
        let k = hilbertn::distance_nd(3, self.order, &cell);
        let key = (x % 5 + 5 * (y % 5) + 25 * (z % 5)) as usize;
        let t = puka::orientations().variants[self.variant_of(k)].inverse[key];
        125 * k + u32::from(t)
    }

    /// Tabulate every distance of a small composite.
    fn build_tables(&self) -> PhTables {
        let total = self.max as usize;
        let side = u64::from(self.dims[0]);
        let mut tables = PhTables {
            xs: vec![0; total],
            ys: vec![0; total],
            zs: vec![0; total],
            dist: vec![0; total],
        };
        for d in 0..self.max {
            let [x, y, z] = self.point_direct(d);
            tables.xs[d as usize] = x as u16;
            tables.ys[d as usize] = y as u16;
            tables.zs[d as usize] = z as u16;
            let key = u64::from(x) + side * (u64::from(y) + side * u64::from(z));
            tables.dist[key as usize] = d;
        }
        tables
    }
}

impl SpaceFillingCurve for PukaHilbert {
    fn name(&self) -> &'static str {
        "puka-hilbert"
    }

    fn dimensionality(&self) -> &[u32] {
        &self.dims
    }

    fn max_distance(&self) -> u32 {
        self.max
    }

    fn point(&self, distance: u32) -> Point {
        let d = distance.min(self.max - 1);
        let coords = match &self.tables {
            Some(t) => [
                u32::from(t.xs[d as usize]),
                u32::from(t.ys[d as usize]),
                u32::from(t.zs[d as usize]),
            ],
            None => self.point_direct(d),
        };
        Point::new_with_rank(3, coords.as_slice())
    }

    fn distance(&self, coords: &[u32]) -> Option<u32> {
        let &[x, y, z] = coords else { return None };
        if x >= self.dims[0] || y >= self.dims[1] || z >= self.dims[2] {
            return None;
        }
        Some(match &self.tables {
            Some(t) => {
                let side = u64::from(self.dims[0]);
                let key = u64::from(x) + side * (u64::from(y) + side * u64::from(z));
                t.dist[key as usize]
            }
            None => self.distance_direct(x, y, z),
        })
    }
}
