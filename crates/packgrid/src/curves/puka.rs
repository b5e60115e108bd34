//! Puka curve: a fixed 5×5×5 space‑filling atom.
//!
//! The atom is a Hamiltonian path over the 5³ box that enters at the corner
//! (0, 0, 0) and exits at the axis‑adjacent corner (4, 0, 0). Because entry
//! and exit corners differ along exactly one axis, the atom composes with an
//! outer Hilbert curve the same way Hilbert unit cells compose with each
//! other, which is what produces odd‑sided curves like 40³ and 1280³
//! (see [`super::PukaHilbert`]).

use std::sync::OnceLock;

use crate::{curve::SpaceFillingCurve, point::Point};

/// Cells of the atom in traversal order.
///
/// Serpentine x‑slabs; the last two slabs deviate from the plain serpentine
/// so the exit lands on (4, 0, 0) instead of the diagonal corner.
pub(crate) const ATOM: [[u8; 3]; 125] = [
    [0, 0, 0], [0, 1, 0], [0, 2, 0], [0, 3, 0], [0, 4, 0],
    [0, 4, 1], [0, 3, 1], [0, 2, 1], [0, 1, 1], [0, 0, 1],
    [0, 0, 2], [0, 1, 2], [0, 2, 2], [0, 3, 2], [0, 4, 2],
    [0, 4, 3], [0, 3, 3], [0, 2, 3], [0, 1, 3], [0, 0, 3],
    [0, 0, 4], [0, 1, 4], [0, 2, 4], [0, 3, 4], [0, 4, 4],
    [1, 4, 4], [1, 3, 4], [1, 2, 4], [1, 1, 4], [1, 0, 4],
    [1, 0, 3], [1, 1, 3], [1, 2, 3], [1, 3, 3], [1, 4, 3],
    [1, 4, 2], [1, 3, 2], [1, 2, 2], [1, 1, 2], [1, 0, 2],
    [1, 0, 1], [1, 1, 1], [1, 2, 1], [1, 3, 1], [1, 4, 1],
    [1, 4, 0], [1, 3, 0], [1, 2, 0], [1, 1, 0], [1, 0, 0],
    [2, 0, 0], [2, 1, 0], [2, 2, 0], [2, 3, 0], [2, 4, 0],
    [2, 4, 1], [2, 3, 1], [2, 2, 1], [2, 1, 1], [2, 0, 1],
    [2, 0, 2], [2, 1, 2], [2, 2, 2], [2, 3, 2], [2, 4, 2],
    [2, 4, 3], [2, 3, 3], [2, 2, 3], [2, 1, 3], [2, 0, 3],
    [2, 0, 4], [2, 1, 4], [2, 2, 4], [2, 3, 4], [2, 4, 4],
    [3, 4, 4], [3, 4, 3], [3, 4, 2], [3, 4, 1], [3, 4, 0],
    [3, 3, 0], [3, 3, 1], [3, 3, 2], [3, 3, 3], [3, 3, 4],
    [3, 2, 4], [3, 2, 3], [3, 2, 2], [3, 2, 1], [3, 2, 0],
    [3, 1, 0], [3, 0, 0], [3, 0, 1], [3, 1, 1], [3, 1, 2],
    [3, 1, 3], [3, 1, 4], [3, 0, 4], [3, 0, 3], [3, 0, 2],
    [4, 0, 2], [4, 0, 1], [4, 1, 1], [4, 1, 2], [4, 1, 3],
    [4, 0, 3], [4, 0, 4], [4, 1, 4], [4, 2, 4], [4, 2, 3],
    [4, 2, 2], [4, 2, 1], [4, 3, 1], [4, 3, 2], [4, 3, 3],
    [4, 3, 4], [4, 4, 4], [4, 4, 3], [4, 4, 2], [4, 4, 1],
    [4, 4, 0], [4, 3, 0], [4, 2, 0], [4, 1, 0], [4, 0, 0],
];

/// One oriented copy of the atom: forward cells plus the inverse table keyed
/// `x + 5y + 25z`.
#[derive(Debug)]
pub(crate) struct Orientation {
    /// Cell per local distance.
    pub(crate) cells: [[u8; 3]; 125],
    /// Local distance per cell key.
    pub(crate) inverse: [u8; 125],
}

/// The 24 oriented variants used by the Puka‑Hilbert composites: 3 exit axes
/// times 8 entry corners.
#[derive(Debug)]
pub(crate) struct Orientations {
    /// Variants indexed by [`variant_id`].
    pub(crate) variants: Vec<Orientation>,
}

/// Variant index for an entry `corner` (3 bits, x lowest) whose exit leaves
/// along `axis`.
#[inline]
pub(crate) fn variant_id(axis: usize, corner: usize) -> usize {
    axis * 8 + corner
}

/// Apply the orientation `(axis, corner)` to a canonical atom cell.
///
/// The canonical x axis maps onto `axis`, the remaining canonical axes onto
/// the following axes cyclically, and every output axis whose entry‑corner
/// bit is set is reflected (`4 − c`). Mapping the canonical entry (0, 0, 0)
/// onto the corner cell of `corner` and the canonical exit (4, 0, 0) onto
/// the corner adjacent along `axis` is exactly what the composite needs.
fn orient(cell: [u8; 3], axis: usize, corner: usize) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (slot, value) in cell.iter().enumerate() {
        let target = (axis + slot) % 3;
        out[target] = if corner >> target & 1 == 0 {
            *value
        } else {
            4 - *value
        };
    }
    out
}

/// Oriented variant tables, built once on first use.
pub(crate) fn orientations() -> &'static Orientations {
    static TABLES: OnceLock<Orientations> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut variants = Vec::with_capacity(24);
        for axis in 0..3 {
            for corner in 0..8 {
                let mut cells = [[0u8; 3]; 125];
                let mut inverse = [0u8; 125];
                for (t, cell) in ATOM.iter().enumerate() {
                    let c = orient(*cell, axis, corner);
                    cells[t] = c;
                    inverse[usize::from(c[0]) + 5 * usize::from(c[1]) + 25 * usize::from(c[2])] =
                        t as u8;
                }
                variants.push(Orientation { cells, inverse });
            }
        }
        tracing::debug!("built 24 oriented Puka atom tables");
        Orientations { variants }
    })
}

/// The bare 5×5×5 Puka curve.
#[derive(Debug)]
pub struct Puka {
    /// Per‑axis side lengths, all 5.
    dims: [u32; 3],
}

impl Puka {
    /// Construct the fixed 5³ atom curve.
    pub fn new() -> Self {
        Self { dims: [5, 5, 5] }
    }
}

impl Default for Puka {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceFillingCurve for Puka {
    fn name(&self) -> &'static str {
        "puka"
    }

    fn dimensionality(&self) -> &[u32] {
        &self.dims
    }

    fn max_distance(&self) -> u32 {
        125
    }

    fn point(&self, distance: u32) -> Point {
        let cell = ATOM[distance.min(124) as usize];
        Point::new_with_rank(
            3,
            [u32::from(cell[0]), u32::from(cell[1]), u32::from(cell[2])].as_slice(),
        )
    }

    fn distance(&self, coords: &[u32]) -> Option<u32> {
        let &[x, y, z] = coords else { return None };
        if x >= 5 || y >= 5 || z >= 5 {
            return None;
        }
        let key = (x + 5 * y + 25 * z) as usize;
        // The canonical variant (axis 0, corner 0) is the identity.
        Some(u32::from(orientations().variants[0].inverse[key]))
    }
}
