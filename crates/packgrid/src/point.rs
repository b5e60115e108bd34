//! Lightweight N‑dimensional point type used by curve strategies.

use std::{ops::Deref, vec::Vec};

use smallvec::SmallVec;

/// Compact N‑dimensional cell coordinate, inline up to rank 8.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(pub SmallVec<[u32; 8]>);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<SmallVec<[u32; 8]>>) -> Self {
        Self(vec.into())
    }

    /// Create a new `Point`, asserting the coordinate count matches `rank`.
    ///
    /// This is a convenience to avoid repeating rank checks at every callsite.
    pub fn new_with_rank(rank: usize, vec: impl Into<SmallVec<[u32; 8]>>) -> Self {
        let coords = vec.into();
        debug_assert_eq!(
            coords.len(),
            rank,
            "Point rank mismatch: expected {rank}, got {}",
            coords.len()
        );
        Self(coords)
    }

    /// Manhattan (taxicab) distance to `other`.
    ///
    /// Preconditions: both points must have the same rank and originate from
    /// the same curve. In debug builds a mismatch triggers a `debug_assert!`;
    /// in release builds the distance is computed over the shared prefix.
    pub fn manhattan(&self, other: &Self) -> u32 {
        debug_assert!(
            self.len() == other.len(),
            "Point::manhattan called with differing ranks: {} vs {}",
            self.len(),
            other.len()
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .sum()
    }

    /// Chebyshev (chessboard) distance to `other`.
    pub fn chebyshev(&self, other: &Self) -> u32 {
        debug_assert!(self.len() == other.len(), "Point rank mismatch");
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }

    /// Return the point's coordinates as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Rank (dimensionality) of the point.
    pub fn rank(&self) -> usize {
        self.0.len()
    }
}

impl From<Point> for Vec<u32> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&Point> for Vec<u32> {
    fn from(val: &Point) -> Self {
        val.0.to_vec()
    }
}

impl Deref for Point {
    type Target = [u32];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
