//! Compact regions of grid cells, run‑length encoded along space‑filling
//! curves.
//!
//! A [`PackedRegion`] stores a subset of a bounded grid as alternating
//! off/on run lengths along a curve with strong spatial locality, so most
//! regions occupy a handful of integers instead of a boolean grid. Regions
//! combine with set algebra, transform morphologically and sample randomly,
//! all without materialising the grid.
//!
//! # Curves
//!
//! - 2D Hilbert, table‑backed up to side 256 ([`curves::Hilbert256`])
//! - N‑dimensional Hilbert ([`curves::HilbertNd`])
//! - Moore closed loop with a stretchable axis ([`curves::MooreCurve`])
//! - The 5×5×5 Puka atom ([`curves::Puka`])
//! - Puka‑Hilbert composites, 40³ and 1280³ ([`curves::PukaHilbert`])
//!
//! # Example
//!
//! ```
//! use packgrid::{algebra, curves::Hilbert256, morph, pack};
//!
//! let curve = Hilbert256::new(64)?;
//! let vertical = pack::rectangle(&curve, 25, 2, 14, 60)?;
//! let horizontal = pack::rectangle(&curve, 2, 25, 60, 14)?;
//!
//! let cross = algebra::union(&vertical, &horizontal);
//! assert_eq!(cross.count(), 14 * 60 + 60 * 14 - 14 * 14);
//!
//! let ring = morph::fringe(&curve, &cross, 1, 64, 64, false)?;
//! assert!(algebra::intersection(&cross, &ring).is_empty());
//! # Ok::<(), packgrid::Error>(())
//! ```

/// Set algebra over run streams.
pub mod algebra;
/// Printable debug codec for run sequences.
pub mod ascii;
/// Bounding boxes and bounded indexing.
pub mod bounds;
/// The curve strategy trait.
mod curve;
/// Implementations of specific space‑filling curves.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Morphological transforms.
pub mod morph;
/// Packing dense grids and materialising regions.
pub mod pack;
/// N‑dimensional points.
pub mod point;
/// The packed region value type.
mod region;
/// Region sampling through a pluggable random source.
pub mod sample;

pub use crate::{
    curve::SpaceFillingCurve,
    error::{Error, Result},
    point::Point,
    region::{OnDistances, OnRuns, PackedRegion},
};
