//! End‑to‑end scenarios and algebraic laws for the packed region engine,
//! all on the table‑backed 2D Hilbert curve.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use packgrid::{
    PackedRegion, SpaceFillingCurve, algebra,
    curves::Hilbert256,
    morph, pack,
};
use proptest::prelude::*;

/// The full side-256 curve used by the literal scenarios.
fn hilbert256() -> Hilbert256 {
    Hilbert256::new(256).expect("side 256 is always constructible")
}

/// The cross of a 14×60 vertical and a 60×14 horizontal rectangle.
fn cross_region(curve: &Hilbert256) -> PackedRegion {
    let vertical = pack::rectangle(curve, 25, 2, 14, 60).expect("vertical bar");
    let horizontal = pack::rectangle(curve, 2, 25, 60, 14).expect("horizontal bar");
    algebra::union(&vertical, &horizontal)
}

#[test]
fn cross_union_matches_dense_pack() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    assert_eq!(cross.count(), 14 * 60 + 60 * 14 - 14 * 14);

    let grid: Vec<Vec<bool>> = (0..64u32)
        .map(|x| {
            (0..64u32)
                .map(|y| {
                    ((25..39).contains(&x) && (2..62).contains(&y))
                        || ((2..62).contains(&x) && (25..39).contains(&y))
                })
                .collect()
        })
        .collect();
    assert_eq!(cross, pack::pack_bools(&curve, &grid).expect("pack"));

    // Double complement lands exactly back on the cross.
    let twice = algebra::complement(&curve, &algebra::complement(&curve, &cross));
    assert_eq!(twice, cross);
}

#[test]
fn translate_round_trip() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    // Shift out and back inside a box wide enough that nothing clips.
    let there = morph::translate(&curve, &cross, 30, 30, 128, 128).expect("out");
    let back = morph::translate(&curve, &there, -30, -30, 128, 128).expect("back");
    assert_eq!(back, cross);
}

#[test]
fn translate_clamps_to_the_border() {
    let curve = hilbert256();
    let row = pack::rectangle(&curve, 60, 10, 4, 1).expect("row");
    let shifted = morph::translate(&curve, &row, 2, 0, 64, 64).expect("shift");
    // Cells pushed past x = 63 pile up on the border instead of vanishing.
    assert_eq!(shifted.count(), 2);
    assert!(shifted.contains(curve.distance(&[62, 10]).expect("lookup")));
    assert!(shifted.contains(curve.distance(&[63, 10]).expect("lookup")));
}

#[test]
fn rectangle_intersection_is_the_central_box() {
    let curve = hilbert256();
    let vertical = pack::rectangle(&curve, 25, 2, 14, 60).expect("vertical");
    let horizontal = pack::rectangle(&curve, 2, 25, 60, 14).expect("horizontal");
    let central = pack::rectangle(&curve, 25, 25, 14, 14).expect("central");
    assert_eq!(algebra::intersection(&vertical, &horizontal), central);
}

#[test]
fn flood_two_steps_inside_the_cross() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    let seed = pack::pack_one(&curve, &[26, 2]).expect("seed");
    let flooded = morph::flood(&curve, &cross, &seed, 2, false).expect("flood");
    let expected = pack::pack_several(
        &curve,
        &[
            [25u32, 2],
            [26, 2],
            [27, 2],
            [28, 2],
            [25, 3],
            [26, 3],
            [27, 3],
            [26, 4],
        ],
    )
    .expect("expected cells");
    assert_eq!(flooded, expected);
    // Flood confinement: nothing outside the bounding region.
    assert!(algebra::difference(&flooded, &cross).is_empty());
}

#[test]
fn fringe_complements_expand() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    for eight_way in [false, true] {
        let expanded = morph::expand(&curve, &cross, 1, 64, 64, eight_way).expect("expand");
        let ring = morph::fringe(&curve, &cross, 1, 64, 64, eight_way).expect("fringe");
        assert!(algebra::intersection(&ring, &cross).is_empty());
        assert_eq!(algebra::union(&cross, &ring), expanded);
        assert_eq!(algebra::difference(&expanded, &ring), cross);
    }
}

#[test]
fn expansion_is_monotonic() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    let mut previous = cross.clone();
    for radius in 0..4 {
        let grown = morph::expand(&curve, &cross, radius, 64, 64, true).expect("expand");
        assert!(algebra::difference(&cross, &grown).is_empty());
        assert!(algebra::difference(&previous, &grown).is_empty());
        previous = grown;
    }
}

#[test]
fn fringes_rings_are_one_cell_thick() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    let rings = morph::fringes(&curve, &cross, 3, 64, 64, false).expect("fringes");
    assert_eq!(rings.len(), 3);
    for (i, ring) in rings.iter().enumerate() {
        let layer = (i + 1) as u32;
        let outer = morph::expand(&curve, &cross, layer, 64, 64, false).expect("outer");
        let inner = morph::expand(&curve, &cross, layer - 1, 64, 64, false).expect("inner");
        // Each ring is exactly one expansion step, never the accumulated
        // thickened band.
        assert_eq!(ring, &algebra::difference(&outer, &inner));
    }
}

#[test]
fn count_splits_across_complement() {
    let curve = hilbert256();
    let cross = cross_region(&curve);
    let rest = algebra::complement(&curve, &cross);
    assert_eq!(cross.count() + rest.count(), curve.max_distance());
}

// ============================================================================
// Algebra laws over arbitrary grids
// ============================================================================

/// Pack a flat 256-bit vector as a 16×16 grid on the side-16 curve.
fn pack_bits(curve: &Hilbert256, bits: &[bool]) -> PackedRegion {
    let grid: Vec<Vec<bool>> = bits.chunks(16).map(<[bool]>::to_vec).collect();
    pack::pack_bools(curve, &grid).expect("pack")
}

proptest! {
    #[test]
    fn pack_round_trip(bits in proptest::collection::vec(any::<bool>(), 256)) {
        let curve = Hilbert256::new(16).expect("curve");
        let region = pack_bits(&curve, &bits);
        let cells = pack::unpack(&curve, &region, &[16, 16]).expect("unpack");
        prop_assert_eq!(cells, bits);
    }

    #[test]
    fn union_and_intersection_laws(
        a in proptest::collection::vec(any::<bool>(), 256),
        b in proptest::collection::vec(any::<bool>(), 256),
        c in proptest::collection::vec(any::<bool>(), 256),
    ) {
        let curve = Hilbert256::new(16).expect("curve");
        let ra = pack_bits(&curve, &a);
        let rb = pack_bits(&curve, &b);
        let rc = pack_bits(&curve, &c);

        // Commutativity and idempotence.
        prop_assert_eq!(algebra::union(&ra, &rb), algebra::union(&rb, &ra));
        prop_assert_eq!(algebra::intersection(&ra, &rb), algebra::intersection(&rb, &ra));
        prop_assert_eq!(algebra::union(&ra, &ra), ra.clone());
        prop_assert_eq!(algebra::intersection(&ra, &ra), ra.clone());

        // Associativity.
        prop_assert_eq!(
            algebra::union(&algebra::union(&ra, &rb), &rc),
            algebra::union(&ra, &algebra::union(&rb, &rc))
        );
        prop_assert_eq!(
            algebra::intersection(&algebra::intersection(&ra, &rb), &rc),
            algebra::intersection(&ra, &algebra::intersection(&rb, &rc))
        );
    }

    #[test]
    fn difference_laws(
        a in proptest::collection::vec(any::<bool>(), 256),
        b in proptest::collection::vec(any::<bool>(), 256),
    ) {
        let curve = Hilbert256::new(16).expect("curve");
        let ra = pack_bits(&curve, &a);
        let rb = pack_bits(&curve, &b);

        prop_assert!(algebra::difference(&ra, &ra).is_empty());
        prop_assert_eq!(
            algebra::symmetric_difference(&ra, &rb),
            algebra::union(&algebra::difference(&ra, &rb), &algebra::difference(&rb, &ra))
        );
        // Difference never reaches outside its left operand.
        prop_assert!(
            algebra::difference(&algebra::difference(&ra, &rb), &ra).is_empty()
        );
    }

    #[test]
    fn complement_laws(a in proptest::collection::vec(any::<bool>(), 256)) {
        let curve = Hilbert256::new(16).expect("curve");
        let ra = pack_bits(&curve, &a);
        let rc = algebra::complement(&curve, &ra);

        prop_assert_eq!(algebra::complement(&curve, &rc), ra.clone());
        prop_assert!(algebra::intersection(&ra, &rc).is_empty());
        prop_assert_eq!(ra.count() + rc.count(), curve.max_distance());
    }

    #[test]
    fn expand_equals_union_with_fringe(
        a in proptest::collection::vec(any::<bool>(), 256),
        radius in 0u32..3,
        eight_way in any::<bool>(),
    ) {
        let curve = Hilbert256::new(16).expect("curve");
        let ra = pack_bits(&curve, &a);
        let grown = morph::expand(&curve, &ra, radius, 16, 16, eight_way).expect("expand");
        let ring = morph::fringe(&curve, &ra, radius, 16, 16, eight_way).expect("fringe");
        prop_assert!(algebra::intersection(&ring, &ra).is_empty());
        prop_assert_eq!(algebra::union(&ra, &ring), grown.clone());
        prop_assert_eq!(algebra::difference(&grown, &ring), ra);
    }

    #[test]
    fn contains_agrees_with_unpack(a in proptest::collection::vec(any::<bool>(), 256)) {
        let curve = Hilbert256::new(16).expect("curve");
        let ra = pack_bits(&curve, &a);
        for d in 0..curve.max_distance() {
            let p = curve.point(d);
            let index = (p[0] * 16 + p[1]) as usize;
            prop_assert_eq!(ra.contains(d), a[index]);
        }
    }
}
