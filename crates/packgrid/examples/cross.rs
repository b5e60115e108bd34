//! Minimal packed-region example: build a cross, measure it, flood it.

use std::error::Error;

use packgrid::{algebra, curves::Hilbert256, morph, pack};

fn main() -> Result<(), Box<dyn Error>> {
    let curve = Hilbert256::new(64)?;

    let vertical = pack::rectangle(&curve, 25, 2, 14, 60)?;
    let horizontal = pack::rectangle(&curve, 2, 25, 60, 14)?;
    let cross = algebra::union(&vertical, &horizontal);
    println!(
        "cross: {} on cells in {} runs",
        cross.count(),
        cross.runs().len()
    );

    let seed = pack::pack_one(&curve, &[26, 2])?;
    let flooded = morph::flood(&curve, &cross, &seed, 2, false)?;
    println!("flood from (26, 2), two steps: {} cells", flooded.count());

    let ring = morph::fringe(&curve, &cross, 1, 64, 64, false)?;
    assert!(algebra::intersection(&cross, &ring).is_empty());
    println!("one-cell fringe: {} cells", ring.count());

    Ok(())
}
