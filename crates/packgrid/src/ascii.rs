//! Printable debug codec for run sequences.
//!
//! Each 16‑bit run becomes three 7‑bit printable characters carrying 5, 5
//! and 6 bits, offset from `';'` so the alphabet stays clear of quotes and
//! backslashes. Handy for dumping regions into logs and fixtures; not a
//! stable wire format.

use crate::{
    error::{Error, Result},
    region::PackedRegion,
};

/// First character of the alphabet.
const BASE: u8 = b';';

/// Encode a region's runs into a printable string.
///
/// Runs wider than 16 bits cannot be represented and yield
/// [`Error::Overflow`]; regions on curves up to 65 536 cells always fit.
pub fn encode(region: &PackedRegion) -> Result<String> {
    let mut out = String::with_capacity(region.runs().len() * 3);
    for &run in region.runs() {
        if run > u32::from(u16::MAX) {
            return Err(Error::Overflow {
                what: "run length",
                value: u64::from(run),
            });
        }
        out.push(char::from(BASE + (run >> 11) as u8));
        out.push(char::from(BASE + ((run >> 6) & 0x1f) as u8));
        out.push(char::from(BASE + (run & 0x3f) as u8));
    }
    Ok(out)
}

/// Decode a string produced by [`encode`].
pub fn decode(text: &str) -> Result<PackedRegion> {
    let bytes = text.as_bytes();
    if !bytes.len().is_multiple_of(3) {
        return Err(Error::invalid("encoded length must be a multiple of 3"));
    }
    let mut runs = Vec::with_capacity(bytes.len() / 3);
    for chunk in bytes.chunks_exact(3) {
        let high = decode_char(chunk[0], 0x1f)?;
        let mid = decode_char(chunk[1], 0x1f)?;
        let low = decode_char(chunk[2], 0x3f)?;
        runs.push((high << 11) | (mid << 6) | low);
    }
    Ok(PackedRegion::from_runs(runs))
}

/// One character back to its bit field, bounded by `limit`.
fn decode_char(byte: u8, limit: u32) -> Result<u32> {
    let value = u32::from(byte.wrapping_sub(BASE));
    if byte < BASE || value > limit {
        return Err(Error::invalid(format!(
            "character {:?} is outside the run alphabet",
            char::from(byte)
        )));
    }
    Ok(value)
}
