//! Error Correction Code product-code verifier.
//!
//! A sector's ECC block is a two-dimensional parity code over the 4-byte
//! address and the data payload: 86 P columns of 24 bytes each, and 52 Q
//! diagonals of 43 bytes each. Verification recomputes each column's two
//! parity bytes and compares them against the stored block; nothing is
//! corrected.

use crate::tables::EccTables;

/// Total size of a sector's ECC block (P and Q parity together).
pub const ECC_SIZE: usize = 276;

/// Size of the P-parity sub-block; Q parity occupies the remainder.
const P_PARITY_SIZE: usize = 172;

/// Address used for Mode 2 sectors, whose ECC is computed as if the
/// header address were zero.
pub const ZERO_ADDRESS: [u8; 4] = [0, 0, 0, 0];

/// Verify one parity plane (P or Q) against its stored parity bytes.
///
/// The plane covers a virtual buffer of `major_count * minor_count` bytes
/// formed by concatenating `address` and `data`; indices wrap modulo that
/// size. Returns true only if every column's parity and extended-parity
/// bytes exactly match the stored block.
///
/// The Q plane sweeps across the P parity bytes as well, so `data` must
/// extend through them.
pub fn check_plane(
    tables: &EccTables,
    address: &[u8; 4],
    data: &[u8],
    major_count: usize,
    minor_count: usize,
    major_stride: usize,
    minor_stride: usize,
    ecc: &[u8],
) -> bool {
    let size = major_count * minor_count;
    for major in 0..major_count {
        let mut index = (major >> 1) * major_stride + (major & 1);
        let mut ecc_a = 0u8;
        let mut ecc_b = 0u8;
        for _ in 0..minor_count {
            let byte = if index < 4 {
                address[index]
            } else {
                data[index - 4]
            };
            index += minor_stride;
            if index >= size {
                index -= size;
            }
            ecc_a ^= byte;
            ecc_b ^= byte;
            ecc_a = tables.forward[ecc_a as usize];
        }
        let parity = tables.backward[(tables.forward[ecc_a as usize] ^ ecc_b) as usize];
        if ecc[major] != parity || ecc[major + major_count] != (parity ^ ecc_b) {
            return false;
        }
    }
    true
}

/// Verify both parity planes of a sector's 276-byte ECC block.
///
/// The P/Q geometry is fixed by the CD-ROM standard and is not
/// configurable.
pub fn check_sector_ecc(tables: &EccTables, address: &[u8; 4], data: &[u8], ecc: &[u8]) -> bool {
    check_plane(tables, address, data, 86, 24, 2, 86, &ecc[..P_PARITY_SIZE])
        && check_plane(tables, address, data, 52, 43, 86, 88, &ecc[P_PARITY_SIZE..])
}

#[cfg(test)]
#[path = "tests/ecc_tests.rs"]
mod tests;
