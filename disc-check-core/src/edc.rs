//! Error Detection Code checksum engine.

use crate::tables::EccTables;

/// Compute the 32-bit EDC over `data`, continuing from `seed`.
///
/// Seed 0 checksums a sector region in one shot. The streaming scanner
/// threads the running value through successive chunks to checksum a whole
/// image; checksumming a buffer in contiguous pieces this way gives the
/// same result as a single pass.
pub fn edc_compute(tables: &EccTables, seed: u32, data: &[u8]) -> u32 {
    data.iter().fold(seed, |edc, &byte| {
        (edc >> 8) ^ tables.edc[((edc ^ u32::from(byte)) & 0xFF) as usize]
    })
}

#[cfg(test)]
#[path = "tests/edc_tests.rs"]
mod tests;
