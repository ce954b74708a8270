//! Raw CD-ROM sector layout and per-sector classification.
//!
//! Recognized layouts:
//!
//! - Mode 1: sync + header, 2048-byte payload, EDC, 8 reserved bytes, ECC
//! - Mode 2 (XA) Form 1: sync + header, duplicated subheader flags,
//!   2048-byte payload, EDC, ECC (computed with a zero address)
//! - Mode 2 (XA) Form 2: sync + header, duplicated subheader flags,
//!   2324-byte payload, EDC only
//!
//! Classification is a pure function of the sector bytes; it never looks
//! at neighboring sectors and never panics on short input.

use std::fmt;

use crate::ecc::{ZERO_ADDRESS, check_sector_ecc};
use crate::edc::edc_compute;
use crate::tables::EccTables;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Sync pattern at the start of every raw (2352-byte) sector.
pub const SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Raw sector size: sync + header + payload + EDC/ECC trailer.
pub const RAW_SECTOR_SIZE: usize = 2352;

/// Headerless Mode 2 (XA) sector size: subheader + payload + trailer.
pub const XA_SECTOR_SIZE: usize = 2336;

/// BCD minute:second:frame address in the raw sector header.
const ADDRESS_OFFSET: usize = 0x00C;

/// Mode byte in the raw sector header.
const MODE_OFFSET: usize = 0x00F;

/// XA subheader submode byte within a raw sector.
const SUBMODE_OFFSET: usize = 0x012;

/// Submode bit marking a Form 2 sector.
const SUBMODE_FORM2: u8 = 0x20;

/// Start of the mode-dependent payload area: Mode 1 data, or the XA
/// subheader of a raw Mode 2 sector.
const PAYLOAD_OFFSET: usize = 0x010;

/// Mode 1 EDC position; the checksum covers everything before it.
const MODE1_EDC_OFFSET: usize = 0x810;

/// Reserved bytes between the Mode 1 EDC and ECC, required to be zero.
const MODE1_RESERVED: std::ops::Range<usize> = 0x814..0x81C;

/// Mode 1 ECC block position.
const MODE1_ECC_OFFSET: usize = 0x81C;

/// Form 1 EDC position within the XA payload.
const FORM1_EDC_OFFSET: usize = 0x808;

/// Form 1 ECC block position within the XA payload.
const FORM1_ECC_OFFSET: usize = 0x80C;

/// Form 2 EDC position within the XA payload.
const FORM2_EDC_OFFSET: usize = 0x91C;

/// End of the region a Mode 0 sector must keep zeroed.
const MODE0_PAYLOAD_END: usize = 0x930;

fn read_le32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// The 4 header bytes (BCD address + mode) the Mode 1 ECC covers.
fn header_address(window: &[u8]) -> [u8; 4] {
    [
        window[ADDRESS_OFFSET],
        window[ADDRESS_OFFSET + 1],
        window[ADDRESS_OFFSET + 2],
        window[MODE_OFFSET],
    ]
}

// ---------------------------------------------------------------------------
// Sector address
// ---------------------------------------------------------------------------

/// BCD minute:second:frame sector address, taken verbatim from the header
/// and displayed in hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf(pub [u8; 3]);

impl Msf {
    /// Address bytes of a raw sector header.
    pub fn from_header(sector: &[u8]) -> Self {
        Self([
            sector[ADDRESS_OFFSET],
            sector[ADDRESS_OFFSET + 1],
            sector[ADDRESS_OFFSET + 2],
        ])
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}:{:02X}:{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

/// On-disc format variant of a classified window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorFormat {
    /// Not recognized as a data sector; plain literal bytes.
    Literal,
    /// 2352-byte Mode 1 sector.
    Mode1,
    /// 2336-byte Mode 2 (XA) Form 1 sector.
    Mode2Form1,
    /// 2336-byte Mode 2 (XA) Form 2 sector.
    Mode2Form2,
}

impl SectorFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Literal => "Literal",
            Self::Mode1 => "Mode 1",
            Self::Mode2Form1 => "Mode 2 form 1",
            Self::Mode2Form2 => "Mode 2 form 2",
        }
    }
}

/// Result of the pure format detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub format: SectorFormat,
    /// False when the window is structurally Mode 1 shaped but its EDC or
    /// ECC does not verify.
    pub intact: bool,
}

/// Classify a window by its on-disc format.
///
/// Mode 1 is recognized structurally (sync pattern, mode byte, zeroed
/// reserved bytes); a Mode-1-shaped window whose EDC/ECC fail is still
/// reported as Mode 1, with `intact` cleared. Mode 2 windows are the
/// headerless 2336-byte XA layout, recognized by the duplicated subheader
/// flags and told apart by which integrity checks verify. Anything else,
/// including a window shorter than 2336 bytes, is `Literal`.
pub fn classify(tables: &EccTables, window: &[u8]) -> Classification {
    if window.len() >= RAW_SECTOR_SIZE
        && window[..SYNC_PATTERN.len()] == SYNC_PATTERN
        && window[MODE_OFFSET] == 0x01
        && window[MODE1_RESERVED].iter().all(|&b| b == 0)
    {
        let intact = check_sector_ecc(
            tables,
            &header_address(window),
            &window[PAYLOAD_OFFSET..],
            &window[MODE1_ECC_OFFSET..MODE1_ECC_OFFSET + crate::ecc::ECC_SIZE],
        ) && edc_compute(tables, 0, &window[..MODE1_EDC_OFFSET])
            == read_le32(window, MODE1_EDC_OFFSET);
        return Classification {
            format: SectorFormat::Mode1,
            intact,
        };
    }

    if window.len() < XA_SECTOR_SIZE || window[0..4] != window[4..8] {
        return Classification {
            format: SectorFormat::Literal,
            intact: true,
        };
    }

    if check_sector_ecc(
        tables,
        &ZERO_ADDRESS,
        window,
        &window[FORM1_ECC_OFFSET..FORM1_ECC_OFFSET + crate::ecc::ECC_SIZE],
    ) && edc_compute(tables, 0, &window[..FORM1_EDC_OFFSET]) == read_le32(window, FORM1_EDC_OFFSET)
    {
        return Classification {
            format: SectorFormat::Mode2Form1,
            intact: true,
        };
    }

    if edc_compute(tables, 0, &window[..FORM2_EDC_OFFSET]) == read_le32(window, FORM2_EDC_OFFSET) {
        return Classification {
            format: SectorFormat::Mode2Form2,
            intact: true,
        };
    }

    Classification {
        format: SectorFormat::Literal,
        intact: true,
    }
}

// ---------------------------------------------------------------------------
// Whole-image scan verification
// ---------------------------------------------------------------------------

/// Sector category recorded by the whole-image scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorKind {
    /// Missing sync pattern, unknown mode byte, or a short tail window.
    NonData,
    /// Mode 0: payload required to be all zero.
    Mode0,
    Mode1,
    Mode2Form1,
    Mode2Form2,
}

impl SectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NonData => "Non-data",
            Self::Mode0 => "Mode 0",
            Self::Mode1 => "Mode 1",
            Self::Mode2Form1 => "Mode 2 form 1",
            Self::Mode2Form2 => "Mode 2 form 2",
        }
    }
}

/// Outcome of verifying one raw-sector window during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorVerdict {
    pub kind: SectorKind,
    /// False when the sector fails its format's integrity checks.
    pub intact: bool,
    /// Header address, present for sync-matched data sectors.
    pub address: Option<Msf>,
}

impl SectorVerdict {
    fn non_data() -> Self {
        Self {
            kind: SectorKind::NonData,
            intact: true,
            address: None,
        }
    }
}

/// Verify one raw-sector window of a whole-image scan.
///
/// Unlike [`classify`], this always works on the raw 2352-byte layout and
/// dispatches on the header mode byte, so a Mode 2 sector's form is chosen
/// by its submode flag bit rather than by which checks happen to pass.
/// Both forms share mode byte 0x02 and must be told apart before the right
/// check can be applied.
pub fn scan_sector(tables: &EccTables, window: &[u8]) -> SectorVerdict {
    if window.len() < RAW_SECTOR_SIZE || window[..SYNC_PATTERN.len()] != SYNC_PATTERN {
        return SectorVerdict::non_data();
    }

    let address = Msf::from_header(window);
    match window[MODE_OFFSET] {
        0x00 => {
            let intact = window[PAYLOAD_OFFSET..MODE0_PAYLOAD_END]
                .iter()
                .all(|&b| b == 0);
            SectorVerdict {
                kind: SectorKind::Mode0,
                intact,
                address: Some(address),
            }
        }
        0x01 => {
            let intact = check_sector_ecc(
                tables,
                &header_address(window),
                &window[PAYLOAD_OFFSET..],
                &window[MODE1_ECC_OFFSET..MODE1_ECC_OFFSET + crate::ecc::ECC_SIZE],
            ) && edc_compute(tables, 0, &window[..MODE1_EDC_OFFSET])
                == read_le32(window, MODE1_EDC_OFFSET)
                && window[MODE1_RESERVED].iter().all(|&b| b == 0);
            SectorVerdict {
                kind: SectorKind::Mode1,
                intact,
                address: Some(address),
            }
        }
        0x02 => {
            let payload = &window[PAYLOAD_OFFSET..];
            if window[SUBMODE_OFFSET] & SUBMODE_FORM2 != 0 {
                let intact = edc_compute(tables, 0, &payload[..FORM2_EDC_OFFSET])
                    == read_le32(payload, FORM2_EDC_OFFSET);
                SectorVerdict {
                    kind: SectorKind::Mode2Form2,
                    intact,
                    address: Some(address),
                }
            } else {
                let intact = check_sector_ecc(
                    tables,
                    &ZERO_ADDRESS,
                    payload,
                    &payload[FORM1_ECC_OFFSET..FORM1_ECC_OFFSET + crate::ecc::ECC_SIZE],
                ) && edc_compute(tables, 0, &payload[..FORM1_EDC_OFFSET])
                    == read_le32(payload, FORM1_EDC_OFFSET);
                SectorVerdict {
                    kind: SectorKind::Mode2Form1,
                    intact,
                    address: Some(address),
                }
            }
        }
        _ => SectorVerdict::non_data(),
    }
}

#[cfg(test)]
#[path = "tests/sector_tests.rs"]
mod tests;
