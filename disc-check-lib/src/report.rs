//! Scan tallies and summary rendering.

use std::fmt;

use serde::Serialize;

use disc_check_core::{SectorKind, SectorVerdict};

/// Accumulated results of one image scan.
///
/// Owned by the caller for the duration of a scan; two scans of the same
/// bytes produce equal reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub non_data_sectors: u64,
    pub mode0_sectors: u64,
    pub mode0_errors: u64,
    pub mode1_sectors: u64,
    pub mode1_errors: u64,
    pub mode2_form1_sectors: u64,
    pub mode2_form1_errors: u64,
    pub mode2_form2_sectors: u64,
    pub mode2_form2_errors: u64,
    pub total_sectors: u64,
    pub total_errors: u64,
    /// Bytes consumed from the image, including any final partial window.
    pub bytes_scanned: u64,
    /// EDC accumulated over every byte of the image.
    pub image_edc: u32,
    /// CRC32 of every byte of the image.
    pub image_crc32: u32,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified window. Moves exactly one sector counter and
    /// at most one error counter, plus the global totals.
    pub fn record(&mut self, verdict: &SectorVerdict) {
        self.total_sectors += 1;
        let error = !verdict.intact;
        match verdict.kind {
            SectorKind::NonData => self.non_data_sectors += 1,
            SectorKind::Mode0 => {
                self.mode0_sectors += 1;
                if error {
                    self.mode0_errors += 1;
                }
            }
            SectorKind::Mode1 => {
                self.mode1_sectors += 1;
                if error {
                    self.mode1_errors += 1;
                }
            }
            SectorKind::Mode2Form1 => {
                self.mode2_form1_sectors += 1;
                if error {
                    self.mode2_form1_errors += 1;
                }
            }
            SectorKind::Mode2Form2 => {
                self.mode2_form2_sectors += 1;
                if error {
                    self.mode2_form2_errors += 1;
                }
            }
        }
        if error {
            self.total_errors += 1;
        }
    }

    /// Whether any per-sector integrity error was recorded.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Non-data sectors........ {}", self.non_data_sectors)?;
        writeln!(f, "Mode 0 sectors.......... {}", self.mode0_sectors)?;
        writeln!(f, "\twith errors..... {}", self.mode0_errors)?;
        writeln!(f, "Mode 1 sectors.......... {}", self.mode1_sectors)?;
        writeln!(f, "\twith errors..... {}", self.mode1_errors)?;
        writeln!(f, "Mode 2 form 1 sectors... {}", self.mode2_form1_sectors)?;
        writeln!(f, "\twith errors..... {}", self.mode2_form1_errors)?;
        writeln!(f, "Mode 2 form 2 sectors... {}", self.mode2_form2_sectors)?;
        writeln!(f, "\twith errors..... {}", self.mode2_form2_errors)?;
        writeln!(f, "Total sectors........... {}", self.total_sectors)?;
        writeln!(f, "Total errors............ {}", self.total_errors)?;
        writeln!(f, "Image EDC............... {:08X}", self.image_edc)?;
        writeln!(f, "Image CRC32............. {:08X}", self.image_crc32)
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
